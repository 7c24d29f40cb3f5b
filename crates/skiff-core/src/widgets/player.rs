//! Now-playing widget poller and live progress tracking.

use crate::Result;
use crate::config::WidgetConfig;
use skiff_types::PlayerState;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, watch};
use tracing::debug;

const TIMEOUT: Duration = Duration::from_secs(10);

/// Remaining-track window under which an off-schedule poll is requested,
/// so the widget flips to the next track without waiting a full interval.
const FORCE_REFRESH_REMAIN: Duration = Duration::from_millis(600);

/// Minimum spacing between forced polls.
const FORCE_REFRESH_SPACING: Duration = Duration::from_millis(1500);

/// Handle to the now-playing poll loop.
pub struct PlayerFeed {
    pub state: watch::Receiver<PlayerState>,
    refresh: mpsc::Sender<()>,
}

impl PlayerFeed {
    /// Ask the poller for an off-schedule refresh. A full queue means one
    /// is already pending and the request is dropped.
    pub fn request_refresh(&self) {
        let _ = self.refresh.try_send(());
    }
}

/// Spawn the now-playing poll loop. Fetches run strictly one at a time; a
/// slow response delays the next tick instead of overlapping it.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn player_feed(config: &WidgetConfig) -> Result<PlayerFeed> {
    let client = reqwest::Client::builder().timeout(TIMEOUT).build()?;
    let url = format!("{}/spotify", config.api_base);
    let poll = Duration::from_millis(config.player_poll_millis);
    let (tx, rx) = watch::channel(PlayerState::default());
    let (refresh_tx, mut refresh_rx) = mpsc::channel::<()>(1);

    tokio::spawn(async move {
        loop {
            match fetch(&client, &url).await {
                Ok(state) => {
                    if tx.send(state).is_err() {
                        break;
                    }
                }
                Err(e) => debug!("player fetch failed: {e}"),
            }
            tokio::select! {
                () = tokio::time::sleep(poll) => {}
                received = refresh_rx.recv() => {
                    if received.is_none() {
                        break;
                    }
                }
            }
        }
    });

    Ok(PlayerFeed {
        state: rx,
        refresh: refresh_tx,
    })
}

async fn fetch(client: &reqwest::Client, url: &str) -> Result<PlayerState> {
    Ok(client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?)
}

/// Live progress between polls. Owns the last sync instant and the
/// forced-refresh timestamp; one tracker per rendered player widget.
#[derive(Debug)]
pub struct ProgressTracker {
    base_ms: u64,
    synced_at: Instant,
    last_forced: Option<Instant>,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_ms: 0,
            synced_at: Instant::now(),
            last_forced: None,
        }
    }

    /// Record a fresh server-side progress value.
    pub fn sync(&mut self, state: &PlayerState) {
        self.base_ms = state.track.as_ref().map_or(0, |track| track.progress);
        self.synced_at = Instant::now();
    }

    /// Interpolated progress in milliseconds, clamped to the track length.
    /// A paused track holds at its last synced position.
    #[must_use]
    pub fn live_ms(&self, state: &PlayerState) -> u64 {
        let Some(track) = state.track.as_ref().filter(|_| state.is_active) else {
            return 0;
        };
        if !track.is_playing {
            return self.base_ms.min(track.duration);
        }
        let elapsed = u64::try_from(self.synced_at.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.base_ms.saturating_add(elapsed).min(track.duration)
    }

    /// Progress as a 0-100 percentage.
    #[must_use]
    // track durations are far below 2^52 ms, the division is exact enough
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self, state: &PlayerState) -> f64 {
        let Some(track) = state.track.as_ref() else {
            return 0.0;
        };
        if track.duration == 0 {
            return 0.0;
        }
        let pct = self.live_ms(state) as f64 / track.duration as f64 * 100.0;
        pct.clamp(0.0, 100.0)
    }

    /// Whether the track tail warrants an off-schedule poll, at most once
    /// per spacing window.
    pub fn should_force_refresh(&mut self, state: &PlayerState) -> bool {
        let Some(track) = state.track.as_ref() else {
            return false;
        };
        if !track.is_playing || track.duration == 0 {
            return false;
        }
        let remain = track.duration.saturating_sub(self.live_ms(state));
        if Duration::from_millis(remain) > FORCE_REFRESH_REMAIN {
            return false;
        }
        if self
            .last_forced
            .is_some_and(|at| at.elapsed() < FORCE_REFRESH_SPACING)
        {
            return false;
        }
        self.last_forced = Some(Instant::now());
        true
    }
}

/// Format milliseconds as m:ss for progress display.
#[must_use]
pub fn fmt_time(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{}:{:02}", secs / 60, secs % 60)
}
