//! Weather widget poller.

use crate::Result;
use crate::config::WidgetConfig;
use skiff_types::WeatherSnapshot;
use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;

const TIMEOUT: Duration = Duration::from_secs(10);

/// Sleep after a failed fetch before trying again.
const RETRY_DELAY: Duration = Duration::from_secs(30);

/// Spawn the weather poll loop. The task exits once every receiver is
/// dropped.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn weather_channel(config: &WidgetConfig) -> Result<watch::Receiver<WeatherSnapshot>> {
    let client = reqwest::Client::builder().timeout(TIMEOUT).build()?;
    let url = format!("{}/weather", config.api_base);
    let poll = Duration::from_secs(config.weather_poll_secs);
    let (tx, rx) = watch::channel(WeatherSnapshot::default());

    tokio::spawn(async move {
        loop {
            let delay = match fetch(&client, &url).await {
                Ok(snapshot) => {
                    if tx.send(snapshot).is_err() {
                        break;
                    }
                    poll
                }
                Err(e) => {
                    debug!("weather fetch failed: {e}");
                    RETRY_DELAY
                }
            };
            tokio::time::sleep(delay).await;
        }
    });

    Ok(rx)
}

async fn fetch(client: &reqwest::Client, url: &str) -> Result<WeatherSnapshot> {
    Ok(client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?)
}

/// Weather description for display: capitalized, preferring the English
/// text, placeholder dash when the backend has nothing yet.
#[must_use]
pub fn describe(snapshot: &WeatherSnapshot) -> String {
    snapshot
        .description_en
        .as_deref()
        .or(snapshot.description_ru.as_deref())
        .filter(|d| !d.is_empty())
        .map_or_else(|| "—".to_string(), capitalize)
}

/// Temperature to one decimal, placeholder dash when absent.
#[must_use]
pub fn temperature(snapshot: &WeatherSnapshot) -> String {
    snapshot
        .temp
        .map_or_else(|| "—".to_string(), |t| format!("{t:.1}"))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
