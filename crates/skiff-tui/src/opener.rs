//! Navigation boundary: hand resolved URLs to the host opener.

use skiff_core::overlay::{NavTarget, Navigation};
use std::process::{Command, Stdio};
use tracing::debug;

/// Spawn a command with all I/O redirected to null (fire and forget)
fn spawn_silent(program: &str, args: &[&str]) {
    let _ = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
}

/// Open the destination in the default browser. A terminal has no tab of
/// its own; both targets reach the same opener and the browser decides.
pub fn open(navigation: &Navigation) {
    let target = match navigation.target {
        NavTarget::NewTab => "new tab",
        NavTarget::SameTab => "same tab",
    };
    debug!("opening {} ({target})", navigation.url);
    spawn_silent("xdg-open", &[navigation.url.as_str()]);
}
