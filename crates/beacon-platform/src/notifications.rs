use beacon_common::{NotificationOptions, Notifier, PlatformError};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Sends a native notification to the user.
///
/// - macOS: Uses `osascript` to display a native notification.
/// - Other platforms: Logs the notification.
pub fn notify(title: &str, body: &str) -> Result<(), PlatformError> {
    platform_notify(title, body)
}

/// Quote a string for an AppleScript string literal.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn applescript_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' | '\r' => quoted.push(' '),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(target_os = "macos")]
fn platform_notify(title: &str, body: &str) -> Result<(), PlatformError> {
    let script = format!(
        "display notification {} with title {}",
        applescript_quote(body),
        applescript_quote(title)
    );

    let output = std::process::Command::new("osascript")
        .arg("-e")
        .arg(&script)
        .output()
        .map_err(|e| PlatformError::NotificationError(format!("failed to run osascript: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PlatformError::NotificationError(format!(
            "osascript failed: {stderr}"
        )));
    }

    info!("native notification sent");
    Ok(())
}

#[cfg(not(target_os = "macos"))]
fn platform_notify(title: &str, body: &str) -> Result<(), PlatformError> {
    info!(title, body, "notification (log only)");
    Ok(())
}

/// Desktop notifications for the presence widget.
///
/// The message becomes the title and `options.body` the text. Icon and
/// tag have no native counterpart and are dropped.
#[derive(Debug, Clone, Copy)]
pub struct NativeNotifier {
    granted: bool,
}

impl NativeNotifier {
    pub fn new(granted: bool) -> Self {
        Self { granted }
    }
}

impl Notifier for NativeNotifier {
    fn is_granted(&self) -> bool {
        self.granted
    }

    fn show_notification(&self, message: &str, options: &NotificationOptions) {
        dispatch(message, options);
    }
}

/// Deliver on the blocking pool when called from a runtime, so a slow
/// `osascript` never stalls the worker running the poll loop.
fn dispatch(message: &str, options: &NotificationOptions) -> Option<JoinHandle<()>> {
    let title = message.to_string();
    let body = options.body.clone();
    let tag = options.tag.clone();
    let deliver = move || {
        if let Err(e) = notify(&title, &body) {
            warn!(error = %e, tag = %tag, "native notification failed");
        }
    };

    match Handle::try_current() {
        Ok(handle) => Some(handle.spawn_blocking(deliver)),
        Err(_) => {
            deliver();
            None
        }
    }
}
