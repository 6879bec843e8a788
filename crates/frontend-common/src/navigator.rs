//! Full-page navigation and blocking alerts

use dashboard_core::{Navigator, Notifier};

/// Navigates by assigning `window.location.href`
///
/// This reloads the application, which drops every in-memory state tied to
/// the old session.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(path, "No window, cannot redirect");
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            tracing::error!(path, error = ?e, "Redirect failed");
        }
    }
}

/// Shows messages with `window.alert`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                let _ = window.alert_with_message(message);
            }
            None => tracing::warn!(message, "No window, alert dropped"),
        }
    }
}
