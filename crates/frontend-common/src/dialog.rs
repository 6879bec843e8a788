//! Dialog backend over the native `alert` / `confirm` prompts

use async_trait::async_trait;
use dashboard_core::dialog::{DialogBackend, DialogRequest, DialogResult};

/// Renders dialogs with `window.alert` and `window.confirm`
///
/// Native prompts cannot be themed or closed by a timer; the palette and
/// timer in the request are only logged.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDialogs;

#[async_trait(?Send)]
impl DialogBackend for BrowserDialogs {
    async fn fire(&self, request: DialogRequest) -> DialogResult {
        tracing::debug!(
            icon = ?request.icon,
            background = request.options.background,
            timer = ?request.timer,
            "Showing dialog"
        );

        let Some(window) = web_sys::window() else {
            return DialogResult::default();
        };

        let message = match &request.text {
            Some(text) => format!("{}\n\n{}", request.title, text),
            None => request.title.clone(),
        };

        if request.show_cancel_button {
            let is_confirmed = window.confirm_with_message(&message).unwrap_or(false);
            DialogResult { is_confirmed }
        } else {
            let _ = window.alert_with_message(&message);
            DialogResult { is_confirmed: true }
        }
    }
}
