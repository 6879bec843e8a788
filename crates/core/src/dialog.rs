//! Themed success / error / confirmation dialogs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

/// Source of the user's colour-scheme preference
pub trait ThemeSource {
    fn prefers_dark(&self) -> bool;

    fn theme(&self) -> Theme {
        Theme::from_prefers_dark(self.prefers_dark())
    }
}

/// A fixed theme, independent of any system setting
impl ThemeSource for Theme {
    fn prefers_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Palette shared by every dialog
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogOptions {
    pub background: &'static str,
    pub color: &'static str,
    pub confirm_button_color: &'static str,
    pub cancel_button_color: &'static str,
}

impl DialogOptions {
    pub const fn for_theme(theme: Theme) -> Self {
        let (background, color) = match theme {
            Theme::Dark => ("#1e293b", "#f8fafc"),
            Theme::Light => ("#ffffff", "#111827"),
        };
        Self {
            background,
            color,
            confirm_button_color: "#4f46e5",
            cancel_button_color: "#ef4444",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogIcon {
    Success,
    Error,
    Warning,
}

/// Everything a backend needs to render one dialog
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogRequest {
    #[serde(flatten)]
    pub options: DialogOptions,
    pub icon: DialogIcon,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub show_confirm_button: bool,
    pub show_cancel_button: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_button_text: Option<String>,
    pub reverse_buttons: bool,
    /// Auto-close delay in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer: Option<u32>,
}

/// How the user closed a dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DialogResult {
    pub is_confirmed: bool,
}

/// Renders dialogs; completes once the dialog is closed
#[async_trait(?Send)]
pub trait DialogBackend {
    async fn fire(&self, request: DialogRequest) -> DialogResult;
}

/// Dialog texts
pub mod labels {
    pub const ERROR_TITLE: &str = "An error occurred";
    pub const CONFIRM_TITLE: &str = "Are you sure?";
    pub const CONFIRM: &str = "Confirm";
    pub const CANCEL: &str = "Cancel";
    /// Success notices close themselves after this many milliseconds
    pub const SUCCESS_TIMER_MS: u32 = 1500;
}

/// Dialog wrapper applying the current theme to every call
pub struct Dialogs<B, T> {
    backend: B,
    theme: T,
}

impl<B: DialogBackend, T: ThemeSource> Dialogs<B, T> {
    pub const fn new(backend: B, theme: T) -> Self {
        Self { backend, theme }
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    fn base(&self, icon: DialogIcon, title: impl Into<String>) -> DialogRequest {
        DialogRequest {
            options: DialogOptions::for_theme(self.theme.theme()),
            icon,
            title: title.into(),
            text: None,
            show_confirm_button: true,
            show_cancel_button: false,
            confirm_button_text: None,
            cancel_button_text: None,
            reverse_buttons: false,
            timer: None,
        }
    }

    /// Short-lived success notice
    pub async fn show_success(&self, title: &str) {
        let request = DialogRequest {
            show_confirm_button: false,
            timer: Some(labels::SUCCESS_TIMER_MS),
            ..self.base(DialogIcon::Success, title)
        };
        self.backend.fire(request).await;
    }

    /// Error notice with a fixed title and `text` as the body
    pub async fn show_error(&self, text: &str) {
        let request = DialogRequest {
            text: Some(text.to_string()),
            ..self.base(DialogIcon::Error, labels::ERROR_TITLE)
        };
        self.backend.fire(request).await;
    }

    /// Ask the user to confirm; `true` only if they chose confirm
    pub async fn show_confirm(&self, text: &str) -> bool {
        let request = DialogRequest {
            text: Some(text.to_string()),
            show_cancel_button: true,
            confirm_button_text: Some(labels::CONFIRM.to_string()),
            cancel_button_text: Some(labels::CANCEL.to_string()),
            reverse_buttons: true,
            ..self.base(DialogIcon::Warning, labels::CONFIRM_TITLE)
        };
        self.backend.fire(request).await.is_confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Backend that records requests and answers with a fixed choice
    struct ScriptedBackend {
        answer: bool,
        requests: RefCell<Vec<DialogRequest>>,
    }

    impl ScriptedBackend {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                requests: RefCell::new(Vec::new()),
            }
        }

        fn last(&self) -> DialogRequest {
            self.requests.borrow().last().cloned().unwrap()
        }
    }

    #[async_trait(?Send)]
    impl DialogBackend for ScriptedBackend {
        async fn fire(&self, request: DialogRequest) -> DialogResult {
            self.requests.borrow_mut().push(request);
            DialogResult {
                is_confirmed: self.answer,
            }
        }
    }

    #[tokio::test]
    async fn test_success_uses_timer_without_button() {
        let dialogs = Dialogs::new(ScriptedBackend::answering(true), Theme::Light);
        dialogs.show_success("Saved").await;

        let request = dialogs.backend().last();
        assert_eq!(request.icon, DialogIcon::Success);
        assert_eq!(request.title, "Saved");
        assert!(!request.show_confirm_button);
        assert_eq!(request.timer, Some(1500));
        assert_eq!(request.options.background, "#ffffff");
        assert_eq!(request.options.color, "#111827");
    }

    #[tokio::test]
    async fn test_error_has_fixed_title() {
        let dialogs = Dialogs::new(ScriptedBackend::answering(true), Theme::Dark);
        dialogs.show_error("Name is required").await;

        let request = dialogs.backend().last();
        assert_eq!(request.icon, DialogIcon::Error);
        assert_eq!(request.title, labels::ERROR_TITLE);
        assert_eq!(request.text.as_deref(), Some("Name is required"));
        assert_eq!(request.options.background, "#1e293b");
        assert_eq!(request.options.color, "#f8fafc");
    }

    #[tokio::test]
    async fn test_confirm_resolves_user_choice() {
        let accepted = Dialogs::new(ScriptedBackend::answering(true), Theme::Light);
        assert!(accepted.show_confirm("Delete product?").await);

        let request = accepted.backend().last();
        assert_eq!(request.icon, DialogIcon::Warning);
        assert!(request.show_cancel_button);
        assert!(request.reverse_buttons);
        assert_eq!(request.options.confirm_button_color, "#4f46e5");
        assert_eq!(request.options.cancel_button_color, "#ef4444");

        let declined = Dialogs::new(ScriptedBackend::answering(false), Theme::Light);
        assert!(!declined.show_confirm("Delete product?").await);
    }

    #[test]
    fn test_request_serializes_flat() {
        let request = DialogRequest {
            options: DialogOptions::for_theme(Theme::Dark),
            icon: DialogIcon::Success,
            title: "Done".to_string(),
            text: None,
            show_confirm_button: false,
            show_cancel_button: false,
            confirm_button_text: None,
            cancel_button_text: None,
            reverse_buttons: false,
            timer: Some(1500),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["background"], "#1e293b");
        assert_eq!(value["confirmButtonColor"], "#4f46e5");
        assert_eq!(value["icon"], "success");
        assert_eq!(value["showConfirmButton"], false);
        assert!(value.get("text").is_none());
    }

    #[test]
    fn test_theme_helpers() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::from_prefers_dark(true), Theme::Dark);
        assert_eq!(Theme::Dark.theme(), Theme::Dark);
    }
}
