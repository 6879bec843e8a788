//! Side-effect seams for navigation and user notices

/// Full-page navigation, equivalent to assigning `window.location`
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn redirect(&self, path: &str);
}

/// Blocking, user-facing notice
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// User-facing notice texts
pub mod messages {
    pub const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";
    pub const INSUFFICIENT_PERMISSIONS: &str = "Insufficient permissions.";
    pub const AUTH_REJECTED: &str = "Your session is no longer valid. Please log in again.";
}
