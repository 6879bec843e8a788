//! Browser side of the admin dashboard
//!
//! Implements the core seams over `window` APIs and wires them into a single
//! [`AppServices`] value shared through a yew context.

pub mod dialog;
pub mod error;
pub mod logging;
pub mod navigator;
pub mod router;
pub mod services;
pub mod storage;
pub mod theme;

pub use dialog::BrowserDialogs;
pub use error::{FrontendError, FrontendResult};
pub use logging::init_logging;
pub use navigator::{BrowserNavigator, BrowserNotifier};
pub use router::{Route, RouteGuard};
pub use services::{AppServices, ServicesProvider, use_services};
pub use storage::LocalStorage;
pub use theme::{SystemTheme, apply_document_theme, use_system_theme};
