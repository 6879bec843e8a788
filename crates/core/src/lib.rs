//! Dashboard session core: token claims, session store, navigation guard and dialogs

pub mod config;
pub mod dialog;
pub mod error;
pub mod guard;
pub mod navigation;
pub mod role;
pub mod session;
pub mod token;

#[cfg(any(test, feature = "tests"))]
pub mod testing;

pub use config::{AppConfig, RoleGating, RouteConfig};
pub use dialog::{DialogBackend, Dialogs, Theme, ThemeSource};
pub use error::{CoreError, CoreResult};
pub use guard::{GuardOutcome, NavigationGuard};
pub use navigation::{Navigator, Notifier};
pub use role::Role;
pub use session::{MemoryStorage, SessionStore, Storage, TokenSession};
pub use token::{Claims, decode_claims};
