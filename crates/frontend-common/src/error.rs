//! Startup errors of the browser services

use dashboard_core::CoreError;
use dashboard_http::ClientError;
use thiserror::Error;

pub type FrontendResult<T> = Result<T, FrontendError>;

#[derive(Debug, Error)]
pub enum FrontendError {
    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    Config(#[from] CoreError),

    /// API client could not be built
    #[error("Client setup failed: {0}")]
    Client(#[from] ClientError),

    /// `window.localStorage` is unavailable (private mode, sandboxed iframe)
    #[error("Browser storage unavailable")]
    StorageUnavailable,
}
