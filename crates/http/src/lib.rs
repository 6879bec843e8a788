//! Dashboard HTTP client
//!
//! Typed access to the dashboard REST API. Every request carries the stored
//! bearer token, and a rejected credential ends the session.

pub mod client;
pub mod types;

pub use client::error::ClientError;
pub use client::middleware::{BearerAuth, ForceLogout, RequestMiddleware, ResponseMiddleware};
pub use client::{ApiClient, ApiClientBuilder};
