//! Dashboard client configuration

use crate::error::{CoreError, CoreResult};
use crate::guard::route_path;
use crate::session::DEFAULT_TOKEN_KEY;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const ENV_PREFIX: &str = "DASHBOARD";

/// Top-level configuration of the dashboard client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Backend API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Session persistence settings
    #[serde(default)]
    pub session: SessionConfig,
    /// Route table and access rules
    #[serde(default)]
    pub routes: RouteConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every request path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (ignored on wasm)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Storage key of the bearer token
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

/// Route access configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    #[serde(default = "default_login_path")]
    pub login_path: String,
    #[serde(default = "default_home_path")]
    pub home_path: String,
    /// Paths reachable without a session
    #[serde(default = "default_public_paths")]
    pub public_paths: Vec<String>,
    /// Paths reserved for administrators when role gating is enforced
    #[serde(default = "default_admin_paths")]
    pub admin_paths: Vec<String>,
    #[serde(default)]
    pub role_gating: RoleGating,
}

/// Whether the client enforces role-restricted routes itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoleGating {
    /// Authorization is left to the backend
    #[default]
    Disabled,
    /// Admin-only paths are blocked client-side for non-admin roles
    Enforced,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_home_path() -> String {
    "/".to_string()
}

fn default_public_paths() -> Vec<String> {
    vec!["/login".to_string(), "/register".to_string()]
}

fn default_admin_paths() -> Vec<String> {
    vec!["/users".to_string(), "/categories".to_string()]
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            home_path: default_home_path(),
            public_paths: default_public_paths(),
            admin_paths: default_admin_paths(),
            role_gating: RoleGating::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults overridden by `DASHBOARD__*` environment variables
    pub fn load() -> CoreResult<Self> {
        Self::build(
            None::<File<config::FileSourceString, FileFormat>>,
            env_source(),
        )
    }

    /// Load configuration from a TOML document, then environment overrides
    pub fn from_toml_str(toml: &str) -> CoreResult<Self> {
        Self::build(Some(File::from_str(toml, FileFormat::Toml)), env_source())
    }

    /// Load configuration from a specific config file, then environment overrides
    pub fn load_from_file(path: &str) -> CoreResult<Self> {
        Self::build(Some(File::with_name(path)), env_source())
    }

    fn build<S>(document: Option<S>, environment: Environment) -> CoreResult<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        // Start with defaults
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(document) = document {
            builder = builder.add_source(document);
        }

        // Environment variables override everything else
        builder = builder.add_source(environment);

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the rest of the client relies on
    pub fn validate(&self) -> CoreResult<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(CoreError::invalid_config("api.base_url must not be empty"));
        }
        if self.session.token_key.is_empty() {
            return Err(CoreError::invalid_config(
                "session.token_key must not be empty",
            ));
        }
        for (name, path) in [
            ("routes.login_path", &self.routes.login_path),
            ("routes.home_path", &self.routes.home_path),
        ] {
            if !path.starts_with('/') {
                return Err(CoreError::invalid_config(format!(
                    "{name} must be an absolute path, got {path:?}"
                )));
            }
        }
        let login_path = route_path(&self.routes.login_path);
        if !self
            .routes
            .public_paths
            .iter()
            .any(|path| route_path(path) == login_path)
        {
            return Err(CoreError::invalid_config(
                "routes.login_path must be one of routes.public_paths",
            ));
        }
        Ok(())
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("routes.public_paths")
        .with_list_parse_key("routes.admin_paths")
}
