//! Dashboard API client
//!
//! One [`ApiClient`] is built at startup and handed to whatever needs the
//! backend. Session handling lives in its middleware rather than in global
//! client defaults.

pub mod auth;
pub mod categories;
pub mod error;
pub mod middleware;
pub mod products;
pub mod users;

use dashboard_core::{AppConfig, Navigator, Notifier, SessionStore};
use error::ClientError;
use middleware::{BearerAuth, ForceLogout, RequestMiddleware, ResponseMiddleware};
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, Response};
use std::rc::Rc;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_LOGIN_PATH: &str = "/login";
const USER_AGENT: &str = concat!("dashboard-client/", env!("CARGO_PKG_VERSION"));

/// Dashboard API client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Option<Rc<dyn SessionStore>>,
    request_middleware: Vec<Rc<dyn RequestMiddleware>>,
    response_middleware: Vec<Rc<dyn ResponseMiddleware>>,
}

impl ApiClient {
    /// Create a client without session handling
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session store the client authenticates with, if any
    pub fn session(&self) -> Option<&Rc<dyn SessionStore>> {
        self.session.as_ref()
    }

    /// Create a request builder decorated by every request middleware
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "API request");

        self.request_middleware
            .iter()
            .fold(self.client.request(method, url), |request, middleware| {
                middleware.handle(request)
            })
    }

    /// Execute a request and decode the JSON body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.send(request, true).await?;
        Ok(response.json().await?)
    }

    /// Execute a request whose response carries no body of interest
    pub async fn execute_empty(&self, request: RequestBuilder) -> Result<(), ClientError> {
        self.send(request, true).await?;
        Ok(())
    }

    /// Execute a request without running response middleware
    ///
    /// Used for credential exchanges, where a 401 means wrong credentials
    /// rather than a dead session.
    pub(crate) async fn execute_unguarded<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.send(request, false).await?;
        Ok(response.json().await?)
    }

    async fn send(&self, request: RequestBuilder, guarded: bool) -> Result<Response, ClientError> {
        let result = Self::check_status(request).await;

        if let Err(error) = &result {
            tracing::warn!(status = ?error.status(), error = %error, "API request failed");
            if guarded {
                for middleware in &self.response_middleware {
                    middleware.on_error(error);
                }
            }
        }

        result
    }

    async fn check_status(request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }

    pub(crate) fn require_session(&self) -> Result<&Rc<dyn SessionStore>, ClientError> {
        self.session
            .as_ref()
            .ok_or_else(|| ClientError::Configuration("no session store configured".into()))
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    timeout: Option<Duration>,
    user_agent: Option<String>,
    login_path: Option<String>,
    session: Option<Rc<dyn SessionStore>>,
    auth_failure: Option<(Rc<dyn Navigator>, Rc<dyn Notifier>)>,
    request_middleware: Vec<Rc<dyn RequestMiddleware>>,
    response_middleware: Vec<Rc<dyn ResponseMiddleware>>,
}

impl ApiClientBuilder {
    /// Start from the API and route settings of `config`
    pub fn from_config(config: &AppConfig) -> Self {
        let mut builder = Self::default()
            .base_url(&config.api.base_url)
            .login_path(&config.routes.login_path);
        if let Some(timeout) = config.api.timeout() {
            builder = builder.timeout(timeout);
        }
        builder
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout (ignored on wasm)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Path the browser is sent to when the session is rejected
    pub fn login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = Some(path.into());
        self
    }

    /// Authenticate every request with the token held by `session`
    pub fn session(mut self, session: Rc<dyn SessionStore>) -> Self {
        self.session = Some(session);
        self
    }

    /// Force a logout through `navigator` and `notifier` on 401/403
    ///
    /// Requires a session store.
    pub fn on_auth_failure(mut self, navigator: Rc<dyn Navigator>, notifier: Rc<dyn Notifier>) -> Self {
        self.auth_failure = Some((navigator, notifier));
        self
    }

    /// Append a custom request middleware, run after bearer authentication
    pub fn request_middleware(mut self, middleware: Rc<dyn RequestMiddleware>) -> Self {
        self.request_middleware.push(middleware);
        self
    }

    /// Append a custom response middleware, run after the forced logout
    pub fn response_middleware(mut self, middleware: Rc<dyn ResponseMiddleware>) -> Self {
        self.response_middleware.push(middleware);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        url::Url::parse(&base_url)
            .map_err(|e| ClientError::Configuration(format!("invalid base_url {base_url:?}: {e}")))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        // Timeouts are not supported on wasm
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        client_builder =
            client_builder.user_agent(self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()));

        let client = client_builder.build()?;

        let mut request_middleware: Vec<Rc<dyn RequestMiddleware>> = Vec::new();
        let mut response_middleware: Vec<Rc<dyn ResponseMiddleware>> = Vec::new();

        if let Some(session) = &self.session {
            request_middleware.push(Rc::new(BearerAuth::new(session.clone())));
        }

        if let Some((navigator, notifier)) = self.auth_failure {
            let session = self.session.clone().ok_or_else(|| {
                ClientError::Configuration("on_auth_failure requires a session store".into())
            })?;
            let login_path = self
                .login_path
                .unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_string());
            response_middleware.push(Rc::new(ForceLogout::new(
                session, navigator, notifier, login_path,
            )));
        }

        request_middleware.extend(self.request_middleware);
        response_middleware.extend(self.response_middleware);

        Ok(ApiClient {
            client,
            base_url,
            session: self.session,
            request_middleware,
            response_middleware,
        })
    }
}
