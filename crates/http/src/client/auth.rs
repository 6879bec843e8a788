//! Login, registration and logout

use crate::client::{ApiClient, ClientError};
use crate::types::{AuthRequest, AuthResponse, RegisterRequest};
use dashboard_core::decode_claims;
use reqwest::Method;

impl ApiClient {
    /// Exchange credentials for a token
    ///
    /// A rejected login is returned as an error without ending any session.
    pub async fn login(&self, credentials: &AuthRequest) -> Result<AuthResponse, ClientError> {
        let request = self
            .request(Method::POST, "/api/auth/login")
            .json(credentials);
        self.execute_unguarded(request).await
    }

    /// Register a new account and receive its first token
    pub async fn register(&self, account: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        account.validate().map_err(ClientError::Validation)?;
        let request = self
            .request(Method::POST, "/api/auth/register")
            .json(account);
        self.execute_unguarded(request).await
    }

    /// Log in and persist the issued token in the session store
    pub async fn login_and_store(
        &self,
        credentials: &AuthRequest,
    ) -> Result<AuthResponse, ClientError> {
        let session = self.require_session()?;
        let response = self.login(credentials).await?;
        session.set_credential(&response.token)?;
        tracing::info!(username = %credentials.username, "Logged in");
        Ok(response)
    }

    /// Register and persist the issued token in the session store
    pub async fn register_and_store(
        &self,
        account: &RegisterRequest,
    ) -> Result<AuthResponse, ClientError> {
        let session = self.require_session()?;
        let response = self.register(account).await?;
        session.set_credential(&response.token)?;
        tracing::info!(username = %account.username, "Registered");
        Ok(response)
    }

    /// Forget the stored token; the backend keeps no session state
    pub fn logout(&self) {
        if let Some(session) = &self.session {
            session.clear();
        }
    }

    /// Whether a decodable, unexpired token is stored
    pub fn is_authenticated(&self) -> bool {
        self.session
            .as_ref()
            .and_then(|session| session.credential())
            .and_then(|token| decode_claims(&token))
            .is_some_and(|claims| !claims.is_expired())
    }
}
