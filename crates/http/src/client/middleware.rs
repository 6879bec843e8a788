//! Request and response middleware
//!
//! Request middleware decorates every outgoing request before it is sent.
//! Response middleware observes every failed response; it cannot swallow the
//! error, which is always handed back to the caller afterwards.

use super::ClientError;
use dashboard_core::navigation::messages;
use dashboard_core::{Navigator, Notifier, SessionStore};
use reqwest::RequestBuilder;
use std::rc::Rc;

/// Transforms outgoing requests
pub trait RequestMiddleware {
    fn handle(&self, request: RequestBuilder) -> RequestBuilder;
}

/// Observes failed responses
pub trait ResponseMiddleware {
    fn on_error(&self, error: &ClientError);
}

/// Attaches `Authorization: Bearer <token>` when a session token is stored
pub struct BearerAuth {
    session: Rc<dyn SessionStore>,
}

impl BearerAuth {
    pub fn new(session: Rc<dyn SessionStore>) -> Self {
        Self { session }
    }
}

impl RequestMiddleware for BearerAuth {
    fn handle(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.credential() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Ends the session when the server rejects the credential
///
/// On 401 or 403 the user is alerted, the stored token is cleared and the
/// browser is sent to the login page with a full navigation.
pub struct ForceLogout {
    session: Rc<dyn SessionStore>,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
    login_path: String,
}

impl ForceLogout {
    pub fn new(
        session: Rc<dyn SessionStore>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
        login_path: impl Into<String>,
    ) -> Self {
        Self {
            session,
            navigator,
            notifier,
            login_path: login_path.into(),
        }
    }
}

impl ResponseMiddleware for ForceLogout {
    fn on_error(&self, error: &ClientError) {
        if !error.is_auth_rejected() {
            return;
        }

        tracing::warn!(status = ?error.status(), "Credential rejected, forcing logout");
        self.notifier.alert(messages::AUTH_REJECTED);
        self.session.clear();
        self.navigator.redirect(&self.login_path);
    }
}
