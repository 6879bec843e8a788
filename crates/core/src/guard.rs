//! Navigation guard run before every route change
//!
//! The guard makes one synchronous decision per navigation from the stored
//! session alone. It may clear the session and alert the user, but it never
//! navigates by itself: the caller applies the returned [`GuardOutcome`].

use crate::config::{RoleGating, RouteConfig};
use crate::navigation::{Notifier, messages};
use crate::session::SessionStore;
use crate::token::{Claims, decode_claims};
use std::rc::Rc;

/// Decision for a single navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Continue to the requested route
    Allow,
    /// Abort the requested route and go here instead
    Redirect(String),
}

impl GuardOutcome {
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::Redirect(path) => Some(path),
        }
    }
}

/// Authentication and authorization guard for dashboard routes
pub struct NavigationGuard {
    session: Rc<dyn SessionStore>,
    notifier: Rc<dyn Notifier>,
    routes: RouteConfig,
}

impl NavigationGuard {
    pub fn new(
        session: Rc<dyn SessionStore>,
        notifier: Rc<dyn Notifier>,
        routes: RouteConfig,
    ) -> Self {
        Self {
            session,
            notifier,
            routes,
        }
    }

    pub const fn routes(&self) -> &RouteConfig {
        &self.routes
    }

    /// Whether `path` is reachable without a session
    pub fn is_public(&self, path: &str) -> bool {
        let path = route_path(path);
        self.routes.public_paths.iter().any(|p| route_path(p) == path)
    }

    /// Whether `path` is reserved for administrators
    pub fn is_admin_only(&self, path: &str) -> bool {
        let path = route_path(path);
        self.routes.admin_paths.iter().any(|p| route_path(p) == path)
    }

    /// Decide a navigation from `from` to `to` at the current time
    pub fn check(&self, to: &str, from: &str) -> GuardOutcome {
        self.check_at(to, from, chrono::Utc::now().timestamp())
    }

    /// Decide a navigation from `from` to `to` at `now` (seconds since the epoch)
    pub fn check_at(&self, to: &str, from: &str, now: i64) -> GuardOutcome {
        let path = route_path(to);
        let public = self.is_public(path);

        let claims = match self.session_claims() {
            Some(claims) if claims.is_expired_at(now) => {
                tracing::info!(to = %path, from = %from, exp = ?claims.exp, "Session expired");
                self.session.clear();
                self.notifier.alert(messages::SESSION_EXPIRED);
                return self.redirect(path, &self.routes.login_path);
            }
            other => other,
        };

        let Some(claims) = claims else {
            if public {
                return GuardOutcome::Allow;
            }
            tracing::debug!(to = %path, from = %from, "No session for protected route");
            return self.redirect(path, &self.routes.login_path);
        };

        if public {
            tracing::debug!(to = %path, "Already authenticated, leaving public route");
            return self.redirect(path, &self.routes.home_path);
        }

        if self.routes.role_gating == RoleGating::Enforced
            && self.is_admin_only(path)
            && !claims.role().is_some_and(|role| role.is_admin())
        {
            tracing::warn!(to = %path, role = ?claims.role(), "Admin route denied");
            self.notifier.alert(messages::INSUFFICIENT_PERMISSIONS);
            return self.redirect(path, &self.routes.home_path);
        }

        GuardOutcome::Allow
    }

    /// Claims of the stored token; an undecodable token is discarded
    fn session_claims(&self) -> Option<Claims> {
        let token = self.session.credential()?;
        let claims = decode_claims(&token);
        if claims.is_none() {
            tracing::debug!("Stored token is malformed, treating session as logged out");
            self.session.clear();
        }
        claims
    }

    fn redirect(&self, current: &str, target: &str) -> GuardOutcome {
        if route_path(target) == current {
            GuardOutcome::Allow
        } else {
            GuardOutcome::Redirect(target.to_string())
        }
    }
}

/// Path component of a route, without query, fragment or trailing slash
pub(crate) fn route_path(to: &str) -> &str {
    let end = to.find(['?', '#']).unwrap_or(to.len());
    let path = &to[..end];
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::MockNotifier;
    use crate::session::{MemoryStorage, Storage, TokenSession};
    use crate::testing::unsigned_token;
    use mockall::predicate::eq;
    use serde_json::json;

    const NOW: i64 = 1_700_000_000;

    struct Fixture {
        session: Rc<TokenSession<MemoryStorage>>,
        guard: NavigationGuard,
    }

    fn fixture(token: Option<String>, notifier: MockNotifier, routes: RouteConfig) -> Fixture {
        let session = Rc::new(TokenSession::new(MemoryStorage::new()));
        if let Some(token) = token {
            session.set_credential(&token).unwrap();
        }
        let guard = NavigationGuard::new(session.clone(), Rc::new(notifier), routes);
        Fixture { session, guard }
    }

    fn valid_token() -> String {
        unsigned_token(&json!({"sub": "alice", "exp": NOW + 3600, "role": "ROLE_USER"}))
    }

    fn admin_token() -> String {
        unsigned_token(&json!({"sub": "root", "exp": NOW + 3600, "role": "ROLE_ADMIN"}))
    }

    fn expired_token() -> String {
        unsigned_token(&json!({"sub": "alice", "exp": NOW - 1}))
    }

    fn enforced_routes() -> RouteConfig {
        RouteConfig {
            role_gating: RoleGating::Enforced,
            ..RouteConfig::default()
        }
    }

    #[test]
    fn test_protected_route_without_token_redirects_to_login() {
        let f = fixture(None, MockNotifier::new(), RouteConfig::default());
        assert_eq!(
            f.guard.check_at("/users", "/", NOW),
            GuardOutcome::Redirect("/login".to_string())
        );
        assert_eq!(
            f.guard.check_at("/", "/login", NOW),
            GuardOutcome::Redirect("/login".to_string())
        );
    }

    #[test]
    fn test_public_route_without_token_is_allowed() {
        let f = fixture(None, MockNotifier::new(), RouteConfig::default());
        assert!(f.guard.check_at("/login", "/", NOW).is_allowed());
        assert!(f.guard.check_at("/register", "/login", NOW).is_allowed());
    }

    #[test]
    fn test_public_route_with_token_redirects_home() {
        let f = fixture(Some(valid_token()), MockNotifier::new(), RouteConfig::default());
        assert_eq!(
            f.guard.check_at("/login", "/", NOW),
            GuardOutcome::Redirect("/".to_string())
        );
        assert_eq!(
            f.guard.check_at("/register?next=/users", "/", NOW),
            GuardOutcome::Redirect("/".to_string())
        );
        assert!(f.session.credential().is_some());
    }

    #[test]
    fn test_protected_route_with_token_is_allowed() {
        let f = fixture(Some(valid_token()), MockNotifier::new(), RouteConfig::default());
        assert!(f.guard.check_at("/", "/login", NOW).is_allowed());
        assert!(f.guard.check_at("/users", "/", NOW).is_allowed());
        assert!(f.guard.check_at("/categories/", "/", NOW).is_allowed());
    }

    #[test]
    fn test_expired_token_clears_session_and_alerts() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_alert()
            .with(eq(messages::SESSION_EXPIRED))
            .times(1)
            .return_const(());

        let f = fixture(Some(expired_token()), notifier, RouteConfig::default());
        assert_eq!(
            f.guard.check_at("/users", "/", NOW),
            GuardOutcome::Redirect("/login".to_string())
        );
        assert_eq!(f.session.credential(), None);
        assert!(f.session.storage().get_item("token").is_none());
    }

    #[test]
    fn test_expired_token_on_login_route_does_not_loop() {
        let mut notifier = MockNotifier::new();
        notifier.expect_alert().times(1).return_const(());

        let f = fixture(Some(expired_token()), notifier, RouteConfig::default());
        assert!(f.guard.check_at("/login", "/", NOW).is_allowed());
        assert_eq!(f.session.credential(), None);

        // Next navigation sees a logged-out session
        assert_eq!(
            f.guard.check_at("/", "/login", NOW),
            GuardOutcome::Redirect("/login".to_string())
        );
    }

    #[test]
    fn test_expiry_boundary() {
        let token = unsigned_token(&json!({"exp": NOW}));
        let mut notifier = MockNotifier::new();
        notifier.expect_alert().times(1).return_const(());

        let f = fixture(Some(token), notifier, RouteConfig::default());
        assert!(f.guard.check_at("/", "/", NOW - 1).is_allowed());
        assert_eq!(
            f.guard.check_at("/", "/", NOW),
            GuardOutcome::Redirect("/login".to_string())
        );
    }

    #[test]
    fn test_token_without_exp_never_expires() {
        let token = unsigned_token(&json!({"sub": "alice"}));
        let f = fixture(Some(token), MockNotifier::new(), RouteConfig::default());
        assert!(f.guard.check_at("/", "/login", i64::MAX).is_allowed());
    }

    #[test]
    fn test_malformed_token_is_treated_as_logged_out() {
        let f = fixture(
            Some("a.b.c".to_string()),
            MockNotifier::new(),
            RouteConfig::default(),
        );
        assert_eq!(
            f.guard.check_at("/users", "/", NOW),
            GuardOutcome::Redirect("/login".to_string())
        );
        assert_eq!(f.session.credential(), None);

        let f = fixture(
            Some("garbage".to_string()),
            MockNotifier::new(),
            RouteConfig::default(),
        );
        assert!(f.guard.check_at("/login", "/", NOW).is_allowed());
    }

    #[test]
    fn test_role_gating_disabled_by_default() {
        let f = fixture(Some(valid_token()), MockNotifier::new(), RouteConfig::default());
        assert!(f.guard.check_at("/users", "/", NOW).is_allowed());
    }

    #[test]
    fn test_role_gating_blocks_non_admin() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_alert()
            .with(eq(messages::INSUFFICIENT_PERMISSIONS))
            .times(2)
            .return_const(());

        let f = fixture(Some(valid_token()), notifier, enforced_routes());
        assert_eq!(
            f.guard.check_at("/users", "/", NOW),
            GuardOutcome::Redirect("/".to_string())
        );
        assert_eq!(
            f.guard.check_at("/categories", "/", NOW),
            GuardOutcome::Redirect("/".to_string())
        );
        assert!(f.guard.check_at("/", "/users", NOW).is_allowed());
        // Denial keeps the session
        assert!(f.session.credential().is_some());
    }

    #[test]
    fn test_role_gating_allows_admin() {
        let f = fixture(Some(admin_token()), MockNotifier::new(), enforced_routes());
        assert!(f.guard.check_at("/users", "/", NOW).is_allowed());
        assert!(f.guard.check_at("/categories", "/", NOW).is_allowed());
    }

    #[test]
    fn test_role_gating_without_role_claim() {
        let token = unsigned_token(&json!({"sub": "alice", "exp": NOW + 60}));
        let mut notifier = MockNotifier::new();
        notifier.expect_alert().times(1).return_const(());

        let f = fixture(Some(token), notifier, enforced_routes());
        assert_eq!(
            f.guard.check_at("/users", "/", NOW),
            GuardOutcome::Redirect("/".to_string())
        );
    }

    #[test]
    fn test_configured_paths_are_normalized() {
        let routes = RouteConfig {
            public_paths: vec!["/login/".to_string(), "/register?ref=nav".to_string()],
            admin_paths: vec!["/users/".to_string()],
            role_gating: RoleGating::Enforced,
            ..RouteConfig::default()
        };
        let mut notifier = MockNotifier::new();
        notifier
            .expect_alert()
            .with(eq(messages::INSUFFICIENT_PERMISSIONS))
            .times(1)
            .return_const(());

        let f = fixture(Some(valid_token()), notifier, routes);
        assert!(f.guard.is_public("/login"));
        assert!(f.guard.is_public("/register"));
        assert!(f.guard.is_admin_only("/users"));
        assert_eq!(
            f.guard.check_at("/users", "/", NOW),
            GuardOutcome::Redirect("/".to_string())
        );
    }

    #[test]
    fn test_route_path_normalization() {
        assert_eq!(route_path("/"), "/");
        assert_eq!(route_path(""), "/");
        assert_eq!(route_path("/users/"), "/users");
        assert_eq!(route_path("/users?page=2"), "/users");
        assert_eq!(route_path("/login#top"), "/login");
        assert_eq!(route_path("/?x=1"), "/");
    }

    #[test]
    fn test_outcome_helpers() {
        assert_eq!(GuardOutcome::Allow.redirect_target(), None);
        let outcome = GuardOutcome::Redirect("/login".to_string());
        assert!(!outcome.is_allowed());
        assert_eq!(outcome.redirect_target(), Some("/login"));
    }
}
