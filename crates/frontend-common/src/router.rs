//! Dashboard routes and the guard component in front of them

use crate::services::use_services;
use dashboard_core::GuardOutcome;
use dashboard_core::Navigator as _;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/")]
    Products,
    #[at("/users")]
    Users,
    #[at("/categories")]
    Categories,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route whose path is exactly `path`
    pub fn from_path(path: &str) -> Option<Self> {
        Self::recognize(path).filter(|route| route.to_path() == path)
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub children: Children,
}

/// Runs the navigation guard on every location change
///
/// Children render only once the current path has been allowed. Redirects
/// to a known route replace the history entry; anything else falls back to
/// a full page navigation.
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let services = use_services();
    let location = use_location();
    let router = use_navigator();
    let previous = use_mut_ref(String::new);
    let allowed = use_state_eq(|| None::<String>);

    let path = location
        .as_ref()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    {
        let allowed = allowed.clone();
        use_effect_with(path.clone(), move |path| {
            let Some(services) = services else {
                tracing::error!("RouteGuard rendered outside ServicesProvider");
                return;
            };

            let from = previous.replace(path.clone());
            match services.guard().check(path, &from) {
                GuardOutcome::Allow => allowed.set(Some(path.clone())),
                GuardOutcome::Redirect(target) => {
                    tracing::debug!(from = %path, to = %target, "Navigation redirected");
                    allowed.set(None);
                    match (Route::from_path(&target), router) {
                        (Some(route), Some(router)) => router.replace(&route),
                        _ => services.navigator().redirect(&target),
                    }
                }
            }
        });
    }

    if allowed.as_deref() == Some(path.as_str()) {
        html! { <>{ props.children.clone() }</> }
    } else {
        html! {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::Products.to_path(), "/");
        assert_eq!(Route::Users.to_path(), "/users");
        assert_eq!(Route::Categories.to_path(), "/categories");
    }

    #[test]
    fn test_from_path_is_exact() {
        assert_eq!(Route::from_path("/users"), Some(Route::Users));
        assert_eq!(Route::from_path("/"), Some(Route::Products));
        assert_eq!(Route::from_path("/signin"), None);
    }

    #[test]
    fn test_unknown_path_falls_back_to_not_found() {
        let route = Route::recognize("/reports").or_else(Route::not_found_route);
        assert_eq!(route, Some(Route::NotFound));
    }
}
