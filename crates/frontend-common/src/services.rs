//! Application services shared through a yew context

use crate::dialog::BrowserDialogs;
use crate::error::{FrontendError, FrontendResult};
use crate::navigator::{BrowserNavigator, BrowserNotifier};
use crate::storage::LocalStorage;
use crate::theme::SystemTheme;
use dashboard_core::{
    AppConfig, Dialogs, NavigationGuard, Navigator, Notifier, SessionStore, TokenSession,
};
use dashboard_http::{ApiClient, ApiClientBuilder};
use std::rc::Rc;
use yew::prelude::*;

struct Inner {
    config: AppConfig,
    session: Rc<dyn SessionStore>,
    navigator: Rc<dyn Navigator>,
    guard: NavigationGuard,
    client: ApiClient,
    dialogs: Dialogs<BrowserDialogs, SystemTheme>,
}

/// Everything the pages need, built once at startup
///
/// The session store, guard and API client share one credential, so a
/// logout seen by any of them is seen by all.
#[derive(Clone)]
pub struct AppServices {
    inner: Rc<Inner>,
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl AppServices {
    /// Wire the services to `window.localStorage`, `location` and `alert`
    pub fn new(config: AppConfig) -> FrontendResult<Self> {
        let storage = LocalStorage::open().ok_or(FrontendError::StorageUnavailable)?;
        let session = Rc::new(TokenSession::with_key(storage, &config.session.token_key));
        Self::with_parts(
            config,
            session,
            Rc::new(BrowserNavigator),
            Rc::new(BrowserNotifier),
        )
    }

    /// Wire the services to caller-provided session and navigation seams
    pub fn with_parts(
        config: AppConfig,
        session: Rc<dyn SessionStore>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
    ) -> FrontendResult<Self> {
        config.validate()?;

        let client = ApiClientBuilder::from_config(&config)
            .session(session.clone())
            .on_auth_failure(navigator.clone(), notifier.clone())
            .build()?;
        let guard = NavigationGuard::new(session.clone(), notifier, config.routes.clone());

        tracing::info!(base_url = %config.api.base_url, role_gating = ?config.routes.role_gating, "Services ready");

        Ok(Self {
            inner: Rc::new(Inner {
                config,
                session,
                navigator,
                guard,
                client,
                dialogs: Dialogs::new(BrowserDialogs, SystemTheme),
            }),
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn session(&self) -> &Rc<dyn SessionStore> {
        &self.inner.session
    }

    pub fn navigator(&self) -> &Rc<dyn Navigator> {
        &self.inner.navigator
    }

    pub fn guard(&self) -> &NavigationGuard {
        &self.inner.guard
    }

    pub fn client(&self) -> &ApiClient {
        &self.inner.client
    }

    pub fn dialogs(&self) -> &Dialogs<BrowserDialogs, SystemTheme> {
        &self.inner.dialogs
    }

    /// Clear the session and reload at the login page
    pub fn logout(&self) {
        self.inner.client.logout();
        self.inner
            .navigator
            .redirect(&self.inner.config.routes.login_path);
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesProviderProps {
    pub services: AppServices,
    pub children: Children,
}

#[function_component(ServicesProvider)]
pub fn services_provider(props: &ServicesProviderProps) -> Html {
    html! {
        <ContextProvider<AppServices> context={props.services.clone()}>
            { props.children.clone() }
        </ContextProvider<AppServices>>
    }
}

/// Services of the enclosing [`ServicesProvider`], if any
#[hook]
pub fn use_services() -> Option<AppServices> {
    use_context::<AppServices>()
}
