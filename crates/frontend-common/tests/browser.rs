//! Browser tests for the window-backed adapters

#![cfg(target_arch = "wasm32")]

use dashboard_core::testing::{RecordingNavigator, RecordingNotifier};
use dashboard_core::{AppConfig, GuardOutcome, SessionStore, Storage, ThemeSource, TokenSession};
use dashboard_frontend_common::{AppServices, LocalStorage, SystemTheme};
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_local_storage_keeps_raw_strings() {
    let storage = LocalStorage::open().unwrap();
    storage.set_item("dashboard-test", "a.b.c").unwrap();
    assert_eq!(storage.get_item("dashboard-test").as_deref(), Some("a.b.c"));

    storage.remove_item("dashboard-test");
    assert_eq!(storage.get_item("dashboard-test"), None);
}

#[wasm_bindgen_test]
fn test_token_session_over_local_storage() {
    let session = TokenSession::with_key(LocalStorage::open().unwrap(), "dashboard-test-token");
    session.set_credential("header.payload.sig").unwrap();
    assert_eq!(session.credential().as_deref(), Some("header.payload.sig"));
    session.clear();
    assert_eq!(session.credential(), None);
}

#[wasm_bindgen_test]
fn test_system_theme_is_readable() {
    let theme = SystemTheme.theme();
    assert_eq!(theme.prefers_dark(), SystemTheme.prefers_dark());
}

#[wasm_bindgen_test]
fn test_services_guard_protected_route() {
    let session = Rc::new(TokenSession::with_key(
        LocalStorage::open().unwrap(),
        "dashboard-test-guard",
    ));
    let notifier = Rc::new(RecordingNotifier::default());
    let services = AppServices::with_parts(
        AppConfig::default(),
        session,
        Rc::new(RecordingNavigator::default()),
        notifier.clone(),
    )
    .unwrap();

    assert_eq!(
        services.guard().check("/users", "/"),
        GuardOutcome::Redirect("/login".to_string())
    );
    assert_eq!(services.guard().check("/login", "/"), GuardOutcome::Allow);
    assert!(notifier.alerts().is_empty());
    assert_eq!(services.client().base_url(), "http://localhost:8080");
}
