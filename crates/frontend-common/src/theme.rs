//! System colour-scheme detection

use dashboard_core::{Theme, ThemeSource};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Reads `prefers-color-scheme` each time a theme is needed
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTheme;

impl ThemeSource for SystemTheme {
    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|window| window.match_media(DARK_QUERY).ok().flatten())
            .is_some_and(|query| query.matches())
    }
}

/// Toggle the `dark` class on the document element
pub fn apply_document_theme(theme: Theme) {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };

    let class_list = element.class_list();
    let _ = match theme {
        Theme::Dark => class_list.add_1("dark"),
        Theme::Light => class_list.remove_1("dark"),
    };
}

/// Current system theme, updated when the preference changes
#[hook]
pub fn use_system_theme() -> Theme {
    let theme = use_state_eq(|| SystemTheme.theme());

    {
        let theme = theme.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window()
                .and_then(|window| window.match_media(DARK_QUERY).ok().flatten())
                .map(|query| {
                    EventListener::new(&query, "change", move |event| {
                        if let Some(event) = event.dyn_ref::<web_sys::MediaQueryListEvent>() {
                            theme.set(Theme::from_prefers_dark(event.matches()));
                        }
                    })
                });
            move || drop(listener)
        });
    }

    *theme
}
