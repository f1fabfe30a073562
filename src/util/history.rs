//! Browser history hygiene around auth transitions.
//!
//! After login and logout the current history entry is replaced in place so
//! back-navigation cannot land the user on a view rendered under the
//! previous auth state.

/// Replace the current history entry with the current URL.
pub fn replace_current_entry() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let href = window.location().href().unwrap_or_default();
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&href),
            );
        }
    }
}

/// Current page origin (`https://host`), used to build gateway return URLs.
pub fn origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
