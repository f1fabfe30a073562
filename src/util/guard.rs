//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages must wait for the session restore to settle before
//! making an authorization decision, then apply identical redirect
//! behavior. Guards read the injected session context; they never touch
//! storage directly.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;

/// Redirect to `to` whenever the session has settled and no user is present.
pub fn install_require_auth<F>(session: RwSignal<Session>, to: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if state.ready && state.user.is_none() {
            navigate(to, NavigateOptions::default());
        }
    });
}

/// Redirect to `to` unless the settled session belongs to a back-office role.
pub fn install_require_back_office<F>(session: RwSignal<Session>, to: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if !state.ready {
            return;
        }
        let allowed = state.user.as_ref().is_some_and(|u| u.role().is_back_office());
        if !allowed {
            navigate(to, NavigateOptions::default());
        }
    });
}
