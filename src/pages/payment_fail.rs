//! Gateway failure-redirect landing page.
//!
//! A user-initiated cancel is not an error: it bounces straight back to
//! the checkout page with no message. Everything else renders the mapped
//! failure description with a retry link.

use leptos::prelude::*;

use crate::components::header::Header;

/// Failure page for gateway redirects carrying `code` and `message`.
#[component]
pub fn PaymentFailPage() -> impl IntoView {
    let description = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::{use_navigate, use_query_map};

        use crate::state::confirm::{fail_description, is_cancel_code};

        let navigate = use_navigate();
        let query = use_query_map();
        let (code, message) = query.with_untracked(|q| (q.get("code"), q.get("message")));

        if is_cancel_code(code.as_deref()) {
            navigate("/payment", NavigateOptions::default());
        } else {
            description.set(fail_description(code.as_deref(), message.as_deref()));
        }
    }

    view! {
        <div class="payment-result-page">
            <Header/>
            <main class="payment-result-main">
                <div class="result-card failed">
                    <h1>"결제에 실패했습니다"</h1>
                    <p class="result-message">{move || description.get()}</p>
                    <a href="/payment" class="result-btn">"다시 시도하기"</a>
                </div>
            </main>
        </div>
    }
}
