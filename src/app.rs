//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    admin::AdminPage, my_page::MyPage, oauth_callback::OauthCallbackPage,
    oauth_setup_password::OauthSetupPasswordPage, payment::PaymentPage,
    payment_fail::PaymentFailPage, payment_success::PaymentSuccessPage, portal::PortalPage,
};
use crate::state::session::{self, Session};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, restores any persisted session before the
/// guards run, and keeps the expiry poller alive for the app's lifetime.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session::restore_on_load(session).await;
    });
    session::install_session_poller(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/bulc-web.css"/>
        <Title text="BulC"/>

        <Router>
            <Routes fallback=|| "페이지를 찾을 수 없습니다.".into_view()>
                <Route path=StaticSegment("") view=PortalPage/>
                <Route path=StaticSegment("payment") view=PaymentPage/>
                <Route
                    path=(StaticSegment("payment"), StaticSegment("success"))
                    view=PaymentSuccessPage
                />
                <Route
                    path=(StaticSegment("payment"), StaticSegment("fail"))
                    view=PaymentFailPage
                />
                <Route
                    path=(StaticSegment("oauth"), StaticSegment("callback"))
                    view=OauthCallbackPage
                />
                <Route
                    path=(StaticSegment("oauth"), StaticSegment("setup-password"))
                    view=OauthSetupPasswordPage
                />
                <Route path=StaticSegment("mypage") view=MyPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
    }
}
