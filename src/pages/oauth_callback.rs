//! Social-login hand-off page.
//!
//! The backend finishes the OAuth dance and redirects here with the token
//! pair in the query string. This page stores the pair, resolves the user,
//! and forwards home; the URL with tokens in it is replaced in history as
//! part of the login so it cannot be revisited.

use leptos::prelude::*;

use crate::components::header::Header;

#[derive(Clone, PartialEq, Eq)]
enum HandOffPhase {
    Working,
    Done,
    Failed(String),
}

/// OAuth callback: consume `accessToken`/`refreshToken` from the query and
/// establish the session.
#[component]
pub fn OauthCallbackPage() -> impl IntoView {
    let phase = RwSignal::new(HandOffPhase::Working);

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::{use_navigate, use_query_map};

        use crate::state::session::{self, Session};

        let session = expect_context::<RwSignal<Session>>();
        let navigate = use_navigate();
        let query = use_query_map();
        let (access, refresh) =
            query.with_untracked(|q| (q.get("accessToken"), q.get("refreshToken")));

        match (access, refresh) {
            (Some(access), Some(refresh)) if !access.is_empty() && !refresh.is_empty() => {
                leptos::task::spawn_local(async move {
                    match session::login_with_tokens(session, &access, &refresh).await {
                        Ok(()) => {
                            phase.set(HandOffPhase::Done);
                            // Brief pause so the confirmation is visible.
                            gloo_timers::future::sleep(std::time::Duration::from_millis(800)).await;
                            navigate("/", NavigateOptions::default());
                        }
                        Err(err) => phase.set(HandOffPhase::Failed(err.user_message())),
                    }
                });
            }
            _ => {
                phase.set(HandOffPhase::Failed("로그인 정보가 전달되지 않았습니다.".to_owned()));
            }
        }
    }

    view! {
        <div class="oauth-callback-page">
            <Header hide_user_menu=true/>
            <main class="oauth-callback-main">
                {move || match phase.get() {
                    HandOffPhase::Working => view! {
                        <div class="result-card processing">
                            <h1>"로그인 중"</h1>
                            <p>"소셜 로그인을 처리하고 있습니다..."</p>
                        </div>
                    }
                    .into_any(),
                    HandOffPhase::Done => view! {
                        <div class="result-card done">
                            <h1>"로그인 완료"</h1>
                            <p>"잠시 후 홈으로 이동합니다."</p>
                        </div>
                    }
                    .into_any(),
                    HandOffPhase::Failed(message) => view! {
                        <div class="result-card failed">
                            <h1>"로그인 실패"</h1>
                            <p class="result-message">{message}</p>
                            <a href="/" class="result-btn">"홈으로 이동"</a>
                        </div>
                    }
                    .into_any(),
                }}
            </main>
        </div>
    }
}
