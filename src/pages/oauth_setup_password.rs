//! Social-signup completion page.
//!
//! First-time OAuth users arrive here with a one-time signup token and
//! their provider profile in the query string. They pick an account
//! password, the backend creates the account and answers with a token
//! pair, and the page logs the pair in and forwards home.

#[cfg(test)]
#[path = "oauth_setup_password_test.rs"]
mod oauth_setup_password_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::state::session::Session;

/// Password rules for the new account: length, a letter, a digit, and a
/// matching confirmation, reported in that order.
#[cfg(any(test, feature = "hydrate"))]
fn validate_setup_password(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password.chars().count() < 8 {
        return Err("비밀번호는 최소 8자 이상이어야 합니다.");
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err("비밀번호에 영문자가 포함되어야 합니다.");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("비밀번호에 숫자가 포함되어야 합니다.");
    }
    if password != confirm {
        return Err("비밀번호가 일치하지 않습니다.");
    }
    Ok(())
}

/// Korean display name for an OAuth provider code, any casing.
#[cfg(any(test, feature = "hydrate"))]
fn provider_label(provider: &str) -> String {
    match provider.to_ascii_uppercase().as_str() {
        "NAVER" => "네이버".to_owned(),
        "KAKAO" => "카카오".to_owned(),
        "GOOGLE" => "구글".to_owned(),
        _ => provider.to_owned(),
    }
}

/// OAuth signup completion: password form over the query-string hand-off.
#[component]
pub fn OauthSetupPasswordPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = StoredValue::new(use_navigate());
    let password = RwSignal::new(String::new());
    let password_confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let provider_name = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let hand_off = {
        use leptos_router::hooks::use_query_map;

        let query = use_query_map();
        let (token, email, name, phone, provider) = query.with_untracked(|q| {
            (
                q.get("token").unwrap_or_default(),
                q.get("email").unwrap_or_default(),
                q.get("name").unwrap_or_default(),
                q.get("mobile").unwrap_or_default(),
                q.get("provider").unwrap_or_default(),
            )
        });
        provider_name.set(provider_label(&provider));
        if token.is_empty() || email.is_empty() {
            error.set("잘못된 접근입니다. 다시 로그인해주세요.".to_owned());
        }
        StoredValue::new((token, email, name, phone))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use leptos_router::NavigateOptions;

            use crate::state::session;

            let (token, email, name, phone) = hand_off.get_value();
            if token.is_empty() || email.is_empty() {
                error.set("잘못된 접근입니다. 다시 로그인해주세요.".to_owned());
                return;
            }
            if let Err(message) =
                validate_setup_password(&password.get_untracked(), &password_confirm.get_untracked())
            {
                error.set(message.to_owned());
                return;
            }
            let password_value = password.get_untracked();
            busy.set(true);
            error.set(String::new());
            leptos::task::spawn_local(async move {
                let phone = phone.trim();
                let result = crate::net::api::oauth_signup(
                    &token,
                    &password_value,
                    name.trim(),
                    (!phone.is_empty()).then_some(phone),
                )
                .await;
                match result {
                    Ok(pair) => {
                        match session::login_with_tokens(
                            session,
                            &pair.access_token,
                            &pair.refresh_token,
                        )
                        .await
                        {
                            Ok(()) => {
                                navigate.with_value(|n| n("/", NavigateOptions::default()));
                            }
                            Err(err) => error.set(err.user_message()),
                        }
                    }
                    Err(err) => error.set(err.user_message()),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="oauth-setup-page">
            <Header hide_user_menu=true/>
            <main class="oauth-setup-main">
                <div class="oauth-setup-card">
                    <h1>"회원가입 완료"</h1>
                    <Show when=move || !provider_name.get().is_empty()>
                        <p class="oauth-provider-info">
                            {move || provider_name.get()}
                            " 계정으로 가입합니다"
                        </p>
                    </Show>
                    <form class="oauth-setup-form" on:submit=on_submit>
                        <input
                            class="modal-input"
                            type="password"
                            placeholder="비밀번호 (8자 이상, 영문+숫자)"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                        <input
                            class="modal-input"
                            type="password"
                            placeholder="비밀번호 확인"
                            prop:value=move || password_confirm.get()
                            on:input=move |ev| password_confirm.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                        <Show when=move || !error.get().is_empty()>
                            <p class="modal-error">{move || error.get()}</p>
                        </Show>
                        <button class="modal-submit-btn" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "가입 중..." } else { "가입 완료" }}
                        </button>
                    </form>
                </div>
            </main>
        </div>
    }
}
