//! Credential login modal with social-login entry points.

#[cfg(test)]
#[path = "login_modal_test.rs"]
mod login_modal_test;

use leptos::prelude::*;

use crate::state::session::{self, Session};

/// Trim and require both credential fields before any network call.
#[cfg(any(test, feature = "hydrate"))]
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("아이디를 입력해주세요.");
    }
    if password.is_empty() {
        return Err("비밀번호를 입력해주세요.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Login modal. Opens/closes through the `open` signal; a successful login
/// clears the fields and closes the modal.
#[component]
pub fn LoginModal(open: RwSignal<bool>, switch_to_signup: RwSignal<bool>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let close = move || {
        open.set(false);
        error.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let (email_value, password_value) =
                match validate_login_input(&email.get(), &password.get()) {
                    Ok(values) => values,
                    Err(message) => {
                        error.set(message.to_owned());
                        return;
                    }
                };
            busy.set(true);
            error.set(String::new());
            leptos::task::spawn_local(async move {
                match session::login(session, &email_value, &password_value).await {
                    Ok(()) => {
                        email.set(String::new());
                        password.set(String::new());
                        open.set(false);
                    }
                    Err(err) => error.set(err.user_message()),
                }
                busy.set(false);
            });
        }
    };

    let on_switch = move |_| {
        open.set(false);
        switch_to_signup.set(true);
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:mousedown=move |_| close()>
                <div class="modal-content" on:mousedown=|ev| ev.stop_propagation()>
                    <button class="modal-close-btn" on:click=move |_| close()>"✕"</button>
                    <h2 class="modal-title">"로그인"</h2>
                    <form class="modal-form" on:submit=on_submit>
                        <input
                            class="modal-input"
                            type="text"
                            placeholder="아이디"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                        <input
                            class="modal-input"
                            type="password"
                            placeholder="비밀번호"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                        <Show when=move || !error.get().is_empty()>
                            <p class="modal-error">{move || error.get()}</p>
                        </Show>
                        <button class="modal-submit-btn" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "로그인 중..." } else { "로그인" }}
                        </button>
                    </form>
                    <div class="modal-social">
                        <p class="modal-social-title">"간편 로그인"</p>
                        <a class="social-btn naver" href="/oauth2/authorization/naver">"네이버"</a>
                        <a class="social-btn kakao" href="/oauth2/authorization/kakao">"카카오"</a>
                        <a class="social-btn google" href="/oauth2/authorization/google">"구글"</a>
                    </div>
                    <div class="modal-signup">
                        <span>"계정이 없으신가요?"</span>
                        <button class="modal-signup-link" on:click=on_switch>"회원가입"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
