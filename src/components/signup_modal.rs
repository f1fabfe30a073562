//! Signup modal: field validation, email verification, account creation.
//!
//! The backend is the authority on duplicates and code matching; this modal
//! only blocks obviously-invalid input locally (lengths, confirm match)
//! before any network call.

#[cfg(test)]
#[path = "signup_modal_test.rs"]
mod signup_modal_test;

use leptos::prelude::*;

use crate::util::format::format_phone;

/// Local, field-scoped validation run before any network call. Reports the
/// first problem in field order.
#[cfg(any(test, feature = "hydrate"))]
fn validate_signup_input(email: &str, password: &str, confirm: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("아이디를 입력해주세요.");
    }
    if email.chars().count() < 4 || email.chars().count() > 50 {
        return Err("아이디는 4자 이상 50자 이하여야 합니다.");
    }
    if password.is_empty() {
        return Err("비밀번호를 입력해주세요.");
    }
    if password.chars().count() < 8 {
        return Err("비밀번호는 8자 이상이어야 합니다.");
    }
    if password != confirm {
        return Err("비밀번호가 일치하지 않습니다.");
    }
    Ok(email.to_owned())
}

/// Signup modal with an email verification step. A successful signup closes
/// this modal and opens the login modal.
#[component]
pub fn SignupModal(open: RwSignal<bool>, switch_to_login: RwSignal<bool>) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirm = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let code_sent = RwSignal::new(false);
    let verified = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let reset = move || {
        email.set(String::new());
        password.set(String::new());
        password_confirm.set(String::new());
        name.set(String::new());
        phone.set(String::new());
        code.set(String::new());
        code_sent.set(false);
        verified.set(false);
        error.set(String::new());
        info.set(String::new());
    };

    let close = move || {
        open.set(false);
        error.set(String::new());
    };

    // Availability check, then a verification code to the address.
    let on_send_code = move |_| {
        if busy.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let email_value = email.get().trim().to_owned();
            if email_value.is_empty() {
                error.set("아이디를 입력해주세요.".to_owned());
                return;
            }
            busy.set(true);
            error.set(String::new());
            leptos::task::spawn_local(async move {
                let outcome: Result<bool, crate::net::api::ApiError> = async {
                    if !crate::net::api::check_email(&email_value).await? {
                        return Ok(false);
                    }
                    crate::net::api::send_verification(&email_value).await?;
                    Ok(true)
                }
                .await;
                match outcome {
                    Ok(true) => {
                        code_sent.set(true);
                        info.set("인증 코드를 이메일로 발송했습니다.".to_owned());
                    }
                    Ok(false) => error.set("이미 사용 중인 이메일입니다.".to_owned()),
                    Err(err) => error.set(err.user_message()),
                }
                busy.set(false);
            });
        }
    };

    let on_verify_code = move |_| {
        if busy.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let email_value = email.get().trim().to_owned();
            let code_value = code.get().trim().to_owned();
            if code_value.is_empty() {
                error.set("인증 코드를 입력해주세요.".to_owned());
                return;
            }
            busy.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::verify_code(&email_value, &code_value).await {
                    Ok(()) => {
                        verified.set(true);
                        info.set("이메일 인증이 완료되었습니다.".to_owned());
                        error.set(String::new());
                    }
                    Err(err) => error.set(err.user_message()),
                }
                busy.set(false);
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let email_value = match validate_signup_input(
                &email.get(),
                &password.get(),
                &password_confirm.get(),
            ) {
                Ok(value) => value,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
            if !verified.get() {
                error.set("이메일 인증을 완료해주세요.".to_owned());
                return;
            }
            let password_value = password.get();
            let name_value = name.get().trim().to_owned();
            let phone_value = crate::util::format::strip_phone(&phone.get());
            busy.set(true);
            error.set(String::new());
            leptos::task::spawn_local(async move {
                let result = crate::net::api::signup(
                    &email_value,
                    &password_value,
                    (!name_value.is_empty()).then_some(name_value.as_str()),
                    (!phone_value.is_empty()).then_some(phone_value.as_str()),
                )
                .await;
                match result {
                    Ok(()) => {
                        reset();
                        open.set(false);
                        switch_to_login.set(true);
                    }
                    Err(err) => error.set(err.user_message()),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:mousedown=move |_| close()>
                <div class="modal-content signup-modal" on:mousedown=|ev| ev.stop_propagation()>
                    <button class="modal-close-btn" on:click=move |_| close()>"✕"</button>
                    <h2 class="modal-title">"회원가입"</h2>
                    <form class="modal-form" on:submit=on_submit>
                        <div class="email-verify-row">
                            <input
                                class="modal-input"
                                type="text"
                                placeholder="아이디 (이메일)"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                                disabled=move || busy.get() || verified.get()
                            />
                            <button
                                class="verify-btn"
                                type="button"
                                on:click=on_send_code
                                disabled=move || busy.get() || verified.get()
                            >
                                "인증코드 발송"
                            </button>
                        </div>
                        <Show when=move || code_sent.get() && !verified.get()>
                            <div class="email-verify-row">
                                <input
                                    class="modal-input"
                                    type="text"
                                    placeholder="인증 코드"
                                    prop:value=move || code.get()
                                    on:input=move |ev| code.set(event_target_value(&ev))
                                    disabled=move || busy.get()
                                />
                                <button
                                    class="verify-btn"
                                    type="button"
                                    on:click=on_verify_code
                                    disabled=move || busy.get()
                                >
                                    "확인"
                                </button>
                            </div>
                        </Show>
                        <input
                            class="modal-input"
                            type="password"
                            placeholder="비밀번호 (8자 이상)"
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
                        <input
                            class="modal-input"
                            type="text"
                            placeholder="이름 (선택)"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                            disabled=move || busy.get()
                        />
                        <input
                            class="modal-input"
                            type="tel"
                            placeholder="연락처 (선택)"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(format_phone(&event_target_value(&ev)))
                            disabled=move || busy.get()
                        />
                        <Show when=move || !error.get().is_empty()>
                            <p class="modal-error">{move || error.get()}</p>
                        </Show>
                        <Show when=move || !info.get().is_empty()>
                            <p class="modal-info">{move || info.get()}</p>
                        </Show>
                        <button class="modal-submit-btn" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "가입 중..." } else { "회원가입" }}
                        </button>
                    </form>
                    <div class="modal-signup">
                        <span>"이미 계정이 있으신가요?"</span>
                        <button
                            class="modal-signup-link"
                            on:click=move |_| {
                                open.set(false);
                                switch_to_login.set(true);
                            }
                        >
                            "로그인"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
