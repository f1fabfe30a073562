//! Account page: profile edits, password change, language preference.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::net::types::UserProfile;
use crate::state::session::Session;
use crate::util::format::format_phone;
use crate::util::{guard, language};

/// Signed-in account page. The guard sends anonymous visitors back to the
/// portal once the session restore settles.
#[component]
pub fn MyPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    guard::install_require_auth(session, "/", navigate);

    let profile = RwSignal::new(UserProfile::default());
    let profile_loaded = RwSignal::new(false);
    let profile_notice = RwSignal::new(String::new());
    let profile_error = RwSignal::new(String::new());

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let new_password_confirm = RwSignal::new(String::new());
    let password_notice = RwSignal::new(String::new());
    let password_error = RwSignal::new(String::new());

    let lang = RwSignal::new(language::read_preference());

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let Some(token) = crate::state::session::access_token() else {
                return;
            };
            match crate::net::api::fetch_profile(&token).await {
                Ok(loaded) => {
                    profile.set(loaded);
                    profile_loaded.set(true);
                }
                Err(err) => profile_error.set(err.user_message()),
            }
        });
    }

    let on_save_profile = move |_| {
        profile_notice.set(String::new());
        profile_error.set(String::new());
        #[cfg(feature = "hydrate")]
        {
            let snapshot = profile.get_untracked();
            if snapshot.name.trim().is_empty() {
                profile_error.set("이름을 입력해주세요.".to_owned());
                return;
            }
            leptos::task::spawn_local(async move {
                let Some(token) = crate::state::session::access_token() else {
                    return;
                };
                match crate::net::api::update_profile(&token, &snapshot).await {
                    Ok(()) => profile_notice.set("프로필이 저장되었습니다.".to_owned()),
                    Err(err) => profile_error.set(err.user_message()),
                }
            });
        }
    };

    let on_change_password = move |_| {
        password_notice.set(String::new());
        password_error.set(String::new());
        #[cfg(feature = "hydrate")]
        {
            let current = current_password.get_untracked();
            let new = new_password.get_untracked();
            let confirm = new_password_confirm.get_untracked();
            if current.is_empty() {
                password_error.set("현재 비밀번호를 입력해주세요.".to_owned());
                return;
            }
            if new.chars().count() < 8 {
                password_error.set("새 비밀번호는 8자 이상이어야 합니다.".to_owned());
                return;
            }
            if new != confirm {
                password_error.set("새 비밀번호가 일치하지 않습니다.".to_owned());
                return;
            }
            leptos::task::spawn_local(async move {
                let Some(token) = crate::state::session::access_token() else {
                    return;
                };
                match crate::net::api::change_password(&token, &current, &new).await {
                    Ok(()) => {
                        password_notice.set("비밀번호가 변경되었습니다.".to_owned());
                        current_password.set(String::new());
                        new_password.set(String::new());
                        new_password_confirm.set(String::new());
                    }
                    Err(err) => password_error.set(err.user_message()),
                }
            });
        }
    };

    let on_pick_language = move |code: &'static str| {
        language::save_preference(code);
        lang.set(code);
    };

    view! {
        <div class="my-page">
            <Header/>
            <main class="my-page-main">
                <h1 class="my-page-title">"마이페이지"</h1>

                <section class="my-page-section">
                    <h2>"프로필"</h2>
                    <Show
                        when=move || profile_loaded.get()
                        fallback=|| view! { <p class="loading">"프로필을 불러오는 중..."</p> }
                    >
                        <div class="profile-form">
                            <label class="profile-field">
                                <span>"이메일"</span>
                                <input
                                    class="profile-input"
                                    type="email"
                                    prop:value=move || profile.with(|p| p.email.clone())
                                    disabled=true
                                />
                            </label>
                            <label class="profile-field">
                                <span>"이름"</span>
                                <input
                                    class="profile-input"
                                    type="text"
                                    prop:value=move || profile.with(|p| p.name.clone())
                                    on:input=move |ev| {
                                        profile.update(|p| p.name = event_target_value(&ev));
                                    }
                                />
                            </label>
                            <label class="profile-field">
                                <span>"연락처"</span>
                                <input
                                    class="profile-input"
                                    type="tel"
                                    prop:value=move || profile.with(|p| p.phone.clone())
                                    on:input=move |ev| {
                                        profile.update(|p| {
                                            p.phone = format_phone(&event_target_value(&ev));
                                        });
                                    }
                                />
                            </label>
                            <label class="profile-field">
                                <span>"회사명"</span>
                                <input
                                    class="profile-input"
                                    type="text"
                                    prop:value=move || {
                                        profile.with(|p| p.company.clone().unwrap_or_default())
                                    }
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        profile.update(|p| {
                                            p.company = (!value.is_empty()).then_some(value);
                                        });
                                    }
                                />
                            </label>
                            <button class="my-page-btn" on:click=on_save_profile>"저장"</button>
                        </div>
                    </Show>
                    <Show when=move || !profile_notice.get().is_empty()>
                        <p class="my-page-notice">{move || profile_notice.get()}</p>
                    </Show>
                    <Show when=move || !profile_error.get().is_empty()>
                        <p class="my-page-error">{move || profile_error.get()}</p>
                    </Show>
                </section>

                <section class="my-page-section">
                    <h2>"비밀번호 변경"</h2>
                    <div class="password-form">
                        <input
                            class="profile-input"
                            type="password"
                            placeholder="현재 비밀번호"
                            prop:value=move || current_password.get()
                            on:input=move |ev| current_password.set(event_target_value(&ev))
                        />
                        <input
                            class="profile-input"
                            type="password"
                            placeholder="새 비밀번호 (8자 이상)"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                        <input
                            class="profile-input"
                            type="password"
                            placeholder="새 비밀번호 확인"
                            prop:value=move || new_password_confirm.get()
                            on:input=move |ev| new_password_confirm.set(event_target_value(&ev))
                        />
                        <button class="my-page-btn" on:click=on_change_password>"변경"</button>
                    </div>
                    <Show when=move || !password_notice.get().is_empty()>
                        <p class="my-page-notice">{move || password_notice.get()}</p>
                    </Show>
                    <Show when=move || !password_error.get().is_empty()>
                        <p class="my-page-error">{move || password_error.get()}</p>
                    </Show>
                </section>

                <section class="my-page-section">
                    <h2>"언어"</h2>
                    <div class="language-buttons">
                        {language::SUPPORTED
                            .iter()
                            .map(|&code| {
                                view! {
                                    <button
                                        class="language-btn"
                                        class:selected=move || lang.get() == code
                                        on:click=move |_| on_pick_language(code)
                                    >
                                        {language::label(code)}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </main>
        </div>
    }
}
