//! Site header: navigation chrome, login state, and the auth modals.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::login_modal::LoginModal;
use crate::components::signup_modal::SignupModal;
use crate::state::session::{self, Session};

/// Header bar with logo, nav links, and a user menu that reflects the
/// session. The admin link only renders for back-office roles.
#[component]
pub fn Header(#[prop(optional)] hide_user_menu: bool) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let show_login = RwSignal::new(false);
    let show_signup = RwSignal::new(false);

    let user_name = move || {
        session.with(|s| s.user.as_ref().map(|u| u.display_name().to_owned()))
    };
    let is_back_office = move || {
        session.with(|s| s.user.as_ref().is_some_and(|u| u.role().is_back_office()))
    };

    // StoredValue keeps the handler Copy so nested view closures stay Fn.
    let navigate = StoredValue::new(navigate);
    let on_logout = move |_| {
        session::logout(session);
        navigate.with_value(|n| n("/", NavigateOptions::default()));
    };

    let on_dismiss_notice = move |_| {
        session.update(|s| s.notice = None);
    };

    view! {
        <header class="site-header">
            <a href="/" class="site-logo">"BulC"</a>
            <nav class="site-nav">
                <a href="/payment">"구매"</a>
                <Show when=move || session.with(Session::is_logged_in)>
                    <a href="/mypage">"마이페이지"</a>
                </Show>
                <Show when=is_back_office>
                    <a href="/admin">"관리자"</a>
                </Show>
            </nav>
            <Show when=move || !hide_user_menu>
                <div class="user-menu">
                    {move || match user_name() {
                        Some(name) => view! {
                            <span class="user-name">{name}</span>
                            <button class="header-btn" on:click=on_logout>"로그아웃"</button>
                        }
                        .into_any(),
                        None => view! {
                            <button class="header-btn" on:click=move |_| show_login.set(true)>
                                "로그인"
                            </button>
                            <button class="header-btn" on:click=move |_| show_signup.set(true)>
                                "회원가입"
                            </button>
                        }
                        .into_any(),
                    }}
                </div>
            </Show>
            <Show when=move || session.with(|s| s.notice.is_some())>
                <div class="session-notice">
                    <span>{move || session.with(|s| s.notice.clone().unwrap_or_default())}</span>
                    <button class="notice-dismiss" on:click=on_dismiss_notice>"닫기"</button>
                </div>
            </Show>
        </header>
        <LoginModal open=show_login switch_to_signup=show_signup/>
        <SignupModal open=show_signup switch_to_login=show_login/>
    }
}
