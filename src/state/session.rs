//! Session lifecycle: the single source of truth for "who is logged in".
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided app-wide as `RwSignal<Session>` context. Pages read it; only the
//! operations in this module mutate it, so there is never a
//! partially-authenticated state: a user is present iff valid (or freshly
//! refreshed) tokens are persisted.
//!
//! DESIGN
//! ======
//! Restore and expiry decisions are pure functions over `(stored state,
//! now)`; the async glue around them only moves bytes between storage, the
//! API and the signal. An access token whose expiry cannot be parsed is
//! treated as already expired — never as "no expiry known".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use thiserror::Error;

use crate::net::api::{self, ApiError};
use crate::net::types::User;
use crate::util::{history, storage, token};

pub const KEY_ACCESS_TOKEN: &str = "accessToken";
pub const KEY_REFRESH_TOKEN: &str = "refreshToken";
pub const KEY_TOKEN_EXPIRATION: &str = "tokenExpiration";
pub const KEY_USER: &str = "user";

/// Remaining lifetime below which the poller renews proactively.
pub const RENEW_WINDOW_SECS: i64 = 60;

const SESSION_EXPIRED_NOTICE: &str = "세션이 만료되었습니다. 다시 로그인해주세요.";

/// Process-wide authentication state.
///
/// `ready` is a one-shot flag: false until the initial restore attempt (and
/// any refresh it needs) settles, then true for the rest of the page life.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub user: Option<User>,
    pub ready: bool,
    /// Dismissible banner text, e.g. after a forced expiry logout.
    pub notice: Option<String>,
}

impl Session {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Failure of a login attempt, already shaped for display.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The backend rejected the attempt and said why.
    #[error("{0}")]
    Rejected(String),
    /// The attempt never reached a verdict (network, decode).
    #[error("로그인 중 오류가 발생했습니다.")]
    Transport,
}

impl AuthError {
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Rejected(message) => Self::Rejected(message),
            _ => Self::Transport,
        }
    }
}

/// What restore-on-load should do with the persisted state it found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestorePlan {
    /// Tokens still valid; restore the user immediately.
    RestoreNow,
    /// Tokens expired or expiry unknown; a successful refresh may rescue
    /// the session, otherwise it is discarded.
    TryRefresh,
    /// Nothing usable in storage.
    NoSession,
}

/// Decide the restore path from persisted state. `expiry` is `None` both
/// when the token has no parseable expiry and when no token exists.
#[must_use]
pub fn restore_plan(
    has_stored_user: bool,
    has_access_token: bool,
    expiry_millis: Option<i64>,
    now_millis: i64,
) -> RestorePlan {
    if !has_stored_user || !has_access_token {
        return RestorePlan::NoSession;
    }
    match expiry_millis {
        Some(expiry) if expiry > now_millis => RestorePlan::RestoreNow,
        // Unparseable expiry counts as expired; an untrusted token is
        // never kept alive indefinitely.
        _ => RestorePlan::TryRefresh,
    }
}

/// One tick of the session poller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollAction {
    /// Token already expired (or expiry unknown): refresh or force logout.
    Expired,
    /// Inside the renewal window: refresh proactively, session stays up.
    RenewSoon,
    /// Nothing to do; carries the remaining lifetime for display.
    Idle { remaining_secs: i64 },
}

/// Classify the remaining token lifetime at `now_millis`.
#[must_use]
pub fn poll_action(expiry_millis: Option<i64>, now_millis: i64) -> PollAction {
    let Some(expiry) = expiry_millis else {
        return PollAction::Expired;
    };
    let remaining_secs = (expiry - now_millis) / 1000;
    if remaining_secs <= 0 {
        PollAction::Expired
    } else if remaining_secs <= RENEW_WINDOW_SECS {
        PollAction::RenewSoon
    } else {
        PollAction::Idle { remaining_secs }
    }
}

fn now_millis() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

/// Persist a fresh token pair and the derived expiry. A missing rotation
/// keeps the previous refresh token.
fn persist_tokens(access_token: &str, refresh_token: Option<&str>) {
    storage::save_string(KEY_ACCESS_TOKEN, access_token);
    if let Some(refresh_token) = refresh_token {
        storage::save_string(KEY_REFRESH_TOKEN, refresh_token);
    }
    match token::token_expiry_millis(access_token) {
        Some(expiry) => storage::save_string(KEY_TOKEN_EXPIRATION, &expiry.to_string()),
        None => storage::remove(KEY_TOKEN_EXPIRATION),
    }
}

fn clear_persisted() {
    storage::remove(KEY_USER);
    storage::remove(KEY_ACCESS_TOKEN);
    storage::remove(KEY_REFRESH_TOKEN);
    storage::remove(KEY_TOKEN_EXPIRATION);
}

/// Stored bearer token for authorized calls, if any.
#[must_use]
pub fn access_token() -> Option<String> {
    storage::load_string(KEY_ACCESS_TOKEN)
}

/// Credential login. On success the session and storage are updated
/// together; on failure neither is touched.
///
/// # Errors
///
/// `AuthError::Rejected` carries the backend's message for bad credentials.
pub async fn login(session: RwSignal<Session>, email: &str, password: &str) -> Result<(), AuthError> {
    let data = api::login(email, password).await?;
    persist_tokens(&data.access_token, Some(&data.refresh_token));
    storage::save_json(KEY_USER, &data.user);
    session.update(|s| {
        s.user = Some(data.user);
        s.notice = None;
    });
    history::replace_current_entry();
    Ok(())
}

/// OAuth login: store the handed-off tokens, then identify their holder.
/// If the who-am-I call fails the just-stored tokens are rolled back, so a
/// token-without-user state never persists.
///
/// # Errors
///
/// Propagates the who-am-I failure after rolling back storage.
pub async fn login_with_tokens(
    session: RwSignal<Session>,
    access_token: &str,
    refresh_token: &str,
) -> Result<(), AuthError> {
    persist_tokens(access_token, Some(refresh_token));
    match api::fetch_me(access_token).await {
        Ok(user) => {
            storage::save_json(KEY_USER, &user);
            session.update(|s| {
                s.user = Some(user);
                s.notice = None;
            });
            history::replace_current_entry();
            Ok(())
        }
        Err(err) => {
            clear_persisted();
            Err(err.into())
        }
    }
}

/// Synchronous logout: clear the signal and every persisted session field,
/// then replace the history entry so back-navigation cannot resurface an
/// authenticated view.
pub fn logout(session: RwSignal<Session>) {
    session.update(|s| s.user = None);
    clear_persisted();
    history::replace_current_entry();
}

/// Exchange the stored refresh token for a new pair. Returns whether it
/// worked; on failure nothing is mutated and the caller decides what to do.
pub async fn refresh() -> bool {
    let Some(refresh_token) = storage::load_string(KEY_REFRESH_TOKEN) else {
        return false;
    };
    match api::refresh(&refresh_token).await {
        Ok(data) => {
            persist_tokens(&data.access_token, data.refresh_token.as_deref());
            true
        }
        Err(err) => {
            leptos::logging::warn!("token refresh failed: {err}");
            false
        }
    }
}

/// Restore the session from storage at startup. Runs to completion before
/// any guarded view decides anything: `ready` flips to true exactly once,
/// at the end, on every path.
pub async fn restore_on_load(session: RwSignal<Session>) {
    let stored_user: Option<User> = storage::load_json(KEY_USER);
    let access = storage::load_string(KEY_ACCESS_TOKEN);
    let expiry = access.as_deref().and_then(token::token_expiry_millis);

    match restore_plan(stored_user.is_some(), access.is_some(), expiry, now_millis()) {
        RestorePlan::RestoreNow => {
            if let Some(expiry) = expiry {
                storage::save_string(KEY_TOKEN_EXPIRATION, &expiry.to_string());
            }
            session.update(|s| s.user = stored_user);
        }
        RestorePlan::TryRefresh => {
            if refresh().await {
                session.update(|s| s.user = stored_user);
            } else {
                clear_persisted();
            }
        }
        RestorePlan::NoSession => {}
    }
    session.update(|s| s.ready = true);
}

/// Poll remaining token lifetime once per second while a user is present.
///
/// The loop is torn down whenever the user signal goes to `None` (and on
/// component cleanup) and re-established on the next login, so no stale
/// timer ever acts on a later session.
pub fn install_session_poller(session: RwSignal<Session>) {
    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let active: StoredValue<Option<Arc<AtomicBool>>> = StoredValue::new(None);
        let logged_in = Memo::new(move |_| session.with(|s| s.user.is_some()));

        Effect::new(move || {
            let is_logged_in = logged_in.get();
            if let Some(flag) = active.get_value() {
                flag.store(false, Ordering::Relaxed);
            }
            active.set_value(None);
            if !is_logged_in {
                return;
            }

            let alive = Arc::new(AtomicBool::new(true));
            active.set_value(Some(alive.clone()));
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                    if !alive.load(Ordering::Relaxed) {
                        break;
                    }
                    let expiry = storage::load_string(KEY_TOKEN_EXPIRATION)
                        .and_then(|raw| raw.parse::<i64>().ok());
                    match poll_action(expiry, now_millis()) {
                        PollAction::Idle { .. } => {}
                        PollAction::RenewSoon => {
                            // Best effort; the session survives a miss here
                            // and the expired branch handles the endgame.
                            let _ = refresh().await;
                        }
                        PollAction::Expired => {
                            if !refresh().await {
                                session.update(|s| {
                                    s.user = None;
                                    s.notice = Some(SESSION_EXPIRED_NOTICE.to_owned());
                                });
                                clear_persisted();
                                history::replace_current_entry();
                                break;
                            }
                        }
                    }
                }
            });
        });

        on_cleanup(move || {
            if let Some(flag) = active.get_value() {
                flag.store(false, Ordering::Relaxed);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}
