use super::*;

const NOW: i64 = 1_700_000_000_000;

#[test]
fn default_session_is_unauthenticated_and_not_ready() {
    let session = Session::default();
    assert!(!session.is_logged_in());
    assert!(!session.ready);
    assert!(session.notice.is_none());
}

#[test]
fn restore_with_valid_expiry_restores_immediately() {
    let plan = restore_plan(true, true, Some(NOW + 600_000), NOW);
    assert_eq!(plan, RestorePlan::RestoreNow);
}

#[test]
fn restore_with_expired_token_attempts_refresh() {
    assert_eq!(restore_plan(true, true, Some(NOW - 1), NOW), RestorePlan::TryRefresh);
    assert_eq!(restore_plan(true, true, Some(NOW), NOW), RestorePlan::TryRefresh);
}

#[test]
fn restore_with_unparseable_expiry_is_treated_as_expired() {
    // A token whose expiry cannot be decoded must not be trusted.
    assert_eq!(restore_plan(true, true, None, NOW), RestorePlan::TryRefresh);
}

#[test]
fn restore_without_stored_state_yields_no_session() {
    assert_eq!(restore_plan(false, false, None, NOW), RestorePlan::NoSession);
    assert_eq!(restore_plan(true, false, None, NOW), RestorePlan::NoSession);
    assert_eq!(restore_plan(false, true, Some(NOW + 1000), NOW), RestorePlan::NoSession);
}

#[test]
fn poller_is_idle_outside_the_renewal_window() {
    let action = poll_action(Some(NOW + 120_000), NOW);
    assert_eq!(action, PollAction::Idle { remaining_secs: 120 });
}

#[test]
fn poller_renews_proactively_within_sixty_seconds() {
    assert_eq!(poll_action(Some(NOW + 50_000), NOW), PollAction::RenewSoon);
    assert_eq!(poll_action(Some(NOW + RENEW_WINDOW_SECS * 1000), NOW), PollAction::RenewSoon);
}

#[test]
fn poller_escalates_at_and_after_expiry() {
    assert_eq!(poll_action(Some(NOW), NOW), PollAction::Expired);
    assert_eq!(poll_action(Some(NOW - 5_000), NOW), PollAction::Expired);
}

#[test]
fn poller_treats_unknown_expiry_as_expired() {
    assert_eq!(poll_action(None, NOW), PollAction::Expired);
}

#[test]
fn successful_renewal_leaves_the_window() {
    // After a refresh lands a fresh expiry, the very next tick is idle
    // again — no repeated refresh storm from a single near-expiry token.
    assert_eq!(poll_action(Some(NOW + 50_000), NOW), PollAction::RenewSoon);
    let renewed_expiry = NOW + 1_800_000;
    assert!(matches!(poll_action(Some(renewed_expiry), NOW + 1_000), PollAction::Idle { .. }));
}

#[test]
fn rejected_api_errors_keep_the_server_message() {
    let err = AuthError::from(crate::net::api::ApiError::Rejected("비밀번호가 올바르지 않습니다.".to_owned()));
    assert_eq!(err, AuthError::Rejected("비밀번호가 올바르지 않습니다.".to_owned()));
    assert_eq!(err.user_message(), "비밀번호가 올바르지 않습니다.");
}

#[test]
fn transport_api_errors_collapse_to_a_generic_message() {
    let err = AuthError::from(crate::net::api::ApiError::Status(500));
    assert_eq!(err, AuthError::Transport);
    assert_eq!(err.user_message(), "로그인 중 오류가 발생했습니다.");
}
