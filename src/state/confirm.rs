//! Payment-result reconciliation with idempotent confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway redirects back with `paymentKey`/`orderId`/`amount` (success)
//! or `code`/`message` (failure). Confirmation must reach the backend exactly
//! once per order id: a persisted set of already-confirmed ids short-circuits
//! replays from reloads and back-navigation, and a mount-level flag guards
//! against a double-invoked effect firing two concurrent requests.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use crate::util::storage;

pub const KEY_PROCESSED_PAYMENTS: &str = "processedPayments";

/// Validated query parameters of the success redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmParams {
    pub payment_key: String,
    pub order_id: String,
    pub amount: i64,
}

/// Parse the success-redirect query. All three parameters must be present
/// and the amount must be a positive integer; anything else is a terminal
/// page error, not a retryable one.
#[must_use]
pub fn parse_success_params(
    payment_key: Option<&str>,
    order_id: Option<&str>,
    amount: Option<&str>,
) -> Option<ConfirmParams> {
    let payment_key = payment_key.filter(|v| !v.is_empty())?;
    let order_id = order_id.filter(|v| !v.is_empty())?;
    let amount: i64 = amount?.parse().ok()?;
    if amount <= 0 {
        return None;
    }
    Some(ConfirmParams {
        payment_key: payment_key.to_owned(),
        order_id: order_id.to_owned(),
        amount,
    })
}

/// Recover the plan id embedded in an order id
/// (`BULC_{planId}_{timestamp}_{random}`). It is parsed once here and then
/// passed explicitly in the confirmation payload.
#[must_use]
pub fn plan_id_from_order_id(order_id: &str) -> Option<i64> {
    let plan_id: i64 = order_id.split('_').nth(1)?.parse().ok()?;
    (plan_id > 0).then_some(plan_id)
}

/// Persisted set of order ids whose confirmation already succeeded.
/// Append-only from the client's perspective; never pruned in-session.
#[derive(Clone, Debug, Default)]
pub struct ProcessedPayments {
    order_ids: Vec<String>,
}

impl ProcessedPayments {
    /// Load the persisted set; missing or corrupt storage reads as empty.
    #[must_use]
    pub fn load() -> Self {
        Self {
            order_ids: storage::load_json(KEY_PROCESSED_PAYMENTS).unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn contains(&self, order_id: &str) -> bool {
        self.order_ids.iter().any(|id| id == order_id)
    }

    /// Record a successfully confirmed order and persist the set.
    pub fn record(&mut self, order_id: &str) {
        if self.contains(order_id) {
            return;
        }
        self.order_ids.push(order_id.to_owned());
        storage::save_json(KEY_PROCESSED_PAYMENTS, &self.order_ids);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order_ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order_ids.is_empty()
    }
}

/// What the success page shows once confirmation settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub order_id: String,
    pub amount: i64,
    pub order_name: Option<String>,
    pub license_key: Option<String>,
    pub license_valid_until: Option<String>,
    /// True when reconstructed from the idempotency set without a backend
    /// call; license details are unavailable on that path.
    pub replayed: bool,
}

impl Receipt {
    /// Receipt for an order id already present in the idempotency set.
    #[must_use]
    pub fn replayed(params: &ConfirmParams) -> Self {
        Self {
            order_id: params.order_id.clone(),
            amount: params.amount,
            order_name: None,
            license_key: None,
            license_valid_until: None,
            replayed: true,
        }
    }
}

/// Mount-scoped re-entrancy gate for the confirmation request. The first
/// `try_begin` wins; every later call is a no-op, so a double-invoked
/// effect can never issue two concurrent confirmations for one mount.
#[derive(Debug, Default)]
pub struct ConfirmGate {
    started: bool,
}

impl ConfirmGate {
    /// Claim the confirmation slot. True exactly once per gate.
    pub fn try_begin(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }
}

/// Success-page lifecycle for one mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmPhase {
    Processing,
    Done(Receipt),
    /// Backend rejected or the redirect was malformed; retry starts a new
    /// attempt with a fresh order id.
    Failed(String),
}

/// Whether a gateway failure code is a user-initiated cancellation, shown
/// without alarm.
#[must_use]
pub fn is_cancel_code(code: Option<&str>) -> bool {
    code == Some("PAY_PROCESS_CANCELED")
}

/// Friendly description for the failure-redirect parameters.
#[must_use]
pub fn fail_description(code: Option<&str>, message: Option<&str>) -> String {
    match code {
        Some("PAY_PROCESS_CANCELED") => "결제가 취소되었습니다.".to_owned(),
        Some("PAY_PROCESS_ABORTED") => "결제 진행 중 문제가 발생했습니다.".to_owned(),
        Some("REJECT_CARD_COMPANY") => "카드사에서 결제를 거부했습니다.".to_owned(),
        _ => message
            .filter(|m| !m.is_empty())
            .map_or_else(|| "결제 처리 중 오류가 발생했습니다.".to_owned(), str::to_owned),
    }
}
