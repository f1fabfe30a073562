use super::*;

#[test]
fn success_params_parse_when_complete() {
    let params = parse_success_params(Some("pk_123"), Some("BULC_12_1700000000000_a1b2c3"), Some("828000"));
    assert_eq!(
        params,
        Some(ConfirmParams {
            payment_key: "pk_123".to_owned(),
            order_id: "BULC_12_1700000000000_a1b2c3".to_owned(),
            amount: 828_000,
        })
    );
}

#[test]
fn missing_or_empty_params_are_rejected() {
    assert_eq!(parse_success_params(None, Some("o"), Some("1000")), None);
    assert_eq!(parse_success_params(Some("pk"), None, Some("1000")), None);
    assert_eq!(parse_success_params(Some("pk"), Some("o"), None), None);
    assert_eq!(parse_success_params(Some(""), Some("o"), Some("1000")), None);
}

#[test]
fn non_numeric_or_non_positive_amounts_are_rejected() {
    assert_eq!(parse_success_params(Some("pk"), Some("o"), Some("lots")), None);
    assert_eq!(parse_success_params(Some("pk"), Some("o"), Some("0")), None);
    assert_eq!(parse_success_params(Some("pk"), Some("o"), Some("-5")), None);
}

#[test]
fn plan_id_is_recovered_from_order_id() {
    assert_eq!(plan_id_from_order_id("BULC_12_1700000000000_a1b2c3"), Some(12));
}

#[test]
fn malformed_order_ids_yield_no_plan_id() {
    assert_eq!(plan_id_from_order_id("BULC"), None);
    assert_eq!(plan_id_from_order_id("BULC_abc_123"), None);
    assert_eq!(plan_id_from_order_id("BULC_0_123_x"), None);
    assert_eq!(plan_id_from_order_id(""), None);
}

#[test]
fn processed_set_starts_empty_and_records_once() {
    let mut set = ProcessedPayments::default();
    assert!(set.is_empty());
    assert!(!set.contains("BULC_12_1_a"));

    set.record("BULC_12_1_a");
    assert!(set.contains("BULC_12_1_a"));
    assert_eq!(set.len(), 1);

    // Recording the same order again is a no-op — append-only, deduped.
    set.record("BULC_12_1_a");
    assert_eq!(set.len(), 1);
}

#[test]
fn replayed_receipt_reconstructs_from_params_only() {
    let params = ConfirmParams {
        payment_key: "pk".to_owned(),
        order_id: "BULC_12_1_a".to_owned(),
        amount: 828_000,
    };
    let receipt = Receipt::replayed(&params);
    assert!(receipt.replayed);
    assert_eq!(receipt.order_id, "BULC_12_1_a");
    assert_eq!(receipt.amount, 828_000);
    assert!(receipt.license_key.is_none());
}

#[test]
fn cancel_code_is_distinguished_from_other_failures() {
    assert!(is_cancel_code(Some("PAY_PROCESS_CANCELED")));
    assert!(!is_cancel_code(Some("PAY_PROCESS_ABORTED")));
    assert!(!is_cancel_code(None));
}

#[test]
fn fail_description_maps_known_codes() {
    assert_eq!(fail_description(Some("PAY_PROCESS_CANCELED"), None), "결제가 취소되었습니다.");
    assert_eq!(fail_description(Some("PAY_PROCESS_ABORTED"), None), "결제 진행 중 문제가 발생했습니다.");
    assert_eq!(fail_description(Some("REJECT_CARD_COMPANY"), None), "카드사에서 결제를 거부했습니다.");
}

#[test]
fn unknown_codes_fall_back_to_gateway_message_then_generic() {
    assert_eq!(fail_description(Some("WEIRD"), Some("사유")), "사유");
    assert_eq!(fail_description(None, Some("")), "결제 처리 중 오류가 발생했습니다.");
    assert_eq!(fail_description(None, None), "결제 처리 중 오류가 발생했습니다.");
}

#[test]
fn confirm_gate_admits_exactly_one_attempt() {
    let mut gate = ConfirmGate::default();
    assert!(gate.try_begin());
    assert!(!gate.try_begin());
    assert!(!gate.try_begin());
}
