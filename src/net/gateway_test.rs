use super::*;

fn card_request() -> PaymentRequest {
    PaymentRequest {
        method: "카드",
        amount: 828_000,
        order_id: "BULC_12_1700000000000_a1b2c3".to_owned(),
        order_name: "BULC - 연간 플랜".to_owned(),
        customer_name: "홍길동".to_owned(),
        customer_email: "hong@example.com".to_owned(),
        success_url: "https://bulc.example.com/payment/success".to_owned(),
        fail_url: "https://bulc.example.com/payment/fail".to_owned(),
        card_company: Some("SHINHAN".to_owned()),
        valid_hours: None,
    }
}

#[test]
fn options_carry_amount_order_and_return_urls() {
    let options = card_request().to_options();
    assert_eq!(options["amount"], 828_000);
    assert_eq!(options["orderId"], "BULC_12_1700000000000_a1b2c3");
    assert_eq!(options["orderName"], "BULC - 연간 플랜");
    assert_eq!(options["successUrl"], "https://bulc.example.com/payment/success");
    assert_eq!(options["failUrl"], "https://bulc.example.com/payment/fail");
}

#[test]
fn card_requests_include_card_company_only() {
    let options = card_request().to_options();
    assert_eq!(options["cardCompany"], "SHINHAN");
    assert!(options.get("validHours").is_none());
}

#[test]
fn virtual_account_requests_include_deposit_window() {
    let mut request = card_request();
    request.method = "가상계좌";
    request.card_company = None;
    request.valid_hours = Some(24);
    let options = request.to_options();
    assert!(options.get("cardCompany").is_none());
    assert_eq!(options["validHours"], 24);
}

#[test]
fn user_cancel_is_detected_from_sdk_messages() {
    assert!(is_user_cancel("USER_CANCEL: 사용자가 결제를 취소했습니다"));
    assert!(is_user_cancel("PAY_PROCESS_CANCELED"));
    assert!(!is_user_cancel("INVALID_CARD_COMPANY"));
}
