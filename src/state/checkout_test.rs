use super::*;

fn bulc() -> Product {
    Product {
        code: "BULC".to_owned(),
        name: "BULC".to_owned(),
        description: "화재 시뮬레이션".to_owned(),
    }
}

fn meteor() -> Product {
    Product {
        code: "METEOR".to_owned(),
        name: "METEOR".to_owned(),
        description: String::new(),
    }
}

fn yearly_plan() -> PricePlan {
    PricePlan {
        id: 12,
        name: "연간 플랜".to_owned(),
        price: 828_000,
        currency: "KRW".to_owned(),
    }
}

fn ready_state() -> CheckoutState {
    let mut state = CheckoutState::default();
    let seq = state.select_product(bulc());
    state.apply_plans(seq, vec![yearly_plan()]);
    state.select_plan(yearly_plan());
    state.select_method(PaymentMethod::Card(CardCompany::Shinhan));
    state.buyer = BuyerInfo {
        name: "홍길동".to_owned(),
        email: "hong@example.com".to_owned(),
        phone: "010-1234-5678".to_owned(),
        company: String::new(),
    };
    state.agree_terms = true;
    state
}

#[test]
fn fresh_page_state_starts_with_catalog_loading() {
    let state = CheckoutState::with_catalog_loading();
    assert!(state.loading_products);
    assert!(state.selected_product.is_none());
    assert!(state.products.is_empty());
}

#[test]
fn single_product_catalog_is_auto_selected() {
    let mut state = CheckoutState::default();
    let seq = state.set_products(vec![bulc()]);
    assert!(seq.is_some());
    assert_eq!(state.selected_product.as_ref().map(|p| p.code.as_str()), Some("BULC"));
}

#[test]
fn multi_product_catalog_is_not_auto_selected() {
    let mut state = CheckoutState::default();
    assert!(state.set_products(vec![bulc(), meteor()]).is_none());
    assert!(state.selected_product.is_none());
}

#[test]
fn changing_product_clears_the_plan_selection() {
    let mut state = CheckoutState::default();
    let seq = state.select_product(bulc());
    state.apply_plans(seq, vec![yearly_plan()]);
    state.select_plan(yearly_plan());

    state.select_product(meteor());
    assert!(state.selected_plan.is_none());
    assert!(state.plans.is_empty());
}

#[test]
fn stale_plan_response_is_dropped() {
    let mut state = CheckoutState::default();
    let first_seq = state.select_product(bulc());
    let second_seq = state.select_product(meteor());

    // The response for the first product arrives after the user has
    // already switched; it must not land.
    state.apply_plans(first_seq, vec![yearly_plan()]);
    assert!(state.plans.is_empty());
    assert!(state.loading_plans);

    state.apply_plans(second_seq, vec![]);
    assert!(!state.loading_plans);
    assert!(state.plans.is_empty());
}

#[test]
fn empty_plan_list_is_a_settled_state_not_an_error() {
    let mut state = CheckoutState::default();
    let seq = state.select_product(bulc());
    state.apply_plans(seq, vec![]);
    assert!(!state.loading_plans);
    assert!(state.plans.is_empty());
}

#[test]
fn validation_reports_the_first_missing_step_in_order() {
    let mut state = CheckoutState::default();
    assert_eq!(state.validate().unwrap_err(), SubmitBlock::NoProduct);

    state.select_product(bulc());
    assert_eq!(state.validate().unwrap_err(), SubmitBlock::NoPlan);

    state.select_plan(yearly_plan());
    assert_eq!(state.validate().unwrap_err(), SubmitBlock::NoMethod);

    state.select_method(PaymentMethod::Card(CardCompany::Shinhan));
    assert_eq!(state.validate().unwrap_err(), SubmitBlock::IncompleteBuyerInfo);

    state.buyer = BuyerInfo {
        name: "홍길동".to_owned(),
        email: "hong@example.com".to_owned(),
        phone: "010-1234-5678".to_owned(),
        company: String::new(),
    };
    assert_eq!(state.validate().unwrap_err(), SubmitBlock::TermsNotAccepted);

    state.agree_terms = true;
    assert!(state.validate().is_ok());
}

#[test]
fn each_block_names_its_missing_step() {
    assert_eq!(SubmitBlock::NoProduct.message(), "상품을 선택해주세요.");
    assert_eq!(SubmitBlock::NoPlan.message(), "요금제를 선택해주세요.");
    assert_eq!(SubmitBlock::NoMethod.message(), "결제 수단을 선택해주세요.");
    assert_eq!(SubmitBlock::IncompleteBuyerInfo.message(), "필수 정보를 입력해주세요.");
    assert_eq!(SubmitBlock::TermsNotAccepted.message(), "이용약관에 동의해주세요.");
}

#[test]
fn whitespace_only_buyer_fields_do_not_count() {
    let mut state = ready_state();
    state.buyer.phone = "   ".to_owned();
    assert_eq!(state.validate().unwrap_err(), SubmitBlock::IncompleteBuyerInfo);
}

#[test]
fn gateway_vocabulary_mapping_is_total() {
    assert_eq!(PaymentMethod::Card(CardCompany::Kb).gateway_method(), "카드");
    assert_eq!(PaymentMethod::EasyPay(EasyPayProvider::Toss).gateway_method(), "토스페이");
    assert_eq!(PaymentMethod::EasyPay(EasyPayProvider::BankTransfer).gateway_method(), "계좌이체");
    assert_eq!(PaymentMethod::EasyPay(EasyPayProvider::VirtualAccount).gateway_method(), "가상계좌");
}

#[test]
fn card_method_carries_uppercased_company() {
    let method = PaymentMethod::Card(CardCompany::Shinhan);
    assert_eq!(method.card_company_param(), Some("SHINHAN".to_owned()));
    assert_eq!(method.valid_hours_param(), None);
}

#[test]
fn virtual_account_carries_deposit_window() {
    let method = PaymentMethod::EasyPay(EasyPayProvider::VirtualAccount);
    assert_eq!(method.card_company_param(), None);
    assert_eq!(method.valid_hours_param(), Some(24));
}

#[test]
fn order_id_embeds_plan_id_between_prefix_and_timestamp() {
    let order_id = generate_order_id(12, 1_700_000_000_000, "a1b2c3");
    assert_eq!(order_id, "BULC_12_1700000000000_a1b2c3");
}

#[test]
fn random_suffix_is_six_chars_and_varies() {
    let a = random_order_suffix();
    let b = random_order_suffix();
    assert_eq!(a.len(), 6);
    assert_eq!(b.len(), 6);
    assert_ne!(a, b);
}

#[test]
fn submit_scenario_builds_the_expected_gateway_request() {
    let state = ready_state();
    let request = state
        .build_payment_request("https://bulc.example.com", 1_700_000_000_000, "a1b2c3")
        .unwrap();

    assert_eq!(request.method, "카드");
    assert_eq!(request.amount, 828_000);
    assert!(request.order_id.starts_with("BULC_12_"));
    assert_eq!(request.order_name, "BULC - 연간 플랜");
    assert_eq!(request.customer_name, "홍길동");
    assert_eq!(request.customer_email, "hong@example.com");
    assert_eq!(request.success_url, "https://bulc.example.com/payment/success");
    assert_eq!(request.fail_url, "https://bulc.example.com/payment/fail");
    assert_eq!(request.card_company, Some("SHINHAN".to_owned()));
    assert_eq!(request.valid_hours, None);
}

#[test]
fn blocked_submit_builds_no_request() {
    let mut state = ready_state();
    state.agree_terms = false;
    let err = state
        .build_payment_request("https://bulc.example.com", 0, "x")
        .unwrap_err();
    assert_eq!(err, SubmitBlock::TermsNotAccepted);
}

#[test]
fn buyer_prefill_fills_only_empty_fields() {
    let mut buyer = BuyerInfo {
        name: "이미입력".to_owned(),
        ..BuyerInfo::default()
    };
    let profile = UserProfile {
        email: "hong@example.com".to_owned(),
        name: "홍길동".to_owned(),
        phone: "01012345678".to_owned(),
        company: None,
    };
    buyer.prefill(&profile);
    assert_eq!(buyer.name, "이미입력");
    assert_eq!(buyer.email, "hong@example.com");
    assert_eq!(buyer.phone, "01012345678");
}
