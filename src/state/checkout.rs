//! Checkout state machine: product → plan → method → buyer info → submit.
//!
//! DESIGN
//! ======
//! All transitions and the submit guard are synchronous methods on
//! `CheckoutState`; the page's async fetches feed results back through
//! sequence-checked setters so a stale plan response can never overwrite a
//! newer product selection. Submission produces a fully-assembled
//! `PaymentRequest` or the first missing precondition, named — there is no
//! generic "something is wrong" path.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use crate::net::gateway::PaymentRequest;
use crate::net::types::{PricePlan, Product, UserProfile};

/// Card issuers offered in the card modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardCompany {
    Shinhan,
    Samsung,
    Kb,
    Hyundai,
    Lotte,
    Bc,
    Hana,
    Woori,
}

impl CardCompany {
    pub const ALL: [Self; 8] = [
        Self::Shinhan,
        Self::Samsung,
        Self::Kb,
        Self::Hyundai,
        Self::Lotte,
        Self::Bc,
        Self::Hana,
        Self::Woori,
    ];

    /// Stable id used in the gateway's `cardCompany` field (uppercased).
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Shinhan => "shinhan",
            Self::Samsung => "samsung",
            Self::Kb => "kb",
            Self::Hyundai => "hyundai",
            Self::Lotte => "lotte",
            Self::Bc => "bc",
            Self::Hana => "hana",
            Self::Woori => "woori",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Shinhan => "신한카드",
            Self::Samsung => "삼성카드",
            Self::Kb => "KB국민카드",
            Self::Hyundai => "현대카드",
            Self::Lotte => "롯데카드",
            Self::Bc => "BC카드",
            Self::Hana => "하나카드",
            Self::Woori => "우리카드",
        }
    }
}

/// Easy-pay variants offered in the easy-pay modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EasyPayProvider {
    Toss,
    BankTransfer,
    VirtualAccount,
}

impl EasyPayProvider {
    pub const ALL: [Self; 3] = [Self::Toss, Self::BankTransfer, Self::VirtualAccount];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Toss => "토스",
            Self::BankTransfer => "계좌이체",
            Self::VirtualAccount => "가상계좌",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Toss => "토스로 간편하게 결제",
            Self::BankTransfer => "실시간 계좌이체",
            Self::VirtualAccount => "가상계좌 발급 후 입금",
        }
    }
}

/// Confirmed payment-method selection. The closed set keeps the mapping to
/// the gateway vocabulary total — a new variant will not compile until it
/// is mapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentMethod {
    Card(CardCompany),
    EasyPay(EasyPayProvider),
}

impl PaymentMethod {
    /// Gateway method name, exhaustively mapped.
    #[must_use]
    pub fn gateway_method(self) -> &'static str {
        match self {
            Self::Card(_) => "카드",
            Self::EasyPay(EasyPayProvider::Toss) => "토스페이",
            Self::EasyPay(EasyPayProvider::BankTransfer) => "계좌이체",
            Self::EasyPay(EasyPayProvider::VirtualAccount) => "가상계좌",
        }
    }

    /// `cardCompany` request field, card payments only.
    #[must_use]
    pub fn card_company_param(self) -> Option<String> {
        match self {
            Self::Card(company) => Some(company.id().to_ascii_uppercase()),
            Self::EasyPay(_) => None,
        }
    }

    /// Deposit window, virtual-account payments only.
    #[must_use]
    pub fn valid_hours_param(self) -> Option<u32> {
        match self {
            Self::EasyPay(EasyPayProvider::VirtualAccount) => Some(24),
            _ => None,
        }
    }

    /// Short label shown on the method button after confirmation.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Card(company) => company.label(),
            Self::EasyPay(provider) => provider.label(),
        }
    }
}

/// Buyer contact fields; name/email/phone are required for submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BuyerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

impl BuyerInfo {
    /// Pre-fill empty required fields from the authenticated profile,
    /// leaving anything the user already typed untouched.
    pub fn prefill(&mut self, profile: &UserProfile) {
        if self.name.is_empty() {
            self.name = profile.name.clone();
        }
        if self.email.is_empty() {
            self.email = profile.email.clone();
        }
        if self.phone.is_empty() {
            self.phone = profile.phone.clone();
        }
    }

    #[must_use]
    pub fn required_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty() && !self.phone.trim().is_empty()
    }
}

/// First missing submission precondition, in guard order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlock {
    NoProduct,
    NoPlan,
    NoMethod,
    IncompleteBuyerInfo,
    TermsNotAccepted,
}

impl SubmitBlock {
    /// Message naming the missing step.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NoProduct => "상품을 선택해주세요.",
            Self::NoPlan => "요금제를 선택해주세요.",
            Self::NoMethod => "결제 수단을 선택해주세요.",
            Self::IncompleteBuyerInfo => "필수 정보를 입력해주세요.",
            Self::TermsNotAccepted => "이용약관에 동의해주세요.",
        }
    }
}

/// Client-side order state, built incrementally across the flow.
#[derive(Clone, Debug, Default)]
pub struct CheckoutState {
    pub products: Vec<Product>,
    pub loading_products: bool,
    pub plans: Vec<PricePlan>,
    pub loading_plans: bool,
    pub selected_product: Option<Product>,
    pub selected_plan: Option<PricePlan>,
    pub method: Option<PaymentMethod>,
    pub buyer: BuyerInfo,
    pub agree_terms: bool,
    /// Monotonic key tying a plan fetch to the product selection that
    /// started it; responses for older keys are dropped.
    plan_request_seq: u64,
}

impl CheckoutState {
    /// Initial page state: the catalog fetch is already in flight. The
    /// fetch-sequence field is private, so pages start from here instead
    /// of a struct literal.
    #[must_use]
    pub fn with_catalog_loading() -> Self {
        Self {
            loading_products: true,
            ..Self::default()
        }
    }

    /// Install the fetched catalog. A single-product catalog is
    /// auto-selected to skip a pointless step; when that happens the plan
    /// fetch key is returned so the caller can start the fetch.
    pub fn set_products(&mut self, products: Vec<Product>) -> Option<u64> {
        self.loading_products = false;
        let seq = if products.len() == 1 {
            Some(self.select_product(products[0].clone()))
        } else {
            None
        };
        self.products = products;
        seq
    }

    /// Choose a product. The plan selection is cleared unconditionally —
    /// plans are product-scoped and a cross-product plan must never reach
    /// submission — and any in-flight plan fetch is invalidated.
    pub fn select_product(&mut self, product: Product) -> u64 {
        self.selected_product = Some(product);
        self.selected_plan = None;
        self.plans.clear();
        self.loading_plans = true;
        self.plan_request_seq += 1;
        self.plan_request_seq
    }

    /// Install a plan-list response. Stale responses (an older `seq`) are
    /// ignored: last selection wins. An empty list is a valid result.
    pub fn apply_plans(&mut self, seq: u64, plans: Vec<PricePlan>) {
        if seq != self.plan_request_seq {
            return;
        }
        self.loading_plans = false;
        self.plans = plans;
    }

    /// Mark a plan fetch as settled without data (fetch error path).
    pub fn plan_load_failed(&mut self, seq: u64) {
        if seq == self.plan_request_seq {
            self.loading_plans = false;
        }
    }

    pub fn select_plan(&mut self, plan: PricePlan) {
        self.selected_plan = Some(plan);
    }

    /// Confirm a payment method. Only called on explicit modal
    /// confirmation, never on an intermediate click.
    pub fn select_method(&mut self, method: PaymentMethod) {
        self.method = Some(method);
    }

    /// Check every submission precondition in order and report the first
    /// miss. A passing validation returns the plan and method to build the
    /// gateway request from.
    ///
    /// # Errors
    ///
    /// The first unmet precondition, in guard order.
    pub fn validate(&self) -> Result<(&Product, &PricePlan, PaymentMethod), SubmitBlock> {
        let product = self.selected_product.as_ref().ok_or(SubmitBlock::NoProduct)?;
        let plan = self.selected_plan.as_ref().ok_or(SubmitBlock::NoPlan)?;
        let method = self.method.ok_or(SubmitBlock::NoMethod)?;
        if !self.buyer.required_complete() {
            return Err(SubmitBlock::IncompleteBuyerInfo);
        }
        if !self.agree_terms {
            return Err(SubmitBlock::TermsNotAccepted);
        }
        Ok((product, plan, method))
    }

    /// Validate and assemble the gateway redirect request.
    ///
    /// # Errors
    ///
    /// The first unmet submission precondition.
    pub fn build_payment_request(
        &self,
        origin: &str,
        now_millis: i64,
        suffix: &str,
    ) -> Result<PaymentRequest, SubmitBlock> {
        let (product, plan, method) = self.validate()?;
        Ok(PaymentRequest {
            method: method.gateway_method(),
            amount: plan.price,
            order_id: generate_order_id(plan.id, now_millis, suffix),
            order_name: order_name(product, plan),
            customer_name: self.buyer.name.trim().to_owned(),
            customer_email: self.buyer.email.trim().to_owned(),
            success_url: format!("{origin}/payment/success"),
            fail_url: format!("{origin}/payment/fail"),
            card_company: method.card_company_param(),
            valid_hours: method.valid_hours_param(),
        })
    }
}

/// Globally-unique order id embedding the plan id, so the result page can
/// recover it from the gateway redirect alone.
#[must_use]
pub fn generate_order_id(plan_id: i64, now_millis: i64, suffix: &str) -> String {
    format!("BULC_{plan_id}_{now_millis}_{suffix}")
}

/// Random order-id suffix; six hex chars keep collisions with an identical
/// timestamp vanishingly unlikely.
#[must_use]
pub fn random_order_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..6].to_owned()
}

/// Human-readable order description shown on the gateway page.
#[must_use]
pub fn order_name(product: &Product, plan: &PricePlan) -> String {
    format!("{} - {}", product.name, plan.name)
}
