//! Toss Payments redirect handoff.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway's v1 SDK is loaded as a page-level `<script>` and exposes a
//! global `TossPayments(clientKey)` factory. `requestPayment` navigates away
//! to the gateway and later redirects back to the success/fail URLs, so the
//! returned future only resolves on pre-redirect failures (including the
//! user closing the payment sheet).

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

/// Publishable client key; the checked-in default is the gateway's shared
/// test key and charges nothing.
pub const CLIENT_KEY: &str = match option_env!("BULC_TOSS_CLIENT_KEY") {
    Some(key) => key,
    None => "test_ck_Z1aOwX7K8mjmkLb4W0B03yQxzvNP",
};

/// Fully-assembled redirect request in the gateway's vocabulary.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentRequest {
    /// Gateway method name (`카드`, `토스페이`, `계좌이체`, `가상계좌`).
    pub method: &'static str,
    pub amount: i64,
    pub order_id: String,
    pub order_name: String,
    pub customer_name: String,
    pub customer_email: String,
    pub success_url: String,
    pub fail_url: String,
    /// Uppercased card company id, card payments only.
    pub card_company: Option<String>,
    /// Deposit window, virtual-account payments only.
    pub valid_hours: Option<u32>,
}

impl PaymentRequest {
    /// Serialize into the options object `requestPayment` expects.
    #[must_use]
    pub fn to_options(&self) -> serde_json::Value {
        let mut options = serde_json::json!({
            "amount": self.amount,
            "orderId": self.order_id,
            "orderName": self.order_name,
            "customerName": self.customer_name,
            "customerEmail": self.customer_email,
            "successUrl": self.success_url,
            "failUrl": self.fail_url,
        });
        if let Some(card_company) = &self.card_company {
            options["cardCompany"] = serde_json::Value::from(card_company.clone());
        }
        if let Some(valid_hours) = self.valid_hours {
            options["validHours"] = serde_json::Value::from(valid_hours);
        }
        options
    }
}

/// Result of invoking the gateway, before any redirect happens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GatewayOutcome {
    /// The browser is navigating to the gateway; nothing more to do here.
    Redirecting,
    /// The user closed the payment sheet. Silent no-op by contract.
    Canceled,
    /// The SDK failed before redirecting (bad key, malformed request, ...).
    Failed(String),
}

/// Whether an SDK error message is a user-initiated cancellation.
pub fn is_user_cancel(message: &str) -> bool {
    message.contains("USER_CANCEL") || message.contains("PAY_PROCESS_CANCELED")
}

#[cfg(feature = "hydrate")]
mod sdk {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type TossPayments;

        #[wasm_bindgen(js_name = TossPayments)]
        pub fn toss_payments(client_key: &str) -> TossPayments;

        #[wasm_bindgen(method, js_name = requestPayment, catch)]
        pub async fn request_payment(
            this: &TossPayments,
            method: &str,
            options: JsValue,
        ) -> Result<JsValue, JsValue>;
    }
}

#[cfg(feature = "hydrate")]
fn js_error_message(err: &wasm_bindgen::JsValue) -> String {
    js_sys::Reflect::get(err, &wasm_bindgen::JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

/// Hand the order off to the gateway's redirect flow.
pub async fn request_payment(request: &PaymentRequest) -> GatewayOutcome {
    #[cfg(feature = "hydrate")]
    {
        let options = match js_sys::JSON::parse(&request.to_options().to_string()) {
            Ok(options) => options,
            Err(err) => return GatewayOutcome::Failed(js_error_message(&err)),
        };
        let gateway = sdk::toss_payments(CLIENT_KEY);
        match sdk::request_payment(&gateway, request.method, options).await {
            Ok(_) => GatewayOutcome::Redirecting,
            Err(err) => {
                let message = js_error_message(&err);
                if is_user_cancel(&message) {
                    GatewayOutcome::Canceled
                } else {
                    leptos::logging::warn!("gateway request failed: {message}");
                    GatewayOutcome::Failed(message)
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        GatewayOutcome::Failed(format!("not available on server: {}", request.order_id))
    }
}
