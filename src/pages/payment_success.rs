//! Gateway success-redirect landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway redirects here with `paymentKey`, `orderId`, and `amount`
//! query params. Confirmation must reach the backend exactly once per
//! order: a processed-order ledger in `localStorage` short-circuits
//! reloads and back-navigation into a replay receipt, and the current
//! history entry is replaced so the back button cannot re-trigger the
//! redirect chain.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::state::confirm::{ConfirmPhase, Receipt};
use crate::util::format::format_price;

/// Confirmation page. Kicks off the server confirmation on mount and
/// renders the phase it settles in.
#[component]
pub fn PaymentSuccessPage() -> impl IntoView {
    let phase = RwSignal::new(ConfirmPhase::Processing);

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::hooks::use_query_map;

        use crate::state::confirm::{
            ConfirmGate, ProcessedPayments, parse_success_params, plan_id_from_order_id,
        };

        let gate = StoredValue::new(ConfirmGate::default());

        let query = use_query_map();
        let (payment_key, order_id, amount) = query.with_untracked(|q| {
            (q.get("paymentKey"), q.get("orderId"), q.get("amount"))
        });

        let parsed =
            parse_success_params(payment_key.as_deref(), order_id.as_deref(), amount.as_deref());
        match parsed {
            None => phase.set(ConfirmPhase::Failed("잘못된 결제 접근입니다.".to_owned())),
            Some(params) => {
                let mut ledger = ProcessedPayments::load();
                if ledger.contains(&params.order_id) {
                    phase.set(ConfirmPhase::Done(Receipt::replayed(&params)));
                } else if let Some(plan_id) = plan_id_from_order_id(&params.order_id) {
                    if gate.try_update_value(ConfirmGate::try_begin).unwrap_or(false) {
                        leptos::task::spawn_local(async move {
                            let token = crate::state::session::access_token();
                            let result = crate::net::api::confirm_payment(
                                token.as_deref(),
                                &params.payment_key,
                                &params.order_id,
                                params.amount,
                                plan_id,
                            )
                            .await;
                            match result {
                                Ok(data) => {
                                    ledger.record(&params.order_id);
                                    crate::util::history::replace_current_entry();
                                    phase.set(ConfirmPhase::Done(Receipt {
                                        order_id: params.order_id,
                                        amount: params.amount,
                                        order_name: data.order_name,
                                        license_key: data.license_key,
                                        license_valid_until: data.license_valid_until,
                                        replayed: false,
                                    }));
                                }
                                Err(err) => phase.set(ConfirmPhase::Failed(err.user_message())),
                            }
                        });
                    }
                } else {
                    phase.set(ConfirmPhase::Failed("주문 정보를 확인할 수 없습니다.".to_owned()));
                }
            }
        }
    }

    view! { <ConfirmShell phase=phase/> }
}

#[component]
fn ConfirmShell(phase: RwSignal<ConfirmPhase>) -> impl IntoView {
    view! {
        <div class="payment-result-page">
            <Header/>
            <main class="payment-result-main">
                {move || match phase.get() {
                    ConfirmPhase::Processing => view! {
                        <div class="result-card processing">
                            <h1>"결제 확인 중"</h1>
                            <p>"결제 승인을 확인하고 있습니다. 잠시만 기다려주세요."</p>
                        </div>
                    }
                    .into_any(),
                    ConfirmPhase::Done(receipt) => view! { <ReceiptCard receipt=receipt/> }.into_any(),
                    ConfirmPhase::Failed(message) => view! {
                        <div class="result-card failed">
                            <h1>"결제 확인 실패"</h1>
                            <p class="result-message">{message}</p>
                            <a href="/payment" class="result-btn">"결제 페이지로 돌아가기"</a>
                        </div>
                    }
                    .into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn ReceiptCard(receipt: Receipt) -> impl IntoView {
    view! {
        <div class="result-card done">
            <h1>"결제가 완료되었습니다"</h1>
            <Show when={
                let replayed = receipt.replayed;
                move || replayed
            }>
                <p class="result-replayed">"이미 처리된 결제입니다."</p>
            </Show>
            <dl class="receipt">
                {receipt.order_name.clone().map(|name| view! {
                    <dt>"상품"</dt>
                    <dd>{name}</dd>
                })}
                <dt>"주문 번호"</dt>
                <dd>{receipt.order_id.clone()}</dd>
                <dt>"결제 금액"</dt>
                <dd>{format_price(receipt.amount, "KRW")}</dd>
                {receipt.license_key.clone().map(|key| view! {
                    <dt>"라이선스 키"</dt>
                    <dd class="license-key">{key}</dd>
                })}
                {receipt.license_valid_until.clone().map(|until| view! {
                    <dt>"유효 기간"</dt>
                    <dd>{until}</dd>
                })}
            </dl>
            <a href="/mypage" class="result-btn">"마이페이지로 이동"</a>
        </div>
    }
}
