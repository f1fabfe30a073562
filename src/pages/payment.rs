//! Checkout page: product, plan, method, buyer info, then the gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! All order state lives in a single `CheckoutState` signal; the view is a
//! projection of it. Submission re-validates the whole state and hands a
//! fully-built request to the gateway wrapper, which navigates the browser
//! away on success. A user cancel inside the gateway widget returns here
//! silently with the state intact.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::net::types::{PricePlan, Product};
use crate::state::checkout::{CardCompany, CheckoutState, EasyPayProvider, PaymentMethod};
use crate::state::session::Session;
use crate::util::format::{format_phone, format_price};
use crate::util::guard;

#[cfg(feature = "hydrate")]
fn load_plans(checkout: RwSignal<CheckoutState>, product_code: String, seq: u64) {
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_price_plans(&product_code, "KRW").await {
            Ok(plans) => checkout.update(|c| c.apply_plans(seq, plans)),
            Err(_) => checkout.update(|c| c.plan_load_failed(seq)),
        }
    });
}

/// Checkout flow. Requires a signed-in session; the guard redirects to the
/// portal once the session restore settles without a user.
#[component]
pub fn PaymentPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    guard::install_require_auth(session, "/", navigate);

    let checkout = RwSignal::new(CheckoutState::with_catalog_loading());
    let error = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let show_card_modal = RwSignal::new(false);
    let show_easypay_modal = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        // Catalog load. A single-product catalog auto-selects and chains
        // straight into the plan fetch.
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_products().await {
                Ok(products) => {
                    let auto_seq = checkout
                        .try_update(|c| c.set_products(products))
                        .flatten();
                    if let Some(seq) = auto_seq {
                        let code = checkout
                            .with_untracked(|c| c.selected_product.as_ref().map(|p| p.code.clone()));
                        if let Some(code) = code {
                            load_plans(checkout, code, seq);
                        }
                    }
                }
                Err(err) => {
                    checkout.update(|c| c.loading_products = false);
                    error.set(err.user_message());
                }
            }
        });

        // Buyer prefill from the profile, keeping anything already typed.
        leptos::task::spawn_local(async move {
            let Some(token) = crate::state::session::access_token() else {
                return;
            };
            if let Ok(profile) = crate::net::api::fetch_profile(&token).await {
                checkout.update(|c| c.buyer.prefill(&profile));
            }
        });
    }

    let on_select_product = move |product: Product| {
        let code = product.code.clone();
        let seq = checkout
            .try_update(|c| c.select_product(product))
            .unwrap_or_default();
        #[cfg(feature = "hydrate")]
        load_plans(checkout, code, seq);
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (code, seq);
        }
    };

    let on_submit = move |_| {
        if submitting.get() {
            return;
        }
        error.set(String::new());
        #[cfg(feature = "hydrate")]
        {
            let now_millis = js_sys::Date::now() as i64;
            let request = checkout.with_untracked(|c| {
                c.build_payment_request(
                    &crate::util::history::origin(),
                    now_millis,
                    &crate::state::checkout::random_order_suffix(),
                )
            });
            let request = match request {
                Ok(request) => request,
                Err(block) => {
                    error.set(block.message().to_owned());
                    return;
                }
            };
            submitting.set(true);
            leptos::task::spawn_local(async move {
                use crate::net::gateway::GatewayOutcome;
                match crate::net::gateway::request_payment(&request).await {
                    GatewayOutcome::Redirecting => {}
                    GatewayOutcome::Canceled => submitting.set(false),
                    GatewayOutcome::Failed(message) => {
                        submitting.set(false);
                        error.set(message);
                    }
                }
            });
        }
    };

    view! {
        <div class="payment-page">
            <Header/>
            <main class="payment-main">
                <h1 class="payment-title">"라이선스 구매"</h1>

                <section class="payment-section">
                    <h2>"제품 선택"</h2>
                    <Show
                        when=move || !checkout.with(|c| c.loading_products)
                        fallback=|| view! { <p class="loading">"제품 목록을 불러오는 중..."</p> }
                    >
                        <div class="product-list">
                            <For
                                each=move || checkout.with(|c| c.products.clone())
                                key=|product| product.code.clone()
                                children=move |product: Product| {
                                    let code = product.code.clone();
                                    let selected = {
                                        let code = code.clone();
                                        move || {
                                            checkout.with(|c| {
                                                c.selected_product
                                                    .as_ref()
                                                    .is_some_and(|p| p.code == code)
                                            })
                                        }
                                    };
                                    let pick = product.clone();
                                    view! {
                                        <button
                                            class="product-card"
                                            class:selected=selected
                                            on:click=move |_| on_select_product(pick.clone())
                                        >
                                            <span class="product-name">{product.name.clone()}</span>
                                            <span class="product-desc">{product.description.clone()}</span>
                                        </button>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </section>

                <section class="payment-section">
                    <h2>"플랜 선택"</h2>
                    {move || {
                        if checkout.with(|c| c.selected_product.is_none()) {
                            view! { <p class="hint">"먼저 제품을 선택해주세요."</p> }.into_any()
                        } else if checkout.with(|c| c.loading_plans) {
                            view! { <p class="loading">"플랜을 불러오는 중..."</p> }.into_any()
                        } else if checkout.with(|c| c.plans.is_empty()) {
                            view! { <p class="hint">"구매 가능한 플랜이 없습니다."</p> }.into_any()
                        } else {
                            view! {
                                <div class="plan-list">
                                    <For
                                        each=move || checkout.with(|c| c.plans.clone())
                                        key=|plan| plan.id
                                        children=move |plan: PricePlan| {
                                            let id = plan.id;
                                            let selected = move || {
                                                checkout.with(|c| {
                                                    c.selected_plan.as_ref().is_some_and(|p| p.id == id)
                                                })
                                            };
                                            let pick = plan.clone();
                                            view! {
                                                <button
                                                    class="plan-card"
                                                    class:selected=selected
                                                    on:click=move |_| {
                                                        checkout.update(|c| c.select_plan(pick.clone()));
                                                    }
                                                >
                                                    <span class="plan-name">{plan.name.clone()}</span>
                                                    <span class="plan-price">
                                                        {format_price(plan.price, &plan.currency)}
                                                    </span>
                                                </button>
                                            }
                                        }
                                    />
                                </div>
                            }
                            .into_any()
                        }
                    }}
                </section>

                <section class="payment-section">
                    <h2>"결제 수단"</h2>
                    <div class="method-buttons">
                        <button class="method-btn" on:click=move |_| show_card_modal.set(true)>
                            "카드 결제"
                        </button>
                        <button class="method-btn" on:click=move |_| show_easypay_modal.set(true)>
                            "간편 결제"
                        </button>
                    </div>
                    <Show when=move || checkout.with(|c| c.method.is_some())>
                        <p class="method-chosen">
                            "선택한 결제 수단: "
                            {move || checkout.with(|c| c.method.map(PaymentMethod::label))}
                        </p>
                    </Show>
                </section>

                <section class="payment-section">
                    <h2>"구매자 정보"</h2>
                    <div class="buyer-form">
                        <input
                            class="buyer-input"
                            type="text"
                            placeholder="이름"
                            prop:value=move || checkout.with(|c| c.buyer.name.clone())
                            on:input=move |ev| {
                                checkout.update(|c| c.buyer.name = event_target_value(&ev));
                            }
                        />
                        <input
                            class="buyer-input"
                            type="email"
                            placeholder="이메일"
                            prop:value=move || checkout.with(|c| c.buyer.email.clone())
                            on:input=move |ev| {
                                checkout.update(|c| c.buyer.email = event_target_value(&ev));
                            }
                        />
                        <input
                            class="buyer-input"
                            type="tel"
                            placeholder="연락처"
                            prop:value=move || checkout.with(|c| c.buyer.phone.clone())
                            on:input=move |ev| {
                                checkout.update(|c| {
                                    c.buyer.phone = format_phone(&event_target_value(&ev));
                                });
                            }
                        />
                        <input
                            class="buyer-input"
                            type="text"
                            placeholder="회사명 (선택)"
                            prop:value=move || checkout.with(|c| c.buyer.company.clone())
                            on:input=move |ev| {
                                checkout.update(|c| c.buyer.company = event_target_value(&ev));
                            }
                        />
                    </div>
                    <label class="terms-row">
                        <input
                            type="checkbox"
                            prop:checked=move || checkout.with(|c| c.agree_terms)
                            on:change=move |ev| {
                                checkout.update(|c| c.agree_terms = event_target_checked(&ev));
                            }
                        />
                        <span>"구매 조건 및 환불 규정에 동의합니다."</span>
                    </label>
                </section>

                <Show when=move || !error.get().is_empty()>
                    <p class="payment-error">{move || error.get()}</p>
                </Show>

                <button
                    class="payment-submit-btn"
                    on:click=on_submit
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "결제 진행 중..." } else { "결제하기" }}
                </button>
            </main>

            <CardModal open=show_card_modal checkout=checkout/>
            <EasyPayModal open=show_easypay_modal checkout=checkout/>
        </div>
    }
}

/// Card-issuer picker. The method is only committed on the confirm button,
/// never on an intermediate issuer click.
#[component]
fn CardModal(open: RwSignal<bool>, checkout: RwSignal<CheckoutState>) -> impl IntoView {
    let picked = RwSignal::new(None::<CardCompany>);

    let confirm = move |_| {
        if let Some(company) = picked.get() {
            checkout.update(|c| c.select_method(PaymentMethod::Card(company)));
            open.set(false);
            picked.set(None);
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:mousedown=move |_| open.set(false)>
                <div class="modal-content method-modal" on:mousedown=|ev| ev.stop_propagation()>
                    <h2 class="modal-title">"카드사 선택"</h2>
                    <div class="issuer-grid">
                        {CardCompany::ALL
                            .into_iter()
                            .map(|company| {
                                let selected = move || picked.get() == Some(company);
                                view! {
                                    <button
                                        class="issuer-btn"
                                        class:selected=selected
                                        on:click=move |_| picked.set(Some(company))
                                    >
                                        {company.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="modal-submit-btn"
                        on:click=confirm
                        disabled=move || picked.get().is_none()
                    >
                        "선택 완료"
                    </button>
                </div>
            </div>
        </Show>
    }
}

/// Easy-pay provider picker, same commit-on-confirm contract as the card
/// modal.
#[component]
fn EasyPayModal(open: RwSignal<bool>, checkout: RwSignal<CheckoutState>) -> impl IntoView {
    let picked = RwSignal::new(None::<EasyPayProvider>);

    let confirm = move |_| {
        if let Some(provider) = picked.get() {
            checkout.update(|c| c.select_method(PaymentMethod::EasyPay(provider)));
            open.set(false);
            picked.set(None);
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:mousedown=move |_| open.set(false)>
                <div class="modal-content method-modal" on:mousedown=|ev| ev.stop_propagation()>
                    <h2 class="modal-title">"간편 결제 선택"</h2>
                    <div class="provider-list">
                        {EasyPayProvider::ALL
                            .into_iter()
                            .map(|provider| {
                                let selected = move || picked.get() == Some(provider);
                                view! {
                                    <button
                                        class="provider-btn"
                                        class:selected=selected
                                        on:click=move |_| picked.set(Some(provider))
                                    >
                                        <span class="provider-name">{provider.label()}</span>
                                        <span class="provider-desc">{provider.description()}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="modal-submit-btn"
                        on:click=confirm
                        disabled=move || picked.get().is_none()
                    >
                        "선택 완료"
                    </button>
                </div>
            </div>
        </Show>
    }
}
