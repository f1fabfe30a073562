//! Back-office page: read-only operational tables behind a role gate.
//!
//! Role codes `000` (admin) and `001` (manager) may enter; anyone else is
//! redirected home once the session settles. Each tab fetches on first
//! activation and keeps the result for the rest of the visit.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::net::types::{AdminLicense, AdminPayment, AdminPricePlan, AdminUser, Product, Role};
use crate::state::session::Session;
use crate::util::format::format_price;
use crate::util::guard;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Users,
    Products,
    PricePlans,
    Licenses,
    Payments,
}

impl Tab {
    const ALL: [Self; 5] = [
        Self::Users,
        Self::Products,
        Self::PricePlans,
        Self::Licenses,
        Self::Payments,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Users => "회원",
            Self::Products => "제품",
            Self::PricePlans => "가격 플랜",
            Self::Licenses => "라이선스",
            Self::Payments => "결제 내역",
        }
    }
}

/// Per-tab fetch state: `None` until the first activation settles.
#[derive(Clone)]
struct Loaded<T> {
    rows: Option<Vec<T>>,
}

// Manual impl: the rows themselves need no Default, only the empty state.
impl<T> Default for Loaded<T> {
    fn default() -> Self {
        Self { rows: None }
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    guard::install_require_back_office(session, "/", navigate);

    let tab = RwSignal::new(Tab::Users);
    let error = RwSignal::new(String::new());

    let users = RwSignal::new(Loaded::<AdminUser>::default());
    let products = RwSignal::new(Loaded::<Product>::default());
    let plans = RwSignal::new(Loaded::<AdminPricePlan>::default());
    let licenses = RwSignal::new(Loaded::<AdminLicense>::default());
    let payments = RwSignal::new(Loaded::<AdminPayment>::default());

    // Fetch whatever the active tab needs, once.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let active = tab.get();
        error.set(String::new());
        macro_rules! fetch_once {
            ($signal:expr, $call:path) => {{
                if $signal.with_untracked(|l| l.rows.is_some()) {
                    return;
                }
                leptos::task::spawn_local(async move {
                    let Some(token) = crate::state::session::access_token() else {
                        return;
                    };
                    match $call(&token).await {
                        Ok(rows) => $signal.set(Loaded { rows: Some(rows) }),
                        Err(err) => error.set(err.user_message()),
                    }
                });
            }};
        }
        match active {
            Tab::Users => fetch_once!(users, crate::net::api::admin_users),
            Tab::Products => fetch_once!(products, crate::net::api::admin_products),
            Tab::PricePlans => fetch_once!(plans, crate::net::api::admin_price_plans),
            Tab::Licenses => fetch_once!(licenses, crate::net::api::admin_licenses),
            Tab::Payments => fetch_once!(payments, crate::net::api::admin_payments),
        }
    });

    view! {
        <div class="admin-page">
            <Header/>
            <main class="admin-main">
                <h1 class="admin-title">"관리자"</h1>
                <nav class="admin-tabs">
                    {Tab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="admin-tab"
                                    class:active=move || tab.get() == t
                                    on:click=move |_| tab.set(t)
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <Show when=move || !error.get().is_empty()>
                    <p class="admin-error">{move || error.get()}</p>
                </Show>

                {move || match tab.get() {
                    Tab::Users => view! { <UsersTable data=users/> }.into_any(),
                    Tab::Products => view! { <ProductsTable data=products/> }.into_any(),
                    Tab::PricePlans => view! { <PlansTable data=plans/> }.into_any(),
                    Tab::Licenses => view! { <LicensesTable data=licenses/> }.into_any(),
                    Tab::Payments => view! { <PaymentsTable data=payments/> }.into_any(),
                }}
            </main>
        </div>
    }
}

fn loading_row() -> impl IntoView {
    view! { <p class="loading">"불러오는 중..."</p> }
}

#[component]
fn UsersTable(data: RwSignal<Loaded<AdminUser>>) -> impl IntoView {
    move || match data.get().rows {
        None => loading_row().into_any(),
        Some(rows) => view! {
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"이메일"</th>
                        <th>"이름"</th>
                        <th>"연락처"</th>
                        <th>"권한"</th>
                        <th>"가입일"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            let role = Role::from_code(row.roles_code.as_deref().unwrap_or("")).label();
                            view! {
                                <tr>
                                    <td>{row.email}</td>
                                    <td>{row.name.unwrap_or_default()}</td>
                                    <td>{row.phone.unwrap_or_default()}</td>
                                    <td>{role}</td>
                                    <td>{row.created_at.unwrap_or_default()}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    }
}

#[component]
fn ProductsTable(data: RwSignal<Loaded<Product>>) -> impl IntoView {
    move || match data.get().rows {
        None => loading_row().into_any(),
        Some(rows) => view! {
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"코드"</th>
                        <th>"이름"</th>
                        <th>"설명"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| view! {
                            <tr>
                                <td>{row.code}</td>
                                <td>{row.name}</td>
                                <td>{row.description}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    }
}

#[component]
fn PlansTable(data: RwSignal<Loaded<AdminPricePlan>>) -> impl IntoView {
    move || match data.get().rows {
        None => loading_row().into_any(),
        Some(rows) => view! {
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"제품"</th>
                        <th>"이름"</th>
                        <th>"가격"</th>
                        <th>"상태"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            let price = format_price(row.price, &row.currency);
                            let status = if row.is_active { "판매 중" } else { "중지" };
                            view! {
                                <tr>
                                    <td>{row.id}</td>
                                    <td>{row.product_code}</td>
                                    <td>{row.name}</td>
                                    <td>{price}</td>
                                    <td>{status}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    }
}

#[component]
fn LicensesTable(data: RwSignal<Loaded<AdminLicense>>) -> impl IntoView {
    move || match data.get().rows {
        None => loading_row().into_any(),
        Some(rows) => view! {
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"라이선스 키"</th>
                        <th>"소유자"</th>
                        <th>"상태"</th>
                        <th>"유효 기간"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| view! {
                            <tr>
                                <td class="license-key">{row.license_key}</td>
                                <td>{row.owner_id.unwrap_or_default()}</td>
                                <td>{row.status.unwrap_or_default()}</td>
                                <td>{row.valid_until.unwrap_or_default()}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    }
}

#[component]
fn PaymentsTable(data: RwSignal<Loaded<AdminPayment>>) -> impl IntoView {
    move || match data.get().rows {
        None => loading_row().into_any(),
        Some(rows) => view! {
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"회원"</th>
                        <th>"주문 번호"</th>
                        <th>"금액"</th>
                        <th>"상태"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            let amount = format_price(row.amount, &row.currency);
                            view! {
                                <tr>
                                    <td>{row.id}</td>
                                    <td>{row.user_email.unwrap_or_default()}</td>
                                    <td>{row.order_id}</td>
                                    <td>{amount}</td>
                                    <td>{row.status.unwrap_or_default()}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    }
}
