//! REST API client for the external backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` so callers can convert failures
//! into UI state instead of panicking. Auth endpoints speak the backend's
//! `{success, data, message}` envelope; their server-side rejection messages
//! surface as `ApiError::Rejected` so the UI can show them verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{
    AdminLicense, AdminPayment, AdminPricePlan, AdminUser, ConfirmData, LoginData, OauthSignupData,
    PricePlan, Product, RefreshData, User, UserProfile,
};
#[cfg(feature = "hydrate")]
use super::types::Envelope;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

/// Failure of a backend call, split by how the UI should react.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed (offline, DNS, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-OK status and no usable body.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The server processed the request and rejected it with a message.
    #[error("{0}")]
    Rejected(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser (SSR); nothing to retry.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// User-displayable message. Server rejections are shown verbatim;
    /// everything else collapses to a generic retryable notice.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            _ => "요청 처리 중 오류가 발생했습니다. 다시 시도해주세요.".to_owned(),
        }
    }
}

/// Backend base URL for a given hostname. Local development talks to a
/// backend on port 8080 of the same host.
#[cfg(any(test, feature = "hydrate"))]
pub fn api_base_for_host(hostname: &str) -> String {
    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8080".to_owned()
    } else {
        format!("http://{hostname}:8080")
    }
}

/// Backend base URL derived from the current browser location.
#[cfg(feature = "hydrate")]
fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .map_or_else(|| "http://localhost:8080".to_owned(), |h| api_base_for_host(&h))
}

#[cfg(any(test, feature = "hydrate"))]
fn plans_endpoint(product_code: &str, currency: &str) -> String {
    format!("/api/products/{product_code}/plans?currency={currency}")
}

#[cfg(any(test, feature = "hydrate"))]
fn check_email_endpoint(email: &str) -> String {
    format!("/api/auth/check-email?email={email}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
fn net_err(err: &gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// GET a bare JSON body, optionally with a bearer token.
#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(path: &str, bearer: Option<&str>) -> Result<T, ApiError> {
    let url = format!("{}{path}", api_base());
    let mut req = gloo_net::http::Request::get(&url);
    if let Some(token) = bearer {
        req = req.header("Authorization", &bearer_value(token));
    }
    let resp = req.send().await.map_err(|e| net_err(&e))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST/PUT JSON and unwrap the auth envelope. Rejections are decoded from
/// the body even on non-OK statuses, matching the backend's behavior of
/// carrying the failure message in the envelope.
#[cfg(feature = "hydrate")]
async fn send_enveloped<T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: &serde_json::Value,
    bearer: Option<&str>,
    fallback: &str,
) -> Result<T, ApiError> {
    let url = format!("{}{path}", api_base());
    let mut req = match method {
        "PUT" => gloo_net::http::Request::put(&url),
        _ => gloo_net::http::Request::post(&url),
    };
    if let Some(token) = bearer {
        req = req.header("Authorization", &bearer_value(token));
    }
    let resp = req
        .json(body)
        .map_err(|e| net_err(&e))?
        .send()
        .await
        .map_err(|e| net_err(&e))?;
    let status = resp.status();
    match resp.json::<Envelope<T>>().await {
        Ok(envelope) => envelope.into_result(fallback).map_err(ApiError::Rejected),
        Err(_) if !(200..300).contains(&status) => Err(ApiError::Status(status)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// Like `send_enveloped`, for endpoints whose success carries no payload.
/// `{success: true}` with absent `data` is a success here.
#[cfg(feature = "hydrate")]
async fn send_enveloped_unit(
    method: &str,
    path: &str,
    body: &serde_json::Value,
    bearer: Option<&str>,
    fallback: &str,
) -> Result<(), ApiError> {
    let url = format!("{}{path}", api_base());
    let mut req = match method {
        "PUT" => gloo_net::http::Request::put(&url),
        _ => gloo_net::http::Request::post(&url),
    };
    if let Some(token) = bearer {
        req = req.header("Authorization", &bearer_value(token));
    }
    let resp = req
        .json(body)
        .map_err(|e| net_err(&e))?
        .send()
        .await
        .map_err(|e| net_err(&e))?;
    let status = resp.status();
    match resp.json::<Envelope<serde_json::Value>>().await {
        Ok(envelope) => envelope.into_unit_result(fallback).map_err(ApiError::Rejected),
        Err(_) if !(200..300).contains(&status) => Err(ApiError::Status(status)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// `POST /api/auth/login` with credentials.
///
/// # Errors
///
/// `ApiError::Rejected` carries the backend's login-failure message.
pub async fn login(email: &str, password: &str) -> Result<LoginData, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        send_enveloped("POST", "/api/auth/login", &body, None, "로그인에 실패했습니다.").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/auth/refresh` exchanging the stored refresh token.
///
/// # Errors
///
/// Fails when the refresh token has been rejected or the call cannot complete.
pub async fn refresh(refresh_token: &str) -> Result<RefreshData, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "refreshToken": refresh_token });
        send_enveloped("POST", "/api/auth/refresh", &body, None, "세션 갱신에 실패했습니다.").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = refresh_token;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/auth/me` — identify the holder of an access token.
///
/// # Errors
///
/// Fails when the token is rejected or the call cannot complete.
pub async fn fetch_me(token: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/auth/me", Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/auth/signup` with a new account.
///
/// # Errors
///
/// `ApiError::Rejected` carries the backend's validation message
/// (duplicate email, weak password, ...).
pub async fn signup(
    email: &str,
    password: &str,
    name: Option<&str>,
    phone_number: Option<&str>,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({
            "email": email,
            "password": password,
            "name": name,
            "phoneNumber": phone_number,
        });
        send_enveloped_unit(
            "POST",
            "/api/auth/signup",
            &body,
            None,
            "회원가입에 실패했습니다.",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, name, phone_number);
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/auth/oauth/signup` — finish a social signup with a password.
/// `token` is the one-time signup token from the OAuth redirect, not a
/// bearer token. Answers with a fresh token pair for the new account.
///
/// # Errors
///
/// `ApiError::Rejected` carries the backend's validation message.
pub async fn oauth_signup(
    token: &str,
    password: &str,
    name: &str,
    phone: Option<&str>,
) -> Result<OauthSignupData, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({
            "token": token,
            "password": password,
            "name": name,
            "phone": phone,
        });
        send_enveloped(
            "POST",
            "/api/auth/oauth/signup",
            &body,
            None,
            "회원가입에 실패했습니다.",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, password, name, phone);
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/auth/check-email` — whether an email is still available.
///
/// # Errors
///
/// Fails when the call cannot complete.
pub async fn check_email(email: &str) -> Result<bool, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Availability {
            available: bool,
        }
        let body: Availability = get_json(&check_email_endpoint(email), None).await?;
        Ok(body.available)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/auth/send-verification` — email a verification code.
///
/// # Errors
///
/// `ApiError::Rejected` carries the backend's message.
pub async fn send_verification(email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email });
        send_enveloped_unit(
            "POST",
            "/api/auth/send-verification",
            &body,
            None,
            "인증 메일 발송에 실패했습니다.",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/auth/verify-code` — check an emailed verification code.
///
/// # Errors
///
/// `ApiError::Rejected` when the code does not match.
pub async fn verify_code(email: &str, code: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "code": code });
        send_enveloped_unit(
            "POST",
            "/api/auth/verify-code",
            &body,
            None,
            "인증 코드가 올바르지 않습니다.",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code);
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/products` — the purchasable catalog.
///
/// # Errors
///
/// Fails when the call cannot complete or the body is malformed.
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/products", None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/products/{code}/plans?currency=...` — plans for one product.
///
/// # Errors
///
/// Fails when the call cannot complete. An empty list is a valid result.
pub async fn fetch_price_plans(product_code: &str, currency: &str) -> Result<Vec<PricePlan>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&plans_endpoint(product_code, currency), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (product_code, currency);
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/users/me` — full editable profile of the current user.
///
/// # Errors
///
/// Fails when the token is rejected or the call cannot complete.
pub async fn fetch_profile(token: &str) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/users/me", Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// `PUT /api/users/me` — update profile fields.
///
/// # Errors
///
/// `ApiError::Rejected` carries the backend's validation message.
pub async fn update_profile(token: &str, profile: &UserProfile) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::to_value(profile).map_err(|e| ApiError::Decode(e.to_string()))?;
        send_enveloped_unit(
            "PUT",
            "/api/users/me",
            &body,
            Some(token),
            "회원 정보 수정에 실패했습니다.",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, profile);
        Err(ApiError::Unavailable)
    }
}

/// `PUT /api/users/me/password` — change the account password.
///
/// # Errors
///
/// `ApiError::Rejected` when the current password is wrong.
pub async fn change_password(
    token: &str,
    current_password: &str,
    new_password: &str,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({
            "currentPassword": current_password,
            "newPassword": new_password,
        });
        send_enveloped_unit(
            "PUT",
            "/api/users/me/password",
            &body,
            Some(token),
            "비밀번호 변경에 실패했습니다.",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, current_password, new_password);
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/payments/confirm` — server-side payment approval.
///
/// The plan id travels explicitly in the payload; it is never re-derived
/// server-side from the order id format.
///
/// # Errors
///
/// `ApiError::Rejected` carries the backend's approval-failure message;
/// callers must NOT mark the order as confirmed on any error.
pub async fn confirm_payment(
    token: Option<&str>,
    payment_key: &str,
    order_id: &str,
    amount: i64,
    price_plan_id: i64,
) -> Result<ConfirmData, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/api/payments/confirm", api_base());
        let body = serde_json::json!({
            "paymentKey": payment_key,
            "orderId": order_id,
            "amount": amount,
            "pricePlanId": price_plan_id,
        });
        let mut req = gloo_net::http::Request::post(&url);
        if let Some(token) = token {
            req = req.header("Authorization", &bearer_value(token));
        }
        let resp = req
            .json(&body)
            .map_err(|e| net_err(&e))?
            .send()
            .await
            .map_err(|e| net_err(&e))?;
        if resp.ok() {
            return resp.json::<ConfirmData>().await.map_err(|e| ApiError::Decode(e.to_string()));
        }
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            message: Option<String>,
        }
        let status = resp.status();
        match resp.json::<ErrorBody>().await {
            Ok(ErrorBody { message: Some(message) }) => Err(ApiError::Rejected(message)),
            _ => Err(ApiError::Status(status)),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, payment_key, order_id, amount, price_plan_id);
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/admin/users` (elevated role).
///
/// # Errors
///
/// Fails when the token lacks back-office rights or the call cannot complete.
pub async fn admin_users(token: &str) -> Result<Vec<AdminUser>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/admin/users", Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/admin/products` (elevated role).
///
/// # Errors
///
/// Fails when the token lacks back-office rights or the call cannot complete.
pub async fn admin_products(token: &str) -> Result<Vec<Product>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/admin/products", Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/admin/price-plans` (elevated role).
///
/// # Errors
///
/// Fails when the token lacks back-office rights or the call cannot complete.
pub async fn admin_price_plans(token: &str) -> Result<Vec<AdminPricePlan>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/admin/price-plans", Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/admin/license-list` (elevated role).
///
/// # Errors
///
/// Fails when the token lacks back-office rights or the call cannot complete.
pub async fn admin_licenses(token: &str) -> Result<Vec<AdminLicense>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/admin/license-list", Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/admin/payments` (elevated role).
///
/// # Errors
///
/// Fails when the token lacks back-office rights or the call cannot complete.
pub async fn admin_payments(token: &str) -> Result<Vec<AdminPayment>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/admin/payments", Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}
