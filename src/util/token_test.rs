use super::*;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn jwt_with_payload(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
    format!("{header}.{body}.signature")
}

#[test]
fn exp_claim_converts_to_milliseconds() {
    let token = jwt_with_payload(r#"{"sub":"a@b.com","exp":1700000000}"#);
    assert_eq!(token_expiry_millis(&token), Some(1_700_000_000_000));
}

#[test]
fn missing_exp_claim_yields_none() {
    let token = jwt_with_payload(r#"{"sub":"a@b.com"}"#);
    assert_eq!(token_expiry_millis(&token), None);
}

#[test]
fn non_numeric_exp_yields_none() {
    let token = jwt_with_payload(r#"{"exp":"soon"}"#);
    assert_eq!(token_expiry_millis(&token), None);
}

#[test]
fn opaque_tokens_yield_none() {
    assert_eq!(token_expiry_millis("not-a-jwt"), None);
    assert_eq!(token_expiry_millis(""), None);
    assert_eq!(token_expiry_millis("a.!!!invalid-base64!!!.c"), None);
}

#[test]
fn payload_that_is_not_json_yields_none() {
    let body = URL_SAFE_NO_PAD.encode(b"plain text");
    assert_eq!(token_expiry_millis(&format!("h.{body}.s")), None);
}
