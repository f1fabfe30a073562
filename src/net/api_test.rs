use super::*;

#[test]
fn api_base_for_localhost_uses_fixed_port() {
    assert_eq!(api_base_for_host("localhost"), "http://localhost:8080");
    assert_eq!(api_base_for_host("127.0.0.1"), "http://localhost:8080");
}

#[test]
fn api_base_for_deployed_host_keeps_hostname() {
    assert_eq!(api_base_for_host("bulc.example.com"), "http://bulc.example.com:8080");
}

#[test]
fn plans_endpoint_scopes_by_product_and_currency() {
    assert_eq!(plans_endpoint("BULC", "KRW"), "/api/products/BULC/plans?currency=KRW");
}

#[test]
fn check_email_endpoint_carries_query() {
    assert_eq!(check_email_endpoint("a@b.com"), "/api/auth/check-email?email=a@b.com");
}

#[test]
fn bearer_value_formats_authorization_header() {
    assert_eq!(bearer_value("tok"), "Bearer tok");
}

#[test]
fn rejected_error_is_shown_verbatim() {
    let err = ApiError::Rejected("이미 사용 중인 이메일입니다.".to_owned());
    assert_eq!(err.user_message(), "이미 사용 중인 이메일입니다.");
}

#[test]
fn transport_errors_collapse_to_generic_retry_message() {
    let generic = "요청 처리 중 오류가 발생했습니다. 다시 시도해주세요.";
    assert_eq!(ApiError::Network("offline".to_owned()).user_message(), generic);
    assert_eq!(ApiError::Status(502).user_message(), generic);
    assert_eq!(ApiError::Decode("not json".to_owned()).user_message(), generic);
}
