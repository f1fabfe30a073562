use super::*;

#[test]
fn role_codes_map_to_closed_enum() {
    assert_eq!(Role::from_code("000"), Role::Admin);
    assert_eq!(Role::from_code("001"), Role::Manager);
    assert_eq!(Role::from_code("002"), Role::User);
}

#[test]
fn unknown_role_code_degrades_to_user() {
    assert_eq!(Role::from_code("999"), Role::User);
    assert_eq!(Role::from_code(""), Role::User);
}

#[test]
fn back_office_access_is_admin_or_manager() {
    assert!(Role::Admin.is_back_office());
    assert!(Role::Manager.is_back_office());
    assert!(!Role::User.is_back_office());
}

#[test]
fn user_without_role_code_is_ordinary_user() {
    let user = User {
        id: 1,
        email: "a@b.com".to_owned(),
        name: None,
        roles_code: None,
    };
    assert_eq!(user.role(), Role::User);
}

#[test]
fn display_name_falls_back_to_email() {
    let mut user = User {
        id: 1,
        email: "a@b.com".to_owned(),
        name: Some(String::new()),
        roles_code: None,
    };
    assert_eq!(user.display_name(), "a@b.com");
    user.name = Some("홍길동".to_owned());
    assert_eq!(user.display_name(), "홍길동");
}

#[test]
fn envelope_success_with_data_unwraps() {
    let env = Envelope {
        success: true,
        data: Some(7),
        message: None,
    };
    assert_eq!(env.into_result("fallback"), Ok(7));
}

#[test]
fn envelope_failure_prefers_server_message() {
    let env: Envelope<i32> = Envelope {
        success: false,
        data: None,
        message: Some("bad credentials".to_owned()),
    };
    assert_eq!(env.into_result("fallback"), Err("bad credentials".to_owned()));
}

#[test]
fn envelope_success_without_data_is_an_error_when_data_is_required() {
    let env: Envelope<i32> = Envelope {
        success: true,
        data: None,
        message: None,
    };
    assert_eq!(env.into_result("fallback"), Err("fallback".to_owned()));
}

#[test]
fn bare_success_envelope_is_a_unit_success() {
    // Signup, verification, and profile-update endpoints answer
    // `{"success": true}` with no data at all.
    let env: Envelope<serde_json::Value> = serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert_eq!(env.into_unit_result("fallback"), Ok(()));
}

#[test]
fn unit_envelope_failure_still_carries_the_server_message() {
    let env: Envelope<serde_json::Value> =
        serde_json::from_str(r#"{"success": false, "message": "이미 사용 중인 이메일입니다."}"#)
            .unwrap();
    assert_eq!(
        env.into_unit_result("fallback"),
        Err("이미 사용 중인 이메일입니다.".to_owned())
    );
}

#[test]
fn unit_envelope_ignores_any_payload_on_success() {
    let env: Envelope<serde_json::Value> =
        serde_json::from_str(r#"{"success": true, "data": {"ignored": 1}}"#).unwrap();
    assert_eq!(env.into_unit_result("fallback"), Ok(()));
}

#[test]
fn login_response_envelope_parses() {
    let raw = r#"{
        "success": true,
        "data": {
            "accessToken": "at",
            "refreshToken": "rt",
            "user": {"id": 3, "email": "a@b.com", "name": "홍길동", "rolesCode": "000"}
        }
    }"#;
    let env: Envelope<LoginData> = serde_json::from_str(raw).unwrap();
    let data = env.into_result("login failed").unwrap();
    assert_eq!(data.access_token, "at");
    assert_eq!(data.user.role(), Role::Admin);
}

#[test]
fn refresh_response_tolerates_missing_rotation() {
    let raw = r#"{"accessToken": "next"}"#;
    let data: RefreshData = serde_json::from_str(raw).unwrap();
    assert_eq!(data.access_token, "next");
    assert!(data.refresh_token.is_none());
}

#[test]
fn price_plan_parses_catalog_row() {
    let raw = r#"{"id": 12, "name": "연간 플랜", "price": 828000, "currency": "KRW"}"#;
    let plan: PricePlan = serde_json::from_str(raw).unwrap();
    assert_eq!(plan.price, 828_000);
    assert_eq!(plan.currency, "KRW");
}
