use super::*;

#[test]
fn login_input_trims_email_and_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "secret!!"),
        Ok(("user@example.com".to_owned(), "secret!!".to_owned()))
    );
}

#[test]
fn empty_email_is_reported_first() {
    assert_eq!(validate_login_input("   ", "pw"), Err("아이디를 입력해주세요."));
}

#[test]
fn empty_password_is_reported() {
    assert_eq!(validate_login_input("user@example.com", ""), Err("비밀번호를 입력해주세요."));
}
