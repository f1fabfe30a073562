use super::validate_signup_input;

#[test]
fn accepts_well_formed_input() {
    let email = validate_signup_input("user@bulc.co.kr", "secret-pass", "secret-pass");
    assert_eq!(email.unwrap(), "user@bulc.co.kr");
}

#[test]
fn trims_email_before_validation() {
    let email = validate_signup_input("  user@bulc.co.kr  ", "secret-pass", "secret-pass");
    assert_eq!(email.unwrap(), "user@bulc.co.kr");
}

#[test]
fn rejects_empty_email() {
    let err = validate_signup_input("   ", "secret-pass", "secret-pass").unwrap_err();
    assert_eq!(err, "아이디를 입력해주세요.");
}

#[test]
fn rejects_email_outside_length_bounds() {
    let err = validate_signup_input("a@b", "secret-pass", "secret-pass").unwrap_err();
    assert_eq!(err, "아이디는 4자 이상 50자 이하여야 합니다.");

    let long = "a".repeat(51);
    let err = validate_signup_input(&long, "secret-pass", "secret-pass").unwrap_err();
    assert_eq!(err, "아이디는 4자 이상 50자 이하여야 합니다.");
}

#[test]
fn accepts_email_at_length_bounds() {
    assert!(validate_signup_input("a@bc", "secret-pass", "secret-pass").is_ok());
    let max = "a".repeat(50);
    assert!(validate_signup_input(&max, "secret-pass", "secret-pass").is_ok());
}

#[test]
fn rejects_empty_password() {
    let err = validate_signup_input("user@bulc.co.kr", "", "").unwrap_err();
    assert_eq!(err, "비밀번호를 입력해주세요.");
}

#[test]
fn rejects_short_password() {
    let err = validate_signup_input("user@bulc.co.kr", "seven07", "seven07").unwrap_err();
    assert_eq!(err, "비밀번호는 8자 이상이어야 합니다.");
}

#[test]
fn rejects_mismatched_confirmation() {
    let err = validate_signup_input("user@bulc.co.kr", "secret-pass", "secret-PASS").unwrap_err();
    assert_eq!(err, "비밀번호가 일치하지 않습니다.");
}
