use super::{provider_label, validate_setup_password};

#[test]
fn accepts_password_with_letters_and_digits() {
    assert_eq!(validate_setup_password("abcd1234", "abcd1234"), Ok(()));
}

#[test]
fn rejects_short_password_first() {
    let err = validate_setup_password("a1", "a1").unwrap_err();
    assert_eq!(err, "비밀번호는 최소 8자 이상이어야 합니다.");
}

#[test]
fn requires_a_letter() {
    let err = validate_setup_password("12345678", "12345678").unwrap_err();
    assert_eq!(err, "비밀번호에 영문자가 포함되어야 합니다.");
}

#[test]
fn requires_a_digit() {
    let err = validate_setup_password("abcdefgh", "abcdefgh").unwrap_err();
    assert_eq!(err, "비밀번호에 숫자가 포함되어야 합니다.");
}

#[test]
fn requires_matching_confirmation() {
    let err = validate_setup_password("abcd1234", "abcd12345").unwrap_err();
    assert_eq!(err, "비밀번호가 일치하지 않습니다.");
}

#[test]
fn provider_codes_map_to_korean_names() {
    assert_eq!(provider_label("NAVER"), "네이버");
    assert_eq!(provider_label("kakao"), "카카오");
    assert_eq!(provider_label("Google"), "구글");
    assert_eq!(provider_label("github"), "github");
}
