use super::*;

#[test]
fn missing_preference_defaults_to_korean() {
    assert_eq!(normalize(None), "ko");
}

#[test]
fn supported_codes_pass_through() {
    assert_eq!(normalize(Some("ko")), "ko");
    assert_eq!(normalize(Some("en")), "en");
}

#[test]
fn garbage_values_fall_back_to_korean() {
    assert_eq!(normalize(Some("fr")), "ko");
    assert_eq!(normalize(Some("")), "ko");
}

#[test]
fn every_supported_code_has_a_label_and_survives_normalize() {
    for &code in SUPPORTED {
        assert_eq!(normalize(Some(code)), code);
        assert!(!label(code).is_empty());
    }
    assert_eq!(label("ko"), "한국어");
    assert_eq!(label("en"), "English");
}
