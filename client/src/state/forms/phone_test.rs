use super::*;

#[test]
fn send_target_keeps_digits_and_plus() {
    let v = PhoneVerification::new("+51 987 654 321");
    assert_eq!(v.send_target(), Ok("+51987654321".to_owned()));
}

#[test]
fn short_phone_is_rejected() {
    let v = PhoneVerification::new("98765");
    assert!(v.send_target().is_err());
}

#[test]
fn check_requires_sent_code() {
    let mut v = PhoneVerification::new("987654321");
    v.code = "1234".into();
    assert!(v.check_target().is_err());
    v.code_sent = true;
    assert_eq!(v.check_target(), Ok(("987654321".to_owned(), "1234".to_owned())));
}

#[test]
fn changing_phone_resets_verification() {
    let mut v = PhoneVerification::new("987654321");
    v.code_sent = true;
    v.verified = true;
    v.set_phone("987654321");
    assert!(v.verified);
    v.set_phone("912345678");
    assert!(!v.verified);
    assert!(!v.code_sent);
}
