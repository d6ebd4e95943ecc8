use super::*;

#[test]
fn validate_login_input_trims_username() {
    let req = validate_login_input("  a  ", "b").unwrap();
    assert_eq!(req, LoginRequest { username: "a".to_owned(), password: "b".to_owned() });
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let req = validate_login_input("a", " pass ").unwrap();
    assert_eq!(req.password, " pass ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "b"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("a", ""), Err("Enter both username and password."));
}
