use super::*;

#[test]
fn validate_credentials_trims_email() {
    assert_eq!(
        validate_credentials("  user@example.com  ", "hunter2"),
        Ok(("user@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_credentials_rejects_missing_at_sign() {
    assert_eq!(validate_credentials("userexample.com", "pw"), Err("Enter a valid email address."));
}

#[test]
fn validate_credentials_rejects_empty_fields() {
    assert_eq!(validate_credentials("   ", "pw"), Err("Enter a valid email address."));
    assert_eq!(validate_credentials("a@b.com", ""), Err("Enter your password."));
}

#[test]
fn validate_credentials_keeps_password_verbatim() {
    // Passwords may legitimately start or end with spaces.
    assert_eq!(
        validate_credentials("a@b.com", " spaced "),
        Ok(("a@b.com".to_owned(), " spaced ".to_owned()))
    );
}
