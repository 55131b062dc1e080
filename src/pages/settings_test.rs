use super::*;

#[test]
fn validate_password_change_accepts_good_input() {
    assert_eq!(
        validate_password_change("oldsecret", "newsecret99", "newsecret99"),
        Ok(("oldsecret".to_owned(), "newsecret99".to_owned()))
    );
}

#[test]
fn validate_password_change_requires_current() {
    assert_eq!(
        validate_password_change("", "newsecret99", "newsecret99"),
        Err("Enter your current password.")
    );
}

#[test]
fn validate_password_change_enforces_length() {
    assert_eq!(
        validate_password_change("old", "short", "short"),
        Err("New password must be at least 8 characters.")
    );
}

#[test]
fn validate_password_change_rejects_reuse() {
    assert_eq!(
        validate_password_change("samesame1", "samesame1", "samesame1"),
        Err("New password must differ from the current one.")
    );
}

#[test]
fn validate_password_change_requires_confirmation_match() {
    assert_eq!(
        validate_password_change("oldsecret", "newsecret99", "other"),
        Err("Passwords do not match.")
    );
}
