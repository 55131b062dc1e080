use super::*;

#[test]
fn validate_registration_accepts_good_input() {
    let input = validate_registration(" Alice ", " alice@example.com ", "longenough", "longenough")
        .expect("valid");
    assert_eq!(input.name, "Alice");
    assert_eq!(input.email, "alice@example.com");
    assert_eq!(input.password, "longenough");
}

#[test]
fn validate_registration_requires_name_and_email() {
    assert_eq!(
        validate_registration("  ", "a@b.com", "longenough", "longenough"),
        Err("Enter your name.")
    );
    assert_eq!(
        validate_registration("Alice", "not-an-email", "longenough", "longenough"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_registration_enforces_password_length() {
    assert_eq!(
        validate_registration("Alice", "a@b.com", "short", "short"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn validate_registration_requires_matching_confirmation() {
    assert_eq!(
        validate_registration("Alice", "a@b.com", "longenough", "different"),
        Err("Passwords do not match.")
    );
}
