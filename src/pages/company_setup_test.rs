use super::*;

#[test]
fn validate_company_trims_all_fields() {
    let input = validate_company(" Acme ", " Software ", " Berlin ").expect("valid");
    assert_eq!(input.name, "Acme");
    assert_eq!(input.industry, "Software");
    assert_eq!(input.location, "Berlin");
}

#[test]
fn validate_company_reports_first_missing_field() {
    assert_eq!(validate_company("  ", "Software", "Berlin"), Err("Enter your company name."));
    assert_eq!(validate_company("Acme", "  ", "Berlin"), Err("Enter an industry."));
    assert_eq!(validate_company("Acme", "Software", ""), Err("Enter a location."));
}
