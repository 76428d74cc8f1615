use super::*;

fn validate(
    name: &str,
    position: &str,
    salary: &str,
    dob: &str,
    email: &str,
    mobile: &str,
) -> Result<EmployeeDraft, ValidationError> {
    validate_fields(name, position, salary, dob, email, mobile)
}

#[test]
fn accepts_a_complete_valid_tuple() {
    let draft = validate(
        "Alice",
        "Engineer",
        "75000",
        "1990-01-01",
        "alice@x.com",
        "1234567890",
    )
    .expect("valid tuple");
    assert_eq!(draft.name, "Alice");
    assert_eq!(draft.salary, 75000.0);
    assert_eq!(draft.mobile, "1234567890");
}

#[test]
fn trims_surrounding_whitespace_before_validating() {
    let draft = validate(
        "  Alice ",
        " Engineer",
        " 75000 ",
        " 1990-01-01 ",
        " alice@x.com ",
        " 1234567890 ",
    )
    .expect("trimmed tuple");
    assert_eq!(draft.name, "Alice");
    assert_eq!(draft.email, "alice@x.com");
}

#[test]
fn rejects_any_empty_field_first() {
    // Empty name wins even though the salary is also malformed.
    assert_eq!(
        validate("", "Engineer", "abc", "1990-01-01", "alice@x.com", "1234567"),
        Err(ValidationError::MissingField)
    );
    // Whitespace-only counts as empty.
    assert_eq!(
        validate("Alice", "   ", "75000", "1990-01-01", "alice@x.com", "1234567"),
        Err(ValidationError::MissingField)
    );
}

#[test]
fn rejects_non_numeric_salary() {
    assert_eq!(
        validate("Alice", "Engineer", "abc", "1990-01-01", "alice@x.com", "1234567"),
        Err(ValidationError::SalaryNotNumeric)
    );
}

#[test]
fn accepts_fractional_and_negative_salary_text() {
    // The rule is "parses as a number", nothing stricter.
    assert!(validate("A", "B", "1234.56", "1990-01-01", "a@b.cd", "1234567").is_ok());
    assert!(validate("A", "B", "-1", "1990-01-01", "a@b.cd", "1234567").is_ok());
}

#[test]
fn rejects_malformed_email() {
    assert_eq!(
        validate("Alice", "Engineer", "75000", "1990-01-01", "nodomain", "1234567"),
        Err(ValidationError::InvalidEmail)
    );
}

#[test]
fn email_predicate_edges() {
    assert!(is_valid_email("alice@x.com"));
    assert!(is_valid_email("a@b.c"));
    assert!(is_valid_email("first.last@sub.domain.org"));

    assert!(!is_valid_email("nodomain"));
    assert!(!is_valid_email("@x.com"));
    assert!(!is_valid_email("alice@xcom"));
    assert!(!is_valid_email("alice@.com"));
    assert!(!is_valid_email("alice@x."));
    assert!(!is_valid_email("a@b@c.com"));
}

#[test]
fn rejects_malformed_mobile() {
    assert_eq!(
        validate("Alice", "Engineer", "75000", "1990-01-01", "alice@x.com", "12"),
        Err(ValidationError::InvalidMobile)
    );
    assert_eq!(
        validate("Alice", "Engineer", "75000", "1990-01-01", "alice@x.com", "12a34567"),
        Err(ValidationError::InvalidMobile)
    );
}

#[test]
fn mobile_predicate_edges() {
    assert!(is_valid_mobile("1234567"));
    assert!(is_valid_mobile("123456789012345"));

    assert!(!is_valid_mobile("123456"));
    assert!(!is_valid_mobile("1234567890123456"));
    assert!(!is_valid_mobile("12345 67"));
    assert!(!is_valid_mobile("+1234567"));
}

#[test]
fn dob_is_not_checked_for_calendar_validity() {
    // Format is advisory only; any non-empty text passes.
    assert!(validate("A", "B", "1", "not-a-date", "a@b.cd", "1234567").is_ok());
}

#[test]
fn each_rule_maps_to_a_distinct_message() {
    assert_eq!(
        ValidationError::MissingField.to_string(),
        "All fields must be filled!"
    );
    assert_eq!(
        ValidationError::SalaryNotNumeric.to_string(),
        "Salary must be a number."
    );
    assert_eq!(
        ValidationError::InvalidEmail.to_string(),
        "Enter a valid email address."
    );
    assert_eq!(
        ValidationError::InvalidMobile.to_string(),
        "Enter a valid mobile number (7-15 digits)."
    );
}
