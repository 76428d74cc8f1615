//! Field validation for the employee form.
//!
//! Rules run in a fixed order and stop at the first failure, so the user
//! always sees a single, specific message. The email rule is intentionally
//! permissive: one `@` with at least one `.` after it, a character on each
//! side, nothing more.

use thiserror::Error;

use crate::domain::EmployeeDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields must be filled!")]
    MissingField,
    #[error("Salary must be a number.")]
    SalaryNotNumeric,
    #[error("Enter a valid email address.")]
    InvalidEmail,
    #[error("Enter a valid mobile number (7-15 digits).")]
    InvalidMobile,
}

/// Validates the six raw form fields and, on success, returns a draft with
/// trimmed values and the salary parsed.
pub fn validate_fields(
    name: &str,
    position: &str,
    salary: &str,
    dob: &str,
    email: &str,
    mobile: &str,
) -> Result<EmployeeDraft, ValidationError> {
    let name = name.trim();
    let position = position.trim();
    let salary = salary.trim();
    let dob = dob.trim();
    let email = email.trim();
    let mobile = mobile.trim();

    if [name, position, salary, dob, email, mobile]
        .iter()
        .any(|field| field.is_empty())
    {
        return Err(ValidationError::MissingField);
    }

    let salary: f64 = salary
        .parse()
        .map_err(|_| ValidationError::SalaryNotNumeric)?;

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    if !is_valid_mobile(mobile) {
        return Err(ValidationError::InvalidMobile);
    }

    Ok(EmployeeDraft {
        name: name.to_string(),
        position: position.to_string(),
        salary,
        dob: dob.to_string(),
        email: email.to_string(),
        mobile: mobile.to_string(),
    })
}

/// Accepts `local@domain.tld` loosely: exactly one `@`, and somewhere after
/// it a `.` with at least one character on each side.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // A dot that is neither the first nor the last character of the domain.
    let bytes = domain.as_bytes();
    bytes
        .iter()
        .enumerate()
        .any(|(i, &b)| b == b'.' && i > 0 && i < bytes.len() - 1)
}

/// Accepts 7 to 15 ASCII digits and nothing else.
pub fn is_valid_mobile(mobile: &str) -> bool {
    (7..=15).contains(&mobile.len()) && mobile.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
#[path = "tests/validate_tests.rs"]
mod tests;
