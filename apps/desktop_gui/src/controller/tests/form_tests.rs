use super::*;

fn record(id: i64) -> EmployeeRecord {
    EmployeeRecord {
        id: EmployeeId(id),
        name: "Alice".to_string(),
        position: "Engineer".to_string(),
        salary: 75000.0,
        dob: "1990-01-01".to_string(),
        email: "alice@x.com".to_string(),
        mobile: "1234567890".to_string(),
    }
}

#[test]
fn starts_in_new_entry_mode() {
    let form = EmployeeForm::default();
    assert_eq!(form.mode(), FormMode::NewEntry);
    assert_eq!(form.selected_id(), None);
}

#[test]
fn loading_a_record_enters_editing_mode_with_its_fields() {
    let mut form = EmployeeForm::default();
    form.load(&record(7));

    assert_eq!(form.mode(), FormMode::Editing(EmployeeId(7)));
    assert_eq!(form.selected_id(), Some(EmployeeId(7)));
    assert_eq!(form.name, "Alice");
    assert_eq!(form.position, "Engineer");
    assert_eq!(form.salary, "75000");
    assert_eq!(form.dob, "1990-01-01");
    assert_eq!(form.email, "alice@x.com");
    assert_eq!(form.mobile, "1234567890");
}

#[test]
fn loaded_salary_text_revalidates_to_the_stored_number() {
    let mut form = EmployeeForm::default();
    form.load(&record(1));
    let draft = form.validate().expect("loaded record is valid");
    assert_eq!(draft.salary, 75000.0);

    let mut fractional = record(2);
    fractional.salary = 80000.5;
    form.load(&fractional);
    assert_eq!(form.salary, "80000.5");
    assert_eq!(form.validate().expect("valid").salary, 80000.5);
}

#[test]
fn clear_empties_fields_and_returns_to_new_entry() {
    let mut form = EmployeeForm::default();
    form.load(&record(3));
    form.clear();

    assert_eq!(form.mode(), FormMode::NewEntry);
    assert!(form.name.is_empty());
    assert!(form.salary.is_empty());
    assert!(form.mobile.is_empty());
}

#[test]
fn validate_reports_the_first_failing_rule() {
    let mut form = EmployeeForm::default();
    assert_eq!(form.validate(), Err(ValidationError::MissingField));

    form.load(&record(4));
    form.salary = "abc".to_string();
    assert_eq!(form.validate(), Err(ValidationError::SalaryNotNumeric));

    form.salary = "75000".to_string();
    form.email = "nodomain".to_string();
    assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));

    form.email = "alice@x.com".to_string();
    form.mobile = "12".to_string();
    assert_eq!(form.validate(), Err(ValidationError::InvalidMobile));
}

#[test]
fn validation_failure_does_not_change_the_mode() {
    let mut form = EmployeeForm::default();
    form.load(&record(5));
    form.name.clear();
    assert!(form.validate().is_err());
    assert_eq!(form.mode(), FormMode::Editing(EmployeeId(5)));
}
