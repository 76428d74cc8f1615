//! The employee form and its explicit two-mode state machine.
//!
//! "New entry" means Add will create a fresh record; "editing" means a row
//! has been selected and Update/Delete act on its id. Selection is the only
//! way in, clearing (or completing any mutation) is the way back out, so
//! the mode is never inferred from incidental widget state.

use shared::domain::{EmployeeDraft, EmployeeId, EmployeeRecord};
use shared::validate::{validate_fields, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    NewEntry,
    Editing(EmployeeId),
}

#[derive(Debug, Clone)]
pub struct EmployeeForm {
    pub name: String,
    pub position: String,
    pub salary: String,
    pub dob: String,
    pub email: String,
    pub mobile: String,
    mode: FormMode,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            position: String::new(),
            salary: String::new(),
            dob: String::new(),
            email: String::new(),
            mobile: String::new(),
            mode: FormMode::NewEntry,
        }
    }
}

impl EmployeeForm {
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn selected_id(&self) -> Option<EmployeeId> {
        match self.mode {
            FormMode::Editing(id) => Some(id),
            FormMode::NewEntry => None,
        }
    }

    /// Runs the field rules over the current raw text. Does not touch the
    /// mode; callers decide what a valid draft is for (add vs update).
    pub fn validate(&self) -> Result<EmployeeDraft, ValidationError> {
        validate_fields(
            &self.name,
            &self.position,
            &self.salary,
            &self.dob,
            &self.email,
            &self.mobile,
        )
    }

    /// Populates the editable fields from a stored record (the id stays out
    /// of the fields) and switches to editing mode.
    pub fn load(&mut self, record: &EmployeeRecord) {
        self.name = record.name.clone();
        self.position = record.position.clone();
        // Display of f64 renders whole salaries without a trailing ".0",
        // so a loaded value can be resubmitted unchanged.
        self.salary = record.salary.to_string();
        self.dob = record.dob.clone();
        self.email = record.email.clone();
        self.mobile = record.mobile.clone();
        self.mode = FormMode::Editing(record.id);
    }

    /// Empties every field and returns to new-entry mode.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
