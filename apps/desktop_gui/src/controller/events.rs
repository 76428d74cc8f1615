//! Events flowing from the store worker back to the UI.

use shared::domain::EmployeeRecord;

pub enum UiEvent {
    /// The store's full current contents, in store order. Replaces the
    /// displayed list wholesale.
    Roster(Vec<EmployeeRecord>),
    Info(String),
    Error(String),
}
