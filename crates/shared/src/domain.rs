use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(EmployeeId);

/// A persisted employee row. The id is assigned by the store on insert and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub name: String,
    pub position: String,
    pub salary: f64,
    pub dob: String,
    pub email: String,
    pub mobile: String,
}

/// Validated form payload, ready to be inserted or to overwrite an existing
/// row. Field values are already trimmed and salary is already parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub position: String,
    pub salary: f64,
    pub dob: String,
    pub email: String,
    pub mobile: String,
}
