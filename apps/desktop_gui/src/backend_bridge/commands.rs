//! Store commands queued from UI to the store worker.

use shared::domain::{EmployeeDraft, EmployeeId};

pub enum StoreCommand {
    AddEmployee {
        draft: EmployeeDraft,
    },
    UpdateEmployee {
        id: EmployeeId,
        draft: EmployeeDraft,
    },
    DeleteEmployee {
        id: EmployeeId,
    },
    RefreshRoster,
}
