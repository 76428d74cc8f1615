//! Command dispatch from UI actions to the store worker queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::StoreCommand;

pub fn dispatch_store_command(
    cmd_tx: &Sender<StoreCommand>,
    cmd: StoreCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        StoreCommand::AddEmployee { .. } => "add_employee",
        StoreCommand::UpdateEmployee { .. } => "update_employee",
        StoreCommand::DeleteEmployee { .. } => "delete_employee",
        StoreCommand::RefreshRoster => "refresh_roster",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->store command"),
        Err(TrySendError::Full(_)) => {
            *status = "The store is busy; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Store worker is not running; restart the application".to_string();
        }
    }
}
