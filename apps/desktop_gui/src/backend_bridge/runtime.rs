//! Store worker: a dedicated thread owning the tokio runtime and the
//! employee store. Commands arrive over a bounded channel; every mutation
//! is followed by a full roster refresh so the UI always mirrors the store.

use crossbeam_channel::{Receiver, Sender};
use storage::EmployeeStore;

use crate::backend_bridge::commands::StoreCommand;
use crate::controller::events::UiEvent;

pub fn spawn_store_worker(
    database_url: String,
    cmd_rx: Receiver<StoreCommand>,
    ui_tx: Sender<UiEvent>,
) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.send(UiEvent::Error(format!(
                    "Failed to start the store worker runtime: {err}"
                )));
                return;
            }
        };

        runtime.block_on(async move {
            let store = match EmployeeStore::new(&database_url).await {
                Ok(store) => store,
                Err(err) => {
                    tracing::error!(?err, %database_url, "failed to open employee database");
                    let _ = ui_tx.send(UiEvent::Error(format!(
                        "Failed to open the employee database: {err:#}"
                    )));
                    return;
                }
            };

            push_roster(&store, &ui_tx).await;

            while let Ok(cmd) = cmd_rx.recv() {
                handle_command(&store, &ui_tx, cmd).await;
            }
        });

        tracing::info!("store worker stopped");
    });
}

async fn handle_command(store: &EmployeeStore, ui_tx: &Sender<UiEvent>, cmd: StoreCommand) {
    match cmd {
        StoreCommand::AddEmployee { draft } => match store.add_employee(&draft).await {
            Ok(id) => {
                tracing::debug!(id = id.0, "employee added");
                let _ = ui_tx.send(UiEvent::Info("Employee added successfully!".to_string()));
                push_roster(store, ui_tx).await;
            }
            Err(err) => report_store_error(ui_tx, "add the employee", err),
        },
        StoreCommand::UpdateEmployee { id, draft } => match store.update_employee(id, &draft).await
        {
            Ok(true) => {
                tracing::debug!(id = id.0, "employee updated");
                let _ = ui_tx.send(UiEvent::Info("Employee updated successfully!".to_string()));
                push_roster(store, ui_tx).await;
            }
            Ok(false) => {
                let _ = ui_tx.send(UiEvent::Error(format!(
                    "No employee with id {} exists.",
                    id.0
                )));
                push_roster(store, ui_tx).await;
            }
            Err(err) => report_store_error(ui_tx, "update the employee", err),
        },
        StoreCommand::DeleteEmployee { id } => match store.delete_employee(id).await {
            Ok(true) => {
                tracing::debug!(id = id.0, "employee deleted");
                let _ = ui_tx.send(UiEvent::Info("Employee deleted successfully!".to_string()));
                push_roster(store, ui_tx).await;
            }
            Ok(false) => {
                let _ = ui_tx.send(UiEvent::Error(format!(
                    "No employee with id {} exists.",
                    id.0
                )));
                push_roster(store, ui_tx).await;
            }
            Err(err) => report_store_error(ui_tx, "delete the employee", err),
        },
        StoreCommand::RefreshRoster => push_roster(store, ui_tx).await,
    }
}

async fn push_roster(store: &EmployeeStore, ui_tx: &Sender<UiEvent>) {
    match store.list_employees().await {
        Ok(records) => {
            let _ = ui_tx.send(UiEvent::Roster(records));
        }
        Err(err) => report_store_error(ui_tx, "load the employee list", err),
    }
}

fn report_store_error(ui_tx: &Sender<UiEvent>, action: &str, err: anyhow::Error) {
    tracing::error!(?err, action, "store operation failed");
    let _ = ui_tx.send(UiEvent::Error(format!("Failed to {action}: {err:#}")));
}
