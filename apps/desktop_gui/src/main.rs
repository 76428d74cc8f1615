use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use backend_bridge::{commands::StoreCommand, runtime::spawn_store_worker};
use controller::events::UiEvent;
use ui::EmployeeApp;

#[derive(Debug, Parser)]
#[command(name = "employee-desk", about = "Employee management desktop app")]
struct Cli {
    /// SQLite database URL or file path. Defaults to the fixed data file
    /// `employee_management.db` in the working directory.
    #[arg(long)]
    database_url: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    let settings = config::load_settings(cli.database_url.as_deref());
    let database_url = config::normalize_database_url(&settings.database_url);
    tracing::info!(%database_url, "starting employee registry");

    let (cmd_tx, cmd_rx) = bounded::<StoreCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    spawn_store_worker(database_url, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Employee Management System")
            .with_inner_size([940.0, 660.0])
            .with_min_inner_size([760.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Employee Management System",
        options,
        Box::new(|_cc| Ok(Box::new(EmployeeApp::new(cmd_tx, ui_rx)))),
    )
}
