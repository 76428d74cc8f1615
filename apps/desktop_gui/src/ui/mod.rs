//! UI layer: the eframe app shell for the employee form and roster table.

pub mod app;

pub use app::EmployeeApp;
