//! Bridge between the UI thread and the store worker.

pub mod commands;
pub mod runtime;
