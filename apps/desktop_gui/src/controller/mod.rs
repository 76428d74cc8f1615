//! Controller layer: form state machine, store events, and command dispatch.

pub mod events;
pub mod form;
pub mod orchestration;
