//! Controller layer: UI events, form state, sync phases, and command orchestration.

pub mod events;
pub mod form;
pub mod orchestration;
pub mod sync;
