//! Field outline module
//!
//! Flattens a sample document into the rows an editing surface shows: one
//! row per field, with the controls that field offers. Rendering the rows
//! is left to the caller.

mod outline;
mod types;

pub use outline::{outline, render_outline};
pub use types::{FieldControl, FieldRow};
