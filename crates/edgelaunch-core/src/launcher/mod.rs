//! Gesture interpretation inside the launcher surface.

mod model;

pub use model::{LauncherModel, Outcome, Slot};
