//! User-driven selection state

pub mod state;

pub use state::{SelectionState, Toggle};
