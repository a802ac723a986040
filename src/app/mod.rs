//! App layer - central state management and command processing
//!
//! The App actor receives UI events and network responses,
//! updates state, and emits network commands and render state.

pub mod reducer;
pub mod edit;
pub mod state;
pub mod actor;
pub mod commands;

pub use reducer::{reduce, TableAction, TableState, ViewPhase};
pub use edit::{DialogOutcome, EditField, EditSession};
pub use state::AppState;
pub use actor::AppActor;
