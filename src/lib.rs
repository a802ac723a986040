//! # User Directory TUI
//!
//! A terminal viewer for a remote user list with in-memory edit and delete.
//!
//! ## Features
//! - One-shot fetch of the user list
//! - Table view with row selection
//! - Delete a row
//! - Edit a row in a modal dialog
//! - Explicit loading and error states
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine, pure reducer)
//! - Network Layer (Tokio runtime)

pub mod constants;
pub mod config;
pub mod error;
pub mod models;
pub mod messages;
pub mod app;
pub mod network;
pub mod telemetry;
pub mod ui;

// Re-export commonly used types
pub use models::{Address, Company, Geo, User};
pub use config::Config;
pub use error::FetchError;
pub use messages::{DialogInput, NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use app::{reduce, AppActor, AppState, EditSession, TableAction, TableState, ViewPhase};
pub use network::NetworkActor;
