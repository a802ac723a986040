//! Network messages - communication between App and Network layers

use crate::models::User;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the user list
    FetchUsers { id: u64, url: String },
    /// Abandon an in-flight fetch; its result is never delivered
    CancelFetch(u64),
    /// Cancel everything and stop the actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    UsersLoaded {
        id: u64,
        users: Vec<User>,
        time_ms: u64,
    },
    /// `reason` is for the log only
    FetchFailed {
        id: u64,
        reason: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::UsersLoaded { id, .. } => *id,
            NetworkResponse::FetchFailed { id, .. } => *id,
        }
    }
}
