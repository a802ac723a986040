//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Endpoint the user list is fetched from
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// The only user-facing failure message; the real cause goes to the log
pub const FETCH_ERROR_MESSAGE: &str = "An error occurred while fetching users";

/// Log file written next to the working directory
pub const DEFAULT_LOG_FILE: &str = "userdir.log";

/// Directory under $HOME holding the optional config file
pub const CONFIG_DIR_NAME: &str = ".userdir";

pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Application name
pub const APP_NAME: &str = "User Directory";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
