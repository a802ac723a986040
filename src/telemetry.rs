//! Startup telemetry hook
//!
//! Called once from `main`. It only writes to the log; nothing reads its
//! result.

use crate::constants::{APP_NAME, APP_VERSION};

pub fn report_startup() {
    tracing::info!(
        app = APP_NAME,
        version = APP_VERSION,
        started_at = %chrono::Utc::now().to_rfc3339(),
        pid = std::process::id(),
        "Startup"
    );
}
