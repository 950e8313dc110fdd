//! Shared application state.

use syllamap_core::SyllamapConfig;

/// Shared application state accessible from all route handlers.
///
/// The extraction pipeline is stateless, so this holds configuration only:
/// every request is an independent unit of work.
pub struct AppState {
    pub config: SyllamapConfig,
}

impl AppState {
    pub fn new(config: SyllamapConfig) -> Self {
        Self { config }
    }
}
