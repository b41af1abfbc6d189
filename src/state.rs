use std::sync::Arc;

use crate::config_manager::Config;

/// Shared, read-only application state. Requests never mutate it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
