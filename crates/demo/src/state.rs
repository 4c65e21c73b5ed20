//! Shared application state passed to all request handlers.

use std::sync::Arc;

use crate::config::Config;

#[derive(Clone, Default)]
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
