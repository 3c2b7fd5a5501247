//! Shared state of the user-config server

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::settings::{ProviderConfiguration, Validator};

/// Server-side store for the LLM configuration
#[derive(Debug, Clone)]
pub struct ServerState {
    pub llm_config: Arc<RwLock<ProviderConfiguration>>,
    pub can_change_keys: bool,
    pub validator: Validator,
}

impl ServerState {
    pub fn new(can_change_keys: bool, validator: Validator) -> Self {
        Self {
            llm_config: Arc::new(RwLock::new(ProviderConfiguration::default())),
            can_change_keys,
            validator,
        }
    }
}
