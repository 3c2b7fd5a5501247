//! Stores the save workflow writes to

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

use super::error::{RemoteStoreError, StateStoreError};
use super::model::ProviderConfiguration;

/// Server-side persistence for the LLM configuration
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Persist the full configuration
    ///
    /// Only success or failure matters; any response body is ignored.
    async fn persist(&self, config: &ProviderConfiguration) -> Result<(), RemoteStoreError>;
}

/// Session state visible to the settings surface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfigState {
    pub llm_config: ProviderConfiguration,
    pub can_change_keys: bool,
}

/// In-process container holding the last committed configuration
pub trait LocalStateStore: Send + Sync {
    /// Snapshot of the current state
    fn state(&self) -> Result<UserConfigState, StateStoreError>;

    /// Replace the stored configuration
    fn set_llm_config(&self, config: ProviderConfiguration) -> Result<(), StateStoreError>;
}

/// [`LocalStateStore`] backed by a lock; lives as long as the running session
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    state: RwLock<UserConfigState>,
}

impl InMemoryStateStore {
    pub fn new(state: UserConfigState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }
}

impl LocalStateStore for InMemoryStateStore {
    fn state(&self) -> Result<UserConfigState, StateStoreError> {
        let state = self.state.read().map_err(|_| StateStoreError::Poisoned)?;
        Ok(state.clone())
    }

    fn set_llm_config(&self, config: ProviderConfiguration) -> Result<(), StateStoreError> {
        let mut state = self.state.write().map_err(|_| StateStoreError::Poisoned)?;
        state.llm_config = config;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::model::{ConfigField, Provider};
    use std::sync::Arc;

    #[test]
    fn test_set_llm_config_replaces_configuration() {
        let store = InMemoryStateStore::new(UserConfigState {
            llm_config: ProviderConfiguration::new(Provider::OpenAi),
            can_change_keys: true,
        });

        let next = ProviderConfiguration::new(Provider::AzureOpenAi)
            .with_field(ConfigField::AzureOpenAiApiKey, "k");
        store.set_llm_config(next.clone()).unwrap();

        let state = store.state().unwrap();
        assert_eq!(state.llm_config, next);
        assert!(state.can_change_keys);
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let store = Arc::new(InMemoryStateStore::default());

        let poisoner = Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.state.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(matches!(store.state(), Err(StateStoreError::Poisoned)));
        assert!(matches!(
            store.set_llm_config(ProviderConfiguration::default()),
            Err(StateStoreError::Poisoned)
        ));
    }
}
