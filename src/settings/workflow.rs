//! Save transaction: validate, persist remotely, commit locally

use std::sync::Arc;

use super::error::SaveError;
use super::model::ProviderConfiguration;
use super::store::{LocalStateStore, RemoteStore};
use super::validator::Validator;

/// Orchestrates saving a configuration to both stores
///
/// Steps run in order and stop at the first failure. Validation always runs
/// before any I/O. There is no rollback: if the local commit fails after the
/// remote write, the two stores disagree until the next successful save.
pub struct SaveWorkflow {
    remote: Arc<dyn RemoteStore>,
    local: Arc<dyn LocalStateStore>,
    validator: Validator,
}

impl SaveWorkflow {
    pub fn new(remote: Arc<dyn RemoteStore>, local: Arc<dyn LocalStateStore>) -> Self {
        Self {
            remote,
            local,
            validator: Validator::default(),
        }
    }

    /// Use a custom rule set instead of the default one
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// The local store this workflow commits to
    pub fn local_store(&self) -> &Arc<dyn LocalStateStore> {
        &self.local
    }

    /// Save a configuration
    ///
    /// # Errors
    ///
    /// * [`SaveError::InvalidConfiguration`] if required fields are missing;
    ///   neither store is touched.
    /// * [`SaveError::RemotePersistFailure`] if the remote store fails; local
    ///   state is unchanged.
    /// * [`SaveError::LocalCommitFailure`] if the local commit fails after a
    ///   successful remote write.
    pub async fn save(&self, config: &ProviderConfiguration) -> Result<(), SaveError> {
        if !self.validator.is_valid(config) {
            let missing = self.validator.missing_fields(config);
            tracing::warn!(
                provider = ?config.provider,
                ?missing,
                "refusing to save incomplete LLM configuration"
            );
            return Err(SaveError::InvalidConfiguration {
                provider: config.provider.clone(),
                missing,
            });
        }

        if let Err(e) = self.remote.persist(config).await {
            tracing::error!(error = %e, "failed to persist LLM configuration");
            return Err(e.into());
        }

        if let Err(e) = self.local.set_llm_config(config.clone()) {
            tracing::error!(
                error = %e,
                "LLM configuration persisted remotely but local commit failed"
            );
            return Err(e.into());
        }

        tracing::info!(provider = ?config.provider, "LLM configuration saved");
        Ok(())
    }
}
