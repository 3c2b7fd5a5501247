//! Edit session behind the settings surface

use super::error::{SaveError, StateStoreError, UnknownFieldError};
use super::model::{ConfigField, Provider, ProviderConfiguration};
use super::store::LocalStateStore;
use super::workflow::SaveWorkflow;

/// Where users without permission to change keys are sent
pub const DEFAULT_REDIRECT: &str = "/dashboard";

/// Result of trying to enter the settings surface
#[derive(Debug)]
pub enum SettingsEntry {
    Granted(EditSession),
    Redirect(&'static str),
}

/// How a save outcome should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Destructive,
}

/// What the user should be told after a save attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    /// Return to the previous screen
    pub navigate_back: bool,
}

impl SaveOutcome {
    fn from_result(result: &Result<(), SaveError>) -> Self {
        match result {
            Ok(()) => Self {
                title: "Success".to_string(),
                description: "Configuration saved successfully".to_string(),
                severity: Severity::Info,
                navigate_back: true,
            },
            Err(e) => Self {
                title: "Error".to_string(),
                description: e.to_string(),
                severity: Severity::Destructive,
                navigate_back: false,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.severity == Severity::Info
    }
}

/// The edit buffer for one visit to the settings surface
///
/// Seeded from the local state store and discarded when dropped unless saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    buffer: ProviderConfiguration,
}

impl EditSession {
    /// Enter the settings surface, or get redirected when keys cannot be changed
    pub fn open(local: &dyn LocalStateStore) -> Result<SettingsEntry, StateStoreError> {
        let state = local.state()?;

        if !state.can_change_keys {
            tracing::info!(redirect = DEFAULT_REDIRECT, "settings access denied");
            return Ok(SettingsEntry::Redirect(DEFAULT_REDIRECT));
        }

        Ok(SettingsEntry::Granted(Self {
            buffer: state.llm_config,
        }))
    }

    /// Current contents of the edit buffer
    pub fn buffer(&self) -> &ProviderConfiguration {
        &self.buffer
    }

    pub fn edit(&mut self, field: ConfigField, value: impl Into<String>) {
        self.buffer = self.buffer.with_field(field, value);
    }

    /// Update a field named by its form identifier or wire key
    pub fn edit_by_key(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownFieldError> {
        let field: ConfigField = key.parse()?;
        self.edit(field, value);
        Ok(())
    }

    pub fn change_provider(&mut self, provider: impl Into<Provider>) {
        self.buffer = self.buffer.with_provider(provider);
    }

    /// Save the buffer and describe the outcome
    ///
    /// The buffer is kept on failure so the user can correct it and retry.
    pub async fn save(&mut self, workflow: &SaveWorkflow) -> SaveOutcome {
        let result = workflow.save(&self.buffer).await;
        SaveOutcome::from_result(&result)
    }
}
