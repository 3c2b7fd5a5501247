#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use llm_settings::settings::{
    ConfigField, InMemoryStateStore, LocalStateStore, Provider, ProviderConfiguration,
    RemoteStore, RemoteStoreError, StateStoreError, UserConfigState,
};

/// Shared log of which store was called, in call order
pub type CallLog = Arc<Mutex<Vec<&'static str>>>;

pub const REMOTE_CALL: &str = "remote.persist";
pub const LOCAL_CALL: &str = "local.set_llm_config";

/// Remote store double that records every payload it receives
pub struct RecordingRemoteStore {
    log: CallLog,
    received: Mutex<Vec<ProviderConfiguration>>,
    failure: Option<(u16, String)>,
}

impl RecordingRemoteStore {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            received: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// Answer every persist call with the given HTTP status and body
    pub fn failing(log: CallLog, status: u16, body: &str) -> Self {
        Self {
            failure: Some((status, body.to_string())),
            ..Self::new(log)
        }
    }

    pub fn received(&self) -> Vec<ProviderConfiguration> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteStore for RecordingRemoteStore {
    async fn persist(&self, config: &ProviderConfiguration) -> Result<(), RemoteStoreError> {
        self.log.lock().unwrap().push(REMOTE_CALL);
        self.received.lock().unwrap().push(config.clone());

        match &self.failure {
            Some((status, body)) => Err(RemoteStoreError::Http {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Local store double backed by the real in-memory store
pub struct RecordingStateStore {
    log: CallLog,
    inner: InMemoryStateStore,
    commits: Mutex<usize>,
    fail_commits: bool,
}

impl RecordingStateStore {
    pub fn new(log: CallLog, state: UserConfigState) -> Self {
        Self {
            log,
            inner: InMemoryStateStore::new(state),
            commits: Mutex::new(0),
            fail_commits: false,
        }
    }

    /// Reject every commit as if the lock were poisoned
    pub fn failing(log: CallLog, state: UserConfigState) -> Self {
        Self {
            fail_commits: true,
            ..Self::new(log, state)
        }
    }

    pub fn commits(&self) -> usize {
        *self.commits.lock().unwrap()
    }
}

impl LocalStateStore for RecordingStateStore {
    fn state(&self) -> Result<UserConfigState, StateStoreError> {
        self.inner.state()
    }

    fn set_llm_config(&self, config: ProviderConfiguration) -> Result<(), StateStoreError> {
        self.log.lock().unwrap().push(LOCAL_CALL);
        *self.commits.lock().unwrap() += 1;

        if self.fail_commits {
            return Err(StateStoreError::Poisoned);
        }
        self.inner.set_llm_config(config)
    }
}

pub fn new_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn calls(log: &CallLog) -> Vec<&'static str> {
    log.lock().unwrap().clone()
}

/// A complete Azure OpenAI configuration
pub fn azure_config() -> ProviderConfiguration {
    ProviderConfiguration::new(Provider::AzureOpenAi)
        .with_field(ConfigField::AzureOpenAiEndpoint, "https://contoso.openai.azure.com")
        .with_field(ConfigField::AzureOpenAiApiKey, "azure-key")
        .with_field(ConfigField::AzureOpenAiDeployment, "gpt-4o")
        .with_field(ConfigField::AzureOpenAiApiVersion, "2024-02-15-preview")
}

/// Session state holding an older OpenAI configuration
pub fn initial_state() -> UserConfigState {
    UserConfigState {
        llm_config: ProviderConfiguration::new(Provider::OpenAi)
            .with_field(ConfigField::OpenAiApiKey, "sk-old"),
        can_change_keys: true,
    }
}
