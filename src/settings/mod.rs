//! LLM Settings
//!
//! Configuration model, validation and the save workflow for choosing an LLM
//! provider and its credentials.

pub mod catalog;
pub mod error;
pub mod http;
pub mod model;
pub mod session;
pub mod store;
pub mod validator;
pub mod workflow;

// Re-export commonly used types
pub use catalog::{display_name, selectable_providers, FieldDescriptor, ProviderDescriptor};
pub use error::{RemoteStoreError, SaveError, StateStoreError, UnknownFieldError};
pub use http::HttpRemoteStore;
pub use model::{ConfigField, Provider, ProviderConfiguration, UnknownProvider};
pub use session::{EditSession, SaveOutcome, SettingsEntry, Severity};
pub use store::{InMemoryStateStore, LocalStateStore, RemoteStore, UserConfigState};
pub use validator::{is_valid, Validator};
pub use workflow::SaveWorkflow;
