//! Provider configuration data model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::UnknownFieldError;

/// An LLM backend the user can select
///
/// Any identifier outside the recognized set is kept as `Unknown` so that a
/// payload coming back from the server never fails to deserialize. `Unknown`
/// can only be built through `From`, so it never holds a recognized id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Provider {
    AzureOpenAi,
    OpenAi,
    Google,
    Ollama,
    Custom,
    Unknown(UnknownProvider),
}

/// Identifier of a provider outside the recognized set
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownProvider(String);

impl UnknownProvider {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Provider {
    /// Every provider with a known identifier
    pub const RECOGNIZED: [Provider; 5] = [
        Provider::AzureOpenAi,
        Provider::OpenAi,
        Provider::Google,
        Provider::Ollama,
        Provider::Custom,
    ];

    /// Get the identifier string stored in the `LLM` field
    pub fn as_str(&self) -> &str {
        match self {
            Provider::AzureOpenAi => "azure_openai",
            Provider::OpenAi => "openai",
            Provider::Google => "google",
            Provider::Ollama => "ollama",
            Provider::Custom => "custom",
            Provider::Unknown(id) => id.as_str(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Provider::Unknown(_))
    }

    /// Fields that belong to this provider's section of the form
    pub fn fields(&self) -> &'static [ConfigField] {
        match self {
            Provider::AzureOpenAi => &[
                ConfigField::AzureOpenAiEndpoint,
                ConfigField::AzureOpenAiApiKey,
                ConfigField::AzureOpenAiDeployment,
                ConfigField::AzureOpenAiApiVersion,
            ],
            Provider::OpenAi => &[ConfigField::OpenAiApiKey],
            Provider::Google => &[ConfigField::GoogleApiKey],
            Provider::Ollama => &[ConfigField::OllamaModel, ConfigField::OllamaUrl],
            Provider::Custom => &[ConfigField::CustomLlmUrl, ConfigField::CustomModel],
            Provider::Unknown(_) => &[],
        }
    }
}

impl From<String> for Provider {
    fn from(id: String) -> Self {
        match id.as_str() {
            "azure_openai" => Provider::AzureOpenAi,
            "openai" => Provider::OpenAi,
            "google" => Provider::Google,
            "ollama" => Provider::Ollama,
            "custom" => Provider::Custom,
            _ => Provider::Unknown(UnknownProvider(id)),
        }
    }
}

impl From<&str> for Provider {
    fn from(id: &str) -> Self {
        Provider::from(id.to_string())
    }
}

impl From<Provider> for String {
    fn from(provider: Provider) -> Self {
        match provider {
            Provider::Unknown(id) => id.0,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A credential or parameter slot in a [`ProviderConfiguration`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    OpenAiApiKey,
    GoogleApiKey,
    AzureOpenAiEndpoint,
    AzureOpenAiApiKey,
    AzureOpenAiDeployment,
    AzureOpenAiApiVersion,
    OllamaModel,
    OllamaUrl,
    CustomLlmUrl,
    CustomModel,
}

impl ConfigField {
    pub const ALL: [ConfigField; 10] = [
        ConfigField::OpenAiApiKey,
        ConfigField::GoogleApiKey,
        ConfigField::AzureOpenAiEndpoint,
        ConfigField::AzureOpenAiApiKey,
        ConfigField::AzureOpenAiDeployment,
        ConfigField::AzureOpenAiApiVersion,
        ConfigField::OllamaModel,
        ConfigField::OllamaUrl,
        ConfigField::CustomLlmUrl,
        ConfigField::CustomModel,
    ];

    /// Identifier used by form inputs (e.g. `azure_openai_endpoint`)
    pub fn id(&self) -> &'static str {
        match self {
            ConfigField::OpenAiApiKey => "openai_api_key",
            ConfigField::GoogleApiKey => "google_api_key",
            ConfigField::AzureOpenAiEndpoint => "azure_openai_endpoint",
            ConfigField::AzureOpenAiApiKey => "azure_openai_api_key",
            ConfigField::AzureOpenAiDeployment => "azure_openai_deployment",
            ConfigField::AzureOpenAiApiVersion => "azure_openai_api_version",
            ConfigField::OllamaModel => "ollama_model",
            ConfigField::OllamaUrl => "ollama_url",
            ConfigField::CustomLlmUrl => "custom_llm_url",
            ConfigField::CustomModel => "custom_model",
        }
    }

    /// Key used in the JSON payload (e.g. `AZURE_OPENAI_ENDPOINT`)
    pub fn wire_key(&self) -> &'static str {
        match self {
            ConfigField::OpenAiApiKey => "OPENAI_API_KEY",
            ConfigField::GoogleApiKey => "GOOGLE_API_KEY",
            ConfigField::AzureOpenAiEndpoint => "AZURE_OPENAI_ENDPOINT",
            ConfigField::AzureOpenAiApiKey => "AZURE_OPENAI_API_KEY",
            ConfigField::AzureOpenAiDeployment => "AZURE_OPENAI_DEPLOYMENT",
            ConfigField::AzureOpenAiApiVersion => "AZURE_OPENAI_API_VERSION",
            ConfigField::OllamaModel => "OLLAMA_MODEL",
            ConfigField::OllamaUrl => "OLLAMA_URL",
            ConfigField::CustomLlmUrl => "CUSTOM_LLM_URL",
            ConfigField::CustomModel => "CUSTOM_MODEL",
        }
    }
}

impl FromStr for ConfigField {
    type Err = UnknownFieldError;

    /// Accepts either the form identifier or the wire key
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigField::ALL
            .iter()
            .find(|field| field.id() == s || field.wire_key() == s)
            .copied()
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_key())
    }
}

/// The LLM settings being edited or persisted
///
/// Carries the fields of every provider at once; switching `provider` never
/// drops a value. Missing keys and JSON `null` both deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfiguration {
    #[serde(rename = "LLM", skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    #[serde(rename = "OPENAI_API_KEY", skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
    #[serde(rename = "GOOGLE_API_KEY", skip_serializing_if = "Option::is_none")]
    pub google_api_key: Option<String>,
    #[serde(rename = "AZURE_OPENAI_ENDPOINT", skip_serializing_if = "Option::is_none")]
    pub azure_openai_endpoint: Option<String>,
    #[serde(rename = "AZURE_OPENAI_API_KEY", skip_serializing_if = "Option::is_none")]
    pub azure_openai_api_key: Option<String>,
    #[serde(rename = "AZURE_OPENAI_DEPLOYMENT", skip_serializing_if = "Option::is_none")]
    pub azure_openai_deployment: Option<String>,
    #[serde(rename = "AZURE_OPENAI_API_VERSION", skip_serializing_if = "Option::is_none")]
    pub azure_openai_api_version: Option<String>,
    #[serde(rename = "OLLAMA_MODEL", skip_serializing_if = "Option::is_none")]
    pub ollama_model: Option<String>,
    #[serde(rename = "OLLAMA_URL", skip_serializing_if = "Option::is_none")]
    pub ollama_url: Option<String>,
    #[serde(rename = "CUSTOM_LLM_URL", skip_serializing_if = "Option::is_none")]
    pub custom_llm_url: Option<String>,
    #[serde(rename = "CUSTOM_MODEL", skip_serializing_if = "Option::is_none")]
    pub custom_model: Option<String>,
}

impl ProviderConfiguration {
    /// Create an empty configuration for the given provider
    pub fn new(provider: impl Into<Provider>) -> Self {
        Self {
            provider: Some(provider.into()),
            ..Default::default()
        }
    }

    /// Get the raw value of a field, if any
    pub fn get(&self, field: ConfigField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Whether a field holds a non-empty value
    pub fn is_present(&self, field: ConfigField) -> bool {
        self.get(field).is_some_and(|value| !value.is_empty())
    }

    /// Replace one field in place
    pub fn set_field(&mut self, field: ConfigField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Return a copy with one field replaced, leaving `self` untouched
    pub fn with_field(&self, field: ConfigField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set_field(field, value);
        next
    }

    /// Return a copy with a different provider selected; field values are kept
    pub fn with_provider(&self, provider: impl Into<Provider>) -> Self {
        Self {
            provider: Some(provider.into()),
            ..self.clone()
        }
    }

    fn slot(&self, field: ConfigField) -> &Option<String> {
        match field {
            ConfigField::OpenAiApiKey => &self.openai_api_key,
            ConfigField::GoogleApiKey => &self.google_api_key,
            ConfigField::AzureOpenAiEndpoint => &self.azure_openai_endpoint,
            ConfigField::AzureOpenAiApiKey => &self.azure_openai_api_key,
            ConfigField::AzureOpenAiDeployment => &self.azure_openai_deployment,
            ConfigField::AzureOpenAiApiVersion => &self.azure_openai_api_version,
            ConfigField::OllamaModel => &self.ollama_model,
            ConfigField::OllamaUrl => &self.ollama_url,
            ConfigField::CustomLlmUrl => &self.custom_llm_url,
            ConfigField::CustomModel => &self.custom_model,
        }
    }

    fn slot_mut(&mut self, field: ConfigField) -> &mut Option<String> {
        match field {
            ConfigField::OpenAiApiKey => &mut self.openai_api_key,
            ConfigField::GoogleApiKey => &mut self.google_api_key,
            ConfigField::AzureOpenAiEndpoint => &mut self.azure_openai_endpoint,
            ConfigField::AzureOpenAiApiKey => &mut self.azure_openai_api_key,
            ConfigField::AzureOpenAiDeployment => &mut self.azure_openai_deployment,
            ConfigField::AzureOpenAiApiVersion => &mut self.azure_openai_api_version,
            ConfigField::OllamaModel => &mut self.ollama_model,
            ConfigField::OllamaUrl => &mut self.ollama_url,
            ConfigField::CustomLlmUrl => &mut self.custom_llm_url,
            ConfigField::CustomModel => &mut self.custom_model,
        }
    }
}
