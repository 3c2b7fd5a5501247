//! Completeness checks for provider configurations

use super::model::{ConfigField, Provider, ProviderConfiguration};

const AZURE_OPENAI_REQUIRED: &[ConfigField] = &[
    ConfigField::AzureOpenAiEndpoint,
    ConfigField::AzureOpenAiApiKey,
    ConfigField::AzureOpenAiDeployment,
    ConfigField::AzureOpenAiApiVersion,
];

const OLLAMA_REQUIRED: &[ConfigField] = &[ConfigField::OllamaModel, ConfigField::OllamaUrl];

const CUSTOM_REQUIRED: &[ConfigField] = &[ConfigField::CustomLlmUrl, ConfigField::CustomModel];

/// Decides whether a configuration is complete enough to save
///
/// Azure OpenAI always has a rule. Ollama and custom endpoints are extension
/// providers and can be switched off, in which case they have no rule and
/// every configuration selecting them is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    ollama_enabled: bool,
    custom_enabled: bool,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            ollama_enabled: true,
            custom_enabled: true,
        }
    }
}

impl Validator {
    /// Create a validator with every extension provider enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with the given providers switched off
    pub fn without(disabled: &[Provider]) -> Self {
        Self {
            ollama_enabled: !disabled.contains(&Provider::Ollama),
            custom_enabled: !disabled.contains(&Provider::Custom),
        }
    }

    /// Required fields for a provider, or `None` if no rule applies
    pub fn required_fields(&self, provider: &Provider) -> Option<&'static [ConfigField]> {
        match provider {
            Provider::AzureOpenAi => Some(AZURE_OPENAI_REQUIRED),
            Provider::Ollama if self.ollama_enabled => Some(OLLAMA_REQUIRED),
            Provider::Custom if self.custom_enabled => Some(CUSTOM_REQUIRED),
            _ => None,
        }
    }

    /// Whether the provider has an active rule
    pub fn supports(&self, provider: &Provider) -> bool {
        self.required_fields(provider).is_some()
    }

    pub fn is_valid(&self, config: &ProviderConfiguration) -> bool {
        let Some(provider) = selected_provider(config) else {
            return false;
        };

        match self.required_fields(provider) {
            Some(required) => required.iter().all(|field| config.is_present(*field)),
            None => false,
        }
    }

    /// Required fields that are absent for the selected provider
    ///
    /// Empty when the configuration is valid, and also empty when no rule
    /// applies at all (nothing could be filled in to fix it).
    pub fn missing_fields(&self, config: &ProviderConfiguration) -> Vec<ConfigField> {
        selected_provider(config)
            .and_then(|provider| self.required_fields(provider))
            .map(|required| {
                required
                    .iter()
                    .copied()
                    .filter(|field| !config.is_present(*field))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Check a configuration against the default rule set
pub fn is_valid(config: &ProviderConfiguration) -> bool {
    Validator::default().is_valid(config)
}

fn selected_provider(config: &ProviderConfiguration) -> Option<&Provider> {
    config
        .provider
        .as_ref()
        .filter(|provider| !provider.as_str().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn azure(
        endpoint: Option<&str>,
        key: Option<&str>,
        deployment: Option<&str>,
        version: Option<&str>,
    ) -> ProviderConfiguration {
        ProviderConfiguration {
            provider: Some(Provider::AzureOpenAi),
            azure_openai_endpoint: endpoint.map(String::from),
            azure_openai_api_key: key.map(String::from),
            azure_openai_deployment: deployment.map(String::from),
            azure_openai_api_version: version.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_unset_provider_is_invalid() {
        let mut config = azure(Some("e"), Some("k"), Some("d"), Some("v"));
        config.provider = None;
        assert!(!is_valid(&config));

        config.provider = Some(Provider::from(""));
        assert!(!is_valid(&config));
    }

    #[test]
    fn test_complete_azure_is_valid() {
        assert!(is_valid(&azure(Some("e"), Some("k"), Some("d"), Some("v"))));
    }

    #[test]
    fn test_azure_ignores_other_providers_fields() {
        let mut config = azure(Some("e"), Some("k"), Some("d"), Some("v"));
        config.openai_api_key = Some(String::new());
        config.ollama_url = None;
        assert!(is_valid(&config));

        let mut config = azure(Some("e"), None, Some("d"), Some("v"));
        config.openai_api_key = Some("sk-plain-openai".to_string());
        assert!(!is_valid(&config));
    }

    #[test]
    fn test_ollama_rule() {
        let config = ProviderConfiguration::new(Provider::Ollama)
            .with_field(ConfigField::OllamaModel, "llama3");
        assert!(!is_valid(&config));
        assert!(is_valid(
            &config.with_field(ConfigField::OllamaUrl, "http://localhost:11434")
        ));
    }

    #[test]
    fn test_custom_rule() {
        let config = ProviderConfiguration::new(Provider::Custom)
            .with_field(ConfigField::CustomLlmUrl, "http://llm.internal/v1")
            .with_field(ConfigField::CustomModel, "");
        assert!(!is_valid(&config));
        assert!(is_valid(&config.with_field(ConfigField::CustomModel, "qwen")));
    }

    #[test]
    fn test_disabled_extension_provider_is_invalid() {
        let validator = Validator::without(&[Provider::Ollama]);
        let config = ProviderConfiguration::new(Provider::Ollama)
            .with_field(ConfigField::OllamaModel, "llama3")
            .with_field(ConfigField::OllamaUrl, "http://localhost:11434");

        assert!(!validator.is_valid(&config));
        assert!(!validator.supports(&Provider::Ollama));
        assert!(validator.supports(&Provider::Custom));
        assert!(validator.missing_fields(&config).is_empty());
    }

    #[test]
    fn test_providers_without_rule_are_invalid() {
        let mut config = ProviderConfiguration::new(Provider::OpenAi);
        for field in ConfigField::ALL {
            config.set_field(field, "filled");
        }
        assert!(!is_valid(&config));
        assert!(!is_valid(&config.with_provider(Provider::Google)));
    }

    #[test]
    fn test_missing_fields() {
        let config = azure(None, Some("k"), Some(""), Some("v"));
        assert_eq!(
            Validator::new().missing_fields(&config),
            vec![ConfigField::AzureOpenAiEndpoint, ConfigField::AzureOpenAiDeployment]
        );
        assert!(Validator::new()
            .missing_fields(&azure(Some("e"), Some("k"), Some("d"), Some("v")))
            .is_empty());
    }
}
