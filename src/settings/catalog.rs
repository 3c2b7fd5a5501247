//! Selectable providers and the form fields each one shows

use super::model::{ConfigField, Provider};
use super::validator::Validator;

/// Heading text for a provider's section of the settings form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderDescriptor {
    pub provider: Provider,
    pub title: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
}

/// Label and hint text for one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub field: ConfigField,
    pub label: &'static str,
    pub placeholder: &'static str,
}

impl ProviderDescriptor {
    /// Descriptor for a provider that can be configured, if any
    pub fn for_provider(provider: &Provider) -> Option<Self> {
        let (title, description, placeholder) = match provider {
            Provider::AzureOpenAi => (
                "Azure OpenAI Configuration",
                "Required for using Azure OpenAI services",
                "Enter your Azure OpenAI details",
            ),
            Provider::Ollama => (
                "Ollama Configuration",
                "Required for using a local Ollama server",
                "Enter your Ollama model and server URL",
            ),
            Provider::Custom => (
                "Custom LLM Configuration",
                "Required for using an OpenAI-compatible endpoint",
                "Enter your custom endpoint details",
            ),
            _ => return None,
        };

        Some(Self {
            provider: provider.clone(),
            title,
            description,
            placeholder,
        })
    }

    /// Inputs shown for this provider, in form order
    pub fn fields(&self) -> Vec<FieldDescriptor> {
        self.provider
            .fields()
            .iter()
            .map(|field| FieldDescriptor::for_field(*field))
            .collect()
    }
}

impl FieldDescriptor {
    pub fn for_field(field: ConfigField) -> Self {
        let (label, placeholder) = match field {
            ConfigField::AzureOpenAiEndpoint => {
                ("Endpoint", "https://your-endpoint.openai.azure.com")
            }
            ConfigField::AzureOpenAiApiKey
            | ConfigField::OpenAiApiKey
            | ConfigField::GoogleApiKey => ("API Key", "Enter your API key"),
            ConfigField::AzureOpenAiDeployment => ("Deployment Name", "Your deployment"),
            ConfigField::AzureOpenAiApiVersion => ("API Version", "2024-02-15-preview"),
            ConfigField::OllamaModel => ("Model", "llama3.2"),
            ConfigField::OllamaUrl => ("Ollama URL", "http://localhost:11434"),
            ConfigField::CustomLlmUrl => ("Endpoint URL", "https://your-llm-host/v1"),
            ConfigField::CustomModel => ("Model", "Your model name"),
        };

        Self {
            field,
            label,
            placeholder,
        }
    }
}

/// Providers the user can pick, given which rules are active
pub fn selectable_providers(validator: &Validator) -> Vec<ProviderDescriptor> {
    Provider::RECOGNIZED
        .iter()
        .filter(|provider| validator.supports(provider))
        .filter_map(ProviderDescriptor::for_provider)
        .collect()
}

/// Button label for a provider
pub fn display_name(provider: &Provider) -> String {
    if *provider == Provider::OpenAi {
        return "OpenAI".to_string();
    }

    let id = provider.as_str();
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_azure_descriptor() {
        let descriptor = ProviderDescriptor::for_provider(&Provider::AzureOpenAi).unwrap();
        assert_eq!(descriptor.title, "Azure OpenAI Configuration");
        assert_eq!(descriptor.description, "Required for using Azure OpenAI services");
        assert_eq!(descriptor.placeholder, "Enter your Azure OpenAI details");

        let labels: Vec<_> = descriptor.fields().iter().map(|f| f.label).collect();
        assert_eq!(labels, vec!["Endpoint", "API Key", "Deployment Name", "API Version"]);
        assert_eq!(descriptor.fields()[3].placeholder, "2024-02-15-preview");
    }

    #[test]
    fn test_selectable_providers_follow_validator() {
        let all: Vec<_> = selectable_providers(&Validator::new())
            .into_iter()
            .map(|d| d.provider)
            .collect();
        assert_eq!(all, vec![Provider::AzureOpenAi, Provider::Ollama, Provider::Custom]);

        let azure_only: Vec<_> =
            selectable_providers(&Validator::without(&[Provider::Ollama, Provider::Custom]))
                .into_iter()
                .map(|d| d.provider)
                .collect();
        assert_eq!(azure_only, vec![Provider::AzureOpenAi]);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(&Provider::OpenAi), "OpenAI");
        assert_eq!(display_name(&Provider::Ollama), "Ollama");
        assert_eq!(display_name(&Provider::AzureOpenAi), "Azure_openai");
        assert_eq!(display_name(&Provider::from("")), "");
    }
}
