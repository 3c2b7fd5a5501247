// Request/response bodies of the user-config server

use serde::{Deserialize, Serialize};

use crate::settings::{display_name, FieldDescriptor, ProviderDescriptor};

// POST /api/user-config response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaveResponse {
    pub saved: bool,
}

// GET /api/can-change-keys response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessResponse {
    pub can_change_keys: bool,
}

// GET /api/providers entries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
    pub title: String,
    pub description: String,
    pub placeholder: String,
    pub fields: Vec<FieldInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldInfo {
    pub key: String,
    pub label: String,
    pub placeholder: String,
}

impl From<&ProviderDescriptor> for ProviderInfo {
    fn from(descriptor: &ProviderDescriptor) -> Self {
        Self {
            id: descriptor.provider.as_str().to_string(),
            name: display_name(&descriptor.provider),
            title: descriptor.title.to_string(),
            description: descriptor.description.to_string(),
            placeholder: descriptor.placeholder.to_string(),
            fields: descriptor.fields().iter().map(FieldInfo::from).collect(),
        }
    }
}

impl From<&FieldDescriptor> for FieldInfo {
    fn from(descriptor: &FieldDescriptor) -> Self {
        Self {
            key: descriptor.field.wire_key().to_string(),
            label: descriptor.label.to_string(),
            placeholder: descriptor.placeholder.to_string(),
        }
    }
}
