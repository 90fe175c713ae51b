//! Schema types for resources and data sources

use serde::Serialize;
use std::fmt;

/// Whether a schema describes a managed resource or a read-only data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    Resource,
    DataSource,
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaKind::Resource => write!(f, "resource"),
            SchemaKind::DataSource => write!(f, "data source"),
        }
    }
}

/// Value type of an attribute; list and map elements are always strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Bool,
    Int,
    StringList,
    StringMap,
}

/// How an attribute is supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeMode {
    Required,
    Optional,
    /// Set by the provider, never by the user
    Computed,
    /// Set by the user or, failing that, by the provider
    OptionalComputed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeSchema {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    pub mode: AttributeMode,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub description: &'static str,
}

impl AttributeSchema {
    fn new(name: &'static str, attr_type: AttributeType, mode: AttributeMode) -> Self {
        Self {
            name,
            attr_type,
            mode,
            description: "",
        }
    }

    pub fn required(name: &'static str, attr_type: AttributeType) -> Self {
        Self::new(name, attr_type, AttributeMode::Required)
    }

    pub fn optional(name: &'static str, attr_type: AttributeType) -> Self {
        Self::new(name, attr_type, AttributeMode::Optional)
    }

    pub fn computed(name: &'static str, attr_type: AttributeType) -> Self {
        Self::new(name, attr_type, AttributeMode::Computed)
    }

    pub fn optional_computed(name: &'static str, attr_type: AttributeType) -> Self {
        Self::new(name, attr_type, AttributeMode::OptionalComputed)
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }
}

/// Schema of one resource or data-source kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceSchema {
    pub name: &'static str,
    pub kind: SchemaKind,
    pub description: &'static str,
    pub attributes: Vec<AttributeSchema>,
}

impl ResourceSchema {
    pub fn resource(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: SchemaKind::Resource,
            description,
            attributes: Vec::new(),
        }
    }

    pub fn data_source(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: SchemaKind::DataSource,
            description,
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: AttributeSchema) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Names of attributes the user must set
    pub fn required_attributes(&self) -> Vec<&'static str> {
        self.attributes
            .iter()
            .filter(|a| a.mode == AttributeMode::Required)
            .map(|a| a.name)
            .collect()
    }
}
