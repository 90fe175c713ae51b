//! The provider's declaration and configuration entry point

use super::registry::SchemaRegistry;
use super::resources::{data_sources, resources};
use super::schema::{ResourceSchema, SchemaKind};
use crate::client::{GocdClient, HostTool};
use crate::config::{FieldSpec, ProviderInput, provider_fields};
use crate::credential::{ConfigResolver, EnvSource};
use crate::error::GocdResult;
use serde::Serialize;
use tracing::debug;

/// Fields, resource kinds and data-source kinds of the GoCD provider.
///
/// Built once at start-up and read-only afterwards, so one descriptor can
/// configure any number of provider instances concurrently.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderDescriptor {
    fields: Vec<FieldSpec>,
    resources: SchemaRegistry,
    data_sources: SchemaRegistry,
}

impl ProviderDescriptor {
    /// Declare the provider with field descriptions taken from `descriptions`
    /// and every built-in resource and data source registered
    pub fn new(descriptions: &[(&str, &str)]) -> GocdResult<Self> {
        let mut descriptor = Self::empty(descriptions);
        for schema in resources() {
            descriptor.register_resource(schema)?;
        }
        for schema in data_sources() {
            descriptor.register_data_source(schema)?;
        }
        Ok(descriptor)
    }

    /// Declare the provider fields with no resources or data sources
    pub fn empty(descriptions: &[(&str, &str)]) -> Self {
        Self {
            fields: provider_fields(descriptions),
            resources: SchemaRegistry::new(SchemaKind::Resource),
            data_sources: SchemaRegistry::new(SchemaKind::DataSource),
        }
    }

    pub fn register_resource(&mut self, schema: ResourceSchema) -> GocdResult<()> {
        self.resources.register(schema)
    }

    pub fn register_data_source(&mut self, schema: ResourceSchema) -> GocdResult<()> {
        self.data_sources.register(schema)
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn resources(&self) -> &SchemaRegistry {
        &self.resources
    }

    pub fn data_sources(&self) -> &SchemaRegistry {
        &self.data_sources
    }

    /// Configure one provider instance.
    ///
    /// Resolves the fields against `env`, builds the transport and returns the
    /// client handle every resource operation will share. Missing values are
    /// not checked here.
    pub fn configure(
        &self,
        input: &ProviderInput,
        env: &dyn EnvSource,
        host: &HostTool,
    ) -> GocdResult<GocdClient> {
        let resolved = ConfigResolver::new(env).resolve(input);
        debug!("Configuring GoCD provider for '{}'", resolved.base_url());
        GocdClient::from_resolved(&resolved, host)
    }

    /// Schema as JSON, for discovery by the host
    pub fn to_json(&self) -> GocdResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
