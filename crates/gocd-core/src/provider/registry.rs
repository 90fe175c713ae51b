//! Name-keyed registry of resource or data-source schemas

use super::schema::{ResourceSchema, SchemaKind};
use crate::error::{GocdError, GocdResult};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Prefix every kind registered by this provider carries
const NAME_PREFIX: &str = "gocd_";

/// Registry holding schemas of a single [`SchemaKind`], each under a unique name
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    kind: SchemaKind,
    entries: BTreeMap<&'static str, ResourceSchema>,
}

impl SchemaRegistry {
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            entries: BTreeMap::new(),
        }
    }

    /// Register `schema`, rejecting duplicates, foreign kinds and names
    /// outside the provider's prefix
    pub fn register(&mut self, schema: ResourceSchema) -> GocdResult<()> {
        if schema.kind != self.kind {
            return Err(GocdError::schema(
                format!("'{}' is a {}, not a {}", schema.name, schema.kind, self.kind),
                schema.name,
            ));
        }
        if !schema.name.starts_with(NAME_PREFIX) {
            return Err(GocdError::schema(
                format!("'{}' must start with '{}'", schema.name, NAME_PREFIX),
                schema.name,
            ));
        }
        if self.entries.contains_key(schema.name) {
            return Err(GocdError::schema(
                format!("{} '{}' is already registered", self.kind, schema.name),
                schema.name,
            ));
        }

        self.entries.insert(schema.name, schema);
        Ok(())
    }

    pub fn kind(&self) -> SchemaKind {
        self.kind
    }

    pub fn get(&self, name: &str) -> Option<&ResourceSchema> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceSchema> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SchemaRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}
