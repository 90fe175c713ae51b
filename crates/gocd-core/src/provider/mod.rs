//! Provider descriptor
//!
//! The static declaration the host reads once at schema discovery: the four
//! configuration fields, the resource kinds and the data-source kinds, plus
//! the single configuration entry point that turns a configuration block into
//! a [`crate::client::GocdClient`].
//!
//! Resource and data-source handlers live outside this crate; here each kind
//! is only a named schema.

mod descriptor;
mod registry;
mod resources;
mod schema;

pub use descriptor::ProviderDescriptor;
pub use registry::SchemaRegistry;
pub use resources::{data_sources, resources};
pub use schema::{AttributeMode, AttributeSchema, AttributeType, ResourceSchema, SchemaKind};
