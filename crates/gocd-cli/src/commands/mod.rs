//! CLI commands

pub mod check;
pub mod resolve;
pub mod schema;
