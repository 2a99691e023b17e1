//! # toolparam_core
//!
//! Maps loosely-typed JSON Schema tool input descriptions onto a typed
//! parameter tree.
//!
//! The conversion is total: malformed or missing schema shapes degrade to
//! conservative defaults instead of failing. See [`mapper::SchemaMapper`].

pub mod config;
pub mod extract;
pub mod mapper;
pub mod model;
pub mod schema;

pub use config::MapperConfig;
pub use mapper::{SchemaMapper, convert};
pub use model::{DataType, Parameter, ParameterType};
pub use schema::{InputSchema, SchemaSource};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
