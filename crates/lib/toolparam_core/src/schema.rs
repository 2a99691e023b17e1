//! Access contract for schema-shaped values.
//!
//! Conversion only needs two members from the root of a tool input schema:
//! the `properties` map and the optional `required` list. Any representation
//! that can expose those implements [`SchemaSource`].

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::extract;

/// A value exposing JSON Schema `properties` and `required` members.
pub trait SchemaSource {
    /// Property name to sub-schema mapping, in declaration order.
    ///
    /// `None` when the member is missing or not a mapping.
    fn properties(&self) -> Option<&Map<String, Value>>;

    /// Names of required properties, if the member is present.
    fn required(&self) -> Option<Vec<&str>>;
}

impl SchemaSource for Map<String, Value> {
    fn properties(&self) -> Option<&Map<String, Value>> {
        extract::object(self.get("properties"))
    }

    fn required(&self) -> Option<Vec<&str>> {
        extract::string_list(self.get("required"))
    }
}

impl SchemaSource for Value {
    fn properties(&self) -> Option<&Map<String, Value>> {
        self.as_object().and_then(|map| map.properties())
    }

    fn required(&self) -> Option<Vec<&str>> {
        self.as_object().and_then(|map| map.required())
    }
}

impl<T: SchemaSource + ?Sized> SchemaSource for Arc<T> {
    fn properties(&self) -> Option<&Map<String, Value>> {
        (**self).properties()
    }

    fn required(&self) -> Option<Vec<&str>> {
        (**self).required()
    }
}

impl<T: SchemaSource + ?Sized> SchemaSource for Box<T> {
    fn properties(&self) -> Option<&Map<String, Value>> {
        (**self).properties()
    }

    fn required(&self) -> Option<Vec<&str>> {
        (**self).required()
    }
}

/// Typed root of a tool input schema.
///
/// Property sub-schemas stay as raw JSON; only the root is decoded.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InputSchema {
    #[serde(rename = "type", default)]
    pub schema_type: Option<String>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(default)]
    pub required: Option<Vec<String>>,
}

impl SchemaSource for InputSchema {
    fn properties(&self) -> Option<&Map<String, Value>> {
        self.properties.as_ref()
    }

    fn required(&self) -> Option<Vec<&str>> {
        self.required
            .as_ref()
            .map(|names| names.iter().map(String::as_str).collect())
    }
}
