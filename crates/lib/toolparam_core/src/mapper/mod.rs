//! Schema to parameter tree conversion.
//!
//! Walks a JSON Schema object depth-first, preserving property declaration
//! order. Each extraction point falls back locally: a non-object property
//! schema is read as `{}`, an unreadable `type` falls through to inference,
//! and anything unrecognised becomes [`DataType::String`].


use serde_json::{Map, Value};

use crate::config::MapperConfig;
use crate::extract;
use crate::model::{DataType, Parameter, ParameterType};
use crate::schema::SchemaSource;

/// Stateless converter from schema-shaped values to [`Parameter`] lists.
#[derive(Debug, Clone, Default)]
pub struct SchemaMapper {
    config: MapperConfig,
}

impl SchemaMapper {
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Convert the root of a tool input schema.
    ///
    /// Returns an empty list for `None` or when the root exposes no usable
    /// `properties` mapping. Never fails.
    pub fn convert<S: SchemaSource + ?Sized>(&self, schema: Option<&S>) -> Vec<Parameter> {
        let Some(schema) = schema else {
            return Vec::new();
        };
        let Some(properties) = schema.properties() else {
            return Vec::new();
        };
        let required = schema.required();
        self.convert_object(properties, required.as_deref(), 0)
    }

    fn convert_object(
        &self,
        properties: &Map<String, Value>,
        required: Option<&[&str]>,
        depth: usize,
    ) -> Vec<Parameter> {
        let empty = Map::new();
        properties
            .iter()
            .map(|(name, element)| {
                let schema = element.as_object().unwrap_or(&empty);
                let is_required = required.is_some_and(|names| names.contains(&name.as_str()));
                Parameter::new(
                    name.as_str(),
                    extract::description(schema),
                    self.infer_type(name, schema, depth),
                    is_required,
                )
            })
            .collect()
    }

    fn infer_type(&self, name: &str, schema: &Map<String, Value>, depth: usize) -> ParameterType {
        let data_type = infer_data_type(schema);
        match data_type {
            DataType::Object => {
                if depth >= self.config.max_depth {
                    log::warn!("Truncating object fields of '{name}' at depth {depth}");
                    return ParameterType::object(Vec::new());
                }
                let fields = match extract::object(schema.get("properties")) {
                    Some(nested) => {
                        let required = extract::string_list(schema.get("required"));
                        self.convert_object(nested, required.as_deref(), depth + 1)
                    }
                    None => Vec::new(),
                };
                ParameterType::object(fields)
            }
            DataType::List => {
                if depth >= self.config.max_depth {
                    log::warn!("Truncating list item type of '{name}' at depth {depth}");
                    return ParameterType::list(None);
                }
                let item_type = extract::object(schema.get("items"))
                    .map(|items| self.infer_type(name, items, depth + 1));
                ParameterType::list(item_type)
            }
            scalar => ParameterType::new(scalar),
        }
    }
}

/// Pick the tag for a property schema: explicit `type` first, then the
/// presence of `properties` or `items`.
fn infer_data_type(schema: &Map<String, Value>) -> DataType {
    let inferred = extract::explicit_type(schema).or_else(|| {
        if schema.contains_key("properties") {
            Some("object")
        } else if schema.contains_key("items") {
            Some("array")
        } else {
            None
        }
    });
    DataType::from_json_type(inferred)
}

/// Convert with the default configuration.
pub fn convert<S: SchemaSource + ?Sized>(schema: Option<&S>) -> Vec<Parameter> {
    SchemaMapper::default().convert(schema)
}
