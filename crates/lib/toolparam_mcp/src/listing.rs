//! Tool listings built from MCP `tools/list` payloads.

use rmcp::model::Tool;
use serde::Serialize;
use serde_json::Value;

use toolparam_core::{Parameter, SchemaMapper};

use crate::error::ListingError;

/// A discovered tool with its typed input parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolListing {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: Vec<Parameter>,
}

impl ToolListing {
    pub fn from_tool(tool: &Tool, mapper: &SchemaMapper) -> Self {
        let parameters = tool_parameters(tool, mapper);
        log::debug!(
            "Converted tool '{}' into {} parameter(s)",
            tool.name,
            parameters.len()
        );
        Self {
            name: tool.name.to_string(),
            description: tool.description.as_deref().map(str::to_owned),
            parameters,
        }
    }
}

/// Convert a tool's `inputSchema` into parameters.
pub fn tool_parameters(tool: &Tool, mapper: &SchemaMapper) -> Vec<Parameter> {
    mapper.convert(Some(&tool.input_schema))
}

/// Decode the tools in a `tools/list` document.
///
/// Accepts a bare array of tools, a `ListToolsResult` object, or a JSON-RPC
/// response wrapping one. Entries that are not valid MCP tools are skipped.
pub fn parse_tools(document: &str) -> Result<Vec<Tool>, ListingError> {
    let root: Value = serde_json::from_str(document)?;
    let entries = locate_tools(root).ok_or(ListingError::MissingTools)?;

    let tools = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Tool>(entry) {
            Ok(tool) => Some(tool),
            Err(e) => {
                log::warn!("Skipping tool #{index}: {e}");
                None
            }
        })
        .collect();

    Ok(tools)
}

/// Decode a `tools/list` document and convert every tool.
pub fn list_tools(document: &str, mapper: &SchemaMapper) -> Result<Vec<ToolListing>, ListingError> {
    let tools = parse_tools(document)?;
    Ok(tools
        .iter()
        .map(|tool| ToolListing::from_tool(tool, mapper))
        .collect())
}

fn locate_tools(root: Value) -> Option<Vec<Value>> {
    match root {
        Value::Array(entries) => Some(entries),
        Value::Object(mut object) => {
            if let Some(Value::Array(entries)) = object.remove("tools") {
                return Some(entries);
            }
            match object.remove("result")? {
                Value::Object(mut result) => match result.remove("tools")? {
                    Value::Array(entries) => Some(entries),
                    _ => None,
                },
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use toolparam_core::{DataType, MapperConfig, ParameterType};

    use super::*;

    fn price_tool() -> Value {
        json!({
            "name": "get_simple_price",
            "description": "Get coin prices",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "ids": {"type": "array", "items": {"type": "string"}, "description": "Coin ids"},
                    "vs_currencies": {"type": "string"},
                    "include_market_cap": {"type": "boolean"}
                },
                "required": ["ids", "vs_currencies"]
            }
        })
    }

    #[test]
    fn parses_bare_array() {
        let doc = json!([price_tool()]).to_string();
        let tools = parse_tools(&doc).expect("parse");
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "get_simple_price");
    }

    #[test]
    fn parses_list_tools_result_and_rpc_envelope() {
        let result = json!({"tools": [price_tool()]}).to_string();
        assert_eq!(parse_tools(&result).expect("parse").len(), 1);

        let envelope = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {"tools": [price_tool(), price_tool()]}
        })
        .to_string();
        assert_eq!(parse_tools(&envelope).expect("parse").len(), 2);
    }

    #[test]
    fn rejects_documents_without_tools() {
        assert!(matches!(parse_tools("{\"items\": []}"), Err(ListingError::MissingTools)));
        assert!(matches!(parse_tools("{\"result\": 3}"), Err(ListingError::MissingTools)));
        assert!(matches!(parse_tools("\"tools\""), Err(ListingError::MissingTools)));
        assert!(matches!(parse_tools("{not json"), Err(ListingError::Json(_))));
    }

    #[test]
    fn skips_invalid_tool_entries() {
        let doc = json!({"tools": [42, {"description": "no name"}, price_tool()]}).to_string();
        let tools = parse_tools(&doc).expect("parse");
        assert_eq!(tools.len(), 1);
    }

    #[test]
    fn listing_preserves_order_and_required() {
        let doc = json!({"tools": [price_tool()]}).to_string();
        let listings = list_tools(&doc, &SchemaMapper::default()).expect("list");
        let listing = &listings[0];

        assert_eq!(listing.name, "get_simple_price");
        assert_eq!(listing.description.as_deref(), Some("Get coin prices"));

        let names: Vec<&str> = listing.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["ids", "vs_currencies", "include_market_cap"]);

        let ids = &listing.parameters[0];
        assert!(ids.required);
        assert_eq!(ids.description.as_deref(), Some("Coin ids"));
        assert_eq!(
            ids.parameter_type,
            ParameterType::list(Some(ParameterType::new(DataType::String)))
        );
        assert!(listing.parameters[1].required);
        assert!(!listing.parameters[2].required);
        assert_eq!(listing.parameters[2].parameter_type.data_type(), DataType::Boolean);
    }

    #[test]
    fn listing_honours_mapper_config() {
        let doc = json!([{
            "name": "nested",
            "inputSchema": {
                "type": "object",
                "properties": {"opts": {"type": "object", "properties": {"a": {}}}}
            }
        }])
        .to_string();
        let mapper = SchemaMapper::new(MapperConfig::default().with_max_depth(0));
        assert_eq!(mapper.config().max_depth, 0);
        let listings = list_tools(&doc, &mapper).expect("list");
        assert_eq!(listings[0].description, None);
        assert_eq!(listings[0].parameters[0].parameter_type, ParameterType::object(vec![]));
    }

    #[test]
    fn listing_serializes_camel_case() {
        let doc = json!([price_tool()]).to_string();
        let listings = list_tools(&doc, &SchemaMapper::default()).expect("list");
        let value = serde_json::to_value(&listings).expect("serialize");
        assert_eq!(value[0]["name"], "get_simple_price");
        assert_eq!(value[0]["parameters"][0]["type"]["listItemType"]["type"], "STRING");
        assert_eq!(value[0]["parameters"][1]["id"], "vs_currencies");
    }
}
