//! Typed parameter tree produced by schema conversion.

use std::fmt;

use serde::Serialize;

/// Closed set of type tags a parameter can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    String,
    Number,
    /// Never produced by conversion; available to callers building types directly.
    Date,
    Boolean,
    List,
    Object,
}

impl DataType {
    /// Map a JSON Schema `type` keyword onto a tag.
    ///
    /// Unknown or missing names fall back to [`DataType::String`].
    pub fn from_json_type(name: Option<&str>) -> Self {
        match name {
            Some("string") => Self::String,
            Some("number") | Some("integer") => Self::Number,
            Some("boolean") => Self::Boolean,
            Some("object") => Self::Object,
            Some("array") => Self::List,
            _ => Self::String,
        }
    }

    /// Upper-case tag name, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::Date => "DATE",
            Self::Boolean => "BOOLEAN",
            Self::List => "LIST",
            Self::Object => "OBJECT",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recursive type descriptor.
///
/// `list_item_type` is only ever set for [`DataType::List`] and `fields` is
/// always set (possibly empty) for [`DataType::Object`]. Scalars carry
/// neither. The constructors are the only way to build a value, so the
/// shape always matches the tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterType {
    #[serde(rename = "type")]
    data_type: DataType,
    #[serde(skip_serializing_if = "Option::is_none")]
    list_item_type: Option<Box<ParameterType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<Parameter>>,
}

impl ParameterType {
    /// Build an empty type for `data_type`: objects get no fields, lists an
    /// unknown item type.
    pub fn new(data_type: DataType) -> Self {
        match data_type {
            DataType::Object => Self::object(Vec::new()),
            DataType::List => Self::list(None),
            _ => Self {
                data_type,
                list_item_type: None,
                fields: None,
            },
        }
    }

    /// A list whose elements are `item_type`, or of unknown elements when `None`.
    pub fn list(item_type: Option<ParameterType>) -> Self {
        Self {
            data_type: DataType::List,
            list_item_type: item_type.map(Box::new),
            fields: None,
        }
    }

    pub fn object(fields: Vec<Parameter>) -> Self {
        Self {
            data_type: DataType::Object,
            list_item_type: None,
            fields: Some(fields),
        }
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn list_item_type(&self) -> Option<&ParameterType> {
        self.list_item_type.as_deref()
    }

    pub fn fields(&self) -> Option<&[Parameter]> {
        self.fields.as_deref()
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.data_type, self.list_item_type()) {
            (DataType::List, Some(item)) => write!(f, "LIST<{item}>"),
            (DataType::List, None) => f.write_str("LIST<?>"),
            (tag, _) => write!(f, "{tag}"),
        }
    }
}

/// One named input slot of a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub parameter_type: ParameterType,
    pub required: bool,
}

impl Parameter {
    /// Create a parameter whose `id` and `name` are both `name`.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        parameter_type: ParameterType,
        required: bool,
    ) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            description,
            parameter_type,
            required,
        }
    }
}
