use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A fully flattened parameter schema node.
///
/// This is the target of translation: by the time a node exists here it
/// carries no references and no unions. The serialized form is the
/// JSON-Schema-shaped dialect used in tool declarations, with the kind as a
/// lowercase `type` tag and absent fields omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonSchema {
    Object {
        properties: IndexMap<String, JsonSchema>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        required: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Array {
        items: Box<JsonSchema>,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Number {
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    String {
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Boolean {
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Null {
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl JsonSchema {
    /// An object schema with no properties and no required names.
    pub fn empty_object() -> Self {
        JsonSchema::Object {
            properties: IndexMap::new(),
            required: Vec::new(),
            description: None,
        }
    }

    /// The property map, when this node is an object.
    pub fn properties(&self) -> Option<&IndexMap<String, JsonSchema>> {
        match self {
            JsonSchema::Object { properties, .. } => Some(properties),
            _ => None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            JsonSchema::Object { description, .. }
            | JsonSchema::Array { description, .. }
            | JsonSchema::Number { description }
            | JsonSchema::String { description }
            | JsonSchema::Boolean { description }
            | JsonSchema::Null { description } => description.as_deref(),
        }
    }
}
