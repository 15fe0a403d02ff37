use indexmap::IndexMap;

use crate::error::TranslateError;
use crate::json::JsonSchema;
use crate::parse::ref_resolve::Resolver;
use crate::parse::schema::{Schema, SchemaOrRef, SchemaType};

/// Convert a (possibly reference-wrapped) document schema into the normalized
/// model, recursively for object and array shapes.
///
/// `inherited` is a description carried down from the enclosing node (a
/// parameter or request body); when both it and the schema's own description
/// are present they are concatenated, inherited first, newline-separated.
pub fn translate(
    resolver: &Resolver<'_>,
    node: &SchemaOrRef,
    inherited: Option<&str>,
) -> Result<JsonSchema, TranslateError> {
    let schema = resolver.concrete_schema(node)?;
    translate_schema(resolver, schema, inherited)
}

fn translate_schema(
    resolver: &Resolver<'_>,
    schema: &Schema,
    inherited: Option<&str>,
) -> Result<JsonSchema, TranslateError> {
    let description = merge_descriptions(inherited, schema.description.as_deref());

    match schema.schema_type {
        Some(SchemaType::Array) => {
            let items = schema
                .items
                .as_deref()
                .ok_or(TranslateError::MissingArrayItems)?;
            let items = translate(resolver, items, None)?;
            Ok(JsonSchema::Array {
                items: Box::new(items),
                description,
            })
        }
        Some(SchemaType::Number) => Ok(JsonSchema::Number { description }),
        Some(SchemaType::String) => Ok(JsonSchema::String { description }),
        Some(SchemaType::Boolean) => Ok(JsonSchema::Boolean { description }),
        Some(SchemaType::Null) => Ok(JsonSchema::Null { description }),
        // Object-fallback policy: untyped nodes and kinds with no scalar
        // counterpart are treated as objects.
        Some(SchemaType::Object | SchemaType::Integer) | None => {
            let source = schema
                .properties
                .as_ref()
                .ok_or(TranslateError::MissingProperties)?;
            let mut properties = IndexMap::new();
            for (name, property) in source {
                properties.insert(name.clone(), translate(resolver, property, None)?);
            }
            Ok(JsonSchema::Object {
                properties,
                required: schema.required.clone(),
                description,
            })
        }
    }
}

fn merge_descriptions(inherited: Option<&str>, own: Option<&str>) -> Option<String> {
    match (inherited, own) {
        (Some(inherited), Some(own)) => Some(format!("{inherited}\n{own}")),
        (Some(inherited), None) => Some(inherited.to_string()),
        (None, Some(own)) => Some(own.to_string()),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::merge_descriptions;

    #[test]
    fn merge_prefers_inherited_first() {
        assert_eq!(
            merge_descriptions(Some("outer"), Some("inner")).as_deref(),
            Some("outer\ninner")
        );
        assert_eq!(merge_descriptions(Some("outer"), None).as_deref(), Some("outer"));
        assert_eq!(merge_descriptions(None, Some("inner")).as_deref(), Some("inner"));
        assert_eq!(merge_descriptions(None, None), None);
    }
}
