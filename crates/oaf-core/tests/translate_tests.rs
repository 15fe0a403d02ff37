use serde_json::json;

use oaf_core::error::TranslateError;
use oaf_core::json::JsonSchema;
use oaf_core::parse;
use oaf_core::parse::document::OpenApiDocument;
use oaf_core::parse::ref_resolve::Resolver;
use oaf_core::parse::schema::SchemaOrRef;
use oaf_core::translate::translate;

const WIDGETS: &str = include_str!("fixtures/widgets.yaml");
const CHAINED: &str = include_str!("fixtures/chained.yaml");

/// Wrap a bare schema in a minimal document so it can be translated.
fn document_with_schema(schema_yaml: &str) -> OpenApiDocument {
    let indented = schema_yaml
        .lines()
        .map(|line| format!("      {line}"))
        .collect::<Vec<_>>()
        .join("\n");
    let yaml = format!(
        r#"
openapi: "3.0.3"
info:
  title: Scratch
  version: "1.0.0"
components:
  schemas:
    Node:
{indented}
"#
    );
    parse::from_yaml(&yaml).unwrap()
}

fn translate_node(document: &OpenApiDocument) -> Result<JsonSchema, TranslateError> {
    let resolver = Resolver::new(document);
    let node = SchemaOrRef::Ref {
        ref_path: "#/components/schemas/Node".to_string(),
    };
    translate(&resolver, &node, None)
}

#[test]
fn translate_scalar_leaves() {
    for (source, expected) in [
        ("type: string", json!({"type": "string"})),
        ("type: number", json!({"type": "number"})),
        ("type: boolean", json!({"type": "boolean"})),
        ("type: \"null\"", json!({"type": "null"})),
    ] {
        let document = document_with_schema(source);
        let translated = translate_node(&document).unwrap();
        assert_eq!(serde_json::to_value(&translated).unwrap(), expected);
    }
}

#[test]
fn translate_object_with_required() {
    let document = document_with_schema(
        r#"type: object
properties:
  name:
    type: string
  size:
    type: number
required:
  - name"#,
    );
    let translated = translate_node(&document).unwrap();
    assert_eq!(
        serde_json::to_value(&translated).unwrap(),
        json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "size": {"type": "number"},
            },
            "required": ["name"],
        })
    );
}

#[test]
fn translate_required_carried_verbatim() {
    // The translator does not check that required names exist in properties.
    let document = document_with_schema(
        r#"type: object
properties:
  name:
    type: string
required:
  - name
  - phantom"#,
    );
    let translated = translate_node(&document).unwrap();
    match translated {
        JsonSchema::Object { required, .. } => {
            assert_eq!(required, vec!["name".to_string(), "phantom".to_string()]);
        }
        other => panic!("expected object, got {other:?}"),
    }
}

#[test]
fn translate_untyped_node_as_object() {
    let document = document_with_schema(
        r#"properties:
  flag:
    type: boolean"#,
    );
    let translated = translate_node(&document).unwrap();
    assert_eq!(
        serde_json::to_value(&translated).unwrap(),
        json!({
            "type": "object",
            "properties": {"flag": {"type": "boolean"}},
        })
    );
}

#[test]
fn translate_integer_takes_object_fallback() {
    let document = document_with_schema("type: integer");
    let err = translate_node(&document).unwrap_err();
    assert!(matches!(err, TranslateError::MissingProperties));
}

#[test]
fn translate_array_without_items_fails() {
    let document = document_with_schema("type: array");
    let err = translate_node(&document).unwrap_err();
    assert!(matches!(err, TranslateError::MissingArrayItems));
}

#[test]
fn translate_object_without_properties_fails() {
    let document = document_with_schema("type: object");
    let err = translate_node(&document).unwrap_err();
    assert!(matches!(err, TranslateError::MissingProperties));
}

#[test]
fn translate_description_merge() {
    let document = document_with_schema(
        r#"type: string
description: own text"#,
    );
    let resolver = Resolver::new(&document);
    let node = SchemaOrRef::Ref {
        ref_path: "#/components/schemas/Node".to_string(),
    };

    let merged = translate(&resolver, &node, Some("inherited text")).unwrap();
    assert_eq!(merged.description(), Some("inherited text\nown text"));

    let own_only = translate(&resolver, &node, None).unwrap();
    assert_eq!(own_only.description(), Some("own text"));
}

#[test]
fn translate_array_items_do_not_inherit_description() {
    let document = document_with_schema(
        r#"type: array
items:
  type: string"#,
    );
    let resolver = Resolver::new(&document);
    let node = SchemaOrRef::Ref {
        ref_path: "#/components/schemas/Node".to_string(),
    };
    let translated = translate(&resolver, &node, Some("outer")).unwrap();
    match translated {
        JsonSchema::Array { items, description } => {
            assert_eq!(description.as_deref(), Some("outer"));
            assert_eq!(items.description(), None);
        }
        other => panic!("expected array, got {other:?}"),
    }
}

#[test]
fn translate_reference_chain_matches_inlined() {
    let document = parse::from_yaml(CHAINED).unwrap();
    let resolver = Resolver::new(&document);

    let via_chain = translate(
        &resolver,
        &SchemaOrRef::Ref {
            ref_path: "#/components/schemas/ThingAlias".to_string(),
        },
        None,
    )
    .unwrap();
    let direct = translate(
        &resolver,
        &SchemaOrRef::Ref {
            ref_path: "#/components/schemas/Thing".to_string(),
        },
        None,
    )
    .unwrap();
    assert_eq!(via_chain, direct);
}

#[test]
fn translate_order_schema_with_referenced_items() {
    let document = parse::from_yaml(WIDGETS).unwrap();
    let resolver = Resolver::new(&document);

    let translated = translate(
        &resolver,
        &SchemaOrRef::Ref {
            ref_path: "#/components/schemas/Order".to_string(),
        },
        None,
    )
    .unwrap();
    assert_eq!(
        serde_json::to_value(&translated).unwrap(),
        json!({
            "type": "object",
            "description": "A purchase order",
            "properties": {
                "sku": {"type": "string", "description": "Stock keeping unit"},
                "qty": {"type": "number"},
                "tags": {"type": "array", "items": {"type": "string"}},
            },
            "required": ["sku"],
        })
    );
}
