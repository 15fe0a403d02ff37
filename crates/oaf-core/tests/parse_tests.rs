use oaf_core::parse;
use oaf_core::parse::parameter::{ParameterLocation, ParameterOrRef};
use oaf_core::parse::schema::{SchemaOrRef, SchemaType};

const WIDGETS: &str = include_str!("fixtures/widgets.yaml");
const CHAINED: &str = include_str!("fixtures/chained.yaml");

#[test]
fn parse_widgets_yaml() {
    let document = parse::from_yaml(WIDGETS).expect("should parse widgets.yaml");
    assert_eq!(document.openapi, "3.0.3");
    assert_eq!(document.info.title, "Widget Store");
    assert_eq!(document.servers[0].url, "https://api.widgets.test/v1");
    assert_eq!(document.paths.len(), 3);

    let widget_path = document
        .paths
        .get("/widgets/{id}")
        .expect("should have /widgets/{id}");
    let get = widget_path.get.as_ref().expect("should have GET");
    assert_eq!(get.operation_id.as_deref(), Some("getWidget"));
    assert_eq!(get.parameters.len(), 2);
}

#[test]
fn parse_parameter_defaults() {
    let document = parse::from_yaml(WIDGETS).unwrap();
    let get = document.paths["/widgets/{id}"].get.as_ref().unwrap();

    let verbose = match &get.parameters[1] {
        ParameterOrRef::Parameter(parameter) => parameter,
        ParameterOrRef::Ref { .. } => panic!("expected inline parameter"),
    };
    assert_eq!(verbose.name, "verbose");
    assert_eq!(verbose.location, ParameterLocation::Query);
    assert!(!verbose.required, "required should default to false");
    assert!(verbose.description.is_none());
}

#[test]
fn parse_ref_nodes_as_references() {
    let document = parse::from_yaml(WIDGETS).unwrap();
    let components = document.components.as_ref().unwrap();

    let order = match components.schemas.get("Order").unwrap() {
        SchemaOrRef::Schema(schema) => schema,
        SchemaOrRef::Ref { .. } => panic!("expected inline schema"),
    };
    assert_eq!(order.schema_type, Some(SchemaType::Object));
    assert_eq!(order.required, vec!["sku".to_string()]);

    let tags = &order.properties.as_ref().unwrap()["tags"];
    let tags = match tags {
        SchemaOrRef::Schema(schema) => schema,
        SchemaOrRef::Ref { .. } => panic!("expected inline schema"),
    };
    match tags.items.as_deref() {
        Some(SchemaOrRef::Ref { ref_path }) => {
            assert_eq!(ref_path, "#/components/schemas/Tag");
        }
        other => panic!("expected reference items, got {other:?}"),
    }
}

#[test]
fn parse_chained_components() {
    let document = parse::from_yaml(CHAINED).unwrap();
    let components = document.components.as_ref().unwrap();
    assert!(matches!(
        components.schemas.get("ThingAlias"),
        Some(SchemaOrRef::Ref { .. })
    ));
    assert_eq!(components.parameters.len(), 1);
}

#[test]
fn parse_from_json() {
    let json = r#"{
        "openapi": "3.0.3",
        "info": {"title": "Minimal", "version": "1.0.0"},
        "servers": [{"url": "https://minimal.test"}],
        "paths": {
            "/ping": {"get": {"operationId": "ping"}}
        }
    }"#;
    let document = parse::from_json(json).expect("should parse JSON");
    assert_eq!(document.info.title, "Minimal");
    assert!(document.paths["/ping"].get.is_some());
    assert!(document.components.is_none());
}

#[test]
fn parse_unsupported_version() {
    let yaml = r#"
openapi: "2.0.0"
info:
  title: Legacy
  version: "1.0.0"
paths: {}
"#;
    let result = parse::from_yaml(yaml);
    assert!(result.is_err());
}
