use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported OpenAPI version: {0}")]
    UnsupportedVersion(String),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("malformed reference pointer: {0}")]
    MalformedPointer(String),

    #[error("reference kind mismatch: expected a {expected} pointer, got {pointer}")]
    KindMismatch {
        expected: &'static str,
        pointer: String,
    },

    #[error("reference not found: {0}")]
    NotFound(String),

    #[error("circular reference: {0}")]
    CircularReference(String),
}

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("array schema without items")]
    MissingArrayItems,

    #[error("object schema without properties")]
    MissingProperties,
}
