use thiserror::Error;

use oaf_core::error::{ResolveError, TranslateError};

use crate::function::HttpMethod;

/// Errors raised while building a single function from an operation.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("translate error: {0}")]
    Translate(#[from] TranslateError),

    #[error("parameter name conflict: {0}")]
    DuplicateParameter(String),

    #[error("parameter '{0}' has no schema")]
    MissingParameterSchema(String),

    #[error("unsupported location '{location}' for parameter '{name}'")]
    UnsupportedLocation {
        name: String,
        location: &'static str,
    },

    #[error("operation declares both parameters and a request body")]
    ConflictingParameterSources,

    #[error("unsupported request body media types: {0}")]
    UnsupportedMediaType(String),

    #[error("request body has no schema for 'application/json'")]
    MissingBodySchema,

    #[error("document defines no servers")]
    NoServer,
}

/// Errors raised while importing a document into the registry.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("build error: {0}")]
    Build(#[from] BuildError),

    #[error("duplicate operation identifier: '{0}'")]
    DuplicateIdentifier(String),
}

/// Errors raised while invoking a registered function.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("unknown function: '{0}'")]
    UnknownFunction(String),

    #[error("unsupported HTTP method: {}", .0.as_str())]
    UnsupportedMethod(HttpMethod),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}
