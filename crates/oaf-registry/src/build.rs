use indexmap::IndexMap;

use oaf_core::json::JsonSchema;
use oaf_core::parse::document::OpenApiDocument;
use oaf_core::parse::operation::Operation;
use oaf_core::parse::parameter::{ParameterLocation, ParameterOrRef};
use oaf_core::parse::ref_resolve::Resolver;
use oaf_core::parse::request_body::RequestBodyOrRef;
use oaf_core::translate::translate;

use crate::error::BuildError;
use crate::function::{ArgLocation, Function, HttpMethod, InvocationPlan};

const JSON_MEDIA_TYPE: &str = "application/json";

/// Build one invokable function from an operation.
///
/// Exactly zero or one of the two parameter sources may contribute: an
/// operation with both a parameter list and a request body fails, one with
/// neither gets an empty object schema.
pub fn build_function(
    document: &OpenApiDocument,
    path: &str,
    method: HttpMethod,
    operation: &Operation,
    fallback_credential: Option<&str>,
) -> Result<Function, BuildError> {
    let resolver = Resolver::new(document);

    let (parameters, routing) = match (
        !operation.parameters.is_empty(),
        operation.request_body.as_ref(),
    ) {
        (true, Some(_)) => return Err(BuildError::ConflictingParameterSources),
        (true, None) => parameter_schema(&resolver, &operation.parameters)?,
        (false, Some(body)) => body_schema(&resolver, body)?,
        (false, None) => (JsonSchema::empty_object(), IndexMap::new()),
    };

    let base = document.servers.first().ok_or(BuildError::NoServer)?;
    let endpoint = format!("{}{}", base.url, path);

    Ok(Function {
        ident: operation.operation_id.clone().unwrap_or_default(),
        description: operation.summary.clone().unwrap_or_default(),
        parameters,
        plan: InvocationPlan {
            method,
            endpoint,
            routing,
            fallback_credential: fallback_credential.map(str::to_string),
        },
    })
}

/// Merge an operation's parameter list into one object schema, recording
/// each parameter's routing location.
fn parameter_schema(
    resolver: &Resolver<'_>,
    parameters: &[ParameterOrRef],
) -> Result<(JsonSchema, IndexMap<String, ArgLocation>), BuildError> {
    let mut properties = IndexMap::new();
    let mut required = Vec::new();
    let mut routing = IndexMap::new();

    for parameter in parameters {
        let parameter = resolver.concrete_parameter(parameter)?;
        if properties.contains_key(&parameter.name) {
            return Err(BuildError::DuplicateParameter(parameter.name.clone()));
        }
        let location = match parameter.location {
            ParameterLocation::Query => ArgLocation::Query,
            ParameterLocation::Path => ArgLocation::Path,
            ParameterLocation::Header | ParameterLocation::Cookie => {
                return Err(BuildError::UnsupportedLocation {
                    name: parameter.name.clone(),
                    location: parameter.location.as_str(),
                });
            }
        };
        let schema = parameter
            .schema
            .as_ref()
            .ok_or_else(|| BuildError::MissingParameterSchema(parameter.name.clone()))?;
        let translated = translate(resolver, schema, parameter.description.as_deref())?;

        if parameter.required {
            required.push(parameter.name.clone());
        }
        routing.insert(parameter.name.clone(), location);
        properties.insert(parameter.name.clone(), translated);
    }

    let schema = JsonSchema::Object {
        properties,
        required,
        description: None,
    };
    Ok((schema, routing))
}

/// Translate the request body's JSON schema, routing every top-level
/// property to the body.
fn body_schema(
    resolver: &Resolver<'_>,
    body: &RequestBodyOrRef,
) -> Result<(JsonSchema, IndexMap<String, ArgLocation>), BuildError> {
    let body = resolver.concrete_request_body(body)?;
    let media = body.content.get(JSON_MEDIA_TYPE).ok_or_else(|| {
        let present: Vec<&str> = body.content.keys().map(String::as_str).collect();
        BuildError::UnsupportedMediaType(present.join(", "))
    })?;
    let schema = media.schema.as_ref().ok_or(BuildError::MissingBodySchema)?;
    let translated = translate(resolver, schema, body.description.as_deref())?;

    let mut routing = IndexMap::new();
    if let Some(properties) = translated.properties() {
        for name in properties.keys() {
            routing.insert(name.clone(), ArgLocation::Body);
        }
    }
    Ok((translated, routing))
}
