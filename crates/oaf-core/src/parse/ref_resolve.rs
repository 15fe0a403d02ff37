use std::collections::HashSet;

use super::components::Components;
use super::document::OpenApiDocument;
use super::parameter::{Parameter, ParameterOrRef};
use super::request_body::{RequestBody, RequestBodyOrRef};
use super::schema::{Schema, SchemaOrRef};
use crate::error::ResolveError;

/// Looks up `$ref` pointers against the document's component maps, following
/// chains of references until a concrete node is reached.
///
/// Each resolution carries its own visited set, so a chain that revisits a
/// pointer fails with [`ResolveError::CircularReference`] instead of
/// recursing forever.
pub struct Resolver<'a> {
    components: Option<&'a Components>,
}

impl<'a> Resolver<'a> {
    pub fn new(document: &'a OpenApiDocument) -> Self {
        Self {
            components: document.components.as_ref(),
        }
    }

    /// Resolve a schema node to its concrete target.
    pub fn concrete_schema(&self, node: &'a SchemaOrRef) -> Result<&'a Schema, ResolveError> {
        match node {
            SchemaOrRef::Schema(schema) => Ok(schema.as_ref()),
            SchemaOrRef::Ref { ref_path } => self.schema(ref_path),
        }
    }

    /// Resolve a schema pointer like `#/components/schemas/Widget`.
    pub fn schema(&self, pointer: &str) -> Result<&'a Schema, ResolveError> {
        let mut visited = HashSet::new();
        let mut pointer = pointer.to_string();

        loop {
            if !visited.insert(pointer.clone()) {
                return Err(ResolveError::CircularReference(pointer));
            }
            let key = parse_pointer(&pointer, "schemas")?;
            let entry = self
                .components
                .and_then(|c| c.schemas.get(key))
                .ok_or_else(|| ResolveError::NotFound(pointer.clone()))?;
            match entry {
                SchemaOrRef::Schema(schema) => return Ok(schema.as_ref()),
                SchemaOrRef::Ref { ref_path } => pointer = ref_path.clone(),
            }
        }
    }

    /// Resolve a parameter node to its concrete target.
    pub fn concrete_parameter(
        &self,
        node: &'a ParameterOrRef,
    ) -> Result<&'a Parameter, ResolveError> {
        match node {
            ParameterOrRef::Parameter(parameter) => Ok(parameter),
            ParameterOrRef::Ref { ref_path } => self.parameter(ref_path),
        }
    }

    /// Resolve a parameter pointer like `#/components/parameters/PageSize`.
    pub fn parameter(&self, pointer: &str) -> Result<&'a Parameter, ResolveError> {
        let mut visited = HashSet::new();
        let mut pointer = pointer.to_string();

        loop {
            if !visited.insert(pointer.clone()) {
                return Err(ResolveError::CircularReference(pointer));
            }
            let key = parse_pointer(&pointer, "parameters")?;
            let entry = self
                .components
                .and_then(|c| c.parameters.get(key))
                .ok_or_else(|| ResolveError::NotFound(pointer.clone()))?;
            match entry {
                ParameterOrRef::Parameter(parameter) => return Ok(parameter),
                ParameterOrRef::Ref { ref_path } => pointer = ref_path.clone(),
            }
        }
    }

    /// Resolve a request body node to its concrete target.
    pub fn concrete_request_body(
        &self,
        node: &'a RequestBodyOrRef,
    ) -> Result<&'a RequestBody, ResolveError> {
        match node {
            RequestBodyOrRef::RequestBody(body) => Ok(body),
            RequestBodyOrRef::Ref { ref_path } => self.request_body(ref_path),
        }
    }

    /// Resolve a request body pointer like `#/components/requestBodies/Order`.
    pub fn request_body(&self, pointer: &str) -> Result<&'a RequestBody, ResolveError> {
        let mut visited = HashSet::new();
        let mut pointer = pointer.to_string();

        loop {
            if !visited.insert(pointer.clone()) {
                return Err(ResolveError::CircularReference(pointer));
            }
            let key = parse_pointer(&pointer, "requestBodies")?;
            let entry = self
                .components
                .and_then(|c| c.request_bodies.get(key))
                .ok_or_else(|| ResolveError::NotFound(pointer.clone()))?;
            match entry {
                RequestBodyOrRef::RequestBody(body) => return Ok(body),
                RequestBodyOrRef::Ref { ref_path } => pointer = ref_path.clone(),
            }
        }
    }
}

/// Split a pointer like `#/components/schemas/Foo` into its collection and
/// key, requiring the collection to match `expected`. The key is the full
/// remainder and may itself contain `/`.
fn parse_pointer<'p>(pointer: &'p str, expected: &'static str) -> Result<&'p str, ResolveError> {
    let stripped = pointer
        .strip_prefix("#/components/")
        .ok_or_else(|| ResolveError::MalformedPointer(pointer.to_string()))?;
    let (collection, key) = stripped
        .split_once('/')
        .ok_or_else(|| ResolveError::MalformedPointer(pointer.to_string()))?;
    if collection != expected {
        return Err(ResolveError::KindMismatch {
            expected,
            pointer: pointer.to_string(),
        });
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::parse_pointer;
    use crate::error::ResolveError;

    #[test]
    fn pointer_key_keeps_inner_slashes() {
        let key = parse_pointer("#/components/schemas/nested/Widget", "schemas").unwrap();
        assert_eq!(key, "nested/Widget");
    }

    #[test]
    fn pointer_without_prefix_is_malformed() {
        let err = parse_pointer("#/definitions/Widget", "schemas").unwrap_err();
        assert!(matches!(err, ResolveError::MalformedPointer(_)));
    }

    #[test]
    fn pointer_without_key_is_malformed() {
        let err = parse_pointer("#/components/schemas", "schemas").unwrap_err();
        assert!(matches!(err, ResolveError::MalformedPointer(_)));
    }

    #[test]
    fn wrong_collection_is_a_kind_mismatch() {
        let err = parse_pointer("#/components/parameters/Limit", "schemas").unwrap_err();
        assert!(matches!(
            err,
            ResolveError::KindMismatch {
                expected: "schemas",
                ..
            }
        ));
    }
}
