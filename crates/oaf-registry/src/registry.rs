use indexmap::IndexMap;
use serde_json::Value;

use oaf_core::parse::document::OpenApiDocument;

use crate::build::build_function;
use crate::error::{ImportError, InvokeError};
use crate::function::{Function, HttpMethod, ToolDefinition};
use crate::invoke::RestInvoker;

/// Accumulates functions while importing a document. Frozen into a
/// [`FunctionRegistry`] before being shared with invocation callers.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    functions: IndexMap<String, Function>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and register a function for every `get`/`post` operation in the
    /// document, in document order. Any single build failure or identifier
    /// collision aborts the whole import.
    pub fn import_document(
        &mut self,
        document: &OpenApiDocument,
        fallback_credential: Option<&str>,
    ) -> Result<(), ImportError> {
        for (path, item) in &document.paths {
            if let Some(operation) = &item.get {
                let function =
                    build_function(document, path, HttpMethod::Get, operation, fallback_credential)?;
                self.register(function)?;
            }
            if let Some(operation) = &item.post {
                let function = build_function(
                    document,
                    path,
                    HttpMethod::Post,
                    operation,
                    fallback_credential,
                )?;
                self.register(function)?;
            }
        }
        Ok(())
    }

    /// Register one function. A duplicate identifier is an error, never an
    /// overwrite.
    pub fn register(&mut self, function: Function) -> Result<(), ImportError> {
        if self.functions.contains_key(&function.ident) {
            return Err(ImportError::DuplicateIdentifier(function.ident));
        }
        log::debug!(
            "registered '{}' as {} {}",
            function.ident,
            function.plan.method.as_str(),
            function.plan.endpoint
        );
        self.functions.insert(function.ident.clone(), function);
        Ok(())
    }

    /// Freeze into the read-only registry. No mutation path exists past this
    /// point.
    pub fn freeze(self) -> FunctionRegistry {
        FunctionRegistry {
            functions: self.functions,
            invoker: RestInvoker::new(),
        }
    }
}

/// Read-only mapping of operation identifiers to built functions, safe for
/// concurrent lookup by multiple invocation callers.
#[derive(Debug)]
pub struct FunctionRegistry {
    functions: IndexMap<String, Function>,
    invoker: RestInvoker,
}

impl FunctionRegistry {
    /// Import a document into a fresh registry.
    pub fn from_document(
        document: &OpenApiDocument,
        fallback_credential: Option<&str>,
    ) -> Result<Self, ImportError> {
        let mut builder = RegistryBuilder::new();
        builder.import_document(document, fallback_credential)?;
        Ok(builder.freeze())
    }

    pub fn get(&self, ident: &str) -> Option<&Function> {
        self.functions.get(ident)
    }

    pub fn names(&self) -> Vec<&str> {
        self.functions.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Tool declarations for every registered function.
    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.functions.values().map(Function::tool_definition).collect()
    }

    /// Invoke a function by its identifier.
    pub async fn invoke(
        &self,
        ident: &str,
        credential: Option<&str>,
        args: &IndexMap<String, Value>,
    ) -> Result<Value, InvokeError> {
        let function = self
            .functions
            .get(ident)
            .ok_or_else(|| InvokeError::UnknownFunction(ident.to_string()))?;
        log::info!("invoking '{}'", function.ident);
        self.invoker.invoke(&function.plan, credential, args).await
    }
}
