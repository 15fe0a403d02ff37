use indexmap::IndexMap;
use serde::Serialize;

use oaf_core::json::JsonSchema;

/// HTTP method of an invocation plan.
///
/// Only `GET` and `POST` are ever produced by document import; the others
/// exist so a hand-built plan carrying one fails at invocation time with a
/// typed error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

/// Routing target for one argument at invocation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgLocation {
    Query,
    Path,
    Body,
}

/// The method, endpoint template, and per-argument routing needed to execute
/// a function. Path placeholders stay unexpanded until invocation time.
#[derive(Debug, Clone)]
pub struct InvocationPlan {
    pub method: HttpMethod,
    pub endpoint: String,
    pub routing: IndexMap<String, ArgLocation>,
    pub fallback_credential: Option<String>,
}

/// One invokable unit derived from an OpenAPI operation: a parameter schema
/// paired with an invocation plan. Built once at import time, immutable
/// thereafter.
#[derive(Debug, Clone)]
pub struct Function {
    pub ident: String,
    pub description: String,
    pub parameters: JsonSchema,
    pub plan: InvocationPlan,
}

impl Function {
    /// The tool declaration for this function.
    pub fn tool_definition(&self) -> ToolDefinition {
        ToolDefinition {
            kind: "function",
            function: ToolFunction {
                name: self.ident.clone(),
                description: self.description.clone(),
                parameters: self.parameters.clone(),
            },
        }
    }
}

/// The wire shape expected by tool-declaring callers.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub function: ToolFunction,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolFunction {
    pub name: String,
    pub description: String,
    pub parameters: JsonSchema,
}
