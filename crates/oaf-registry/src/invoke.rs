use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::InvokeError;
use crate::function::{ArgLocation, HttpMethod, InvocationPlan};

/// Executes the HTTP call described by an invocation plan: one request, no
/// retries, no timeout policy.
#[derive(Debug, Clone, Default)]
pub struct RestInvoker {
    client: reqwest::Client,
}

impl RestInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route the arguments, apply the credential precedence, perform the
    /// call, and decode the response body as JSON.
    pub async fn invoke(
        &self,
        plan: &InvocationPlan,
        credential: Option<&str>,
        args: &IndexMap<String, Value>,
    ) -> Result<Value, InvokeError> {
        let request = PreparedRequest::route(plan, args);

        log::debug!("{} {}", plan.method.as_str(), request.url);

        let builder = match plan.method {
            HttpMethod::Get => self.client.get(&request.url).query(&request.query),
            HttpMethod::Post => self
                .client
                .post(&request.url)
                .query(&request.query)
                .json(&request.body),
            other => return Err(InvokeError::UnsupportedMethod(other)),
        };

        let builder = match effective_credential(credential, plan) {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder.send().await?;
        Ok(response.json().await?)
    }
}

/// URL, query pairs, and body produced by routing one argument set.
struct PreparedRequest {
    url: String,
    query: Vec<(String, String)>,
    body: Map<String, Value>,
}

impl PreparedRequest {
    fn route(plan: &InvocationPlan, args: &IndexMap<String, Value>) -> Self {
        let mut url = plan.endpoint.clone();
        let mut query = Vec::new();
        let mut body = Map::new();

        for (name, value) in args {
            match plan.routing.get(name) {
                Some(ArgLocation::Query) => query.push((name.clone(), scalar_text(value))),
                Some(ArgLocation::Path) => {
                    url = url.replace(&format!("{{{name}}}"), &scalar_text(value));
                }
                // Arguments the plan does not route belong to the body.
                Some(ArgLocation::Body) | None => {
                    body.insert(name.clone(), value.clone());
                }
            }
        }

        Self { url, query, body }
    }
}

/// The per-call credential wins when non-empty, then the plan's fallback.
fn effective_credential<'a>(
    credential: Option<&'a str>,
    plan: &'a InvocationPlan,
) -> Option<&'a str> {
    credential
        .filter(|token| !token.is_empty())
        .or(plan.fallback_credential.as_deref())
}

/// Render a JSON value for a URL segment or query pair: strings verbatim,
/// other scalars via their display form, everything else as compact JSON.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        other => other.to_string(),
    }
}
