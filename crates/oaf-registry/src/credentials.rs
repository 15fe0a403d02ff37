use std::collections::HashMap;

/// The reserved key callers use on the wire for the default slot.
pub const DEFAULT_SLOT: &str = "__default__";

/// Per-call bearer tokens keyed by function identifier, with an explicit
/// default slot consulted when no exact entry matches.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    per_function: HashMap<String, String>,
    default: Option<String>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adapt the wire shape, where the default token travels under the
    /// reserved [`DEFAULT_SLOT`] key.
    pub fn from_map(mut map: HashMap<String, String>) -> Self {
        let default = map.remove(DEFAULT_SLOT);
        Self {
            per_function: map,
            default,
        }
    }

    pub fn insert(&mut self, ident: impl Into<String>, token: impl Into<String>) {
        self.per_function.insert(ident.into(), token.into());
    }

    pub fn set_default(&mut self, token: impl Into<String>) {
        self.default = Some(token.into());
    }

    /// Exact match on the function identifier, then the default slot, then
    /// none.
    pub fn resolve(&self, ident: &str) -> Option<&str> {
        self.per_function
            .get(ident)
            .map(String::as_str)
            .or(self.default.as_deref())
    }
}
