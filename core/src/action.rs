//! Action types crossing the state-container boundary.
//!
//! Two shapes live here: the [`Action`] that arrives from the container's
//! trigger mechanism and asks for a call to be made, and the
//! [`DispatchedAction`] that the default lifecycle hooks feed back into the
//! container as the call progresses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// An incoming action from the external trigger mechanism.
///
/// Carries a `type` string that selects a registry entry, plus arbitrary
/// fields that the entry's descriptor factory may consume (a URL suffix, an
/// entity id, a request body).
///
/// # Example
///
/// ```
/// use callapi_core::Action;
/// use serde_json::json;
///
/// let action = Action::new("FETCH_USER").with_field("id", json!(42));
/// assert_eq!(action.kind, "FETCH_USER");
/// assert_eq!(action.field("id"), Some(&json!(42)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// The action-type name, used to resolve a registry entry.
    #[serde(rename = "type")]
    pub kind: String,

    /// Arbitrary additional fields, flattened into the serialized record.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Action {
    /// Create an action with the given type name and no extra fields.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: Map::new(),
        }
    }

    /// Attach an extra field to the action.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Look up an extra field by name.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// The three conventional action-type names carried by a descriptor.
///
/// The default lifecycle hooks dispatch one action per lifecycle phase,
/// using the name registered here for that phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionTypes {
    /// Dispatched before the provider call is issued.
    pub request: String,

    /// Dispatched when the provider call resolves.
    pub success: String,

    /// Dispatched when the provider call fails.
    pub failure: String,
}

impl ActionTypes {
    /// Create the triple from the three phase names.
    #[must_use]
    pub fn new(
        request: impl Into<String>,
        success: impl Into<String>,
        failure: impl Into<String>,
    ) -> Self {
        Self {
            request: request.into(),
            success: success.into(),
            failure: failure.into(),
        }
    }

    /// The name registered for a lifecycle phase.
    #[must_use]
    pub fn name_for(&self, phase: RequestPhase) -> &str {
        match phase {
            RequestPhase::Request => &self.request,
            RequestPhase::Success => &self.success,
            RequestPhase::Failure => &self.failure,
        }
    }
}

/// Lifecycle phase of a single orchestrated request.
///
/// Each request moves `Request → {Success | Failure}`; both outcomes are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    /// The call is about to be issued.
    Request,

    /// The call resolved.
    Success,

    /// The call failed.
    Failure,
}

impl fmt::Display for RequestPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request => write!(f, "request"),
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

/// An action dispatched back into the state container.
///
/// Produced by lifecycle hooks only; the orchestrator itself never
/// dispatches. The serialized shape matches the container convention:
/// `{type}` for request actions, `{type, payload, meta}` for success, and
/// `{type, payload, error: true, meta}` for failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchedAction {
    /// The action-type name.
    #[serde(rename = "type")]
    pub kind: String,

    /// The `data` half of the provider result, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,

    /// Every provider-result field except `data`, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,

    /// Set on failure actions only.
    #[serde(default, skip_serializing_if = "is_false")]
    pub error: bool,
}

const fn is_false(flag: &bool) -> bool {
    !*flag
}

impl DispatchedAction {
    /// The bare `{type}` action dispatched before the provider call.
    #[must_use]
    pub fn request(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
            meta: None,
            error: false,
        }
    }

    /// The `{type, payload, meta}` action dispatched on resolution.
    #[must_use]
    pub fn success(kind: impl Into<String>, payload: Value, meta: Value) -> Self {
        Self {
            kind: kind.into(),
            payload: Some(payload),
            meta: Some(meta),
            error: false,
        }
    }

    /// The `{type, payload, error: true, meta}` action dispatched on failure.
    #[must_use]
    pub fn failure(kind: impl Into<String>, payload: Value, meta: Value) -> Self {
        Self {
            kind: kind.into(),
            payload: Some(payload),
            meta: Some(meta),
            error: true,
        }
    }
}
