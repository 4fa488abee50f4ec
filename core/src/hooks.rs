//! Lifecycle hooks and the boundary to the external state container.
//!
//! The container supplies two callables on every `request` invocation:
//! `dispatch`, which feeds an action into the container, and `get_state`,
//! which snapshots its current state. Both are forwarded unmodified into
//! every hook; the orchestrator never calls them itself.

use crate::action::DispatchedAction;
use crate::descriptor::ApiDescriptor;
use crate::error::CallApiError;
use serde_json::{Map, Value};

/// Dispatch callback supplied by the state container.
pub type Dispatch<'a> = &'a (dyn Fn(DispatchedAction) + Send + Sync);

/// State snapshot accessor supplied by the state container.
///
/// State crosses the boundary as a JSON value, matching the dynamic shape
/// of the action boundary.
pub type GetState<'a> = &'a (dyn Fn() -> Value + Send + Sync);

/// Configuration-level lifecycle hooks consumed by the orchestrator.
///
/// One hook per lifecycle phase. The orchestrator invokes
/// [`before_request`](Self::before_request) after descriptor resolution and
/// exactly one of the other two once the provider call settles. A hook
/// error fails the in-flight `request` future; it cannot un-issue the
/// provider call.
///
/// Per-call override hooks on the descriptor are sequenced by the
/// orchestrator, not by implementations of this trait: at every phase the
/// override (if any) has already run when the trait method is invoked.
pub trait LifecycleHooks<Req>: Send + Sync {
    /// Invoked after descriptor resolution, before the provider call.
    ///
    /// # Errors
    ///
    /// Returns [`CallApiError::MissingActionType`] (or an implementation's
    /// own validation error) when the descriptor cannot be dispatched for.
    fn before_request(
        &self,
        descriptor: &ApiDescriptor<Req>,
        dispatch: Dispatch<'_>,
        get_state: GetState<'_>,
    ) -> Result<(), CallApiError>;

    /// Invoked when the provider call resolves.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the descriptor cannot be dispatched
    /// for.
    fn on_success(
        &self,
        result: &Value,
        descriptor: &ApiDescriptor<Req>,
        dispatch: Dispatch<'_>,
        get_state: GetState<'_>,
    ) -> Result<(), CallApiError>;

    /// Invoked when the provider call fails.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the descriptor cannot be dispatched
    /// for.
    fn on_failure(
        &self,
        result: &Value,
        descriptor: &ApiDescriptor<Req>,
        dispatch: Dispatch<'_>,
        get_state: GetState<'_>,
    ) -> Result<(), CallApiError>;
}

/// Project the metadata half of a provider result.
///
/// Returns every field of the result except `data`. A result that is not a
/// structured object — a bare transport error, say — degrades to an empty
/// object rather than an error.
///
/// # Example
///
/// ```
/// use callapi_core::hooks::response_meta;
/// use serde_json::json;
///
/// assert_eq!(
///     response_meta(&json!({ "data": "foo", "status": 200 })),
///     json!({ "status": 200 })
/// );
/// assert_eq!(response_meta(&json!("connection reset")), json!({}));
/// ```
#[must_use]
pub fn response_meta(result: &Value) -> Value {
    match result {
        Value::Object(fields) => {
            let mut meta = fields.clone();
            meta.remove("data");
            Value::Object(meta)
        }
        _ => Value::Object(Map::new()),
    }
}

/// Payload for a success dispatch: the `data` field of the provider result.
#[must_use]
pub fn success_payload(result: &Value) -> Value {
    result.get("data").cloned().unwrap_or(Value::Null)
}

/// Payload for a failure dispatch.
///
/// The `data` field when the failure carries one (a business-level failure
/// such as an HTTP 404 body), the whole failure value when it does not (a
/// bare transport error).
#[must_use]
pub fn failure_payload(result: &Value) -> Value {
    match result.get("data") {
        Some(Value::Null) | None => result.clone(),
        Some(data) => data.clone(),
    }
}
