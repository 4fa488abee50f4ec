//! The asynchronous call provider trait.

use serde_json::Value;
use std::future::Future;

/// The collaborator that performs the actual asynchronous call.
///
/// The orchestrator holds exactly one provider per configuration and passes
/// each descriptor's request specification to it verbatim. What a request
/// specification *is* — an HTTP request, an RPC envelope, a test fixture —
/// is the provider's choice via [`Request`](Self::Request).
///
/// # Result Convention
///
/// Both halves of the returned `Result` are JSON values:
///
/// - `Ok`: a resolution, conventionally an object carrying a `data` field
///   plus arbitrary metadata fields (`status`, headers, timings)
/// - `Err`: a failure, either a `data`-bearing object (a business-level
///   failure such as an HTTP 404 body) or any other value standing for the
///   error itself (a transport failure with no `data` field)
///
/// The orchestrator never inspects these values; the lifecycle hooks shape
/// them into dispatched actions.
///
/// # Example
///
/// ```
/// use callapi_core::Provider;
/// use serde_json::{Value, json};
/// use std::future::Future;
///
/// struct AlwaysOk;
///
/// impl Provider for AlwaysOk {
///     type Request = String;
///
///     fn call(&self, _spec: &String) -> impl Future<Output = Result<Value, Value>> + Send {
///         std::future::ready(Ok(json!({ "data": "pong", "status": 200 })))
///     }
/// }
/// ```
pub trait Provider: Send + Sync {
    /// Opaque request specification type, passed through from descriptors.
    type Request: Send + Sync;

    /// Perform the asynchronous call for one request specification.
    ///
    /// A call that never settles leaves its `request` invocation pending;
    /// no timeout is imposed at this layer.
    fn call(&self, spec: &Self::Request) -> impl Future<Output = Result<Value, Value>> + Send;
}
