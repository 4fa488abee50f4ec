//! Mock providers for exercising the orchestrator without a network.

use callapi_core::Provider;
use serde_json::Value;
use std::future::{self, Future};
use std::marker::PhantomData;

/// Provider resolving every call with one fixed outcome.
///
/// The request specification type is a JSON value, so descriptors built in
/// tests can carry whatever shape reads best.
///
/// # Example
///
/// ```
/// use callapi_core::Provider;
/// use callapi_testing::StaticProvider;
/// use serde_json::json;
///
/// let provider = StaticProvider::ok(json!({ "data": "foo", "status": 200 }));
/// let outcome = tokio_test::block_on(provider.call(&json!({ "url": "/x" })));
/// assert_eq!(outcome, Ok(json!({ "data": "foo", "status": 200 })));
/// ```
#[derive(Debug, Clone)]
pub struct StaticProvider {
    outcome: Result<Value, Value>,
}

impl StaticProvider {
    /// A provider whose every call resolves with the given value.
    #[must_use]
    pub const fn ok(value: Value) -> Self {
        Self { outcome: Ok(value) }
    }

    /// A provider whose every call fails with the given value.
    #[must_use]
    pub const fn err(value: Value) -> Self {
        Self {
            outcome: Err(value),
        }
    }
}

impl Provider for StaticProvider {
    type Request = Value;

    fn call(&self, _spec: &Value) -> impl Future<Output = Result<Value, Value>> + Send {
        future::ready(self.outcome.clone())
    }
}

/// Provider delegating each call to a closure.
///
/// Useful for routing on the request specification, the way a fake HTTP
/// backend routes on the URL.
///
/// # Example
///
/// ```
/// use callapi_testing::FnProvider;
/// use serde_json::{Value, json};
///
/// let provider = FnProvider::new(|spec: &Value| {
///     match spec.get("url").and_then(Value::as_str) {
///         Some("/404") => Err(json!({ "data": "not found", "status": 404 })),
///         _ => Ok(json!({ "data": "foo", "status": 200 })),
///     }
/// });
/// # let _ = provider;
/// ```
pub struct FnProvider<Req, F>
where
    F: Fn(&Req) -> Result<Value, Value> + Send + Sync,
{
    respond: F,
    _request: PhantomData<fn(&Req)>,
}

impl<Req, F> FnProvider<Req, F>
where
    F: Fn(&Req) -> Result<Value, Value> + Send + Sync,
{
    /// Wrap a response closure as a provider.
    #[must_use]
    pub const fn new(respond: F) -> Self {
        Self {
            respond,
            _request: PhantomData,
        }
    }
}

impl<Req, F> Provider for FnProvider<Req, F>
where
    Req: Send + Sync,
    F: Fn(&Req) -> Result<Value, Value> + Send + Sync,
{
    type Request = Req;

    fn call(&self, spec: &Req) -> impl Future<Output = Result<Value, Value>> + Send {
        future::ready((self.respond)(spec))
    }
}
