//! Per-call API descriptors.
//!
//! A descriptor is built fresh by a registry factory for every incoming
//! action and discarded once the call settles. It bundles the opaque
//! request specification handed to the provider, the conventional
//! action-type names the default hooks dispatch with, and optional
//! per-call override hooks.

use crate::action::{Action, ActionTypes};
use crate::hooks::{Dispatch, GetState};
use serde_json::Value;
use std::fmt;

/// Override hook invoked before the provider call is issued.
///
/// Informational: it runs ahead of the configuration-level hook at the same
/// phase and cannot veto the call.
pub type BeforeHook<Req> =
    Box<dyn Fn(&ApiDescriptor<Req>, Dispatch<'_>, GetState<'_>) + Send + Sync>;

/// Override hook invoked once the provider call settles, with the raw
/// provider result.
pub type SettleHook<Req> =
    Box<dyn Fn(&Value, &ApiDescriptor<Req>, Dispatch<'_>, GetState<'_>) + Send + Sync>;

/// Factory mapping an incoming action to a descriptor.
///
/// Returns `None` when no descriptor can be built for the action; the
/// orchestrator reports that as an invalid-descriptor error.
pub type DescriptorFactory<Req> =
    Box<dyn Fn(&Action) -> Option<ApiDescriptor<Req>> + Send + Sync>;

/// The per-call bundle produced by a registry factory.
///
/// `Req` is the provider's request specification type; the orchestrator
/// passes it through verbatim and imposes no shape on it.
///
/// # Example
///
/// ```
/// use callapi_core::{ActionTypes, ApiDescriptor};
/// use serde_json::json;
///
/// let descriptor = ApiDescriptor::new(json!({ "url": "/health" }))
///     .with_action_types(ActionTypes::new("PING", "PONG", "DEAD"));
/// ```
pub struct ApiDescriptor<Req> {
    /// Opaque request specification handed verbatim to the provider.
    pub request: Req,

    /// Conventional action-type names consumed by the default hooks.
    pub action_types: Option<ActionTypes>,

    /// Per-call override, run before the configuration's before hook.
    pub before_request: Option<BeforeHook<Req>>,

    /// Per-call override, run before the configuration's success hook.
    pub on_success: Option<SettleHook<Req>>,

    /// Per-call override, run before the configuration's failure hook.
    pub on_failure: Option<SettleHook<Req>>,
}

impl<Req> ApiDescriptor<Req> {
    /// Create a descriptor around a request specification.
    #[must_use]
    pub const fn new(request: Req) -> Self {
        Self {
            request,
            action_types: None,
            before_request: None,
            on_success: None,
            on_failure: None,
        }
    }

    /// Attach the conventional action-type names.
    #[must_use]
    pub fn with_action_types(mut self, action_types: ActionTypes) -> Self {
        self.action_types = Some(action_types);
        self
    }

    /// Attach a per-call before-request override.
    #[must_use]
    pub fn with_before_request<F>(mut self, hook: F) -> Self
    where
        F: Fn(&ApiDescriptor<Req>, Dispatch<'_>, GetState<'_>) + Send + Sync + 'static,
    {
        self.before_request = Some(Box::new(hook));
        self
    }

    /// Attach a per-call success override.
    #[must_use]
    pub fn with_on_success<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Value, &ApiDescriptor<Req>, Dispatch<'_>, GetState<'_>) + Send + Sync + 'static,
    {
        self.on_success = Some(Box::new(hook));
        self
    }

    /// Attach a per-call failure override.
    #[must_use]
    pub fn with_on_failure<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Value, &ApiDescriptor<Req>, Dispatch<'_>, GetState<'_>) + Send + Sync + 'static,
    {
        self.on_failure = Some(Box::new(hook));
        self
    }
}

// Manual Debug implementation since the override hooks are closures
impl<Req> fmt::Debug for ApiDescriptor<Req>
where
    Req: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiDescriptor")
            .field("request", &self.request)
            .field("action_types", &self.action_types)
            .field("before_request", &self.before_request.as_ref().map(|_| "<hook>"))
            .field("on_success", &self.on_success.as_ref().map(|_| "<hook>"))
            .field("on_failure", &self.on_failure.as_ref().map(|_| "<hook>"))
            .finish()
    }
}
