//! # Callapi Runtime
//!
//! The request orchestrator for the callapi layer.
//!
//! This crate wires the pieces defined in `callapi-core` together: a
//! validated [`Config`] holds an [`ActionRegistry`] and a provider, and the
//! [`RequestOrchestrator`] resolves incoming actions into descriptors, runs
//! the lifecycle hook layers, and delegates the call to the provider.
//!
//! ## Request Lifecycle
//!
//! 1. Resolve the action's registry entry and build a descriptor
//! 2. Run the before-request layer (per-call override, then config hooks)
//! 3. Await the provider call
//! 4. Run the success or failure layer the same way
//!
//! Configuration, registry, and descriptor problems are returned as errors
//! before any dispatch happens; a failed provider call is not an error —
//! it is routed to the failure hooks and dispatched as data.
//!
//! ## Example
//!
//! ```
//! use callapi_core::{Action, ActionTypes, ApiDescriptor, Provider};
//! use callapi_runtime::{ActionRegistry, Config, RequestOrchestrator};
//! use serde_json::{Value, json};
//! use std::future::Future;
//!
//! struct PingProvider;
//!
//! impl Provider for PingProvider {
//!     type Request = Value;
//!
//!     fn call(&self, _spec: &Value) -> impl Future<Output = Result<Value, Value>> + Send {
//!         std::future::ready(Ok(json!({ "data": "pong", "status": 200 })))
//!     }
//! }
//!
//! # fn main() -> Result<(), callapi_core::CallApiError> {
//! let registry = ActionRegistry::new().with("PING", |_action: &Action| {
//!     Some(
//!         ApiDescriptor::new(json!({ "url": "/ping" }))
//!             .with_action_types(ActionTypes::new("PING", "PONG", "DEAD")),
//!     )
//! });
//!
//! let config = Config::with_default_hooks(registry, PingProvider)?;
//! let orchestrator = RequestOrchestrator::with_config(config);
//! # let _ = orchestrator;
//! # Ok(())
//! # }
//! ```

use callapi_core::descriptor::DescriptorFactory;
use callapi_core::{
    Action, ApiDescriptor, CallApiError, Dispatch, GetState, LifecycleHooks, Provider,
};
use std::collections::HashMap;

/// Default request/success/failure lifecycle hooks.
pub mod default_hooks;

pub use default_hooks::DefaultHooks;

/// Registry mapping action-type names to descriptor factories.
///
/// Entries are inserted at configuration-build time and read on every
/// `request` call. Later insertions under the same name replace earlier
/// ones.
pub struct ActionRegistry<Req> {
    entries: HashMap<String, DescriptorFactory<Req>>,
}

impl<Req> ActionRegistry<Req> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a factory for an action type, builder style.
    #[must_use]
    pub fn with<F>(mut self, action_type: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&Action) -> Option<ApiDescriptor<Req>> + Send + Sync + 'static,
    {
        self.insert(action_type, factory);
        self
    }

    /// Register a factory for an action type.
    pub fn insert<F>(&mut self, action_type: impl Into<String>, factory: F)
    where
        F: Fn(&Action) -> Option<ApiDescriptor<Req>> + Send + Sync + 'static,
    {
        self.entries.insert(action_type.into(), Box::new(factory));
    }

    /// Whether an action type has a registered factory.
    #[must_use]
    pub fn contains(&self, action_type: &str) -> bool {
        self.entries.contains_key(action_type)
    }

    /// Number of registered action types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn get(&self, action_type: &str) -> Option<&DescriptorFactory<Req>> {
        self.entries.get(action_type)
    }
}

impl<Req> Default for ActionRegistry<Req> {
    fn default() -> Self {
        Self::new()
    }
}

/// A validated configuration held by an orchestrator.
///
/// Construction is the validation boundary: a `Config` value that exists
/// has passed its structural checks, and downstream code trusts it without
/// re-checking. Replacing an orchestrator's configuration means building a
/// fresh `Config` and swapping the whole value.
pub struct Config<P: Provider> {
    registry: ActionRegistry<P::Request>,
    provider: P,
    hooks: Option<Box<dyn LifecycleHooks<P::Request>>>,
}

impl<P: Provider> Config<P> {
    /// Build a configuration with no configuration-level hooks.
    ///
    /// Without hooks the orchestrator still resolves descriptors and calls
    /// the provider, but nothing is dispatched unless descriptors carry
    /// per-call overrides.
    ///
    /// # Errors
    ///
    /// Returns [`CallApiError::InvalidConfig`] if any registered
    /// action-type name is empty.
    pub fn new(registry: ActionRegistry<P::Request>, provider: P) -> Result<Self, CallApiError> {
        Self::validate(&registry)?;
        Ok(Self {
            registry,
            provider,
            hooks: None,
        })
    }

    /// Build a configuration with the default request/success/failure
    /// hooks.
    ///
    /// The registry and provider become the configuration; the default
    /// hooks themselves are stateless.
    ///
    /// # Errors
    ///
    /// Returns [`CallApiError::InvalidConfig`] if any registered
    /// action-type name is empty.
    pub fn with_default_hooks(
        registry: ActionRegistry<P::Request>,
        provider: P,
    ) -> Result<Self, CallApiError> {
        Self::with_hooks(registry, provider, DefaultHooks::new())
    }

    /// Build a configuration with custom configuration-level hooks.
    ///
    /// # Errors
    ///
    /// Returns [`CallApiError::InvalidConfig`] if any registered
    /// action-type name is empty.
    pub fn with_hooks(
        registry: ActionRegistry<P::Request>,
        provider: P,
        hooks: impl LifecycleHooks<P::Request> + 'static,
    ) -> Result<Self, CallApiError> {
        Self::validate(&registry)?;
        Ok(Self {
            registry,
            provider,
            hooks: Some(Box::new(hooks)),
        })
    }

    fn validate(registry: &ActionRegistry<P::Request>) -> Result<(), CallApiError> {
        if registry.entries.keys().any(String::is_empty) {
            return Err(CallApiError::InvalidConfig {
                reason: "registered action-type names must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// The configured action registry.
    #[must_use]
    pub const fn registry(&self) -> &ActionRegistry<P::Request> {
        &self.registry
    }

    /// The configured provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// The configuration-level hooks, if any were attached.
    #[must_use]
    pub fn hooks(&self) -> Option<&dyn LifecycleHooks<P::Request>> {
        self.hooks.as_deref()
    }
}

/// The request orchestrator.
///
/// Owns at most one validated [`Config`] and exposes
/// [`request`](Self::request), the single entry point the trigger mechanism
/// calls for every actionable dispatch it observes.
///
/// # Concurrency
///
/// `request` takes `&self` and touches no mutable state, so any number of
/// requests may run concurrently; their dispatches are unordered with
/// respect to each other. Replacing the configuration takes `&mut self`,
/// which in safe code cannot overlap an in-flight request — share an
/// orchestrator across tasks behind an `Arc` (plus external locking if it
/// must be reconfigured while shared).
pub struct RequestOrchestrator<P: Provider> {
    config: Option<Config<P>>,
}

impl<P: Provider> RequestOrchestrator<P> {
    /// Create an orchestrator with no configuration.
    ///
    /// Every `request` call fails with [`CallApiError::ConfigNotSet`] until
    /// [`set_config`](Self::set_config) is called.
    #[must_use]
    pub const fn new() -> Self {
        Self { config: None }
    }

    /// Create an orchestrator holding the given configuration.
    #[must_use]
    pub const fn with_config(config: Config<P>) -> Self {
        Self {
            config: Some(config),
        }
    }

    /// Replace the held configuration atomically.
    ///
    /// The previous configuration, if any, is dropped whole; there is no
    /// partial update.
    pub fn set_config(&mut self, config: Config<P>) {
        self.config = Some(config);
    }

    /// The currently held configuration, or `None` if none was ever set.
    #[must_use]
    pub const fn config(&self) -> Option<&Config<P>> {
        self.config.as_ref()
    }

    /// Orchestrate one call for an incoming action.
    ///
    /// Resolves the action's descriptor, runs the before-request hook
    /// layer, awaits the provider, and runs the success or failure layer.
    /// At every layer the descriptor's own override (if present) runs
    /// first, then the configuration-level hook.
    ///
    /// Returns `Ok(())` once the terminal hook layer ran — including when
    /// the provider call failed, since failures are dispatched as data
    /// rather than raised. All pre-flight failures are returned before the
    /// first await point and before any dispatch.
    ///
    /// # Errors
    ///
    /// - [`CallApiError::ConfigNotSet`] if no configuration is held
    /// - [`CallApiError::ActionNotFound`] if the action type has no
    ///   registry entry
    /// - [`CallApiError::InvalidDescriptor`] if the factory produced no
    ///   descriptor
    /// - Any error returned by a configuration-level hook, such as
    ///   [`CallApiError::MissingActionType`] from the default hooks
    #[tracing::instrument(skip_all, fields(action_type = %action.kind))]
    pub async fn request(
        &self,
        action: &Action,
        dispatch: Dispatch<'_>,
        get_state: GetState<'_>,
    ) -> Result<(), CallApiError> {
        let config = self.config.as_ref().ok_or(CallApiError::ConfigNotSet)?;

        let factory = config
            .registry
            .get(&action.kind)
            .ok_or_else(|| CallApiError::ActionNotFound {
                action_type: action.kind.clone(),
            })?;

        let descriptor = factory(action).ok_or_else(|| CallApiError::InvalidDescriptor {
            action_type: action.kind.clone(),
        })?;

        if let Some(hook) = &descriptor.before_request {
            hook(&descriptor, dispatch, get_state);
        }
        if let Some(hooks) = config.hooks() {
            hooks.before_request(&descriptor, dispatch, get_state)?;
        }

        tracing::debug!("issuing provider call");
        metrics::counter!("callapi.request.issued").increment(1);

        match config.provider.call(&descriptor.request).await {
            Ok(result) => {
                tracing::debug!("provider call resolved");
                metrics::counter!("callapi.request.succeeded").increment(1);

                if let Some(hook) = &descriptor.on_success {
                    hook(&result, &descriptor, dispatch, get_state);
                }
                if let Some(hooks) = config.hooks() {
                    hooks.on_success(&result, &descriptor, dispatch, get_state)?;
                }
            }
            Err(result) => {
                tracing::debug!("provider call failed");
                metrics::counter!("callapi.request.failed").increment(1);

                if let Some(hook) = &descriptor.on_failure {
                    hook(&result, &descriptor, dispatch, get_state);
                }
                if let Some(hooks) = config.hooks() {
                    hooks.on_failure(&result, &descriptor, dispatch, get_state)?;
                }
            }
        }

        Ok(())
    }
}

impl<P: Provider> Default for RequestOrchestrator<P> {
    fn default() -> Self {
        Self::new()
    }
}
