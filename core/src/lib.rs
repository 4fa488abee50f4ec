//! # Callapi Core
//!
//! Core traits and types for the callapi request orchestration layer.
//!
//! This crate defines the seams between a dispatch-based state container and
//! the asynchronous calls made on its behalf. The orchestrator that wires
//! these pieces together lives in the `callapi-runtime` crate.
//!
//! ## Core Concepts
//!
//! - **Action**: An incoming state-transition record, identified by a `type`
//!   string plus arbitrary fields consumed by descriptor factories
//! - **Descriptor**: The per-call bundle of request specification,
//!   conventional action-type names, and optional override hooks
//! - **Provider**: The collaborator performing the actual asynchronous call
//! - **Lifecycle hooks**: Invoked before the call and when it settles,
//!   turning outcomes into dispatched actions
//!
//! ## Architecture Principles
//!
//! - Pluggable providers behind a trait, injected via configuration
//! - Hooks receive `dispatch`/`get_state` from the container unmodified
//! - Pre-flight failures are errors; provider failures are dispatched data
//!
//! ## Example
//!
//! ```
//! use callapi_core::{ActionTypes, ApiDescriptor};
//! use serde_json::json;
//!
//! let descriptor = ApiDescriptor::new(json!({ "url": "/users/42" }))
//!     .with_action_types(ActionTypes::new("REQUEST", "SUCCESS", "FAILURE"));
//!
//! assert!(descriptor.action_types.is_some());
//! ```

/// Incoming and dispatched action types.
pub mod action;

/// Per-call API descriptors produced by registry factories.
pub mod descriptor;

/// Error types shared across the orchestration layer.
pub mod error;

/// Lifecycle hook trait and the dispatch/state container boundary.
pub mod hooks;

/// The asynchronous call provider trait.
pub mod provider;

pub use action::{Action, ActionTypes, DispatchedAction, RequestPhase};
pub use descriptor::{ApiDescriptor, BeforeHook, DescriptorFactory, SettleHook};
pub use error::CallApiError;
pub use hooks::{Dispatch, GetState, LifecycleHooks};
pub use provider::Provider;
