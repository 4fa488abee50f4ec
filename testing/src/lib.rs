//! # Callapi Testing
//!
//! Testing utilities and helpers for the callapi orchestration layer.
//!
//! This crate provides:
//! - Mock providers with fixed or closure-routed outcomes
//! - A dispatch recorder for asserting on dispatched action sequences
//! - A fluent Given-When-Then harness over the orchestrator
//!
//! ## Example
//!
//! ```
//! use callapi_core::{Action, ActionTypes, ApiDescriptor};
//! use callapi_runtime::{ActionRegistry, Config};
//! use callapi_testing::{RequestTest, StaticProvider};
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), callapi_core::CallApiError> {
//! let registry = ActionRegistry::new().with("FETCH", |_action: &Action| {
//!     Some(
//!         ApiDescriptor::new(json!({ "url": "/200" }))
//!             .with_action_types(ActionTypes::new("REQUEST", "SUCCESS", "FAILURE")),
//!     )
//! });
//! let provider = StaticProvider::ok(json!({ "data": "foo", "status": 200 }));
//!
//! RequestTest::new(Config::with_default_hooks(registry, provider)?)
//!     .when_action(Action::new("FETCH"))
//!     .then_dispatched(|actions| assert_eq!(actions.len(), 2))
//!     .run()
//!     .await;
//! # Ok(())
//! # }
//! ```

/// Mock provider implementations.
pub mod provider_mocks;


pub use provider_mocks::{FnProvider, StaticProvider};
pub use request_test::{DispatchRecorder, RequestTest, null_state};
