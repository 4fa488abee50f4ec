//! Integration tests for the orchestrated request lifecycle
//!
//! Drives full request flows through the orchestrator with the default
//! hooks, asserting on the dispatched action sequences exactly as a state
//! container would observe them.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use callapi_core::{
    Action, ActionTypes, ApiDescriptor, CallApiError, Dispatch, DispatchedAction, GetState,
    LifecycleHooks,
};
use callapi_runtime::{ActionRegistry, Config, RequestOrchestrator};
use callapi_testing::{DispatchRecorder, FnProvider, RequestTest, null_state};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("callapi=debug")
        .with_test_writer()
        .try_init();
}

fn test_action_types() -> ActionTypes {
    ActionTypes::new("REQUEST", "SUCCESS", "FAILURE")
}

/// Registry routing the FETCH action to a URL taken from its `meta` field.
fn fetch_registry() -> ActionRegistry<Value> {
    ActionRegistry::new().with("FETCH", |action: &Action| {
        let url = action
            .field("meta")
            .and_then(Value::as_str)
            .unwrap_or("/200");
        Some(
            ApiDescriptor::new(json!({ "url": url })).with_action_types(test_action_types()),
        )
    })
}

/// Provider behaving like the fake backend the container tests run against.
fn routed_provider() -> FnProvider<Value, impl Fn(&Value) -> Result<Value, Value> + Send + Sync> {
    FnProvider::new(|spec: &Value| match spec.get("url").and_then(Value::as_str) {
        Some("/0") => Err(json!("very bad")),
        Some("/404") => Err(json!({ "data": "not found", "status": 404 })),
        _ => Ok(json!({ "data": "foo", "status": 200 })),
    })
}

#[tokio::test]
async fn success_flow_dispatches_request_then_success() {
    init_tracing();
    let config = Config::with_default_hooks(fetch_registry(), routed_provider()).unwrap();
    let orchestrator = RequestOrchestrator::with_config(config);
    let recorder = DispatchRecorder::new();
    let dispatch = recorder.dispatch_fn();
    let get_state = null_state();

    orchestrator
        .request(&Action::new("FETCH"), &dispatch, &get_state)
        .await
        .unwrap();

    assert_eq!(
        recorder.actions(),
        vec![
            DispatchedAction::request("REQUEST"),
            DispatchedAction::success("SUCCESS", json!("foo"), json!({ "status": 200 })),
        ]
    );
}

#[tokio::test]
async fn business_failure_dispatches_its_data_as_payload() {
    let config = Config::with_default_hooks(fetch_registry(), routed_provider()).unwrap();
    let orchestrator = RequestOrchestrator::with_config(config);
    let recorder = DispatchRecorder::new();
    let dispatch = recorder.dispatch_fn();
    let get_state = null_state();

    let action = Action::new("FETCH").with_field("meta", json!("/404"));
    orchestrator
        .request(&action, &dispatch, &get_state)
        .await
        .unwrap();

    assert_eq!(
        recorder.actions(),
        vec![
            DispatchedAction::request("REQUEST"),
            DispatchedAction::failure("FAILURE", json!("not found"), json!({ "status": 404 })),
        ]
    );
}

#[tokio::test]
async fn transport_failure_dispatches_the_whole_error_with_empty_meta() {
    let config = Config::with_default_hooks(fetch_registry(), routed_provider()).unwrap();
    let orchestrator = RequestOrchestrator::with_config(config);
    let recorder = DispatchRecorder::new();
    let dispatch = recorder.dispatch_fn();
    let get_state = null_state();

    let action = Action::new("FETCH").with_field("meta", json!("/0"));
    orchestrator
        .request(&action, &dispatch, &get_state)
        .await
        .unwrap();

    assert_eq!(
        recorder.actions(),
        vec![
            DispatchedAction::request("REQUEST"),
            DispatchedAction::failure("FAILURE", json!("very bad"), json!({})),
        ]
    );
}

#[tokio::test]
async fn per_call_success_override_runs_once_before_the_default_dispatch() {
    let override_calls = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&override_calls);

    let registry = ActionRegistry::new().with("FETCH", move |_action: &Action| {
        let counted = Arc::clone(&counted);
        Some(
            ApiDescriptor::new(json!({ "url": "/200" }))
                .with_action_types(test_action_types())
                .with_on_success(move |result, descriptor, dispatch, _get_state| {
                    counted.fetch_add(1, Ordering::SeqCst);
                    // The override sees the same result and descriptor the
                    // default hook is about to dispatch for.
                    assert_eq!(result, &json!({ "data": "foo", "status": 200 }));
                    assert_eq!(descriptor.request, json!({ "url": "/200" }));
                    dispatch(DispatchedAction::request("OVERRIDE"));
                }),
        )
    });
    let config = Config::with_default_hooks(registry, routed_provider()).unwrap();
    let orchestrator = RequestOrchestrator::with_config(config);
    let recorder = DispatchRecorder::new();
    let dispatch = recorder.dispatch_fn();
    let get_state = null_state();

    orchestrator
        .request(&Action::new("FETCH"), &dispatch, &get_state)
        .await
        .unwrap();

    assert_eq!(recorder.kinds(), vec!["REQUEST", "OVERRIDE", "SUCCESS"]);
    assert_eq!(override_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn per_call_before_override_runs_ahead_of_the_request_dispatch() {
    let registry = ActionRegistry::new().with("FETCH", |_action: &Action| {
        Some(
            ApiDescriptor::new(json!({ "url": "/200" }))
                .with_action_types(test_action_types())
                .with_before_request(|_descriptor, dispatch, _get_state| {
                    dispatch(DispatchedAction::request("OVERRIDE"));
                }),
        )
    });
    let config = Config::with_default_hooks(registry, routed_provider()).unwrap();
    let orchestrator = RequestOrchestrator::with_config(config);
    let recorder = DispatchRecorder::new();
    let dispatch = recorder.dispatch_fn();
    let get_state = null_state();

    orchestrator
        .request(&Action::new("FETCH"), &dispatch, &get_state)
        .await
        .unwrap();

    assert_eq!(recorder.kinds(), vec!["OVERRIDE", "REQUEST", "SUCCESS"]);
}

#[tokio::test]
async fn descriptor_without_action_types_fails_the_in_flight_request() {
    let registry = ActionRegistry::new()
        .with("FETCH", |_action: &Action| {
            Some(ApiDescriptor::new(json!({ "url": "/200" })))
        });
    let config = Config::with_default_hooks(registry, routed_provider()).unwrap();
    let orchestrator = RequestOrchestrator::with_config(config);
    let recorder = DispatchRecorder::new();
    let dispatch = recorder.dispatch_fn();
    let get_state = null_state();

    let outcome = orchestrator
        .request(&Action::new("FETCH"), &dispatch, &get_state)
        .await;

    assert!(matches!(
        outcome,
        Err(CallApiError::MissingActionType { .. })
    ));
    assert!(recorder.actions().is_empty());
}

#[tokio::test]
async fn hookless_config_calls_the_provider_but_dispatches_nothing() {
    let called = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&called);
    let provider = FnProvider::new(move |_spec: &Value| {
        counted.fetch_add(1, Ordering::SeqCst);
        Ok(json!({ "data": "foo" }))
    });

    let config = Config::new(fetch_registry(), provider).unwrap();
    let orchestrator = RequestOrchestrator::with_config(config);
    let recorder = DispatchRecorder::new();
    let dispatch = recorder.dispatch_fn();
    let get_state = null_state();

    orchestrator
        .request(&Action::new("FETCH"), &dispatch, &get_state)
        .await
        .unwrap();

    assert_eq!(called.load(Ordering::SeqCst), 1);
    assert!(recorder.actions().is_empty());
}

#[tokio::test]
async fn repeated_requests_produce_independent_sequences() {
    let config = Config::with_default_hooks(fetch_registry(), routed_provider()).unwrap();
    let orchestrator = RequestOrchestrator::with_config(config);

    let first = DispatchRecorder::new();
    let second = DispatchRecorder::new();
    let first_dispatch = first.dispatch_fn();
    let second_dispatch = second.dispatch_fn();
    let get_state = null_state();

    let ok = Action::new("FETCH");
    let not_found = Action::new("FETCH").with_field("meta", json!("/404"));

    let (left, right) = tokio::join!(
        orchestrator.request(&ok, &first_dispatch, &get_state),
        orchestrator.request(&not_found, &second_dispatch, &get_state),
    );
    left.unwrap();
    right.unwrap();

    assert_eq!(first.kinds(), vec!["REQUEST", "SUCCESS"]);
    assert_eq!(second.kinds(), vec!["REQUEST", "FAILURE"]);
}

/// Hooks asserting that the container's `get_state` arrives unmodified.
struct StateProbeHooks;

impl LifecycleHooks<Value> for StateProbeHooks {
    fn before_request(
        &self,
        _descriptor: &ApiDescriptor<Value>,
        _dispatch: Dispatch<'_>,
        get_state: GetState<'_>,
    ) -> Result<(), CallApiError> {
        assert_eq!(get_state(), json!({ "ready": true }));
        Ok(())
    }

    fn on_success(
        &self,
        _result: &Value,
        _descriptor: &ApiDescriptor<Value>,
        _dispatch: Dispatch<'_>,
        get_state: GetState<'_>,
    ) -> Result<(), CallApiError> {
        assert_eq!(get_state(), json!({ "ready": true }));
        Ok(())
    }

    fn on_failure(
        &self,
        _result: &Value,
        _descriptor: &ApiDescriptor<Value>,
        _dispatch: Dispatch<'_>,
        get_state: GetState<'_>,
    ) -> Result<(), CallApiError> {
        Ok(())
    }
}

#[tokio::test]
async fn get_state_is_forwarded_into_every_hook() {
    let config = Config::with_hooks(fetch_registry(), routed_provider(), StateProbeHooks).unwrap();
    let orchestrator = RequestOrchestrator::with_config(config);
    let recorder = DispatchRecorder::new();
    let dispatch = recorder.dispatch_fn();
    let get_state = || json!({ "ready": true });

    orchestrator
        .request(&Action::new("FETCH"), &dispatch, &get_state)
        .await
        .unwrap();
}

#[tokio::test]
async fn the_request_test_harness_drives_a_full_flow() {
    let config = Config::with_default_hooks(fetch_registry(), routed_provider()).unwrap();

    RequestTest::new(config)
        .when_action(Action::new("FETCH").with_field("meta", json!("/404")))
        .then_outcome(|outcome| assert!(outcome.is_ok()))
        .then_dispatched(|actions| {
            assert_eq!(actions.len(), 2);
            assert_eq!(
                actions[1],
                DispatchedAction::failure("FAILURE", json!("not found"), json!({ "status": 404 }))
            );
        })
        .run()
        .await;
}
