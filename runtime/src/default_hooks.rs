//! The default lifecycle hooks.
//!
//! A drop-in [`LifecycleHooks`] implementation dispatching the conventional
//! request/success/failure actions. Attach it to a configuration with
//! [`Config::with_default_hooks`](crate::Config::with_default_hooks).

use callapi_core::hooks::{failure_payload, response_meta, success_payload};
use callapi_core::{
    ApiDescriptor, CallApiError, Dispatch, DispatchedAction, GetState, LifecycleHooks,
    RequestPhase,
};
use serde_json::Value;

/// Stateless hook set dispatching one conventional action per phase.
///
/// Requires every descriptor it sees to carry the three action-type names;
/// a descriptor without them fails the in-flight request with
/// [`CallApiError::MissingActionType`]. Dispatch shapes:
///
/// - before the call: `{type: action_types.request}`
/// - on resolution: `{type: action_types.success, payload: result.data,
///   meta: result-without-data}`
/// - on failure: `{type: action_types.failure, payload: result.data or the
///   whole failure value, error: true, meta: result-without-data}`
///
/// Per-call overrides are not invoked here — the orchestrator has already
/// run them when these hooks execute.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHooks;

impl DefaultHooks {
    /// Create the default hook set.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn require_name<Req>(
    descriptor: &ApiDescriptor<Req>,
    phase: RequestPhase,
) -> Result<&str, CallApiError> {
    descriptor
        .action_types
        .as_ref()
        .map(|types| types.name_for(phase))
        .filter(|name| !name.is_empty())
        .ok_or(CallApiError::MissingActionType { phase })
}

impl<Req> LifecycleHooks<Req> for DefaultHooks {
    fn before_request(
        &self,
        descriptor: &ApiDescriptor<Req>,
        dispatch: Dispatch<'_>,
        _get_state: GetState<'_>,
    ) -> Result<(), CallApiError> {
        let kind = require_name(descriptor, RequestPhase::Request)?;
        dispatch(DispatchedAction::request(kind));
        Ok(())
    }

    fn on_success(
        &self,
        result: &Value,
        descriptor: &ApiDescriptor<Req>,
        dispatch: Dispatch<'_>,
        _get_state: GetState<'_>,
    ) -> Result<(), CallApiError> {
        let kind = require_name(descriptor, RequestPhase::Success)?;
        dispatch(DispatchedAction::success(
            kind,
            success_payload(result),
            response_meta(result),
        ));
        Ok(())
    }

    fn on_failure(
        &self,
        result: &Value,
        descriptor: &ApiDescriptor<Req>,
        dispatch: Dispatch<'_>,
        _get_state: GetState<'_>,
    ) -> Result<(), CallApiError> {
        let kind = require_name(descriptor, RequestPhase::Failure)?;
        dispatch(DispatchedAction::failure(
            kind,
            failure_payload(result),
            response_meta(result),
        ));
        Ok(())
    }
}
