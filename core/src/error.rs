//! Error types for the orchestration layer.

use crate::action::RequestPhase;
use thiserror::Error;

/// Errors raised by the request orchestrator and the default hooks.
///
/// Configuration, registry, and descriptor errors are pre-flight: they are
/// returned before any provider call is issued and before any action is
/// dispatched. Provider failures are never surfaced here — they are routed
/// to the failure hooks and dispatched as data.
#[derive(Debug, Error)]
pub enum CallApiError {
    /// `request` was called before any configuration was set.
    #[error("no configuration has been set")]
    ConfigNotSet,

    /// Structural validation of a configuration failed.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// What the validator rejected.
        reason: String,
    },

    /// The incoming action's type has no entry in the action registry.
    #[error("action `{action_type}` is not in the configured action registry")]
    ActionNotFound {
        /// The unmatched action-type name.
        action_type: String,
    },

    /// The registry factory could not produce a descriptor for the action.
    #[error("no descriptor could be built for action `{action_type}`")]
    InvalidDescriptor {
        /// The action-type name whose factory came up empty.
        action_type: String,
    },

    /// A descriptor handed to the default hooks is missing the action-type
    /// name for a lifecycle phase.
    ///
    /// Raised from within a hook, so it surfaces as the error of the
    /// in-flight `request` future rather than as a pre-flight error.
    #[error("descriptor action types are missing a usable `{phase}` name")]
    MissingActionType {
        /// The phase whose name was absent or empty.
        phase: RequestPhase,
    },
}
