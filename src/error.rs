//! Error types for the health lookup function.
//!
//! Nothing here is caught or translated on the way out: every variant
//! propagates through the handler to the Lambda runtime, which marks the
//! invocation failed and surfaces the error to the trigger.

/// Boxed error for wrapping the generic AWS SDK failure types.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invocation event is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("invocation event field '{0}' must be a string")]
    FieldNotAString(&'static str),

    #[error("DescribeTargetHealth failed: {0}")]
    DescribeTargetHealth(#[source] BoxError),

    #[error("target group has no registered targets: {0}")]
    NoRegisteredTargets(String),

    #[error("target health missing from first descriptor: {0}")]
    MissingHealth(String),

    #[error("failed to serialize target health: {0}")]
    Serialize(#[from] serde_json::Error),
}
