//! The health lookup adapter.
//!
//! One invocation, one downstream call: log the raw event, extract the target
//! group ARN, describe target health, take the first descriptor, log the
//! extracted health, return it. Errors are never caught here; they propagate
//! to the Lambda runtime, which marks the invocation failed.

use lambda_runtime::LambdaEvent;
use serde_json::Value;

use crate::elb::TargetHealthApi;
use crate::error::Error;
use crate::event::{self, TargetHealthView};

/// Handle one invocation: look up the health of the first target registered
/// with the target group named by the event's `target` field.
pub async fn handle(
    event: LambdaEvent<Value>,
    api: &dyn TargetHealthApi,
) -> Result<TargetHealthView, Error> {
    let (payload, context) = event.into_parts();
    tracing::info!(request_id = %context.request_id, event = %payload, "received invocation event");

    let target = event::target_group_arn(&payload)?;

    let descriptions = api.describe_target_health(target).await?;
    let first = descriptions
        .into_iter()
        .next()
        .ok_or_else(|| Error::NoRegisteredTargets(target.to_string()))?;
    let health = first
        .target_health()
        .ok_or_else(|| Error::MissingHealth(target.to_string()))?;

    let view = TargetHealthView::from(health);
    tracing::info!(health = %serde_json::to_string_pretty(&view)?, "target health");

    Ok(view)
}
