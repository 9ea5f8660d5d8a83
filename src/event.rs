//! Invocation event parsing and the response view type.
//!
//! The event arrives as raw JSON and only the `target` field is consumed.
//! Extraction is validated explicitly so a malformed event fails with a named
//! error before any call leaves the function.

use serde::Serialize;
use serde_json::Value;

use aws_sdk_elasticloadbalancingv2::types::TargetHealth;

use crate::config::TARGET_FIELD;
use crate::error::Error;

/// Extract the target group ARN from the raw invocation event.
///
/// Fails with [`Error::MissingField`] when the field is absent and
/// [`Error::FieldNotAString`] when it holds a non-string value.
pub fn target_group_arn(event: &Value) -> Result<&str, Error> {
    let value = event
        .get(TARGET_FIELD)
        .ok_or(Error::MissingField(TARGET_FIELD))?;
    value.as_str().ok_or(Error::FieldNotAString(TARGET_FIELD))
}

/// Serializable projection of the SDK's `TargetHealth`.
///
/// Keys match the ELBv2 wire names (`State`, `Reason`, `Description`); absent
/// fields are omitted from the JSON so the output is a faithful pass-through
/// of whatever the service reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TargetHealthView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&TargetHealth> for TargetHealthView {
    fn from(health: &TargetHealth) -> Self {
        Self {
            state: health.state().map(|s| s.as_str().to_string()),
            reason: health.reason().map(|r| r.as_str().to_string()),
            description: health.description().map(str::to_string),
        }
    }
}
