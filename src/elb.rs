//! ELBv2 API seam.
//!
//! The handler depends on the one `DescribeTargetHealth` operation through a
//! trait so tests can substitute a stub for the real AWS client. The client
//! itself is constructed once in `main` and shared across invocations within
//! a warm execution context.

use async_trait::async_trait;

use aws_sdk_elasticloadbalancingv2::types::TargetHealthDescription;
use aws_sdk_elasticloadbalancingv2::Client;

use crate::error::Error;

/// The single ELBv2 operation the function uses.
#[async_trait]
pub trait TargetHealthApi: Send + Sync {
    /// Describe the health of all targets registered with a target group.
    async fn describe_target_health(
        &self,
        target_group_arn: &str,
    ) -> Result<Vec<TargetHealthDescription>, Error>;
}

#[async_trait]
impl TargetHealthApi for Client {
    async fn describe_target_health(
        &self,
        target_group_arn: &str,
    ) -> Result<Vec<TargetHealthDescription>, Error> {
        let output = Client::describe_target_health(self)
            .target_group_arn(target_group_arn)
            .send()
            .await
            .map_err(|err| Error::DescribeTargetHealth(Box::new(err)))?;

        Ok(output.target_health_descriptions().to_vec())
    }
}
