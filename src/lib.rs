//! tg-health - ELBv2 target group health lookup for AWS Lambda.
//!
//! A single-purpose Lambda function: given an invocation event carrying a
//! target group ARN, it calls the ELBv2 `DescribeTargetHealth` API and returns
//! the health structure of the first registered target.

pub mod config;
pub mod elb;
pub mod error;
pub mod event;
pub mod handler;

pub use elb::TargetHealthApi;
pub use error::Error;
pub use event::TargetHealthView;
pub use handler::handle;
