//! tg-health: ELBv2 target group health lookup for AWS Lambda.
//!
//! This is the function entry point. It initializes tracing from the
//! environment, builds the ELBv2 client once so warm invocations reuse it,
//! and hands each invocation event to the handler through the Lambda runtime.

use lambda_runtime::{run, service_fn, LambdaEvent};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tg_health::config::{LogFormat, TelemetryConfig};
use tg_health::handler;

/// Initialize the tracing subscriber with the resolved filter and format.
fn init_tracing(telemetry: &TelemetryConfig) {
    // ANSI off: the log sink is CloudWatch, not a terminal
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&telemetry.log_filter));

    match telemetry.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_ansi(false))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_ansi(false))
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    let telemetry = TelemetryConfig::from_env();
    init_tracing(&telemetry);
    tracing::info!(
        filter = %telemetry.log_filter,
        format = telemetry.format.as_str(),
        "initialized telemetry"
    );

    // Credentials and region come from the ambient Lambda environment.
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = aws_sdk_elasticloadbalancingv2::Client::new(&aws_config);
    tracing::info!(region = ?aws_config.region(), "created ELBv2 client");

    let client_ref = &client;
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler::handle(event, client_ref)
            .await
            .map_err(lambda_runtime::Error::from)
    }))
    .await
}
