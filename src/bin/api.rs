use std::sync::Arc;

use anyhow::Context;
use lambda_runtime::{LambdaEvent, service_fn};
use serde_json::Value;
use textsum::core::state::AppState;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    textsum::setup_logging();

    // Any failure here stops the process before it serves traffic.
    let state = Arc::new(AppState::from_env().await.context("starting textsum")?);
    info!("Serving requests");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let state = Arc::clone(&state);
        async move { textsum::api::handler(&state, event).await }
    }))
    .await
    .map_err(|e| anyhow::anyhow!(e))
}
