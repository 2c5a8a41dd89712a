use anyhow::Context;
use lambda_runtime::{Error, LambdaEvent, run, service_fn, tracing};
use sol2iele_entrypoint::Sol2ieleEntrypoint;
use sol2iele_trigger::{config::Config, response::TriggerResponse, service};
use std::sync::Arc;

#[tracing::instrument(skip(ecs_client, event))]
async fn handler(
    ecs_client: Arc<service::ecs::ECSClient>,
    event: LambdaEvent<serde_json::Value>,
) -> Result<TriggerResponse, Error> {
    tracing::trace!(request_id = %event.context.request_id, "processing invocation");
    match sol2iele_trigger::handle_compile_request(ecs_client.as_ref()).await {
        Ok(response) => Ok(response),
        Err(e) => Err(Error::from(e.to_string())),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    Sol2ieleEntrypoint::default().init();
    tracing::info!("initiating lambda");

    let config = Config::from_env().context("all necessary env vars should be available")?;

    tracing::trace!("initialized config");

    let credentials = aws_sdk_ecs::config::Credentials::new(
        config.access_key_id.clone(),
        config.secret_access_key.clone(),
        None,
        None,
        "sol2iele-env",
    );

    let ecs_client = service::ecs::ECSClient::new(aws_sdk_ecs::Client::new(
        &aws_config::defaults(aws_config::BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region("us-east-1")
            .load()
            .await,
    ));

    tracing::trace!("initialized ecs client");

    // Shared references
    let shared_ecs_client = Arc::new(ecs_client);

    let func = service_fn(move |event: LambdaEvent<serde_json::Value>| {
        let ecs_client = shared_ecs_client.clone();

        async move { handler(ecs_client, event).await }
    });

    run(func).await
}
