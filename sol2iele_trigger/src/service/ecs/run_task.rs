use aws_sdk_ecs::types::{ContainerOverride, TaskOverride};
use lambda_runtime::tracing;
use thiserror::Error;

use crate::CompileTaskRequest;
use crate::task::LaunchedTask;

#[derive(Debug, Error)]
pub enum LaunchErr {
    #[error("{0:?}")]
    AwsErr(#[from] aws_sdk_ecs::Error),
}

/// Issue one ecs:RunTask call for the request. Single attempt, no retry.
#[tracing::instrument(skip(ecs_client))]
pub(in crate::service::ecs) async fn run_task(
    ecs_client: &aws_sdk_ecs::Client,
    request: &CompileTaskRequest,
) -> Result<Vec<LaunchedTask>, LaunchErr> {
    let container_override = ContainerOverride::builder()
        .name(request.container_name.as_str())
        .set_command(Some(request.command.clone()))
        .build();

    let overrides = TaskOverride::builder()
        .container_overrides(container_override)
        .build();

    let output = match ecs_client
        .run_task()
        .cluster(request.cluster.as_str())
        .task_definition(request.task_definition.as_str())
        .overrides(overrides)
        .send()
        .await
    {
        Ok(output) => output,
        Err(e) => {
            tracing::error!(error=?e, "unable to run task");
            return Err(LaunchErr::from(aws_sdk_ecs::Error::from(e)));
        }
    };

    // RunTask reports placement problems in-band rather than as call errors
    for failure in output.failures() {
        tracing::warn!(failure=?failure, "task placement failure reported");
    }

    Ok(output.tasks().iter().map(LaunchedTask::from).collect())
}
