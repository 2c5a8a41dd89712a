mod run_task;

use crate::{CompileTaskRequest, TaskLauncher};
use crate::task::LaunchedTask;

#[derive(Clone, Debug)]
pub struct ECSClient {
    /// Inner ECS client
    inner: aws_sdk_ecs::Client,
}

impl ECSClient {
    pub fn new(inner: aws_sdk_ecs::Client) -> Self {
        Self { inner }
    }
}

impl TaskLauncher for ECSClient {
    async fn launch(&self, request: &CompileTaskRequest) -> anyhow::Result<Vec<LaunchedTask>> {
        Ok(run_task::run_task(&self.inner, request).await?)
    }
}
