//! Lambda trigger which starts one run of the solidity-to-IELE compile task on ECS
//! and reports the launched tasks back through an HTTP-shaped envelope.

pub mod config;
pub mod response;
pub mod service;
pub mod task;

use anyhow::Context;
use lambda_runtime::tracing;

use crate::response::TriggerResponse;
use crate::task::LaunchedTask;

/// The run request issued to the orchestrator.
///
/// Built fresh for every invocation from the fixed identifiers in [config];
/// nothing in the invocation event feeds into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileTaskRequest {
    pub cluster: String,
    pub task_definition: String,
    pub container_name: String,
    pub command: Vec<String>,
}

impl CompileTaskRequest {
    /// The fixed request this trigger always issues
    pub fn fixed() -> Self {
        CompileTaskRequest {
            cluster: config::CLUSTER.to_string(),
            task_definition: config::TASK_DEFINITION.to_string(),
            container_name: config::CONTAINER_NAME.to_string(),
            command: config::CONTAINER_COMMAND
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// The seam between the handler and the orchestrator.
/// [service::ecs::ECSClient] is the production implementation; tests stub it.
pub trait TaskLauncher {
    async fn launch(&self, request: &CompileTaskRequest) -> anyhow::Result<Vec<LaunchedTask>>;
}

/// Translate one invocation into one run-task call and map the outcome.
///
/// Exactly one launch is attempted; a launcher failure is returned untouched so the
/// platform surfaces the raw error instead of a synthesized HTTP body.
#[tracing::instrument(skip(launcher))]
pub async fn handle_compile_request(
    launcher: &impl TaskLauncher,
) -> anyhow::Result<TriggerResponse> {
    let request = CompileTaskRequest::fixed();
    let tasks = launcher.launch(&request).await?;

    tracing::debug!(tasks = ?tasks, "run task result");
    tracing::info!(count = tasks.len(), "compile task launched");

    TriggerResponse::ok(&tasks).context("unable to serialize launched tasks")
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use cool_asserts::assert_matches;

    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("{code}")]
    struct StubFailure {
        code: String,
    }

    struct RecordingLauncher {
        requests: Mutex<Vec<CompileTaskRequest>>,
        tasks: Vec<LaunchedTask>,
    }

    impl RecordingLauncher {
        fn returning(tasks: Vec<LaunchedTask>) -> Self {
            RecordingLauncher {
                requests: Mutex::new(vec![]),
                tasks,
            }
        }
    }

    impl TaskLauncher for RecordingLauncher {
        async fn launch(&self, request: &CompileTaskRequest) -> anyhow::Result<Vec<LaunchedTask>> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(self.tasks.clone())
        }
    }

    struct FailingLauncher;

    impl TaskLauncher for FailingLauncher {
        async fn launch(&self, _request: &CompileTaskRequest) -> anyhow::Result<Vec<LaunchedTask>> {
            Err(anyhow::Error::new(StubFailure {
                code: "AccessDeniedException".to_string(),
            }))
        }
    }

    #[tokio::test]
    async fn it_should_send_the_fixed_run_task_request() {
        let launcher = RecordingLauncher::returning(vec![]);

        handle_compile_request(&launcher).await.unwrap();
        handle_compile_request(&launcher).await.unwrap();

        let requests = launcher.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], requests[1]);

        assert_matches!(&requests[0], CompileTaskRequest { cluster, task_definition, container_name, command } => {
            assert_eq!(cluster, "sol2iele-cluster");
            assert_eq!(task_definition, "compile-solidity-to-iele");
            assert_eq!(container_name, "sol2iele-container");
            assert_eq!(command, &vec!["ls".to_string()]);
        });
    }

    #[tokio::test]
    async fn it_should_build_a_success_envelope_from_the_launched_tasks() {
        let task = LaunchedTask {
            task_arn: Some("arn:aws:ecs:us-east-1:123456789012:task/abc".to_string()),
            ..Default::default()
        };
        let launcher = RecordingLauncher::returning(vec![task.clone()]);

        let response = handle_compile_request(&launcher).await.unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers, crate::response::CorsHeaders::permissive());

        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["success"], serde_json::Value::Bool(true));

        let decoded: Vec<LaunchedTask> =
            serde_json::from_str(body["data"].as_str().unwrap()).unwrap();
        assert_eq!(decoded, vec![task]);
    }

    #[tokio::test]
    async fn it_should_return_the_launcher_error_unchanged() {
        let err = handle_compile_request(&FailingLauncher).await.unwrap_err();

        assert_eq!(err.to_string(), "AccessDeniedException");
        assert_matches!(err.downcast_ref::<StubFailure>(), Some(StubFailure { code }) => {
            assert_eq!(code, "AccessDeniedException");
        });
    }
}
