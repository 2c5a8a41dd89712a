use serde::{Deserialize, Serialize};

/// A task descriptor as reported by ECS after a run request.
///
/// This is the serializable projection of [aws_sdk_ecs::types::Task] that ends up in
/// the response body. Callers do not interpret it beyond serialization, so absent
/// fields are omitted rather than emitted as null.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LaunchedTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_arn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_arn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition_arn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl From<&aws_sdk_ecs::types::Task> for LaunchedTask {
    fn from(task: &aws_sdk_ecs::types::Task) -> Self {
        LaunchedTask {
            task_arn: task.task_arn().map(str::to_string),
            cluster_arn: task.cluster_arn().map(str::to_string),
            task_definition_arn: task.task_definition_arn().map(str::to_string),
            last_status: task.last_status().map(str::to_string),
            desired_status: task.desired_status().map(str::to_string),
            launch_type: task.launch_type().map(|lt| lt.as_str().to_string()),
            started_by: task.started_by().map(str::to_string),
            group: task.group().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_omit_absent_fields() {
        let task = LaunchedTask {
            task_arn: Some("arn:aws:ecs:us-east-1:123456789012:task/abc".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_string(&task).unwrap(),
            r#"{"taskArn":"arn:aws:ecs:us-east-1:123456789012:task/abc"}"#
        );
    }

    #[test]
    fn it_should_project_the_sdk_task() {
        let sdk_task = aws_sdk_ecs::types::Task::builder()
            .task_arn("arn:aws:ecs:us-east-1:123456789012:task/abc")
            .cluster_arn("arn:aws:ecs:us-east-1:123456789012:cluster/sol2iele-cluster")
            .last_status("PENDING")
            .desired_status("RUNNING")
            .launch_type(aws_sdk_ecs::types::LaunchType::Ec2)
            .build();

        let task = LaunchedTask::from(&sdk_task);

        assert_eq!(
            task.task_arn.as_deref(),
            Some("arn:aws:ecs:us-east-1:123456789012:task/abc")
        );
        assert_eq!(task.last_status.as_deref(), Some("PENDING"));
        assert_eq!(task.desired_status.as_deref(), Some("RUNNING"));
        assert_eq!(task.launch_type.as_deref(), Some("EC2"));
        assert_eq!(task.started_by, None);
    }
}
