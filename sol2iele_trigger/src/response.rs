use serde::{Deserialize, Serialize};

use crate::task::LaunchedTask;

/// The HTTP-shaped envelope the trigger hands back to the invoking gateway.
///
/// The task list is serialized into the `data` string of the body, which is itself
/// serialized into the `body` string. The double encoding is part of the published
/// contract of this endpoint and consumers decode it in two steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TriggerResponse {
    pub status_code: u16,
    pub headers: CorsHeaders,
    pub body: String,
}

/// The CORS header pair required for browser callers of the gateway endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorsHeaders {
    /// Required for CORS support to work
    #[serde(rename = "Access-Control-Allow-Origin")]
    pub allow_origin: String,

    /// Required for cookies, authorization headers with HTTPS
    #[serde(rename = "Access-Control-Allow-Credentials")]
    pub allow_credentials: bool,
}

impl CorsHeaders {
    pub fn permissive() -> Self {
        CorsHeaders {
            allow_origin: "*".to_string(),
            allow_credentials: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ResponseBody {
    success: bool,
    data: String,
}

impl TriggerResponse {
    /// Build the success envelope for a list of launched tasks.
    pub fn ok(tasks: &[LaunchedTask]) -> serde_json::Result<Self> {
        let body = ResponseBody {
            success: true,
            data: serde_json::to_string(tasks)?,
        };

        Ok(TriggerResponse {
            status_code: 200,
            headers: CorsHeaders::permissive(),
            body: serde_json::to_string(&body)?,
        })
    }
}
