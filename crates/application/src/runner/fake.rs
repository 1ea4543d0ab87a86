//! In-process stand-ins for the service under test.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use flowcheck_domain::{HttpMethod, RequestSpec, ResponseSpec};
use serde_json::{Value, json};

use super::cors::EXPECTED_CORS_HEADERS;
use crate::ports::{HttpClient, HttpClientError};

/// Client whose responses come from a plain function.
pub struct FnClient<F>(pub F)
where
    F: Fn(&RequestSpec) -> Result<ResponseSpec, HttpClientError> + Send + Sync;

#[async_trait]
impl<F> HttpClient for FnClient<F>
where
    F: Fn(&RequestSpec) -> Result<ResponseSpec, HttpClientError> + Send + Sync,
{
    async fn execute(&self, request: &RequestSpec) -> Result<ResponseSpec, HttpClientError> {
        (self.0)(request)
    }
}

/// Builds a JSON response carrying the CORS headers.
pub fn json_response(status: u16, body: &Value) -> ResponseSpec {
    let mut headers: HashMap<String, String> = EXPECTED_CORS_HEADERS
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    ResponseSpec::new(
        status,
        headers,
        body.to_string().as_bytes(),
        Duration::from_millis(5),
    )
}

/// One well-formed micro-task as the service would emit it.
pub fn micro_task(parent: &str, order: usize) -> Value {
    json!({
        "id": format!("task-{order}"),
        "parentTask": parent,
        "title": format!("Step {order}"),
        "estimatedTime": 10,
        "difficulty": "easy",
        "xpReward": 15,
        "completed": false,
        "order": order,
    })
}

/// Answers every request the way the documented contract says it should.
pub fn contract_service(request: &RequestSpec) -> Result<ResponseSpec, HttpClientError> {
    let response = match (request.method, request.path.as_str()) {
        (HttpMethod::Get, "/health") => json_response(
            200,
            &json!({"status": "ok", "app": "FocusFlow API", "version": "1.0.0"}),
        ),
        (HttpMethod::Options, _) => json_response(200, &Value::Null),
        (HttpMethod::Post, "/tasks/breakdown") => {
            let task = request
                .json
                .as_ref()
                .and_then(|body| body.get("task"))
                .and_then(Value::as_str)
                .filter(|t| !t.is_empty());
            match task {
                Some(task) => {
                    let tasks: Vec<Value> = (0..4).map(|i| micro_task(task, i)).collect();
                    json_response(200, &json!({"success": true, "tasks": tasks}))
                }
                None => json_response(400, &json!({"error": "Task description is required"})),
            }
        }
        _ => json_response(404, &json!({"error": "Not found"})),
    };
    Ok(response)
}
