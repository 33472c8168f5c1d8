//! Blocking HTTP transport backed by ureq.

use std::time::Duration;

use todo_list_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};
use tracing::trace;

/// Executes core requests with a shared ureq agent.
///
/// ureq's status-as-error behavior is disabled so 4xx/5xx come back as data
/// and the core client interprets them.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        trace!(method = %req.method, path = %req.path, "sending request");
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, body) => {
                let mut builder = self.agent.post(&req.path);
                for (key, value) in &req.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
            (HttpMethod::Put, body) => {
                let mut builder = self.agent.put(&req.path);
                for (key, value) in &req.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        trace!(status, "received response");
        Ok(HttpResponse::new(status, body))
    }
}
