//! HTTP backend: tool invocation against a JSON-over-HTTP endpoint.
//!
//! Wire contract: `POST {base_url}/tools/{tool}` with the params object
//! as the JSON body; a 2xx response body is the tool result. Non-2xx
//! statuses and transport errors become [`UpstreamFailure`] values, which
//! is what the fallback rule classifies.

use async_trait::async_trait;

use toolgate_domain::{CallContext, UpstreamFailure};

use super::backend::ToolBackend;

/// Upper bound on error body text carried into failure messages.
const MAX_ERROR_BODY: usize = 512;

pub struct HttpBackend {
    id: String,
    base_url: String,
    client: reqwest::Client,
    bearer_token: Option<String>,
}

impl HttpBackend {
    pub fn new(id: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            base_url: base_url.into(),
            client: reqwest::Client::new(),
            bearer_token: None,
        }
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl ToolBackend for HttpBackend {
    fn id(&self) -> &str {
        &self.id
    }

    async fn probe(&self) -> Result<(), UpstreamFailure> {
        let response = self
            .client
            .get(self.url("health"))
            .send()
            .await
            .map_err(|err| UpstreamFailure::network(err.to_string()))?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(UpstreamFailure::http(status.as_u16(), "health check failed"))
        }
    }

    async fn invoke(
        &self,
        tool: &str,
        params: &serde_json::Value,
        _ctx: &CallContext,
    ) -> Result<serde_json::Value, UpstreamFailure> {
        let mut request = self
            .client
            .post(self.url(&format!("tools/{tool}")))
            .json(params);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| UpstreamFailure::network(err.to_string()))?;
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|err| UpstreamFailure::network(format!("malformed response: {err}")))
        } else {
            let mut body = response.text().await.unwrap_or_default();
            body.truncate(MAX_ERROR_BODY);
            Err(UpstreamFailure::http(status.as_u16(), body))
        }
    }
}
