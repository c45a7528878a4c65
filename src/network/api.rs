use reqwest::Client;

use crate::common::{ClientError, TextPayload};

const CREATE_SESSION: &str = "/create_session";
const MESSAGE: &str = "/message";
const DELETE_SESSION: &str = "/delete";

/// The three session endpoints of the chat server.
#[derive(Debug, Clone)]
pub struct SessionApi {
    http: Client,
    base_url: String,
}

impl SessionApi {
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn create_session(&self) -> Result<String, ClientError> {
        self.post(CREATE_SESSION, None).await
    }

    pub async fn send_message(&self, text: &str) -> Result<String, ClientError> {
        let payload = TextPayload {
            text: text.to_string(),
        };
        self.post(MESSAGE, Some(&payload)).await
    }

    pub async fn end_session(&self) -> Result<String, ClientError> {
        self.post(DELETE_SESSION, None).await
    }

    async fn post(
        &self,
        endpoint: &'static str,
        body: Option<&TextPayload>,
    ) -> Result<String, ClientError> {
        let mut request = self.http.post(format!("{}{endpoint}", self.base_url));
        if let Some(body) = body {
            request = request.json(body);
        }

        // Error statuses are not rejected: a `{ text }` body is shown whatever the status.
        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Request { endpoint, source })?;
        let status = response.status();

        let payload: TextPayload = response
            .json()
            .await
            .map_err(|source| ClientError::Decode { endpoint, source })?;

        log::debug!(
            "{endpoint} replied with status {status} and {} bytes",
            payload.text.len()
        );
        Ok(payload.text)
    }
}
