use std::time::Duration;

use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::config::AppConfig;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Every session endpoint is called with a JSON content type, bodies or not.
pub fn build_http_client(config: &AppConfig) -> reqwest::Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let mut builder = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers);

    // Zero means "no timeout", same as leaving the field out.
    if let Some(secs) = config.request_timeout_secs.filter(|secs| *secs > 0) {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}
