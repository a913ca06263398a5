//! Literature API Client
//!
//! Thin async client for the Repo Saga backend. Every call shares one
//! connection pool and the configured timeout; failures are logged once and
//! returned to the caller unchanged. There is no retry.

use crate::error::{LogErr, RequestSnafu, Result};
use crate::services::{ApiConfig, ChatRequest, ChatTurn, LiteraryWork, Presets};
use crate::services::{chat_reply, generate_body};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;
use snafu::ResultExt;
use std::time::Instant;
use tracing::{debug, info};

const GENERATE_PATH: &str = "/generate";
const EXAMPLE_PATH: &str = "/example";
const CHAT_PATH: &str = "/chat";

/// Client for the literature generation service
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client for the given configuration
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context(RequestSnafu { operation: "build" })?;
        Ok(Self { http, config })
    }

    /// Create a client with the base URL taken from the environment
    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Turn a repository into literature.
    ///
    /// Sends `{url, ...presets}` to `POST /generate` and returns the whole
    /// response envelope.
    pub async fn generate(&self, url: &str, presets: &Presets) -> Result<LiteraryWork> {
        self.try_generate(url, presets).await.log_err("generate")
    }

    /// Fetch the showcase work from `GET /example`
    pub async fn get_example(&self) -> Result<LiteraryWork> {
        let request = self.http.get(self.config.endpoint(EXAMPLE_PATH));
        self.send("example", request).await.log_err("example")
    }

    /// Talk to the assistant.
    ///
    /// Returns only the `response` field of the reply. `Ok(None)` means the
    /// server answered successfully but sent no usable text.
    pub async fn chat(
        &self,
        message: &str,
        conversation_history: &[ChatTurn],
        lang: Option<&str>,
        locale: Option<&str>,
    ) -> Result<Option<String>> {
        let body = ChatRequest {
            message,
            conversation_history,
            lang,
            locale,
        };
        let request = self.http.post(self.config.endpoint(CHAT_PATH)).json(&body);
        let envelope: Value = self.send("chat", request).await.log_err("chat")?;

        let reply = chat_reply(&envelope);
        if reply.is_none() {
            debug!("Chat envelope has no response text");
        }
        Ok(reply)
    }

    async fn try_generate(&self, url: &str, presets: &Presets) -> Result<LiteraryWork> {
        let body = generate_body(url, presets)?;
        info!(url, "Requesting literary work");
        let request = self.http.post(self.config.endpoint(GENERATE_PATH)).json(&body);
        self.send("generate", request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T> {
        let started = Instant::now();

        let response = request
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .context(RequestSnafu { operation })?;
        let value = response
            .json::<T>()
            .await
            .context(RequestSnafu { operation })?;

        debug!(
            operation,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "API call succeeded"
        );
        Ok(value)
    }
}
