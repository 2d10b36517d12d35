//! OpenAI-compatible chat-completions client for assisted tagging.

use std::time::Duration;

use reqwest::blocking::Client as HttpClient;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::tagger::ClassificationClient;
use crate::error::{CorpusError, Result};
use crate::infra::config::TaggerConfig;

const TEMPERATURE: f32 = 0.1;

pub struct OpenAiClassifier {
    client: HttpClient,
    model: String,
    endpoint: String,
    api_key: Option<String>,
    api_key_env: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl OpenAiClassifier {
    /// Build a client from tagger settings. The API key is read from the
    /// configured environment variable now; a missing key surfaces on the
    /// first request.
    pub fn from_config(cfg: &TaggerConfig) -> Result<Self> {
        let client = HttpClient::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            model: cfg.model.clone(),
            endpoint: cfg.endpoint.trim_end_matches('/').to_string(),
            api_key: std::env::var(&cfg.api_key_env).ok().filter(|k| !k.is_empty()),
            api_key_env: cfg.api_key_env.clone(),
        })
    }

    fn headers(&self) -> Result<HeaderMap> {
        let key = self.api_key.as_deref().ok_or_else(|| {
            CorpusError::Classification(format!("no API key in ${}", self.api_key_env))
        })?;
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let bearer = HeaderValue::from_str(&format!("Bearer {key}"))
            .map_err(|e| CorpusError::Classification(format!("invalid API key: {e}")))?;
        headers.insert(AUTHORIZATION, bearer);
        Ok(headers)
    }
}

impl ClassificationClient for OpenAiClassifier {
    fn classify(&self, system_prompt: &str, content: &str) -> Result<String> {
        let headers = self.headers()?;
        let url = format!("{}/chat/completions", self.endpoint);
        let req = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage { role: "system", content: system_prompt },
                ChatMessage { role: "user", content },
            ],
            temperature: TEMPERATURE,
            response_format: ResponseFormat { kind: "json_object" },
        };

        debug!(model = %self.model, chars = content.len(), "classification request");
        let response = self.client.post(url).headers(headers).json(&req).send()?;
        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ErrorResponse>()
                .map(|b| b.error.message)
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(CorpusError::Classification(format!("{status}: {message}")));
        }

        let body: ChatResponse = response.json()?;
        Ok(body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_else(|| "{}".to_string()))
    }
}
