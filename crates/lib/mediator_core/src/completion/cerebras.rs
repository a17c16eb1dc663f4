//! Cerebras completion provider.
//!
//! Calls the OpenAI-compatible chat completions API
//! (`{base_url}/chat/completions`) once per request. No retries.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::CompletionConfig;
use super::{CompletionClient, CompletionError, CompletionRequest};

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatCompletionMessage<'a>; 1],
    max_tokens: u32,
    temperature: f32,
    stream: bool,
}

#[derive(Serialize)]
struct ChatCompletionMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionReply,
}

#[derive(Deserialize)]
struct ChatCompletionReply {
    content: Option<String>,
}

/// Chat completions client for the Cerebras inference API.
#[derive(Clone)]
pub struct CerebrasClient {
    http: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl CerebrasClient {
    /// Builds a client from resolved config.
    ///
    /// Returns `Ok(None)` when no API key is configured.
    pub fn from_config(config: &CompletionConfig) -> Result<Option<Self>, CompletionError> {
        let Some(api_key) = config.api_key.clone() else {
            return Ok(None);
        };

        let base: url::Url = config
            .base_url
            .parse()
            .map_err(|e| CompletionError::Config(format!("Invalid base URL: {e}")))?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| CompletionError::Config(format!("HTTP client build failed: {e}")))?;

        Ok(Some(Self {
            http,
            endpoint: format!("{}/chat/completions", base.as_str().trim_end_matches('/')),
            api_key,
            model: config.model.clone(),
        }))
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionClient for CerebrasClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        debug!(
            model = %request.model,
            prompt_len = request.prompt.len(),
            "requesting completion"
        );

        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&ChatCompletionRequest {
                model: &request.model,
                messages: [ChatCompletionMessage {
                    role: "user",
                    content: &request.prompt,
                }],
                max_tokens: request.max_tokens,
                temperature: request.temperature,
                stream: request.stream,
            })
            .send()
            .await
            .map_err(|e| CompletionError::Transport(format!("Cerebras request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(CompletionError::Provider { status, body });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| CompletionError::Transport(format!("Cerebras body read failed: {e}")))?;

        extract_content(&body)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

/// Pulls `choices[0].message.content` out of a chat completions body.
fn extract_content(body: &str) -> Result<String, CompletionError> {
    let data: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| CompletionError::MalformedResponse(format!("Cerebras response parse error: {e}")))?;

    data.choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::MalformedResponse("Cerebras returned no choices".to_string()))?
        .message
        .content
        .ok_or_else(|| {
            CompletionError::MalformedResponse("Cerebras choice has no content".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>, base_url: &str) -> CompletionConfig {
        CompletionConfig {
            api_key: api_key.map(str::to_string),
            base_url: base_url.to_string(),
            model: "llama3.1-8b".to_string(),
            timeout: None,
        }
    }

    #[test]
    fn no_api_key_yields_no_client() {
        let client = CerebrasClient::from_config(&config(None, "https://api.cerebras.ai/v1"));
        assert!(client.unwrap().is_none());
    }

    #[test]
    fn endpoint_appends_chat_completions() {
        let client = CerebrasClient::from_config(&config(Some("k"), "https://api.cerebras.ai/v1/"))
            .unwrap()
            .unwrap();
        assert_eq!(client.endpoint(), "https://api.cerebras.ai/v1/chat/completions");
        assert_eq!(client.model(), "llama3.1-8b");
    }

    #[test]
    fn invalid_base_url_is_config_error() {
        let err = CerebrasClient::from_config(&config(Some("k"), "not a url")).err();
        assert!(matches!(err, Some(CompletionError::Config(_))));
    }

    #[test]
    fn extracts_first_choice_content() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": "hi"}}, {"message": {"content": "other"}}]}"#;
        assert_eq!(extract_content(body).unwrap(), "hi");
    }

    #[test]
    fn missing_choices_is_malformed() {
        let err = extract_content(r#"{"choices": []}"#).unwrap_err();
        assert!(matches!(err, CompletionError::MalformedResponse(_)));

        let err = extract_content(r#"{"id": "x"}"#).unwrap_err();
        assert!(matches!(err, CompletionError::MalformedResponse(_)));
    }

    #[test]
    fn null_content_is_malformed() {
        let err = extract_content(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap_err();
        assert!(matches!(err, CompletionError::MalformedResponse(_)));
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = extract_content("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, CompletionError::MalformedResponse(_)));
    }

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(ChatCompletionRequest {
            model: "llama3.1-8b",
            messages: [ChatCompletionMessage {
                role: "user",
                content: "prompt",
            }],
            max_tokens: 300,
            temperature: 0.7,
            stream: false,
        })
        .unwrap();
        assert_eq!(body["model"], "llama3.1-8b");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "prompt");
        assert_eq!(body["max_tokens"], 300);
        assert_eq!(body["stream"], false);
    }
}
