//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the chat-completion call that turns extracted page text into
//! an HTML summary.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::errors::PageSumError;
use crate::prompt::build_user_message;

pub const SUMMARY_TEMPERATURE: f64 = 0.7;

/// Produces a natural-language summary of a page.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// # Errors
    ///
    /// Returns `SummarizationError` if the model call fails or yields no text.
    async fn summarize(&self, extracted_text: &str, source_url: &str)
    -> Result<String, PageSumError>;
}

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// LLM API client for generating summaries
pub struct LlmClient {
    api_key: String,
    model_name: String,
    base_url: String,
    instructions: String,
    http: Client,
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns `ConfigurationError` if `api_key` is blank.
    pub fn new(
        api_key: String,
        model_name: String,
        base_url: String,
        instructions: String,
    ) -> Result<Self, PageSumError> {
        if api_key.trim().is_empty() {
            return Err(PageSumError::ConfigurationError(
                "OpenAI API key is required".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            instructions,
            http: Client::new(),
        })
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    #[must_use]
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// System instruction followed by the page text.
    #[must_use]
    pub fn build_prompt(&self, source_url: &str, extracted_text: &str) -> Vec<ChatCompletionMessage> {
        vec![
            ChatCompletionMessage {
                role: MessageRole::system,
                content: Content::Text(self.instructions.clone()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
            ChatCompletionMessage {
                role: MessageRole::user,
                content: Content::Text(build_user_message(source_url, extracted_text)),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
        ]
    }

    /// # Errors
    ///
    /// Returns `SummarizationError` if the HTTP request to `OpenAI` fails, the
    /// status is not a success, or the response has no completion text.
    pub async fn generate_summary(
        &self,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<String, PageSumError> {
        #[cfg(feature = "debug-logs")]
        info!("Using ChatGPT prompt:\n{:?}", prompt);

        let estimated_input_tokens = prompt
            .iter()
            .map(|msg| estimate_tokens(&format!("{:?}", msg.content)))
            .sum::<usize>();

        info!(
            model = %self.model_name,
            "Requesting summary with {} prompt messages (~{} tokens)",
            prompt.len(),
            estimated_input_tokens
        );

        let messages: Vec<Value> = prompt.iter().filter_map(message_json).collect();

        let request_body = json!({
            "model": self.model_name,
            "messages": messages,
            "temperature": SUMMARY_TEMPERATURE
        });

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                PageSumError::SummarizationError(format!("OpenAI API request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PageSumError::SummarizationError(format!(
                "OpenAI API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            PageSumError::SummarizationError(format!("Failed to parse OpenAI response: {}", e))
        })?;

        completion_text(&response_json)
            .ok_or_else(|| PageSumError::SummarizationError("No text in response".to_string()))
    }
}

/// Wire form of a prompt message. Only text content is sent.
fn message_json(msg: &ChatCompletionMessage) -> Option<Value> {
    let role_str = match msg.role {
        MessageRole::system => "system",
        MessageRole::user => "user",
        MessageRole::assistant => "assistant",
        MessageRole::function => "function",
        MessageRole::tool => "tool",
    };

    match &msg.content {
        Content::Text(text) => Some(json!({
            "role": role_str,
            "content": text
        })),
        _ => None,
    }
}

/// Text of the first choice of a chat-completion response.
#[must_use]
pub fn completion_text(response: &Value) -> Option<String> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

#[async_trait]
impl Summarizer for LlmClient {
    async fn summarize(
        &self,
        extracted_text: &str,
        source_url: &str,
    ) -> Result<String, PageSumError> {
        let summary = self
            .generate_summary(self.build_prompt(source_url, extracted_text))
            .await?;
        info!("Generated {} char summary for {}", summary.len(), source_url);
        Ok(summary)
    }
}
