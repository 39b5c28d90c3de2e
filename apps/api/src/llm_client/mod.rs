/// LLM Client: the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All model interactions MUST go through this module.
///
/// Model: gemini-1.5-flash (hardcoded, not configurable)
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::document::InlineImage;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
/// The model used for every analysis.
pub const MODEL: &str = "gemini-1.5-flash";
const MAX_OUTPUT_TOKENS: u32 = 4096;
const MAX_RETRIES: u32 = 3;
const RETRY_BASE_DELAY: Duration = Duration::from_secs(1);
/// Finish reasons that mean the model refused rather than ran dry.
const BLOCKED_FINISH_REASONS: [&str; 5] =
    ["SAFETY", "RECITATION", "BLOCKLIST", "PROHIBITED_CONTENT", "SPII"];

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("Prompt blocked: {reason}")]
    Blocked { reason: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// One multimodal request: free text, the resume page, then the instruction.
#[derive(Debug, Clone)]
pub struct AnalysisPrompt<'a> {
    pub job_description: &'a str,
    pub resume_page: &'a InlineImage,
    pub instruction: &'a str,
}

/// Anything that can answer an `AnalysisPrompt` with text.
///
/// Carried in `AppState` as `Arc<dyn GenerativeModel>`.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, prompt: &AnalysisPrompt<'_>) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text {
        text: &'a str,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData<'a>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl LlmResponse {
    /// Concatenates every text part of the first candidate.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Turns a response into text, distinguishing a blocked prompt from an empty answer.
    pub fn into_text(self) -> Result<String, LlmError> {
        if let Some(text) = self.text() {
            return Ok(text);
        }
        let block_reason = self
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .or_else(|| {
                self.candidates
                    .first()
                    .and_then(|c| c.finish_reason.clone())
                    .filter(|r| BLOCKED_FINISH_REASONS.contains(&r.as_str()))
            });
        match block_reason {
            Some(reason) => Err(LlmError::Blocked { reason }),
            None => Err(LlmError::EmptyContent),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// The single model client used by the service.
/// Wraps the Gemini `generateContent` endpoint with retry logic.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
    retry_base_delay: Duration,
}

impl LlmClient {
    pub fn new(api_key: String, api_base: &str) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()?,
            api_key,
            endpoint: generate_content_url(api_base, MODEL),
            retry_base_delay: RETRY_BASE_DELAY,
        })
    }

    /// Makes a raw call to the Gemini API, returning the full response object.
    /// Retries on 429 (rate limit), 5xx, and transport errors with exponential backoff.
    pub async fn call(&self, prompt: &AnalysisPrompt<'_>) -> Result<LlmResponse, LlmError> {
        let request_body = build_request(prompt);

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = backoff_delay(self.retry_base_delay, attempt);
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.endpoint)
                .header("x-goog-api-key", &self.api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: api_error_message(body),
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message: api_error_message(body),
                });
            }

            let llm_response: LlmResponse = response.json().await?;

            if let Some(usage) = &llm_response.usage_metadata {
                debug!(
                    "LLM call succeeded: prompt_tokens={}, output_tokens={}",
                    usage.prompt_token_count, usage.candidates_token_count
                );
            }

            return Ok(llm_response);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl GenerativeModel for LlmClient {
    async fn generate(&self, prompt: &AnalysisPrompt<'_>) -> Result<String, LlmError> {
        self.call(prompt).await?.into_text()
    }
}

/// Delay before retry number `attempt` (1-based): base, 2 x base, ...
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    base * 2u32.pow(attempt - 1)
}

fn generate_content_url(api_base: &str, model: &str) -> String {
    format!(
        "{}/v1beta/models/{model}:generateContent",
        api_base.trim_end_matches('/')
    )
}

/// Parts go out in a fixed order: job description, resume page, instruction.
/// A blank job description is left out rather than sent as an empty part.
fn build_request<'a>(prompt: &'a AnalysisPrompt<'a>) -> GenerateContentRequest<'a> {
    let mut parts = Vec::with_capacity(3);
    if !prompt.job_description.trim().is_empty() {
        parts.push(Part::Text {
            text: prompt.job_description,
        });
    }
    parts.push(Part::InlineData {
        inline_data: InlineData {
            mime_type: &prompt.resume_page.mime_type,
            data: &prompt.resume_page.data,
        },
    });
    parts.push(Part::Text {
        text: prompt.instruction,
    });

    GenerateContentRequest {
        contents: vec![Content { role: "user", parts }],
        generation_config: GenerationConfig {
            max_output_tokens: MAX_OUTPUT_TOKENS,
        },
    }
}

fn api_error_message(body: String) -> String {
    serde_json::from_str::<GeminiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}
