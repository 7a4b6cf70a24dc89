//! Text generation through the Gemini `generateContent` API.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::server::{
    config::AiSettings,
    error::{ai::AiError, AppError},
    model::ai::{RefineTextParam, RefinedText},
};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const MAX_TEXT_LEN: usize = 10_000;
const MIN_PROMPT_LEN: usize = 5;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<UpstreamError>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct UpstreamError {
    message: String,
}

pub struct AiService<'a> {
    http_client: &'a reqwest::Client,
    settings: &'a AiSettings,
}

impl<'a> AiService<'a> {
    pub fn new(http_client: &'a reqwest::Client, settings: &'a AiSettings) -> Self {
        Self {
            http_client,
            settings,
        }
    }

    /// Checks the request before anything is sent upstream.
    ///
    /// # Returns
    /// - `Ok(())` - Text and prompt acceptable
    /// - `Err(AppError::BadRequest)` - Empty or oversized text, or custom prompt too short
    pub fn validate(param: &RefineTextParam) -> Result<(), AppError> {
        if param.text.trim().is_empty() {
            return Err(AppError::bad_request("texto não pode estar vazio"));
        }
        if param.text.chars().count() > MAX_TEXT_LEN {
            return Err(AppError::bad_request(
                "texto muito longo (máximo 10000 caracteres)",
            ));
        }
        if let Some(prompt) = &param.prompt {
            if prompt.chars().count() < MIN_PROMPT_LEN {
                return Err(AppError::bad_request(
                    "prompt muito curto (mínimo 5 caracteres)",
                ));
            }
        }

        Ok(())
    }

    /// Sends the text with the action's instruction to Gemini and returns the completion.
    ///
    /// The call is bounded by `ai.request_timeout`. No retries are made.
    ///
    /// # Returns
    /// - `Ok(RefinedText)` - Generated text
    /// - `Err(AppError::BadRequest)` - Validation failed
    /// - `Err(AppError::AiErr(Disabled))` - No API key configured
    /// - `Err(AppError::AiErr(_))` - Transport failure, upstream error or empty answer
    pub async fn refine_text(&self, param: RefineTextParam) -> Result<RefinedText, AppError> {
        if self.settings.gemini_api_key.is_empty() {
            return Err(AiError::Disabled.into());
        }
        Self::validate(&param)?;

        let full_prompt = format!("{}\n\nTexto:\n{}", param.instruction(), param.text);
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: &full_prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.settings.temperature,
                max_output_tokens: self.settings.max_tokens,
            },
        };

        let url = format!(
            "{}/{}:generateContent",
            GEMINI_BASE_URL, self.settings.gemini_model
        );

        let response: GenerateContentResponse = self
            .http_client
            .post(url)
            .header("X-Goog-Api-Key", &self.settings.gemini_api_key)
            .timeout(Duration::from_secs(self.settings.request_timeout))
            .json(&body)
            .send()
            .await
            .map_err(AiError::from)?
            .json()
            .await
            .map_err(AiError::from)?;

        let generated_text = extract_text(response)?;

        Ok(RefinedText {
            original_text: param.text,
            generated_text,
            action: param.action,
            model: self.settings.gemini_model.clone(),
        })
    }
}

/// Pulls the first candidate's first part out of a Gemini answer.
fn extract_text(response: GenerateContentResponse) -> Result<String, AiError> {
    if let Some(error) = response.error {
        return Err(AiError::Upstream(error.message));
    }

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .map(|p| p.text)
        .ok_or(AiError::EmptyResponse)
}
