use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AiActionDto {
    Summarize,
    #[default]
    Refine,
    Expand,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RefineTextDto {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub action: Option<AiActionDto>,
    /// Custom instruction replacing the built-in prompt for the action.
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RefinedTextDto {
    pub original_text: String,
    pub generated_text: String,
    pub action: AiActionDto,
    pub model: String,
}
