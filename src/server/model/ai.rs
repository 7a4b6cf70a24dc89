//! Text generation request and result.

use crate::model::ai::{AiActionDto, RefineTextDto, RefinedTextDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiAction {
    Summarize,
    #[default]
    Refine,
    Expand,
}

impl AiAction {
    /// Instruction sent ahead of the text when no custom prompt is given.
    pub const fn default_prompt(self) -> &'static str {
        match self {
            Self::Summarize => {
                "Resuma o texto a seguir de forma clara e objetiva, mantendo as informações principais."
            }
            Self::Refine => {
                "Melhore a clareza, a gramática e o estilo do texto a seguir, mantendo o significado original."
            }
            Self::Expand => {
                "Expanda o texto a seguir com mais detalhes e contexto, mantendo um tom profissional."
            }
        }
    }

    fn from_dto(dto: AiActionDto) -> Self {
        match dto {
            AiActionDto::Summarize => Self::Summarize,
            AiActionDto::Refine => Self::Refine,
            AiActionDto::Expand => Self::Expand,
        }
    }

    fn into_dto(self) -> AiActionDto {
        match self {
            Self::Summarize => AiActionDto::Summarize,
            Self::Refine => AiActionDto::Refine,
            Self::Expand => AiActionDto::Expand,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RefineTextParam {
    pub text: String,
    pub action: AiAction,
    /// Replaces the action's built-in instruction.
    pub prompt: Option<String>,
}

impl RefineTextParam {
    pub fn from_dto(dto: RefineTextDto) -> Self {
        Self {
            text: dto.text,
            action: dto.action.map(AiAction::from_dto).unwrap_or_default(),
            prompt: dto
                .prompt
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
        }
    }

    /// Instruction actually sent: the custom prompt if any, else the action default.
    pub fn instruction(&self) -> &str {
        self.prompt
            .as_deref()
            .unwrap_or_else(|| self.action.default_prompt())
    }
}

#[derive(Debug, Clone)]
pub struct RefinedText {
    pub original_text: String,
    pub generated_text: String,
    pub action: AiAction,
    pub model: String,
}

impl RefinedText {
    pub fn into_dto(self) -> RefinedTextDto {
        RefinedTextDto {
            original_text: self.original_text,
            generated_text: self.generated_text,
            action: self.action.into_dto(),
            model: self.model,
        }
    }
}
