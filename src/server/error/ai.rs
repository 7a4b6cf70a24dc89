use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AiError {
    /// No Gemini API key configured.
    #[error("funcionalidade de IA não está habilitada")]
    Disabled,

    /// Gemini answered with an error object.
    #[error("erro da API Gemini: {0}")]
    Upstream(String),

    /// Gemini answered without any candidate text.
    #[error("resposta vazia da API Gemini")]
    EmptyResponse,

    /// Transport failure or undecodable response body.
    #[error("erro ao chamar API Gemini: {0}")]
    Request(#[from] reqwest::Error),
}

/// - `Disabled` → 503
/// - everything else → 502, the upstream message is forwarded
impl IntoResponse for AiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Disabled => StatusCode::SERVICE_UNAVAILABLE,
            _ => {
                tracing::warn!("{}", self);
                StatusCode::BAD_GATEWAY
            }
        };

        (status, Json(ErrorDto::new(self.to_string(), status.as_u16()))).into_response()
    }
}
