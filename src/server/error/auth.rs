use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carries no `auth_token` cookie.
    #[error("Authentication cookie not present")]
    MissingToken,

    /// Cookie present but could not be decrypted or does not hold a user ID.
    ///
    /// Happens when the cookie was tampered with or the encryption key changed since it was
    /// issued.
    #[error("Authentication cookie could not be decrypted")]
    InvalidToken,

    /// Cookie decrypted to a user ID that no longer exists.
    #[error("User {0} from authentication cookie not found in database")]
    UserNotInDatabase(i32),

    /// Login with an unknown email or a wrong password.
    #[error("Invalid credentials for {0}")]
    InvalidCredentials(String),

    /// No permission row of the user's roles matches the requested route.
    #[error("User {user_id} denied access to {method} {path}")]
    AccessDenied {
        user_id: i32,
        method: String,
        path: String,
    },

    /// Argon2 failed to hash or parse a stored hash.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` / `InvalidCredentials` → 401
/// - `AccessDenied` → 403
/// - `PasswordHash` → 500 with a generic message
///
/// The detailed error is logged at debug level; clients only see the fixed message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Token não encontrado"),
            Self::InvalidToken => (StatusCode::UNAUTHORIZED, "Token inválido"),
            Self::UserNotInDatabase(_) => (StatusCode::UNAUTHORIZED, "Usuário não encontrado"),
            Self::InvalidCredentials(_) => (StatusCode::UNAUTHORIZED, "credenciais inválidas"),
            Self::AccessDenied { .. } => (
                StatusCode::FORBIDDEN,
                "Você não tem permissão para acessar este recurso",
            ),
            Self::PasswordHash(_) => {
                tracing::error!("Password hashing failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(ErrorDto::new(message, status.as_u16()))).into_response()
    }
}
