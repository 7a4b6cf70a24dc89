//! Body, path and query extractors that answer malformed input with the JSON error envelope.
//!
//! They wrap axum's `Json`, `Path` and `Query` and turn every rejection into
//! `AppError::BadRequest`, so a client never sees axum's plain-text 400/422 bodies.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts, Request,
    },
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};

use crate::server::error::AppError;

pub const INVALID_PAYLOAD: &str = "Payload inválido";
pub const INVALID_ID: &str = "ID inválido";
pub const INVALID_QUERY: &str = "Parâmetros de consulta inválidos";

/// JSON request body, or JSON response when returned from a handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

/// Path parameters.
#[derive(Debug, Clone, Copy)]
pub struct Path<T>(pub T);

/// Query string parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<T>(pub T);

impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = axum::Json::<T>::from_request(req, state).await?.0;

        Ok(Self(value))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let value = axum::extract::Path::<T>::from_request_parts(parts, state)
            .await?
            .0;

        Ok(Self(value))
    }
}

impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let value = axum::extract::Query::<T>::from_request_parts(parts, state)
            .await?
            .0;

        Ok(Self(value))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        Self::bad_request(INVALID_PAYLOAD)
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Rejected path parameters: {}", rejection.body_text());
        Self::bad_request(INVALID_ID)
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("Rejected query string: {}", rejection.body_text());
        Self::bad_request(INVALID_QUERY)
    }
}

#[cfg(test)]
mod test {
    use axum::{
        body::Body,
        extract::{FromRequest, FromRequestParts},
        http::{header::CONTENT_TYPE, Request},
    };
    use serde::Deserialize;

    use super::{Json, Query, INVALID_PAYLOAD, INVALID_QUERY};
    use crate::server::error::AppError;

    #[derive(Debug, Deserialize)]
    struct Login {
        email: String,
    }

    #[derive(Debug, Deserialize)]
    struct Year {
        year: i32,
    }

    /// Expected: Ok with the decoded body
    #[tokio::test]
    async fn decodes_valid_body() {
        let req = Request::post("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"email":"a@b.com"}"#))
            .unwrap();

        let Json(login) = Json::<Login>::from_request(req, &()).await.unwrap();

        assert_eq!(login.email, "a@b.com");
    }

    /// Expected: Err(BadRequest) when a field has the wrong JSON type
    #[tokio::test]
    async fn wrong_field_type_is_bad_request() {
        let req = Request::post("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"email":5}"#))
            .unwrap();

        let result = Json::<Login>::from_request(req, &()).await;

        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == INVALID_PAYLOAD));
    }

    /// Expected: Err(BadRequest) when the content type header is missing
    #[tokio::test]
    async fn missing_content_type_is_bad_request() {
        let req = Request::post("/")
            .body(Body::from(r#"{"email":"a@b.com"}"#))
            .unwrap();

        let result = Json::<Login>::from_request(req, &()).await;

        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == INVALID_PAYLOAD));
    }

    /// Expected: Ok for a numeric year, Err(BadRequest) when the value does not parse
    #[tokio::test]
    async fn unparsable_query_is_bad_request() {
        let (mut parts, _) = Request::get("/?year=2026").body(()).unwrap().into_parts();
        let Query(query) = Query::<Year>::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(query.year, 2026);

        let (mut parts, _) = Request::get("/?year=abc").body(()).unwrap().into_parts();

        let result = Query::<Year>::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == INVALID_QUERY));
    }
}
