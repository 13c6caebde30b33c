//! Custom Axum extractors.

use crate::error::AppError;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

/// Bearer token from the `Authorization` header.
///
/// Rejects with `401 Unauthorized` when the header is absent or not of the
/// form `Bearer <token>`. Comparing the token against the expected secret
/// is the handler's job.
///
/// # Example
///
/// ```ignore
/// async fn handler(BearerToken(token): BearerToken) -> Result<(), AppError> {
///     verify(&token)?;
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;

        Ok(Self(token.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(value: Option<&str>) -> Result<BearerToken, AppError> {
        let mut builder = Request::builder().uri("/");
        if let Some(v) = value {
            builder = builder.header(http::header::AUTHORIZATION, v);
        }
        let request = builder.body(()).unwrap();
        let (mut parts, ()) = request.into_parts();
        BearerToken::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_extracts_bearer_token() {
        let token = extract(Some("Bearer secret-token")).await.unwrap();
        assert_eq!(token.0, "secret-token");
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        assert!(extract(None).await.is_err());
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_unauthorized() {
        assert!(extract(Some("Basic dXNlcjpwYXNz")).await.is_err());
        assert!(extract(Some("Bearer ")).await.is_err());
    }
}
