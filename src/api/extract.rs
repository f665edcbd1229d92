use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Request};
use serde::de::DeserializeOwned;

use crate::error::LogisticsError;

/// JSON body extractor whose rejections render as `{"detail": ...}`.
///
/// The body is parsed as JSON whatever the `Content-Type` header says, and
/// any parse failure is a 422.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = LogisticsError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(ApiJson(value))
    }
}

/// Path extractor; non-integer ids are rejected with 422.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(LogisticsError))]
pub struct ApiPath<T>(pub T);
