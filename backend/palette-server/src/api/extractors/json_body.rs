//! JSON body extractor that answers with the API's error shape

use crate::ApiError;

use std::panic::Location;

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use error_location::ErrorLocation;
use serde::de::DeserializeOwned;

/// Like `axum::Json`, but a body that cannot be read as `T` becomes
/// `ApiError::Validation` (422 `{"error": ...}`) instead of axum's plain-text
/// rejection.
///
/// An empty body, or one not sent as JSON, reads as `T::default()` so the
/// handler's field validation names the first missing field.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = is_json_content_type(req.headers());

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation {
                message: rejection.body_text(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(T::default()));
        }

        match Json::<T>::from_bytes(&bytes) {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(ApiError::Validation {
                message: rejection.body_text(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// `application/json` or any `application/*+json`, parameters ignored
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
