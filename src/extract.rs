//! A body extractor that accepts both JSON and URL-encoded forms.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// Extracts the request body as `T`, decoding a URL-encoded form when the
/// `Content-Type` header says so and a JSON document otherwise.
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(payload) = Form::<T>::from_request(request, state)
                .await
                .map_err(IntoResponse::into_response)?;

            return Ok(Self(payload));
        }

        let Json(payload) = Json::<T>::from_request(request, state)
            .await
            .map_err(IntoResponse::into_response)?;

        Ok(Self(payload))
    }
}
