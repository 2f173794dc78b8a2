//! Request body extractor for create and update calls.

use std::future::{Future, ready};
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use serde::de::DeserializeOwned;

use crate::middleware::error::AppError;

/// A create/update body, read according to its content type:
///
/// - `application/x-www-form-urlencoded` is parsed as a form.
/// - `application/json` (or `*+json`) is parsed as JSON. An empty body is the default value.
/// - Anything else is ignored and yields the default value, so missing
///   fields surface as validation errors instead of extractor failures.
///
/// Bodies that claim a supported type but cannot be parsed are unhandled
/// failures (500).
pub struct RequestBody<T>(pub T);

impl<T> RequestBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

impl BodyKind {
    fn of(req: &HttpRequest) -> Self {
        let content_type = req.content_type().to_ascii_lowercase();
        if content_type == "application/x-www-form-urlencoded" {
            BodyKind::Form
        } else if content_type == "application/json" || content_type.ends_with("+json") {
            BodyKind::Json
        } else {
            BodyKind::Other
        }
    }
}

impl<T> FromRequest for RequestBody<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match BodyKind::of(req) {
            BodyKind::Form => {
                let form = web::Form::<T>::from_request(req, payload);
                Box::pin(async move {
                    let form = form
                        .await
                        .map_err(|e| actix_web::Error::from(AppError::Internal(e.to_string())))?;
                    Ok::<_, actix_web::Error>(RequestBody(form.into_inner()))
                })
            }
            BodyKind::Json => {
                let bytes = web::Bytes::from_request(req, payload);
                Box::pin(async move {
                    let bytes = bytes.await?;
                    if bytes.iter().all(u8::is_ascii_whitespace) {
                        return Ok(RequestBody(T::default()));
                    }
                    let value = serde_json::from_slice(&bytes).map_err(|e| {
                        actix_web::Error::from(AppError::Internal(format!(
                            "Json deserialize error: {e}"
                        )))
                    })?;
                    Ok::<_, actix_web::Error>(RequestBody(value))
                })
            }
            BodyKind::Other => Box::pin(ready(Ok(RequestBody(T::default())))),
        }
    }
}
