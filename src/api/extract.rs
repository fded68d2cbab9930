//! Request body extractor accepting either JSON or a urlencoded form.

use axum::{
    Form, Json,
    extract::{
        FromRequest, Request,
        rejection::{FormRejection, JsonRejection},
    },
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::error::ErrorBody;

/// Deserializes the body as JSON when `Content-Type` is `application/json`
/// (or a `+json` subtype), and as a urlencoded form otherwise.
#[derive(Debug)]
pub struct JsonOrForm<T>(pub T);

/// Why the body could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum PayloadRejection {
    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Form(#[from] FormRejection),
}

impl IntoResponse for PayloadRejection {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            PayloadRejection::Json(r) => (r.status(), r.body_text()),
            PayloadRejection::Form(r) => (r.status(), r.body_text()),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = PayloadRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(req.headers()) {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state).await?;
            Ok(Self(value))
        }
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
