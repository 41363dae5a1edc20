use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::validation::{check_body, FieldError, Schema};

/// JSON body extractor that reports every schema violation as a 422
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Schema,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BodyRejected {
                status: e.status(),
                message: e.body_text(),
            })?;

        let parsed = check_body::<T>(&bytes).and_then(|value| {
            serde_json::from_value::<T>(value)
                .map_err(|e| vec![FieldError::body(e.to_string(), "value_error")])
        });

        match parsed {
            Ok(value) => Ok(ValidatedJson(value)),
            Err(errors) => {
                let body = String::from_utf8_lossy(&bytes).into_owned();
                tracing::warn!(body = %body, errors = ?errors, "Request validation failed");
                Err(AppError::Validation { errors, body })
            }
        }
    }
}
