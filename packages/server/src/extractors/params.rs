use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::models::shared::ParamsBody;

/// Extracts the `params` object of a `{"params": {...}}` JSON body.
///
/// Deserialization failures become `AppError::Validation`, so clients always
/// receive the response envelope.
pub struct Params<T>(pub T);

impl<S, T> FromRequest<S> for Params<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<ParamsBody<T>>::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        Ok(Params(body.params))
    }
}
