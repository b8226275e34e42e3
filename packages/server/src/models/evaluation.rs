use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Evaluation, NewEvaluation};
use crate::error::AppError;
use crate::models::shared::required;

/// Minimum length of the long-form `evaluate` text, in characters.
pub const MIN_EVALUATE_CHARS: usize = 30;
pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 10;

#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddEvaluationRequest {
    #[schema(example = "Audition for the spring campaign")]
    pub content: Option<String>,
    /// Client-supplied business timestamp.
    #[schema(example = 1700000000)]
    pub time: Option<i64>,
    #[schema(example = "Director Wang")]
    pub director: Option<String>,
    #[schema(example = 1)]
    pub artist_id: Option<i32>,
    /// Long-form assessment, at least 30 characters.
    pub evaluate: Option<String>,
    #[schema(example = 8, minimum = 1, maximum = 10)]
    pub score: Option<i32>,
}

pub fn validate_add_evaluation(
    payload: AddEvaluationRequest,
    created_at: DateTime<Utc>,
) -> Result<NewEvaluation, AppError> {
    let content = required(payload.content, "content")?;
    let time = required(payload.time, "time")?;
    let director = required(payload.director, "director")?;
    let artist_id = required(payload.artist_id, "artistId")?;
    let evaluate = required(payload.evaluate, "evaluate")?;
    let score = required(payload.score, "score")?;

    if evaluate.chars().count() < MIN_EVALUATE_CHARS {
        return Err(AppError::Validation(format!(
            "evaluate must be at least {MIN_EVALUATE_CHARS} characters"
        )));
    }
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(AppError::Validation(format!(
            "score must be between {MIN_SCORE} and {MAX_SCORE}"
        )));
    }

    Ok(NewEvaluation {
        artist_id,
        time,
        content,
        director,
        score,
        evaluate,
        created_at,
    })
}

#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListEvaluationsRequest {
    #[schema(example = 1)]
    pub artist_id: Option<i32>,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResponse {
    pub eval_id: i32,
    pub artist_id: i32,
    pub time: i64,
    pub content: String,
    pub director: String,
    pub score: i32,
    pub evaluate: String,
}

impl From<Evaluation> for EvaluationResponse {
    fn from(e: Evaluation) -> Self {
        Self {
            eval_id: e.id,
            artist_id: e.artist_id,
            time: e.time,
            content: e.content,
            director: e.director,
            score: e.score,
            evaluate: e.evaluate,
        }
    }
}
