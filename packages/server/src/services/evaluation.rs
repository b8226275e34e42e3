use tracing::info;

use crate::domain::{Evaluation, NewEvaluation};
use crate::error::AppError;
use crate::repository::Store;

pub async fn add_evaluation(
    store: &dyn Store,
    evaluation: NewEvaluation,
) -> Result<Evaluation, AppError> {
    if store.find_artist(evaluation.artist_id).await?.is_none() {
        return Err(AppError::NotFound("Artist not found".into()));
    }
    let evaluation = store.insert_evaluation(evaluation).await?;
    info!(
        eval_id = evaluation.id,
        artist_id = evaluation.artist_id,
        score = evaluation.score,
        "Evaluation recorded"
    );
    Ok(evaluation)
}

/// Every evaluation of the artist, latest business time first. An unknown
/// artist simply has none.
pub async fn list_evaluations(store: &dyn Store, artist_id: i32) -> Result<Vec<Evaluation>, AppError> {
    Ok(store.list_evaluations_by_time(artist_id).await?)
}
