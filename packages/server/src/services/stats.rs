use crate::error::AppError;
use crate::repository::Store;
use crate::services::ranking::{
    NoviceEntry, VETERAN_EVALUATIONS, VeteranEntry, is_novice, is_veteran, sort_novices,
    sort_veterans,
};

/// Artists of `job` who are still novices at `now` (epoch seconds).
pub async fn latest_artists(
    store: &dyn Store,
    job: Option<i32>,
    now: i64,
) -> Result<Vec<NoviceEntry>, AppError> {
    let mut novices = Vec::new();
    for artist in store.list_artists_by_job(job).await? {
        let count = store.count_evaluations(artist.id).await?;
        if is_novice(artist.create_time, count, now) {
            novices.push(NoviceEntry::from(artist));
        }
    }
    sort_novices(&mut novices);
    Ok(novices)
}

/// Veterans of `job`, scored on their latest evaluations.
pub async fn partnership_rank(
    store: &dyn Store,
    job: Option<i32>,
    now: i64,
) -> Result<Vec<VeteranEntry>, AppError> {
    let mut veterans = Vec::new();
    for artist in store.list_artists_by_job(job).await? {
        let recent = store
            .recent_evaluations(artist.id, VETERAN_EVALUATIONS)
            .await?;
        if !is_veteran(artist.create_time, recent.len() as u64, now) {
            continue;
        }
        let scores: Vec<i32> = recent.iter().map(|e| e.score).collect();
        veterans.push(VeteranEntry::new(artist, &scores));
    }
    sort_veterans(&mut veterans);
    Ok(veterans)
}
