use tracing::info;

use crate::domain::{Artist, ArtistPatch, NewArtist};
use crate::error::AppError;
use crate::repository::Store;

fn artist_not_found() -> AppError {
    AppError::NotFound("Artist not found".into())
}

/// Fails with `Duplicate` when `nick_name` already belongs to an artist.
pub async fn ensure_nick_name_free(store: &dyn Store, nick_name: &str) -> Result<(), AppError> {
    if store.find_artist_by_nick_name(nick_name).await?.is_some() {
        return Err(AppError::Duplicate("Nickname already exists".into()));
    }
    Ok(())
}

pub async fn add_artist(store: &dyn Store, artist: NewArtist) -> Result<Artist, AppError> {
    ensure_nick_name_free(store, &artist.nick_name).await?;
    let artist = store.insert_artist(artist).await?;
    info!(artist_id = artist.id, "Artist created");
    Ok(artist)
}

pub async fn update_artist(store: &dyn Store, id: i32, patch: ArtistPatch) -> Result<(), AppError> {
    if let Some(nick_name) = &patch.nick_name
        && let Some(other) = store.find_artist_by_nick_name(nick_name).await?
        && other.id != id
    {
        return Err(AppError::Duplicate("Nickname already exists".into()));
    }

    store
        .update_artist(id, patch)
        .await?
        .ok_or_else(artist_not_found)?;
    info!(artist_id = id, "Artist updated");
    Ok(())
}

/// Removes the artist with all of its demos and evaluations.
pub async fn delete_artist(store: &dyn Store, id: i32) -> Result<(), AppError> {
    if !store.delete_artist_cascade(id).await? {
        return Err(artist_not_found());
    }
    info!(artist_id = id, "Artist deleted");
    Ok(())
}

pub async fn get_artist(store: &dyn Store, nick_name: &str) -> Result<Artist, AppError> {
    store
        .find_artist_by_nick_name(nick_name)
        .await?
        .ok_or_else(artist_not_found)
}
