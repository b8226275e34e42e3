use tracing::info;

use crate::domain::{Demo, NewDemo};
use crate::error::AppError;
use crate::repository::Store;

pub async fn add_demo(store: &dyn Store, demo: NewDemo) -> Result<Demo, AppError> {
    if store.find_artist(demo.artist_id).await?.is_none() {
        return Err(AppError::NotFound("Artist not found".into()));
    }
    let demo = store.insert_demo(demo).await?;
    info!(demo_id = demo.id, artist_id = demo.artist_id, "Demo registered");
    Ok(demo)
}
