//! Storage seam. Handlers and services only talk to these traits, so the
//! SeaORM store can be swapped for the in-memory one in tests.

mod memory;
mod orm;

use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

use crate::domain::{
    Artist, ArtistPatch, Demo, Evaluation, NewArtist, NewDemo, NewEvaluation, NewUser, User,
};

pub use memory::MemoryStore;
pub use orm::SeaOrmStore;

#[derive(Debug, Error)]
pub enum RepoError {
    /// A unique index rejected the write. Carries the entity label.
    #[error("{0} already exists")]
    UniqueViolation(String),
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl From<DbErr> for RepoError {
    fn from(err: DbErr) -> Self {
        RepoError::Backend(err.to_string())
    }
}

pub type RepoResult<T> = Result<T, RepoError>;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_user_by_name(&self, name: &str) -> RepoResult<Option<User>>;
    async fn insert_user(&self, user: NewUser) -> RepoResult<User>;
    async fn count_users(&self) -> RepoResult<u64>;
}

#[async_trait]
pub trait ArtistRepository: Send + Sync {
    async fn find_artist(&self, id: i32) -> RepoResult<Option<Artist>>;
    async fn find_artist_by_nick_name(&self, nick_name: &str) -> RepoResult<Option<Artist>>;

    /// Artists whose job equals `job`, in storage order (id ascending).
    /// `None` matches artists with a NULL job.
    async fn list_artists_by_job(&self, job: Option<i32>) -> RepoResult<Vec<Artist>>;

    async fn insert_artist(&self, artist: NewArtist) -> RepoResult<Artist>;

    /// Apply `patch` atomically. Returns `None` if the artist does not exist.
    async fn update_artist(&self, id: i32, patch: ArtistPatch) -> RepoResult<Option<Artist>>;

    /// Delete the artist together with its demos and evaluations in one unit.
    /// Returns `false` if the artist does not exist.
    async fn delete_artist_cascade(&self, id: i32) -> RepoResult<bool>;
}

#[async_trait]
pub trait DemoRepository: Send + Sync {
    async fn insert_demo(&self, demo: NewDemo) -> RepoResult<Demo>;

    /// Demos of the given type joined with their artist, by demo id ascending.
    async fn list_demos_with_artist(&self, demo_type: i32) -> RepoResult<Vec<(Demo, Artist)>>;
}

#[async_trait]
pub trait EvaluationRepository: Send + Sync {
    async fn insert_evaluation(&self, evaluation: NewEvaluation) -> RepoResult<Evaluation>;

    /// All evaluations of an artist, latest business time first.
    async fn list_evaluations_by_time(&self, artist_id: i32) -> RepoResult<Vec<Evaluation>>;

    async fn count_evaluations(&self, artist_id: i32) -> RepoResult<u64>;

    /// At most `limit` evaluations of an artist, most recently created first.
    async fn recent_evaluations(&self, artist_id: i32, limit: u64) -> RepoResult<Vec<Evaluation>>;
}

/// Everything the service needs from persistence.
pub trait Store: UserRepository + ArtistRepository + DemoRepository + EvaluationRepository {}

impl<T> Store for T where
    T: UserRepository + ArtistRepository + DemoRepository + EvaluationRepository
{
}
