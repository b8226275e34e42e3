use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{
    ArtistRepository, DemoRepository, EvaluationRepository, RepoError, RepoResult,
    UserRepository,
};
use crate::domain::{
    Artist, ArtistPatch, Demo, Evaluation, NewArtist, NewDemo, NewEvaluation, NewUser, User,
};

#[derive(Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    artists: BTreeMap<i32, Artist>,
    demos: BTreeMap<i32, Demo>,
    evaluations: BTreeMap<i32, Evaluation>,
    last_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }

    fn nick_name_taken(&self, nick_name: &str, except: Option<i32>) -> bool {
        self.artists
            .values()
            .any(|a| a.nick_name == nick_name && Some(a.id) != except)
    }

    fn require_artist(&self, artist_id: i32) -> RepoResult<()> {
        if self.artists.contains_key(&artist_id) {
            Ok(())
        } else {
            Err(RepoError::Backend(format!(
                "foreign key violation: artist {artist_id} does not exist"
            )))
        }
    }
}

/// In-memory store with the same semantics as the relational one.
///
/// Every operation runs under a single lock acquisition, so multi-row writes
/// are atomic. Ids come from one shared counter.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) async fn demo_count(&self, artist_id: i32) -> usize {
        let tables = self.tables.read().await;
        tables
            .demos
            .values()
            .filter(|d| d.artist_id == artist_id)
            .count()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_user_by_name(&self, name: &str) -> RepoResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.name == name).cloned())
    }

    async fn insert_user(&self, new_user: NewUser) -> RepoResult<User> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.name == new_user.name) {
            return Err(RepoError::UniqueViolation("User".into()));
        }
        let user = User {
            id: tables.next_id(),
            name: new_user.name,
            password_hash: new_user.password_hash,
            role: new_user.role,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn count_users(&self) -> RepoResult<u64> {
        Ok(self.tables.read().await.users.len() as u64)
    }
}

#[async_trait]
impl ArtistRepository for MemoryStore {
    async fn find_artist(&self, id: i32) -> RepoResult<Option<Artist>> {
        Ok(self.tables.read().await.artists.get(&id).cloned())
    }

    async fn find_artist_by_nick_name(&self, nick_name: &str) -> RepoResult<Option<Artist>> {
        let tables = self.tables.read().await;
        Ok(tables
            .artists
            .values()
            .find(|a| a.nick_name == nick_name)
            .cloned())
    }

    async fn list_artists_by_job(&self, job: Option<i32>) -> RepoResult<Vec<Artist>> {
        // Stored jobs are never NULL, so `None` matches nothing.
        let Some(job) = job else {
            return Ok(Vec::new());
        };
        let tables = self.tables.read().await;
        Ok(tables
            .artists
            .values()
            .filter(|a| a.job == job)
            .cloned()
            .collect())
    }

    async fn insert_artist(&self, new_artist: NewArtist) -> RepoResult<Artist> {
        let mut tables = self.tables.write().await;
        if tables.nick_name_taken(&new_artist.nick_name, None) {
            return Err(RepoError::UniqueViolation("Artist".into()));
        }
        let artist = new_artist.with_id(tables.next_id());
        tables.artists.insert(artist.id, artist.clone());
        Ok(artist)
    }

    async fn update_artist(&self, id: i32, patch: ArtistPatch) -> RepoResult<Option<Artist>> {
        let mut tables = self.tables.write().await;
        if let Some(ref nick_name) = patch.nick_name
            && tables.artists.contains_key(&id)
            && tables.nick_name_taken(nick_name, Some(id))
        {
            return Err(RepoError::UniqueViolation("Artist".into()));
        }

        let Some(artist) = tables.artists.get_mut(&id) else {
            return Ok(None);
        };
        patch.apply(artist);
        Ok(Some(artist.clone()))
    }

    async fn delete_artist_cascade(&self, id: i32) -> RepoResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.artists.remove(&id).is_none() {
            return Ok(false);
        }
        tables.demos.retain(|_, d| d.artist_id != id);
        tables.evaluations.retain(|_, e| e.artist_id != id);
        Ok(true)
    }
}

#[async_trait]
impl DemoRepository for MemoryStore {
    async fn insert_demo(&self, new_demo: NewDemo) -> RepoResult<Demo> {
        let mut tables = self.tables.write().await;
        tables.require_artist(new_demo.artist_id)?;
        let demo = Demo {
            id: tables.next_id(),
            artist_id: new_demo.artist_id,
            demo_type: new_demo.demo_type,
            file_url: new_demo.file_url,
        };
        tables.demos.insert(demo.id, demo.clone());
        Ok(demo)
    }

    async fn list_demos_with_artist(&self, demo_type: i32) -> RepoResult<Vec<(Demo, Artist)>> {
        let tables = self.tables.read().await;
        Ok(tables
            .demos
            .values()
            .filter(|d| d.demo_type == demo_type)
            .filter_map(|d| {
                tables
                    .artists
                    .get(&d.artist_id)
                    .map(|a| (d.clone(), a.clone()))
            })
            .collect())
    }
}

#[async_trait]
impl EvaluationRepository for MemoryStore {
    async fn insert_evaluation(&self, new_eval: NewEvaluation) -> RepoResult<Evaluation> {
        let mut tables = self.tables.write().await;
        tables.require_artist(new_eval.artist_id)?;
        let evaluation = Evaluation {
            id: tables.next_id(),
            artist_id: new_eval.artist_id,
            time: new_eval.time,
            content: new_eval.content,
            director: new_eval.director,
            score: new_eval.score,
            evaluate: new_eval.evaluate,
            created_at: new_eval.created_at,
        };
        tables.evaluations.insert(evaluation.id, evaluation.clone());
        Ok(evaluation)
    }

    async fn list_evaluations_by_time(&self, artist_id: i32) -> RepoResult<Vec<Evaluation>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<Evaluation> = tables
            .evaluations
            .values()
            .filter(|e| e.artist_id == artist_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.time.cmp(&a.time).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn count_evaluations(&self, artist_id: i32) -> RepoResult<u64> {
        let tables = self.tables.read().await;
        Ok(tables
            .evaluations
            .values()
            .filter(|e| e.artist_id == artist_id)
            .count() as u64)
    }

    async fn recent_evaluations(&self, artist_id: i32, limit: u64) -> RepoResult<Vec<Evaluation>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<Evaluation> = tables
            .evaluations
            .values()
            .filter(|e| e.artist_id == artist_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        rows.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(rows)
    }
}
