use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;

use super::{
    ArtistRepository, DemoRepository, EvaluationRepository, RepoError, RepoResult,
    UserRepository,
};
use crate::domain::{
    Artist, ArtistPatch, Demo, Evaluation, NewArtist, NewDemo, NewEvaluation, NewUser, User,
};
use crate::entity::{artist, demo, evaluation, user};

/// Relational store backed by a SeaORM connection pool.
#[derive(Clone)]
pub struct SeaOrmStore {
    db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Classify a write failure, naming the entity when a unique index fired.
fn write_error(err: DbErr, entity: &str) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => RepoError::UniqueViolation(entity.into()),
        _ => RepoError::from(err),
    }
}

fn apply_patch(active: &mut artist::ActiveModel, patch: ArtistPatch) {
    if let Some(v) = patch.avatar {
        active.avatar = Set(v);
    }
    if let Some(v) = patch.name {
        active.name = Set(v);
    }
    if let Some(v) = patch.nick_name {
        active.nick_name = Set(v);
    }
    if let Some(v) = patch.job {
        active.job = Set(v);
    }
    if let Some(v) = patch.address {
        active.address = Set(v);
    }
    if let Some(v) = patch.id_number {
        active.id_number = Set(v);
    }
    if let Some(v) = patch.qq {
        active.qq = Set(v);
    }
    if let Some(v) = patch.wechat {
        active.wechat = Set(v);
    }
    if let Some(v) = patch.telephone {
        active.telephone = Set(v);
    }
    if let Some(v) = patch.emergency_telephone {
        active.emergency_telephone = Set(v);
    }
    if let Some(v) = patch.credit_card_num {
        active.credit_card_num = Set(v);
    }
    if let Some(v) = patch.recommend_word1 {
        active.recommend_word1 = Set(Some(v));
    }
    if let Some(v) = patch.recommend_word2 {
        active.recommend_word2 = Set(Some(v));
    }
    if let Some(v) = patch.recommend_word3 {
        active.recommend_word3 = Set(Some(v));
    }
    if let Some(v) = patch.identity_card_front {
        active.identity_card_front = Set(v);
    }
    if let Some(v) = patch.identity_card_reverse {
        active.identity_card_reverse = Set(v);
    }
    if let Some(v) = patch.salary {
        active.salary = Set(v);
    }
    if let Some(v) = patch.priority_rating {
        active.priority_rating = Set(Some(v));
    }
    if let Some(v) = patch.gender {
        active.gender = Set(v);
    }
}

#[async_trait]
impl UserRepository for SeaOrmStore {
    async fn find_user_by_name(&self, name: &str) -> RepoResult<Option<User>> {
        let found = user::Entity::find()
            .filter(user::Column::Name.eq(name))
            .one(&self.db)
            .await?;
        Ok(found.map(User::from))
    }

    async fn insert_user(&self, new_user: NewUser) -> RepoResult<User> {
        let model = user::ActiveModel {
            name: Set(new_user.name),
            password: Set(new_user.password_hash),
            role: Set(new_user.role),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "User"))?;

        Ok(model.into())
    }

    async fn count_users(&self) -> RepoResult<u64> {
        Ok(user::Entity::find().count(&self.db).await?)
    }
}

#[async_trait]
impl ArtistRepository for SeaOrmStore {
    async fn find_artist(&self, id: i32) -> RepoResult<Option<Artist>> {
        let found = artist::Entity::find_by_id(id).one(&self.db).await?;
        Ok(found.map(Artist::from))
    }

    async fn find_artist_by_nick_name(&self, nick_name: &str) -> RepoResult<Option<Artist>> {
        let found = artist::Entity::find()
            .filter(artist::Column::NickName.eq(nick_name))
            .one(&self.db)
            .await?;
        Ok(found.map(Artist::from))
    }

    async fn list_artists_by_job(&self, job: Option<i32>) -> RepoResult<Vec<Artist>> {
        let select = match job {
            Some(job) => artist::Entity::find().filter(artist::Column::Job.eq(job)),
            None => artist::Entity::find().filter(artist::Column::Job.is_null()),
        };

        let rows = select
            .order_by_asc(artist::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Artist::from).collect())
    }

    async fn insert_artist(&self, new_artist: NewArtist) -> RepoResult<Artist> {
        let model = artist::ActiveModel {
            avatar: Set(new_artist.avatar),
            name: Set(new_artist.name),
            nick_name: Set(new_artist.nick_name),
            job: Set(new_artist.job),
            address: Set(new_artist.address),
            id_number: Set(new_artist.id_number),
            qq: Set(new_artist.qq),
            wechat: Set(new_artist.wechat),
            telephone: Set(new_artist.telephone),
            emergency_telephone: Set(new_artist.emergency_telephone),
            credit_card_num: Set(new_artist.credit_card_num),
            recommend_word1: Set(new_artist.recommend_word1),
            recommend_word2: Set(new_artist.recommend_word2),
            recommend_word3: Set(new_artist.recommend_word3),
            identity_card_front: Set(new_artist.identity_card_front),
            identity_card_reverse: Set(new_artist.identity_card_reverse),
            salary: Set(new_artist.salary),
            priority_rating: Set(new_artist.priority_rating),
            gender: Set(new_artist.gender),
            create_time: Set(new_artist.create_time),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| write_error(e, "Artist"))?;

        Ok(model.into())
    }

    async fn update_artist(&self, id: i32, patch: ArtistPatch) -> RepoResult<Option<Artist>> {
        let txn = self.db.begin().await?;

        let Some(existing) = artist::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        if patch.is_empty() {
            return Ok(Some(existing.into()));
        }

        let mut active: artist::ActiveModel = existing.into();
        apply_patch(&mut active, patch);

        let model = active
            .update(&txn)
            .await
            .map_err(|e| write_error(e, "Artist"))?;
        txn.commit().await?;

        Ok(Some(model.into()))
    }

    async fn delete_artist_cascade(&self, id: i32) -> RepoResult<bool> {
        let txn = self.db.begin().await?;

        if artist::Entity::find_by_id(id).one(&txn).await?.is_none() {
            return Ok(false);
        }

        demo::Entity::delete_many()
            .filter(demo::Column::ArtistId.eq(id))
            .exec(&txn)
            .await?;
        evaluation::Entity::delete_many()
            .filter(evaluation::Column::ArtistId.eq(id))
            .exec(&txn)
            .await?;
        artist::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(true)
    }
}

#[async_trait]
impl DemoRepository for SeaOrmStore {
    async fn insert_demo(&self, new_demo: NewDemo) -> RepoResult<Demo> {
        let model = demo::ActiveModel {
            artist_id: Set(new_demo.artist_id),
            demo_type: Set(new_demo.demo_type),
            file_url: Set(new_demo.file_url),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(model.into())
    }

    async fn list_demos_with_artist(&self, demo_type: i32) -> RepoResult<Vec<(Demo, Artist)>> {
        let rows = demo::Entity::find()
            .filter(demo::Column::DemoType.eq(demo_type))
            .find_also_related(artist::Entity)
            .order_by_asc(demo::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(d, a)| a.map(|a| (Demo::from(d), Artist::from(a))))
            .collect())
    }
}

#[async_trait]
impl EvaluationRepository for SeaOrmStore {
    async fn insert_evaluation(&self, new_eval: NewEvaluation) -> RepoResult<Evaluation> {
        let model = evaluation::ActiveModel {
            artist_id: Set(new_eval.artist_id),
            time: Set(new_eval.time),
            content: Set(new_eval.content),
            director: Set(new_eval.director),
            score: Set(new_eval.score),
            evaluate: Set(new_eval.evaluate),
            created_at: Set(new_eval.created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(model.into())
    }

    async fn list_evaluations_by_time(&self, artist_id: i32) -> RepoResult<Vec<Evaluation>> {
        let rows = evaluation::Entity::find()
            .filter(evaluation::Column::ArtistId.eq(artist_id))
            .order_by_desc(evaluation::Column::Time)
            .order_by_desc(evaluation::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Evaluation::from).collect())
    }

    async fn count_evaluations(&self, artist_id: i32) -> RepoResult<u64> {
        Ok(evaluation::Entity::find()
            .filter(evaluation::Column::ArtistId.eq(artist_id))
            .count(&self.db)
            .await?)
    }

    async fn recent_evaluations(&self, artist_id: i32, limit: u64) -> RepoResult<Vec<Evaluation>> {
        let rows = evaluation::Entity::find()
            .filter(evaluation::Column::ArtistId.eq(artist_id))
            .order_by_desc(evaluation::Column::CreatedAt)
            .order_by_desc(evaluation::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Evaluation::from).collect())
    }
}
