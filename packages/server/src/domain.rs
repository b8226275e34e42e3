//! Plain records handed across the repository seam.
//!
//! Storage backends convert their own row types into these, so services and
//! handlers never see an ORM model.

use chrono::{DateTime, Utc};

use crate::entity;

/// Role id of an administrator account.
pub const ROLE_ADMIN: i32 = 1;
/// Role id of a director account.
pub const ROLE_DIRECTOR: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub password_hash: String,
    pub role: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub password_hash: String,
    pub role: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id: i32,
    pub avatar: String,
    pub name: String,
    pub nick_name: String,
    pub job: i32,
    pub address: String,
    pub id_number: String,
    pub qq: String,
    pub wechat: String,
    pub telephone: String,
    pub emergency_telephone: String,
    pub credit_card_num: String,
    pub recommend_word1: Option<String>,
    pub recommend_word2: Option<String>,
    pub recommend_word3: Option<String>,
    pub identity_card_front: String,
    pub identity_card_reverse: String,
    pub salary: i32,
    pub priority_rating: Option<i32>,
    pub gender: i32,
    /// Creation time in epoch seconds. Zero means unknown.
    pub create_time: i64,
}

impl Artist {
    /// Priority rating with an unset value read as zero.
    pub fn priority(&self) -> i32 {
        self.priority_rating.unwrap_or(0)
    }
}

/// A validated artist ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArtist {
    pub avatar: String,
    pub name: String,
    pub nick_name: String,
    pub job: i32,
    pub address: String,
    pub id_number: String,
    pub qq: String,
    pub wechat: String,
    pub telephone: String,
    pub emergency_telephone: String,
    pub credit_card_num: String,
    pub recommend_word1: Option<String>,
    pub recommend_word2: Option<String>,
    pub recommend_word3: Option<String>,
    pub identity_card_front: String,
    pub identity_card_reverse: String,
    pub salary: i32,
    pub priority_rating: Option<i32>,
    pub gender: i32,
    pub create_time: i64,
}

impl NewArtist {
    pub fn with_id(self, id: i32) -> Artist {
        Artist {
            id,
            avatar: self.avatar,
            name: self.name,
            nick_name: self.nick_name,
            job: self.job,
            address: self.address,
            id_number: self.id_number,
            qq: self.qq,
            wechat: self.wechat,
            telephone: self.telephone,
            emergency_telephone: self.emergency_telephone,
            credit_card_num: self.credit_card_num,
            recommend_word1: self.recommend_word1,
            recommend_word2: self.recommend_word2,
            recommend_word3: self.recommend_word3,
            identity_card_front: self.identity_card_front,
            identity_card_reverse: self.identity_card_reverse,
            salary: self.salary,
            priority_rating: self.priority_rating,
            gender: self.gender,
            create_time: self.create_time,
        }
    }
}

/// Partial update of an artist. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistPatch {
    pub avatar: Option<String>,
    pub name: Option<String>,
    pub nick_name: Option<String>,
    pub job: Option<i32>,
    pub address: Option<String>,
    pub id_number: Option<String>,
    pub qq: Option<String>,
    pub wechat: Option<String>,
    pub telephone: Option<String>,
    pub emergency_telephone: Option<String>,
    pub credit_card_num: Option<String>,
    pub recommend_word1: Option<String>,
    pub recommend_word2: Option<String>,
    pub recommend_word3: Option<String>,
    pub identity_card_front: Option<String>,
    pub identity_card_reverse: Option<String>,
    pub salary: Option<i32>,
    pub priority_rating: Option<i32>,
    pub gender: Option<i32>,
}

impl ArtistPatch {
    pub fn is_empty(&self) -> bool {
        *self == ArtistPatch::default()
    }

    pub fn apply(self, artist: &mut Artist) {
        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }
        fn set_opt<T>(slot: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *slot = value;
            }
        }

        set(&mut artist.avatar, self.avatar);
        set(&mut artist.name, self.name);
        set(&mut artist.nick_name, self.nick_name);
        set(&mut artist.job, self.job);
        set(&mut artist.address, self.address);
        set(&mut artist.id_number, self.id_number);
        set(&mut artist.qq, self.qq);
        set(&mut artist.wechat, self.wechat);
        set(&mut artist.telephone, self.telephone);
        set(&mut artist.emergency_telephone, self.emergency_telephone);
        set(&mut artist.credit_card_num, self.credit_card_num);
        set_opt(&mut artist.recommend_word1, self.recommend_word1);
        set_opt(&mut artist.recommend_word2, self.recommend_word2);
        set_opt(&mut artist.recommend_word3, self.recommend_word3);
        set(&mut artist.identity_card_front, self.identity_card_front);
        set(&mut artist.identity_card_reverse, self.identity_card_reverse);
        set(&mut artist.salary, self.salary);
        set_opt(&mut artist.priority_rating, self.priority_rating);
        set(&mut artist.gender, self.gender);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demo {
    pub id: i32,
    pub artist_id: i32,
    pub demo_type: i32,
    pub file_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDemo {
    pub artist_id: i32,
    pub demo_type: i32,
    pub file_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub id: i32,
    pub artist_id: i32,
    /// Business timestamp supplied by the client.
    pub time: i64,
    pub content: String,
    pub director: String,
    pub score: i32,
    pub evaluate: String,
    /// Server-side insertion time; defines creation order.
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvaluation {
    pub artist_id: i32,
    pub time: i64,
    pub content: String,
    pub director: String,
    pub score: i32,
    pub evaluate: String,
    pub created_at: DateTime<Utc>,
}

impl From<entity::user::Model> for User {
    fn from(model: entity::user::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            password_hash: model.password,
            role: model.role,
        }
    }
}

impl From<entity::artist::Model> for Artist {
    fn from(model: entity::artist::Model) -> Self {
        Self {
            id: model.id,
            avatar: model.avatar,
            name: model.name,
            nick_name: model.nick_name,
            job: model.job,
            address: model.address,
            id_number: model.id_number,
            qq: model.qq,
            wechat: model.wechat,
            telephone: model.telephone,
            emergency_telephone: model.emergency_telephone,
            credit_card_num: model.credit_card_num,
            recommend_word1: model.recommend_word1,
            recommend_word2: model.recommend_word2,
            recommend_word3: model.recommend_word3,
            identity_card_front: model.identity_card_front,
            identity_card_reverse: model.identity_card_reverse,
            salary: model.salary,
            priority_rating: model.priority_rating,
            gender: model.gender,
            create_time: model.create_time,
        }
    }
}

impl From<entity::demo::Model> for Demo {
    fn from(model: entity::demo::Model) -> Self {
        Self {
            id: model.id,
            artist_id: model.artist_id,
            demo_type: model.demo_type,
            file_url: model.file_url,
        }
    }
}

impl From<entity::evaluation::Model> for Evaluation {
    fn from(model: entity::evaluation::Model) -> Self {
        Self {
            id: model.id,
            artist_id: model.artist_id,
            time: model.time,
            content: model.content,
            director: model.director,
            score: model.score,
            evaluate: model.evaluate,
            created_at: model.created_at,
        }
    }
}
