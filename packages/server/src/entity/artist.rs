use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "artist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub avatar: String,
    pub name: String,
    #[sea_orm(unique)]
    pub nick_name: String,
    pub job: i32, // job category id
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
    pub gender: i32,      // 0 male, 1 female
    pub create_time: i64, // epoch seconds

    #[sea_orm(has_many)]
    pub demos: HasMany<super::demo::Entity>,

    #[sea_orm(has_many)]
    pub evaluations: HasMany<super::evaluation::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
