use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub name: String,
    pub password: String, // argon2 PHC string
    pub role: i32,        // 1 admin, 2 director

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
