use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::services::ranking::{NoviceEntry, VeteranEntry};

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct StatsRequest {
    /// Job to list. When omitted only artists without a job qualify, and
    /// since `job` is mandatory on creation that list is empty.
    #[schema(example = 1)]
    pub job: Option<i32>,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoviceResponse {
    pub artist_id: i32,
    pub avatar: String,
    pub nick_name: String,
    pub recommend_word1: Option<String>,
    pub recommend_word2: Option<String>,
    pub recommend_word3: Option<String>,
    /// Zero when the artist has no rating.
    pub priority_rating: i32,
    #[serde(rename = "create_time")]
    pub create_time: i64,
}

impl From<NoviceEntry> for NoviceResponse {
    fn from(e: NoviceEntry) -> Self {
        Self {
            artist_id: e.artist_id,
            avatar: e.avatar,
            nick_name: e.nick_name,
            recommend_word1: e.recommend_word1,
            recommend_word2: e.recommend_word2,
            recommend_word3: e.recommend_word3,
            priority_rating: e.priority_rating,
            create_time: e.create_time,
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartnershipResponse {
    pub artist_id: i32,
    pub nick_name: String,
    /// Mean of the latest three scores, two decimals; `0.0` without scores.
    #[schema(example = 8.33)]
    pub score: f64,
}

impl From<VeteranEntry> for PartnershipResponse {
    fn from(e: VeteranEntry) -> Self {
        Self {
            artist_id: e.artist_id,
            nick_name: e.nick_name,
            score: e.score,
        }
    }
}
