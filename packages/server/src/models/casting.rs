use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Artist, Demo};
use crate::error::AppError;
use crate::models::shared::required;
use crate::services::casting::CastingFilter;

#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CastingRequest {
    /// Demo type to cast for.
    #[schema(example = 2)]
    pub tag_id: Option<i32>,
    /// Restrict to one job. `0` applies no filter.
    pub job_id: Option<i32>,
    /// Substring of the artist nickname (case-sensitive).
    #[schema(example = "lei")]
    pub avatar_name: Option<String>,
    /// Inclusive salary lower bound.
    pub price_low: Option<i64>,
    /// Inclusive salary upper bound.
    pub price_high: Option<i64>,
}

pub fn validate_casting(payload: CastingRequest) -> Result<CastingFilter, AppError> {
    Ok(CastingFilter {
        tag_id: required(payload.tag_id, "tagId")?,
        job_id: payload.job_id.filter(|job| *job != 0),
        nick_name_contains: payload.avatar_name.filter(|name| !name.is_empty()),
        price_low: payload.price_low,
        price_high: payload.price_high,
    })
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditionResponse {
    pub demo_id: i32,
    pub artist_id: i32,
    pub demo_type: i32,
    pub file_url: String,
    /// The artist's nickname.
    pub artist_name: String,
    pub artist_avatar: String,
    pub salary: i32,
}

impl From<(Demo, Artist)> for AuditionResponse {
    fn from((demo, artist): (Demo, Artist)) -> Self {
        Self {
            demo_id: demo.id,
            artist_id: artist.id,
            demo_type: demo.demo_type,
            file_url: demo.file_url,
            artist_name: artist.nick_name,
            artist_avatar: artist.avatar,
            salary: artist.salary,
        }
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct CastingResponse {
    pub auditions: Vec<AuditionResponse>,
}
