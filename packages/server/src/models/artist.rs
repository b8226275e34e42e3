use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Artist, ArtistPatch, NewArtist};
use crate::error::AppError;
use crate::models::shared::{required, required_text};

/// Artist as exchanged on the wire. Field names follow the client protocol,
/// including the `emergencyTelphone` spelling.
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtistResponse {
    #[schema(example = 1)]
    pub artist_id: i32,
    #[schema(example = "/uploads/1700000000000_avatar.png")]
    pub avatar: String,
    pub name: String,
    #[schema(example = "lilei")]
    pub nick_name: String,
    pub job: i32,
    pub address: String,
    #[serde(rename = "ID")]
    pub id_number: String,
    pub qq: String,
    pub wechat: String,
    pub telephone: String,
    #[serde(rename = "emergencyTelphone")]
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
    /// Creation time, epoch seconds.
    #[serde(rename = "create_time")]
    pub create_time: i64,
}

impl From<Artist> for ArtistResponse {
    fn from(a: Artist) -> Self {
        Self {
            artist_id: a.id,
            avatar: a.avatar,
            name: a.name,
            nick_name: a.nick_name,
            job: a.job,
            address: a.address,
            id_number: a.id_number,
            qq: a.qq,
            wechat: a.wechat,
            telephone: a.telephone,
            emergency_telephone: a.emergency_telephone,
            credit_card_num: a.credit_card_num,
            recommend_word1: a.recommend_word1,
            recommend_word2: a.recommend_word2,
            recommend_word3: a.recommend_word3,
            identity_card_front: a.identity_card_front,
            identity_card_reverse: a.identity_card_reverse,
            salary: a.salary,
            priority_rating: a.priority_rating,
            gender: a.gender,
            create_time: a.create_time,
        }
    }
}

#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddArtistRequest {
    pub avatar: Option<String>,
    pub name: Option<String>,
    #[schema(example = "lilei")]
    pub nick_name: Option<String>,
    #[schema(example = 1)]
    pub job: Option<i32>,
    pub address: Option<String>,
    #[serde(rename = "ID")]
    pub id_number: Option<String>,
    pub qq: Option<String>,
    pub wechat: Option<String>,
    pub telephone: Option<String>,
    #[serde(rename = "emergencyTelphone")]
    pub emergency_telephone: Option<String>,
    pub credit_card_num: Option<String>,
    pub recommend_word1: Option<String>,
    pub recommend_word2: Option<String>,
    pub recommend_word3: Option<String>,
    pub identity_card_front: Option<String>,
    pub identity_card_reverse: Option<String>,
    #[schema(example = 3000)]
    pub salary: Option<i32>,
    pub priority_rating: Option<i32>,
    #[schema(example = 0)]
    pub gender: Option<i32>,
}

/// Check the required fields in protocol order and build the insert command.
pub fn validate_add_artist(
    payload: AddArtistRequest,
    create_time: i64,
) -> Result<NewArtist, AppError> {
    Ok(NewArtist {
        avatar: required_text(payload.avatar, "avatar")?,
        name: required_text(payload.name, "name")?,
        nick_name: required_text(payload.nick_name, "nickName")?,
        job: required(payload.job, "job")?,
        address: required_text(payload.address, "address")?,
        id_number: required_text(payload.id_number, "ID")?,
        qq: required_text(payload.qq, "qq")?,
        wechat: required_text(payload.wechat, "wechat")?,
        telephone: required_text(payload.telephone, "telephone")?,
        emergency_telephone: required_text(payload.emergency_telephone, "emergencyTelphone")?,
        credit_card_num: required_text(payload.credit_card_num, "creditCardNum")?,
        identity_card_front: required_text(payload.identity_card_front, "identityCardFront")?,
        identity_card_reverse: required_text(payload.identity_card_reverse, "identityCardReverse")?,
        salary: required(payload.salary, "salary")?,
        gender: required(payload.gender, "gender")?,
        recommend_word1: payload.recommend_word1,
        recommend_word2: payload.recommend_word2,
        recommend_word3: payload.recommend_word3,
        priority_rating: payload.priority_rating,
        create_time,
    })
}

#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArtistRequest {
    #[schema(example = 1)]
    pub artist_id: Option<i32>,
    pub avatar: Option<String>,
    pub name: Option<String>,
    pub nick_name: Option<String>,
    /// New job id. Stored as the artist's `job`.
    #[serde(rename = "jobId")]
    pub job_id: Option<i32>,
    pub address: Option<String>,
    #[serde(rename = "ID")]
    pub id_number: Option<String>,
    pub qq: Option<String>,
    pub wechat: Option<String>,
    pub telephone: Option<String>,
    #[serde(rename = "emergencyTelphone")]
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

pub fn validate_update_artist(payload: UpdateArtistRequest) -> Result<(i32, ArtistPatch), AppError> {
    let artist_id = required(payload.artist_id, "artistId")?;
    let patch = ArtistPatch {
        avatar: payload.avatar,
        name: payload.name,
        nick_name: payload.nick_name,
        job: payload.job_id,
        address: payload.address,
        id_number: payload.id_number,
        qq: payload.qq,
        wechat: payload.wechat,
        telephone: payload.telephone,
        emergency_telephone: payload.emergency_telephone,
        credit_card_num: payload.credit_card_num,
        recommend_word1: payload.recommend_word1,
        recommend_word2: payload.recommend_word2,
        recommend_word3: payload.recommend_word3,
        identity_card_front: payload.identity_card_front,
        identity_card_reverse: payload.identity_card_reverse,
        salary: payload.salary,
        priority_rating: payload.priority_rating,
        gender: payload.gender,
    };
    Ok((artist_id, patch))
}

#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtistIdRequest {
    #[schema(example = 1)]
    pub artist_id: Option<i32>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetArtistRequest {
    #[schema(example = "lilei")]
    pub nick_name: Option<String>,
}
