use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::NewDemo;
use crate::error::AppError;
use crate::models::shared::{required, required_text};

#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddDemoRequest {
    /// Category tag of the demo; casting selects on it.
    #[schema(example = 2)]
    pub demo_type: Option<i32>,
    #[schema(example = "/uploads/1700000000000_files.mp4")]
    pub file_url: Option<String>,
    #[schema(example = 1)]
    pub artist_id: Option<i32>,
}

pub fn validate_add_demo(payload: AddDemoRequest) -> Result<NewDemo, AppError> {
    Ok(NewDemo {
        demo_type: required(payload.demo_type, "demoType")?,
        file_url: required_text(payload.file_url, "fileUrl")?,
        artist_id: required(payload.artist_id, "artistId")?,
    })
}
