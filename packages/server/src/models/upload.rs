use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, Debug, ToSchema)]
pub struct UploadResponse {
    /// Path under which the stored file is served.
    #[schema(example = "/uploads/1700000000000_files.mp4")]
    pub url: String,
}
