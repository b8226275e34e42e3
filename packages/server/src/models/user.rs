use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ROLE_ADMIN, ROLE_DIRECTOR};
use crate::error::AppError;
use crate::models::shared::{required, required_text};

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct AddUserRequest {
    #[schema(example = "director_wang")]
    pub name: Option<String>,
    #[schema(example = "s3cret-pass")]
    pub password: Option<String>,
    /// `1` = administrator, `2` = director.
    #[schema(example = 2)]
    pub role: Option<i32>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "admin")]
    pub name: Option<String>,
    #[schema(example = "admin123")]
    pub password: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = 1)]
    pub role: i32,
}

/// Account data that passed request validation. The password is still plain.
#[derive(Debug, PartialEq, Eq)]
pub struct Signup {
    pub name: String,
    pub password: String,
    pub role: i32,
}

pub fn validate_add_user(payload: AddUserRequest) -> Result<Signup, AppError> {
    let name = required_text(payload.name, "name")?;
    let password = required_text(payload.password, "password")?;
    let role = required(payload.role, "role")?;
    if role != ROLE_ADMIN && role != ROLE_DIRECTOR {
        return Err(AppError::Validation(format!(
            "role must be {ROLE_ADMIN} (admin) or {ROLE_DIRECTOR} (director)"
        )));
    }
    Ok(Signup {
        name,
        password,
        role,
    })
}

/// Absent or empty credentials can never match an account, so they fail the
/// same way a wrong password does.
pub fn validate_login(payload: LoginRequest) -> Result<(String, String), AppError> {
    match (payload.name, payload.password) {
        (Some(name), Some(password)) if !name.is_empty() && !password.is_empty() => {
            Ok((name, password))
        }
        _ => Err(AppError::AuthFailed),
    }
}
