use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::AppError;
use crate::extractors::params::Params;
use crate::models::shared::{ApiResponse, Empty, ParamsBody, success};
use crate::models::user::{
    AddUserRequest, LoginRequest, LoginResponse, validate_add_user, validate_login,
};
use crate::services;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/add",
    tag = "Users",
    operation_id = "addUser",
    summary = "Create a back-office account",
    description = "Creates an administrator (`role = 1`) or director (`role = 2`) account. \
        Failure codes: 400 for a missing field, an unknown role or a taken name.",
    request_body = ParamsBody<AddUserRequest>,
    responses(
        (status = 200, description = "Account created", body = ApiResponse<Empty>),
    ),
)]
#[instrument(skip(state, payload), fields(name = ?payload.name))]
pub async fn add_user(
    State(state): State<AppState>,
    Params(payload): Params<AddUserRequest>,
) -> Result<Json<ApiResponse<Empty>>, AppError> {
    let signup = validate_add_user(payload)?;
    services::user::add_user(&*state.store, signup).await?;
    Ok(success(Empty {}))
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "Users",
    operation_id = "login",
    summary = "Check credentials",
    description = "Returns the account role when name and password match. \
        Failure codes: 401 for missing or bad credentials.",
    request_body = ParamsBody<LoginRequest>,
    responses(
        (status = 200, description = "Credentials accepted", body = ApiResponse<LoginResponse>),
    ),
)]
#[instrument(skip(state, payload), fields(name = ?payload.name))]
pub async fn login(
    State(state): State<AppState>,
    Params(payload): Params<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    let (name, password) = validate_login(payload)?;
    let role = services::user::login(&*state.store, &name, &password).await?;
    Ok(success(LoginResponse { role }))
}
