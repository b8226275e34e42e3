use tracing::info;

use crate::domain::{NewUser, User};
use crate::error::AppError;
use crate::models::user::Signup;
use crate::repository::Store;
use crate::utils::hash::{hash_password, verify_password};

pub async fn add_user(store: &dyn Store, signup: Signup) -> Result<User, AppError> {
    if store.find_user_by_name(&signup.name).await?.is_some() {
        return Err(AppError::Duplicate("User name already exists".into()));
    }

    let password_hash = hash_password(&signup.password)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))?;

    let user = store
        .insert_user(NewUser {
            name: signup.name,
            password_hash,
            role: signup.role,
        })
        .await?;
    info!(user_id = user.id, role = user.role, "User created");
    Ok(user)
}

/// Returns the user's role when the credentials match.
pub async fn login(store: &dyn Store, name: &str, password: &str) -> Result<i32, AppError> {
    let user = store
        .find_user_by_name(name)
        .await?
        .ok_or(AppError::AuthFailed)?;

    let valid = verify_password(password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Stored password hash is unreadable: {e}")))?;
    if !valid {
        return Err(AppError::AuthFailed);
    }
    Ok(user.role)
}
