use tracing::{info, warn};

use crate::config::SeedConfig;
use crate::domain::{NewUser, ROLE_ADMIN};
use crate::error::AppError;
use crate::repository::Store;
use crate::utils::hash::hash_password;

/// Create the bootstrap administrator when no account exists yet.
///
/// Returns `true` if an account was created.
pub async fn seed_default_admin(store: &dyn Store, seed: &SeedConfig) -> Result<bool, AppError> {
    if store.count_users().await? > 0 {
        return Ok(false);
    }

    let password_hash = hash_password(&seed.admin_password)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))?;
    store
        .insert_user(NewUser {
            name: seed.admin_name.clone(),
            password_hash,
            role: ROLE_ADMIN,
        })
        .await?;

    info!("Seeded default admin account '{}'", seed.admin_name);
    warn!("Change the default admin password before exposing this server");
    Ok(true)
}
