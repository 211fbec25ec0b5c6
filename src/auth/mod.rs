pub mod authenticator;
pub mod password;

use crate::config::{AuthMode, Config};
use crate::model::role::Role;
use anyhow::Result;
use sqlx::SqlitePool;
use tracing::{info, warn};

/// Seeds the first admin account from the environment so password mode is
/// usable on a fresh database. No-op in domain mode, when credentials are
/// missing, or when any user already exists.
pub async fn ensure_bootstrap_admin(pool: &SqlitePool, config: &Config) -> Result<()> {
    if config.auth_mode != AuthMode::Password {
        return Ok(());
    }

    let (Some(email), Some(bootstrap_password)) = (
        config.bootstrap_admin_email.as_deref(),
        config.bootstrap_admin_password.as_deref(),
    ) else {
        warn!("Password mode enabled but BOOTSTRAP_ADMIN_EMAIL/PASSWORD not set");
        return Ok(());
    };

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        return Ok(());
    }

    let hashed = password::hash_password(bootstrap_password)
        .map_err(|e| anyhow::anyhow!("Failed to hash bootstrap password: {e}"))?;

    sqlx::query("INSERT INTO users (email, password, role_id) VALUES (?, ?, ?)")
        .bind(email)
        .bind(hashed)
        .bind(Role::Admin as i64)
        .execute(pool)
        .await?;

    info!(email, "Bootstrapped admin user");
    Ok(())
}
