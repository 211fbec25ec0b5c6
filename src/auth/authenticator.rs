use crate::auth::password::verify_password;
use crate::model::role::Role;
use crate::model::user::User;
use crate::session::{EMPTY_CREDENTIALS, INVALID_CREDENTIALS, LoginOutcome};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, info};

/// Credential check behind the login form. Implementations only decide the
/// `LoginOutcome`; the session state machine owns what happens next.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, email: &str, password: &str)
    -> Result<LoginOutcome, sqlx::Error>;
}

/// Legacy placeholder check: both fields present, admin domain suffix decides
/// the destination. Performs no password verification of any kind.
pub struct DomainSuffixAuthenticator {
    admin_domain: String,
}

impl DomainSuffixAuthenticator {
    pub fn new(admin_domain: String) -> Self {
        Self { admin_domain }
    }
}

#[async_trait]
impl Authenticator for DomainSuffixAuthenticator {
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<LoginOutcome, sqlx::Error> {
        if email.trim().is_empty() || password.is_empty() {
            return Ok(LoginOutcome::Denied(EMPTY_CREDENTIALS));
        }

        if email.ends_with(&self.admin_domain) {
            Ok(LoginOutcome::Admin)
        } else {
            Ok(LoginOutcome::Employee)
        }
    }
}

/// Real credential verification: Argon2 hash lookup in the users table, the
/// stored role decides the destination page.
pub struct PasswordAuthenticator {
    pool: SqlitePool,
}

impl PasswordAuthenticator {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Authenticator for PasswordAuthenticator {
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<LoginOutcome, sqlx::Error> {
        if email.trim().is_empty() || password.is_empty() {
            return Ok(LoginOutcome::Denied(EMPTY_CREDENTIALS));
        }

        debug!("Fetching user from database");

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, role_id
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        let Some(user) = user else {
            info!("Invalid credentials: user not found");
            return Ok(LoginOutcome::Denied(INVALID_CREDENTIALS));
        };

        if verify_password(password, &user.password).is_err() {
            info!(user_id = user.id, "Invalid credentials: password mismatch");
            return Ok(LoginOutcome::Denied(INVALID_CREDENTIALS));
        }

        match Role::from_id(user.role_id) {
            Some(Role::Admin) => Ok(LoginOutcome::Admin),
            Some(Role::Employee) => Ok(LoginOutcome::Employee),
            None => {
                info!(user_id = user.id, role_id = user.role_id, "Invalid role");
                Ok(LoginOutcome::Denied(INVALID_CREDENTIALS))
            }
        }
    }
}
