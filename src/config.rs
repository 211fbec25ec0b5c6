use dotenvy::dotenv;
use std::env;
use strum_macros::{Display, EnumString};

/// How login credentials are checked.
///
/// `Domain` keeps the legacy placeholder rule (non-empty fields, admin domain
/// suffix decides the destination page). `Password` verifies an Argon2 hash
/// against the users table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AuthMode {
    Domain,
    Password,
}

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    pub database_url: String,

    pub admin_domain: String,
    pub auth_mode: AuthMode,
    pub session_ttl_secs: u64,

    // Rate limiting
    pub rate_login_per_min: u32,

    // Only consulted in password mode, when the users table is empty
    pub bootstrap_admin_email: Option<String>,
    pub bootstrap_admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://hr_system.db?mode=rwc".to_string()),

            admin_domain: env::var("ADMIN_DOMAIN").unwrap_or_else(|_| "@admin.com".to_string()),
            auth_mode: env::var("AUTH_MODE")
                .unwrap_or_else(|_| "domain".to_string())
                .parse()
                .expect("AUTH_MODE must be 'domain' or 'password'"),
            session_ttl_secs: env::var("SESSION_TTL_SECS")
                .unwrap_or_else(|_| "86400".to_string()) // default 24h
                .parse()
                .unwrap(),

            rate_login_per_min: env::var("RATE_LOGIN_PER_MIN")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap(),

            bootstrap_admin_email: env::var("BOOTSTRAP_ADMIN_EMAIL").ok(),
            bootstrap_admin_password: env::var("BOOTSTRAP_ADMIN_PASSWORD").ok(),
        }
    }
}
