use sqlx::FromRow;

/// Credential row for the password authenticator. `password` holds an Argon2
/// PHC string, never the plain text.
#[derive(Debug, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub role_id: i64,
}
