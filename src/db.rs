use sqlx::SqlitePool;

pub async fn init_db(database_url: &str) -> SqlitePool {
    SqlitePool::connect(database_url)
        .await
        .expect("Failed to connect to database")
}
