use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use dotenvy::dotenv;
use std::sync::Arc;
use std::time::Duration;

use autopilot_hr::auth;
use autopilot_hr::auth::authenticator::{
    Authenticator, DomainSuffixAuthenticator, PasswordAuthenticator,
};
use autopilot_hr::config::{AuthMode, Config};
use autopilot_hr::db::init_db;
use autopilot_hr::routes;
use autopilot_hr::store;
use autopilot_hr::utils::session_cache::SessionStore;

use tracing::info;
use tracing_appender::rolling;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let pool = init_db(&config.database_url).await;
    store::initialize(&pool)
        .await
        .expect("Failed to initialize schema");
    auth::ensure_bootstrap_admin(&pool, &config)
        .await
        .expect("Failed to bootstrap admin user");

    let sessions = SessionStore::new(Duration::from_secs(config.session_ttl_secs));
    let authenticator: Arc<dyn Authenticator> = match config.auth_mode {
        AuthMode::Domain => Arc::new(DomainSuffixAuthenticator::new(config.admin_domain.clone())),
        AuthMode::Password => Arc::new(PasswordAuthenticator::new(pool.clone())),
    };

    let server_addr = config.server_addr.clone();
    let config_data = config.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .app_data(Data::new(pool.clone()))
            .app_data(Data::new(config.clone()))
            .app_data(Data::new(sessions.clone()))
            .app_data(Data::from(authenticator.clone()))
            .configure(|cfg| routes::configure(cfg, config_data.clone()))
    })
    .bind(server_addr)?
    .run()
    .await
}
