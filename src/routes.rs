use crate::{config::Config, pages};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    // Every route is page-routed: the session's current page decides what a
    // GET / renders, and a POST aimed at the wrong page just redirects home.
    cfg.service(web::resource("/").route(web::get().to(pages::index)))
        .service(
            web::resource("/login")
                .wrap(build_limiter(config.rate_login_per_min))
                .route(web::post().to(pages::login::submit)),
        )
        .service(web::resource("/logout").route(web::post().to(pages::logout)))
        .service(web::resource("/leave").route(web::post().to(pages::dashboard::submit_leave)));
}
