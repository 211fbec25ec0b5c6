pub mod admin;
pub mod dashboard;
pub mod login;

use crate::session::Page;
use crate::utils::session_cache::SessionStore;
use actix_web::cookie::Cookie;
use actix_web::http::header::{self, ContentType};
use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, web};
use futures::future::{Ready, ready};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::info;

pub const SESSION_COOKIE: &str = "ahr_session";

/// Opaque id tying a browser to its entry in the `SessionStore`. Extracted
/// from the session cookie; a request without one gets a fresh id, and every
/// response writes the cookie back.
pub struct SessionId(pub String);

impl FromRequest for SessionId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let id = req
            .cookie(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .unwrap_or_else(SessionStore::new_session_id);

        ready(Ok(SessionId(id)))
    }
}

/// Transient render parameters. Neither is session state: switching a tab or
/// an admin menu section never changes which page the session is on.
#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    pub tab: Option<String>,
    pub section: Option<String>,
}

/// Single rendering entry point: whatever page the session is on is what
/// gets rendered, with data fetched fresh from storage on every render.
pub async fn index(
    sid: SessionId,
    sessions: web::Data<SessionStore>,
    pool: web::Data<SqlitePool>,
    query: web::Query<ViewQuery>,
) -> actix_web::Result<HttpResponse> {
    let page = sessions.page(&sid.0).await;

    let html = match page {
        Page::Login => login::render(None)?,
        Page::Dashboard => dashboard::render(pool.get_ref(), query.tab.as_deref(), None).await?,
        Page::AdminPanel => admin::render(pool.get_ref(), query.section.as_deref()).await?,
    };

    Ok(html_response(html, &sid))
}

pub async fn logout(sid: SessionId, sessions: web::Data<SessionStore>) -> HttpResponse {
    sessions.reset(&sid.0).await;
    info!("Logged out");
    redirect_home(&sid)
}

fn session_cookie(sid: &str) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, sid.to_owned())
        .path("/")
        .http_only(true)
        .finish()
}

pub(crate) fn html_response(html: String, sid: &SessionId) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .cookie(session_cookie(&sid.0))
        .body(html)
}

pub(crate) fn redirect_home(sid: &SessionId) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .cookie(session_cookie(&sid.0))
        .finish()
}
