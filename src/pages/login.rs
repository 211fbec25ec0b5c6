use crate::auth::authenticator::Authenticator;
use crate::pages::{SessionId, html_response, redirect_home};
use crate::session::{LoginOutcome, Page};
use crate::templates;
use crate::utils::session_cache::SessionStore;
use actix_web::{HttpResponse, error::ErrorInternalServerError, web};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, instrument};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

pub fn render(error: Option<&str>) -> actix_web::Result<String> {
    templates::render("login", &json!({ "error": error })).map_err(ErrorInternalServerError)
}

#[instrument(
    name = "login_submit",
    skip(sid, sessions, authenticator, form),
    fields(email = %form.email)
)]
pub async fn submit(
    sid: SessionId,
    sessions: web::Data<SessionStore>,
    authenticator: web::Data<dyn Authenticator>,
    form: web::Form<LoginForm>,
) -> actix_web::Result<HttpResponse> {
    let page = sessions.page(&sid.0).await;
    if page != Page::Login {
        return Ok(redirect_home(&sid));
    }

    let outcome = authenticator
        .authenticate(&form.email, &form.password)
        .await
        .map_err(|e| {
            error!(error = %e, "Credential check failed");
            ErrorInternalServerError("Internal Server Error")
        })?;

    match outcome {
        LoginOutcome::Denied(message) => {
            info!(message, "Login rejected");
            let html = render(Some(message))?;
            Ok(html_response(html, &sid))
        }
        granted => {
            let next = page.on_login(granted);
            sessions.set_page(&sid.0, next).await;
            info!(page = %next, "Login successful");
            Ok(redirect_home(&sid))
        }
    }
}
