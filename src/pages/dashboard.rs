use crate::pages::{SessionId, html_response, redirect_home};
use crate::session::Page;
use crate::store;
use crate::templates;
use crate::utils::session_cache::SessionStore;
use actix_web::{HttpResponse, error::ErrorInternalServerError, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use std::str::FromStr;
use strum_macros::{Display, EnumString};
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
enum DashboardTab {
    Chatbot,
    Leave,
    Status,
}

#[derive(Debug, Deserialize)]
pub struct LeaveForm {
    pub employee_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

pub async fn render(
    pool: &SqlitePool,
    tab: Option<&str>,
    notice: Option<&str>,
) -> actix_web::Result<String> {
    let tab = tab
        .and_then(|t| DashboardTab::from_str(t).ok())
        .unwrap_or(DashboardTab::Chatbot);

    // The status tab is the only one that reads storage; fetched fresh on
    // every render, never cached.
    let leaves = match tab {
        DashboardTab::Status => store::list_leave_requests_with_employee_names(pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch leave list");
                ErrorInternalServerError("Internal Server Error")
            })?,
        _ => Vec::new(),
    };

    let ctx = json!({
        "show_chatbot": tab == DashboardTab::Chatbot,
        "show_form": tab == DashboardTab::Leave,
        "show_status": tab == DashboardTab::Status,
        "notice": notice,
        "has_leaves": !leaves.is_empty(),
        "leaves": leaves,
    });

    templates::render("dashboard", &ctx).map_err(ErrorInternalServerError)
}

pub async fn submit_leave(
    sid: SessionId,
    sessions: web::Data<SessionStore>,
    pool: web::Data<SqlitePool>,
    form: web::Form<LeaveForm>,
) -> actix_web::Result<HttpResponse> {
    let page = sessions.page(&sid.0).await;
    if page != Page::Dashboard {
        return Ok(redirect_home(&sid));
    }

    store::create_leave_request(
        pool.get_ref(),
        form.employee_id,
        form.start_date,
        form.end_date,
        &form.reason,
    )
    .await
    .map_err(|e| {
        error!(error = %e, employee_id = form.employee_id, "Failed to create leave request");
        ErrorInternalServerError("Internal Server Error")
    })?;

    let html = render(pool.get_ref(), Some("leave"), Some("Leave request submitted!")).await?;
    Ok(html_response(html, &sid))
}
