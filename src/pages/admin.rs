use crate::store;
use crate::templates;
use actix_web::error::ErrorInternalServerError;
use serde_json::json;
use sqlx::SqlitePool;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "title_case")]
enum AdminSection {
    Attendance,
    LeaveRequests,
    EmployeeRecords,
    Promotions,
    Reports,
    #[strum(serialize = "QnA")]
    QnA,
    Chatbot,
}

impl AdminSection {
    /// Fixed text for the sections that have no behavior yet.
    fn placeholder(self) -> Option<&'static str> {
        match self {
            AdminSection::Attendance => Some("Attendance tracking feature to be implemented."),
            AdminSection::Promotions => Some("Promotion management feature to be implemented."),
            AdminSection::Reports => Some("Reports & analytics to be implemented."),
            AdminSection::QnA => Some("QnA assistant to be integrated."),
            AdminSection::Chatbot => Some("Admin chatbot integration goes here."),
            AdminSection::LeaveRequests | AdminSection::EmployeeRecords => None,
        }
    }
}

pub async fn render(pool: &SqlitePool, section: Option<&str>) -> actix_web::Result<String> {
    let section = section
        .and_then(|s| AdminSection::from_str(s).ok())
        .unwrap_or(AdminSection::Attendance);

    let menu: Vec<_> = AdminSection::iter()
        .map(|s| {
            let name = s.to_string();
            json!({
                "href": format!("/?section={}", name.replace(' ', "%20")),
                "name": name,
                "active": s == section,
            })
        })
        .collect();

    let leaves = match section {
        AdminSection::LeaveRequests => store::list_leave_requests_with_employee_names(pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch leave list");
                ErrorInternalServerError("Internal Server Error")
            })?,
        _ => Vec::new(),
    };

    let orphaned = match section {
        AdminSection::LeaveRequests => {
            store::count_orphaned_leave_requests(pool).await.map_err(|e| {
                error!(error = %e, "Failed to count orphaned leave requests");
                ErrorInternalServerError("Internal Server Error")
            })?
        }
        _ => 0,
    };

    let employees = match section {
        AdminSection::EmployeeRecords => store::list_employees(pool).await.map_err(|e| {
            error!(error = %e, "Failed to fetch employees");
            ErrorInternalServerError("Internal Server Error")
        })?,
        _ => Vec::new(),
    };

    let ctx = json!({
        "sections": menu,
        "section": section.to_string(),
        "placeholder": section.placeholder(),
        "show_leaves": section == AdminSection::LeaveRequests,
        "orphaned": orphaned,
        "has_leaves": !leaves.is_empty(),
        "leaves": leaves,
        "show_employees": section == AdminSection::EmployeeRecords,
        "has_employees": !employees.is_empty(),
        "employees": employees,
    });

    templates::render("admin", &ctx).map_err(ErrorInternalServerError)
}
