use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct LeaveRequest {
    pub id: i64,
    pub employee_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: String,
}

/// Row shape of the joined leave listing. Requests whose employee_id has no
/// matching employee row never appear here.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct LeaveWithEmployee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: String,
}
