use crate::model::employee::Employee;
use crate::model::leave_request::LeaveWithEmployee;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::debug;

const PENDING_STATUS: &str = "Pending";

/// Ensures all record stores exist. Safe to run on every process start;
/// `IF NOT EXISTS` means existing rows are never touched.
pub async fn initialize(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT,
            last_name TEXT,
            email TEXT,
            phone TEXT,
            role TEXT,
            department TEXT,
            hire_date TEXT,
            salary REAL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS leave_requests (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id INTEGER,
            start_date TEXT,
            end_date TEXT,
            reason TEXT,
            status TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            role_id INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    debug!("Schema initialized");
    Ok(())
}

/// All employee rows; order is whatever the storage engine returns.
pub async fn list_employees(pool: &SqlitePool) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>("SELECT * FROM employees")
        .fetch_all(pool)
        .await
}

/// Appends a leave request with status fixed to `Pending`. The employee_id is
/// not checked against the employees table and the date range is not ordered;
/// a request for an unknown employee still lands in storage, it is only
/// hidden from the joined listing.
pub async fn create_leave_request(
    pool: &SqlitePool,
    employee_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    reason: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO leave_requests (employee_id, start_date, end_date, reason, status)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(employee_id)
    .bind(start_date)
    .bind(end_date)
    .bind(reason)
    .bind(PENDING_STATUS)
    .execute(pool)
    .await?;

    debug!(employee_id, "Leave request stored");
    Ok(())
}

/// Inner join of leave requests and employees. Requests whose employee_id has
/// no matching employee row are silently excluded; `count_orphaned_leave_requests`
/// exists so callers can still surface that gap.
pub async fn list_leave_requests_with_employee_names(
    pool: &SqlitePool,
) -> Result<Vec<LeaveWithEmployee>, sqlx::Error> {
    sqlx::query_as::<_, LeaveWithEmployee>(
        r#"
        SELECT lr.id, e.first_name, e.last_name, lr.start_date, lr.end_date, lr.reason, lr.status
        FROM leave_requests lr
        JOIN employees e ON lr.employee_id = e.id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Number of leave requests the joined listing drops.
pub async fn count_orphaned_leave_requests(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT COUNT(*)
        FROM leave_requests lr
        LEFT JOIN employees e ON lr.employee_id = e.id
        WHERE e.id IS NULL
        "#,
    )
    .fetch_one(pool)
    .await
}
