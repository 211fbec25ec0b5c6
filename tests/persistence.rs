//! Integration tests for the persistence layer: schema initialization,
//! employee listing, leave-request creation and the joined read.

use autopilot_hr::model::employee::Employee;
use autopilot_hr::model::leave_request::LeaveRequest;
use autopilot_hr::store;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

async fn insert_employee(pool: &SqlitePool, first: &str, last: &str) -> i64 {
    sqlx::query(
        r#"
        INSERT INTO employees
        (first_name, last_name, email, phone, role, department, hire_date, salary)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(first)
    .bind(last)
    .bind(format!(
        "{}.{}@corp.com",
        first.to_lowercase(),
        last.to_lowercase()
    ))
    .bind("+1-555-0100")
    .bind("Engineer")
    .bind("Engineering")
    .bind(date("2023-05-02"))
    .bind(52_000.0)
    .execute(pool)
    .await
    .unwrap()
    .last_insert_rowid()
}

#[actix_web::test]
async fn initialize_is_idempotent_and_non_destructive() {
    let pool = memory_pool().await;
    store::initialize(&pool).await.unwrap();
    store::initialize(&pool).await.unwrap();

    let id = insert_employee(&pool, "Alice", "Smith").await;

    // Re-running initialization must not drop existing rows
    store::initialize(&pool).await.unwrap();

    let employees = store::list_employees(&pool).await.unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].id, id);
}

#[actix_web::test]
async fn initialize_survives_process_restart() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("hr_system.db").display()
    );

    let pool = SqlitePool::connect(&url).await.unwrap();
    store::initialize(&pool).await.unwrap();
    insert_employee(&pool, "Alice", "Smith").await;
    pool.close().await;

    // A fresh process runs initialize again on the same file
    let pool = SqlitePool::connect(&url).await.unwrap();
    store::initialize(&pool).await.unwrap();

    let employees = store::list_employees(&pool).await.unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].first_name, "Alice");
    pool.close().await;
}

#[actix_web::test]
async fn list_employees_returns_exactly_what_was_inserted() {
    let pool = memory_pool().await;
    store::initialize(&pool).await.unwrap();

    insert_employee(&pool, "Alice", "Smith").await;
    insert_employee(&pool, "Bob", "Lee").await;

    let mut employees: Vec<Employee> = store::list_employees(&pool).await.unwrap();
    assert_eq!(employees.len(), 2);

    // Order is unspecified; sort before comparing
    employees.sort_by(|a, b| a.first_name.cmp(&b.first_name));
    assert_eq!(employees[0].first_name, "Alice");
    assert_eq!(employees[0].last_name, "Smith");
    assert_eq!(employees[0].email, "alice.smith@corp.com");
    assert_eq!(employees[0].department, "Engineering");
    assert_eq!(employees[0].hire_date, date("2023-05-02"));
    assert_eq!(employees[0].salary, 52_000.0);
    assert_eq!(employees[1].first_name, "Bob");
}

#[actix_web::test]
async fn created_leave_request_appears_joined_with_employee_name() {
    let pool = memory_pool().await;
    store::initialize(&pool).await.unwrap();

    let id = insert_employee(&pool, "Alice", "Smith").await;
    store::create_leave_request(&pool, id, date("2024-01-01"), date("2024-01-05"), "vacation")
        .await
        .unwrap();

    let joined = store::list_leave_requests_with_employee_names(&pool)
        .await
        .unwrap();
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].first_name, "Alice");
    assert_eq!(joined[0].last_name, "Smith");
    assert_eq!(joined[0].start_date, date("2024-01-01"));
    assert_eq!(joined[0].end_date, date("2024-01-05"));
    assert_eq!(joined[0].reason, "vacation");
    assert_eq!(joined[0].status, "Pending");
}

#[actix_web::test]
async fn orphaned_request_is_stored_but_hidden_from_the_join() {
    let pool = memory_pool().await;
    store::initialize(&pool).await.unwrap();

    // Employee 7 does not exist; the insert must still succeed
    store::create_leave_request(&pool, 7, date("2024-01-01"), date("2024-01-05"), "vacation")
        .await
        .unwrap();

    let joined = store::list_leave_requests_with_employee_names(&pool)
        .await
        .unwrap();
    assert!(joined.is_empty());

    let raw: Vec<LeaveRequest> = sqlx::query_as("SELECT * FROM leave_requests")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0].employee_id, 7);
    assert_eq!(raw[0].status, "Pending");

    assert_eq!(store::count_orphaned_leave_requests(&pool).await.unwrap(), 1);
}

#[actix_web::test]
async fn join_only_names_the_matching_employee() {
    let pool = memory_pool().await;
    store::initialize(&pool).await.unwrap();

    let alice = insert_employee(&pool, "Alice", "Smith").await;
    insert_employee(&pool, "Bob", "Lee").await;

    store::create_leave_request(&pool, alice, date("2024-02-01"), date("2024-02-02"), "travel")
        .await
        .unwrap();

    let joined = store::list_leave_requests_with_employee_names(&pool)
        .await
        .unwrap();
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].first_name, "Alice");
    assert_eq!(joined[0].last_name, "Smith");
    assert!(joined.iter().all(|l| l.first_name != "Bob"));
}

#[actix_web::test]
async fn orphan_count_matches_exactly_the_rows_the_join_drops() {
    let pool = memory_pool().await;
    store::initialize(&pool).await.unwrap();

    let alice = insert_employee(&pool, "Alice", "Smith").await;
    store::create_leave_request(&pool, alice, date("2024-03-01"), date("2024-03-03"), "pto")
        .await
        .unwrap();
    store::create_leave_request(&pool, 998, date("2024-03-01"), date("2024-03-03"), "ghost")
        .await
        .unwrap();
    store::create_leave_request(&pool, 999, date("2024-03-04"), date("2024-03-05"), "ghost")
        .await
        .unwrap();

    let joined = store::list_leave_requests_with_employee_names(&pool)
        .await
        .unwrap();
    let raw_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM leave_requests")
        .fetch_one(&pool)
        .await
        .unwrap();
    let orphaned = store::count_orphaned_leave_requests(&pool).await.unwrap();

    assert_eq!(joined.len(), 1);
    assert_eq!(raw_count, 3);
    assert_eq!(orphaned, raw_count - joined.len() as i64);
}

#[actix_web::test]
async fn backwards_date_range_is_accepted_as_is() {
    let pool = memory_pool().await;
    store::initialize(&pool).await.unwrap();

    let id = insert_employee(&pool, "Alice", "Smith").await;
    // end before start: not validated anywhere, stored verbatim
    store::create_leave_request(&pool, id, date("2024-06-10"), date("2024-06-01"), "oops")
        .await
        .unwrap();

    let joined = store::list_leave_requests_with_employee_names(&pool)
        .await
        .unwrap();
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].start_date, date("2024-06-10"));
    assert_eq!(joined[0].end_date, date("2024-06-01"));
}
