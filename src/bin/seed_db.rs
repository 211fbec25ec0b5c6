//! Seeds the local database with sample employees and a couple of leave
//! requests so the dashboard and admin panel have something to show.
//! Employees have no creation UI; this is the supported way to get rows in
//! during development.

use autopilot_hr::db::init_db;
use autopilot_hr::store;
use chrono::NaiveDate;

struct SeedEmployee {
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    phone: &'static str,
    role: &'static str,
    department: &'static str,
    hire_date: &'static str,
    salary: f64,
}

const EMPLOYEES: &[SeedEmployee] = &[
    SeedEmployee {
        first_name: "Alice",
        last_name: "Smith",
        email: "alice.smith@corp.com",
        phone: "+1-555-0101",
        role: "Software Engineer",
        department: "Engineering",
        hire_date: "2021-03-15",
        salary: 95_000.0,
    },
    SeedEmployee {
        first_name: "Bob",
        last_name: "Lee",
        email: "bob.lee@corp.com",
        phone: "+1-555-0102",
        role: "Product Manager",
        department: "Product",
        hire_date: "2019-11-02",
        salary: 105_000.0,
    },
    SeedEmployee {
        first_name: "Carmen",
        last_name: "Diaz",
        email: "carmen.diaz@corp.com",
        phone: "+1-555-0103",
        role: "HR Generalist",
        department: "People",
        hire_date: "2022-06-20",
        salary: 68_000.0,
    },
    SeedEmployee {
        first_name: "Dmitri",
        last_name: "Volkov",
        email: "dmitri.volkov@corp.com",
        phone: "+1-555-0104",
        role: "Accountant",
        department: "Finance",
        hire_date: "2020-01-08",
        salary: 72_000.0,
    },
];

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://hr_system.db?mode=rwc".to_string());

    println!("Connecting to database at: {database_url}");

    let pool = init_db(&database_url).await;
    store::initialize(&pool).await?;

    let mut first_id = None;
    for e in EMPLOYEES {
        let result = sqlx::query(
            r#"
            INSERT INTO employees
            (first_name, last_name, email, phone, role, department, hire_date, salary)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(e.first_name)
        .bind(e.last_name)
        .bind(e.email)
        .bind(e.phone)
        .bind(e.role)
        .bind(e.department)
        .bind(NaiveDate::parse_from_str(e.hire_date, "%Y-%m-%d")?)
        .bind(e.salary)
        .execute(&pool)
        .await?;

        first_id.get_or_insert(result.last_insert_rowid());
        println!("Seeded employee {} {}", e.first_name, e.last_name);
    }

    if let Some(employee_id) = first_id {
        store::create_leave_request(
            &pool,
            employee_id,
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 9, 5).unwrap(),
            "Family vacation",
        )
        .await?;
        store::create_leave_request(
            &pool,
            employee_id,
            NaiveDate::from_ymd_opt(2026, 10, 12).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 12).unwrap(),
            "Dentist appointment",
        )
        .await?;
        println!("Seeded 2 leave requests for employee {employee_id}");
    }

    println!("Done: {} employees", EMPLOYEES.len());
    Ok(())
}
