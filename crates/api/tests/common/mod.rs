use std::sync::Arc;

use api::dto::{EmployeeDto, Gender};
use api::service::EmployeeService;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

pub async fn setup() -> (Arc<DatabaseConnection>, EmployeeService) {
    let conn = Database::connect("sqlite::memory:").await.unwrap();
    let db = Arc::new(conn);
    bootstrap_sqlite(db.as_ref()).await;
    let service = EmployeeService::new(db.clone());
    (db, service)
}

async fn bootstrap_sqlite(db: &DatabaseConnection) {
    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        r#"
        CREATE TABLE employee (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            father_name TEXT NOT NULL,
            mother_name TEXT NOT NULL,
            dob TEXT,
            doj TEXT,
            gender TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    ))
    .await
    .unwrap();
}

pub fn sample_dto() -> EmployeeDto {
    EmployeeDto {
        id: None,
        name: "Arif".into(),
        father_name: "Basir".into(),
        mother_name: "Chadni".into(),
        dob: chrono::NaiveDate::from_ymd_opt(1990, 4, 2),
        doj: chrono::NaiveDate::from_ymd_opt(2020, 1, 15),
        gender: Gender::Male,
    }
}
