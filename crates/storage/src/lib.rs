use anyhow::{Context, Result};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Row, Sqlite,
};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use shared::domain::{EmployeeDraft, EmployeeId, EmployeeRecord};

/// Durable CRUD over the `employees` table.
///
/// The table schema (and the `mobile_number` column name) matches data files
/// written by earlier versions of the application, so existing databases
/// keep working. Opening a store never drops or rewrites existing rows.
#[derive(Clone)]
pub struct EmployeeStore {
    pool: Pool<Sqlite>,
}

impl EmployeeStore {
    pub async fn new(database_url: &str) -> Result<Self> {
        ensure_sqlite_parent_dir_exists(database_url)?;

        let connect_options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(connect_options)
            .await?;

        let store = Self { pool };
        store.ensure_employees_table().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    pub async fn health_check(&self) -> Result<()> {
        let _: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .context("sqlite ping failed")?;
        Ok(())
    }

    async fn ensure_employees_table(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS employees (
                id            INTEGER PRIMARY KEY AUTOINCREMENT,
                name          TEXT NOT NULL,
                position      TEXT NOT NULL,
                salary        REAL NOT NULL,
                dob           TEXT NOT NULL,
                email         TEXT NOT NULL,
                mobile_number TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("failed to ensure employees table exists")?;
        Ok(())
    }

    /// Inserts a new row and returns the generated id. The draft is assumed
    /// to be validated already; this layer adds no checks of its own.
    pub async fn add_employee(&self, draft: &EmployeeDraft) -> Result<EmployeeId> {
        let rec = sqlx::query(
            "INSERT INTO employees (name, position, salary, dob, email, mobile_number)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(&draft.name)
        .bind(&draft.position)
        .bind(draft.salary)
        .bind(&draft.dob)
        .bind(&draft.email)
        .bind(&draft.mobile)
        .fetch_one(&self.pool)
        .await
        .context("failed to insert employee")?;
        Ok(EmployeeId(rec.get::<i64, _>(0)))
    }

    /// Returns every row in id order.
    pub async fn list_employees(&self) -> Result<Vec<EmployeeRecord>> {
        let rows = sqlx::query(
            "SELECT id, name, position, salary, dob, email, mobile_number
             FROM employees
             ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .context("failed to list employees")?;

        Ok(rows
            .into_iter()
            .map(|r| EmployeeRecord {
                id: EmployeeId(r.get::<i64, _>(0)),
                name: r.get::<String, _>(1),
                position: r.get::<String, _>(2),
                salary: r.get::<f64, _>(3),
                dob: r.get::<String, _>(4),
                email: r.get::<String, _>(5),
                mobile: r.get::<String, _>(6),
            })
            .collect())
    }

    /// Overwrites all mutable columns of the row matching `id`. Returns
    /// whether a row matched; a missing id leaves the table untouched.
    pub async fn update_employee(&self, id: EmployeeId, draft: &EmployeeDraft) -> Result<bool> {
        let updated = sqlx::query(
            "UPDATE employees
             SET name = ?, position = ?, salary = ?, dob = ?, email = ?, mobile_number = ?
             WHERE id = ?",
        )
        .bind(&draft.name)
        .bind(&draft.position)
        .bind(draft.salary)
        .bind(&draft.dob)
        .bind(&draft.email)
        .bind(&draft.mobile)
        .bind(id.0)
        .execute(&self.pool)
        .await
        .context("failed to update employee")?
        .rows_affected();
        Ok(updated > 0)
    }

    /// Removes the row matching `id`. Returns whether a row matched.
    pub async fn delete_employee(&self, id: EmployeeId) -> Result<bool> {
        let deleted = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .context("failed to delete employee")?
            .rows_affected();
        Ok(deleted > 0)
    }
}

fn ensure_sqlite_parent_dir_exists(database_url: &str) -> Result<()> {
    let Some(path) = sqlite_path(database_url) else {
        return Ok(());
    };

    let Some(parent) = path.parent() else {
        return Ok(());
    };

    fs::create_dir_all(parent).with_context(|| {
        format!(
            "failed to create parent directory '{}' for database url '{database_url}'",
            parent.display()
        )
    })?;

    Ok(())
}

fn sqlite_path(database_url: &str) -> Option<PathBuf> {
    if database_url == "sqlite::memory:" || !database_url.starts_with("sqlite:") {
        return None;
    }

    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:")
        .split('?')
        .next()
        .unwrap_or_default();

    if path.is_empty() {
        return None;
    }

    Some(Path::new(path).to_path_buf())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
