//! Repository layer for database operations.

use crate::domain::{NewUser, User, UserId};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
}

fn user_from_row(row: &SqliteRow) -> Result<User, sqlx::Error> {
    let id: i64 = row.try_get("id")?;
    Ok(User {
        id: UserId::from(id),
        username: row.try_get("username")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
    })
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Register a user, storing only a digest of the password.
    ///
    /// # Errors
    /// Returns an error if the insert fails, including when the username or
    /// email is already taken.
    pub async fn insert_user(&self, new_user: &NewUser) -> Result<User, sqlx::Error> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (username, password_digest, name, email, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, username, name, email
            "#,
        )
        .bind(&new_user.username)
        .bind(new_user.password_digest())
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(chrono::Utc::now().timestamp_millis())
        .fetch_one(&self.pool)
        .await?;

        user_from_row(&row)
    }

    /// Fetch a user by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_user(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        let row = sqlx::query("SELECT id, username, name, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    /// Users whose username, name, or email contains `needle`, ignoring case,
    /// ordered by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn search_users(&self, needle: &str, limit: u32) -> Result<Vec<User>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, name, email FROM users
            WHERE INSTR(LOWER(username), LOWER(?1)) > 0
               OR INSTR(LOWER(name), LOWER(?1)) > 0
               OR INSTR(LOWER(email), LOWER(?1)) > 0
            ORDER BY id
            LIMIT ?2
            "#,
        )
        .bind(needle)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(user_from_row).collect()
    }

    /// All users ordered by id, at most `limit`.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_users(&self, limit: u32) -> Result<Vec<User>, sqlx::Error> {
        let rows = sqlx::query("SELECT id, username, name, email FROM users ORDER BY id LIMIT ?")
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(user_from_row).collect()
    }
}
