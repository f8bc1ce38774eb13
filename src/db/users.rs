use sqlx::PgPool;

use crate::models::{NewUser, User};

pub async fn create(
    pool: &PgPool,
    new_user: &NewUser,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (first_name, last_name, email, phone_number, password_hash)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(&new_user.first_name)
    .bind(&new_user.last_name)
    .bind(&new_user.email)
    .bind(&new_user.phone_number)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Fast-path duplicate probe. The unique constraints on `users` remain the
/// authority; a concurrent insert can still win between this query and ours.
pub async fn find_by_email_or_phone(
    pool: &PgPool,
    email: &str,
    phone_number: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1 OR phone_number = $2")
        .bind(email)
        .bind(phone_number)
        .fetch_optional(pool)
        .await
}

/// Whether the error is a violation of one of the unique constraints on `users`.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}
