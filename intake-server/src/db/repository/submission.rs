//! Submission Repository
//!
//! Append-only: the table has no update or delete path. `create` is the only
//! write; lookups exist for the create round-trip and for tests asserting
//! persistence.

use super::{RepoError, RepoResult};
use shared::models::{SubmissionCreate, SubmissionRecord};
use sqlx::SqlitePool;

pub async fn create(
    pool: &SqlitePool,
    data: SubmissionCreate,
    response_status: &str,
) -> RepoResult<SubmissionRecord> {
    let now = shared::util::now_millis();

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO submission (user_id, problem_description, device_serial_number, light1, light2, light3, response_status, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) RETURNING id",
    )
    .bind(&data.user_id)
    .bind(&data.problem_description)
    .bind(&data.device_serial_number)
    .bind(&data.light1)
    .bind(&data.light2)
    .bind(&data.light3)
    .bind(response_status)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create submission".into()))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<SubmissionRecord>> {
    let record = sqlx::query_as::<_, SubmissionRecord>(
        "SELECT id, user_id, problem_description, device_serial_number, light1, light2, light3, response_status, created_at FROM submission WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(record)
}

/// Oldest submission (lowest id)
pub async fn find_first(pool: &SqlitePool) -> RepoResult<Option<SubmissionRecord>> {
    let record = sqlx::query_as::<_, SubmissionRecord>(
        "SELECT id, user_id, problem_description, device_serial_number, light1, light2, light3, response_status, created_at FROM submission ORDER BY id ASC LIMIT 1",
    )
    .fetch_optional(pool)
    .await?;
    Ok(record)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM submission")
        .fetch_one(pool)
        .await?;
    Ok(n)
}
