use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::schema::Record;

/// Creates and returns a PostgreSQL connection pool.
/// Fails immediately if the database is unreachable; there is no retry.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Applies the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    info!("Applying database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}

/// Lowest-id row of `T`'s table, or `None` when the table is empty.
pub async fn first<T: Record>(pool: &PgPool) -> Result<Option<T>, sqlx::Error> {
    let sql = format!("SELECT * FROM \"{}\" ORDER BY \"id\" ASC LIMIT 1", T::NAME);
    sqlx::query_as::<_, T>(&sql).fetch_optional(pool).await
}

#[cfg(test)]
pub async fn fetch_by_id<T: Record>(pool: &PgPool, id: i32) -> Result<Option<T>, sqlx::Error> {
    let sql = format!("SELECT * FROM \"{}\" WHERE \"id\" = $1", T::NAME);
    sqlx::query_as::<_, T>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Deletes one row, subject to the foreign-key policies of its children.
/// Returns whether a row was removed.
#[cfg(test)]
pub async fn delete_by_id<T: Record>(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
    let sql = format!("DELETE FROM \"{}\" WHERE \"id\" = $1", T::NAME);
    let result = sqlx::query(&sql).bind(id).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}

/// True when `err` is a Postgres foreign-key violation (SQLSTATE 23503).
#[cfg(test)]
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|e| e.kind() == sqlx::error::ErrorKind::ForeignKeyViolation)
}

/// True when `err` is a Postgres unique violation (SQLSTATE 23505).
#[cfg(test)]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|e| e.kind() == sqlx::error::ErrorKind::UniqueViolation)
}
