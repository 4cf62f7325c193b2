use sqlx::PgPool;

use crate::db;
use crate::models::Profile;

/// Returns the profile with the lowest `id`, or `None` when the table is empty.
/// No filtering and no pagination.
pub async fn get_first_profile(pool: &PgPool) -> Result<Option<Profile>, sqlx::Error> {
    db::first::<Profile>(pool).await
}
