use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::Profile;
use crate::profiles::queries::get_first_profile;
use crate::state::AppState;

/// GET /
/// Returns the first profile, or `null` when there are none.
pub async fn handle_get_first_profile(
    State(state): State<AppState>,
) -> Result<Json<Option<Profile>>, AppError> {
    let profile = get_first_profile(&state.db).await?;
    Ok(Json(profile))
}
