use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Organization-owned, enriched candidate record.
/// Unique on (`public_identifier`, `orgId`).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: i32,
    pub public_identifier: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub country_full_name: Option<String>,
    pub summary: Option<String>,
    pub profile_pic_url: Option<String>,
    pub background_cover_image_url: Option<String>,
    pub headline: Option<String>,
    pub occupation: Option<String>,
    pub connections: Option<i32>,
    pub follower_count: Option<i32>,
    pub recommendations: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub last_updated: Option<NaiveDateTime>,
    pub linkedin_profile_url: String,
    #[sqlx(rename = "talentPoolId")]
    #[serde(rename = "talentPoolId")]
    pub talent_pool_id: Option<i32>,
    #[sqlx(rename = "orgId")]
    #[serde(rename = "orgId")]
    pub org_id: Option<String>,
    #[sqlx(rename = "userId")]
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
    #[sqlx(rename = "averageTenureScore")]
    #[serde(rename = "averageTenureScore")]
    pub average_tenure_score: Option<f64>,
    #[sqlx(rename = "comfortZoneScore")]
    #[serde(rename = "comfortZoneScore")]
    pub comfort_zone_score: Option<f64>,
    #[sqlx(rename = "stabilityScoreDB")]
    #[serde(rename = "stabilityScoreDB")]
    pub stability_score_db: Option<f64>,
}

/// Deduplicated, organization-independent snapshot of publicly sourced data.
/// Unique on `linkedin_profile_url` and on `public_identifier`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SharedRawProfile {
    pub id: i32,
    pub public_identifier: Option<String>,
    pub linkedin_profile_url: String,
    pub last_updated: Option<NaiveDateTime>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub country_full_name: Option<String>,
    pub summary: Option<String>,
    pub profile_pic_url: Option<String>,
    pub background_cover_image_url: Option<String>,
    pub headline: Option<String>,
    pub occupation: Option<String>,
    pub connections: Option<i32>,
    pub follower_count: Option<i32>,
    pub recommendations: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    #[sqlx(rename = "stabilityScoreDB")]
    #[serde(rename = "stabilityScoreDB")]
    pub stability_score_db: Option<f64>,
    #[sqlx(rename = "comfortZoneScore")]
    #[serde(rename = "comfortZoneScore")]
    pub comfort_zone_score: Option<f64>,
    #[sqlx(rename = "averageTenureScore")]
    #[serde(rename = "averageTenureScore")]
    pub average_tenure_score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TalentPool {
    pub id: i32,
    #[sqlx(rename = "orgId")]
    #[serde(rename = "orgId")]
    pub org_id: String,
    #[sqlx(rename = "createdAt")]
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[sqlx(rename = "updatedAt")]
    #[serde(rename = "updatedAt")]
    pub updated_at: NaiveDateTime,
    pub name: String,
}

/// Contact details and notes. Restricts deletion of its profile.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SensitiveProfileData {
    pub id: i32,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cv: Option<String>,
    pub notes: Option<String>,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: i32,
    #[sqlx(rename = "userId")]
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    #[sqlx(rename = "orgId")]
    #[serde(rename = "orgId")]
    pub org_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileOrg {
    pub id: i32,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: i32,
    #[sqlx(rename = "orgId")]
    #[serde(rename = "orgId")]
    pub org_id: String,
    pub public_identifier: Option<String>,
}

/// User-facing notification about a profile. `profileId` is informational,
/// not a foreign key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    pub id: i32,
    #[sqlx(rename = "userId")]
    #[serde(rename = "userId")]
    pub user_id: String,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: i32,
    #[sqlx(rename = "profileName")]
    #[serde(rename = "profileName")]
    pub profile_name: String,
    #[sqlx(rename = "profilePicUrl")]
    #[serde(rename = "profilePicUrl")]
    pub profile_pic_url: String,
    pub message: String,
    #[sqlx(rename = "createdAt")]
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
}
