//! Auxiliary enrichment rows. Each optionally belongs to an org-owned
//! `Profile` and to the shared raw snapshot it was scraped into; deleting
//! either parent nulls the reference.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Experience {
    pub id: i32,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: Option<i32>,
    pub company: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: Option<NaiveDateTime>,
    pub ends_at: Option<NaiveDateTime>,
    pub company_linkedin_profile_url: Option<String>,
    pub logo_url: Option<String>,
    #[sqlx(rename = "sharedRawProfileId")]
    #[serde(rename = "sharedRawProfileId")]
    pub shared_raw_profile_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Education {
    pub id: i32,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: Option<i32>,
    pub school: Option<String>,
    pub degree_name: Option<String>,
    pub field_of_study: Option<String>,
    pub starts_at: Option<NaiveDateTime>,
    pub ends_at: Option<NaiveDateTime>,
    pub description: Option<String>,
    pub activities_and_societies: Option<String>,
    pub grade: Option<String>,
    pub logo_url: Option<String>,
    pub school_linkedin_profile_url: Option<String>,
    #[sqlx(rename = "sharedRawProfileId")]
    #[serde(rename = "sharedRawProfileId")]
    pub shared_raw_profile_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Certification {
    pub id: i32,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: Option<i32>,
    pub authority: Option<String>,
    #[sqlx(rename = "displaySource")]
    #[serde(rename = "displaySource")]
    pub display_source: Option<String>,
    #[sqlx(rename = "endsAt")]
    #[serde(rename = "endsAt")]
    pub ends_at: Option<NaiveDateTime>,
    #[sqlx(rename = "licenseNumber")]
    #[serde(rename = "licenseNumber")]
    pub license_number: Option<String>,
    pub name: Option<String>,
    #[sqlx(rename = "startsAt")]
    #[serde(rename = "startsAt")]
    pub starts_at: Option<NaiveDateTime>,
    pub url: Option<String>,
    #[sqlx(rename = "sharedRawProfileId")]
    #[serde(rename = "sharedRawProfileId")]
    pub shared_raw_profile_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: i32,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: Option<i32>,
    pub name: Option<String>,
    pub number: Option<String>,
    #[sqlx(rename = "sharedRawProfileId")]
    #[serde(rename = "sharedRawProfileId")]
    pub shared_raw_profile_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AccomplishmentOrg {
    pub id: i32,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: Option<i32>,
    #[sqlx(rename = "orgName")]
    #[serde(rename = "orgName")]
    pub org_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[sqlx(rename = "startsAt")]
    #[serde(rename = "startsAt")]
    pub starts_at: Option<NaiveDateTime>,
    #[sqlx(rename = "endsAt")]
    #[serde(rename = "endsAt")]
    pub ends_at: Option<NaiveDateTime>,
    #[sqlx(rename = "sharedRawProfileId")]
    #[serde(rename = "sharedRawProfileId")]
    pub shared_raw_profile_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Activity {
    pub id: i32,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: Option<i32>,
    #[sqlx(rename = "activityStatus")]
    #[serde(rename = "activityStatus")]
    pub activity_status: Option<String>,
    pub link: Option<String>,
    pub title: Option<String>,
    #[sqlx(rename = "sharedRawProfileId")]
    #[serde(rename = "sharedRawProfileId")]
    pub shared_raw_profile_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Article {
    pub id: i32,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: Option<i32>,
    pub title: Option<String>,
    pub link: Option<String>,
    #[sqlx(rename = "publishedDate")]
    #[serde(rename = "publishedDate")]
    pub published_date: Option<NaiveDateTime>,
    pub author: Option<String>,
    #[sqlx(rename = "imageUrl")]
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[sqlx(rename = "sharedRawProfileId")]
    #[serde(rename = "sharedRawProfileId")]
    pub shared_raw_profile_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Group {
    pub id: i32,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: Option<i32>,
    #[sqlx(rename = "profilePicUrl")]
    #[serde(rename = "profilePicUrl")]
    pub profile_pic_url: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    #[sqlx(rename = "sharedRawProfileId")]
    #[serde(rename = "sharedRawProfileId")]
    pub shared_raw_profile_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HonourAward {
    pub id: i32,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: Option<i32>,
    pub title: Option<String>,
    pub issuer: Option<String>,
    #[sqlx(rename = "issuedOn")]
    #[serde(rename = "issuedOn")]
    pub issued_on: Option<NaiveDateTime>,
    pub description: Option<String>,
    #[sqlx(rename = "sharedRawProfileId")]
    #[serde(rename = "sharedRawProfileId")]
    pub shared_raw_profile_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Language {
    pub id: i32,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: Option<i32>,
    pub language: String,
    #[sqlx(rename = "sharedRawProfileId")]
    #[serde(rename = "sharedRawProfileId")]
    pub shared_raw_profile_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LinkedInProfileView {
    pub id: i32,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: Option<i32>,
    #[sqlx(rename = "orgId")]
    #[serde(rename = "orgId")]
    pub org_id: String,
    #[sqlx(rename = "userId")]
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    #[sqlx(rename = "viewedAt")]
    #[serde(rename = "viewedAt")]
    pub viewed_at: NaiveDateTime,
    #[sqlx(rename = "sharedRawProfileId")]
    #[serde(rename = "sharedRawProfileId")]
    pub shared_raw_profile_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Patent {
    pub id: i32,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: Option<i32>,
    pub title: Option<String>,
    pub issuer: Option<String>,
    #[sqlx(rename = "issuedOn")]
    #[serde(rename = "issuedOn")]
    pub issued_on: Option<NaiveDateTime>,
    pub description: Option<String>,
    #[sqlx(rename = "applicationNumber")]
    #[serde(rename = "applicationNumber")]
    pub application_number: Option<String>,
    #[sqlx(rename = "patentNumber")]
    #[serde(rename = "patentNumber")]
    pub patent_number: Option<String>,
    pub url: Option<String>,
    #[sqlx(rename = "sharedRawProfileId")]
    #[serde(rename = "sharedRawProfileId")]
    pub shared_raw_profile_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PeopleAlsoViewed {
    pub id: i32,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: Option<i32>,
    pub link: Option<String>,
    pub name: Option<String>,
    pub summary: Option<String>,
    pub location: Option<String>,
    #[sqlx(rename = "sharedRawProfileId")]
    #[serde(rename = "sharedRawProfileId")]
    pub shared_raw_profile_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SimilarProfile {
    pub id: i32,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: Option<i32>,
    pub name: Option<String>,
    pub link: Option<String>,
    pub summary: Option<String>,
    pub location: Option<String>,
    #[sqlx(rename = "sharedRawProfileId")]
    #[serde(rename = "sharedRawProfileId")]
    pub shared_raw_profile_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: i32,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[sqlx(rename = "startsAt")]
    #[serde(rename = "startsAt")]
    pub starts_at: Option<NaiveDateTime>,
    #[sqlx(rename = "endsAt")]
    #[serde(rename = "endsAt")]
    pub ends_at: Option<NaiveDateTime>,
    #[sqlx(rename = "sharedRawProfileId")]
    #[serde(rename = "sharedRawProfileId")]
    pub shared_raw_profile_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Publication {
    pub id: i32,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: Option<i32>,
    pub name: Option<String>,
    pub publisher: Option<String>,
    #[sqlx(rename = "publishedOn")]
    #[serde(rename = "publishedOn")]
    pub published_on: Option<NaiveDateTime>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[sqlx(rename = "sharedRawProfileId")]
    #[serde(rename = "sharedRawProfileId")]
    pub shared_raw_profile_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TestScore {
    pub id: i32,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: Option<i32>,
    pub name: Option<String>,
    pub score: Option<String>,
    #[sqlx(rename = "dateOn")]
    #[serde(rename = "dateOn")]
    pub date_on: Option<NaiveDateTime>,
    pub description: Option<String>,
    #[sqlx(rename = "sharedRawProfileId")]
    #[serde(rename = "sharedRawProfileId")]
    pub shared_raw_profile_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VolunteerWork {
    pub id: i32,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: Option<i32>,
    pub cause: Option<String>,
    pub company: Option<String>,
    #[sqlx(rename = "companyLinkedinProfileUrl")]
    #[serde(rename = "companyLinkedinProfileUrl")]
    pub company_linkedin_profile_url: Option<String>,
    pub description: Option<String>,
    #[sqlx(rename = "endsAt")]
    #[serde(rename = "endsAt")]
    pub ends_at: Option<NaiveDateTime>,
    #[sqlx(rename = "logoUrl")]
    #[serde(rename = "logoUrl")]
    pub logo_url: Option<String>,
    #[sqlx(rename = "startsAt")]
    #[serde(rename = "startsAt")]
    pub starts_at: Option<NaiveDateTime>,
    pub title: Option<String>,
    #[sqlx(rename = "sharedRawProfileId")]
    #[serde(rename = "sharedRawProfileId")]
    pub shared_raw_profile_id: Option<i32>,
}
