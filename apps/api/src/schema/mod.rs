// Schema definitions: table names, closed enums, and the relationship table.
// The DDL itself lives in `migrations/`; tests keep the two in step.

pub mod enums;
pub mod relations;

use sqlx::postgres::PgRow;
use sqlx::FromRow;

use crate::models::*;

/// A persisted table, identified by its quoted Postgres name.
pub trait Table {
    const NAME: &'static str;
}

/// A table keyed by a serial `id` column.
pub trait Record: Table + for<'r> FromRow<'r, PgRow> + Send + Unpin {}

macro_rules! records {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Table for $ty {
                const NAME: &'static str = $name;
            }

            impl Record for $ty {}
        )*

        const RECORD_TABLES: &[&str] = &[$($name),*];
    };
}

records! {
    TalentPool => "TalentPool",
    Profile => "Profile",
    SharedRawProfile => "SharedRawProfile",
    SensitiveProfileData => "SensitiveProfileData",
    ProfileOrg => "ProfileOrg",
    Notification => "Notification",
    SimilarProfile => "SimilarProfile",
    AccomplishmentOrg => "AccomplishmentOrg",
    Activity => "Activity",
    Article => "Article",
    Certification => "Certification",
    Course => "Course",
    Education => "Education",
    Experience => "Experience",
    Group => "Group",
    HonourAward => "HonourAward",
    Language => "Language",
    LinkedInProfileView => "LinkedInProfileViews",
    Patent => "Patent",
    PeopleAlsoViewed => "PeopleAlsoViewed",
    Project => "Project",
    Publication => "Publication",
    TestScore => "TestScore",
    VolunteerWork => "VolunteerWork",
    Category => "Category",
    CategoryScore => "CategoryScore",
    RecentCategoryScore => "RecentCategoryScore",
    Client => "Client",
    Job => "Job",
    JobHistory => "JobHistory",
    CandidateStage => "CandidateStage",
    Interview => "Interview",
    Company => "Company",
    Product => "Product",
    CompanyProductCategory => "CompanyProductCategory",
}

impl Table for JobCandidate {
    const NAME: &'static str = "_JobCandidates";
}

/// Every table in the schema, id-keyed records first, join tables last.
pub const TABLES: &[&str] = &concat_tables();

const fn concat_tables() -> [&'static str; RECORD_TABLES.len() + 1] {
    let mut out = [JobCandidate::NAME; RECORD_TABLES.len() + 1];
    let mut i = 0;
    while i < RECORD_TABLES.len() {
        out[i] = RECORD_TABLES[i];
        i += 1;
    }
    out
}

#[cfg(test)]
pub(crate) const MIGRATION: &str =
    include_str!("../../migrations/20240601000000_initial_schema.sql");
