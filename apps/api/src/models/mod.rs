// Row types outside the profile read are built only by sqlx decoding.
#![allow(dead_code)]

// Row records for every table in the sourcing schema.
// Field names are snake_case; column names are kept via sqlx/serde renames so
// JSON responses carry the stored column names.

pub mod enrichment;
pub mod hiring;
pub mod profile;
pub mod scoring;

pub use enrichment::{
    AccomplishmentOrg, Activity, Article, Certification, Course, Education, Experience, Group,
    HonourAward, Language, LinkedInProfileView, Patent, PeopleAlsoViewed, Project, Publication,
    SimilarProfile, TestScore, VolunteerWork,
};
pub use hiring::{CandidateStage, Client, Interview, Job, JobCandidate, JobHistory};
pub use profile::{
    Notification, Profile, ProfileOrg, SensitiveProfileData, SharedRawProfile, TalentPool,
};
pub use scoring::{
    Category, CategoryScore, Company, CompanyProductCategory, Product, RecentCategoryScore,
};
