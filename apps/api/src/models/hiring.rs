use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::enums::{OutcomeResult, Stage};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: i32,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: i32,
    #[sqlx(rename = "clientId")]
    #[serde(rename = "clientId")]
    pub client_id: Option<i32>,
    pub department: Option<String>,
    #[sqlx(rename = "businessUnit")]
    #[serde(rename = "businessUnit")]
    pub business_unit: Option<String>,
    #[sqlx(rename = "hiringTeam")]
    #[serde(rename = "hiringTeam")]
    pub hiring_team: Option<Vec<String>>,
    pub title: Option<String>,
    pub salary: Option<i32>,
    pub currency: Option<String>,
    #[sqlx(rename = "openSince")]
    #[serde(rename = "openSince")]
    pub open_since: Option<NaiveDateTime>,
    #[sqlx(rename = "createdAt")]
    #[serde(rename = "createdAt")]
    pub created_at: Option<NaiveDateTime>,
    #[sqlx(rename = "updatedAt")]
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<NaiveDateTime>,
    #[sqlx(rename = "userId")]
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub description: Option<String>,
    #[sqlx(rename = "jobDescription")]
    #[serde(rename = "jobDescription")]
    pub job_description: Option<String>,
    pub location: Option<String>,
    #[sqlx(rename = "orgId")]
    #[serde(rename = "orgId")]
    pub org_id: Option<String>,
}

/// Audit trail entry for a job. Restricts deletion of the job.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobHistory {
    pub id: i32,
    #[sqlx(rename = "jobId")]
    #[serde(rename = "jobId")]
    pub job_id: i32,
    #[sqlx(rename = "userId")]
    #[serde(rename = "userId")]
    pub user_id: String,
    pub action: String,
    pub timestamp: NaiveDateTime,
    pub details: String,
}

/// A profile's position in one job's pipeline. Unique per (profile, job).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateStage {
    pub id: i32,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: i32,
    #[sqlx(rename = "jobId")]
    #[serde(rename = "jobId")]
    pub job_id: i32,
    pub stage: Stage,
    #[sqlx(rename = "categoryScore")]
    #[serde(rename = "categoryScore")]
    pub category_score: Option<f64>,
    #[sqlx(rename = "comfortZoneScore")]
    #[serde(rename = "comfortZoneScore")]
    pub comfort_zone_score: Option<f64>,
    #[sqlx(rename = "overallScore")]
    #[serde(rename = "overallScore")]
    pub overall_score: Option<f64>,
    #[sqlx(rename = "stabilityScore")]
    #[serde(rename = "stabilityScore")]
    pub stability_score: Option<f64>,
    #[sqlx(rename = "recentCategoryScore")]
    #[serde(rename = "recentCategoryScore")]
    pub recent_category_score: Option<f64>,
    #[sqlx(rename = "orgId")]
    #[serde(rename = "orgId")]
    pub org_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Interview {
    pub id: i32,
    #[sqlx(rename = "candidateStageId")]
    #[serde(rename = "candidateStageId")]
    pub candidate_stage_id: Option<i32>,
    #[sqlx(rename = "userId")]
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub outcome: Option<OutcomeResult>,
    #[sqlx(rename = "createdAt")]
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[sqlx(rename = "updatedAt")]
    #[serde(rename = "updatedAt")]
    pub updated_at: NaiveDateTime,
    pub interviewers: Option<Vec<String>>,
    pub attendees: Option<Vec<String>>,
    #[sqlx(rename = "endTime")]
    #[serde(rename = "endTime")]
    pub end_time: Option<NaiveDateTime>,
    #[sqlx(rename = "startTime")]
    #[serde(rename = "startTime")]
    pub start_time: Option<NaiveDateTime>,
    pub messages: Option<String>,
    #[sqlx(rename = "eventId")]
    #[serde(rename = "eventId")]
    pub event_id: Option<String>,
}

/// Row of the `_JobCandidates` many-to-many join between jobs and profiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, FromRow)]
pub struct JobCandidate {
    #[sqlx(rename = "A")]
    #[serde(rename = "A")]
    pub job_id: i32,
    #[sqlx(rename = "B")]
    #[serde(rename = "B")]
    pub profile_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_stage_deserializes_stage_label() {
        let row: CandidateStage = serde_json::from_value(serde_json::json!({
            "id": 1,
            "profileId": 10,
            "jobId": 20,
            "stage": "FIRST_INTERVIEW",
            "categoryScore": null,
            "comfortZoneScore": null,
            "overallScore": 0.82,
            "stabilityScore": null,
            "recentCategoryScore": null,
            "orgId": "org_1"
        }))
        .unwrap();
        assert_eq!(row.stage, Stage::FirstInterview);
        assert_eq!(row.job_id, 20);
    }

    #[test]
    fn test_job_candidate_uses_join_columns() {
        let value = serde_json::to_value(JobCandidate {
            job_id: 4,
            profile_id: 9,
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({ "A": 4, "B": 9 }));
    }
}
