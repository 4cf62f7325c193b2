use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a candidate in a job's hiring pipeline, in pipeline order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "stage", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    Applied,
    Added,
    AskSyphtrToReachOut,
    Screening,
    Screened,
    FirstInterview,
    MidInterviews,
    FinalInterview,
    Hired,
}

impl Stage {
    #[cfg(test)]
    pub const ALL: [Stage; 9] = [
        Stage::Applied,
        Stage::Added,
        Stage::AskSyphtrToReachOut,
        Stage::Screening,
        Stage::Screened,
        Stage::FirstInterview,
        Stage::MidInterviews,
        Stage::FinalInterview,
        Stage::Hired,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Applied => "APPLIED",
            Stage::Added => "ADDED",
            Stage::AskSyphtrToReachOut => "ASK_SYPHTR_TO_REACH_OUT",
            Stage::Screening => "SCREENING",
            Stage::Screened => "SCREENED",
            Stage::FirstInterview => "FIRST_INTERVIEW",
            Stage::MidInterviews => "MID_INTERVIEWS",
            Stage::FinalInterview => "FINAL_INTERVIEW",
            Stage::Hired => "HIRED",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interview outcome on a one-to-five scale.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "outcome_result", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutcomeResult {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl OutcomeResult {
    #[cfg(test)]
    pub const ALL: [OutcomeResult; 5] = [
        OutcomeResult::One,
        OutcomeResult::Two,
        OutcomeResult::Three,
        OutcomeResult::Four,
        OutcomeResult::Five,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OutcomeResult::One => "ONE",
            OutcomeResult::Two => "TWO",
            OutcomeResult::Three => "THREE",
            OutcomeResult::Four => "FOUR",
            OutcomeResult::Five => "FIVE",
        }
    }
}

impl fmt::Display for OutcomeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "company_size", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompanySize {
    Seed,
    Startup,
    Scaleup,
    MidSize,
    Big,
    Huge,
}

impl CompanySize {
    #[cfg(test)]
    pub const ALL: [CompanySize; 6] = [
        CompanySize::Seed,
        CompanySize::Startup,
        CompanySize::Scaleup,
        CompanySize::MidSize,
        CompanySize::Big,
        CompanySize::Huge,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CompanySize::Seed => "SEED",
            CompanySize::Startup => "STARTUP",
            CompanySize::Scaleup => "SCALEUP",
            CompanySize::MidSize => "MID_SIZE",
            CompanySize::Big => "BIG",
            CompanySize::Huge => "HUGE",
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
