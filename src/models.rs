use anyhow::bail;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    Internship,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::Internship,
        JobType::PartTime,
        JobType::Contract,
    ];
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobType::FullTime => "Full-time",
            JobType::Internship => "Internship",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for JobType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Full-time" => Ok(JobType::FullTime),
            "Internship" => Ok(JobType::Internship),
            "Part-time" => Ok(JobType::PartTime),
            "Contract" => Ok(JobType::Contract),
            other => bail!("unknown job type: {}", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Applied,
    #[serde(rename = "Interview Scheduled")]
    InterviewScheduled,
    Rejected,
    Selected,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Applied,
        Status::InterviewScheduled,
        Status::Rejected,
        Status::Selected,
    ];
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Applied => "Applied",
            Status::InterviewScheduled => "Interview Scheduled",
            Status::Rejected => "Rejected",
            Status::Selected => "Selected",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Status {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Applied" => Ok(Status::Applied),
            "Interview Scheduled" => Ok(Status::InterviewScheduled),
            "Rejected" => Ok(Status::Rejected),
            "Selected" => Ok(Status::Selected),
            other => bail!("unknown status: {}", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: u64,
    pub company_name: String,
    pub job_title: String,
    pub job_type: JobType,
    pub status: Status,
    pub location: String,
    pub applied_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// What the add/edit form produces; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationInput {
    pub company_name: String,
    pub job_title: String,
    pub job_type: JobType,
    pub status: Status,
    pub location: String,
    #[serde(default)]
    pub applied_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update: `None` leaves the field untouched. The outer option on
/// `applied_date` and `notes` distinguishes "unchanged" from "cleared".
#[derive(Debug, Clone, Default)]
pub struct ApplicationPatch {
    pub company_name: Option<String>,
    pub job_title: Option<String>,
    pub job_type: Option<JobType>,
    pub status: Option<Status>,
    pub location: Option<String>,
    pub applied_date: Option<Option<NaiveDate>>,
    pub notes: Option<Option<String>>,
}

impl ApplicationPatch {
    pub fn apply(&self, record: &mut ApplicationRecord) {
        if let Some(v) = &self.company_name {
            record.company_name = v.clone();
        }
        if let Some(v) = &self.job_title {
            record.job_title = v.clone();
        }
        if let Some(v) = self.job_type {
            record.job_type = v;
        }
        if let Some(v) = self.status {
            record.status = v;
        }
        if let Some(v) = &self.location {
            record.location = v.clone();
        }
        if let Some(v) = self.applied_date {
            record.applied_date = v;
        }
        if let Some(v) = &self.notes {
            record.notes = v.clone();
        }
    }
}
