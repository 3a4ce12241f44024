use chrono::NaiveDate;
use std::time::{Duration, Instant};

use crate::models::{ApplicationInput, JobType, Status};

/// How long the "Application added!" notice stays up.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CompanyName,
    JobTitle,
    JobType,
    Status,
    Location,
    AppliedDate,
    Notes,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::CompanyName,
        Field::JobTitle,
        Field::JobType,
        Field::Status,
        Field::Location,
        Field::AppliedDate,
        Field::Notes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::CompanyName => "Company Name",
            Field::JobTitle => "Job Title",
            Field::JobType => "Job Type",
            Field::Status => "Status",
            Field::Location => "Location",
            Field::AppliedDate => "Applied Date",
            Field::Notes => "Notes",
        }
    }
}

/// Draft state for the add/edit form plus per-field validation errors and
/// the transient success notice.
#[derive(Debug, Default)]
pub struct ApplicationForm {
    pub company_name: String,
    pub job_title: String,
    pub job_type: Option<JobType>,
    pub status: Option<Status>,
    pub location: String,
    pub applied_date: String,
    pub notes: String,
    errors: Vec<(Field, String)>,
    notice: Option<(String, Instant)>,
}

impl ApplicationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fills the draft from an existing record, for inline editing.
    pub fn from_record(record: &crate::models::ApplicationRecord) -> Self {
        Self {
            company_name: record.company_name.clone(),
            job_title: record.job_title.clone(),
            job_type: Some(record.job_type),
            status: Some(record.status),
            location: record.location.clone(),
            applied_date: record
                .applied_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            notes: record.notes.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Checks the required fields and the date format. Returns true when the
    /// draft is submittable; otherwise `errors()` holds one message per
    /// offending field.
    pub fn validate(&mut self) -> bool {
        let mut errors = Vec::new();

        if self.company_name.trim().is_empty() {
            errors.push((Field::CompanyName, "Company Name is required".to_string()));
        }
        if self.job_title.trim().is_empty() {
            errors.push((Field::JobTitle, "Job Title is required".to_string()));
        }
        if self.job_type.is_none() {
            errors.push((Field::JobType, "Job Type is required".to_string()));
        }
        if self.status.is_none() {
            errors.push((Field::Status, "Status is required".to_string()));
        }
        if self.location.trim().is_empty() {
            errors.push((Field::Location, "Location is required".to_string()));
        }
        if !self.applied_date.trim().is_empty()
            && NaiveDate::parse_from_str(self.applied_date.trim(), DATE_FORMAT).is_err()
        {
            errors.push((
                Field::AppliedDate,
                "Applied Date must be YYYY-MM-DD".to_string(),
            ));
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    /// Converts a validated draft. Call only after `validate()` returned
    /// true; an unvalidated draft yields None.
    pub fn to_input(&self) -> Option<ApplicationInput> {
        let job_type = self.job_type?;
        let status = self.status?;
        if self.company_name.trim().is_empty()
            || self.job_title.trim().is_empty()
            || self.location.trim().is_empty()
        {
            return None;
        }
        let applied_date = if self.applied_date.trim().is_empty() {
            None
        } else {
            Some(NaiveDate::parse_from_str(self.applied_date.trim(), DATE_FORMAT).ok()?)
        };
        Some(ApplicationInput {
            company_name: self.company_name.trim().to_string(),
            job_title: self.job_title.trim().to_string(),
            job_type,
            status,
            location: self.location.trim().to_string(),
            applied_date,
            notes: if self.notes.trim().is_empty() {
                None
            } else {
                Some(self.notes.trim().to_string())
            },
        })
    }

    /// Resets the draft after a successful submit, leaving the notice up.
    pub fn clear(&mut self) {
        let notice = self.notice.take();
        *self = Self::default();
        self.notice = notice;
    }

    pub fn errors(&self) -> &[(Field, String)] {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| msg.as_str())
    }

    /// Editing a field dismisses its error and any success notice, matching
    /// the original form behavior.
    pub fn touched(&mut self, field: Field) {
        self.errors.retain(|(f, _)| *f != field);
        self.notice = None;
    }

    pub fn set_notice(&mut self, message: &str, now: Instant) {
        self.notice = Some((message.to_string(), now + NOTICE_TTL));
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|(msg, _)| msg.as_str())
    }

    /// Fire-and-forget expiry: called from the event-loop tick. Clearing an
    /// already-empty notice is harmless, so no cancellation is tracked.
    pub fn tick(&mut self, now: Instant) {
        if let Some((_, deadline)) = &self.notice {
            if now >= *deadline {
                self.notice = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ApplicationForm {
        ApplicationForm {
            company_name: "Acme".to_string(),
            job_title: "Engineer".to_string(),
            job_type: Some(JobType::FullTime),
            status: Some(Status::Applied),
            location: "Remote".to_string(),
            applied_date: "2024-05-10".to_string(),
            notes: "  good fit  ".to_string(),
            ..ApplicationForm::default()
        }
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let mut form = ApplicationForm::new();
        assert!(!form.validate());
        for field in [
            Field::CompanyName,
            Field::JobTitle,
            Field::JobType,
            Field::Status,
            Field::Location,
        ] {
            assert!(form.error_for(field).is_some(), "missing error for {:?}", field);
        }
        assert!(form.error_for(Field::AppliedDate).is_none());
        assert!(form.error_for(Field::Notes).is_none());
        assert!(form.to_input().is_none());
    }

    #[test]
    fn one_message_per_missing_field() {
        let mut form = filled_form();
        form.location = String::new();
        assert!(!form.validate());
        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.error_for(Field::Location), Some("Location is required"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = filled_form();
        form.company_name = "   ".to_string();
        assert!(!form.validate());
        assert!(form.error_for(Field::CompanyName).is_some());
    }

    #[test]
    fn malformed_date_is_rejected_but_empty_date_is_fine() {
        let mut form = filled_form();
        form.applied_date = "05/10/2024".to_string();
        assert!(!form.validate());
        assert!(form.error_for(Field::AppliedDate).is_some());

        form.applied_date = String::new();
        assert!(form.validate());
        assert_eq!(form.to_input().unwrap().applied_date, None);
    }

    #[test]
    fn valid_draft_converts_with_trimmed_fields() {
        let mut form = filled_form();
        assert!(form.validate());
        let input = form.to_input().unwrap();
        assert_eq!(input.company_name, "Acme");
        assert_eq!(
            input.applied_date,
            NaiveDate::from_ymd_opt(2024, 5, 10)
        );
        assert_eq!(input.notes.as_deref(), Some("good fit"));
    }

    #[test]
    fn touched_field_drops_its_error_only() {
        let mut form = ApplicationForm::new();
        form.validate();
        let before = form.errors().len();
        form.touched(Field::CompanyName);
        assert!(form.error_for(Field::CompanyName).is_none());
        assert_eq!(form.errors().len(), before - 1);
    }

    #[test]
    fn clear_resets_draft_but_keeps_notice() {
        let mut form = filled_form();
        let now = Instant::now();
        form.set_notice("Application added!", now);
        form.clear();
        assert!(form.company_name.is_empty());
        assert!(form.job_type.is_none());
        assert_eq!(form.notice(), Some("Application added!"));
    }

    #[test]
    fn notice_expires_after_the_ttl() {
        let mut form = ApplicationForm::new();
        let now = Instant::now();
        form.set_notice("Application added!", now);

        form.tick(now + Duration::from_secs(1));
        assert!(form.notice().is_some());

        form.tick(now + NOTICE_TTL);
        assert!(form.notice().is_none());

        // A second, stale tick is harmless.
        form.tick(now + Duration::from_secs(10));
        assert!(form.notice().is_none());
    }

    #[test]
    fn from_record_round_trips_the_draft() {
        let record = crate::models::ApplicationRecord {
            id: 9,
            company_name: "Globex".to_string(),
            job_title: "Analyst".to_string(),
            job_type: JobType::Contract,
            status: Status::InterviewScheduled,
            location: "NYC".to_string(),
            applied_date: NaiveDate::from_ymd_opt(2024, 7, 2),
            notes: None,
        };
        let mut form = ApplicationForm::from_record(&record);
        assert!(form.validate());
        let input = form.to_input().unwrap();
        assert_eq!(input.company_name, "Globex");
        assert_eq!(input.job_type, JobType::Contract);
        assert_eq!(input.applied_date, NaiveDate::from_ymd_opt(2024, 7, 2));
        assert_eq!(input.notes, None);
    }
}
