use crate::models::{ApplicationRecord, Status};

/// How many entries the "recent applications" list shows.
pub const RECENT_LIMIT: usize = 5;

/// Dashboard summary. Derived from the full collection on every read;
/// nothing here is cached or invalidated.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total: usize,
    pub applied: usize,
    pub interview_scheduled: usize,
    pub selected: usize,
    pub rejected: usize,
    /// The most recently applied records, newest first. A missing applied
    /// date counts as the Unix epoch; ties keep collection order.
    pub recent: Vec<ApplicationRecord>,
}

impl DashboardStats {
    pub fn compute(records: &[ApplicationRecord]) -> Self {
        let count = |status: Status| records.iter().filter(|r| r.status == status).count();

        let mut recent: Vec<ApplicationRecord> = records.to_vec();
        recent.sort_by(|a, b| {
            b.applied_date
                .unwrap_or_default()
                .cmp(&a.applied_date.unwrap_or_default())
        });
        recent.truncate(RECENT_LIMIT);

        Self {
            total: records.len(),
            applied: count(Status::Applied),
            interview_scheduled: count(Status::InterviewScheduled),
            selected: count(Status::Selected),
            rejected: count(Status::Rejected),
            recent,
        }
    }
}
