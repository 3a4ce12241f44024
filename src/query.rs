use crate::models::{ApplicationRecord, JobType, Status};

pub const PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    CompanyName,
    JobTitle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    CompanyName,
    AppliedDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    fn flipped(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// The table view's query parameters. Session-local, never persisted.
#[derive(Debug, Clone)]
pub struct QueryState {
    pub search_term: String,
    pub search_field: SearchField,
    pub job_type_filter: Option<JobType>,
    pub status_filter: Option<Status>,
    pub sort: Option<SortKey>,
    pub sort_dir: SortDir,
    /// 1-based.
    pub page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            search_field: SearchField::CompanyName,
            job_type_filter: None,
            status_filter: None,
            sort: None,
            sort_dir: SortDir::Asc,
            page: 1,
        }
    }
}

impl QueryState {
    /// Search and filter changes always jump back to the first page.
    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
        self.page = 1;
    }

    pub fn set_job_type_filter(&mut self, filter: Option<JobType>) {
        self.job_type_filter = filter;
        self.page = 1;
    }

    pub fn set_status_filter(&mut self, filter: Option<Status>) {
        self.status_filter = filter;
        self.page = 1;
    }

    /// Selecting the active key flips direction; selecting a new key starts
    /// ascending, except applied date which starts newest-first.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort == Some(key) {
            self.sort_dir = self.sort_dir.flipped();
        } else {
            self.sort = Some(key);
            self.sort_dir = match key {
                SortKey::AppliedDate => SortDir::Desc,
                SortKey::CompanyName => SortDir::Asc,
            };
        }
    }

    pub fn reset_sort(&mut self) {
        self.sort = None;
        self.sort_dir = SortDir::Asc;
    }

    /// Refuses to move past the last page; the caller disables the action.
    pub fn next_page(&mut self, total_pages: usize) -> bool {
        if self.page < total_pages {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Refuses to move before page 1.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryPage {
    pub items: Vec<ApplicationRecord>,
    pub total_pages: usize,
    pub total_matches: usize,
}

/// Derives one page of results: search, then filters, then sort, then slice.
/// Pure; recomputed from the full collection on every call.
pub fn run(records: &[ApplicationRecord], query: &QueryState) -> QueryPage {
    let term = query.search_term.to_lowercase();

    let mut matched: Vec<&ApplicationRecord> = records
        .iter()
        .filter(|r| {
            if term.is_empty() {
                return true;
            }
            let field = match query.search_field {
                SearchField::CompanyName => &r.company_name,
                SearchField::JobTitle => &r.job_title,
            };
            field.to_lowercase().contains(&term)
        })
        .filter(|r| query.job_type_filter.is_none_or(|jt| r.job_type == jt))
        .filter(|r| query.status_filter.is_none_or(|st| r.status == st))
        .collect();

    if let Some(key) = query.sort {
        // Stable sort; ties keep collection order in either direction.
        matched.sort_by(|a, b| {
            let ord = match key {
                SortKey::CompanyName => a
                    .company_name
                    .to_lowercase()
                    .cmp(&b.company_name.to_lowercase())
                    .then_with(|| a.company_name.cmp(&b.company_name)),
                // Missing date sorts as the Unix epoch, i.e. oldest.
                SortKey::AppliedDate => a
                    .applied_date
                    .unwrap_or_default()
                    .cmp(&b.applied_date.unwrap_or_default()),
            };
            match query.sort_dir {
                SortDir::Asc => ord,
                SortDir::Desc => ord.reverse(),
            }
        });
    }

    let total_matches = matched.len();
    let total_pages = total_matches.div_ceil(PAGE_SIZE).max(1);
    let start = (query.page - 1) * PAGE_SIZE;
    let items = matched
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    QueryPage {
        items,
        total_pages,
        total_matches,
    }
}
