mod form;
mod models;
mod query;
mod session;
mod stats;
mod store;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use models::{ApplicationInput, JobType, Status};
use session::Session;
use store::ApplicationStore;
use tui::App;

#[derive(Parser)]
#[command(name = "jobtrack")]
#[command(about = "Job application tracker - add, filter, and review applications in the terminal")]
struct Cli {
    /// JSON file with applications to load at startup
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Start with built-in sample applications
    #[arg(long)]
    demo: bool,

    /// Email address that gets the manager role on login
    #[arg(long, default_value = session::DEFAULT_MANAGER_EMAIL)]
    manager_email: String,
}

fn load_seed(path: &Path) -> Result<Vec<ApplicationInput>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse seed file: {}", path.display()))
}

fn demo_inputs() -> Vec<ApplicationInput> {
    vec![
        ApplicationInput {
            company_name: "Acme Corp".to_string(),
            job_title: "Software Engineer".to_string(),
            job_type: JobType::FullTime,
            status: Status::Applied,
            location: "Remote".to_string(),
            applied_date: NaiveDate::from_ymd_opt(2024, 4, 2),
            notes: Some("Referred by a former colleague.".to_string()),
        },
        ApplicationInput {
            company_name: "Globex".to_string(),
            job_title: "Platform Engineer".to_string(),
            job_type: JobType::Contract,
            status: Status::InterviewScheduled,
            location: "Berlin".to_string(),
            applied_date: NaiveDate::from_ymd_opt(2024, 4, 18),
            notes: None,
        },
        ApplicationInput {
            company_name: "Initech".to_string(),
            job_title: "Data Analyst".to_string(),
            job_type: JobType::Internship,
            status: Status::Rejected,
            location: "Austin".to_string(),
            applied_date: NaiveDate::from_ymd_opt(2024, 3, 11),
            notes: Some("Rejected after the take-home.".to_string()),
        },
        ApplicationInput {
            company_name: "Umbrella".to_string(),
            job_title: "Engineering Manager".to_string(),
            job_type: JobType::FullTime,
            status: Status::Selected,
            location: "London".to_string(),
            applied_date: NaiveDate::from_ymd_opt(2024, 2, 26),
            notes: None,
        },
        ApplicationInput {
            company_name: "Hooli".to_string(),
            job_title: "Site Reliability Engineer".to_string(),
            job_type: JobType::PartTime,
            status: Status::Applied,
            location: "Remote".to_string(),
            applied_date: None,
            notes: Some("Draft saved, application not sent yet.".to_string()),
        },
        ApplicationInput {
            company_name: "Stark Industries".to_string(),
            job_title: "Firmware Engineer".to_string(),
            job_type: JobType::FullTime,
            status: Status::Applied,
            location: "Boston".to_string(),
            applied_date: NaiveDate::from_ymd_opt(2024, 4, 25),
            notes: None,
        },
    ]
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut store = ApplicationStore::new();
    if let Some(path) = &cli.seed {
        store.seed(load_seed(path)?);
    }
    if cli.demo {
        store.seed(demo_inputs());
    }

    let session = Session::new(cli.manager_email);
    let mut app = App::new(store, session);
    tui::run(&mut app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_json_uses_display_names() {
        let json = r#"[
            {
                "company_name": "Acme",
                "job_title": "Engineer",
                "job_type": "Full-time",
                "status": "Interview Scheduled",
                "location": "Remote",
                "applied_date": "2024-05-01"
            }
        ]"#;
        let inputs: Vec<ApplicationInput> = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].job_type, JobType::FullTime);
        assert_eq!(inputs[0].status, Status::InterviewScheduled);
        assert_eq!(inputs[0].applied_date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(inputs[0].notes, None);
    }

    #[test]
    fn demo_data_seeds_the_store() {
        let mut store = ApplicationStore::new();
        store.seed(demo_inputs());
        assert_eq!(store.len(), 6);
        assert!(store.records().iter().any(|r| r.applied_date.is_none()));
    }
}
