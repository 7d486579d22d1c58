//! The job collection the ranker runs over. Loaded once at startup, read-only afterwards.

use std::path::Path;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::matching::models::JobPosting;
use crate::reference::loader::read_optional;
use crate::reference::ReferenceError;

pub const JOBS_FILE: &str = "jobs.json";

#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    jobs: Vec<JobPosting>,
}

impl JobCatalog {
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        Self { jobs }
    }

    /// `<data_dir>/jobs.json` when present, otherwise the built-in sample catalog.
    pub fn load(data_dir: Option<&Path>) -> Result<Self, ReferenceError> {
        let catalog = match read_optional::<Vec<JobPosting>>(data_dir, JOBS_FILE)? {
            Some(jobs) => Self::new(jobs),
            None => Self::builtin(),
        };
        if catalog.is_empty() {
            warn!("{JOBS_FILE} holds no postings; job search will return nothing");
        } else {
            info!("Job catalog ready: {} postings", catalog.len());
        }
        Ok(catalog)
    }

    pub fn builtin() -> Self {
        let job = |id: &str,
                   title: &str,
                   company: &str,
                   location: &str,
                   salary: [u64; 2],
                   skills: &[&str],
                   experience: &str,
                   job_type: &str,
                   posted: (i32, u32, u32),
                   description: &str| JobPosting {
            job_id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            salary_range: salary,
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_required: experience.to_string(),
            job_type: job_type.to_string(),
            posted_date: NaiveDate::from_ymd_opt(posted.0, posted.1, posted.2),
            description: description.to_string(),
            match_score: None,
        };

        Self::new(vec![
            job(
                "1",
                "Frontend Developer",
                "TechFlow",
                "Remote",
                [120_000, 150_000],
                &["React", "TypeScript", "JavaScript", "HTML/CSS"],
                "1-3 years",
                "Remote",
                (2025, 1, 10),
                "Build and ship product UI in React and TypeScript.",
            ),
            job(
                "2",
                "Backend Engineer",
                "DataForge Systems",
                "Bangalore",
                [900_000, 1_400_000],
                &["Python", "FastAPI", "PostgreSQL", "Docker", "Redis"],
                "2-4 years",
                "Full-time",
                (2025, 1, 14),
                "Design Python services and the data stores behind them.",
            ),
            job(
                "3",
                "Full Stack Developer",
                "Nimbus Labs",
                "Hyderabad",
                [800_000, 1_200_000],
                &["React", "Python", "FastAPI", "MongoDB"],
                "1-2 years",
                "Full-time",
                (2025, 1, 20),
                "Own features end to end across a React client and Python API.",
            ),
            job(
                "4",
                "DevOps Engineer",
                "CloudNine Solutions",
                "Pune",
                [1_000_000, 1_600_000],
                &["Docker", "Kubernetes", "AWS", "Linux", "Git"],
                "3-5 years",
                "Full-time",
                (2025, 1, 22),
                "Run container platforms and CI/CD on AWS.",
            ),
            job(
                "5",
                "Software Engineer Intern",
                "Acme Technologies",
                "Bangalore",
                [240_000, 360_000],
                &["Python", "Git", "SQL"],
                "0 years",
                "Internship",
                (2025, 2, 1),
                "Six-month internship on internal tooling.",
            ),
        ])
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn find(&self, job_id: &str) -> Option<&JobPosting> {
        self.jobs.iter().find(|job| job.job_id == job_id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
