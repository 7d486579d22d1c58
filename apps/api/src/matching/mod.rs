//! Job matching: scoring one job against a skill list, ranking a catalog, and explaining
//! a single match.

pub mod catalog;
pub mod experience_years;
pub mod handlers;
pub mod insights;
pub mod models;
pub mod ranker;
pub mod scorer;

pub use catalog::JobCatalog;
pub use models::{JobFilters, JobPosting, MatchInsights};
pub use scorer::{MatchScorer, WeightedMatchScorer};
