//! Resume field extraction and confidence scoring.
//!
//! `facade::parse_profile` is the entry point: plain text plus the source filename in, a
//! `ParsedProfile` out. Each field has its own extraction pass (`contact`, `education`,
//! `experience`, `projects`, skills via the alias table) and its own confidence heuristic.
//! Nothing here returns an error for bad input; missing fields lower the confidence instead.

pub mod confidence;
pub mod contact;
pub mod document;
pub mod education;
pub mod experience;
pub mod extractor;
pub mod facade;
pub mod handlers;
pub mod models;
pub mod projects;
pub mod text;

pub use facade::parse_profile;
pub use models::{ExperienceEntry, ParsedProfile};
