//! Skill-gap analysis and the learning roadmap built from it.

pub mod analyzer;
pub mod handlers;
pub mod roadmap;

pub use analyzer::{analyze_skill_gap, GapAnalysis};
pub use roadmap::{generate_learning_roadmap, LearningPhase};
