//! Pure recommendation: the three generator outputs plus advice, computed from
//! a skill set and optional quiz input. Nothing here touches a store.

use serde::Serialize;

use crate::engine::advice::{advise, Advice};
use crate::engine::jobs::{generate_roles, JobRole};
use crate::engine::quiz::{score, CategoryScore, QuizAnswers};
use crate::engine::roadmap::{generate, RoadmapMilestone, Track};
use crate::engine::taxonomy::CapabilityFlags;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// `None` when no quiz input was supplied.
    pub category_scores: Option<Vec<CategoryScore>>,
    pub job_roles: Vec<JobRole>,
    /// Learning track selected for the current skills.
    pub track: &'static str,
    pub roadmap: Vec<RoadmapMilestone>,
    pub advice: Advice,
}

pub fn recommend(skills: &[String], answers: Option<&QuizAnswers>) -> Recommendation {
    recommend_from_scores(skills, answers.map(score))
}

/// Same as `recommend`, for callers that already hold scored quiz results.
pub fn recommend_from_scores(
    skills: &[String],
    category_scores: Option<Vec<CategoryScore>>,
) -> Recommendation {
    let roadmap = generate(skills, category_scores.as_deref());
    Recommendation {
        job_roles: generate_roles(skills),
        track: Track::select(&CapabilityFlags::detect(skills)).name(),
        roadmap,
        advice: advise(skills),
        category_scores,
    }
}
