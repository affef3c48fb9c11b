use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::quiz::QuizResult;
use crate::engine::roadmap::RoadmapMilestone;

/// Aggregate root for everything stored about a user.
///
/// `roadmap` is generated once and then only mutated by completion updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub skills: Vec<String>,
    pub quiz_result: Option<QuizResult>,
    pub roadmap: Option<Vec<RoadmapMilestone>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(user_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            email: None,
            display_name: None,
            skills: Vec::new(),
            quiz_result: None,
            roadmap: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge semantics: fields absent from the update are left untouched.
    pub fn apply(&mut self, update: ProfileUpdate, now: DateTime<Utc>) {
        let ProfileUpdate {
            email,
            display_name,
            skills,
            quiz_result,
            roadmap,
        } = update;

        if let Some(email) = email {
            self.email = Some(email);
        }
        if let Some(display_name) = display_name {
            self.display_name = Some(display_name);
        }
        if let Some(skills) = skills {
            self.skills = skills;
        }
        if let Some(quiz_result) = quiz_result {
            self.quiz_result = Some(quiz_result);
        }
        if let Some(roadmap) = roadmap {
            self.roadmap = Some(roadmap);
        }
        self.updated_at = now;
    }
}

/// Partial profile for merge-style upserts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub skills: Option<Vec<String>>,
    pub quiz_result: Option<QuizResult>,
    pub roadmap: Option<Vec<RoadmapMilestone>>,
}

impl ProfileUpdate {
    pub fn skills(skills: Vec<String>) -> Self {
        Self {
            skills: Some(skills),
            ..Self::default()
        }
    }

    pub fn quiz_result(result: QuizResult) -> Self {
        Self {
            quiz_result: Some(result),
            ..Self::default()
        }
    }

    pub fn roadmap(roadmap: Vec<RoadmapMilestone>) -> Self {
        Self {
            roadmap: Some(roadmap),
            ..Self::default()
        }
    }
}

/// One entry of a user's quiz history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResultRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub result: QuizResult,
    pub completed_at: DateTime<Utc>,
}
