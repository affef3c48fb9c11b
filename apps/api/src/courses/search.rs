//! Catalog filtering and skill-based course recommendation.

use serde::Deserialize;

use crate::engine::roadmap::Difficulty;
use crate::engine::taxonomy::matches;
use crate::models::course::Course;

/// Courses returned by `recommend_courses`.
pub const MAX_RECOMMENDED: usize = 3;

/// Filter value meaning "no filter".
pub const ALL: &str = "All";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
}

impl CourseQuery {
    fn text(&self) -> Option<String> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    fn category(&self) -> Option<&str> {
        active(self.category.as_deref())
    }

    /// Parsed level filter. An unknown level is a caller error.
    pub fn level(&self) -> Result<Option<Difficulty>, String> {
        active(self.level.as_deref())
            .map(str::parse::<Difficulty>)
            .transpose()
    }
}

fn active(filter: Option<&str>) -> Option<&str> {
    filter.filter(|f| !f.is_empty() && *f != ALL)
}

fn matches_text(course: &Course, needle: &str) -> bool {
    course.title.to_lowercase().contains(needle)
        || course.description.to_lowercase().contains(needle)
        || course
            .skills
            .iter()
            .any(|s| s.to_lowercase().contains(needle))
        || course.category.to_lowercase().contains(needle)
}

/// Applies the text query, then the exact category filter, then the level filter.
pub fn filter_courses(
    courses: Vec<Course>,
    query: &CourseQuery,
) -> Result<Vec<Course>, String> {
    let text = query.text();
    let category = query.category();
    let level = query.level()?;

    Ok(courses
        .into_iter()
        .filter(|c| text.as_deref().map_or(true, |t| matches_text(c, t)))
        .filter(|c| category.map_or(true, |cat| c.category == cat))
        .filter(|c| level.map_or(true, |lvl| c.level == lvl))
        .collect())
}

/// "All" followed by the distinct categories in first-seen order.
pub fn categories(courses: &[Course]) -> Vec<String> {
    let mut out = vec![ALL.to_string()];
    for course in courses {
        if !out.iter().any(|c| *c == course.category) {
            out.push(course.category.clone());
        }
    }
    out
}

/// Number of course skills matched by any user skill.
pub fn relevance(course: &Course, user_skills: &[String]) -> usize {
    course
        .skills
        .iter()
        .filter(|skill| user_skills.iter().any(|u| matches(u, skill)))
        .count()
}

/// Top `MAX_RECOMMENDED` courses by relevance. Irrelevant courses are dropped
/// and ties keep catalog order.
pub fn recommend_courses(courses: Vec<Course>, user_skills: &[String]) -> Vec<Course> {
    let mut scored: Vec<(usize, Course)> = courses
        .into_iter()
        .map(|c| (relevance(&c, user_skills), c))
        .filter(|(score, _)| *score > 0)
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .take(MAX_RECOMMENDED)
        .map(|(_, c)| c)
        .collect()
}
