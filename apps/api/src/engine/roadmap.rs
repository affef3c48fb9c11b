//! Roadmap Generator: picks one of four canned learning tracks from the
//! user's skills and appends a certification milestone.
//!
//! Track selection walks `TRACK_RULES` in priority order; the first predicate
//! that holds wins and `Track::GeneralTech` is the fallback. The quiz result is
//! accepted but does not influence the choice.
//!
//! A generated roadmap is mutated in place afterwards: milestones and
//! checkpoints only ever move from incomplete to complete.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::quiz::CategoryScore;
use crate::engine::taxonomy::CapabilityFlags;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneType {
    Skill,
    Course,
    Project,
    Certification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(Difficulty::Beginner),
            "Intermediate" => Ok(Difficulty::Intermediate),
            "Advanced" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Course,
    Article,
    Video,
    Practice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub title: String,
    pub url: Option<String>,
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapMilestone {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: MilestoneType,
    pub estimated_weeks: u32,
    pub difficulty: Difficulty,
    pub prerequisites: Vec<String>,
    pub skills: Vec<String>,
    pub resources: Vec<Resource>,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub checkpoints: Vec<Checkpoint>,
}

// ────────────────────────────────────────────────────────────────────────────
// Static templates
// ────────────────────────────────────────────────────────────────────────────

struct ResourceTemplate {
    kind: ResourceType,
    title: &'static str,
    duration: Option<&'static str>,
}

struct MilestoneTemplate {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    kind: MilestoneType,
    estimated_weeks: u32,
    difficulty: Difficulty,
    prerequisites: &'static [&'static str],
    skills: &'static [&'static str],
    resources: &'static [ResourceTemplate],
    checkpoints: [&'static str; 3],
}

const fn res(
    kind: ResourceType,
    title: &'static str,
    duration: Option<&'static str>,
) -> ResourceTemplate {
    ResourceTemplate {
        kind,
        title,
        duration,
    }
}

const FULL_STACK_DESIGNER: [MilestoneTemplate; 3] = [
    MilestoneTemplate {
        id: "1",
        title: "Advanced React Patterns",
        description: "Master advanced React concepts including custom hooks, context patterns, and performance optimization.",
        kind: MilestoneType::Skill,
        estimated_weeks: 4,
        difficulty: Difficulty::Intermediate,
        prerequisites: &["React", "JavaScript"],
        skills: &["React", "TypeScript", "Performance Optimization"],
        resources: &[
            res(ResourceType::Course, "Advanced React Development", Some("6 hours")),
            res(ResourceType::Practice, "Build a Complex React App", Some("2 weeks")),
        ],
        checkpoints: ["Learn Custom Hooks", "Implement Context API", "Optimize Performance"],
    },
    MilestoneTemplate {
        id: "2",
        title: "Design System Creation",
        description: "Build a comprehensive design system with reusable components and design tokens.",
        kind: MilestoneType::Project,
        estimated_weeks: 6,
        difficulty: Difficulty::Intermediate,
        prerequisites: &["UI/UX Design", "React"],
        skills: &["Design Systems", "Component Libraries", "Figma"],
        resources: &[
            res(ResourceType::Course, "Design Systems Fundamentals", Some("4 hours")),
            res(ResourceType::Article, "Building Scalable Design Systems", None),
            res(ResourceType::Practice, "Create Your Design System", Some("4 weeks")),
        ],
        checkpoints: ["Define Design Tokens", "Build Component Library", "Document Guidelines"],
    },
    MilestoneTemplate {
        id: "3",
        title: "Full-Stack Application",
        description: "Build a complete web application with modern frontend and backend technologies.",
        kind: MilestoneType::Project,
        estimated_weeks: 8,
        difficulty: Difficulty::Advanced,
        prerequisites: &["React", "Node.js", "Database"],
        skills: &["Full-Stack Development", "API Design", "Database Design"],
        resources: &[
            res(ResourceType::Course, "Full-Stack Web Development", Some("12 hours")),
            res(ResourceType::Practice, "Build Portfolio Project", Some("6 weeks")),
        ],
        checkpoints: ["Setup Backend API", "Implement Authentication", "Deploy to Production"],
    },
];

const DATA_PROFESSIONAL: [MilestoneTemplate; 3] = [
    MilestoneTemplate {
        id: "1",
        title: "Advanced Python for Data Science",
        description: "Master advanced Python libraries and techniques for data manipulation and analysis.",
        kind: MilestoneType::Skill,
        estimated_weeks: 5,
        difficulty: Difficulty::Intermediate,
        prerequisites: &["Python", "Basic Data Analysis"],
        skills: &["Pandas", "NumPy", "Data Visualization"],
        resources: &[
            res(ResourceType::Course, "Advanced Python Data Science", Some("8 hours")),
            res(ResourceType::Practice, "Data Analysis Projects", Some("3 weeks")),
        ],
        checkpoints: ["Master Pandas Operations", "Advanced Visualization", "Statistical Analysis"],
    },
    MilestoneTemplate {
        id: "2",
        title: "Machine Learning Fundamentals",
        description: "Learn core ML algorithms and implement them from scratch and with libraries.",
        kind: MilestoneType::Course,
        estimated_weeks: 8,
        difficulty: Difficulty::Intermediate,
        prerequisites: &["Python", "Statistics"],
        skills: &["Machine Learning", "Scikit-learn", "Model Evaluation"],
        resources: &[
            res(ResourceType::Course, "Machine Learning Bootcamp", Some("15 hours")),
            res(ResourceType::Practice, "ML Project Portfolio", Some("5 weeks")),
        ],
        checkpoints: ["Supervised Learning", "Unsupervised Learning", "Model Deployment"],
    },
    MilestoneTemplate {
        id: "3",
        title: "Data Science Capstone Project",
        description: "Complete an end-to-end data science project from data collection to deployment.",
        kind: MilestoneType::Project,
        estimated_weeks: 10,
        difficulty: Difficulty::Advanced,
        prerequisites: &["Machine Learning", "Data Analysis"],
        skills: &["End-to-End ML", "Data Pipeline", "Model Deployment"],
        resources: &[
            res(ResourceType::Practice, "Capstone Project", Some("8 weeks")),
            res(ResourceType::Article, "ML Project Best Practices", None),
        ],
        checkpoints: ["Data Collection & Cleaning", "Model Development", "Production Deployment"],
    },
];

const WEB_DEVELOPER: [MilestoneTemplate; 3] = [
    MilestoneTemplate {
        id: "1",
        title: "Modern JavaScript Mastery",
        description: "Deep dive into ES6+, async programming, and modern JavaScript patterns.",
        kind: MilestoneType::Skill,
        estimated_weeks: 4,
        difficulty: Difficulty::Intermediate,
        prerequisites: &["JavaScript Basics"],
        skills: &["ES6+", "Async/Await", "Modern JS Patterns"],
        resources: &[
            res(ResourceType::Course, "Modern JavaScript Complete Guide", Some("10 hours")),
            res(ResourceType::Practice, "JavaScript Challenges", Some("2 weeks")),
        ],
        checkpoints: ["ES6+ Features", "Async Programming", "Module Systems"],
    },
    MilestoneTemplate {
        id: "2",
        title: "React Ecosystem Mastery",
        description: "Master React Router, state management, testing, and the broader React ecosystem.",
        kind: MilestoneType::Skill,
        estimated_weeks: 6,
        difficulty: Difficulty::Intermediate,
        prerequisites: &["React", "JavaScript"],
        skills: &["React Router", "Redux", "React Testing"],
        resources: &[
            res(ResourceType::Course, "Complete React Developer", Some("12 hours")),
            res(ResourceType::Practice, "React Projects", Some("4 weeks")),
        ],
        checkpoints: ["React Router Setup", "State Management", "Testing Implementation"],
    },
    MilestoneTemplate {
        id: "3",
        title: "Frontend Portfolio Project",
        description: "Build a comprehensive portfolio showcasing your frontend development skills.",
        kind: MilestoneType::Project,
        estimated_weeks: 8,
        difficulty: Difficulty::Advanced,
        prerequisites: &["React", "Modern JavaScript"],
        skills: &["Portfolio Development", "Performance Optimization", "Deployment"],
        resources: &[
            res(ResourceType::Practice, "Portfolio Website", Some("6 weeks")),
            res(ResourceType::Article, "Frontend Best Practices", None),
        ],
        checkpoints: ["Design & Planning", "Development & Testing", "Deployment & Optimization"],
    },
];

const GENERAL_TECH: [MilestoneTemplate; 3] = [
    MilestoneTemplate {
        id: "1",
        title: "Programming Fundamentals",
        description: "Build a strong foundation in programming concepts and problem-solving.",
        kind: MilestoneType::Skill,
        estimated_weeks: 6,
        difficulty: Difficulty::Beginner,
        prerequisites: &[],
        skills: &["Programming Logic", "Problem Solving", "Algorithms"],
        resources: &[
            res(ResourceType::Course, "Programming Fundamentals", Some("8 hours")),
            res(ResourceType::Practice, "Coding Challenges", Some("4 weeks")),
        ],
        checkpoints: ["Basic Syntax", "Control Structures", "Problem Solving"],
    },
    MilestoneTemplate {
        id: "2",
        title: "Web Development Basics",
        description: "Learn HTML, CSS, and JavaScript to build your first web applications.",
        kind: MilestoneType::Course,
        estimated_weeks: 8,
        difficulty: Difficulty::Beginner,
        prerequisites: &["Programming Fundamentals"],
        skills: &["HTML", "CSS", "JavaScript"],
        resources: &[
            res(ResourceType::Course, "Web Development Bootcamp", Some("15 hours")),
            res(ResourceType::Practice, "Build 5 Projects", Some("6 weeks")),
        ],
        checkpoints: ["HTML Structure", "CSS Styling", "JavaScript Interactivity"],
    },
    MilestoneTemplate {
        id: "3",
        title: "First Web Application",
        description: "Build your first complete web application with modern tools and practices.",
        kind: MilestoneType::Project,
        estimated_weeks: 10,
        difficulty: Difficulty::Intermediate,
        prerequisites: &["HTML", "CSS", "JavaScript"],
        skills: &["Web Development", "Project Management", "Version Control"],
        resources: &[
            res(ResourceType::Practice, "Web App Project", Some("8 weeks")),
            res(ResourceType::Course, "Git & GitHub", Some("3 hours")),
        ],
        checkpoints: ["Project Planning", "Development", "Testing & Deployment"],
    },
];

/// Appended to every track. Its prerequisites are filled in at generation time.
const CERTIFICATION: MilestoneTemplate = MilestoneTemplate {
    id: "cert",
    title: "Professional Certification",
    description: "Earn a recognized certification to validate your skills and boost your career prospects.",
    kind: MilestoneType::Certification,
    estimated_weeks: 2,
    difficulty: Difficulty::Advanced,
    prerequisites: &[],
    skills: &["Certification", "Professional Validation"],
    resources: &[
        res(ResourceType::Course, "Certification Prep", Some("4 hours")),
        res(ResourceType::Practice, "Mock Exams", Some("1 week")),
    ],
    checkpoints: ["Study Materials", "Practice Exams", "Take Certification"],
};

impl MilestoneTemplate {
    fn instantiate(&self) -> RoadmapMilestone {
        RoadmapMilestone {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            kind: self.kind,
            estimated_weeks: self.estimated_weeks,
            difficulty: self.difficulty,
            prerequisites: self.prerequisites.iter().map(|s| s.to_string()).collect(),
            skills: self.skills.iter().map(|s| s.to_string()).collect(),
            resources: self
                .resources
                .iter()
                .map(|r| Resource {
                    kind: r.kind,
                    title: r.title.to_string(),
                    url: None,
                    duration: r.duration.map(str::to_string),
                })
                .collect(),
            completed: false,
            completed_at: None,
            checkpoints: self
                .checkpoints
                .iter()
                .enumerate()
                .map(|(i, title)| Checkpoint {
                    id: format!("{}-{}", self.id, i + 1),
                    title: title.to_string(),
                    completed: false,
                })
                .collect(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Track selection
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    FullStackDesigner,
    DataProfessional,
    WebDeveloper,
    GeneralTech,
}

/// Ordered (predicate, track) pairs. First match wins.
const TRACK_RULES: &[(fn(&CapabilityFlags) -> bool, Track)] = &[
    (|f| f.web && f.design, Track::FullStackDesigner),
    (|f| f.data, Track::DataProfessional),
    (|f| f.web, Track::WebDeveloper),
];

impl Track {
    pub fn select(flags: &CapabilityFlags) -> Track {
        TRACK_RULES
            .iter()
            .find(|(applies, _)| applies(flags))
            .map(|(_, track)| *track)
            .unwrap_or(Track::GeneralTech)
    }

    pub fn name(self) -> &'static str {
        match self {
            Track::FullStackDesigner => "Full-Stack Designer",
            Track::DataProfessional => "Data Professional",
            Track::WebDeveloper => "Web Developer",
            Track::GeneralTech => "General Tech",
        }
    }

    fn templates(self) -> &'static [MilestoneTemplate; 3] {
        match self {
            Track::FullStackDesigner => &FULL_STACK_DESIGNER,
            Track::DataProfessional => &DATA_PROFESSIONAL,
            Track::WebDeveloper => &WEB_DEVELOPER,
            Track::GeneralTech => &GENERAL_TECH,
        }
    }
}

/// Builds a fresh roadmap: the selected track's three milestones followed by
/// the certification milestone, everything incomplete.
///
/// `_quiz` is part of the contract but does not affect track selection.
pub fn generate(skills: &[String], _quiz: Option<&[CategoryScore]>) -> Vec<RoadmapMilestone> {
    let track = Track::select(&CapabilityFlags::detect(skills));
    build_track(track)
}

pub fn build_track(track: Track) -> Vec<RoadmapMilestone> {
    let mut roadmap: Vec<RoadmapMilestone> =
        track.templates().iter().map(|t| t.instantiate()).collect();

    let mut certification = CERTIFICATION.instantiate();
    certification.prerequisites = roadmap.iter().map(|m| m.title.clone()).collect();
    roadmap.push(certification);

    roadmap
}

// ────────────────────────────────────────────────────────────────────────────
// Completion
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoadmapError {
    #[error("milestone '{0}' not found")]
    MilestoneNotFound(String),

    #[error("checkpoint '{checkpoint_id}' not found in milestone '{milestone_id}'")]
    CheckpointNotFound {
        milestone_id: String,
        checkpoint_id: String,
    },
}

/// Marks a milestone complete. Already-complete milestones keep their
/// original `completed_at`. Returns true when the roadmap changed.
pub fn complete_milestone(
    roadmap: &mut [RoadmapMilestone],
    milestone_id: &str,
    now: DateTime<Utc>,
) -> Result<bool, RoadmapError> {
    let milestone = roadmap
        .iter_mut()
        .find(|m| m.id == milestone_id)
        .ok_or_else(|| RoadmapError::MilestoneNotFound(milestone_id.to_string()))?;

    if milestone.completed {
        return Ok(false);
    }
    milestone.completed = true;
    milestone.completed_at = Some(now);
    Ok(true)
}

/// Marks a checkpoint complete. Returns true when the roadmap changed.
pub fn complete_checkpoint(
    roadmap: &mut [RoadmapMilestone],
    milestone_id: &str,
    checkpoint_id: &str,
) -> Result<bool, RoadmapError> {
    let milestone = roadmap
        .iter_mut()
        .find(|m| m.id == milestone_id)
        .ok_or_else(|| RoadmapError::MilestoneNotFound(milestone_id.to_string()))?;

    let checkpoint = milestone
        .checkpoints
        .iter_mut()
        .find(|c| c.id == checkpoint_id)
        .ok_or_else(|| RoadmapError::CheckpointNotFound {
            milestone_id: milestone_id.to_string(),
            checkpoint_id: checkpoint_id.to_string(),
        })?;

    if checkpoint.completed {
        return Ok(false);
    }
    checkpoint.completed = true;
    Ok(true)
}

// ────────────────────────────────────────────────────────────────────────────
// Progress
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapProgress {
    pub total_milestones: usize,
    pub completed_milestones: usize,
    pub total_weeks: u32,
    pub completed_weeks: u32,
    pub remaining_weeks: u32,
    /// Completed milestones as a rounded percentage.
    pub progress_percentage: u32,
    /// Completed weeks as a rounded percentage.
    pub time_progress_percentage: u32,
    pub estimated_completion: NaiveDate,
}

impl RoadmapProgress {
    pub fn compute(roadmap: &[RoadmapMilestone], today: NaiveDate) -> Self {
        let total_milestones = roadmap.len();
        let completed_milestones = roadmap.iter().filter(|m| m.completed).count();
        let total_weeks: u32 = roadmap.iter().map(|m| m.estimated_weeks).sum();
        let completed_weeks: u32 = roadmap
            .iter()
            .filter(|m| m.completed)
            .map(|m| m.estimated_weeks)
            .sum();
        let remaining_weeks = total_weeks - completed_weeks;

        Self {
            total_milestones,
            completed_milestones,
            total_weeks,
            completed_weeks,
            remaining_weeks,
            progress_percentage: percent(completed_milestones as u32, total_milestones as u32),
            time_progress_percentage: percent(completed_weeks, total_weeks),
            estimated_completion: today + Duration::days(i64::from(remaining_weeks) * 7),
        }
    }
}

fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn titles(roadmap: &[RoadmapMilestone]) -> Vec<&str> {
        roadmap.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn test_figma_and_react_select_full_stack_designer() {
        let roadmap = generate(&skills(&["Figma", "React"]), None);
        assert_eq!(roadmap.len(), 4);
        assert_eq!(roadmap[0].title, "Advanced React Patterns");
        assert_eq!(roadmap[3].kind, MilestoneType::Certification);
    }

    #[test]
    fn test_python_and_sql_select_data_professional() {
        let flags = CapabilityFlags::detect(&skills(&["Python", "SQL"]));
        assert_eq!(Track::select(&flags), Track::DataProfessional);
        let roadmap = generate(&skills(&["Python", "SQL"]), None);
        assert_eq!(roadmap[0].title, "Advanced Python for Data Science");
    }

    #[test]
    fn test_web_only_selects_web_developer() {
        let flags = CapabilityFlags::detect(&skills(&["HTML", "CSS"]));
        assert_eq!(Track::select(&flags), Track::WebDeveloper);
    }

    #[test]
    fn test_empty_skills_fall_back_to_general_tech() {
        let roadmap = generate(&[], None);
        assert_eq!(roadmap.len(), 4);
        assert_eq!(roadmap[0].title, "Programming Fundamentals");
        assert!(roadmap.iter().all(|m| !m.completed));
        assert!(roadmap
            .iter()
            .flat_map(|m| &m.checkpoints)
            .all(|c| !c.completed));
    }

    #[test]
    fn test_priority_order_prefers_full_stack_designer_over_data() {
        // Python raises the data flag, but web + design wins.
        let flags = CapabilityFlags::detect(&skills(&["Python", "React", "Figma"]));
        assert!(flags.data);
        assert_eq!(Track::select(&flags), Track::FullStackDesigner);
    }

    #[test]
    fn test_certification_prerequisites_are_track_titles_in_order() {
        for track in [
            Track::FullStackDesigner,
            Track::DataProfessional,
            Track::WebDeveloper,
            Track::GeneralTech,
        ] {
            let roadmap = build_track(track);
            let cert = roadmap.last().unwrap();
            assert_eq!(cert.id, "cert");
            assert_eq!(cert.prerequisites, titles(&roadmap[..3]));
        }
    }

    #[test]
    fn test_every_milestone_has_three_incomplete_checkpoints() {
        let roadmap = build_track(Track::DataProfessional);
        for m in &roadmap {
            assert_eq!(m.checkpoints.len(), 3);
            assert!(m.estimated_weeks > 0);
        }
        let ids: Vec<&str> = roadmap[1].checkpoints.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["2-1", "2-2", "2-3"]);
        let cert_ids: Vec<&str> = roadmap[3].checkpoints.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(cert_ids, vec!["cert-1", "cert-2", "cert-3"]);
    }

    #[test]
    fn test_quiz_result_does_not_change_track() {
        let answers: crate::engine::quiz::QuizAnswers = (0..8).map(|q| (q, 0)).collect();
        let quiz = crate::engine::quiz::score(&answers);
        let input = skills(&["Figma"]);
        assert_eq!(generate(&input, None), generate(&input, Some(quiz.as_slice())));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let input = skills(&["Vue.js"]);
        assert_eq!(generate(&input, None), generate(&input, None));
    }

    #[test]
    fn test_complete_milestone_is_monotonic() {
        let mut roadmap = build_track(Track::GeneralTech);
        let first = Utc::now();
        assert_eq!(complete_milestone(&mut roadmap, "2", first), Ok(true));
        assert!(roadmap[1].completed);
        assert_eq!(roadmap[1].completed_at, Some(first));

        let later = first + Duration::hours(1);
        assert_eq!(complete_milestone(&mut roadmap, "2", later), Ok(false));
        assert!(roadmap[1].completed);
        assert_eq!(roadmap[1].completed_at, Some(first));
    }

    #[test]
    fn test_complete_unknown_milestone() {
        let mut roadmap = build_track(Track::GeneralTech);
        assert_eq!(
            complete_milestone(&mut roadmap, "99", Utc::now()),
            Err(RoadmapError::MilestoneNotFound("99".to_string()))
        );
    }

    #[test]
    fn test_complete_checkpoint() {
        let mut roadmap = build_track(Track::WebDeveloper);
        assert_eq!(complete_checkpoint(&mut roadmap, "1", "1-2"), Ok(true));
        assert!(roadmap[0].checkpoints[1].completed);
        assert!(!roadmap[0].completed, "checkpoint does not complete the milestone");
        assert_eq!(complete_checkpoint(&mut roadmap, "1", "1-2"), Ok(false));
        assert!(matches!(
            complete_checkpoint(&mut roadmap, "1", "9-9"),
            Err(RoadmapError::CheckpointNotFound { .. })
        ));
    }

    #[test]
    fn test_progress_for_fresh_roadmap() {
        let roadmap = build_track(Track::GeneralTech);
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let progress = RoadmapProgress::compute(&roadmap, today);
        // 6 + 8 + 10 + 2
        assert_eq!(progress.total_weeks, 26);
        assert_eq!(progress.completed_weeks, 0);
        assert_eq!(progress.progress_percentage, 0);
        assert_eq!(
            progress.estimated_completion,
            today + Duration::days(26 * 7)
        );
    }

    #[test]
    fn test_progress_after_completion() {
        let mut roadmap = build_track(Track::FullStackDesigner);
        complete_milestone(&mut roadmap, "1", Utc::now()).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let progress = RoadmapProgress::compute(&roadmap, today);
        // 4 of 20 weeks, 1 of 4 milestones
        assert_eq!(progress.completed_milestones, 1);
        assert_eq!(progress.progress_percentage, 25);
        assert_eq!(progress.time_progress_percentage, 20);
        assert_eq!(progress.remaining_weeks, 16);
    }

    #[test]
    fn test_progress_for_empty_roadmap() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let progress = RoadmapProgress::compute(&[], today);
        assert_eq!(progress.progress_percentage, 0);
        assert_eq!(progress.time_progress_percentage, 0);
        assert_eq!(progress.estimated_completion, today);
    }

    #[test]
    fn test_milestone_serializes_type_field() {
        let roadmap = build_track(Track::GeneralTech);
        let json = serde_json::to_value(&roadmap[0]).unwrap();
        assert_eq!(json["type"], "skill");
        assert_eq!(json["difficulty"], "Beginner");
        assert_eq!(json["resources"][0]["type"], "course");
    }
}
