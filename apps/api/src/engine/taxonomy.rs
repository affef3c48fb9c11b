//! Skill Taxonomy: reference skill lists grouped into domain clusters, plus the
//! fuzzy matching primitive shared by the job matcher and roadmap generator.
//!
//! Matching is loose: two labels match when either one, lowercased, contains
//! the other. "Java" matches "JavaScript" and "R" matches anything with an `r`
//! in it. Role ranking and track selection both rely on this.

use serde::Serialize;

/// Skills offered to the user as one-click suggestions.
pub const SUGGESTED_SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "React",
    "Node.js",
    "TypeScript",
    "SQL",
    "Git",
    "AWS",
    "Docker",
    "MongoDB",
    "GraphQL",
    "Vue.js",
    "Angular",
    "Java",
    "C++",
    "Machine Learning",
    "Data Analysis",
    "UI/UX Design",
    "Project Management",
    "Agile",
    "DevOps",
    "Kubernetes",
    "Firebase",
    "Next.js",
    "Express.js",
];

/// Domain clusters used to derive coarse capability flags from a skill set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCluster {
    Web,
    Data,
    Design,
    Backend,
    Cloud,
}

impl SkillCluster {
    pub const ALL: [SkillCluster; 5] = [
        SkillCluster::Web,
        SkillCluster::Data,
        SkillCluster::Design,
        SkillCluster::Backend,
        SkillCluster::Cloud,
    ];

    /// Indicator skills for the cluster.
    pub fn indicators(self) -> &'static [&'static str] {
        match self {
            SkillCluster::Web => &[
                "JavaScript",
                "React",
                "HTML",
                "CSS",
                "Node.js",
                "Vue.js",
                "Angular",
                "Next.js",
            ],
            SkillCluster::Data => &["Python", "SQL", "Data Analysis", "Machine Learning", "R"],
            SkillCluster::Design => &["UI/UX Design", "Figma", "Adobe", "Design"],
            SkillCluster::Backend => &[
                "Node.js",
                "Python",
                "Java",
                "C++",
                "Go",
                "Rust",
                "Express.js",
            ],
            SkillCluster::Cloud => &["AWS", "Docker", "Kubernetes", "DevOps"],
        }
    }
}

/// Capability flags derived from a skill set, one per cluster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CapabilityFlags {
    pub web: bool,
    pub data: bool,
    pub design: bool,
    pub backend: bool,
    pub cloud: bool,
}

impl CapabilityFlags {
    pub fn detect<S: AsRef<str>>(skills: &[S]) -> Self {
        let flag = |cluster: SkillCluster| has_any_skill(skills, cluster.indicators());
        Self {
            web: flag(SkillCluster::Web),
            data: flag(SkillCluster::Data),
            design: flag(SkillCluster::Design),
            backend: flag(SkillCluster::Backend),
            cloud: flag(SkillCluster::Cloud),
        }
    }
}

/// Case-insensitive, bidirectional substring match.
pub fn matches(user_skill: &str, target_skill: &str) -> bool {
    let user = user_skill.to_lowercase();
    let target = target_skill.to_lowercase();
    user.contains(&target) || target.contains(&user)
}

/// True when at least one (user skill, candidate) pair matches.
pub fn has_any_skill<S: AsRef<str>, T: AsRef<str>>(user_skills: &[S], candidates: &[T]) -> bool {
    user_skills.iter().any(|user| {
        candidates
            .iter()
            .any(|candidate| matches(user.as_ref(), candidate.as_ref()))
    })
}

/// Trims labels, drops empty ones and suppresses exact duplicates.
/// First-seen order is preserved for display.
pub fn normalize_skills<I, S>(input: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut skills: Vec<String> = Vec::new();
    for raw in input {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() || skills.iter().any(|s| s == trimmed) {
            continue;
        }
        skills.push(trimmed.to_string());
    }
    skills
}
