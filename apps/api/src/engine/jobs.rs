//! Job Matcher: ranks candidate roles against a user's skills.
//!
//! Candidates come from a static template catalog. Each template is gated on
//! the capability flags of the skill set; "Software Engineer" and "Product
//! Manager" are always candidates. The match percentage is a derived view and
//! is recomputed on every request.

use serde::Serialize;

use crate::engine::taxonomy::{matches, CapabilityFlags};

/// Maximum number of roles returned to the caller.
pub const MAX_ROLES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DemandLevel {
    High,
    Medium,
}

/// Static role template. `gate` decides whether the role is a candidate.
///
/// `required_skills` is what the user sees; `match_skills` is what the match
/// percentage is computed against. The two differ for several roles.
pub struct RoleTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub salary_range: &'static str,
    pub growth_rate: &'static str,
    pub demand_level: DemandLevel,
    pub required_skills: &'static [&'static str],
    pub match_skills: &'static [&'static str],
    gate: fn(&CapabilityFlags) -> bool,
}

/// A role template plus its per-request match percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobRole {
    pub title: String,
    pub description: String,
    pub salary_range: String,
    pub growth_rate: String,
    pub demand_level: DemandLevel,
    pub required_skills: Vec<String>,
    /// 0 – 100
    pub match_percentage: u32,
}

pub const ROLE_TEMPLATES: &[RoleTemplate] = &[
    RoleTemplate {
        title: "Frontend Developer",
        description:
            "Build user interfaces and web applications using modern frameworks and technologies.",
        salary_range: "$70k - $120k",
        growth_rate: "+22%",
        demand_level: DemandLevel::High,
        required_skills: &["JavaScript", "React", "HTML", "CSS", "TypeScript"],
        match_skills: &["JavaScript", "React", "HTML", "CSS", "TypeScript"],
        gate: |f| f.web,
    },
    RoleTemplate {
        title: "Full-Stack Developer",
        description:
            "Work on both frontend and backend systems to create complete web applications.",
        salary_range: "$80k - $140k",
        growth_rate: "+25%",
        demand_level: DemandLevel::High,
        required_skills: &["JavaScript", "React", "Node.js", "SQL", "Git"],
        match_skills: &["JavaScript", "React", "Node.js", "SQL", "Git"],
        gate: |f| f.web && f.backend,
    },
    RoleTemplate {
        title: "Data Scientist",
        description: "Analyze complex data to extract insights and build predictive models.",
        salary_range: "$95k - $165k",
        growth_rate: "+31%",
        demand_level: DemandLevel::High,
        required_skills: &["Python", "SQL", "Machine Learning", "Data Analysis"],
        match_skills: &["Python", "SQL", "Machine Learning", "Data Analysis"],
        gate: |f| f.data,
    },
    RoleTemplate {
        title: "Data Analyst",
        description: "Transform data into actionable insights for business decision-making.",
        salary_range: "$60k - $95k",
        growth_rate: "+28%",
        demand_level: DemandLevel::High,
        required_skills: &["SQL", "Python", "Data Analysis", "Excel"],
        match_skills: &["SQL", "Python", "Data Analysis"],
        gate: |f| f.data,
    },
    RoleTemplate {
        title: "UI/UX Designer",
        description: "Design user experiences and interfaces for web and mobile applications.",
        salary_range: "$65k - $110k",
        growth_rate: "+18%",
        demand_level: DemandLevel::High,
        required_skills: &["UI/UX Design", "Figma", "User Research", "Prototyping"],
        match_skills: &["UI/UX Design", "Figma"],
        gate: |f| f.design,
    },
    RoleTemplate {
        title: "Backend Developer",
        description: "Build server-side applications, APIs, and database systems.",
        salary_range: "$75k - $130k",
        growth_rate: "+20%",
        demand_level: DemandLevel::High,
        required_skills: &["Python", "Node.js", "SQL", "API Development"],
        match_skills: &["Python", "Node.js", "SQL"],
        gate: |f| f.backend,
    },
    RoleTemplate {
        title: "DevOps Engineer",
        description: "Manage infrastructure, deployment pipelines, and cloud systems.",
        salary_range: "$90k - $150k",
        growth_rate: "+27%",
        demand_level: DemandLevel::High,
        required_skills: &["AWS", "Docker", "Kubernetes", "DevOps", "Git"],
        match_skills: &["AWS", "Docker", "Kubernetes", "DevOps"],
        gate: |f| f.cloud,
    },
    RoleTemplate {
        title: "Software Engineer",
        description:
            "Design and develop software solutions across various platforms and technologies.",
        salary_range: "$80k - $135k",
        growth_rate: "+24%",
        demand_level: DemandLevel::High,
        required_skills: &["Programming", "Problem Solving", "Git", "Algorithms"],
        match_skills: &["JavaScript", "Python", "Java", "Git"],
        gate: |_| true,
    },
    RoleTemplate {
        title: "Product Manager",
        description:
            "Guide product development from conception to launch, working with cross-functional teams.",
        salary_range: "$100k - $170k",
        growth_rate: "+19%",
        demand_level: DemandLevel::Medium,
        required_skills: &["Project Management", "Analytics", "Communication", "Strategy"],
        match_skills: &["Project Management", "Agile"],
        gate: |_| true,
    },
];

impl RoleTemplate {
    pub fn is_candidate(&self, flags: &CapabilityFlags) -> bool {
        (self.gate)(flags)
    }

    fn to_role(&self, user_skills: &[String]) -> JobRole {
        JobRole {
            title: self.title.to_string(),
            description: self.description.to_string(),
            salary_range: self.salary_range.to_string(),
            growth_rate: self.growth_rate.to_string(),
            demand_level: self.demand_level,
            required_skills: self.required_skills.iter().map(|s| s.to_string()).collect(),
            match_percentage: match_percentage(user_skills, self.match_skills),
        }
    }
}

/// round(100 * matched / required). A required skill counts as matched when
/// any user skill matches it.
pub fn match_percentage<S: AsRef<str>>(user_skills: &[S], required: &[&str]) -> u32 {
    if required.is_empty() {
        return 0;
    }
    let matched = required
        .iter()
        .filter(|req| user_skills.iter().any(|u| matches(u.as_ref(), req)))
        .count();
    ((matched as f64 / required.len() as f64) * 100.0).round() as u32
}

/// Candidate roles ranked by match percentage, descending. Ties keep catalog
/// order. At most `MAX_ROLES` entries.
pub fn generate_roles(skills: &[String]) -> Vec<JobRole> {
    let flags = CapabilityFlags::detect(skills);

    let mut roles: Vec<JobRole> = ROLE_TEMPLATES
        .iter()
        .filter(|t| t.is_candidate(&flags))
        .map(|t| t.to_role(skills))
        .collect();

    // sort_by is stable, so equal percentages stay in catalog order
    roles.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    roles.truncate(MAX_ROLES);
    roles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn titles(roles: &[JobRole]) -> Vec<&str> {
        roles.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_full_stack_profile_ranks_full_stack_first() {
        let roles = generate_roles(&skills(&["React", "Node.js", "SQL", "Git", "JavaScript"]));
        assert_eq!(roles.len(), MAX_ROLES);
        assert_eq!(roles[0].title, "Full-Stack Developer");
        assert_eq!(roles[0].match_percentage, 100);
        assert!(!titles(&roles).contains(&"UI/UX Designer"));
    }

    #[test]
    fn test_full_stack_profile_ordering() {
        let roles = generate_roles(&skills(&["React", "Node.js", "SQL", "Git", "JavaScript"]));
        assert_eq!(
            titles(&roles),
            vec![
                "Full-Stack Developer",
                "Software Engineer",
                "Backend Developer",
                "Frontend Developer",
                "Data Analyst",
                "Data Scientist",
            ]
        );
        let pcts: Vec<u32> = roles.iter().map(|r| r.match_percentage).collect();
        assert_eq!(pcts, vec![100, 75, 67, 40, 33, 25]);
    }

    #[test]
    fn test_design_role_outranked_when_present() {
        let roles = generate_roles(&skills(&[
            "React", "Node.js", "SQL", "Git", "JavaScript", "Adobe",
        ]));
        let full_stack = roles.iter().position(|r| r.title == "Full-Stack Developer");
        let designer = roles.iter().position(|r| r.title == "UI/UX Designer");
        assert_eq!(full_stack, Some(0));
        if let Some(designer) = designer {
            assert!(designer > 0);
            assert_eq!(roles[designer].match_percentage, 0);
        }
    }

    #[test]
    fn test_empty_skills_yield_unconditional_roles() {
        let roles = generate_roles(&[]);
        assert_eq!(titles(&roles), vec!["Software Engineer", "Product Manager"]);
        assert!(roles.iter().all(|r| r.match_percentage == 0));
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let roles = generate_roles(&skills(&["Figma"]));
        // UI/UX Designer (50%) first, then the unconditional roles at 0% in catalog order
        assert_eq!(
            titles(&roles),
            vec!["UI/UX Designer", "Software Engineer", "Product Manager"]
        );
    }

    #[test]
    fn test_match_percentage_uses_substring_policy() {
        assert_eq!(match_percentage(&["Java"], &["JavaScript", "Go"]), 50);
        assert_eq!(match_percentage(&["Ruby"], &["Go"]), 0);
        assert_eq!(match_percentage::<&str>(&[], &["Go"]), 0);
    }

    #[test]
    fn test_cloud_skills_surface_devops() {
        let roles = generate_roles(&skills(&["AWS", "Docker", "Kubernetes"]));
        assert_eq!(roles[0].title, "DevOps Engineer");
        assert_eq!(roles[0].match_percentage, 75);
    }

    fn pct_of(list: &[&str], title: &str) -> Option<u32> {
        generate_roles(&skills(list))
            .into_iter()
            .find(|r| r.title == title)
            .map(|r| r.match_percentage)
    }

    #[test]
    fn test_scoring_list_differs_from_displayed_list() {
        assert_eq!(pct_of(&["JavaScript"], "Software Engineer"), Some(50));
        assert_eq!(pct_of(&["Agile"], "Product Manager"), Some(50));
        assert_eq!(pct_of(&["Figma"], "UI/UX Designer"), Some(50));
        assert_eq!(
            pct_of(&["Python", "Node.js", "SQL"], "Backend Developer"),
            Some(100)
        );

        let designer = generate_roles(&skills(&["Figma"]))
            .into_iter()
            .find(|r| r.title == "UI/UX Designer")
            .unwrap();
        assert_eq!(designer.required_skills.len(), 4);
    }

    #[test]
    fn test_generate_roles_is_deterministic() {
        let input = skills(&["Python", "SQL", "Figma"]);
        assert_eq!(generate_roles(&input), generate_roles(&input));
    }
}
