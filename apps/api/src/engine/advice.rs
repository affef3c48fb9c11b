//! Skill-profile advice: a headline and next steps for the user's track.

use serde::Serialize;

use crate::engine::roadmap::Track;
use crate::engine::taxonomy::CapabilityFlags;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub title: &'static str,
    pub description: &'static str,
    pub recommendations: [&'static str; 3],
}

pub fn advise(skills: &[String]) -> Advice {
    advice_for(Track::select(&CapabilityFlags::detect(skills)))
}

pub fn advice_for(track: Track) -> Advice {
    match track {
        Track::FullStackDesigner => Advice {
            title: "Full-Stack Designer",
            description: "Your combination of web development and design skills makes you perfect for roles that bridge technical implementation with user experience.",
            recommendations: [
                "Consider Frontend Developer or Full-Stack Developer roles",
                "Explore UI/UX Developer positions",
                "Look into Product Designer roles at tech companies",
            ],
        },
        Track::DataProfessional => Advice {
            title: "Data Professional",
            description: "Your data analysis and programming skills position you well for the growing field of data science and analytics.",
            recommendations: [
                "Explore Data Analyst or Data Scientist positions",
                "Consider Machine Learning Engineer roles",
                "Look into Business Intelligence Developer positions",
            ],
        },
        Track::WebDeveloper => Advice {
            title: "Web Developer",
            description: "Your web development skills are in high demand across all industries.",
            recommendations: [
                "Apply for Frontend or Full-Stack Developer roles",
                "Consider React/Vue.js Developer positions",
                "Explore opportunities at startups and tech companies",
            ],
        },
        Track::GeneralTech => Advice {
            title: "Tech Professional",
            description: "Your diverse skill set opens up many opportunities in the technology sector.",
            recommendations: [
                "Consider roles that match your strongest skills",
                "Look for positions that allow skill growth",
                "Explore different areas to find your passion",
            ],
        },
    }
}
