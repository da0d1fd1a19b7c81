use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub branch: String,
    pub current_skills: Vec<String>,
    pub interests: Vec<String>,
    pub career_goals: String,
    pub aptitude: String,
    pub gpa: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    ComputerScience,
    ElectronicsCommunication,
    Mechanical,
    Civil,
    InformationTechnology,
    Chemical,
    Other,
}

impl Branch {
    pub const ALL: [Branch; 7] = [
        Branch::ComputerScience,
        Branch::ElectronicsCommunication,
        Branch::Mechanical,
        Branch::Civil,
        Branch::InformationTechnology,
        Branch::Chemical,
        Branch::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Branch::ComputerScience => "Computer Science & Engineering",
            Branch::ElectronicsCommunication => "Electronics & Communication",
            Branch::Mechanical => "Mechanical Engineering",
            Branch::Civil => "Civil Engineering",
            Branch::InformationTechnology => "Information Technology",
            Branch::Chemical => "Chemical Engineering",
            Branch::Other => "Other",
        }
    }

    pub fn parse(label: &str) -> Option<Branch> {
        Branch::ALL.into_iter().find(|branch| branch.label() == label)
    }

    /// Unrecognized labels map to `Other` so every lookup has a table.
    pub fn resolve(label: &str) -> Branch {
        match Branch::parse(label) {
            Some(branch) => branch,
            None => {
                tracing::warn!(branch = label, "unknown branch, using the Other table");
                Branch::Other
            }
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aptitude {
    Technical,
    Creative,
    Leadership,
    ProblemSolving,
    Analytical,
}

impl Aptitude {
    pub const ALL: [Aptitude; 5] = [
        Aptitude::Technical,
        Aptitude::Creative,
        Aptitude::Leadership,
        Aptitude::ProblemSolving,
        Aptitude::Analytical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Aptitude::Technical => "Technical",
            Aptitude::Creative => "Creative",
            Aptitude::Leadership => "Leadership",
            Aptitude::ProblemSolving => "Problem-Solving",
            Aptitude::Analytical => "Analytical",
        }
    }

    pub fn parse(label: &str) -> Option<Aptitude> {
        Aptitude::ALL.into_iter().find(|aptitude| aptitude.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketDemand {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Medium,
    Growing,
}

impl MarketDemand {
    pub fn label(self) -> &'static str {
        match self {
            MarketDemand::VeryHigh => "Very High",
            MarketDemand::High => "High",
            MarketDemand::Medium => "Medium",
            MarketDemand::Growing => "Growing",
        }
    }
}

/// Star-rating vocabulary for skill levels 0 through 5.
pub fn proficiency_label(level: u8) -> &'static str {
    match level {
        0 => "Not Started",
        1 => "Beginner",
        2 => "Elementary",
        3 => "Intermediate",
        4 => "Advanced",
        _ => "Expert",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub current_level: u8,
    pub required_level: u8,
    pub gap: u8,
    pub priority: Priority,
    pub learning_time: String,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningMilestone {
    pub month: u8,
    pub title: String,
    pub skills: Vec<String>,
    pub projects: Vec<String>,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternshipMatch {
    pub title: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    pub stipend: String,
    pub match_score: u8,
    pub required_skills: Vec<String>,
    pub skills_you_have: Vec<String>,
    pub skills_needed: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRecord {
    pub role: String,
    pub market_demand: MarketDemand,
    pub description: String,
    pub salary_range: String,
    pub top_companies: Vec<String>,
    pub growth_path: Vec<String>,
    pub learning_roadmap: Vec<LearningMilestone>,
    pub matching_internships: Vec<InternshipMatch>,
    pub interview_tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleCluster {
    #[serde(flatten)]
    pub record: RoleRecord,
    pub match_score: u8,
    pub why_this_role: String,
    pub required_skills: Vec<SkillGap>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSuggestion {
    pub interest_key: String,
    pub role: String,
    pub match_score: u8,
    pub description: String,
    pub why_this_role: String,
    pub required_skills: Vec<String>,
    pub salary_range: String,
    pub companies: Vec<String>,
    pub growth_path: Vec<String>,
    pub interview_tips: Vec<String>,
}

/// Landing-page quick form, handed to the guidance flow through the session slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickSuggestionForm {
    pub branch: String,
    pub skills: String,
    pub interests: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internship {
    pub id: String,
    pub company: String,
    pub title: String,
    pub location: String,
    pub stipend: String,
    pub duration: String,
    pub domain: String,
    pub match_score: u8,
    pub description: String,
    pub skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_labels_round_trip() {
        for branch in Branch::ALL {
            assert_eq!(Branch::parse(branch.label()), Some(branch));
        }
        assert_eq!(Branch::parse("Aerospace"), None);
        assert_eq!(Branch::resolve("Aerospace"), Branch::Other);
    }

    #[test]
    fn aptitude_parse_is_exact() {
        assert_eq!(Aptitude::parse("Problem-Solving"), Some(Aptitude::ProblemSolving));
        assert_eq!(Aptitude::parse("technical"), None);
    }

    #[test]
    fn market_demand_serializes_with_label() {
        let json = serde_json::to_string(&MarketDemand::VeryHigh).unwrap();
        assert_eq!(json, "\"Very High\"");
    }

    #[test]
    fn proficiency_labels_saturate_at_expert() {
        assert_eq!(proficiency_label(0), "Not Started");
        assert_eq!(proficiency_label(3), "Intermediate");
        assert_eq!(proficiency_label(9), "Expert");
    }
}
