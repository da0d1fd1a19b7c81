use rand::Rng;

use crate::catalog;
use crate::gaps;
use crate::models::{Aptitude, Branch, RoleCluster, RoleRecord, StudentProfile};

pub const BASE_SCORE: i32 = 50;
pub const MAX_CLUSTERS: usize = 5;
const INTEREST_POINTS: i32 = 5;
const INTEREST_CAP: i32 = 25;
const WHY_TEMPLATES: usize = 4;

pub fn score_roles(profile: &StudentProfile) -> Vec<RoleCluster> {
    score_roles_with(profile, &mut rand::thread_rng())
}

/// Scores every role in the profile's branch table and keeps the best five.
/// The RNG only picks the narrative template; scores and gaps do not depend on it.
pub fn score_roles_with<R: Rng>(profile: &StudentProfile, rng: &mut R) -> Vec<RoleCluster> {
    let branch = Branch::resolve(&profile.branch);

    let mut clusters: Vec<RoleCluster> = catalog::roles_for(branch)
        .iter()
        .map(|record| {
            let match_score = match_score(profile, record);
            let required = roadmap_skills(record);
            let template = rng.gen_range(0..WHY_TEMPLATES);
            tracing::debug!(role = %record.role, match_score, "scored role");

            RoleCluster {
                record: record.clone(),
                match_score,
                why_this_role: why_this_role(profile, &record.role, template),
                required_skills: gaps::compute_gaps(
                    &profile.current_skills,
                    &required,
                    &profile.aptitude,
                ),
            }
        })
        .collect();

    clusters.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    clusters.truncate(MAX_CLUSTERS);
    clusters
}

pub fn match_score(profile: &StudentProfile, record: &RoleRecord) -> u8 {
    let interest = (interest_matches(&profile.interests, record) as i32 * INTEREST_POINTS).min(INTEREST_CAP);
    let score = BASE_SCORE
        + interest
        + aptitude_bonus(&profile.aptitude, &record.role)
        + academic_bonus(profile.gpa);
    score.clamp(0, 100) as u8
}

/// Counts interests found in the lower-cased description immediately followed by the role name.
pub fn interest_matches(interests: &[String], record: &RoleRecord) -> usize {
    let haystack = format!("{}{}", record.description, record.role).to_lowercase();
    interests
        .iter()
        .filter(|interest| haystack.contains(&interest.to_lowercase()))
        .count()
}

pub fn aptitude_bonus(aptitude: &str, role: &str) -> i32 {
    let strong = match Aptitude::parse(aptitude) {
        Some(Aptitude::Technical) => role.contains("Engineer"),
        Some(Aptitude::Creative) => role.contains("Design"),
        Some(Aptitude::Leadership) => role.contains("Manager") || role.contains("Lead"),
        Some(Aptitude::ProblemSolving) => role.contains("Scientist") || role.contains("Architect"),
        Some(Aptitude::Analytical) => role.contains("Data") || role.contains("Analyst"),
        None => {
            tracing::warn!(aptitude, "unknown aptitude, using the default bonus");
            false
        }
    };
    if strong {
        15
    } else {
        5
    }
}

pub fn academic_bonus(gpa: f64) -> i32 {
    let gpa = clamp_gpa(gpa);
    if gpa >= 8.0 {
        10
    } else if gpa >= 7.0 {
        7
    } else if gpa >= 6.0 {
        4
    } else {
        0
    }
}

pub fn clamp_gpa(gpa: f64) -> f64 {
    if gpa.is_nan() {
        return 0.0;
    }
    if !(0.0..=10.0).contains(&gpa) {
        tracing::warn!(gpa, "gpa outside 0-10, clamping");
    }
    gpa.clamp(0.0, 10.0)
}

/// Every roadmap skill once, in order of first appearance.
pub fn roadmap_skills(record: &RoleRecord) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for skill in catalog::learning_timeline(record)
        .iter()
        .flat_map(|milestone| milestone.skills.iter())
    {
        if !skills.contains(skill) {
            skills.push(skill.clone());
        }
    }
    skills
}

pub fn why_this_role(profile: &StudentProfile, role: &str, template: usize) -> String {
    match template % WHY_TEMPLATES {
        0 => format!(
            "Your interests in {} align perfectly with {role}. This role combines your passion with market demand in India's growing tech sector.",
            profile.interests.join(" and ")
        ),
        1 => format!(
            "Based on your {} aptitude and {} academic performance, {role} is an excellent career path. You have the foundation to excel in this field.",
            profile.aptitude,
            if clamp_gpa(profile.gpa) >= 7.0 { "strong" } else { "solid" }
        ),
        2 => format!(
            "{role} leverages your {} skills while opening doors to new technologies. This role is in high demand with excellent growth prospects.",
            profile
                .current_skills
                .iter()
                .take(2)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" and ")
        ),
        _ => format!(
            "Your career goals align with {role}. This position offers the learning opportunities and market demand you're looking for in India's competitive job market."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_profile() -> StudentProfile {
        StudentProfile {
            branch: "Computer Science & Engineering".to_string(),
            current_skills: vec!["Python".to_string(), "Problem Solving".to_string()],
            interests: vec!["Web Development".to_string()],
            career_goals: "Build scalable applications".to_string(),
            aptitude: "Technical".to_string(),
            gpa: 8.5,
        }
    }

    fn score_of(clusters: &[RoleCluster], role: &str) -> u8 {
        clusters
            .iter()
            .find(|c| c.record.role == role)
            .map(|c| c.match_score)
            .unwrap()
    }

    #[test]
    fn traces_bonus_table_for_computer_science() {
        let clusters = score_roles_with(&sample_profile(), &mut StdRng::seed_from_u64(7));
        // "web development" is not a substring of any description, and only
        // Backend Engineer contains "Engineer".
        assert_eq!(score_of(&clusters, "Full Stack Developer"), 65);
        assert_eq!(score_of(&clusters, "Data Scientist"), 65);
        assert_eq!(score_of(&clusters, "Backend Engineer"), 75);
    }

    #[test]
    fn ties_keep_table_order() {
        let clusters = score_roles_with(&sample_profile(), &mut StdRng::seed_from_u64(1));
        let names: Vec<&str> = clusters.iter().map(|c| c.record.role.as_str()).collect();
        assert_eq!(names, vec!["Backend Engineer", "Full Stack Developer", "Data Scientist"]);
    }

    #[test]
    fn interest_bonus_counts_each_keyword_and_caps() {
        let mut profile = sample_profile();
        profile.interests = vec!["web".to_string(), "applications".to_string()];
        let record = &catalog::roles_for(Branch::ComputerScience)[0];
        assert_eq!(interest_matches(&profile.interests, record), 2);
        assert_eq!(match_score(&profile, record), 50 + 10 + 5 + 10);

        profile.interests = ["build", "web", "modern", "frameworks", "full", "stack"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(match_score(&profile, record), 50 + 25 + 5 + 10);
    }

    #[test]
    fn description_and_role_are_joined_without_space() {
        let record = &catalog::roles_for(Branch::ComputerScience)[0];
        let interests = vec!["technologiesfull".to_string()];
        assert_eq!(interest_matches(&interests, record), 1);
    }

    #[test]
    fn aptitude_bonus_table() {
        assert_eq!(aptitude_bonus("Technical", "Backend Engineer"), 15);
        assert_eq!(aptitude_bonus("Technical", "Full Stack Developer"), 5);
        assert_eq!(aptitude_bonus("Creative", "Mechanical Design Engineer"), 15);
        assert_eq!(aptitude_bonus("Leadership", "Tech Lead"), 15);
        assert_eq!(aptitude_bonus("Problem-Solving", "Data Scientist"), 15);
        assert_eq!(aptitude_bonus("Analytical", "Process Data Scientist"), 15);
        assert_eq!(aptitude_bonus("Daydreaming", "Data Scientist"), 5);
    }

    #[test]
    fn academic_bonus_tiers_and_clamping() {
        assert_eq!(academic_bonus(9.1), 10);
        assert_eq!(academic_bonus(8.0), 10);
        assert_eq!(academic_bonus(7.5), 7);
        assert_eq!(academic_bonus(6.0), 4);
        assert_eq!(academic_bonus(5.9), 0);
        assert_eq!(academic_bonus(15.0), 10);
        assert_eq!(academic_bonus(-3.0), 0);
        assert_eq!(academic_bonus(f64::NAN), 0);
    }

    #[test]
    fn scores_stay_in_range_and_ordered() {
        for branch in Branch::ALL {
            for aptitude in ["Technical", "Creative", "Leadership", "Problem-Solving", "Analytical", "?"] {
                let mut profile = sample_profile();
                profile.branch = branch.label().to_string();
                profile.aptitude = aptitude.to_string();
                let clusters = score_roles_with(&profile, &mut StdRng::seed_from_u64(3));
                assert!(clusters.len() <= MAX_CLUSTERS);
                assert!(clusters.windows(2).all(|w| w[0].match_score >= w[1].match_score));
                assert!(clusters.iter().all(|c| (50..=100).contains(&c.match_score)));
            }
        }
    }

    #[test]
    fn unknown_branch_uses_other_table() {
        let mut profile = sample_profile();
        profile.branch = "Aerospace".to_string();
        let clusters = score_roles_with(&profile, &mut StdRng::seed_from_u64(3));
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].record.role, "Software Engineer");
    }

    #[test]
    fn required_skills_cover_deduplicated_roadmap() {
        let record = catalog::find_role("Backend Engineer").unwrap().1;
        let skills = roadmap_skills(record);
        assert_eq!(skills.first().map(String::as_str), Some("Java/Python"));
        assert_eq!(skills.len(), 13);

        let clusters = score_roles_with(&sample_profile(), &mut StdRng::seed_from_u64(5));
        let backend = clusters.iter().find(|c| c.record.role == "Backend Engineer").unwrap();
        assert_eq!(backend.required_skills.len(), skills.len());
        let docker = backend.required_skills.iter().find(|g| g.skill == "Docker").unwrap();
        assert_eq!(docker.priority, Priority::Critical);
        assert_eq!(docker.learning_time, "1-1 months");
    }

    #[test]
    fn narrative_randomness_does_not_touch_scores() {
        let profile = sample_profile();
        let a = score_roles_with(&profile, &mut StdRng::seed_from_u64(11));
        let b = score_roles_with(&profile, &mut StdRng::seed_from_u64(12345));
        for (left, right) in a.iter().zip(b.iter()) {
            assert_eq!(left.record.role, right.record.role);
            assert_eq!(left.match_score, right.match_score);
            assert_eq!(left.required_skills, right.required_skills);
        }
    }

    #[test]
    fn same_seed_gives_same_narrative() {
        let profile = sample_profile();
        let a = score_roles_with(&profile, &mut StdRng::seed_from_u64(42));
        let b = score_roles_with(&profile, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn templates_interpolate_profile() {
        let profile = sample_profile();
        assert!(why_this_role(&profile, "Data Scientist", 0).starts_with("Your interests in Web Development align"));
        assert!(why_this_role(&profile, "Data Scientist", 1).contains("Technical aptitude and strong academic"));
        assert!(why_this_role(&profile, "Data Scientist", 2).contains("your Python and Problem Solving skills"));
        assert!(why_this_role(&profile, "Data Scientist", 3).starts_with("Your career goals align with Data Scientist."));
    }
}
