use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::models::{Aptitude, Priority, SkillGap};
use crate::skills;

/// Level assumed for any skill the student lists; self-rated levels are not collected.
pub const ASSUMED_LEVEL: u8 = 2;

static MONTH_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)-(\d+)").expect("month range pattern is valid"));

/// Substring test in one direction only: a listed "React.js" covers "React",
/// but a listed "R" does not cover "React".
pub fn has_skill(student_skills: &[String], required: &str) -> bool {
    let required = required.to_lowercase();
    student_skills
        .iter()
        .any(|skill| skill.to_lowercase().contains(&required))
}

pub fn compute_gaps(
    student_skills: &[String],
    required_skills: &[String],
    aptitude: &str,
) -> Vec<SkillGap> {
    required_skills
        .iter()
        .map(|skill| {
            let present = has_skill(student_skills, skill);
            let info = skills::info_or_default(skill);

            SkillGap {
                skill: skill.clone(),
                current_level: if present { ASSUMED_LEVEL } else { 0 },
                required_level: info.level,
                gap: if present {
                    info.level.saturating_sub(ASSUMED_LEVEL)
                } else {
                    info.level
                },
                priority: if present {
                    Priority::Medium
                } else {
                    Priority::Critical
                },
                learning_time: adjust_learning_time(info.learning_time, aptitude),
                resources: info.resources.iter().map(|r| r.to_string()).collect(),
            }
        })
        .collect()
}

/// Technical and Analytical students get one month off both ends of the first
/// `N-M` range, never going below 1.
pub fn adjust_learning_time(learning_time: &str, aptitude: &str) -> String {
    match Aptitude::parse(aptitude) {
        Some(Aptitude::Technical) | Some(Aptitude::Analytical) => MONTH_RANGE
            .replace(learning_time, |caps: &Captures| {
                match (caps[1].parse::<u64>(), caps[2].parse::<u64>()) {
                    (Ok(min), Ok(max)) => format!(
                        "{}-{}",
                        min.saturating_sub(1).max(1),
                        max.saturating_sub(1).max(1)
                    ),
                    _ => caps[0].to_string(),
                }
            })
            .into_owned(),
        _ => learning_time.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn one_gap_per_required_skill_in_order() {
        let required = owned(&["Docker", "Python", "Hooks", "Python"]);
        let gaps = compute_gaps(&owned(&["python"]), &required, "Creative");
        let names: Vec<&str> = gaps.iter().map(|g| g.skill.as_str()).collect();
        assert_eq!(names, vec!["Docker", "Python", "Hooks", "Python"]);
    }

    #[test]
    fn missing_skill_is_critical_with_full_gap() {
        let gaps = compute_gaps(&[], &owned(&["Kubernetes"]), "Creative");
        let gap = &gaps[0];
        assert_eq!(gap.current_level, 0);
        assert_eq!(gap.required_level, 3);
        assert_eq!(gap.gap, 3);
        assert_eq!(gap.priority, Priority::Critical);
        assert_eq!(gap.learning_time, "2-3 months");
        assert_eq!(gap.resources, owned(&["Kubernetes Docs", "Linux Academy", "Udemy"]));
    }

    #[test]
    fn present_skill_is_medium_with_reduced_gap() {
        let gaps = compute_gaps(&owned(&["Advanced SQL"]), &owned(&["SQL", "Python"]), "Leadership");
        assert_eq!(gaps[0].current_level, 2);
        assert_eq!(gaps[0].gap, 0);
        assert_eq!(gaps[0].priority, Priority::Medium);
        assert_eq!(gaps[1].priority, Priority::Critical);
    }

    #[test]
    fn substring_test_is_one_directional() {
        assert!(has_skill(&owned(&["React.js"]), "React"));
        assert!(!has_skill(&owned(&["React"]), "React.js"));
        assert!(has_skill(&owned(&["React"]), "R"));
    }

    #[test]
    fn unknown_skill_uses_default_record() {
        let gaps = compute_gaps(&owned(&["hooks"]), &owned(&["Hooks"]), "Creative");
        assert_eq!(gaps[0].required_level, 2);
        assert_eq!(gaps[0].gap, 0);
        assert!(gaps[0].resources.is_empty());
    }

    #[test]
    fn learning_time_shortens_for_technical_and_analytical() {
        assert_eq!(adjust_learning_time("3-4 months", "Technical"), "2-3 months");
        assert_eq!(adjust_learning_time("1-2 months", "Analytical"), "1-1 months");
        assert_eq!(adjust_learning_time("3-4 months", "Creative"), "3-4 months");
        assert_eq!(adjust_learning_time("3-4 months", "Unknown"), "3-4 months");
    }

    #[test]
    fn learning_time_without_range_passes_through() {
        assert_eq!(adjust_learning_time("about a month", "Technical"), "about a month");
        assert_eq!(adjust_learning_time("2-3 then 4-5", "Technical"), "1-2 then 4-5");
    }
}
