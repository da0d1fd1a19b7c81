use std::fmt::Write;

use chrono::NaiveDate;

use crate::catalog;
use crate::models::{proficiency_label, Priority, RoleCluster, SkillGap, StudentProfile};

#[derive(Debug, Clone, PartialEq)]
pub struct PrioritySummary {
    pub priority: Priority,
    pub count: usize,
    pub total_gap: u32,
}

pub fn summarize_by_priority(gaps: &[SkillGap]) -> Vec<PrioritySummary> {
    let mut map: std::collections::BTreeMap<Priority, (usize, u32)> =
        std::collections::BTreeMap::new();

    for gap in gaps {
        let entry = map.entry(gap.priority).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += u32::from(gap.gap);
    }

    map.into_iter()
        .map(|(priority, (count, total_gap))| PrioritySummary {
            priority,
            count,
            total_gap,
        })
        .collect()
}

pub fn build_report(
    profile: &StudentProfile,
    clusters: &[RoleCluster],
    generated_on: NaiveDate,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Career Guidance Report");
    let _ = writeln!(
        output,
        "Generated for {} on {}",
        profile.branch, generated_on
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Profile");
    let _ = writeln!(output, "- Aptitude: {}", profile.aptitude);
    let _ = writeln!(output, "- GPA: {:.1}", profile.gpa);
    let _ = writeln!(output, "- Skills: {}", join_or_none(&profile.current_skills));
    let _ = writeln!(output, "- Interests: {}", join_or_none(&profile.interests));
    if !profile.career_goals.is_empty() {
        let _ = writeln!(output, "- Goals: {}", profile.career_goals);
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Recommended Roles");

    if clusters.is_empty() {
        let _ = writeln!(output, "No roles matched this profile.");
        return output;
    }

    for cluster in clusters {
        let _ = writeln!(
            output,
            "- {} ({} demand) score {}: {}",
            cluster.record.role,
            cluster.record.market_demand.label(),
            cluster.match_score,
            cluster.why_this_role
        );
    }

    let top = &clusters[0];
    let _ = writeln!(output);
    let _ = writeln!(output, "## Skill Gaps for {}", top.record.role);

    for summary in summarize_by_priority(&top.required_skills) {
        let _ = writeln!(
            output,
            "- {}: {} skills (total gap {})",
            summary.priority.label(),
            summary.count,
            summary.total_gap
        );
    }
    let _ = writeln!(output);

    let mut gaps = top.required_skills.clone();
    gaps.sort_by(|a, b| a.priority.cmp(&b.priority).then(b.gap.cmp(&a.gap)));
    for gap in gaps.iter() {
        let resources = if gap.resources.is_empty() {
            String::new()
        } else {
            format!(" via {}", gap.resources.join(", "))
        };
        let _ = writeln!(
            output,
            "- {}: {} -> {} ({}, {}){}",
            gap.skill,
            proficiency_label(gap.current_level),
            proficiency_label(gap.required_level),
            gap.priority.label(),
            gap.learning_time,
            resources
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Learning Roadmap");
    for milestone in catalog::learning_timeline(&top.record) {
        let _ = writeln!(
            output,
            "- Month {}: {} ({})",
            milestone.month,
            milestone.title,
            milestone.skills.join(", ")
        );
        if !milestone.projects.is_empty() {
            let _ = writeln!(output, "  - Projects: {}", milestone.projects.join(", "));
        }
        if !milestone.certifications.is_empty() {
            let _ = writeln!(
                output,
                "  - Certifications: {}",
                milestone.certifications.join(", ")
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Internships");
    let internships = catalog::matching_internships(&top.record);
    if internships.is_empty() {
        let _ = writeln!(output, "No internships listed for this role.");
    } else {
        for internship in internships {
            let _ = writeln!(
                output,
                "- {} at {} ({}, {}, {}) match {}",
                internship.title,
                internship.company,
                internship.location,
                internship.duration,
                internship.stipend,
                internship.match_score
            );
        }
    }

    output
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none listed".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::score_roles_with;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_profile() -> StudentProfile {
        StudentProfile {
            branch: "Civil Engineering".to_string(),
            current_skills: vec!["AutoCAD 2D".to_string()],
            interests: vec!["structures".to_string()],
            career_goals: String::new(),
            aptitude: "Creative".to_string(),
            gpa: 7.0,
        }
    }

    fn gap(skill: &str, priority: Priority, gap: u8) -> SkillGap {
        SkillGap {
            skill: skill.to_string(),
            current_level: 0,
            required_level: gap,
            gap,
            priority,
            learning_time: "2-3 months".to_string(),
            resources: Vec::new(),
        }
    }

    #[test]
    fn summaries_group_by_priority_in_rank_order() {
        let gaps = vec![
            gap("Revit", Priority::Medium, 0),
            gap("STAAD Pro", Priority::Critical, 2),
            gap("Basics", Priority::Critical, 2),
        ];
        let summaries = summarize_by_priority(&gaps);
        assert_eq!(
            summaries,
            vec![
                PrioritySummary { priority: Priority::Critical, count: 2, total_gap: 4 },
                PrioritySummary { priority: Priority::Medium, count: 1, total_gap: 0 },
            ]
        );
    }

    #[test]
    fn report_covers_top_role_sections() {
        let profile = sample_profile();
        let clusters = score_roles_with(&profile, &mut StdRng::seed_from_u64(2));
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let report = build_report(&profile, &clusters, date);

        assert!(report.starts_with("# Career Guidance Report\nGenerated for Civil Engineering on 2026-03-01"));
        assert!(report.contains("- Structural Engineer (High demand) score 67:"));
        assert!(report.contains("## Skill Gaps for Structural Engineer"));
        assert!(report.contains("- AutoCAD: Elementary -> Elementary (Medium, 2-3 months)"));
        assert!(report.contains("- STAAD Pro: Not Started -> Elementary (Critical, 2-3 months) via STAAD Training"));
        assert!(report.contains("- Month 7: BIM & Project Management"));
        assert!(report.contains("- Structural Engineer Intern at Tata Projects"));
    }

    #[test]
    fn empty_clusters_stop_after_profile() {
        let report = build_report(
            &sample_profile(),
            &[],
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        );
        assert!(report.contains("No roles matched this profile."));
        assert!(!report.contains("## Learning Roadmap"));
        assert!(report.contains("- Interests: structures"));
        assert!(!report.contains("- Goals:"));
    }
}
