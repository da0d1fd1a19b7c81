#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillInfo {
    pub name: &'static str,
    pub level: u8,
    pub learning_time: &'static str,
    pub resources: &'static [&'static str],
}

pub const DEFAULT_SKILL: SkillInfo = SkillInfo {
    name: "",
    level: 2,
    learning_time: "2-3 months",
    resources: &[],
};

pub static SKILLS: &[SkillInfo] = &[
    SkillInfo { name: "Python", level: 3, learning_time: "3-4 months", resources: &["Codecademy", "Real Python", "YouTube Tutorials"] },
    SkillInfo { name: "Java", level: 3, learning_time: "4-5 months", resources: &["Oracle Java Tutorials", "Udemy", "Coursera"] },
    SkillInfo { name: "JavaScript", level: 2, learning_time: "2-3 months", resources: &["MDN Web Docs", "Codecademy", "FreeCodeCamp"] },
    SkillInfo { name: "React.js", level: 3, learning_time: "2-3 months", resources: &["React Official Docs", "Udemy", "Scrimba"] },
    SkillInfo { name: "Node.js", level: 3, learning_time: "2-3 months", resources: &["Node.js Official Docs", "Udemy", "YouTube"] },
    SkillInfo { name: "MongoDB", level: 2, learning_time: "1-2 months", resources: &["MongoDB University", "Udemy", "YouTube"] },
    SkillInfo { name: "PostgreSQL", level: 3, learning_time: "2-3 months", resources: &["PostgreSQL Docs", "Udemy", "YouTube"] },
    SkillInfo { name: "SQL", level: 2, learning_time: "1-2 months", resources: &["SQLZoo", "Codecademy", "LeetCode"] },
    SkillInfo { name: "Docker", level: 2, learning_time: "1-2 months", resources: &["Docker Docs", "Udemy", "YouTube"] },
    SkillInfo { name: "Kubernetes", level: 3, learning_time: "2-3 months", resources: &["Kubernetes Docs", "Linux Academy", "Udemy"] },
    SkillInfo { name: "AWS", level: 2, learning_time: "2-3 months", resources: &["AWS Training", "Udemy", "A Cloud Guru"] },
    SkillInfo { name: "TensorFlow", level: 3, learning_time: "3-4 months", resources: &["TensorFlow Docs", "Coursera", "Udemy"] },
    SkillInfo { name: "PyTorch", level: 3, learning_time: "3-4 months", resources: &["PyTorch Docs", "Fast.ai", "Udemy"] },
    SkillInfo { name: "C/C++", level: 3, learning_time: "4-5 months", resources: &["cplusplus.com", "Udemy", "YouTube"] },
    SkillInfo { name: "CATIA", level: 3, learning_time: "3-4 months", resources: &["CATIA Training", "Udemy", "YouTube"] },
    SkillInfo { name: "ANSYS", level: 3, learning_time: "2-3 months", resources: &["ANSYS Learning", "Udemy", "YouTube"] },
    SkillInfo { name: "STAAD Pro", level: 2, learning_time: "2-3 months", resources: &["STAAD Training", "Udemy", "YouTube"] },
];

/// Exact, case-sensitive lookup by skill name.
pub fn lookup(name: &str) -> Option<&'static SkillInfo> {
    SKILLS.iter().find(|info| info.name == name)
}

pub fn info_or_default(name: &str) -> &'static SkillInfo {
    match lookup(name) {
        Some(info) => info,
        None => {
            tracing::debug!(skill = name, "skill not in database, using defaults");
            &DEFAULT_SKILL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(lookup("Python").map(|info| info.level), Some(3));
        assert!(lookup("python").is_none());
    }

    #[test]
    fn unknown_skill_falls_back_to_defaults() {
        let info = info_or_default("Hooks");
        assert_eq!(info.level, 2);
        assert_eq!(info.learning_time, "2-3 months");
        assert!(info.resources.is_empty());
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = SKILLS.iter().map(|info| info.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), SKILLS.len());
    }
}
