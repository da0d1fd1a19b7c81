use std::path::Path;

use anyhow::Context;

use crate::models::StudentProfile;

#[derive(serde::Deserialize)]
struct CsvRow {
    branch: String,
    skills: String,
    interests: String,
    career_goals: String,
    aptitude: String,
    gpa: f64,
}

pub fn split_list(cell: &str) -> Vec<String> {
    cell.split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads one profile per row; list cells are `;`-separated.
pub fn import_profiles(csv_path: &Path) -> anyhow::Result<Vec<StudentProfile>> {
    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;
    let mut profiles = Vec::new();

    for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result.with_context(|| format!("invalid profile on data row {}", index + 1))?;
        profiles.push(StudentProfile {
            branch: row.branch.trim().to_string(),
            current_skills: split_list(&row.skills),
            interests: split_list(&row.interests),
            career_goals: row.career_goals.trim().to_string(),
            aptitude: row.aptitude.trim().to_string(),
            gpa: row.gpa,
        });
    }

    tracing::info!(count = profiles.len(), path = %csv_path.display(), "imported profiles");
    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_and_splits_lists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.csv");
        std::fs::write(
            &path,
            "branch,skills,interests,career_goals,aptitude,gpa\n\
             Civil Engineering,AutoCAD; STAAD Pro;,structures,Design bridges,Creative,6.4\n\
             Other,,,,Leadership,9\n",
        )
        .unwrap();

        let profiles = import_profiles(&path).unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].current_skills, vec!["AutoCAD", "STAAD Pro"]);
        assert_eq!(profiles[0].interests, vec!["structures"]);
        assert_eq!(profiles[0].gpa, 6.4);
        assert!(profiles[1].current_skills.is_empty());
        assert_eq!(profiles[1].aptitude, "Leadership");
    }

    #[test]
    fn bad_gpa_is_reported_with_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.csv");
        std::fs::write(
            &path,
            "branch,skills,interests,career_goals,aptitude,gpa\nOther,,,,Technical,high\n",
        )
        .unwrap();

        let err = import_profiles(&path).unwrap_err();
        assert!(format!("{err:#}").contains("data row 1"));
    }
}
