use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const PROFILE_KEY: &str = "career-profile";
pub const QUICK_SUGGESTION_KEY: &str = "quick-suggestion";

#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    id: Uuid,
    stored_at: DateTime<Utc>,
    payload: T,
}

/// Write-once/read-once slots carrying state between separate invocations.
/// Reading a slot clears it; an empty slot is not an error.
#[derive(Debug, Clone)]
pub struct HandoffSlot {
    dir: PathBuf,
}

impl HandoffSlot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn put<T: Serialize>(&self, key: &str, payload: &T) -> anyhow::Result<Uuid> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create session dir {}", self.dir.display()))?;

        let envelope = Envelope {
            id: Uuid::new_v4(),
            stored_at: Utc::now(),
            payload,
        };
        let path = self.path(key);
        let body = serde_json::to_string_pretty(&envelope)?;
        std::fs::write(&path, body)
            .with_context(|| format!("failed to write handoff slot {}", path.display()))?;

        tracing::debug!(key, id = %envelope.id, "stored handoff slot");
        Ok(envelope.id)
    }

    pub fn take<T: DeserializeOwned>(&self, key: &str) -> anyhow::Result<Option<T>> {
        let path = self.path(key);
        let body = match std::fs::read_to_string(&path) {
            Ok(body) => body,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read handoff slot {}", path.display()))
            }
        };
        std::fs::remove_file(&path)
            .with_context(|| format!("failed to clear handoff slot {}", path.display()))?;

        match serde_json::from_str::<Envelope<T>>(&body) {
            Ok(envelope) => {
                tracing::debug!(key, id = %envelope.id, stored_at = %envelope.stored_at, "took handoff slot");
                Ok(Some(envelope.payload))
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "discarding unreadable handoff slot");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuickSuggestionForm, StudentProfile};
    use crate::scorer::score_roles_with;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_profile() -> StudentProfile {
        StudentProfile {
            branch: "Electronics & Communication".to_string(),
            current_skills: vec!["Embedded C".to_string(), "Arduino".to_string()],
            interests: vec!["IoT".to_string(), "firmware".to_string()],
            career_goals: "Ship connected devices".to_string(),
            aptitude: "Analytical".to_string(),
            gpa: 7.2,
        }
    }

    #[test]
    fn empty_slot_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = HandoffSlot::new(dir.path().join("missing"));
        let taken: Option<StudentProfile> = slot.take(PROFILE_KEY).unwrap();
        assert!(taken.is_none());
    }

    #[test]
    fn take_clears_the_slot() {
        let dir = tempfile::tempdir().unwrap();
        let slot = HandoffSlot::new(dir.path());
        let form = QuickSuggestionForm {
            branch: "Other".to_string(),
            skills: "Excel".to_string(),
            interests: "data".to_string(),
        };
        slot.put(QUICK_SUGGESTION_KEY, &form).unwrap();

        let first: Option<QuickSuggestionForm> = slot.take(QUICK_SUGGESTION_KEY).unwrap();
        let second: Option<QuickSuggestionForm> = slot.take(QUICK_SUGGESTION_KEY).unwrap();
        assert_eq!(first, Some(form));
        assert!(second.is_none());
    }

    #[test]
    fn reloaded_profile_scores_identically() {
        let dir = tempfile::tempdir().unwrap();
        let slot = HandoffSlot::new(dir.path());
        let profile = sample_profile();
        slot.put(PROFILE_KEY, &profile).unwrap();
        let restored: StudentProfile = slot.take(PROFILE_KEY).unwrap().unwrap();
        assert_eq!(restored, profile);

        let before = score_roles_with(&profile, &mut StdRng::seed_from_u64(9));
        let after = score_roles_with(&restored, &mut StdRng::seed_from_u64(10));
        assert_eq!(before.len(), after.len());
        for (left, right) in before.iter().zip(after.iter()) {
            assert_eq!(left.record, right.record);
            assert_eq!(left.match_score, right.match_score);
            assert_eq!(left.required_skills, right.required_skills);
        }
    }

    #[test]
    fn corrupted_slot_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let slot = HandoffSlot::new(dir.path());
        std::fs::write(dir.path().join("career-profile.json"), "{not json").unwrap();
        let taken: Option<StudentProfile> = slot.take(PROFILE_KEY).unwrap();
        assert!(taken.is_none());
        assert!(!dir.path().join("career-profile.json").exists());
    }
}
