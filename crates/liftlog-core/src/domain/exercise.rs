//! Exercise domain types.
//!
//! These types represent workout entries in the system, independent of any
//! infrastructure concerns (HTTP, filesystem, etc.).
//!
//! The wire format is camelCase JSON. Optional fields serialize as explicit
//! `null` so records round-trip unchanged against files written by older
//! deployments.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Week
// ─────────────────────────────────────────────────────────────────────────────

/// Metadata about a training week.
///
/// A week always carries its number; the remaining fields are opaque strings
/// that are stored verbatim and never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    /// Training week number, the grouping key for week views.
    pub week_number: i32,
    /// First day of the week (calendar string, e.g. "2024-12-02").
    pub start_date: Option<String>,
    /// Last day of the week.
    pub end_date: Option<String>,
    /// Free-text goal for the week.
    pub goal: Option<String>,
}

impl Week {
    /// Create a week carrying only its number.
    ///
    /// Used when normalizing records that still carry the flat `weekNumber`
    /// field instead of an embedded week object.
    #[must_use]
    pub const fn with_number(week_number: i32) -> Self {
        Self {
            week_number,
            start_date: None,
            end_date: None,
            goal: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Exercise
// ─────────────────────────────────────────────────────────────────────────────

/// A workout entry that exists in the system with an assigned id.
///
/// This represents a stored exercise. Use [`ExerciseDraft`] for entries that
/// haven't been stored yet.
///
/// Older files encode the week as a flat `weekNumber` integer; decoding goes
/// through [`RawExercise`] which folds that field into an embedded [`Week`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawExercise")]
pub struct Exercise {
    /// Unique identifier, assigned on creation and immutable afterwards.
    /// Opaque: ids read from existing files are accepted as-is.
    pub id: String,
    /// Display name, free text.
    pub name: Option<String>,
    /// Maximum repetitions achieved for this movement.
    pub max_reps: Option<i32>,
    /// Training week this entry belongs to.
    pub week: Option<Week>,
    /// Category tag, conventionally `"PUSH"`, `"PULL"` or `"LEG"`.
    /// Stored verbatim, never validated.
    pub category: Option<String>,
}

impl Exercise {
    /// Build a stored exercise from a draft and an assigned id.
    #[must_use]
    pub fn from_draft(id: String, draft: ExerciseDraft) -> Self {
        Self {
            id,
            name: draft.name,
            max_reps: draft.max_reps,
            week: draft.week,
            category: draft.category,
        }
    }
}

/// An exercise payload without an id, as accepted by create and update.
///
/// Decoding goes through [`RawExerciseDraft`] so that clients still sending
/// the flat `weekNumber` field are handled the same way as old files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawExerciseDraft")]
pub struct ExerciseDraft {
    /// Display name, free text.
    pub name: Option<String>,
    /// Maximum repetitions achieved for this movement.
    pub max_reps: Option<i32>,
    /// Training week this entry belongs to.
    pub week: Option<Week>,
    /// Category tag, stored verbatim.
    pub category: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Legacy week normalization
// ─────────────────────────────────────────────────────────────────────────────

/// Wire shape of a stored exercise, including the legacy flat `weekNumber`.
///
/// Normalization is an explicit conversion rather than a serde field hook:
/// when both `week` and `weekNumber` are present the structured object wins,
/// a bare `weekNumber` is folded into a [`Week`], and a `null` is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExercise {
    id: String,
    name: Option<String>,
    max_reps: Option<i32>,
    week: Option<Week>,
    week_number: Option<i32>,
    category: Option<String>,
}

impl From<RawExercise> for Exercise {
    fn from(raw: RawExercise) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            max_reps: raw.max_reps,
            week: normalize_week(raw.week, raw.week_number),
            category: raw.category,
        }
    }
}

/// Wire shape of a draft, including the legacy flat `weekNumber`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExerciseDraft {
    name: Option<String>,
    max_reps: Option<i32>,
    week: Option<Week>,
    week_number: Option<i32>,
    category: Option<String>,
}

impl From<RawExerciseDraft> for ExerciseDraft {
    fn from(raw: RawExerciseDraft) -> Self {
        Self {
            name: raw.name,
            max_reps: raw.max_reps,
            week: normalize_week(raw.week, raw.week_number),
            category: raw.category,
        }
    }
}

/// Fold the legacy flat `weekNumber` into the embedded week.
///
/// The structured `week` object always wins when both are present.
fn normalize_week(week: Option<Week>, legacy_number: Option<i32>) -> Option<Week> {
    match (week, legacy_number) {
        (Some(week), _) => Some(week),
        (None, Some(week_number)) => Some(Week::with_number(week_number)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_serializes_camel_case_with_nulls() {
        let week = Week::with_number(3);
        let json = serde_json::to_value(&week).unwrap();

        assert_eq!(json["weekNumber"], 3);
        assert!(json["startDate"].is_null());
        assert!(json["endDate"].is_null());
        assert!(json["goal"].is_null());
    }

    #[test]
    fn test_exercise_round_trip() {
        let exercise = Exercise {
            id: "abc-123".to_string(),
            name: Some("Bench Press".to_string()),
            max_reps: Some(8),
            week: Some(Week {
                week_number: 2,
                start_date: Some("2024-12-02".to_string()),
                end_date: Some("2024-12-08".to_string()),
                goal: Some("Volume".to_string()),
            }),
            category: Some("PUSH".to_string()),
        };

        let json = serde_json::to_string(&exercise).unwrap();
        let back: Exercise = serde_json::from_str(&json).unwrap();
        assert_eq!(back, exercise);
    }

    #[test]
    fn test_exercise_serializes_max_reps_camel_case() {
        let exercise = Exercise {
            id: "e1".to_string(),
            name: None,
            max_reps: Some(12),
            week: None,
            category: None,
        };
        let json = serde_json::to_value(&exercise).unwrap();

        assert_eq!(json["maxReps"], 12);
        assert!(json.get("max_reps").is_none());
        // Absent optionals stay visible as nulls
        assert!(json["name"].is_null());
        assert!(json["week"].is_null());
    }

    #[test]
    fn test_exercise_decodes_legacy_week_number() {
        let json = r#"{"id":"e1","name":"Squat","maxReps":5,"weekNumber":4,"category":"LEG"}"#;
        let exercise: Exercise = serde_json::from_str(json).unwrap();

        let week = exercise.week.expect("weekNumber should fold into a week");
        assert_eq!(week.week_number, 4);
        assert!(week.start_date.is_none());
        assert!(week.goal.is_none());
    }

    #[test]
    fn test_legacy_week_number_null_is_ignored() {
        let json = r#"{"id":"e1","weekNumber":null}"#;
        let exercise: Exercise = serde_json::from_str(json).unwrap();
        assert!(exercise.week.is_none());
    }

    #[test]
    fn test_draft_structured_week_wins_over_legacy_field() {
        let json = r#"{"name":"Squat","week":{"weekNumber":7},"weekNumber":4}"#;
        let draft: ExerciseDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.week.unwrap().week_number, 7);
    }

    #[test]
    fn test_draft_missing_fields_default_to_none() {
        let draft: ExerciseDraft = serde_json::from_str("{}").unwrap();

        assert!(draft.name.is_none());
        assert!(draft.max_reps.is_none());
        assert!(draft.week.is_none());
        assert!(draft.category.is_none());
    }

    #[test]
    fn test_exercise_requires_id() {
        let json = r#"{"name":"Squat"}"#;
        assert!(serde_json::from_str::<Exercise>(json).is_err());
    }

    #[test]
    fn test_from_draft_stamps_id() {
        let draft = ExerciseDraft {
            name: Some("Deadlift".to_string()),
            max_reps: Some(3),
            week: Some(Week::with_number(1)),
            category: Some("PULL".to_string()),
        };

        let exercise = Exercise::from_draft("id-9".to_string(), draft);
        assert_eq!(exercise.id, "id-9");
        assert_eq!(exercise.name.as_deref(), Some("Deadlift"));
        assert_eq!(exercise.week.unwrap().week_number, 1);
    }
}
