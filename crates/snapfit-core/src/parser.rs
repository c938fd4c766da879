//! Workout document parser
//!
//! Document shape:
//!
//! ```json
//! { "workouts": [
//!     { "week": "week1",
//!       "workout1": { "completed": false,
//!                     "exercises": { "exercise1": { "name": "...", "sets": "4", "reps": "8-10" } } } } ] }
//! ```
//!
//! Every key of a week entry that starts with `workout` and holds an object
//! becomes one [`WorkoutGroup`]. Exercises keep document order and always
//! start uncompleted, whatever the document says.

use serde_json::{Map, Value};

use crate::error::ParseError;
use crate::workout::{Exercise, WorkoutCollection, WorkoutGroup};

const WORKOUT_KEY_PREFIX: &str = "workout";

/// Parse a workout document, discarding it entirely on any error.
///
/// Never fails and never returns a partial plan: a malformed document yields
/// an empty collection and a warning in the log.
pub fn parse_workouts(document: &str) -> WorkoutCollection {
    match try_parse_workouts(document) {
        Ok(collection) => {
            tracing::debug!(groups = collection.len(), "workout document parsed");
            collection
        }
        Err(err) => {
            tracing::warn!(error = %err, "discarding malformed workout document");
            WorkoutCollection::default()
        }
    }
}

/// Parse a workout document, reporting the first problem found
pub fn try_parse_workouts(document: &str) -> Result<WorkoutCollection, ParseError> {
    let value: Value = serde_json::from_str(document)?;
    workouts_from_value(&value)
}

pub fn workouts_from_value(value: &Value) -> Result<WorkoutCollection, ParseError> {
    let root = as_object(value, "$")?;

    let entries = match root.get("workouts") {
        None => return Ok(WorkoutCollection::default()),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(ParseError::malformed("$.workouts", "an array")),
    };

    let mut groups = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        let path = format!("$.workouts[{}]", i);
        let entry = as_object(entry, &path)?;
        let week = optional_string(entry, "week", &path)?;

        for (key, value) in entry {
            if !key.starts_with(WORKOUT_KEY_PREFIX) {
                continue;
            }
            if let Value::Object(workout) = value {
                groups.push(parse_group(&week, key, workout, &format!("{}.{}", path, key))?);
            }
        }
    }

    Ok(WorkoutCollection::new(groups))
}

fn parse_group(
    week: &str,
    key: &str,
    workout: &Map<String, Value>,
    path: &str,
) -> Result<WorkoutGroup, ParseError> {
    // A missing or non-boolean flag reads as "not completed"
    let completed = workout
        .get("completed")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let exercises = match workout.get("exercises") {
        None => Vec::new(),
        Some(Value::Object(exercises)) => exercises
            .iter()
            .map(|(name, exercise)| parse_exercise(exercise, &format!("{}.exercises.{}", path, name)))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => {
            return Err(ParseError::malformed(
                format!("{}.exercises", path),
                "an object of exercises",
            ))
        }
    };

    Ok(WorkoutGroup::with_flag(week, key, completed, exercises))
}

fn parse_exercise(value: &Value, path: &str) -> Result<Exercise, ParseError> {
    let exercise = as_object(value, path)?;
    Ok(Exercise::new(
        optional_string(exercise, "name", path)?,
        optional_string(exercise, "sets", path)?,
        optional_string(exercise, "reps", path)?,
    ))
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, ParseError> {
    value
        .as_object()
        .ok_or_else(|| ParseError::malformed(path, "an object"))
}

/// Missing fields read as empty text; present fields must be strings
fn optional_string(
    object: &Map<String, Value>,
    field: &str,
    path: &str,
) -> Result<String, ParseError> {
    match object.get(field) {
        None => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(ParseError::malformed(format!("{}.{}", path, field), "a string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_seed_document() {
        let plan = parse_workouts(seed::WORKOUT_DOCUMENT);
        assert_eq!(plan.len(), 2);

        let first = &plan.groups()[0];
        assert_eq!(first.week_label, "week1");
        assert_eq!(first.workout_label, "workout1");
        assert!(!first.completed);
        let names: Vec<&str> = first.exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Bench Press", "Squats", "Deadlift"]);
        assert_eq!(first.exercises[0].reps, "8-10");

        let second = &plan.groups()[1];
        assert_eq!(second.workout_label, "workout2");
        assert_eq!(second.exercises.len(), 2);
    }

    #[test]
    fn test_exercise_order_follows_document() {
        let document = r#"{"workouts": [{"week": "week1", "workout1": {"exercises": {
            "exercise10": {"name": "Ten", "sets": "1", "reps": "1"},
            "exercise2": {"name": "Two", "sets": "1", "reps": "1"},
            "exercise1": {"name": "One", "sets": "1", "reps": "1"}
        }}}]}"#;
        let plan = try_parse_workouts(document).unwrap();
        let names: Vec<&str> = plan.groups()[0].exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Ten", "Two", "One"]);
    }

    #[test]
    fn test_exercises_reset_to_uncompleted() {
        let document = json!({"workouts": [{"week": "week2", "workout1": {
            "completed": true,
            "exercises": {"exercise1": {"name": "Squats", "sets": "3", "reps": "12", "completed": true}}
        }}]});
        let plan = workouts_from_value(&document).unwrap();
        let group = &plan.groups()[0];
        // Group flag is copied, exercise flags are not
        assert!(group.completed);
        assert!(!group.exercises[0].completed);
    }

    #[test]
    fn test_lenient_defaults() {
        let document = json!({"workouts": [{"workout1": {"completed": "yes", "exercises": {"e": {}}}}]});
        let plan = workouts_from_value(&document).unwrap();
        let group = &plan.groups()[0];
        assert_eq!(group.week_label, "");
        assert!(!group.completed);
        assert_eq!(group.exercises[0], Exercise::new("", "", ""));
    }

    #[test]
    fn test_missing_exercises_gives_empty_group() {
        let document = json!({"workouts": [{"week": "week1", "workout1": {"completed": false}}]});
        let plan = workouts_from_value(&document).unwrap();
        assert!(plan.groups()[0].exercises.is_empty());
    }

    #[test]
    fn test_non_object_workout_keys_are_skipped() {
        let document = json!({"workouts": [{
            "week": "week1",
            "workoutNotes": "bring water",
            "notes": {"exercises": {}},
            "workout1": {"exercises": {}}
        }]});
        let plan = workouts_from_value(&document).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.groups()[0].workout_label, "workout1");
    }

    #[test]
    fn test_missing_workouts_is_empty() {
        assert!(parse_workouts("{}").is_empty());
    }

    #[test]
    fn test_exercises_as_string_discards_everything() {
        // First group is fine, second is not: nothing survives
        let document = r#"{"workouts": [{"week": "week1",
            "workout1": {"exercises": {"e1": {"name": "Squats", "sets": "3", "reps": "12"}}},
            "workout2": {"exercises": "oops"}}]}"#;
        assert!(matches!(
            try_parse_workouts(document),
            Err(ParseError::Malformed { .. })
        ));
        assert!(parse_workouts(document).is_empty());
    }

    #[test]
    fn test_malformed_inputs_give_empty_plan() {
        for document in [
            "",
            "not json",
            "[]",
            r#"{"workouts": {}}"#,
            r#"{"workouts": ["week1"]}"#,
            r#"{"workouts": [{"week": 1}]}"#,
            r#"{"workouts": [{"workout1": {"exercises": {"e1": "Squats"}}}]}"#,
            r#"{"workouts": [{"workout1": {"exercises": {"e1": {"sets": 3}}}}]}"#,
        ] {
            assert!(parse_workouts(document).is_empty(), "{}", document);
        }
    }

    #[test]
    fn test_error_path_names_the_field() {
        let err = try_parse_workouts(r#"{"workouts": [{"workout1": {"exercises": {"e1": {"reps": 3}}}}]}"#)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed workout document at `$.workouts[0].workout1.exercises.e1.reps`: expected a string"
        );
    }

    proptest! {
        #[test]
        fn prop_parsed_exercises_start_uncompleted(
            flags in prop::collection::vec(any::<bool>(), 1..8),
            group_flag in any::<bool>(),
        ) {
            let exercises: Map<String, Value> = flags
                .iter()
                .enumerate()
                .map(|(i, done)| {
                    (
                        format!("exercise{}", i + 1),
                        json!({"name": format!("Move {}", i), "sets": "3", "reps": "10", "completed": done}),
                    )
                })
                .collect();
            let document = json!({"workouts": [{"week": "week1", "workout1": {
                "completed": group_flag,
                "exercises": exercises
            }}]});

            let plan = parse_workouts(&document.to_string());
            prop_assert_eq!(plan.len(), 1);
            prop_assert_eq!(plan.groups()[0].exercises.len(), flags.len());
            prop_assert!(plan.groups()[0].exercises.iter().all(|e| !e.completed));
        }
    }
}
