//! Workout plan model
//!
//! Groups and exercises are plain values. Every change produces a new
//! [`WorkoutCollection`] built from the old one with a single field changed;
//! [`WorkoutTracker`] swaps the whole snapshot in on success.

use crate::error::WorkoutError;
use crate::parser;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    /// Free-form, e.g. "4"
    pub sets: String,
    /// Free-form, e.g. "8-10"
    pub reps: String,
    pub completed: bool,
}

impl Exercise {
    pub fn new(name: impl Into<String>, sets: impl Into<String>, reps: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sets: sets.into(),
            reps: reps.into(),
            completed: false,
        }
    }

    pub fn with_completed(&self, completed: bool) -> Self {
        Self {
            completed,
            ..self.clone()
        }
    }
}

/// One (week, workout) unit of the plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutGroup {
    pub week_label: String,
    pub workout_label: String,
    pub completed: bool,
    pub exercises: Vec<Exercise>,
}

impl WorkoutGroup {
    /// Build a group whose `completed` flag is derived from its exercises.
    ///
    /// An empty exercise list counts as completed (`all` over nothing is true).
    pub fn new(
        week_label: impl Into<String>,
        workout_label: impl Into<String>,
        exercises: Vec<Exercise>,
    ) -> Self {
        let completed = all_completed(&exercises);
        Self {
            week_label: week_label.into(),
            workout_label: workout_label.into(),
            completed,
            exercises,
        }
    }

    /// Build a group with an explicit `completed` flag, as read from a document
    pub fn with_flag(
        week_label: impl Into<String>,
        workout_label: impl Into<String>,
        completed: bool,
        exercises: Vec<Exercise>,
    ) -> Self {
        Self {
            week_label: week_label.into(),
            workout_label: workout_label.into(),
            completed,
            exercises,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.exercises.iter().filter(|e| e.completed).count()
    }

    pub fn total(&self) -> usize {
        self.exercises.len()
    }

    /// Fraction of exercises done, `0.0` for an empty group
    pub fn progress(&self) -> f64 {
        if self.exercises.is_empty() {
            0.0
        } else {
            self.completed_count() as f64 / self.total() as f64
        }
    }

    /// "week1" -> "Week 1"
    pub fn week_title(&self) -> String {
        self.week_label.replace("week", "Week ")
    }

    /// "workout2" -> "Workout 2"
    pub fn workout_title(&self) -> String {
        self.workout_label.replace("workout", "Workout ")
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "✓ Done"
        } else {
            "○ Pending"
        }
    }

    /// Copy of this group with one exercise flipped and `completed` recomputed
    pub fn with_exercise_toggled(
        &self,
        group: usize,
        index: usize,
    ) -> Result<Self, WorkoutError> {
        if index >= self.exercises.len() {
            return Err(WorkoutError::ExerciseOutOfRange {
                group,
                index,
                len: self.exercises.len(),
            });
        }

        let exercises: Vec<Exercise> = self
            .exercises
            .iter()
            .enumerate()
            .map(|(i, exercise)| {
                if i == index {
                    exercise.with_completed(!exercise.completed)
                } else {
                    exercise.clone()
                }
            })
            .collect();

        Ok(Self {
            completed: all_completed(&exercises),
            exercises,
            ..self.clone()
        })
    }

    /// Copy of this group with every exercise set to the negated group flag
    pub fn with_all_toggled(&self) -> Self {
        let completed = !self.completed;
        Self {
            completed,
            exercises: self
                .exercises
                .iter()
                .map(|exercise| exercise.with_completed(completed))
                .collect(),
            ..self.clone()
        }
    }
}

fn all_completed(exercises: &[Exercise]) -> bool {
    exercises.iter().all(|e| e.completed)
}

/// Ordered list of workout groups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutCollection {
    groups: Vec<WorkoutGroup>,
}

impl WorkoutCollection {
    pub fn new(groups: Vec<WorkoutGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[WorkoutGroup] {
        &self.groups
    }

    pub fn get(&self, index: usize) -> Option<&WorkoutGroup> {
        self.groups.get(index)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn with_exercise_toggled(
        &self,
        group: usize,
        exercise: usize,
    ) -> Result<Self, WorkoutError> {
        let updated = self.group(group)?.with_exercise_toggled(group, exercise)?;
        Ok(self.replacing(group, updated))
    }

    pub fn with_workout_toggled(&self, group: usize) -> Result<Self, WorkoutError> {
        let updated = self.group(group)?.with_all_toggled();
        Ok(self.replacing(group, updated))
    }

    fn group(&self, index: usize) -> Result<&WorkoutGroup, WorkoutError> {
        self.groups.get(index).ok_or(WorkoutError::GroupOutOfRange {
            index,
            len: self.groups.len(),
        })
    }

    /// Copy of the collection with the group at `index` swapped out.
    /// `index` has already been checked by the caller.
    fn replacing(&self, index: usize, updated: WorkoutGroup) -> Self {
        let mut groups = self.groups.clone();
        groups[index] = updated;
        Self { groups }
    }
}

/// The gym screen's model: the current plan snapshot plus the two toggles
#[derive(Debug, Clone, Default)]
pub struct WorkoutTracker {
    state: WorkoutCollection,
}

impl WorkoutTracker {
    pub fn new(state: WorkoutCollection) -> Self {
        Self { state }
    }

    /// Build the tracker from a workout document. A malformed document gives
    /// an empty plan.
    pub fn from_document(document: &str) -> Self {
        Self::new(parser::parse_workouts(document))
    }

    /// Flip one exercise and recompute its group's completion
    pub fn toggle_exercise(&mut self, group: usize, exercise: usize) -> Result<(), WorkoutError> {
        self.state = self.state.with_exercise_toggled(group, exercise)?;
        Ok(())
    }

    /// Set every exercise of a group to the negation of the group's flag
    pub fn toggle_workout(&mut self, group: usize) -> Result<(), WorkoutError> {
        self.state = self.state.with_workout_toggled(group)?;
        Ok(())
    }

    /// Current snapshot for rendering
    pub fn current_state(&self) -> &WorkoutCollection {
        &self.state
    }
}
