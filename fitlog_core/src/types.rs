//! Core domain types for the Fitlog tracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercise entries and workout days
//! - Meal items and meal days
//! - The persisted store document
//!
//! Field names in the persisted JSON are camelCase (`dateDisplay`, etc.) so
//! that backup files are readable and stable across versions.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Calendar date key format used throughout the store (`2024-03-09`).
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Workout Types
// ============================================================================

/// Weight unit for an exercise entry. No conversion between units is
/// performed; the unit is recorded as entered.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Lbs,
    Kg,
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightUnit::Lbs => write!(f, "lbs"),
            WeightUnit::Kg => write!(f, "kg"),
        }
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lbs" => Ok(WeightUnit::Lbs),
            "kg" => Ok(WeightUnit::Kg),
            other => Err(format!("unknown weight unit '{}' (expected lbs or kg)", other)),
        }
    }
}

/// One exercise performed within a workout day.
///
/// `name` should match a catalog entry but this is not enforced; unmatched
/// names simply carry no category badge. A weight of 0 means unspecified.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseEntry {
    pub id: Uuid,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub unit: WeightUnit,
    /// Display-only time of entry (e.g. "7:30 PM").
    pub time: String,
}

impl ExerciseEntry {
    pub fn new(name: impl Into<String>, sets: u32, reps: u32, weight: f64, unit: WeightUnit) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            sets,
            reps,
            weight,
            unit,
            time: current_time_display(),
        }
    }
}

/// All exercises logged on one calendar date.
///
/// At most one `WorkoutDay` exists per `date` value; the store's append
/// logic merges repeat saves into the existing day.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    pub id: Uuid,
    /// Date key (`YYYY-MM-DD`), unique within the workouts list.
    pub date: String,
    /// Human-readable date (e.g. "Monday, March 9").
    pub date_display: String,
    pub exercises: Vec<ExerciseEntry>,
}

// ============================================================================
// Nutrition Types
// ============================================================================

/// One food item logged within a meal day.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealItem {
    pub id: Uuid,
    pub name: String,
    pub calories: u32,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fats: f64,
    /// Display-only time of entry.
    pub time: String,
}

impl MealItem {
    pub fn new(name: impl Into<String>, calories: u32, protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            calories,
            protein,
            carbs,
            fats,
            time: current_time_display(),
        }
    }
}

/// All food items logged on one calendar date. Same one-per-date invariant
/// as [`WorkoutDay`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealDay {
    pub id: Uuid,
    pub date: String,
    pub date_display: String,
    pub items: Vec<MealItem>,
}

// ============================================================================
// Store Document
// ============================================================================

/// The persisted document: both ordered day lists, newest first for newly
/// created days. Absent or unparsable storage loads as the default (empty).
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Store {
    #[serde(default)]
    pub workouts: Vec<WorkoutDay>,
    #[serde(default)]
    pub meals: Vec<MealDay>,
}

impl Store {
    /// Find the workout day for a date key, if one exists.
    pub fn workout_for_date(&self, date: &str) -> Option<&WorkoutDay> {
        self.workouts.iter().find(|w| w.date == date)
    }

    /// Find the meal day for a date key, if one exists.
    pub fn meal_for_date(&self, date: &str) -> Option<&MealDay> {
        self.meals.iter().find(|m| m.date == date)
    }
}

// ============================================================================
// Date helpers
// ============================================================================

/// Today's date key in local time (`YYYY-MM-DD`).
pub fn today_date_key() -> String {
    Local::now().format(DATE_KEY_FORMAT).to_string()
}

/// Human-readable display string for a date ("Monday, March 9").
pub fn date_display(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

/// Today's display string in local time.
pub fn today_date_display() -> String {
    date_display(Local::now().date_naive())
}

/// Clock time display for new entries ("7:30 PM").
pub fn current_time_display() -> String {
    Local::now().format("%-I:%M %p").to_string()
}
