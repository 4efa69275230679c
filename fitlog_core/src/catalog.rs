//! Built-in exercise catalog.
//!
//! This module provides the fixed category → exercise mapping used for
//! lookups and calendar-day badges. The catalog is static reference data;
//! there is no runtime mutation.

use crate::ExerciseEntry;
use once_cell::sync::Lazy;

/// Muscle group category. The set is closed; variants are declared in
/// alphabetical order so the derived `Ord` matches the badge sort order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Back,
    Bicep,
    Chest,
    Legs,
    Shoulder,
    Tricep,
}

impl Category {
    /// All categories, in alphabetical order.
    pub const ALL: [Category; 6] = [
        Category::Back,
        Category::Bicep,
        Category::Chest,
        Category::Legs,
        Category::Shoulder,
        Category::Tricep,
    ];

    /// Full display name.
    pub fn name(self) -> &'static str {
        match self {
            Category::Back => "Back",
            Category::Bicep => "Bicep",
            Category::Chest => "Chest",
            Category::Legs => "Legs",
            Category::Shoulder => "Shoulder",
            Category::Tricep => "Tricep",
        }
    }

    /// Fixed abbreviation used on calendar badges.
    pub fn abbrev(self) -> &'static str {
        match self {
            Category::Back => "Ba",
            Category::Bicep => "Bi",
            Category::Chest => "C",
            Category::Legs => "L",
            Category::Shoulder => "S",
            Category::Tricep => "T",
        }
    }
}

/// The exercise catalog: each category with its ordered exercise list.
/// Exercise names are unique within a category and matched case-sensitively.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub categories: Vec<(Category, Vec<&'static str>)>,
}

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog of exercises
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns
/// a cached reference. This function is retained for testing.
pub fn build_default_catalog() -> Catalog {
    Catalog {
        categories: vec![
            (
                Category::Chest,
                vec![
                    "Incline Dumbbell Press",
                    "Incline Barbell Press",
                    "Flat Dumbbell Press",
                    "Flat Barbell Press",
                    "Decline Dumbbell Press",
                    "Decline Barbell Press",
                    "Seated Chest Press",
                    "Chest Pec Flies",
                ],
            ),
            (
                Category::Shoulder,
                vec![
                    "Dumbbell Shoulder Raises",
                    "Barbell Shoulder Raises",
                    "Seated Machine Shoulder Press",
                    "Arnold Press",
                    "Lateral Raises Dumbbell",
                    "Lateral Raises Cable",
                ],
            ),
            (
                Category::Tricep,
                vec![
                    "Tricep Overhead Raises",
                    "Tricep Cable Pushdown Rod",
                    "Tricep Cable Pushdown Rope",
                    "Overhead Tricep Extensions Cable",
                    "Tricep Skullcrushers Bar",
                    "Seated Tricep Pushdown",
                ],
            ),
            (
                Category::Back,
                vec![
                    "Lat Pulldown C-Bar",
                    "Lat Pulldown Close Grip",
                    "Cable Back Rows",
                    "Machine Back Rows",
                    "Reverse Grip Lat Pulldown",
                    "Rear Delt Flies",
                    "Deadlifts",
                    "Rear Delt Shrugs",
                    "Barbell Back Rows",
                    "Dumbbell Back Rows",
                ],
            ),
            (
                Category::Bicep,
                vec![
                    "Cable Bicep Curls Bar",
                    "Cable Bicep Curls Rope",
                    "Cable Bicep Curls Single",
                    "Dumbbell Bicep Curls",
                    "Dumbbell Hammer Curls",
                    "Seated Dumbbell Curls",
                    "Seated Bicep Machine",
                    "Preacher Curls",
                ],
            ),
            (
                Category::Legs,
                vec![
                    "Hamstring Curls",
                    "Squats",
                    "Bulgarian Split Squat",
                    "Leg Extensions",
                    "Calf Raises Standing",
                    "Calf Raises Seated",
                ],
            ),
        ],
    }
}

impl Catalog {
    /// Look up the category of an exercise by exact name.
    ///
    /// Linear scan across all categories, returning the first match. The
    /// catalog is small enough that an inverted index is not worth it.
    pub fn category_of(&self, exercise_name: &str) -> Option<Category> {
        for (category, exercises) in &self.categories {
            if exercises.iter().any(|e| *e == exercise_name) {
                return Some(*category);
            }
        }
        None
    }

    /// Compute the badge label for a day's exercises.
    ///
    /// Distinct categories represented by the entries (unmatched names
    /// skipped), sorted alphabetically by full category name, abbreviated
    /// and joined with `", "`. Returns an empty string when nothing matches.
    pub fn categories_of(&self, exercises: &[ExerciseEntry]) -> String {
        let mut categories: Vec<Category> = exercises
            .iter()
            .filter_map(|ex| self.category_of(&ex.name))
            .collect();
        categories.sort();
        categories.dedup();

        categories
            .iter()
            .map(|c| c.abbrev())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Validate the catalog for consistency
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (category, exercises) in &self.categories {
            if exercises.is_empty() {
                errors.push(format!("Category '{}' has no exercises", category.name()));
            }
            let mut seen = std::collections::HashSet::new();
            for name in exercises {
                if name.is_empty() {
                    errors.push(format!("Category '{}' has an empty exercise name", category.name()));
                }
                if !seen.insert(*name) {
                    errors.push(format!(
                        "Category '{}' lists '{}' more than once",
                        category.name(),
                        name
                    ));
                }
            }
        }

        let listed: std::collections::HashSet<Category> =
            self.categories.iter().map(|(c, _)| *c).collect();
        for category in Category::ALL {
            if !listed.contains(&category) {
                errors.push(format!("Category '{}' is missing from the catalog", category.name()));
            }
        }

        errors
    }
}
