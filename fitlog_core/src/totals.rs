//! Derived totals over the store.
//!
//! Pure reductions only; nothing here mutates state or touches persistence.

use crate::{MealDay, Store};
use serde::Serialize;

/// Calorie and macro totals for one day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MacroTotals {
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Sum calories and macros across a day's items. `None` (no day logged for
/// the date in question) yields all zeroes.
pub fn daily_totals(day: Option<&MealDay>) -> MacroTotals {
    match day {
        Some(day) => day_macro_totals(day),
        None => MacroTotals::default(),
    }
}

/// Totals for a specific meal day. Same reduction as [`daily_totals`],
/// applied per historical day when rendering history.
pub fn day_macro_totals(day: &MealDay) -> MacroTotals {
    day.items.iter().fold(MacroTotals::default(), |acc, item| MacroTotals {
        calories: acc.calories + item.calories,
        protein: acc.protein + item.protein,
        carbs: acc.carbs + item.carbs,
        fats: acc.fats + item.fats,
    })
}

/// Summary counts shown on the stats view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct StoreSummary {
    pub workout_days: usize,
    pub total_exercises: usize,
    pub meal_days: usize,
}

/// Count workout days, total exercises, and meal days in the store.
pub fn store_summary(store: &Store) -> StoreSummary {
    StoreSummary {
        workout_days: store.workouts.len(),
        total_exercises: store.workouts.iter().map(|w| w.exercises.len()).sum(),
        meal_days: store.meals.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExerciseEntry, MealItem, WeightUnit, WorkoutDay};
    use uuid::Uuid;

    fn meal_day(items: Vec<MealItem>) -> MealDay {
        MealDay {
            id: Uuid::new_v4(),
            date: "2024-03-09".into(),
            date_display: "Saturday, March 9".into(),
            items,
        }
    }

    #[test]
    fn test_daily_totals_sums_items() {
        let day = meal_day(vec![
            MealItem::new("Oats", 100, 10.0, 5.0, 2.0),
            MealItem::new("Eggs", 50, 5.0, 2.0, 1.0),
        ]);

        let totals = daily_totals(Some(&day));
        assert_eq!(totals.calories, 150);
        assert_eq!(totals.protein, 15.0);
        assert_eq!(totals.carbs, 7.0);
        assert_eq!(totals.fats, 3.0);
    }

    #[test]
    fn test_daily_totals_no_day_is_zero() {
        assert_eq!(daily_totals(None), MacroTotals::default());
    }

    #[test]
    fn test_day_macro_totals_empty_items() {
        let day = meal_day(vec![]);
        assert_eq!(day_macro_totals(&day), MacroTotals::default());
    }

    #[test]
    fn test_store_summary_counts() {
        let store = Store {
            workouts: vec![
                WorkoutDay {
                    id: Uuid::new_v4(),
                    date: "2024-03-09".into(),
                    date_display: "Saturday, March 9".into(),
                    exercises: vec![
                        ExerciseEntry::new("Squats", 3, 10, 0.0, WeightUnit::Lbs),
                        ExerciseEntry::new("Deadlifts", 5, 5, 0.0, WeightUnit::Lbs),
                    ],
                },
                WorkoutDay {
                    id: Uuid::new_v4(),
                    date: "2024-03-08".into(),
                    date_display: "Friday, March 8".into(),
                    exercises: vec![ExerciseEntry::new("Preacher Curls", 3, 12, 0.0, WeightUnit::Lbs)],
                },
            ],
            meals: vec![meal_day(vec![MealItem::new("Oats", 300, 10.0, 50.0, 5.0)])],
        };

        let summary = store_summary(&store);
        assert_eq!(summary.workout_days, 2);
        assert_eq!(summary.total_exercises, 3);
        assert_eq!(summary.meal_days, 1);
    }
}
