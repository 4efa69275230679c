//! The data store: canonical in-memory state plus persistence writes.
//!
//! `DataStore` owns the live [`Store`] document and is its only writer.
//! Every mutating operation persists the full document through the injected
//! backend before returning. A failed write is surfaced to the caller but
//! the in-memory mutation is kept: the store remains the source of truth
//! for the rest of the session rather than rolling back to a prior state.

use crate::persistence::StoreBackend;
use crate::{ExerciseEntry, MealDay, MealItem, Result, Store, WorkoutDay};
use uuid::Uuid;

pub struct DataStore<B: StoreBackend> {
    store: Store,
    backend: B,
}

impl<B: StoreBackend> DataStore<B> {
    /// Open the store, loading whatever the backend has persisted.
    pub fn open(backend: B) -> Self {
        let store = backend.load();
        Self { store, backend }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn workouts(&self) -> &[WorkoutDay] {
        &self.store.workouts
    }

    pub fn meals(&self) -> &[MealDay] {
        &self.store.meals
    }

    /// Append exercises to the workout day for `date`.
    ///
    /// If a day with this date exists its exercise list is extended in
    /// place and the day keeps its position in the outer list. Otherwise a
    /// new day is created with a fresh id and prepended (newest first).
    /// An empty `entries` list is a silent no-op.
    pub fn append_workout(
        &mut self,
        date: &str,
        date_display: &str,
        entries: Vec<ExerciseEntry>,
    ) -> Result<()> {
        if entries.is_empty() {
            tracing::debug!("append_workout called with no entries, ignoring");
            return Ok(());
        }

        match self.store.workouts.iter_mut().find(|w| w.date == date) {
            Some(day) => {
                day.exercises.extend(entries);
                tracing::debug!("Merged entries into existing workout day {}", date);
            }
            None => {
                self.store.workouts.insert(
                    0,
                    WorkoutDay {
                        id: Uuid::new_v4(),
                        date: date.to_string(),
                        date_display: date_display.to_string(),
                        exercises: entries,
                    },
                );
                tracing::debug!("Created new workout day {}", date);
            }
        }

        self.persist()
    }

    /// Remove the workout day with the given id.
    ///
    /// Returns whether a day was removed. An unknown id is a no-op, not an
    /// error. Confirmation is the caller's responsibility.
    pub fn delete_workout(&mut self, id: Uuid) -> Result<bool> {
        let before = self.store.workouts.len();
        self.store.workouts.retain(|w| w.id != id);
        if self.store.workouts.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Append food items to the meal day for `date`. Symmetric to
    /// [`Self::append_workout`].
    pub fn append_meal(
        &mut self,
        date: &str,
        date_display: &str,
        items: Vec<MealItem>,
    ) -> Result<()> {
        if items.is_empty() {
            tracing::debug!("append_meal called with no items, ignoring");
            return Ok(());
        }

        match self.store.meals.iter_mut().find(|m| m.date == date) {
            Some(day) => {
                day.items.extend(items);
                tracing::debug!("Merged items into existing meal day {}", date);
            }
            None => {
                self.store.meals.insert(
                    0,
                    MealDay {
                        id: Uuid::new_v4(),
                        date: date.to_string(),
                        date_display: date_display.to_string(),
                        items,
                    },
                );
                tracing::debug!("Created new meal day {}", date);
            }
        }

        self.persist()
    }

    /// Remove the meal day with the given id. Symmetric to
    /// [`Self::delete_workout`].
    pub fn delete_meal(&mut self, id: Uuid) -> Result<bool> {
        let before = self.store.meals.len();
        self.store.meals.retain(|m| m.id != id);
        if self.store.meals.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Full overwrite of both lists. Used by backup restore and clear-all;
    /// validation of restored content is the backup exchange's job.
    pub fn replace_all(&mut self, workouts: Vec<WorkoutDay>, meals: Vec<MealDay>) -> Result<()> {
        self.store.workouts = workouts;
        self.store.meals = meals;
        self.persist()
    }

    fn persist(&mut self) -> Result<()> {
        if let Err(e) = self.backend.save(&self.store) {
            // Best effort: keep the in-memory state, report the failure.
            tracing::warn!("Store write failed, changes held in memory only: {}", e);
            return Err(e);
        }
        Ok(())
    }
}
