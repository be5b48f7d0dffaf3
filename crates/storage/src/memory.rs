//! In-memory record store, scoped to the authenticated session user.
//!
//! Every read and write requires an active session and only touches rows owned
//! by the session user. Operations on rows owned by someone else fail with
//! not-found, identical to rows that do not exist.

use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use chrono::{Local, NaiveDateTime};
use liftlog_domain as domain;
use uuid::Uuid;

use crate::{file::FileStorageError, model};

#[derive(Default)]
pub struct InMemoryStorage {
    state: RwLock<State>,
}

#[derive(Default)]
pub(crate) struct State {
    pub users: Vec<domain::User>,
    pub session: Option<domain::UserID>,
    pub exercises: HashMap<domain::UserID, Vec<domain::Exercise>>,
    pub routines: HashMap<domain::UserID, Vec<domain::Routine>>,
    pub workout_sets: HashMap<domain::UserID, Vec<domain::WorkoutSet>>,
    pub profiles: HashMap<domain::UserID, domain::Profile>,
    pub weight_entries: HashMap<domain::UserID, Vec<domain::WeightEntry>>,
}

impl InMemoryStorage {
    /// Creates a store knowing the given user accounts. No session is active
    /// until [`request_session`](domain::SessionRepository::request_session).
    #[must_use]
    pub fn new(users: Vec<domain::User>) -> Self {
        Self {
            state: RwLock::new(State {
                users,
                ..State::default()
            }),
        }
    }

    pub(crate) fn from_snapshot(snapshot: model::Snapshot) -> Result<Self, FileStorageError> {
        Ok(Self {
            state: RwLock::new(snapshot.restore()?),
        })
    }

    pub(crate) fn snapshot(&self) -> model::Snapshot {
        model::Snapshot::capture(&self.read())
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl State {
    fn session_user(&self) -> Result<domain::UserID, domain::StorageError> {
        self.session.ok_or(domain::StorageError::NoSession)
    }
}

impl domain::SessionRepository for InMemoryStorage {
    async fn request_session(&self, user_id: domain::UserID) -> Result<domain::User, domain::ReadError> {
        let mut state = self.write();
        let user = state
            .users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or(domain::ReadError::NotFound)?;
        state.session = Some(user.id);
        Ok(user)
    }

    async fn initialize_session(&self) -> Result<domain::User, domain::ReadError> {
        let state = self.read();
        let user_id = state.session_user()?;
        state
            .users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or(domain::ReadError::NotFound)
    }

    async fn delete_session(&self) -> Result<(), domain::DeleteError> {
        self.write().session = None;
        Ok(())
    }
}

impl domain::UserRepository for InMemoryStorage {
    async fn read_user(&self) -> Result<domain::User, domain::ReadError> {
        let state = self.read();
        let user_id = state.session_user()?;
        state
            .users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or(domain::ReadError::NotFound)
    }

    async fn delete_user(&self, id: domain::UserID) -> Result<domain::UserID, domain::DeleteError> {
        let mut state = self.write();
        let user_id = state.session_user()?;
        if user_id != id {
            return Err(domain::DeleteError::NotFound);
        }
        state.users.retain(|u| u.id != id);
        state.exercises.remove(&id);
        state.routines.remove(&id);
        state.workout_sets.remove(&id);
        state.profiles.remove(&id);
        state.weight_entries.remove(&id);
        state.session = None;
        Ok(id)
    }
}

impl domain::ExerciseRepository for InMemoryStorage {
    async fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        let state = self.read();
        let user_id = state.session_user()?;
        Ok(state.exercises.get(&user_id).cloned().unwrap_or_default())
    }

    async fn create_exercise(
        &self,
        name: domain::Name,
        category: String,
    ) -> Result<domain::Exercise, domain::CreateError> {
        let mut state = self.write();
        let user_id = state.session_user()?;
        let customs = state.exercises.entry(user_id).or_default();
        if domain::Exercise::all(customs).iter().any(|e| e.name == name) {
            return Err(domain::CreateError::Conflict);
        }
        let exercise = domain::Exercise {
            id: Uuid::new_v4().into(),
            name,
            category,
            is_custom: true,
        };
        customs.push(exercise.clone());
        Ok(exercise)
    }
}

impl domain::RoutineRepository for InMemoryStorage {
    async fn read_routines(&self) -> Result<Vec<domain::Routine>, domain::ReadError> {
        let state = self.read();
        let user_id = state.session_user()?;
        Ok(state.routines.get(&user_id).cloned().unwrap_or_default())
    }

    async fn create_routine(
        &self,
        name: domain::Name,
        exercise_ids: Vec<domain::ExerciseID>,
    ) -> Result<domain::Routine, domain::CreateError> {
        let mut state = self.write();
        let user_id = state.session_user()?;
        let routines = state.routines.entry(user_id).or_default();
        if routines.iter().any(|r| r.name == name) {
            return Err(domain::CreateError::Conflict);
        }
        let routine = domain::Routine {
            id: Uuid::new_v4().into(),
            name,
            exercise_ids,
            created_at: Local::now().naive_local(),
        };
        routines.push(routine.clone());
        Ok(routine)
    }

    async fn modify_routine(
        &self,
        id: domain::RoutineID,
        name: domain::Name,
        exercise_ids: Vec<domain::ExerciseID>,
    ) -> Result<domain::Routine, domain::UpdateError> {
        let mut state = self.write();
        let user_id = state.session_user()?;
        let routines = state.routines.entry(user_id).or_default();
        if routines.iter().any(|r| r.id != id && r.name == name) {
            return Err(domain::UpdateError::Conflict);
        }
        let routine = routines
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(domain::UpdateError::NotFound)?;
        routine.name = name;
        routine.exercise_ids = exercise_ids;
        Ok(routine.clone())
    }

    async fn delete_routine(
        &self,
        id: domain::RoutineID,
    ) -> Result<domain::RoutineID, domain::DeleteError> {
        let mut state = self.write();
        let user_id = state.session_user()?;
        let routines = state.routines.entry(user_id).or_default();
        if !routines.iter().any(|r| r.id == id) {
            return Err(domain::DeleteError::NotFound);
        }
        routines.retain(|r| r.id != id);
        Ok(id)
    }
}

impl domain::WorkoutSetRepository for InMemoryStorage {
    async fn read_workout_sets(&self) -> Result<Vec<domain::WorkoutSet>, domain::ReadError> {
        let state = self.read();
        let user_id = state.session_user()?;
        let mut sets = state.workout_sets.get(&user_id).cloned().unwrap_or_default();
        sets.sort_by_key(|s| std::cmp::Reverse(s.date));
        Ok(sets)
    }

    async fn create_workout_set(
        &self,
        mut workout_set: domain::WorkoutSet,
    ) -> Result<domain::WorkoutSet, domain::CreateError> {
        let mut state = self.write();
        let user_id = state.session_user()?;
        workout_set.id = Uuid::new_v4().into();
        state
            .workout_sets
            .entry(user_id)
            .or_default()
            .push(workout_set.clone());
        Ok(workout_set)
    }

    async fn delete_workout_set(
        &self,
        id: domain::WorkoutSetID,
    ) -> Result<domain::WorkoutSetID, domain::DeleteError> {
        let mut state = self.write();
        let user_id = state.session_user()?;
        let sets = state.workout_sets.entry(user_id).or_default();
        if !sets.iter().any(|s| s.id == id) {
            return Err(domain::DeleteError::NotFound);
        }
        sets.retain(|s| s.id != id);
        Ok(id)
    }
}

impl domain::ProfileRepository for InMemoryStorage {
    async fn read_profile(&self) -> Result<Option<domain::Profile>, domain::ReadError> {
        let state = self.read();
        let user_id = state.session_user()?;
        Ok(state.profiles.get(&user_id).cloned())
    }

    async fn save_profile(
        &self,
        profile: domain::Profile,
    ) -> Result<domain::Profile, domain::UpdateError> {
        let mut state = self.write();
        let user_id = state.session_user()?;
        state.profiles.insert(user_id, profile.clone());
        Ok(profile)
    }
}

impl domain::WeightEntryRepository for InMemoryStorage {
    async fn read_weight_entries(&self) -> Result<Vec<domain::WeightEntry>, domain::ReadError> {
        let state = self.read();
        let user_id = state.session_user()?;
        let mut entries = state
            .weight_entries
            .get(&user_id)
            .cloned()
            .unwrap_or_default();
        entries.sort_by_key(|e| std::cmp::Reverse(e.date));
        Ok(entries)
    }

    async fn create_weight_entry(
        &self,
        weight_kg: f32,
        body_fat_pct: Option<f32>,
        date: NaiveDateTime,
        notes: Option<String>,
    ) -> Result<domain::WeightEntry, domain::CreateError> {
        let mut state = self.write();
        let user_id = state.session_user()?;
        let entry = domain::WeightEntry {
            id: Uuid::new_v4().into(),
            weight_kg,
            body_fat_pct,
            date,
            notes,
        };
        state
            .weight_entries
            .entry(user_id)
            .or_default()
            .push(entry.clone());
        Ok(entry)
    }
}
