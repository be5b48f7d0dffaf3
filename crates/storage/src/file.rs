//! JSON file-backed record store.
//!
//! A thin persistence shell around [`InMemoryStorage`]: the full table state
//! is written to one JSON file after every mutation and reloaded on open.
//! Sessions are not persisted, so every process start begins signed out.

use std::{fs, path::PathBuf};

use chrono::NaiveDateTime;
use liftlog_domain as domain;
use log::debug;

use crate::{InMemoryStorage, model::Snapshot};

pub struct FileStorage {
    path: PathBuf,
    memory: InMemoryStorage,
}

impl FileStorage {
    /// Opens the store at `path`, loading the persisted state if the file
    /// exists. `users` seeds the known accounts of a fresh store and is
    /// ignored when a file is loaded.
    pub fn open(
        path: impl Into<PathBuf>,
        users: Vec<domain::User>,
    ) -> Result<Self, FileStorageError> {
        let path = path.into();
        let memory = if path.exists() {
            let snapshot = serde_json::from_str::<Snapshot>(&fs::read_to_string(&path)?)?;
            InMemoryStorage::from_snapshot(snapshot)?
        } else {
            debug!("no persisted state at {}, starting fresh", path.display());
            InMemoryStorage::new(users)
        };
        Ok(Self { path, memory })
    }

    fn persist(&self) -> Result<(), domain::StorageError> {
        let write = || -> Result<(), FileStorageError> {
            let contents = serde_json::to_string_pretty(&self.memory.snapshot())?;
            fs::write(&self.path, contents)?;
            Ok(())
        };
        write().map_err(|err| domain::StorageError::Other(Box::new(err)))
    }
}

#[derive(thiserror::Error, Debug)]
pub enum FileStorageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid record: {0}")]
    InvalidRecord(Box<dyn std::error::Error>),
}

impl domain::SessionRepository for FileStorage {
    async fn request_session(
        &self,
        user_id: domain::UserID,
    ) -> Result<domain::User, domain::ReadError> {
        self.memory.request_session(user_id).await
    }

    async fn initialize_session(&self) -> Result<domain::User, domain::ReadError> {
        self.memory.initialize_session().await
    }

    async fn delete_session(&self) -> Result<(), domain::DeleteError> {
        self.memory.delete_session().await
    }
}

impl domain::UserRepository for FileStorage {
    async fn read_user(&self) -> Result<domain::User, domain::ReadError> {
        self.memory.read_user().await
    }

    async fn delete_user(&self, id: domain::UserID) -> Result<domain::UserID, domain::DeleteError> {
        let id = self.memory.delete_user(id).await?;
        self.persist()?;
        Ok(id)
    }
}

impl domain::ExerciseRepository for FileStorage {
    async fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        self.memory.read_exercises().await
    }

    async fn create_exercise(
        &self,
        name: domain::Name,
        category: String,
    ) -> Result<domain::Exercise, domain::CreateError> {
        let exercise = self.memory.create_exercise(name, category).await?;
        self.persist()?;
        Ok(exercise)
    }
}

impl domain::RoutineRepository for FileStorage {
    async fn read_routines(&self) -> Result<Vec<domain::Routine>, domain::ReadError> {
        self.memory.read_routines().await
    }

    async fn create_routine(
        &self,
        name: domain::Name,
        exercise_ids: Vec<domain::ExerciseID>,
    ) -> Result<domain::Routine, domain::CreateError> {
        let routine = self.memory.create_routine(name, exercise_ids).await?;
        self.persist()?;
        Ok(routine)
    }

    async fn modify_routine(
        &self,
        id: domain::RoutineID,
        name: domain::Name,
        exercise_ids: Vec<domain::ExerciseID>,
    ) -> Result<domain::Routine, domain::UpdateError> {
        let routine = self.memory.modify_routine(id, name, exercise_ids).await?;
        self.persist()?;
        Ok(routine)
    }

    async fn delete_routine(
        &self,
        id: domain::RoutineID,
    ) -> Result<domain::RoutineID, domain::DeleteError> {
        let id = self.memory.delete_routine(id).await?;
        self.persist()?;
        Ok(id)
    }
}

impl domain::WorkoutSetRepository for FileStorage {
    async fn read_workout_sets(&self) -> Result<Vec<domain::WorkoutSet>, domain::ReadError> {
        self.memory.read_workout_sets().await
    }

    async fn create_workout_set(
        &self,
        workout_set: domain::WorkoutSet,
    ) -> Result<domain::WorkoutSet, domain::CreateError> {
        let workout_set = self.memory.create_workout_set(workout_set).await?;
        self.persist()?;
        Ok(workout_set)
    }

    async fn delete_workout_set(
        &self,
        id: domain::WorkoutSetID,
    ) -> Result<domain::WorkoutSetID, domain::DeleteError> {
        let id = self.memory.delete_workout_set(id).await?;
        self.persist()?;
        Ok(id)
    }
}

impl domain::ProfileRepository for FileStorage {
    async fn read_profile(&self) -> Result<Option<domain::Profile>, domain::ReadError> {
        self.memory.read_profile().await
    }

    async fn save_profile(
        &self,
        profile: domain::Profile,
    ) -> Result<domain::Profile, domain::UpdateError> {
        let profile = self.memory.save_profile(profile).await?;
        self.persist()?;
        Ok(profile)
    }
}

impl domain::WeightEntryRepository for FileStorage {
    async fn read_weight_entries(&self) -> Result<Vec<domain::WeightEntry>, domain::ReadError> {
        self.memory.read_weight_entries().await
    }

    async fn create_weight_entry(
        &self,
        weight_kg: f32,
        body_fat_pct: Option<f32>,
        date: NaiveDateTime,
        notes: Option<String>,
    ) -> Result<domain::WeightEntry, domain::CreateError> {
        let entry = self
            .memory
            .create_weight_entry(weight_kg, body_fat_pct, date, notes)
            .await?;
        self.persist()?;
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use liftlog_domain::{SessionRepository, WorkoutSetRepository};
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    use crate::tests::data;

    use super::*;

    struct TempPath(PathBuf);

    impl TempPath {
        fn new() -> Self {
            Self(std::env::temp_dir().join(format!("liftlog-{}.json", Uuid::new_v4())))
        }
    }

    impl Drop for TempPath {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    #[tokio::test]
    async fn test_fresh_store_uses_seed_users() {
        let path = TempPath::new();
        let storage = FileStorage::open(&path.0, data::users()).unwrap();
        let user = storage.request_session(data::user().id).await.unwrap();
        assert_eq!(user, data::user());
    }

    #[tokio::test]
    async fn test_state_survives_reopen() {
        let path = TempPath::new();
        let created = {
            let storage = FileStorage::open(&path.0, data::users()).unwrap();
            storage.request_session(data::user().id).await.unwrap();
            storage
                .create_workout_set(data::workout_set(80.0, 1))
                .await
                .unwrap()
        };

        let storage = FileStorage::open(&path.0, vec![]).unwrap();
        assert!(matches!(
            storage.read_workout_sets().await,
            Err(domain::ReadError::Storage(domain::StorageError::NoSession))
        ));
        storage.request_session(data::user().id).await.unwrap();
        assert_eq!(storage.read_workout_sets().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_reads_do_not_create_file() {
        let path = TempPath::new();
        let storage = FileStorage::open(&path.0, data::users()).unwrap();
        storage.request_session(data::user().id).await.unwrap();
        storage.read_workout_sets().await.unwrap();
        assert!(!path.0.exists());
    }
}
