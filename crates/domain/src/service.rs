use chrono::NaiveDateTime;
use log::{debug, error};

use crate::{
    CreateError, DeleteError, Exercise, ExerciseID, ExerciseRepository, ExerciseService, Name,
    Profile, ProfileRepository, ProfileService, ReadError, Routine, RoutineID, RoutineRepository,
    RoutineService, SessionRepository, SessionService, UpdateError, User, UserID, UserRepository,
    UserService, WeightEntry, WeightEntryRepository, WeightEntryService, WorkoutSet,
    WorkoutSetID, WorkoutSetRepository, WorkoutSetService, latest_entry,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R>
where
    R: SessionRepository
        + UserRepository
        + ExerciseRepository
        + RoutineRepository
        + WorkoutSetRepository
        + ProfileRepository
        + WeightEntryRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: SessionRepository> SessionService for Service<R> {
    async fn request_session(&self, user_id: UserID) -> Result<User, ReadError> {
        log_on_error!(
            self.repository.request_session(user_id),
            ReadError,
            "request",
            "session"
        )
    }

    async fn get_session(&self) -> Result<User, ReadError> {
        log_on_error!(
            self.repository.initialize_session(),
            ReadError,
            "get",
            "session"
        )
    }

    async fn delete_session(&self) -> Result<(), DeleteError> {
        log_on_error!(
            self.repository.delete_session(),
            DeleteError,
            "delete",
            "session"
        )
    }
}

impl<R: UserRepository> UserService for Service<R> {
    async fn get_user(&self) -> Result<User, ReadError> {
        log_on_error!(self.repository.read_user(), ReadError, "get", "user")
    }

    async fn delete_user(&self, id: UserID) -> Result<UserID, DeleteError> {
        log_on_error!(
            self.repository.delete_user(id),
            DeleteError,
            "delete",
            "user"
        )
    }
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        let customs = log_on_error!(
            self.repository.read_exercises(),
            ReadError,
            "get",
            "exercises"
        )?;
        Ok(Exercise::all(&customs))
    }

    async fn create_exercise(
        &self,
        name: Name,
        category: String,
    ) -> Result<Exercise, CreateError> {
        log_on_error!(
            self.repository.create_exercise(name, category),
            CreateError,
            "create",
            "exercise"
        )
    }
}

impl<R: RoutineRepository> RoutineService for Service<R> {
    async fn get_routines(&self) -> Result<Vec<Routine>, ReadError> {
        log_on_error!(
            self.repository.read_routines(),
            ReadError,
            "get",
            "routines"
        )
    }

    async fn create_routine(
        &self,
        name: Name,
        exercise_ids: Vec<ExerciseID>,
    ) -> Result<Routine, CreateError> {
        log_on_error!(
            self.repository.create_routine(name, exercise_ids),
            CreateError,
            "create",
            "routine"
        )
    }

    async fn modify_routine(
        &self,
        id: RoutineID,
        name: Name,
        exercise_ids: Vec<ExerciseID>,
    ) -> Result<Routine, UpdateError> {
        log_on_error!(
            self.repository.modify_routine(id, name, exercise_ids),
            UpdateError,
            "modify",
            "routine"
        )
    }

    async fn delete_routine(&self, id: RoutineID) -> Result<RoutineID, DeleteError> {
        log_on_error!(
            self.repository.delete_routine(id),
            DeleteError,
            "delete",
            "routine"
        )
    }
}

impl<R: WorkoutSetRepository> WorkoutSetService for Service<R> {
    async fn get_workout_sets(&self) -> Result<Vec<WorkoutSet>, ReadError> {
        log_on_error!(
            self.repository.read_workout_sets(),
            ReadError,
            "get",
            "workout sets"
        )
    }

    async fn log_workout_set(&self, workout_set: WorkoutSet) -> Result<WorkoutSet, CreateError> {
        log_on_error!(
            self.repository.create_workout_set(workout_set),
            CreateError,
            "create",
            "workout set"
        )
    }

    async fn delete_workout_set(&self, id: WorkoutSetID) -> Result<WorkoutSetID, DeleteError> {
        log_on_error!(
            self.repository.delete_workout_set(id),
            DeleteError,
            "delete",
            "workout set"
        )
    }
}

impl<R: ProfileRepository> ProfileService for Service<R> {
    async fn get_profile(&self) -> Result<Option<Profile>, ReadError> {
        log_on_error!(self.repository.read_profile(), ReadError, "get", "profile")
    }

    async fn save_profile(&self, profile: Profile) -> Result<Profile, UpdateError> {
        log_on_error!(
            self.repository.save_profile(profile),
            UpdateError,
            "save",
            "profile"
        )
    }
}

impl<R: WeightEntryRepository + ProfileRepository> WeightEntryService for Service<R> {
    async fn get_weight_entries(&self) -> Result<Vec<WeightEntry>, ReadError> {
        log_on_error!(
            self.repository.read_weight_entries(),
            ReadError,
            "get",
            "weight entries"
        )
    }

    async fn add_weight_entry(
        &self,
        weight_kg: f32,
        body_fat_pct: Option<f32>,
        date: NaiveDateTime,
        notes: Option<String>,
    ) -> Result<WeightEntry, CreateError> {
        let entry = log_on_error!(
            self.repository
                .create_weight_entry(weight_kg, body_fat_pct, date, notes),
            CreateError,
            "create",
            "weight entry"
        )?;

        // Mirror the weight into the profile only when this entry is the
        // latest weigh-in; a backdated entry must not overwrite the profile.
        // The weigh-in has already been recorded, so a failing mirror is
        // logged but does not fail the call.
        let is_latest = match self.repository.read_weight_entries().await {
            Ok(entries) => latest_entry(&entries).is_some_and(|latest| latest.id == entry.id),
            Err(err) => {
                error!("failed to get weight entries: {err}");
                false
            }
        };
        if is_latest {
            match self.repository.read_profile().await {
                Ok(Some(mut profile)) => {
                    profile.weight_kg = entry.weight_kg;
                    let _ = log_on_error!(
                        self.repository.save_profile(profile),
                        UpdateError,
                        "save",
                        "profile"
                    );
                }
                Ok(None) => {}
                Err(err) => {
                    error!("failed to get profile: {err}");
                }
            }
        }

        Ok(entry)
    }
}
