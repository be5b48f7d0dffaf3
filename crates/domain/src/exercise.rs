use derive_more::Deref;
use uuid::Uuid;

use crate::{CreateError, Name, ReadError, ValidationError, catalog};

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    /// Returns the default catalog merged with the user's custom exercises.
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn create_exercise(&self, name: Name, category: String)
    -> Result<Exercise, CreateError>;

    async fn validate_exercise_name(&self, name: &str) -> Result<Name, ValidationError> {
        match Name::new(name) {
            Ok(name) => match self.get_exercises().await {
                Ok(exercises) => {
                    if exercises.iter().all(|e| e.name != name) {
                        Ok(name)
                    } else {
                        Err(ValidationError::Conflict("name".to_string()))
                    }
                }
                Err(err) => Err(ValidationError::Other(err.into())),
            },
            Err(err) => Err(ValidationError::Other(err.into())),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    /// Reads the user's custom exercises. Catalog entries are not stored.
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn create_exercise(&self, name: Name, category: String)
    -> Result<Exercise, CreateError>;
}

/// A catalog entry (`is_custom == false`, shared by all users) or a custom
/// exercise owned by its creating user. Exercises are never mutated; custom
/// ones disappear only when the owning account is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub category: String,
    pub is_custom: bool,
}

impl Exercise {
    /// The default catalog merged with the given custom exercises.
    #[must_use]
    pub fn all(customs: &[Exercise]) -> Vec<Exercise> {
        catalog::exercises().chain(customs.iter().cloned()).collect()
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
