use std::fmt;

use chrono::NaiveDateTime;
use derive_more::{Deref, Display, Into};
use uuid::Uuid;

use crate::{CreateError, DeleteError, ExerciseID, Name, ReadError, ValidationError};

#[allow(async_fn_in_trait)]
pub trait WorkoutSetService {
    /// Returns the user's logged sets, newest first.
    async fn get_workout_sets(&self) -> Result<Vec<WorkoutSet>, ReadError>;
    async fn log_workout_set(&self, workout_set: WorkoutSet) -> Result<WorkoutSet, CreateError>;
    async fn delete_workout_set(&self, id: WorkoutSetID) -> Result<WorkoutSetID, DeleteError>;

    fn validate_weight(&self, weight: &str) -> Result<Weight, ValidationError> {
        match Weight::try_from(weight.replace(',', ".").trim()) {
            Ok(weight) => Ok(weight),
            Err(err) => Err(ValidationError::Other(err.into())),
        }
    }

    fn validate_reps(&self, reps: &str) -> Result<Reps, ValidationError> {
        match Reps::try_from(reps.trim()) {
            Ok(reps) => Ok(reps),
            Err(err) => Err(ValidationError::Other(err.into())),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait WorkoutSetRepository {
    async fn read_workout_sets(&self) -> Result<Vec<WorkoutSet>, ReadError>;
    /// Persists the set and assigns its definitive id; the provisional id of
    /// the passed record is discarded.
    async fn create_workout_set(&self, workout_set: WorkoutSet)
    -> Result<WorkoutSet, CreateError>;
    async fn delete_workout_set(&self, id: WorkoutSetID) -> Result<WorkoutSetID, DeleteError>;
}

/// A single logged entry: `sets` sets of `reps` reps at a given weight.
///
/// Immutable after creation; removal is an explicit user action.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSet {
    pub id: WorkoutSetID,
    pub exercise_id: ExerciseID,
    pub exercise_name: Name,
    pub weight_per_side: Weight,
    pub total_weight: f32,
    pub reps: Reps,
    pub sets: Sets,
    pub date: NaiveDateTime,
    pub set_type: SetType,
    pub notes: Option<String>,
    pub rest_time: Option<u32>,
}

impl WorkoutSet {
    /// Creates a set with a provisional nil id. The total weight is fixed at
    /// twice the per-side weight here and never recomputed afterwards.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        exercise_id: ExerciseID,
        exercise_name: Name,
        weight_per_side: Weight,
        reps: Reps,
        sets: Sets,
        date: NaiveDateTime,
        set_type: SetType,
        notes: Option<String>,
        rest_time: Option<u32>,
    ) -> Self {
        Self {
            id: WorkoutSetID::nil(),
            exercise_id,
            exercise_name,
            weight_per_side,
            total_weight: f32::from(weight_per_side) * 2.0,
            reps,
            sets,
            date,
            set_type,
            notes,
            rest_time,
        }
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutSetID(Uuid);

impl WorkoutSetID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutSetID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutSetID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Defaults to `Normal` for records persisted without an explicit type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SetType {
    #[default]
    Normal,
    Warmup,
    Drop,
    Failure,
}

impl TryFrom<&str> for SetType {
    type Error = SetTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "normal" => Ok(SetType::Normal),
            "warmup" => Ok(SetType::Warmup),
            "drop" => Ok(SetType::Drop),
            "failure" => Ok(SetType::Failure),
            _ => Err(SetTypeError::Unknown(value.to_string())),
        }
    }
}

impl fmt::Display for SetType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SetType::Normal => "normal",
                SetType::Warmup => "warmup",
                SetType::Drop => "drop",
                SetType::Failure => "failure",
            }
        )
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetTypeError {
    #[error("Unknown set type {0:?}")]
    Unknown(String),
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 1 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Sets(u32);

impl Sets {
    pub fn new(value: u32) -> Result<Self, SetsError> {
        if !(1..100).contains(&value) {
            return Err(SetsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Sets {
    type Error = SetsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Sets::new(parsed_value),
            Err(_) => Err(SetsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetsError {
    #[error("Sets must be in the range 1 to 99")]
    OutOfRange,
    #[error("Sets must be an integer")]
    ParseError,
}

/// Weight per side in kilograms.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        if (value * 10.0 % 1.0).abs() > f32::EPSILON {
            return Err(WeightError::InvalidResolution);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 999.9 kg")]
    OutOfRange,
    #[error("Weight must be a multiple of 0.1 kg")]
    InvalidResolution,
    #[error("Weight must be a decimal")]
    ParseError,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn date(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, day)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_new_fixes_total_weight() {
        let workout_set = WorkoutSet::new(
            1.into(),
            Name::new("Bench Press").unwrap(),
            Weight::new(40.0).unwrap(),
            Reps::new(8).unwrap(),
            Sets::new(3).unwrap(),
            date(1),
            SetType::Normal,
            None,
            Some(90),
        );
        assert!(workout_set.id.is_nil());
        assert_eq!(workout_set.total_weight, 80.0);
    }

    #[rstest]
    #[case("normal", Ok(SetType::Normal))]
    #[case("warmup", Ok(SetType::Warmup))]
    #[case("drop", Ok(SetType::Drop))]
    #[case("failure", Ok(SetType::Failure))]
    #[case("super", Err(SetTypeError::Unknown("super".to_string())))]
    fn test_set_type_from_str(#[case] value: &str, #[case] expected: Result<SetType, SetTypeError>) {
        assert_eq!(SetType::try_from(value), expected);
    }

    #[test]
    fn test_set_type_default() {
        assert_eq!(SetType::default(), SetType::Normal);
    }

    #[rstest]
    #[case("8", Ok(Reps(8)))]
    #[case("0", Err(RepsError::OutOfRange))]
    #[case("1000", Err(RepsError::OutOfRange))]
    #[case("eight", Err(RepsError::ParseError))]
    fn test_reps_try_from(#[case] value: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(Reps::try_from(value), expected);
    }

    #[rstest]
    #[case("3", Ok(Sets(3)))]
    #[case("0", Err(SetsError::OutOfRange))]
    #[case("100", Err(SetsError::OutOfRange))]
    fn test_sets_try_from(#[case] value: &str, #[case] expected: Result<Sets, SetsError>) {
        assert_eq!(Sets::try_from(value), expected);
    }

    #[rstest]
    #[case("40.0", Ok(Weight(40.0)))]
    #[case("0.0", Ok(Weight(0.0)))]
    #[case("1000.0", Err(WeightError::OutOfRange))]
    #[case("-1.0", Err(WeightError::OutOfRange))]
    #[case("40.01", Err(WeightError::InvalidResolution))]
    #[case("heavy", Err(WeightError::ParseError))]
    fn test_weight_try_from(#[case] value: &str, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::try_from(value), expected);
    }
}
