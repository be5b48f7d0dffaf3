//! Serialized record shapes for the file-backed store.
//!
//! Enum-valued fields are persisted as their string labels and validated
//! through the domain constructors on restore, so a tampered or truncated
//! file surfaces as an invalid-record error rather than bad data.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use liftlog_domain as domain;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{file::FileStorageError, memory::State};

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub(crate) struct Snapshot {
    pub users: Vec<User>,
    pub exercises: Vec<Exercise>,
    pub routines: Vec<Routine>,
    pub workout_sets: Vec<WorkoutSet>,
    pub profiles: Vec<Profile>,
    pub weight_entries: Vec<WeightEntry>,
}

impl Snapshot {
    pub fn capture(state: &State) -> Self {
        Self {
            users: state.users.iter().map(User::from).collect(),
            exercises: rows(&state.exercises, Exercise::from),
            routines: rows(&state.routines, Routine::from),
            workout_sets: rows(&state.workout_sets, WorkoutSet::from),
            profiles: state
                .profiles
                .iter()
                .map(|(user_id, profile)| Profile::from_owned(*user_id, profile))
                .collect(),
            weight_entries: rows(&state.weight_entries, WeightEntry::from),
        }
    }

    pub fn restore(self) -> Result<State, FileStorageError> {
        let mut state = State {
            users: self
                .users
                .into_iter()
                .map(|user| domain::User::try_from(user).map_err(invalid))
                .collect::<Result<_, _>>()?,
            ..State::default()
        };
        for exercise in self.exercises {
            let user_id = exercise.user_id.into();
            state
                .exercises
                .entry(user_id)
                .or_default()
                .push(domain::Exercise::try_from(exercise).map_err(invalid)?);
        }
        for routine in self.routines {
            let user_id = routine.user_id.into();
            state
                .routines
                .entry(user_id)
                .or_default()
                .push(domain::Routine::try_from(routine).map_err(invalid)?);
        }
        for workout_set in self.workout_sets {
            let user_id = workout_set.user_id.into();
            state
                .workout_sets
                .entry(user_id)
                .or_default()
                .push(
                    domain::WorkoutSet::try_from(workout_set)
                        .map_err(FileStorageError::InvalidRecord)?,
                );
        }
        for profile in self.profiles {
            let user_id = profile.user_id.into();
            state
                .profiles
                .insert(user_id, domain::Profile::try_from(profile).map_err(invalid)?);
        }
        for entry in self.weight_entries {
            state
                .weight_entries
                .entry(entry.user_id.into())
                .or_default()
                .push(entry.into());
        }
        Ok(state)
    }
}

fn invalid(err: impl std::error::Error + 'static) -> FileStorageError {
    FileStorageError::InvalidRecord(Box::new(err))
}

fn rows<V, T>(table: &HashMap<domain::UserID, Vec<V>>, convert: fn(domain::UserID, &V) -> T) -> Vec<T> {
    table
        .iter()
        .flat_map(|(user_id, values)| values.iter().map(|v| convert(*user_id, v)))
        .collect()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
}

impl From<&domain::User> for User {
    fn from(value: &domain::User) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            email: value.email.clone(),
            image: value.image.clone(),
        }
    }
}

impl TryFrom<User> for domain::User {
    type Error = domain::NameError;

    fn try_from(value: User) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            email: value.email,
            image: value.image,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Exercise {
    pub user_id: Uuid,
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub is_custom: bool,
}

impl Exercise {
    fn from(user_id: domain::UserID, value: &domain::Exercise) -> Self {
        Self {
            user_id: *user_id,
            id: *value.id,
            name: value.name.to_string(),
            category: value.category.clone(),
            is_custom: value.is_custom,
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = domain::NameError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            category: value.category,
            is_custom: value.is_custom,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Routine {
    pub user_id: Uuid,
    pub id: Uuid,
    pub name: String,
    pub exercise_ids: Vec<Uuid>,
    pub created_at: NaiveDateTime,
}

impl Routine {
    fn from(user_id: domain::UserID, value: &domain::Routine) -> Self {
        Self {
            user_id: *user_id,
            id: *value.id,
            name: value.name.to_string(),
            exercise_ids: value.exercise_ids.iter().map(|id| **id).collect(),
            created_at: value.created_at,
        }
    }
}

impl TryFrom<Routine> for domain::Routine {
    type Error = domain::NameError;

    fn try_from(value: Routine) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            exercise_ids: value.exercise_ids.into_iter().map(Into::into).collect(),
            created_at: value.created_at,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct WorkoutSet {
    pub user_id: Uuid,
    pub id: Uuid,
    pub exercise_id: Uuid,
    pub exercise_name: String,
    pub weight_per_side: f32,
    pub total_weight: f32,
    pub reps: u32,
    pub sets: u32,
    pub date: NaiveDateTime,
    #[serde(default = "default_set_type")]
    pub set_type: String,
    pub notes: Option<String>,
    pub rest_time: Option<u32>,
}

fn default_set_type() -> String {
    domain::SetType::default().to_string()
}

impl WorkoutSet {
    fn from(user_id: domain::UserID, value: &domain::WorkoutSet) -> Self {
        Self {
            user_id: *user_id,
            id: *value.id,
            exercise_id: *value.exercise_id,
            exercise_name: value.exercise_name.to_string(),
            weight_per_side: f32::from(value.weight_per_side),
            total_weight: value.total_weight,
            reps: u32::from(value.reps),
            sets: u32::from(value.sets),
            date: value.date,
            set_type: value.set_type.to_string(),
            notes: value.notes.clone(),
            rest_time: value.rest_time,
        }
    }
}

impl TryFrom<WorkoutSet> for domain::WorkoutSet {
    type Error = Box<dyn std::error::Error>;

    fn try_from(value: WorkoutSet) -> Result<Self, Self::Error> {
        // The total weight is the value fixed at entry time, deliberately not
        // recomputed from the per-side weight.
        Ok(Self {
            id: value.id.into(),
            exercise_id: value.exercise_id.into(),
            exercise_name: domain::Name::new(&value.exercise_name)?,
            weight_per_side: domain::Weight::new(value.weight_per_side)?,
            total_weight: value.total_weight,
            reps: domain::Reps::new(value.reps)?,
            sets: domain::Sets::new(value.sets)?,
            date: value.date,
            set_type: domain::SetType::try_from(value.set_type.as_str())?,
            notes: value.notes,
            rest_time: value.rest_time,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct Profile {
    pub user_id: Uuid,
    pub height_cm: f32,
    pub weight_kg: f32,
    pub age: u8,
    pub gender: String,
    pub activity_level: String,
    pub body_fat_pct: Option<f32>,
    pub bmr: i32,
    pub tdee: i32,
    pub goal: String,
    pub target_calories: i32,
    pub protein_target: i32,
    pub carbs_target: i32,
    pub fat_target: i32,
    pub use_imperial: bool,
}

impl Profile {
    fn from_owned(user_id: domain::UserID, value: &domain::Profile) -> Self {
        Self {
            user_id: *user_id,
            height_cm: value.height_cm,
            weight_kg: value.weight_kg,
            age: value.age,
            gender: value.gender.to_string(),
            activity_level: value.activity_level.to_string(),
            body_fat_pct: value.body_fat_pct,
            bmr: value.bmr,
            tdee: value.tdee,
            goal: value.goal.to_string(),
            target_calories: value.target_calories,
            protein_target: value.protein_target,
            carbs_target: value.carbs_target,
            fat_target: value.fat_target,
            use_imperial: value.use_imperial,
        }
    }
}

impl TryFrom<Profile> for domain::Profile {
    type Error = domain::EnergyInputError;

    fn try_from(value: Profile) -> Result<Self, Self::Error> {
        Ok(Self {
            height_cm: value.height_cm,
            weight_kg: value.weight_kg,
            age: value.age,
            gender: domain::Gender::try_from(value.gender.as_str())?,
            activity_level: domain::ActivityLevel::try_from(value.activity_level.as_str())?,
            body_fat_pct: value.body_fat_pct,
            bmr: value.bmr,
            tdee: value.tdee,
            goal: domain::Goal::try_from(value.goal.as_str())?,
            target_calories: value.target_calories,
            protein_target: value.protein_target,
            carbs_target: value.carbs_target,
            fat_target: value.fat_target,
            use_imperial: value.use_imperial,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct WeightEntry {
    pub user_id: Uuid,
    pub id: Uuid,
    pub weight_kg: f32,
    pub body_fat_pct: Option<f32>,
    pub date: NaiveDateTime,
    pub notes: Option<String>,
}

impl WeightEntry {
    fn from(user_id: domain::UserID, value: &domain::WeightEntry) -> Self {
        Self {
            user_id: *user_id,
            id: *value.id,
            weight_kg: value.weight_kg,
            body_fat_pct: value.body_fat_pct,
            date: value.date,
            notes: value.notes.clone(),
        }
    }
}

impl From<WeightEntry> for domain::WeightEntry {
    fn from(value: WeightEntry) -> Self {
        Self {
            id: value.id.into(),
            weight_kg: value.weight_kg,
            body_fat_pct: value.body_fat_pct,
            date: value.date,
            notes: value.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::tests::data;

    use super::*;

    #[test]
    fn test_snapshot_round_trip() {
        let mut state = State {
            users: data::users(),
            ..State::default()
        };
        let user_id = data::user().id;
        state
            .workout_sets
            .insert(user_id, vec![data::workout_set(80.0, 1)]);
        state.profiles.insert(user_id, data::profile(70.0));
        state.weight_entries.insert(
            user_id,
            vec![domain::WeightEntry {
                id: 1.into(),
                weight_kg: 80.0,
                body_fat_pct: Some(18.0),
                date: data::datetime(1),
                notes: None,
            }],
        );

        let restored = Snapshot::capture(&state).restore().unwrap();
        assert_eq!(restored.users, state.users);
        assert_eq!(restored.workout_sets, state.workout_sets);
        assert_eq!(restored.profiles, state.profiles);
        assert_eq!(restored.weight_entries, state.weight_entries);
        assert_eq!(restored.session, None);
    }

    #[test]
    fn test_missing_set_type_defaults_to_normal() {
        let json = serde_json::json!({
            "user_id": Uuid::nil(),
            "id": Uuid::nil(),
            "exercise_id": Uuid::nil(),
            "exercise_name": "Bench Press",
            "weight_per_side": 40.0,
            "total_weight": 80.0,
            "reps": 8,
            "sets": 3,
            "date": "2024-05-01T18:30:00",
            "notes": null,
            "rest_time": null,
        });
        let workout_set: WorkoutSet = serde_json::from_value(json).unwrap();
        let workout_set = domain::WorkoutSet::try_from(workout_set).unwrap();
        assert_eq!(workout_set.set_type, domain::SetType::Normal);
    }

    #[rstest]
    #[case::gender("other", "moderate", "maintenance")]
    #[case::activity_level("male", "extreme", "maintenance")]
    #[case::goal("male", "moderate", "shredding")]
    fn test_invalid_record_rejected(
        #[case] gender: &str,
        #[case] activity_level: &str,
        #[case] goal: &str,
    ) {
        let snapshot = Snapshot {
            profiles: vec![Profile {
                user_id: Uuid::nil(),
                height_cm: 175.0,
                weight_kg: 70.0,
                age: 30,
                gender: gender.to_string(),
                activity_level: activity_level.to_string(),
                body_fat_pct: None,
                bmr: 1649,
                tdee: 2556,
                goal: goal.to_string(),
                target_calories: 2556,
                protein_target: 192,
                carbs_target: 256,
                fat_target: 85,
                use_imperial: false,
            }],
            ..Snapshot::default()
        };
        assert!(snapshot.restore().is_err());
    }
}
