#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod activity;
pub mod body_composition;
pub mod catalog;
pub mod energy;
pub mod error;
pub mod exercise;
pub mod name;
pub mod profile;
pub mod routine;
pub mod service;
pub mod session;
pub mod units;
pub mod user;
pub mod weight_entry;
pub mod workout_set;

pub use activity::{
    DashboardStats, dashboard_stats, exercise_history, exercise_volume, group_by_day,
    max_total_weight, personal_records, recent_count, streak, weekly_volume,
};
pub use body_composition::BodyComposition;
pub use energy::{
    ActivityLevel, EnergyInput, EnergyInputError, EnergyReport, Gender, Goal, MacroSplit,
};
pub use error::{
    CreateError, DeleteError, ReadError, StorageError, UpdateError, ValidationError,
};
pub use exercise::{Exercise, ExerciseID, ExerciseRepository, ExerciseService};
pub use name::{Name, NameError};
pub use profile::{Profile, ProfileRepository, ProfileService};
pub use routine::{Routine, RoutineID, RoutineRepository, RoutineService};
pub use service::Service;
pub use session::{SessionRepository, SessionService};
pub use units::{cm_to_feet_inches, feet_inches_to_cm, kg_to_lbs, lbs_to_kg};
pub use user::{User, UserID, UserRepository, UserService};
pub use weight_entry::{
    WeightEntry, WeightEntryID, WeightEntryRepository, WeightEntryService, latest_entry,
};
pub use workout_set::{
    Reps, RepsError, SetType, SetTypeError, Sets, SetsError, Weight, WeightError, WorkoutSet,
    WorkoutSetID, WorkoutSetRepository, WorkoutSetService,
};
