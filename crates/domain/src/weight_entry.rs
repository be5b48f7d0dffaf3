use chrono::NaiveDateTime;
use derive_more::Deref;
use uuid::Uuid;

use crate::{CreateError, ReadError, ValidationError};

#[allow(async_fn_in_trait)]
pub trait WeightEntryService {
    /// Returns the user's weigh-ins, newest first.
    async fn get_weight_entries(&self) -> Result<Vec<WeightEntry>, ReadError>;
    /// Appends a weigh-in and mirrors its weight into the user's profile, if
    /// one exists.
    async fn add_weight_entry(
        &self,
        weight_kg: f32,
        body_fat_pct: Option<f32>,
        date: NaiveDateTime,
        notes: Option<String>,
    ) -> Result<WeightEntry, CreateError>;

    fn validate_body_weight(&self, weight_kg: f32) -> Result<f32, ValidationError> {
        if weight_kg.is_finite() && weight_kg > 0.0 {
            Ok(weight_kg)
        } else {
            Err(ValidationError::Other(
                WeightEntryError::InvalidWeight.into(),
            ))
        }
    }

    fn validate_body_fat_pct(&self, pct: f32) -> Result<f32, ValidationError> {
        if pct.is_finite() && pct > 0.0 && pct < 100.0 {
            Ok(pct)
        } else {
            Err(ValidationError::Other(
                WeightEntryError::InvalidBodyFatPct.into(),
            ))
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait WeightEntryRepository {
    async fn read_weight_entries(&self) -> Result<Vec<WeightEntry>, ReadError>;
    async fn create_weight_entry(
        &self,
        weight_kg: f32,
        body_fat_pct: Option<f32>,
        date: NaiveDateTime,
        notes: Option<String>,
    ) -> Result<WeightEntry, CreateError>;
}

/// One weigh-in. Entries form an append-only series; they are never edited.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightEntry {
    pub id: WeightEntryID,
    pub weight_kg: f32,
    pub body_fat_pct: Option<f32>,
    pub date: NaiveDateTime,
    pub notes: Option<String>,
}

/// The entry with the most recent date, independent of list order. Ties go to
/// the later element.
#[must_use]
pub fn latest_entry(entries: &[WeightEntry]) -> Option<&WeightEntry> {
    entries.iter().max_by_key(|e| e.date)
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum WeightEntryError {
    #[error("Weight must be a positive number")]
    InvalidWeight,
    #[error("Body fat percentage must be between 0 and 100")]
    InvalidBodyFatPct,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WeightEntryID(Uuid);

impl WeightEntryID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WeightEntryID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WeightEntryID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
