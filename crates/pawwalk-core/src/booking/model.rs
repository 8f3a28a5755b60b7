//! Booking domain models.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::schedule::{ALLOWED_DURATIONS, is_allowed_duration};
use crate::error::{PawError, Result};

/// A scheduled walk.
///
/// `price_per_hour` is copied from the walker when the booking is created so
/// later price changes never alter past bookings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub walker_id: String,
    pub walker_name: String,
    pub price_per_hour: f64,
    #[serde(alias = "startISO")]
    pub start_time: DateTime<Utc>,
    #[serde(alias = "durationMins")]
    pub duration_minutes: u32,
    pub dog_name: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Builds a booking from validated input.
    ///
    /// Fails when `start_time` is not strictly after `now`, the trimmed dog
    /// name is empty, or the duration is not one of [`ALLOWED_DURATIONS`].
    pub fn create(input: NewBooking, now: DateTime<Utc>) -> Result<Self> {
        if input.start_time <= now {
            return Err(PawError::validation("Start time must be in the future"));
        }
        let dog_name = validate_dog_name(&input.dog_name)?;
        validate_duration(input.duration_minutes)?;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            walker_id: input.walker_id,
            walker_name: input.walker_name,
            price_per_hour: input.price_per_hour,
            start_time: input.start_time,
            duration_minutes: input.duration_minutes,
            dog_name,
            notes: input.notes.as_deref().map(str::trim).unwrap_or_default().to_string(),
            created_at: now,
        })
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.start_time + Duration::minutes(i64::from(self.duration_minutes))
    }

    /// Price of the walk at the rate captured on the booking.
    pub fn estimated_cost(&self) -> f64 {
        self.price_per_hour * f64::from(self.duration_minutes) / 60.0
    }

    /// Shallow-merges the fields present in `patch`.
    pub fn apply(&mut self, patch: BookingPatch) -> Result<()> {
        // Validate first; a rejected patch leaves the booking unchanged.
        let dog_name = patch.dog_name.as_deref().map(validate_dog_name).transpose()?;
        if let Some(minutes) = patch.duration_minutes {
            validate_duration(minutes)?;
        }

        if let Some(walker_id) = patch.walker_id {
            self.walker_id = walker_id;
        }
        if let Some(walker_name) = patch.walker_name {
            self.walker_name = walker_name;
        }
        if let Some(price) = patch.price_per_hour {
            self.price_per_hour = price;
        }
        if let Some(start_time) = patch.start_time {
            self.start_time = start_time;
        }
        if let Some(minutes) = patch.duration_minutes {
            self.duration_minutes = minutes;
        }
        if let Some(dog_name) = dog_name {
            self.dog_name = dog_name;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes.trim().to_string();
        }
        Ok(())
    }
}

fn validate_dog_name(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PawError::validation("Dog name is required"));
    }
    Ok(trimmed.to_string())
}

fn validate_duration(minutes: u32) -> Result<()> {
    if is_allowed_duration(minutes) {
        Ok(())
    } else {
        Err(PawError::validation(format!(
            "Duration must be one of {:?} minutes, got {}",
            ALLOWED_DURATIONS, minutes
        )))
    }
}

/// Input for creating a booking.
///
/// The walker id is trusted as-is; resolving it against the catalog is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub walker_id: String,
    pub walker_name: String,
    pub price_per_hour: f64,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: u32,
    pub dog_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Partial update for an existing booking. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walker_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walker_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_hour: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dog_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
