//! Routine types: the recurring-task definition with mutable
//! completion/streak state.
//!
//! A routine is scheduled either at a concrete time of day ("HH:MM") or at
//! the "any time" sentinel. Both are parsed once at the boundary into
//! [`ScheduledTime`], so downstream code (sorting, display) never sees an
//! unparseable string.

pub mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Maximum accepted routine title length, in characters.
pub const MAX_TITLE_LEN: usize = 100;

/// Wire form of the unscheduled sentinel.
pub const ANY_TIME: &str = "any time";

/// Time of day a routine is scheduled for.
///
/// Serialized as `"HH:MM"` or `"any time"`, matching the persisted schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ScheduledTime {
    /// Concrete time of day.
    At { hour: u8, minute: u8 },
    /// No fixed time; sorts after all timed routines.
    AnyTime,
}

impl ScheduledTime {
    /// Minutes since midnight for timed routines, `None` for any-time.
    pub fn minutes_from_midnight(&self) -> Option<u32> {
        match self {
            ScheduledTime::At { hour, minute } => Some(u32::from(*hour) * 60 + u32::from(*minute)),
            ScheduledTime::AnyTime => None,
        }
    }

    /// Stable sort key: timed routines ascending, any-time after all of them.
    pub(crate) fn sort_key(&self) -> u32 {
        self.minutes_from_midnight().unwrap_or(u32::MAX)
    }
}

impl Default for ScheduledTime {
    fn default() -> Self {
        ScheduledTime::AnyTime
    }
}

impl fmt::Display for ScheduledTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduledTime::At { hour, minute } => write!(f, "{hour:02}:{minute:02}"),
            ScheduledTime::AnyTime => f.write_str(ANY_TIME),
        }
    }
}

impl FromStr for ScheduledTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ANY_TIME) {
            return Ok(ScheduledTime::AnyTime);
        }

        let invalid = || ValidationError::TimeFormat(s.to_string());
        let (h, m) = trimmed.split_once(':').ok_or_else(invalid)?;
        let hour: u8 = h.parse().map_err(|_| invalid())?;
        let minute: u8 = m.parse().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }
        Ok(ScheduledTime::At { hour, minute })
    }
}

impl TryFrom<String> for ScheduledTime {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ScheduledTime> for String {
    fn from(t: ScheduledTime) -> Self {
        t.to_string()
    }
}

/// How often a routine recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every day
    Daily,
    /// Monday through Friday
    Weekdays,
    /// Saturday and Sunday
    Weekends,
    /// Once per week
    Weekly,
    /// User-defined cadence
    Custom,
}

impl Default for Frequency {
    fn default() -> Self {
        Frequency::Daily
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Frequency::Daily => "daily",
            Frequency::Weekdays => "weekdays",
            Frequency::Weekends => "weekends",
            Frequency::Weekly => "weekly",
            Frequency::Custom => "custom",
        };
        f.write_str(s)
    }
}

impl FromStr for Frequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekdays" => Ok(Frequency::Weekdays),
            "weekends" => Ok(Frequency::Weekends),
            "weekly" => Ok(Frequency::Weekly),
            "custom" => Ok(Frequency::Custom),
            other => Err(ValidationError::Frequency(other.to_string())),
        }
    }
}

/// A user-defined recurring task tracked for daily completion and streak.
///
/// Field names are camelCase on the wire to match the persisted JSON schema.
/// `completedToday` also accepts the legacy `completed` key so payloads
/// written by the older schema variant still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    /// Opaque unique identifier, assigned at creation, immutable after.
    pub id: String,
    /// Routine title, non-empty and at most [`MAX_TITLE_LEN`] characters.
    pub title: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Time of day the routine is scheduled for.
    #[serde(default)]
    pub scheduled_time: ScheduledTime,
    /// Recurrence cadence.
    #[serde(default)]
    pub frequency: Frequency,
    /// Whether today's occurrence has been marked done.
    #[serde(default, alias = "completed")]
    pub completed_today: bool,
    /// Consecutive-completion counter. Non-negativity is enforced by the
    /// type; decrements saturate at zero.
    #[serde(default)]
    pub streak: u32,
    /// Rolling success percentage (0-100), set externally.
    #[serde(default)]
    pub monthly_success_rate: f64,
    /// Creation timestamp.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for creating a routine.
///
/// Id, completion state, streak and success rate are store-assigned.
#[derive(Debug, Clone, Default)]
pub struct RoutineDraft {
    pub title: String,
    pub description: Option<String>,
    pub scheduled_time: ScheduledTime,
    pub frequency: Frequency,
}

/// Partial field merge for [`Routine`]; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct RoutineUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub scheduled_time: Option<ScheduledTime>,
    pub frequency: Option<Frequency>,
    pub monthly_success_rate: Option<f64>,
}

impl RoutineUpdate {
    /// True when the update carries no changes.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.scheduled_time.is_none()
            && self.frequency.is_none()
            && self.monthly_success_rate.is_none()
    }
}

/// Validate and normalize a routine title: trimmed, non-empty, bounded.
pub fn validate_title(title: &str) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    let len = trimmed.chars().count();
    if len == 0 || len > MAX_TITLE_LEN {
        return Err(ValidationError::TitleLength {
            len,
            max: MAX_TITLE_LEN,
        });
    }
    Ok(trimmed.to_string())
}

fn validate_success_rate(rate: f64) -> Result<f64, ValidationError> {
    if !rate.is_finite() || !(0.0..=100.0).contains(&rate) {
        return Err(ValidationError::SuccessRateRange(rate));
    }
    Ok(rate)
}

impl Routine {
    /// Construct a fresh routine from a draft, validating the title.
    pub fn new(draft: RoutineDraft) -> Result<Self, ValidationError> {
        let now = Utc::now();
        Ok(Routine {
            id: uuid::Uuid::new_v4().to_string(),
            title: validate_title(&draft.title)?,
            description: draft.description,
            scheduled_time: draft.scheduled_time,
            frequency: draft.frequency,
            completed_today: false,
            streak: 0,
            monthly_success_rate: 0.0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Merge an update into this routine, validating each changed field.
    pub fn apply(&mut self, update: RoutineUpdate) -> Result<(), ValidationError> {
        if let Some(title) = update.title {
            self.title = validate_title(&title)?;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(time) = update.scheduled_time {
            self.scheduled_time = time;
        }
        if let Some(frequency) = update.frequency {
            self.frequency = frequency;
        }
        if let Some(rate) = update.monthly_success_rate {
            self.monthly_success_rate = validate_success_rate(rate)?;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Flip today's completion and adjust the streak: increment on
    /// completion, saturating decrement on un-completion.
    pub fn toggle(&mut self) {
        self.completed_today = !self.completed_today;
        self.streak = if self.completed_today {
            self.streak + 1
        } else {
            self.streak.saturating_sub(1)
        };
        self.updated_at = Utc::now();
    }
}
