//! Report builders.
//!
//! `DaySummary::from_raw` and `TrainingSummary::from_raw` return typed errors.
//! `day_steps_report` and `training_report` wrap them for callers that only
//! want text: every error is logged, then mapped onto an empty string or one
//! of the fixed messages below.

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::UserProfile;
use crate::duration::hours;
use crate::error::{MetricsError, MetricsResult};
use crate::metrics::{distance_km, mean_speed_kmh, running_calories, walking_calories};
use crate::record::{ActivityKind, parse_day_record, parse_training_record};

/// Returned by [`training_report`] when the record cannot be parsed.
pub const TRAINING_PARSE_ERROR: &str = "failed to read training information";
/// Returned by [`training_report`] for an unrecognised activity label.
pub const UNKNOWN_ACTIVITY: &str = "unknown training type";

/// Metrics for a day's walking record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DaySummary {
    pub steps: i64,
    pub distance_km: f64,
    pub calories: f64,
}

impl DaySummary {
    /// Parse `<steps>,<duration>` and compute walking metrics.
    ///
    /// Fails with [`MetricsError::NonPositiveSteps`] when the step count is
    /// zero or negative.
    pub fn from_raw(raw: &str, profile: &UserProfile) -> MetricsResult<Self> {
        let record = parse_day_record(raw)?;
        if record.steps <= 0 {
            return Err(MetricsError::NonPositiveSteps(record.steps));
        }
        let summary = Self {
            steps: record.steps,
            distance_km: distance_km(record.steps),
            calories: walking_calories(
                record.steps,
                profile.weight_kg,
                profile.height_cm,
                record.duration,
            ),
        };
        debug!(steps = summary.steps, distance_km = summary.distance_km, "day summary");
        Ok(summary)
    }
}

impl fmt::Display for DaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Steps: {}.", self.steps)?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        writeln!(f, "Calories burned: {:.2} kcal.", self.calories)
    }
}

/// Metrics for a single training session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrainingSummary {
    pub activity: String,
    pub kind: ActivityKind,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories: f64,
}

impl TrainingSummary {
    /// Parse `<steps>,<activity>,<duration>` and compute session metrics.
    ///
    /// Fails with [`MetricsError::UnknownActivity`] for labels outside the
    /// walking and running sets.
    pub fn from_raw(raw: &str, profile: &UserProfile) -> MetricsResult<Self> {
        let record = parse_training_record(raw)?;
        let kind = record.activity();
        let calories = match kind {
            ActivityKind::Walking => walking_calories(
                record.steps,
                profile.weight_kg,
                profile.height_cm,
                record.duration,
            ),
            ActivityKind::Running => {
                running_calories(record.steps, profile.weight_kg, record.duration)
            }
            ActivityKind::Unknown => return Err(MetricsError::UnknownActivity(record.label)),
        };
        let summary = Self {
            kind,
            duration_hours: hours(record.duration),
            distance_km: distance_km(record.steps),
            speed_kmh: mean_speed_kmh(record.steps, record.duration),
            calories,
            activity: record.label,
        };
        debug!(activity = %summary.activity, calories = summary.calories, "training summary");
        Ok(summary)
    }
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Training type: {}", self.activity)?;
        writeln!(f, "Duration: {:.2} h.", self.duration_hours)?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        writeln!(f, "Speed: {:.2} km/h", self.speed_kmh)?;
        writeln!(f, "Calories burned: {:.2}", self.calories)
    }
}

/// Text report for a `<steps>,<duration>` record, or an empty string when
/// the record is malformed or has no positive steps.
pub fn day_steps_report(raw: &str, weight_kg: f64, height_cm: f64) -> String {
    let profile = UserProfile::new(weight_kg, height_cm);
    match DaySummary::from_raw(raw, &profile) {
        Ok(summary) => summary.to_string(),
        Err(MetricsError::NonPositiveSteps(_)) => String::new(),
        Err(e) => {
            warn!(error = %e, record = raw, "skipping day record");
            String::new()
        }
    }
}

/// Text report for a `<steps>,<activity>,<duration>` record.
///
/// Returns [`TRAINING_PARSE_ERROR`] for malformed input and
/// [`UNKNOWN_ACTIVITY`] for an unrecognised label.
pub fn training_report(raw: &str, weight_kg: f64, height_cm: f64) -> String {
    let profile = UserProfile::new(weight_kg, height_cm);
    match TrainingSummary::from_raw(raw, &profile) {
        Ok(summary) => summary.to_string(),
        Err(MetricsError::UnknownActivity(label)) => {
            warn!(%label, "unknown training type");
            UNKNOWN_ACTIVITY.to_string()
        }
        Err(e) => {
            warn!(error = %e, record = raw, "failed to read training record");
            TRAINING_PARSE_ERROR.to_string()
        }
    }
}
