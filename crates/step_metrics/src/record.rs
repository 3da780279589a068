//! Comma-delimited activity records.
//!
//! Two record shapes are accepted:
//! - day records: `<steps>,<duration>`, e.g. `1000,3h00m`
//! - training records: `<steps>,<activity>,<duration>`, e.g. `3000,Running,30m`
//!
//! Fields are not trimmed; `1000, 10m` is rejected.

use chrono::TimeDelta;
use serde::Serialize;

use crate::duration::parse_duration;
use crate::error::{MetricsError, MetricsResult};

const DAY_FIELDS: usize = 2;
const TRAINING_FIELDS: usize = 3;

/// Calorie formula selected by an activity label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ActivityKind {
    Walking,
    Running,
    Unknown,
}

impl ActivityKind {
    /// Map a raw label onto a kind. Matching ignores case and also accepts
    /// the localized labels of the upstream feed.
    pub fn from_label(label: &str) -> Self {
        const WALKING: &[&str] = &["walking", "walk", "ходьба"];
        const RUNNING: &[&str] = &["running", "run", "бег"];

        let lower = label.to_lowercase();
        if WALKING.contains(&lower.as_str()) {
            ActivityKind::Walking
        } else if RUNNING.contains(&lower.as_str()) {
            ActivityKind::Running
        } else {
            ActivityKind::Unknown
        }
    }
}

/// A parsed `<steps>,<duration>` record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayRecord {
    pub steps: i64,
    pub duration: TimeDelta,
}

/// A parsed `<steps>,<activity>,<duration>` record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainingRecord {
    pub steps: i64,
    /// Label exactly as it appeared in the input.
    pub label: String,
    pub duration: TimeDelta,
}

impl TrainingRecord {
    pub fn activity(&self) -> ActivityKind {
        ActivityKind::from_label(&self.label)
    }
}

fn split_fields(raw: &str, expected: usize) -> MetricsResult<Vec<&str>> {
    let fields: Vec<&str> = raw.split(',').collect();
    if fields.len() != expected {
        return Err(MetricsError::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_steps(field: &str) -> MetricsResult<i64> {
    Ok(field.parse::<i64>()?)
}

/// Parse a day record. Steps are read as a signed integer; rejecting
/// non-positive counts is left to the caller.
pub fn parse_day_record(raw: &str) -> MetricsResult<DayRecord> {
    let fields = split_fields(raw, DAY_FIELDS)?;
    let steps = parse_steps(fields[0])?;
    let duration = parse_duration(fields[1])?;
    Ok(DayRecord { steps, duration })
}

/// Parse a training record. The label is kept verbatim, so an unknown
/// activity still parses successfully.
pub fn parse_training_record(raw: &str) -> MetricsResult<TrainingRecord> {
    let fields = split_fields(raw, TRAINING_FIELDS)?;
    let steps = parse_steps(fields[0])?;
    let label = fields[1].to_string();
    let duration = parse_duration(fields[2])?;
    Ok(TrainingRecord {
        steps,
        label,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DurationError;

    #[test]
    fn day_record_round_trip_values() {
        let rec = parse_day_record("1000,1h0m0s").unwrap();
        assert_eq!(rec.steps, 1000);
        assert_eq!(rec.duration, TimeDelta::hours(1));
    }

    #[test]
    fn day_record_keeps_negative_steps() {
        let rec = parse_day_record("-5,10m").unwrap();
        assert_eq!(rec.steps, -5);
    }

    #[test]
    fn day_record_field_count() {
        match parse_day_record("1000") {
            Err(MetricsError::FieldCount { expected, found }) => {
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            parse_day_record("1000,Walking,10m"),
            Err(MetricsError::FieldCount { found: 3, .. })
        ));
    }

    #[test]
    fn day_record_bad_steps() {
        assert!(matches!(
            parse_day_record("abc,10m"),
            Err(MetricsError::Steps(_))
        ));
        assert!(matches!(
            parse_day_record("1.5,10m"),
            Err(MetricsError::Steps(_))
        ));
        assert!(matches!(
            parse_day_record(" 100,10m"),
            Err(MetricsError::Steps(_))
        ));
    }

    #[test]
    fn day_record_bad_duration() {
        assert!(matches!(
            parse_day_record("100,ten minutes"),
            Err(MetricsError::Duration(_))
        ));
        assert!(matches!(
            parse_day_record("100,"),
            Err(MetricsError::Duration(DurationError::Empty))
        ));
    }

    #[test]
    fn training_record_parses_all_fields() {
        let rec = parse_training_record("3000,Running,30m").unwrap();
        assert_eq!(rec.steps, 3000);
        assert_eq!(rec.label, "Running");
        assert_eq!(rec.duration, TimeDelta::minutes(30));
        assert_eq!(rec.activity(), ActivityKind::Running);
    }

    #[test]
    fn training_record_unknown_label_still_parses() {
        let rec = parse_training_record("1000,Swimming,10m").unwrap();
        assert_eq!(rec.activity(), ActivityKind::Unknown);
    }

    #[test]
    fn training_record_field_count() {
        assert!(matches!(
            parse_training_record("1000,10m"),
            Err(MetricsError::FieldCount {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn activity_labels_are_case_insensitive() {
        assert_eq!(ActivityKind::from_label("WALKING"), ActivityKind::Walking);
        assert_eq!(ActivityKind::from_label("walk"), ActivityKind::Walking);
        assert_eq!(ActivityKind::from_label("Ходьба"), ActivityKind::Walking);
        assert_eq!(ActivityKind::from_label("Бег"), ActivityKind::Running);
        assert_eq!(ActivityKind::from_label(""), ActivityKind::Unknown);
    }
}
