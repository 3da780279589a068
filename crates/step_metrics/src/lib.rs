//! Step-count records to distance, speed and calorie reports.
//!
//! ```
//! let report = step_metrics::training_report("3000,Running,30m", 70.0, 175.0);
//! assert!(report.starts_with("Training type: Running"));
//! assert_eq!(step_metrics::day_steps_report("0,10m", 70.0, 175.0), "");
//! ```

pub mod config;
pub mod duration;
pub mod error;
pub mod metrics;
pub mod observability;
pub mod record;
pub mod report;

pub use config::UserProfile;
pub use duration::{hours, parse_duration};
pub use error::{DurationError, MetricsError, MetricsResult};
pub use metrics::{distance_km, mean_speed_kmh, running_calories, walking_calories};
pub use record::{
    ActivityKind, DayRecord, TrainingRecord, parse_day_record, parse_training_record,
};
pub use report::{
    DaySummary, TRAINING_PARSE_ERROR, TrainingSummary, UNKNOWN_ACTIVITY, day_steps_report,
    training_report,
};
