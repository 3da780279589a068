//! Distance, speed and calorie formulas.

use chrono::TimeDelta;

use crate::duration::hours;

/// Average step length in metres.
pub const STEP_LENGTH_M: f64 = 0.65;
/// Metres per kilometre.
pub const M_IN_KM: f64 = 1_000.0;
/// Minutes per hour.
pub const MIN_IN_H: f64 = 60.0;

/// Body-weight multiplier for walking.
pub const WALKING_WEIGHT_MULTIPLIER: f64 = 0.035;
/// Speed-over-height multiplier for walking.
pub const WALKING_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Mean-speed multiplier for running.
pub const RUNNING_SPEED_MULTIPLIER: f64 = 18.0;
/// Mean-speed shift for running.
pub const RUNNING_SPEED_SHIFT: f64 = 20.0;

/// Distance covered in kilometres.
pub fn distance_km(steps: i64) -> f64 {
    steps as f64 * STEP_LENGTH_M / M_IN_KM
}

/// Mean speed in km/h, or `0.0` when the duration is not positive.
pub fn mean_speed_kmh(steps: i64, duration: TimeDelta) -> f64 {
    if duration <= TimeDelta::zero() {
        return 0.0;
    }
    distance_km(steps) / hours(duration)
}

/// Calories spent walking. Returns `0.0` for a non-positive height.
pub fn walking_calories(steps: i64, weight_kg: f64, height_cm: f64, duration: TimeDelta) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    let speed = mean_speed_kmh(steps, duration);
    (WALKING_WEIGHT_MULTIPLIER * weight_kg
        + (speed.powi(2) / height_cm) * WALKING_SPEED_HEIGHT_MULTIPLIER)
        * hours(duration)
        * MIN_IN_H
}

/// Calories spent running.
pub fn running_calories(steps: i64, weight_kg: f64, duration: TimeDelta) -> f64 {
    (RUNNING_SPEED_MULTIPLIER * mean_speed_kmh(steps, duration) - RUNNING_SPEED_SHIFT) * weight_kg
}
