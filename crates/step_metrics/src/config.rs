use serde::{Deserialize, Serialize};

use crate::error::MetricsError;

/// Body measurements used by the calorie formulas. Supplied per call and
/// never stored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl UserProfile {
    pub fn new(weight_kg: f64, height_cm: f64) -> Self {
        Self {
            weight_kg,
            height_cm,
        }
    }

    pub fn from_env() -> Result<Self, MetricsError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Reads the profile through `get` so tests never touch the process
    /// environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, MetricsError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let weight_kg = read_f64(&mut get, "STEP_METRICS_WEIGHT_KG")?;
        let height_cm = read_f64(&mut get, "STEP_METRICS_HEIGHT_CM")?;
        Ok(Self::new(weight_kg, height_cm))
    }
}

fn read_f64<F>(get: &mut F, key: &str) -> Result<f64, MetricsError>
where
    F: FnMut(&str) -> Option<String>,
{
    let raw = get(key).ok_or_else(|| MetricsError::Config(format!("{key} missing")))?;
    raw.trim()
        .parse::<f64>()
        .map_err(|e| MetricsError::Config(format!("{key}={raw:?}: {e}")))
}
