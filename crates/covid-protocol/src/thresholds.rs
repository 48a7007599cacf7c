//! Clinical thresholds

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Pairs of thresholds that must be strictly increasing
const ASCENDING: [(&str, &str); 11] = [
    ("stable_temperature_max", "fever_temperature"),
    ("fever_temperature", "hyperthermia_temperature"),
    ("heart_rate_max", "heart_rate_critical"),
    ("spo2_critical", "spo2_normal_min"),
    ("respiratory_rate_critical_low", "respiratory_rate_max"),
    ("respiratory_rate_max", "respiratory_rate_elevated"),
    ("respiratory_rate_elevated", "respiratory_rate_critical_high"),
    ("borg_stable_max", "borg_moderate"),
    ("borg_moderate", "borg_elevated"),
    ("borg_elevated", "borg_severe"),
    ("consciousness_normal", "consciousness_critical"),
];

/// Inconsistent threshold configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThresholdError {
    /// A bound that must be strictly below another is not
    #[error("{lower} ({lower_value}) must be below {upper} ({upper_value})")]
    Inverted {
        lower: &'static str,
        lower_value: f64,
        upper: &'static str,
        upper_value: f64,
    },

    /// NaN or infinite threshold
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
}

/// Thresholds used by the home follow-up rule sets.
///
/// Defaults are the protocol's clinical values and should only be changed
/// by a clinician.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Age from which a patient is considered at risk (years)
    pub senior_age: f64,
    /// Highest temperature compatible with stable (°C)
    pub stable_temperature_max: f64,
    /// Fever threshold (°C, inclusive)
    pub fever_temperature: f64,
    /// Hyperthermia threshold (°C, exclusive)
    pub hyperthermia_temperature: f64,
    /// Highest normal heart rate (bpm)
    pub heart_rate_max: f64,
    /// Critical heart rate (bpm, exclusive)
    pub heart_rate_critical: f64,
    /// Lowest normal SpO2 (%)
    pub spo2_normal_min: f64,
    /// SpO2 below this is critical (%)
    pub spo2_critical: f64,
    /// Highest normal respiratory rate (cycles/min)
    pub respiratory_rate_max: f64,
    /// Elevated respiratory rate (cycles/min, inclusive)
    pub respiratory_rate_elevated: f64,
    /// Critical high respiratory rate (cycles/min, inclusive)
    pub respiratory_rate_critical_high: f64,
    /// Critical low respiratory rate (cycles/min, inclusive)
    pub respiratory_rate_critical_low: f64,
    /// Highest Borg score compatible with stable
    pub borg_stable_max: f64,
    /// Moderate breathing difficulty (Borg, inclusive)
    pub borg_moderate: f64,
    /// Marked breathing difficulty (Borg, inclusive)
    pub borg_elevated: f64,
    /// Severe breathing difficulty (Borg, exclusive)
    pub borg_severe: f64,
    /// Borg increase over 12h considered fast worsening (exclusive)
    pub borg_worsening_delta: f64,
    /// Normal consciousness level
    pub consciousness_normal: f64,
    /// Consciousness above this level is critical
    pub consciousness_critical: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            senior_age: 65.0,
            stable_temperature_max: 39.0,
            fever_temperature: 39.1,
            hyperthermia_temperature: 40.0,
            heart_rate_max: 110.0,
            heart_rate_critical: 130.0,
            spo2_normal_min: 96.0,
            spo2_critical: 93.0,
            respiratory_rate_max: 21.0,
            respiratory_rate_elevated: 22.0,
            respiratory_rate_critical_high: 25.0,
            respiratory_rate_critical_low: 8.0,
            borg_stable_max: 1.0,
            borg_moderate: 2.0,
            borg_elevated: 3.0,
            borg_severe: 5.0,
            borg_worsening_delta: 2.0,
            consciousness_normal: 1.0,
            consciousness_critical: 2.0,
        }
    }
}

impl Thresholds {
    fn named(&self) -> [(&'static str, f64); 19] {
        [
            ("senior_age", self.senior_age),
            ("stable_temperature_max", self.stable_temperature_max),
            ("fever_temperature", self.fever_temperature),
            ("hyperthermia_temperature", self.hyperthermia_temperature),
            ("heart_rate_max", self.heart_rate_max),
            ("heart_rate_critical", self.heart_rate_critical),
            ("spo2_normal_min", self.spo2_normal_min),
            ("spo2_critical", self.spo2_critical),
            ("respiratory_rate_max", self.respiratory_rate_max),
            ("respiratory_rate_elevated", self.respiratory_rate_elevated),
            ("respiratory_rate_critical_high", self.respiratory_rate_critical_high),
            ("respiratory_rate_critical_low", self.respiratory_rate_critical_low),
            ("borg_stable_max", self.borg_stable_max),
            ("borg_moderate", self.borg_moderate),
            ("borg_elevated", self.borg_elevated),
            ("borg_severe", self.borg_severe),
            ("borg_worsening_delta", self.borg_worsening_delta),
            ("consciousness_normal", self.consciousness_normal),
            ("consciousness_critical", self.consciousness_critical),
        ]
    }

    /// Check that the thresholds are finite and escalate consistently
    pub fn validate(&self) -> Result<(), ThresholdError> {
        if let Some((name, _)) = self.named().into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(ThresholdError::NotFinite(name));
        }

        let values: HashMap<&str, f64> = self.named().into_iter().collect();
        for (lower, upper) in ASCENDING {
            let (lower_value, upper_value) = (values[lower], values[upper]);
            if lower_value >= upper_value {
                return Err(ThresholdError::Inverted {
                    lower,
                    lower_value,
                    upper,
                    upper_value,
                });
            }
        }

        Ok(())
    }
}
