//! Documented parameter names
//!
//! Units follow what the patient reports at home.

/// Age in years
pub const AGE: &str = "age";
/// Number of heavy comorbidities (diabetes, heart failure, ...)
pub const HEAVY_COMORBIDITIES_COUNT: &str = "heavy_comorbidities_count";
/// Body temperature in °C
pub const BODY_TEMPERATURE: &str = "body_temperature";
/// Heart rate in beats per minute
pub const HEARTBEATS_PER_MINUTE: &str = "heartbeats_per_minute";
/// Respiratory rate in cycles per minute
pub const RESPIRATORY_RATE: &str = "respiratory_rate_in_cycles_per_minute";
/// Peripheral oxygen saturation in %
pub const SPO2: &str = "spo2";
/// Breathing difficulty on the Borg dyspnea scale (0-10)
pub const BORG_SCALE: &str = "breathing_difficulty_borg_scale";
/// Borg reading taken about 12 hours earlier
pub const BORG_SCALE_12H_AGO: &str = "breathing_difficulty_borg_scale_12h_ago";
/// Consciousness level, ordinal, 1 = normal
pub const CONSCIOUSNESS: &str = "consciousness";
/// Adequate hydration
pub const HYDRATION: &str = "hydration";
/// Digestive disorders present
pub const DIGESTIVE_DISORDERS: &str = "digestive_disorders";
/// Recent chills
pub const RECENT_COLD_CHILL: &str = "recent_cold_chill";
/// Recent chest pain
pub const RECENT_CHEST_PAIN: &str = "recent_chest_pain";
/// Loss of smell or taste
pub const ANOSMIA_AGEUSIA: &str = "anosmia_ageusia";
/// Living alone
pub const ALONE_AT_HOME: &str = "alone_at_home";
/// Agreed to self-isolate
pub const AGREED_CONTAINMENT: &str = "agreed_containment";

/// Every documented parameter, in questionnaire order
pub const ALL: [&str; 16] = [
    AGE,
    HEAVY_COMORBIDITIES_COUNT,
    BODY_TEMPERATURE,
    BORG_SCALE,
    BORG_SCALE_12H_AGO,
    HEARTBEATS_PER_MINUTE,
    RESPIRATORY_RATE,
    SPO2,
    CONSCIOUSNESS,
    HYDRATION,
    DIGESTIVE_DISORDERS,
    RECENT_COLD_CHILL,
    RECENT_CHEST_PAIN,
    ANOSMIA_AGEUSIA,
    ALONE_AT_HOME,
    AGREED_CONTAINMENT,
];
