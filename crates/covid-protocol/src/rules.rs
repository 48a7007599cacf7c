//! Home follow-up rule sets
//!
//! Absent measurements never satisfy a numeric comparison, and an absent
//! yes/no answer is neither yes nor no. An unmeasured vital therefore cannot
//! qualify a patient as stable, nor escalate them on its own.

use crate::thresholds::Thresholds;
use parameter_store::params::{
    AGE, AGREED_CONTAINMENT, ALONE_AT_HOME, BODY_TEMPERATURE, BORG_SCALE, BORG_SCALE_12H_AGO,
    CONSCIOUSNESS, DIGESTIVE_DISORDERS, HEARTBEATS_PER_MINUTE, HEAVY_COMORBIDITIES_COUNT,
    HYDRATION, RECENT_CHEST_PAIN, RECENT_COLD_CHILL, RESPIRATORY_RATE, SPO2,
};
use rule_engine::{Category, Mode, Rule, RuleSet};

/// Name of the rule comparing the current and 12h-old Borg readings
pub const FAST_WORSENING: &str = "fast_worsening";

/// Stable: every vital within normal range and no risk factor
pub fn green_rule_set(thresholds: &Thresholds) -> RuleSet {
    let t = *thresholds;

    RuleSet::new(Category::Green, Mode::All)
        .rule(Rule::unary("temperature_stable", BODY_TEMPERATURE, move |temp| {
            temp.number_is(|x| x <= t.stable_temperature_max)
        }))
        .rule(Rule::unary("no_chills", RECENT_COLD_CHILL, |chills| chills.is_no()))
        .rule(Rule::unary("heart_rate_normal", HEARTBEATS_PER_MINUTE, move |hr| {
            hr.number_is(|x| x <= t.heart_rate_max)
        }))
        .rule(Rule::unary("spo2_normal", SPO2, move |spo2| {
            spo2.number_is(|x| x >= t.spo2_normal_min)
        }))
        .rule(Rule::unary("breathing_comfortable", BORG_SCALE, move |borg| {
            borg.number_is(|x| x <= t.borg_stable_max)
        }))
        .rule(Rule::unary("respiratory_rate_normal", RESPIRATORY_RATE, move |rr| {
            rr.number_is(|x| x <= t.respiratory_rate_max)
        }))
        .rule(Rule::unary("agreed_containment", AGREED_CONTAINMENT, |agreed| {
            agreed.is_yes()
        }))
        .rule(Rule::unary("below_senior_age", AGE, move |age| {
            age.number_is(|x| x < t.senior_age)
        }))
        .rule(Rule::unary("conscious", CONSCIOUSNESS, move |level| {
            level.number_is(|x| x == t.consciousness_normal)
        }))
        .rule(Rule::unary("no_chest_pain", RECENT_CHEST_PAIN, |pain| pain.is_no()))
        .rule(Rule::unary("no_heavy_comorbidity", HEAVY_COMORBIDITIES_COUNT, |count| {
            count.number_is(|x| x == 0.0)
        }))
}

/// At risk: any single risk factor or borderline vital
pub fn orange_rule_set(thresholds: &Thresholds) -> RuleSet {
    let t = *thresholds;

    RuleSet::new(Category::Orange, Mode::Any)
        .rule(Rule::unary("senior", AGE, move |age| {
            age.number_is(|x| x >= t.senior_age)
        }))
        .rule(Rule::unary("chest_pain", RECENT_CHEST_PAIN, |pain| pain.is_yes()))
        .rule(Rule::unary("chills", RECENT_COLD_CHILL, |chills| chills.is_yes()))
        .rule(Rule::unary("spo2_borderline", SPO2, move |spo2| {
            spo2.number_is(|x| x < t.spo2_normal_min && x >= t.spo2_critical)
        }))
        .rule(Rule::unary("tachycardia", HEARTBEATS_PER_MINUTE, move |hr| {
            hr.number_is(|x| x > t.heart_rate_max)
        }))
        .rule(Rule::binary(
            "confused_alone",
            [CONSCIOUSNESS, ALONE_AT_HOME],
            move |level, alone| {
                level.number_is(|x| x > t.consciousness_normal) && alone.is_yes()
            },
        ))
        .rule(Rule::binary(
            "dehydrated_alone",
            [HYDRATION, ALONE_AT_HOME],
            |hydrated, alone| hydrated.is_no() && alone.is_yes(),
        ))
        .rule(Rule::binary(
            "digestive_disorders_alone",
            [DIGESTIVE_DISORDERS, ALONE_AT_HOME],
            |digestive, alone| digestive.is_yes() && alone.is_yes(),
        ))
        .rule(Rule::binary(
            "breathless_alone",
            [BORG_SCALE, ALONE_AT_HOME],
            move |borg, alone| borg.number_is(|x| x >= t.borg_moderate) && alone.is_yes(),
        ))
        .rule(Rule::binary(
            "fever_alone",
            [BODY_TEMPERATURE, ALONE_AT_HOME],
            move |temp, alone| temp.number_is(|x| x >= t.fever_temperature) && alone.is_yes(),
        ))
        .rule(Rule::unary("breathless", BORG_SCALE, move |borg| {
            borg.number_is(|x| x >= t.borg_elevated)
        }))
        .rule(Rule::unary("tachypnea", RESPIRATORY_RATE, move |rr| {
            rr.number_is(|x| x >= t.respiratory_rate_elevated)
        }))
        .rule(Rule::binary(
            "fever_breathless",
            [BODY_TEMPERATURE, BORG_SCALE],
            move |temp, borg| {
                temp.number_is(|x| x >= t.fever_temperature)
                    && borg.number_is(|x| x >= t.borg_moderate)
            },
        ))
        .rule(Rule::unary("refused_containment", AGREED_CONTAINMENT, |agreed| {
            agreed.is_no()
        }))
        .rule(Rule::unary("heavy_comorbidity", HEAVY_COMORBIDITIES_COUNT, |count| {
            count.number_is(|x| x >= 1.0)
        }))
}

/// Critical: any single critical sign
pub fn red_rule_set(thresholds: &Thresholds) -> RuleSet {
    let t = *thresholds;

    RuleSet::new(Category::Red, Mode::Any)
        .rule(Rule::binary(
            "hyperthermia_dehydrated",
            [BODY_TEMPERATURE, HYDRATION],
            move |temp, hydrated| {
                temp.number_is(|x| x > t.hyperthermia_temperature) && hydrated.is_no()
            },
        ))
        .rule(Rule::binary(
            "hyperthermia_senior",
            [BODY_TEMPERATURE, AGE],
            move |temp, age| {
                temp.number_is(|x| x > t.hyperthermia_temperature)
                    && age.number_is(|x| x >= t.senior_age)
            },
        ))
        .rule(Rule::unary("severe_tachycardia", HEARTBEATS_PER_MINUTE, move |hr| {
            hr.number_is(|x| x > t.heart_rate_critical)
        }))
        .rule(Rule::unary("respiratory_rate_critical", RESPIRATORY_RATE, move |rr| {
            // The low bound sits outside the measured guard; an absent rate
            // still fails it because absent never compares.
            (!rr.is_absent() && rr.number_is(|x| x >= t.respiratory_rate_critical_high))
                || rr.number_is(|x| x <= t.respiratory_rate_critical_low)
        }))
        .rule(Rule::unary("confusion", CONSCIOUSNESS, move |level| {
            level.number_is(|x| x > t.consciousness_critical)
        }))
        .rule(Rule::unary("hypoxemia", SPO2, move |spo2| {
            spo2.number_is(|x| x < t.spo2_critical)
        }))
        .rule(Rule::ternary(
            "senior_breathless_alone",
            [AGE, BORG_SCALE, ALONE_AT_HOME],
            move |age, borg, alone| {
                age.number_is(|x| x >= t.senior_age)
                    && borg.number_is(|x| x >= t.borg_elevated)
                    && alone.is_yes()
            },
        ))
        .rule(Rule::unary("severe_breathlessness", BORG_SCALE, move |borg| {
            borg.number_is(|x| x > t.borg_severe)
        }))
        .rule(Rule::binary(
            "breathless_chest_pain",
            [BORG_SCALE, RECENT_CHEST_PAIN],
            move |borg, pain| borg.number_is(|x| x >= t.borg_elevated) && pain.is_yes(),
        ))
        .rule(Rule::binary(
            "confused_alone",
            [CONSCIOUSNESS, ALONE_AT_HOME],
            move |level, alone| {
                level.number_is(|x| x > t.consciousness_normal) && alone.is_yes()
            },
        ))
        .rule(Rule::binary(
            FAST_WORSENING,
            [BORG_SCALE, BORG_SCALE_12H_AGO],
            move |now, before| match (now.as_number(), before.as_number()) {
                (Some(now), Some(before)) => now - before > t.borg_worsening_delta,
                _ => false,
            },
        ))
}
