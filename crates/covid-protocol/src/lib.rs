//! At-home COVID-19 Follow-up Protocol
//!
//! Builds the green (stable), orange (at risk) and red (critical) rule sets
//! from a set of clinical [`Thresholds`] and assembles them, in that order,
//! into a [`Protocol`].

mod rules;
mod thresholds;

pub use rules::{green_rule_set, orange_rule_set, red_rule_set, FAST_WORSENING};
pub use thresholds::{ThresholdError, Thresholds};

use rule_engine::{EngineError, Protocol};
use thiserror::Error;
use tracing::info;

/// Errors while building the protocol
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Invalid thresholds: {0}")]
    Thresholds(#[from] ThresholdError),

    #[error("Invalid rule sets: {0}")]
    Engine(#[from] EngineError),
}

/// Build the home follow-up protocol
pub fn home_follow_up(thresholds: &Thresholds) -> Result<Protocol, ProtocolError> {
    thresholds.validate()?;
    if *thresholds != Thresholds::default() {
        info!("Using non-default thresholds: {:?}", thresholds);
    }

    let protocol = Protocol::new(vec![
        green_rule_set(thresholds),
        orange_rule_set(thresholds),
        red_rule_set(thresholds),
    ])?;
    Ok(protocol)
}
