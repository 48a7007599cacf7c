//! Rule Sets

use crate::category::Category;
use crate::error::EngineError;
use crate::rule::Rule;
use tracing::error;
use std::fmt;
use std::str::FromStr;

/// How the rules of a set are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every rule must hold
    All,
    /// At least one rule must hold
    Any,
}

impl Mode {
    /// Starting value of the aggregate
    pub fn identity(&self) -> bool {
        match self {
            Mode::All => true,
            Mode::Any => false,
        }
    }

    /// Fold one rule result into the aggregate
    pub fn combine(&self, aggregate: bool, holds: bool) -> bool {
        match self {
            Mode::All => aggregate && holds,
            Mode::Any => aggregate || holds,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::All => "all",
            Mode::Any => "any",
        }
    }
}

impl FromStr for Mode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Mode::All),
            "any" => Ok(Mode::Any),
            other => Err(EngineError::UnknownMode {
                mode: other.to_string(),
                category: None,
            }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A severity category with the rules that qualify a patient for it
#[derive(Debug)]
pub struct RuleSet {
    category: Category,
    mode: Mode,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn new(category: Category, mode: Mode) -> Self {
        Self {
            category,
            mode,
            rules: Vec::new(),
        }
    }

    /// Create a rule set from a textual mode, rejecting unknown modes
    pub fn with_mode_name(category: Category, mode: &str) -> Result<Self, EngineError> {
        let parsed = mode.parse::<Mode>().map_err(|_| {
            let err = EngineError::UnknownMode {
                mode: mode.to_string(),
                category: Some(category),
            };
            error!("{}", err);
            err
        })?;
        Ok(Self::new(category, parsed))
    }

    /// Append a rule
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Rules in declaration order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}
