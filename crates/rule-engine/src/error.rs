//! Engine Error Types

use crate::category::Category;
use thiserror::Error;

/// A rule read a parameter that is not defined for the subject
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("rule '{rule}' reads undefined parameter '{parameter}'")]
pub struct UndefinedParameter {
    /// Parameter name
    pub parameter: String,
    /// Rule that read it
    pub rule: String,
}

/// Configuration errors that abort an evaluation.
///
/// Absent measurements are never errors; only rule authoring mistakes and
/// subjects missing a parameter definition end up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Rule set mode is neither `all` nor `any`
    #[error(
        "Unknown rule evaluation mode '{mode}'{} (expected 'all' or 'any')",
        in_rule_set(.category)
    )]
    UnknownMode {
        mode: String,
        /// Rule set the mode was given for, if known
        category: Option<Category>,
    },

    /// Rule references a parameter the subject never defined
    #[error(
        "Parameter '{parameter}' required by rule '{rule}' of the {category} rule set \
         is not defined for subject '{subject}'"
    )]
    MissingParameter {
        subject: String,
        parameter: String,
        rule: String,
        category: Category,
    },

    /// Rule sets are not in strictly ascending severity order
    #[error("Rule set '{category}' must be more severe than the preceding '{previous}' rule set")]
    SeverityOrder {
        category: Category,
        previous: Category,
    },
}

fn in_rule_set(category: &Option<Category>) -> String {
    match category {
        Some(category) => format!(" in rule set of category '{}'", category),
        None => String::new(),
    }
}

impl UndefinedParameter {
    /// Attach the subject and rule set the failure happened in
    pub fn for_subject(self, subject: &str, category: Category) -> EngineError {
        EngineError::MissingParameter {
            subject: subject.to_string(),
            parameter: self.parameter,
            rule: self.rule,
            category,
        }
    }
}
