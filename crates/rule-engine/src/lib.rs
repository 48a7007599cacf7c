//! Rule Evaluation Engine
//!
//! Classifies one patient's parameters into a risk category by applying
//! rule sets in ascending severity order:
//! - each rule is a pure predicate over named parameters
//! - a rule set combines its rules with AND (`all`) or OR (`any`)
//! - a matching rule set overwrites the overall category, so the most
//!   severe matching set wins
//! - every parameter read by a matching rule is attributed to its set

mod category;
mod error;
mod evaluator;
mod protocol;
mod report;
mod rule;
mod rule_set;

pub use category::Category;
pub use error::{EngineError, UndefinedParameter};
pub use evaluator::{
    evaluate_patient, evaluate_rule, evaluate_rule_set, resolve_argument, RuleOutcome,
};
pub use protocol::Protocol;
pub use report::{EvaluationReport, ParameterAnnotation};
pub use rule::{Predicate, Rule};
pub use rule_set::{Mode, RuleSet};
