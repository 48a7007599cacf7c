//! Protocol
//!
//! An immutable, ordered collection of rule sets. One protocol is built at
//! startup and shared read-only by every evaluation, so it can be used from
//! many threads at once.

use crate::category::Category;
use crate::error::EngineError;
use crate::evaluator::evaluate_patient;
use crate::report::EvaluationReport;
use crate::rule_set::RuleSet;
use parameter_store::{ParameterStore, PatientRecord};
use tracing::{error, info};

/// Rule sets in ascending severity order
#[derive(Debug)]
pub struct Protocol {
    rule_sets: Vec<RuleSet>,
}

impl Protocol {
    /// Create a protocol, checking the severity order of its rule sets
    pub fn new(rule_sets: Vec<RuleSet>) -> Result<Self, EngineError> {
        let mut previous = Category::Uncategorized;
        for rule_set in &rule_sets {
            let category = rule_set.category();
            if category <= previous {
                error!(
                    "Rule set '{}' follows '{}', expected ascending severity",
                    category, previous
                );
                return Err(EngineError::SeverityOrder { category, previous });
            }
            previous = category;
        }

        info!(
            "Protocol ready: {}",
            rule_sets
                .iter()
                .map(|s| format!("{}[{}x{}]", s.category(), s.rules().len(), s.mode()))
                .collect::<Vec<_>>()
                .join(" < ")
        );

        Ok(Self { rule_sets })
    }

    /// Evaluate one patient's parameters
    pub fn evaluate(
        &self,
        store: &ParameterStore,
        subject_name: &str,
    ) -> Result<EvaluationReport, EngineError> {
        evaluate_patient(&self.rule_sets, store, subject_name)
    }

    /// Evaluate a loaded patient record
    pub fn evaluate_record(&self, record: &PatientRecord) -> Result<EvaluationReport, EngineError> {
        self.evaluate(&record.parameters, &record.name)
    }

    /// Rule sets in application order
    pub fn rule_sets(&self) -> &[RuleSet] {
        &self.rule_sets
    }

    /// Rule set for a category
    pub fn rule_set(&self, category: Category) -> Option<&RuleSet> {
        self.rule_sets.iter().find(|s| s.category() == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;
    use crate::rule_set::Mode;

    fn senior_set(category: Category) -> RuleSet {
        RuleSet::new(category, Mode::Any)
            .rule(Rule::unary("senior", "age", |a| a.number_is(|a| a >= 65.0)))
    }

    #[test]
    fn test_rejects_descending_order() {
        let err = Protocol::new(vec![senior_set(Category::Red), senior_set(Category::Orange)])
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::SeverityOrder {
                category: Category::Orange,
                previous: Category::Red,
            }
        );
    }

    #[test]
    fn test_rejects_uncategorized_and_duplicates() {
        assert!(Protocol::new(vec![senior_set(Category::Uncategorized)]).is_err());
        assert!(
            Protocol::new(vec![senior_set(Category::Orange), senior_set(Category::Orange)]).is_err()
        );
    }

    #[test]
    fn test_evaluate_record() {
        let protocol =
            Protocol::new(vec![senior_set(Category::Orange), senior_set(Category::Red)]).unwrap();
        let record = PatientRecord::new("Patient 1", ParameterStore::new().with("age", 80.0));

        let report = protocol.evaluate_record(&record).unwrap();
        assert_eq!(report.subject_name, "Patient 1");
        assert_eq!(report.overall_category, Category::Red);
        assert!(protocol.rule_set(Category::Green).is_none());
        assert_eq!(protocol.rule_sets().len(), 2);
    }

    #[test]
    fn test_shared_across_threads() {
        let protocol =
            Protocol::new(vec![senior_set(Category::Orange), senior_set(Category::Red)]).unwrap();

        let categories: Vec<Category> = std::thread::scope(|scope| {
            let handles: Vec<_> = [40.0, 70.0, 90.0]
                .into_iter()
                .map(|age| {
                    let protocol = &protocol;
                    scope.spawn(move || {
                        let store = ParameterStore::new().with("age", age);
                        protocol.evaluate(&store, "p").unwrap().overall_category
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(
            categories,
            vec![Category::Uncategorized, Category::Red, Category::Red]
        );
    }
}
