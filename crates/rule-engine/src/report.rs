//! Evaluation Reports

use crate::category::Category;
use parameter_store::{ParameterStore, ParameterValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value of a parameter and the rule set that last explained it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterAnnotation {
    /// Value the rule read
    pub value: ParameterValue,
    /// Category of the last matching rule set that read it
    pub category: Category,
}

/// Result of evaluating one patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Subject identifier
    pub subject_name: String,
    /// Most severe matching category
    pub overall_category: Category,
    /// Per-parameter attribution
    pub parameter_annotations: BTreeMap<String, ParameterAnnotation>,
}

impl EvaluationReport {
    /// Report with every stored parameter uncategorized
    pub fn initial(subject_name: impl Into<String>, store: &ParameterStore) -> Self {
        let parameter_annotations = store
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    ParameterAnnotation {
                        value: *value,
                        category: Category::Uncategorized,
                    },
                )
            })
            .collect();

        Self {
            subject_name: subject_name.into(),
            overall_category: Category::Uncategorized,
            parameter_annotations,
        }
    }

    /// Overwrite the annotation of one parameter
    pub fn annotate(&mut self, parameter: &str, annotation: ParameterAnnotation) {
        self.parameter_annotations
            .insert(parameter.to_string(), annotation);
    }

    /// Category a parameter is attributed to
    pub fn category_of(&self, parameter: &str) -> Option<Category> {
        self.parameter_annotations
            .get(parameter)
            .map(|annotation| annotation.category)
    }

    /// Parameters attributed to `category`, in name order
    pub fn flagged(&self, category: Category) -> Vec<&str> {
        self.parameter_annotations
            .iter()
            .filter(|(_, annotation)| annotation.category == category)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
