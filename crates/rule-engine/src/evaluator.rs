//! Rule, rule set and patient evaluation

use crate::category::Category;
use crate::error::{EngineError, UndefinedParameter};
use crate::report::{EvaluationReport, ParameterAnnotation};
use crate::rule::{Predicate, Rule};
use crate::rule_set::RuleSet;
use parameter_store::{params, ParameterStore, ParameterValue};
use tracing::{debug, info, warn};

/// Parameters that fall back to another when undefined.
///
/// No prior Borg reading means no change since now.
const FALLBACKS: [(&str, &str); 1] = [(params::BORG_SCALE_12H_AGO, params::BORG_SCALE)];

/// Result of one rule
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    /// Whether the predicate held
    pub holds: bool,
    /// Annotations for every argument, empty unless the rule held
    pub attributions: Vec<(&'static str, ParameterAnnotation)>,
}

/// Resolve a rule argument against the store.
///
/// Returns `None` only when the parameter, and its fallback if it has one,
/// are undefined. A defined-but-absent value resolves to
/// [`ParameterValue::Absent`].
pub fn resolve_argument(name: &str, store: &ParameterStore) -> Option<ParameterValue> {
    if let Some(value) = store.get(name) {
        return Some(*value);
    }

    let (_, fallback) = FALLBACKS.iter().find(|(param, _)| *param == name)?;
    let value = store.get(fallback).copied()?;
    debug!("Parameter '{}' undefined, using '{}' = {}", name, fallback, value);
    Some(value)
}

fn resolve_arguments<const N: usize>(
    rule: &Rule,
    arguments: &[&'static str; N],
    store: &ParameterStore,
) -> Result<[ParameterValue; N], UndefinedParameter> {
    let mut values = [ParameterValue::Absent; N];
    for (slot, name) in values.iter_mut().zip(arguments) {
        *slot = resolve_argument(name, store).ok_or_else(|| UndefinedParameter {
            parameter: name.to_string(),
            rule: rule.name().to_string(),
        })?;
    }
    Ok(values)
}

/// Evaluate a single rule of `rule_set`
pub fn evaluate_rule(
    rule_set: &RuleSet,
    rule: &Rule,
    store: &ParameterStore,
) -> Result<RuleOutcome, UndefinedParameter> {
    let (holds, values): (bool, Vec<ParameterValue>) = match rule.predicate() {
        Predicate::Unary { arguments, test } => {
            let [a] = resolve_arguments(rule, arguments, store)?;
            (test(a), vec![a])
        }
        Predicate::Binary { arguments, test } => {
            let [a, b] = resolve_arguments(rule, arguments, store)?;
            (test(a, b), vec![a, b])
        }
        Predicate::Ternary { arguments, test } => {
            let [a, b, c] = resolve_arguments(rule, arguments, store)?;
            (test(a, b, c), vec![a, b, c])
        }
    };

    let attributions = if holds {
        rule.arguments()
            .iter()
            .zip(values)
            .map(|(name, value)| {
                (
                    *name,
                    ParameterAnnotation {
                        value,
                        category: rule_set.category(),
                    },
                )
            })
            .collect()
    } else {
        Vec::new()
    };

    debug!(
        "Rule '{}' ({}) -> {}",
        rule.name(),
        rule_set.category(),
        holds
    );

    Ok(RuleOutcome {
        holds,
        attributions,
    })
}

/// Apply every rule of `rule_set` and fold the results.
///
/// All rules run regardless of the aggregate so that each one contributes
/// its attributions. A matching set overwrites the overall category.
pub fn evaluate_rule_set(
    rule_set: &RuleSet,
    store: &ParameterStore,
    mut report: EvaluationReport,
) -> Result<EvaluationReport, EngineError> {
    let mode = rule_set.mode();
    let mut aggregate = mode.identity();

    for rule in rule_set.rules() {
        let outcome = evaluate_rule(rule_set, rule, store).map_err(|e| {
            let err = e.for_subject(&report.subject_name, rule_set.category());
            warn!("Evaluation aborted: {}", err);
            err
        })?;

        aggregate = mode.combine(aggregate, outcome.holds);
        for (name, annotation) in outcome.attributions {
            report.annotate(name, annotation);
        }
    }

    debug!(
        "Rule set '{}' ({}) for '{}' -> {}",
        rule_set.category(),
        mode,
        report.subject_name,
        aggregate
    );

    if aggregate {
        report.overall_category = rule_set.category();
    }

    Ok(report)
}

/// Evaluate a patient against rule sets given in ascending severity order
pub fn evaluate_patient(
    rule_sets: &[RuleSet],
    store: &ParameterStore,
    subject_name: &str,
) -> Result<EvaluationReport, EngineError> {
    let mut report = EvaluationReport::initial(subject_name, store);

    for rule_set in rule_sets {
        report = evaluate_rule_set(rule_set, store, report)?;
    }

    if report.overall_category == Category::Uncategorized {
        info!("'{}' matched no rule set", subject_name);
    } else {
        info!("'{}' categorized {}", subject_name, report.overall_category);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule_set::Mode;
    use proptest::prelude::*;

    fn store() -> ParameterStore {
        ParameterStore::new()
            .with("age", 70.0)
            .with("alone", true)
            .with("temp", ParameterValue::Absent)
            .with(params::BORG_SCALE, 4.0)
    }

    fn set(category: Category, mode: Mode) -> RuleSet {
        RuleSet::new(category, mode)
    }

    #[test]
    fn test_resolve_defined_and_absent() {
        let store = store();
        assert_eq!(resolve_argument("age", &store), Some(ParameterValue::Number(70.0)));
        assert_eq!(resolve_argument("temp", &store), Some(ParameterValue::Absent));
        assert_eq!(resolve_argument("spo2", &store), None);
    }

    #[test]
    fn test_resolve_prior_borg_fallback() {
        let mut store = store();
        assert_eq!(
            resolve_argument(params::BORG_SCALE_12H_AGO, &store),
            Some(ParameterValue::Number(4.0))
        );

        store.insert(params::BORG_SCALE_12H_AGO, 1.0);
        assert_eq!(
            resolve_argument(params::BORG_SCALE_12H_AGO, &store),
            Some(ParameterValue::Number(1.0))
        );

        store.remove(params::BORG_SCALE_12H_AGO);
        store.remove(params::BORG_SCALE);
        assert_eq!(resolve_argument(params::BORG_SCALE_12H_AGO, &store), None);
    }

    #[test]
    fn test_arguments_passed_in_declared_order() {
        let rule_set = set(Category::Orange, Mode::Any);
        let rule = Rule::binary("order", ["age", "alone"], |age, alone| {
            age.as_number() == Some(70.0) && alone.is_yes()
        });
        assert!(evaluate_rule(&rule_set, &rule, &store()).unwrap().holds);

        let swapped = Rule::binary("swapped", ["alone", "age"], |age, alone| {
            age.as_number() == Some(70.0) && alone.is_yes()
        });
        assert!(!evaluate_rule(&rule_set, &swapped, &store()).unwrap().holds);
    }

    #[test]
    fn test_matching_rule_attributes_every_argument() {
        let rule_set = set(Category::Red, Mode::Any);
        // Only age decides, but alone is attributed too
        let rule = Rule::binary("senior", ["age", "alone"], |age, _| age.number_is(|a| a >= 65.0));
        let outcome = evaluate_rule(&rule_set, &rule, &store()).unwrap();

        assert!(outcome.holds);
        let names: Vec<&str> = outcome.attributions.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["age", "alone"]);
        assert!(outcome
            .attributions
            .iter()
            .all(|(_, a)| a.category == Category::Red));
        assert_eq!(outcome.attributions[0].1.value, ParameterValue::Number(70.0));
    }

    #[test]
    fn test_false_rule_attributes_nothing() {
        let rule_set = set(Category::Red, Mode::Any);
        let rule = Rule::unary("fever", "temp", |t| t.number_is(|t| t > 40.0));
        let outcome = evaluate_rule(&rule_set, &rule, &store()).unwrap();
        assert!(!outcome.holds);
        assert!(outcome.attributions.is_empty());
    }

    #[test]
    fn test_undefined_parameter_names_rule_and_subject() {
        let rule_set = set(Category::Green, Mode::All)
            .rule(Rule::unary("normal_spo2", "spo2", |s| s.number_is(|s| s >= 96.0)));
        let err = evaluate_patient(std::slice::from_ref(&rule_set), &store(), "Patient 9")
            .unwrap_err();

        assert_eq!(
            err,
            EngineError::MissingParameter {
                subject: "Patient 9".to_string(),
                parameter: "spo2".to_string(),
                rule: "normal_spo2".to_string(),
                category: Category::Green,
            }
        );
        let message = err.to_string();
        assert!(message.contains("spo2"));
        assert!(message.contains("Patient 9"));
        assert!(message.contains("green"));
    }

    #[test]
    fn test_all_rules_run_after_aggregate_decided() {
        let rule_set = set(Category::Orange, Mode::Any)
            .rule(Rule::unary("senior", "age", |a| a.number_is(|a| a >= 65.0)))
            .rule(Rule::unary("alone", "alone", |a| a.is_yes()));
        let report = evaluate_rule_set(
            &rule_set,
            &store(),
            EvaluationReport::initial("p", &store()),
        )
        .unwrap();

        assert_eq!(report.overall_category, Category::Orange);
        assert_eq!(report.category_of("age"), Some(Category::Orange));
        assert_eq!(report.category_of("alone"), Some(Category::Orange));
    }

    #[test]
    fn test_failed_all_set_keeps_attributions_but_not_category() {
        let rule_set = set(Category::Green, Mode::All)
            .rule(Rule::unary("alone", "alone", |a| a.is_yes()))
            .rule(Rule::unary("young", "age", |a| a.number_is(|a| a < 65.0)));
        let report = evaluate_rule_set(
            &rule_set,
            &store(),
            EvaluationReport::initial("p", &store()),
        )
        .unwrap();

        assert_eq!(report.overall_category, Category::Uncategorized);
        assert_eq!(report.category_of("alone"), Some(Category::Green));
        assert_eq!(report.category_of("age"), Some(Category::Uncategorized));
    }

    #[test]
    fn test_most_severe_match_wins() {
        let rule_sets = vec![
            set(Category::Orange, Mode::Any).rule(Rule::unary("senior", "age", |a| {
                a.number_is(|a| a >= 65.0)
            })),
            set(Category::Red, Mode::Any).rule(Rule::binary(
                "senior_alone",
                ["age", "alone"],
                |a, alone| a.number_is(|a| a >= 65.0) && alone.is_yes(),
            )),
        ];
        let report = evaluate_patient(&rule_sets, &store(), "p").unwrap();

        assert_eq!(report.overall_category, Category::Red);
        assert_eq!(report.category_of("age"), Some(Category::Red));
        assert_eq!(report.category_of("temp"), Some(Category::Uncategorized));
    }

    #[test]
    fn test_no_match_is_uncategorized() {
        let rule_sets = vec![set(Category::Red, Mode::Any)
            .rule(Rule::unary("fever", "temp", |t| t.number_is(|t| t > 40.0)))];
        let report = evaluate_patient(&rule_sets, &store(), "p").unwrap();
        assert_eq!(report.overall_category, Category::Uncategorized);
    }

    #[test]
    fn test_fallback_parameter_is_annotated_when_rule_holds() {
        let rule_sets = vec![set(Category::Orange, Mode::Any).rule(Rule::binary(
            "stable_breathing",
            [params::BORG_SCALE, params::BORG_SCALE_12H_AGO],
            |now, before| now == before,
        ))];
        let report = evaluate_patient(&rule_sets, &store(), "p").unwrap();

        assert_eq!(report.overall_category, Category::Orange);
        assert_eq!(
            report.parameter_annotations[params::BORG_SCALE_12H_AGO],
            ParameterAnnotation {
                value: ParameterValue::Number(4.0),
                category: Category::Orange,
            }
        );
    }

    fn orange_rules() -> Vec<Rule> {
        vec![
            Rule::unary("senior", "age", |a| a.number_is(|a| a >= 65.0)),
            Rule::unary("alone", "alone", |a| a.is_yes()),
            Rule::unary("breathless", params::BORG_SCALE, |b| b.number_is(|b| b >= 3.0)),
        ]
    }

    fn red_rules() -> Vec<Rule> {
        vec![
            Rule::binary("senior_alone", ["age", "alone"], |a, alone| {
                a.number_is(|a| a >= 65.0) && alone.is_yes()
            }),
            Rule::unary("fever", "temp", |t| t.number_is(|t| t > 40.0)),
            Rule::binary(
                "worsening",
                [params::BORG_SCALE, params::BORG_SCALE_12H_AGO],
                |now, before| now.number_is(|n| before.number_is(|b| n - b >= 2.0)),
            ),
        ]
    }

    fn permuted(rules: Vec<Rule>, order: &[usize]) -> Vec<Rule> {
        let mut slots: Vec<Option<Rule>> = rules.into_iter().map(Some).collect();
        order.iter().filter_map(|&i| slots[i].take()).collect()
    }

    fn orange_and_red(orange: Vec<Rule>, red: Vec<Rule>) -> Vec<RuleSet> {
        vec![
            orange
                .into_iter()
                .fold(set(Category::Orange, Mode::Any), RuleSet::rule),
            red.into_iter().fold(set(Category::Red, Mode::Any), RuleSet::rule),
        ]
    }

    #[test]
    fn test_declaration_order_does_not_change_result() {
        let forward = evaluate_patient(&orange_and_red(orange_rules(), red_rules()), &store(), "p")
            .unwrap();

        let mut orange = orange_rules();
        orange.reverse();
        let mut red = red_rules();
        red.reverse();
        let reversed = evaluate_patient(&orange_and_red(orange, red), &store(), "p").unwrap();

        assert_eq!(forward.overall_category, Category::Red);
        assert_eq!(reversed.overall_category, forward.overall_category);
        assert_eq!(reversed.parameter_annotations, forward.parameter_annotations);
        assert_eq!(forward.category_of("age"), Some(Category::Red));
        assert_eq!(forward.category_of(params::BORG_SCALE), Some(Category::Orange));
    }

    proptest! {
        #[test]
        fn prop_aggregate_matches_mode(flags in proptest::collection::vec(any::<bool>(), 0..8), all in any::<bool>()) {
            let mode = if all { Mode::All } else { Mode::Any };
            let mut store = ParameterStore::new();
            let mut rule_set = set(Category::Orange, mode);
            for (i, flag) in flags.iter().enumerate() {
                let name: &'static str = Box::leak(format!("flag_{i}").into_boxed_str());
                store.insert(name, *flag);
                rule_set = rule_set.rule(Rule::unary(name, name, |v| v.is_yes()));
            }

            let report = evaluate_patient(std::slice::from_ref(&rule_set), &store, "p").unwrap();
            let expected = if all { flags.iter().all(|f| *f) } else { flags.iter().any(|f| *f) };
            let category = if expected { Category::Orange } else { Category::Uncategorized };
            prop_assert_eq!(report.overall_category, category);

            // Only true flags are attributed
            for (i, flag) in flags.iter().enumerate() {
                let attributed = report.category_of(&format!("flag_{i}")) == Some(Category::Orange);
                prop_assert_eq!(attributed, *flag);
            }
        }

        #[test]
        fn prop_result_independent_of_rule_order(
            orange_order in Just((0..3).collect::<Vec<usize>>()).prop_shuffle(),
            red_order in Just((0..3).collect::<Vec<usize>>()).prop_shuffle()
        ) {
            let declared = evaluate_patient(&orange_and_red(orange_rules(), red_rules()), &store(), "p").unwrap();
            let rule_sets = orange_and_red(
                permuted(orange_rules(), &orange_order),
                permuted(red_rules(), &red_order),
            );
            let shuffled = evaluate_patient(&rule_sets, &store(), "p").unwrap();

            prop_assert_eq!(shuffled.overall_category, Category::Red);
            prop_assert_eq!(shuffled, declared);
        }
    }
}
