//! Parameter Values

use serde::{Deserialize, Serialize};
use std::fmt;

/// A measured value, or the explicit absence of a measurement.
///
/// `Absent` is valid input: the patient could not or did not take the
/// measurement. It serialises to JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// Numeric measurement (temperature, rate, score, count...)
    Number(f64),
    /// Yes/no answer
    Boolean(bool),
    /// Not measured
    #[default]
    Absent,
}

impl ParameterValue {
    /// Numeric reading, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParameterValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Boolean answer, if this is a boolean
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            ParameterValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Whether the measurement was not taken
    pub fn is_absent(&self) -> bool {
        matches!(self, ParameterValue::Absent)
    }

    /// True only for a measured number satisfying `test`
    pub fn number_is(&self, test: impl FnOnce(f64) -> bool) -> bool {
        self.as_number().is_some_and(test)
    }

    /// True only for an explicit `true`
    pub fn is_yes(&self) -> bool {
        self.as_flag() == Some(true)
    }

    /// True only for an explicit `false`
    pub fn is_no(&self) -> bool {
        self.as_flag() == Some(false)
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Number(value)
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        ParameterValue::Boolean(value)
    }
}

impl<T: Into<ParameterValue>> From<Option<T>> for ParameterValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParameterValue::Absent, Into::into)
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Number(n) => write!(f, "{n}"),
            ParameterValue::Boolean(b) => write!(f, "{b}"),
            ParameterValue::Absent => write!(f, "not measured"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mapping() {
        let values: Vec<ParameterValue> = serde_json::from_str("[38.5, true, null, 2]").unwrap();
        assert_eq!(
            values,
            vec![
                ParameterValue::Number(38.5),
                ParameterValue::Boolean(true),
                ParameterValue::Absent,
                ParameterValue::Number(2.0),
            ]
        );
        assert_eq!(serde_json::to_string(&ParameterValue::Absent).unwrap(), "null");
    }

    #[test]
    fn test_absent_satisfies_nothing() {
        let absent = ParameterValue::Absent;
        assert!(!absent.number_is(|n| n <= 8.0));
        assert!(!absent.number_is(|n| n > 8.0));
        assert!(!absent.is_yes());
        assert!(!absent.is_no());
    }

    #[test]
    fn test_wrong_kind_behaves_like_absent() {
        let flag = ParameterValue::Boolean(true);
        assert_eq!(flag.as_number(), None);
        assert!(!flag.number_is(|_| true));

        let number = ParameterValue::Number(1.0);
        assert!(!number.is_yes());
        assert!(!number.is_no());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(ParameterValue::from(None::<f64>), ParameterValue::Absent);
        assert_eq!(ParameterValue::from(Some(37.2)), ParameterValue::Number(37.2));
        assert_eq!(ParameterValue::from(Some(false)), ParameterValue::Boolean(false));
    }
}
