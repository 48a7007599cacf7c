//! Rules
//!
//! A rule is a named pure predicate over an ordered tuple of parameters.
//! The order of the argument names is the predicate's calling convention.

use parameter_store::ParameterValue;
use std::fmt;

type UnaryTest = Box<dyn Fn(ParameterValue) -> bool + Send + Sync>;
type BinaryTest = Box<dyn Fn(ParameterValue, ParameterValue) -> bool + Send + Sync>;
type TernaryTest =
    Box<dyn Fn(ParameterValue, ParameterValue, ParameterValue) -> bool + Send + Sync>;

/// Predicate of fixed arity with its argument names
pub enum Predicate {
    /// One argument
    Unary {
        arguments: [&'static str; 1],
        test: UnaryTest,
    },
    /// Two arguments
    Binary {
        arguments: [&'static str; 2],
        test: BinaryTest,
    },
    /// Three arguments
    Ternary {
        arguments: [&'static str; 3],
        test: TernaryTest,
    },
}

impl Predicate {
    /// Argument names in calling order
    pub fn arguments(&self) -> &[&'static str] {
        match self {
            Predicate::Unary { arguments, .. } => arguments,
            Predicate::Binary { arguments, .. } => arguments,
            Predicate::Ternary { arguments, .. } => arguments,
        }
    }
}

/// A named predicate
pub struct Rule {
    name: &'static str,
    predicate: Predicate,
}

impl Rule {
    /// Rule over a single parameter
    pub fn unary<F>(name: &'static str, argument: &'static str, test: F) -> Self
    where
        F: Fn(ParameterValue) -> bool + Send + Sync + 'static,
    {
        Self {
            name,
            predicate: Predicate::Unary {
                arguments: [argument],
                test: Box::new(test),
            },
        }
    }

    /// Rule over two parameters, passed to `test` in the given order
    pub fn binary<F>(name: &'static str, arguments: [&'static str; 2], test: F) -> Self
    where
        F: Fn(ParameterValue, ParameterValue) -> bool + Send + Sync + 'static,
    {
        Self {
            name,
            predicate: Predicate::Binary {
                arguments,
                test: Box::new(test),
            },
        }
    }

    /// Rule over three parameters, passed to `test` in the given order
    pub fn ternary<F>(name: &'static str, arguments: [&'static str; 3], test: F) -> Self
    where
        F: Fn(ParameterValue, ParameterValue, ParameterValue) -> bool + Send + Sync + 'static,
    {
        Self {
            name,
            predicate: Predicate::Ternary {
                arguments,
                test: Box::new(test),
            },
        }
    }

    /// Rule name, used in logs and errors
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Argument names in calling order
    pub fn arguments(&self) -> &[&'static str] {
        self.predicate.arguments()
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("arguments", &self.arguments())
            .finish()
    }
}
