//! Evaluation of formulas against variable assignments.
//!
//! An interpretation maps variable names to truth values. It is supplied by the caller for a
//! single call to [`Formula::interpret`] and is never stored on the formula, so the same formula
//! can be evaluated against any number of interpretations. Any type implementing the
//! [`Interpretation`] trait can be used, which includes the standard maps:
//!
//! ```rust
//! use std::collections::{BTreeMap, HashMap};
//!
//! use proplogic::Formula;
//!
//! let formula = Formula::atomic("p") & Formula::atomic("q");
//!
//! let i1 = HashMap::from([("p", true), ("q", false)]);
//! let i2 = BTreeMap::from([("p", true), ("q", false)]);
//!
//! assert_eq!(formula.interpret(&i1), Ok(false));
//! assert_eq!(formula.interpret(&i2), Ok(false));
//! ```
//!
//! For assignments written inline, the [`interpretation!`](crate::interpretation!) macro builds a
//! map from named boolean arguments:
//!
//! ```rust
//! use proplogic::{interpretation, Formula};
//!
//! let formula = Formula::atomic("p") & Formula::atomic("q");
//!
//! assert_eq!(formula.interpret(&interpretation! { p: true, q: false }), Ok(false));
//! ```
//!
//! Evaluation short-circuits the way the native boolean operators do. A conjunction with a false
//! left operand is false without the right operand ever being inspected, so a variable that only
//! appears on the short-circuited side does not need an assignment:
//!
//! ```rust
//! use proplogic::{interpretation, Formula};
//!
//! let formula = Formula::atomic("p") & Formula::atomic("q");
//!
//! // "q" has no assignment, but the conjunction is already decided.
//! assert_eq!(formula.interpret(&interpretation! { p: false }), Ok(false));
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use thiserror::Error;

use crate::formula::Formula;

/// A mapping from variable names to truth values.
///
/// Implementations report [`None`] for names they do not cover. Whether an uncovered name causes
/// an evaluation failure depends on whether the variable is actually needed; see
/// [`Formula::interpret`].
pub trait Interpretation {
    /// Return the truth value assigned to a name, if one exists.
    fn truth_value(&self, name: &str) -> Option<bool>;
}

impl<T> Interpretation for &T
where
    T: Interpretation + ?Sized,
{
    fn truth_value(&self, name: &str) -> Option<bool> {
        (**self).truth_value(name)
    }
}

impl<K> Interpretation for HashMap<K, bool>
where
    K: Borrow<str> + Eq + Hash,
{
    fn truth_value(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl<K> Interpretation for BTreeMap<K, bool>
where
    K: Borrow<str> + Ord,
{
    fn truth_value(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

/// The error type for evaluating a formula against an interpretation.
///
/// An evaluation failure is scoped to the single [`Formula::interpret`] call that produced it.
/// The formula itself is untouched and can be evaluated again with a different interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EvalError {
    /// A variable needed by the evaluation has no truth value in the interpretation.
    ///
    /// "Needed" accounts for short-circuiting: a variable whose subformula was never evaluated
    /// does not produce this error.
    #[error("no truth value for variable \"{0}\"")]
    MissingVariable(String),
}

impl Formula {
    /// Evaluate the formula against an interpretation, producing its truth value.
    ///
    /// The connectives short-circuit exactly like the native boolean operators. For a
    /// conjunction, a false left operand decides the result and the right operand is never
    /// evaluated; for a disjunction, a true left operand does the same; for an implication, a
    /// false antecedent makes the implication true without the consequent being evaluated. A
    /// biconditional always evaluates both operands.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::MissingVariable`] when a variable that the evaluation actually
    /// reaches has no truth value in the interpretation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use proplogic::{interpretation, EvalError, Formula};
    ///
    /// let formula = Formula::atomic("p").implies(Formula::atomic("q"));
    ///
    /// assert_eq!(formula.interpret(&interpretation! { p: false }), Ok(true));
    /// assert_eq!(formula.interpret(&interpretation! { p: true, q: false }), Ok(false));
    ///
    /// let missing = formula.interpret(&interpretation! { p: true });
    /// assert_eq!(missing, Err(EvalError::MissingVariable("q".to_string())));
    /// ```
    pub fn interpret<I>(&self, interpretation: &I) -> Result<bool, EvalError>
    where
        I: Interpretation + ?Sized,
    {
        match self {
            Self::Atomic(name) => interpretation
                .truth_value(name)
                .ok_or_else(|| EvalError::MissingVariable(name.clone())),
            Self::Not(operand) => operand.interpret(interpretation).map(|value| !value),
            Self::And(left, right) => {
                if left.interpret(interpretation)? {
                    right.interpret(interpretation)
                } else {
                    Ok(false)
                }
            }
            Self::Or(left, right) => {
                if left.interpret(interpretation)? {
                    Ok(true)
                } else {
                    right.interpret(interpretation)
                }
            }
            Self::Implies(antecedent, consequent) => {
                if antecedent.interpret(interpretation)? {
                    consequent.interpret(interpretation)
                } else {
                    Ok(true)
                }
            }
            Self::Iff(left, right) => {
                let left_value = left.interpret(interpretation)?;
                let right_value = right.interpret(interpretation)?;

                Ok(left_value == right_value)
            }
        }
    }
}

/// Create an interpretation from inline variable assignments.
///
/// The macro expands to a [`HashMap`] from names to truth values, so the result implements
/// [`Interpretation`] and evaluates identically to a map built by hand.
///
/// # Examples
///
/// ```rust
/// use proplogic::{interpretation, Formula};
///
/// let formula = Formula::atomic("p") | Formula::atomic("q");
/// let value = formula.interpret(&interpretation! { p: false, q: true });
///
/// assert_eq!(value, Ok(true));
/// ```
#[macro_export]
macro_rules! interpretation {
    ($($name:ident: $value:expr),* $(,)?) => {
        ::std::collections::HashMap::<&'static str, bool>::from([
            $((stringify!($name), $value)),*
        ])
    };
}
