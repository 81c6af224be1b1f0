//! Propositional logic formulas over named boolean variables.
//!
//! A [`Formula`] is an immutable tree in which every leaf names a boolean variable and every
//! interior node applies a logical connective to its children. Formulas can be constructed
//! directly from the enum variants, but the more convenient options are the composition methods
//! and operators, which combine existing formulas into larger ones:
//!
//! ```rust
//! use proplogic::Formula;
//!
//! let p = Formula::atomic("p");
//! let q = Formula::atomic("q");
//!
//! let f1 = p.clone() & q.clone();        // (p & q)
//! let f2 = !p.clone() | q.clone();       // (~p | q)
//! let f3 = p.implies(q);                 // (p -> q)
//! ```
//!
//! Once constructed, a formula is never mutated. Every composition allocates new nodes, so a
//! formula can be shared, rendered, and evaluated freely. Rendering via [`Display`] produces the
//! canonical textual form, in which every binary connective is parenthesized and negation is not:
//!
//! ```rust
//! use proplogic::Formula;
//!
//! let p = Formula::atomic("p");
//! let q = Formula::atomic("q");
//! let formula = !(p & q);
//!
//! assert_eq!(formula.to_string(), "~(p & q)");
//! ```
//!
//! Evaluation against a set of variable assignments is covered by the
//! [`interpretation`](crate::interpretation) module.

use std::fmt::{self, Display, Formatter};
use std::ops;

/// A propositional logic formula over named boolean variables.
///
/// Equality and hashing are structural: two formulas are equal when they have the same connective
/// at every position and the same variable names at the leaves. No semantic equivalences are
/// applied, so `p & q` and `q & p` are distinct values even though they denote the same truth
/// function.
///
/// Variable names are opaque. The parser only ever produces names matching
/// `[A-Za-z_][A-Za-z0-9_]*`, but a formula constructed programmatically may hold any string,
/// including the empty string. Such names render verbatim and evaluate normally; they simply
/// cannot be recovered by parsing the rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    /// A single named variable.
    Atomic(String),

    /// The negation of a formula, rendered `~x`.
    Not(Box<Formula>),

    /// The conjunction of two formulas, rendered `(l & r)`.
    And(Box<Formula>, Box<Formula>),

    /// The disjunction of two formulas, rendered `(l | r)`.
    Or(Box<Formula>, Box<Formula>),

    /// An implication from an antecedent to a consequent, rendered `(l -> r)`.
    Implies(Box<Formula>, Box<Formula>),

    /// A biconditional between two formulas, rendered `(l <-> r)`.
    Iff(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Create a formula consisting of a single named variable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use proplogic::Formula;
    ///
    /// let p = Formula::atomic("p");
    /// assert_eq!(p, Formula::Atomic("p".to_string()));
    /// ```
    pub fn atomic(name: impl Into<String>) -> Self {
        Self::Atomic(name.into())
    }

    /// Combine two formulas into a conjunction.
    ///
    /// This operation is pure: both operands are consumed and a new node is allocated. The
    /// [`BitAnd`](ops::BitAnd) operator is shorthand for this method.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use proplogic::Formula;
    ///
    /// let p = Formula::atomic("p");
    /// let q = Formula::atomic("q");
    ///
    /// assert_eq!(p.clone().and(q.clone()), p & q);
    /// ```
    pub fn and(self, other: Self) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    /// Combine two formulas into a disjunction.
    ///
    /// The [`BitOr`](ops::BitOr) operator is shorthand for this method.
    pub fn or(self, other: Self) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    /// Combine two formulas into an implication with `self` as the antecedent.
    pub fn implies(self, other: Self) -> Self {
        Self::Implies(Box::new(self), Box::new(other))
    }

    /// Combine two formulas into a biconditional.
    pub fn iff(self, other: Self) -> Self {
        Self::Iff(Box::new(self), Box::new(other))
    }
}

impl ops::Not for Formula {
    type Output = Formula;

    fn not(self) -> Self::Output {
        Formula::Not(Box::new(self))
    }
}

impl ops::BitAnd for Formula {
    type Output = Formula;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl ops::BitOr for Formula {
    type Output = Formula;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl Display for Formula {
    /// Render the canonical textual form of the formula.
    ///
    /// Every binary connective wraps itself in parentheses with single spaces around the
    /// operator. Negation never adds parentheses of its own; when its operand is a binary node
    /// the operand's parentheses already delimit it. Atomic variables render as their name,
    /// verbatim.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atomic(name) => f.write_str(name),
            Self::Not(operand) => write!(f, "~{operand}"),
            Self::And(left, right) => write!(f, "({left} & {right})"),
            Self::Or(left, right) => write!(f, "({left} | {right})"),
            Self::Implies(left, right) => write!(f, "({left} -> {right})"),
            Self::Iff(left, right) => write!(f, "({left} <-> {right})"),
        }
    }
}

/// Create one [`Atomic`](Formula::Atomic) formula for each whitespace-separated word.
///
/// This is a convenience for introducing several variables at once. Words are taken verbatim, so
/// any run of non-whitespace characters becomes a variable name, whether or not the parser would
/// accept it. An empty or all-whitespace string yields no formulas.
///
/// # Examples
///
/// ```rust
/// use proplogic::{atomics, Formula};
///
/// let vars = atomics("p q r");
///
/// assert_eq!(
///     vars,
///     vec![
///         Formula::atomic("p"),
///         Formula::atomic("q"),
///         Formula::atomic("r"),
///     ],
/// );
/// ```
pub fn atomics(text: &str) -> Vec<Formula> {
    text.split_whitespace().map(Formula::atomic).collect()
}
