//! Construct, parse, render, and evaluate [propositional logic] formulas over named boolean
//! variables.
//!
//! A [`Formula`] is an immutable tree built from six node kinds: a variable at each leaf and the
//! connectives not, and, or, implies, and if-and-only-if at the interior nodes. Formulas can be
//! composed programmatically or parsed from a textual notation, and every formula renders back
//! to a canonical fully-parenthesized form that re-parses to the same tree.
//!
//! [propositional logic]: https://en.wikipedia.org/wiki/Propositional_calculus
//!
//! # Examples
//!
//! Formulas are composed from atomic variables with methods and operators:
//!
//! ```rust
//! use proplogic::Formula;
//!
//! let p = Formula::atomic("p");
//! let q = Formula::atomic("q");
//!
//! // ((p -> q) & p) -> q, better known as modus ponens.
//! let formula = (p.clone().implies(q.clone()) & p).implies(q);
//!
//! assert_eq!(formula.to_string(), "(((p -> q) & p) -> q)");
//! ```
//!
//! The same formula can be parsed from its textual notation:
//!
//! ```rust
//! use proplogic::{parse_formula, Formula};
//!
//! let p = Formula::atomic("p");
//! let q = Formula::atomic("q");
//!
//! let formula = parse_formula("(p -> q) & p -> q").unwrap();
//!
//! assert_eq!(formula, (p.clone().implies(q.clone()) & p).implies(q));
//! ```
//!
//! Evaluating a formula requires an interpretation, a mapping from variable names to truth
//! values. Standard maps work, as does the [`interpretation!`] macro for inline assignments:
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use proplogic::{interpretation, parse_formula};
//!
//! let formula = parse_formula("p & ~q").unwrap();
//!
//! let from_map = formula.interpret(&HashMap::from([("p", true), ("q", false)]));
//! let from_macro = formula.interpret(&interpretation! { p: true, q: false });
//!
//! assert_eq!(from_map, Ok(true));
//! assert_eq!(from_map, from_macro);
//! ```
//!
//! Evaluation short-circuits like the native boolean operators, and fails cleanly when a
//! variable it actually needs has no assignment:
//!
//! ```rust
//! use proplogic::{interpretation, parse_formula, EvalError};
//!
//! let formula = parse_formula("p -> q").unwrap();
//!
//! // A false antecedent decides the implication without looking at "q".
//! assert_eq!(formula.interpret(&interpretation! { p: false }), Ok(true));
//!
//! // A true antecedent needs "q", which is unassigned.
//! assert_eq!(
//!     formula.interpret(&interpretation! { p: true }),
//!     Err(EvalError::MissingVariable("q".to_string())),
//! );
//! ```

extern crate proplogic_core as core;

#[doc(inline)]
pub use core::formula;

#[doc(inline)]
pub use core::{atomics, Formula};

#[doc(inline)]
pub use core::interpretation;

#[doc(inline)]
pub use core::{EvalError, Interpretation};

#[cfg(feature = "parser")]
#[doc(inline)]
pub use proplogic_parser::{
    parse_formula,
    parse_formula_list,
    LexError,
    Lexer,
    ParseError,
    Token,
    TokenKind,
};
