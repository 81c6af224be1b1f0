//! Parse propositional logic formulas from their textual notation.
//!
//! # Notation
//!
//! Formulas are written over identifiers matching `[A-Za-z_][A-Za-z0-9_]*` with the operators
//! `~` (not), `&` (and), `|` (or), `->` (implies), and `<->` (if and only if), listed from
//! tightest to loosest binding. `->` and `<->` associate to the right, `&` and `|` to the left,
//! and parentheses group as usual. Whitespace is insignificant except as a token separator.
//!
//! # Parsing strings into formulas
//!
//! - A single formula: [`parse_formula`].
//! - A comma-separated batch of formulas: [`parse_formula_list`].
//!
//! ```rust
//! use proplogic_parser::{parse_formula, Formula};
//!
//! let formula = parse_formula("(p -> q) & p -> q").unwrap();
//!
//! let p = Formula::atomic("p");
//! let q = Formula::atomic("q");
//!
//! assert_eq!(formula, (p.implies(q.clone()) & Formula::atomic("p")).implies(q));
//! ```
//!
//! Parsed formulas render back to a canonical fully-parenthesized form which re-parses to the
//! same tree, so the notation doubles as a persistence format for formulas whose variables are
//! valid identifiers.

mod lexer;
mod parser;

// Re-export the core formula type so the parser crate is usable on its own.
pub use proplogic_core::Formula;

pub use lexer::{LexError, Lexer, Token, TokenKind};
pub use parser::{parse_formula, parse_formula_list, ParseError};
