//! Recursive-descent parsing of the formula grammar.
//!
//! The grammar is LL(1) and is parsed top-down with a single token of lookahead:
//!
//! ```text
//! biconditional ::= implication ("<->" implication)*
//! implication   ::= disjunction ("->" disjunction)*
//! disjunction   ::= conjunction ("|" conjunction)*
//! conjunction   ::= negation ("&" negation)*
//! negation      ::= "~" negation | primary
//! primary       ::= IDENT | "(" biconditional ")"
//! ```
//!
//! Precedence from tightest to loosest binding is `~`, `&`, `|`, `->`, `<->`. The `->` and `<->`
//! operators associate to the right, which the parser implements by recursing into the same rule
//! for the remainder of the chain. The `&` and `|` operators associate to the left and are folded
//! iteratively, nesting the earliest operands deepest.

use proplogic_core::Formula;
use thiserror::Error;

use crate::lexer::{LexError, Lexer, Token, TokenKind};

/// The error type produced when parsing formula text.
///
/// A failed parse never returns a partial formula; the text either parses completely or the
/// first failure is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The tokenizer rejected the input text.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A token appeared in a position the grammar does not allow.
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),

    /// The token stream ended where the grammar requires another token.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}

/// Parser state: the token stream plus one token of lookahead.
struct Parser<'a> {
    tokens: Lexer<'a>,
    current: Option<Token>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Result<Self, ParseError> {
        let mut tokens = Lexer::new(text);
        let current = tokens.next().transpose()?;

        Ok(Self { tokens, current })
    }

    /// Consume the current token, pulling the next one into the lookahead.
    fn bump(&mut self) -> Result<Option<Token>, ParseError> {
        let token = self.current.take();
        self.current = self.tokens.next().transpose()?;

        Ok(token)
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.bump().map(|_| ())
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current.as_ref().map(|token| token.kind)
    }

    fn biconditional(&mut self) -> Result<Formula, ParseError> {
        let left = self.implication()?;

        if self.current_kind() == Some(TokenKind::Iff) {
            self.advance()?;
            let right = self.biconditional()?;

            return Ok(left.iff(right));
        }

        Ok(left)
    }

    fn implication(&mut self) -> Result<Formula, ParseError> {
        let left = self.disjunction()?;

        if self.current_kind() == Some(TokenKind::Implies) {
            self.advance()?;
            let right = self.implication()?;

            return Ok(left.implies(right));
        }

        Ok(left)
    }

    fn disjunction(&mut self) -> Result<Formula, ParseError> {
        let mut formula = self.conjunction()?;

        while self.current_kind() == Some(TokenKind::Or) {
            self.advance()?;
            formula = formula.or(self.conjunction()?);
        }

        Ok(formula)
    }

    fn conjunction(&mut self) -> Result<Formula, ParseError> {
        let mut formula = self.negation()?;

        while self.current_kind() == Some(TokenKind::And) {
            self.advance()?;
            formula = formula.and(self.negation()?);
        }

        Ok(formula)
    }

    fn negation(&mut self) -> Result<Formula, ParseError> {
        if self.current_kind() == Some(TokenKind::Not) {
            self.advance()?;

            return Ok(!self.negation()?);
        }

        self.primary()
    }

    fn primary(&mut self) -> Result<Formula, ParseError> {
        let Some(token) = self.bump()? else {
            return Err(ParseError::UnexpectedEndOfInput);
        };

        match token.kind {
            TokenKind::Ident => Ok(Formula::Atomic(token.lexeme)),
            TokenKind::LParen => {
                let inner = self.biconditional()?;

                match self.bump()? {
                    Some(token) if token.kind == TokenKind::RParen => Ok(inner),
                    Some(token) => Err(ParseError::UnexpectedToken(token.lexeme)),
                    None => Err(ParseError::UnexpectedEndOfInput),
                }
            }
            _ => Err(ParseError::UnexpectedToken(token.lexeme)),
        }
    }
}

/// Parse exactly one formula from the given text.
///
/// The entire input must be consumed. Trailing tokens after a complete formula, including a stray
/// closing parenthesis, are an error, as is input that ends before the formula is complete. An
/// empty or all-whitespace string produces no tokens and fails with
/// [`ParseError::UnexpectedEndOfInput`].
///
/// # Examples
///
/// ```rust
/// use proplogic::{parse_formula, Formula};
///
/// let p = Formula::atomic("p");
/// let q = Formula::atomic("q");
/// let r = Formula::atomic("r");
///
/// // "&" binds tighter than "|".
/// assert_eq!(parse_formula("p & q | r").unwrap(), (p.clone() & q.clone()) | r);
///
/// // Rendering is stable under re-parse.
/// let formula = p.implies(q);
/// assert_eq!(parse_formula(&formula.to_string()).unwrap(), formula);
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] when the text cannot be tokenized, when a token appears where the
/// grammar forbids it, or when the input ends early.
pub fn parse_formula(text: &str) -> Result<Formula, ParseError> {
    log::trace!("parsing formula from {text:?}");

    let mut parser = Parser::new(text)?;
    let formula = parser.biconditional()?;

    match parser.current {
        Some(token) => Err(ParseError::UnexpectedToken(token.lexeme)),
        None => {
            log::debug!("parsed formula {formula}");
            Ok(formula)
        }
    }
}

/// Parse a comma-separated sequence of formulas.
///
/// The text is split on every `,` and each piece is parsed independently with [`parse_formula`],
/// in left-to-right order. There is no escaping: a comma always separates formulas, so commas
/// cannot appear inside a formula. The first piece that fails to parse aborts the whole call and
/// its error is returned; no partial list is produced. An empty string splits into one empty
/// piece, which is not a valid formula, so the call fails.
///
/// # Examples
///
/// ```rust
/// use proplogic::{parse_formula_list, Formula};
///
/// let formulas = parse_formula_list("p, ~p, p -> q").unwrap();
///
/// let p = Formula::atomic("p");
/// let q = Formula::atomic("q");
///
/// assert_eq!(formulas, vec![p.clone(), !p.clone(), p.implies(q)]);
/// ```
pub fn parse_formula_list(text: &str) -> Result<Vec<Formula>, ParseError> {
    text.split(',').map(parse_formula).collect()
}
