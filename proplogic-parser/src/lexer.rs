//! Lexical analysis for the textual formula notation.
//!
//! The [`Lexer`] converts raw text into a sequence of [`Token`]s, skipping whitespace and
//! recognizing the multi-character operators `->` and `<->` greedily. The token language is:
//!
//! | Token                   | Text                     |
//! | ----------------------- | ------------------------ |
//! | [`Ident`](TokenKind)    | `[A-Za-z_][A-Za-z0-9_]*` |
//! | [`Not`](TokenKind)      | `~`                      |
//! | [`And`](TokenKind)      | `&`                      |
//! | [`Or`](TokenKind)       | `\|`                     |
//! | [`Implies`](TokenKind)  | `->`                     |
//! | [`Iff`](TokenKind)      | `<->`                    |
//! | [`LParen`](TokenKind)   | `(`                      |
//! | [`RParen`](TokenKind)   | `)`                      |
//!
//! Whitespace (space, tab, form feed, carriage return, newline) separates tokens and is never
//! emitted. The lexer is a single-pass iterator: tokens are produced on demand and the sequence
//! cannot be restarted.

use std::fmt::{self, Display, Formatter};
use std::str::Chars;

use thiserror::Error;

/// The set of token categories produced by the [`Lexer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A variable identifier.
    Ident,

    /// The negation operator `~`.
    Not,

    /// The conjunction operator `&`.
    And,

    /// The disjunction operator `|`.
    Or,

    /// The implication operator `->`.
    Implies,

    /// The biconditional operator `<->`.
    Iff,

    /// An opening parenthesis.
    LParen,

    /// A closing parenthesis.
    RParen,
}

/// A single token together with its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The category of the token.
    pub kind: TokenKind,

    /// The text the token was scanned from. For operator and parenthesis tokens this is the
    /// operator text itself; for identifiers it is the full identifier run.
    pub lexeme: String,
}

impl Token {
    fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexeme)
    }
}

/// The error type produced when tokenizing formula text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character matched no token rule.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// The input ended in the middle of a multi-character operator.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0C' | '\r' | '\n')
}

/// A single-pass tokenizer over formula text.
///
/// The lexer holds a one-character lookahead over the input and produces tokens through its
/// [`Iterator`] implementation. Reaching the end of the input ends the iteration; it is only an
/// error when it happens inside a multi-character operator.
///
/// # Examples
///
/// ```rust
/// use proplogic_parser::{Lexer, TokenKind};
///
/// let kinds = Lexer::new("p -> ~q")
///     .map(|token| token.map(|token| token.kind))
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
///
/// assert_eq!(
///     kinds,
///     vec![TokenKind::Ident, TokenKind::Implies, TokenKind::Not, TokenKind::Ident],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    chars: Chars<'a>,
    current: Option<char>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over the given text.
    pub fn new(text: &'a str) -> Self {
        let mut chars = text.chars();
        let current = chars.next();

        Self { chars, current }
    }

    /// Consume the current character, pulling the next one into the lookahead.
    fn advance(&mut self) -> Option<char> {
        std::mem::replace(&mut self.current, self.chars.next())
    }

    /// Consume the next character, which must be `expected`.
    fn accept(&mut self, expected: char) -> Result<(), LexError> {
        match self.advance() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(LexError::UnexpectedCharacter(c)),
            None => Err(LexError::UnexpectedEndOfInput),
        }
    }

    /// Scan the remainder of an identifier beginning with `first`.
    fn ident(&mut self, first: char) -> Token {
        let mut lexeme = String::from(first);

        while let Some(c) = self.current.filter(|&c| is_ident_char(c)) {
            lexeme.push(c);
            self.advance();
        }

        Token::new(TokenKind::Ident, lexeme)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let c = self.advance()?;

            let token = match c {
                '~' => Token::new(TokenKind::Not, "~"),
                '&' => Token::new(TokenKind::And, "&"),
                '|' => Token::new(TokenKind::Or, "|"),
                '(' => Token::new(TokenKind::LParen, "("),
                ')' => Token::new(TokenKind::RParen, ")"),
                '-' => match self.accept('>') {
                    Ok(()) => Token::new(TokenKind::Implies, "->"),
                    Err(err) => return Some(Err(err)),
                },
                '<' => match self.accept('-').and_then(|()| self.accept('>')) {
                    Ok(()) => Token::new(TokenKind::Iff, "<->"),
                    Err(err) => return Some(Err(err)),
                },
                c if is_space(c) => continue,
                c if is_ident_start(c) => self.ident(c),
                c => return Some(Err(LexError::UnexpectedCharacter(c))),
            };

            return Some(Ok(token));
        }
    }
}
