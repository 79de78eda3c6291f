//! Simple `token[;q=weight]` preferences
//!
//! Shared by `Accept-Charset` and `Accept-Encoding`, whose clauses are a bare
//! token or the `*` wildcard followed by optional parameters. Only the `q`
//! parameter is meaningful; others are ignored.

use crate::error::{ParseError, ParseResult};
use crate::quality::Quality;
use crate::rank::Pattern;
use std::fmt;
use std::str::FromStr;

/// A charset or content-coding named by the client, or `*`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

/// How closely a token preference matched a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenSpecificity {
	/// Matched through `*`
	Wildcard,
	/// Matched by name
	Exact,
}

impl Token {
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_wildcard(&self) -> bool {
		self.0 == "*"
	}
}

impl Pattern for Token {
	type Candidate = Token;
	type Specificity = TokenSpecificity;

	fn parse_candidate(raw: &str) -> Option<Token> {
		Some(Token::new(raw))
	}

	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::{Pattern, Token, TokenSpecificity};
	///
	/// let utf8 = Token::new("UTF-8");
	/// assert_eq!(utf8.specificity(&Token::new("utf-8")), Some(TokenSpecificity::Exact));
	/// assert_eq!(Token::new("*").specificity(&utf8), Some(TokenSpecificity::Wildcard));
	/// assert_eq!(utf8.specificity(&Token::new("latin1")), None);
	/// ```
	fn specificity(&self, candidate: &Token) -> Option<TokenSpecificity> {
		if self.0.eq_ignore_ascii_case(&candidate.0) {
			Some(TokenSpecificity::Exact)
		} else if self.is_wildcard() {
			Some(TokenSpecificity::Wildcard)
		} else {
			None
		}
	}

	fn render(&self) -> String {
		self.0.clone()
	}
}

impl FromStr for Token {
	type Err = ParseError;

	fn from_str(s: &str) -> ParseResult<Self> {
		parse_clause(s).map(|(token, _)| token)
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Splits one clause into its value and quality
///
/// The value must be a single non-empty run without whitespace. The first
/// `q` parameter sets the quality; a malformed one rejects the clause.
pub(crate) fn split_clause(segment: &str) -> ParseResult<(&str, Quality)> {
	let mut pieces = segment.split(';');
	let value = pieces.next().unwrap_or_default().trim();

	if value.is_empty() {
		return Err(ParseError::EmptyValue);
	}
	if value.contains(char::is_whitespace) {
		return Err(ParseError::InvalidToken(value.to_string()));
	}

	let quality = pieces
		.filter_map(|piece| piece.split_once('='))
		.find(|(name, _)| name.trim().eq_ignore_ascii_case("q"))
		.map(|(_, weight)| weight.parse::<Quality>())
		.transpose()?
		.unwrap_or(Quality::ONE);

	Ok((value, quality))
}

pub(crate) fn parse_clause(segment: &str) -> ParseResult<(Token, Quality)> {
	split_clause(segment).map(|(value, quality)| (Token::new(value), quality))
}
