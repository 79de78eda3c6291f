//! Errors raised while parsing a single preference clause
//!
//! Negotiation itself never fails: the header-level parsers log and drop any
//! clause that produces one of these errors. They are public so that callers
//! parsing individual values through [`std::str::FromStr`] can see why a value
//! was rejected.

/// Result alias for clause parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// Reasons a preference clause is rejected
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
	#[error("Preference value cannot be empty")]
	EmptyValue,

	#[error("Preference value must be a single token: '{0}'")]
	InvalidToken(String),

	#[error("Invalid quality value: '{0}' (expected 0 to 1 with at most 3 decimals)")]
	InvalidQuality(String),

	#[error("Invalid language range: '{0}'")]
	InvalidLanguageRange(String),

	#[error("Media range must have the form type/subtype: '{0}'")]
	InvalidMediaRange(String),
}
