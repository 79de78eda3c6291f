//! `Accept-Charset` negotiation

use crate::axis::Axis;
use crate::rank::{Preference, collect_preferences, negotiate};
use crate::token::{Token, parse_clause};

/// Parses an `Accept-Charset` value into preferences in header order
///
/// Malformed clauses are skipped; an empty value yields no preferences.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::parse_accept_charset;
///
/// let preferences = parse_accept_charset("utf-8, iso-8859-1;q=0.5, koi8-r;q=oops");
/// assert_eq!(preferences.len(), 2);
/// assert_eq!(preferences[1].pattern.as_str(), "iso-8859-1");
/// assert_eq!(preferences[1].quality.millis(), 500);
/// ```
pub fn parse_accept_charset(header: &str) -> Vec<Preference<Token>> {
	collect_preferences(Axis::Charset, header.split(','), parse_clause)
}

/// Charsets acceptable to the client, most preferred first
///
/// With `available`, returns the acceptable entries of that list in the
/// caller's casing. Without it, returns the client's own charsets. A missing
/// header accepts every charset.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::preferred_charsets;
///
/// let accept = Some("utf-8;q=0.8, iso-8859-1");
///
/// assert_eq!(preferred_charsets(accept, None::<&[&str]>), ["iso-8859-1", "utf-8"]);
/// assert_eq!(
///     preferred_charsets(accept, Some(&["UTF-8", "ISO-8859-1", "KOI8-R"][..])),
///     ["ISO-8859-1", "UTF-8"],
/// );
/// assert_eq!(preferred_charsets(None, None::<&[&str]>), ["*"]);
/// ```
pub fn preferred_charsets<S: AsRef<str>>(accept: Option<&str>, available: Option<&[S]>) -> Vec<String> {
	let header = accept.unwrap_or(Axis::Charset.default_preference());
	negotiate(&parse_accept_charset(header), available)
}
