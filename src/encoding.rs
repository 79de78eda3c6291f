//! `Accept-Encoding` negotiation
//!
//! Content-codings follow the simple token grammar with one addition:
//! `identity` is acceptable unless the client rules it out, either with an
//! explicit `identity;q=0` or with `*;q=0` and no `identity` clause.

use crate::axis::Axis;
use crate::quality::Quality;
use crate::rank::{Pattern, Preference, collect_preferences, negotiate};
use crate::token::{Token, parse_clause};

/// The content-coding meaning "no transformation"
pub const IDENTITY: &str = "identity";

/// Parses an `Accept-Encoding` value, adding the implicit `identity` entry
///
/// When no clause covers `identity` (neither `identity` itself nor `*`), an
/// `identity` preference is appended after the last clause, weighted with the
/// lowest non-zero quality in the header, or `1` when there is none.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::parse_accept_encoding;
///
/// let preferences = parse_accept_encoding("gzip;q=0.8, br");
/// let last = preferences.last().unwrap();
/// assert_eq!(last.pattern.as_str(), "identity");
/// assert_eq!(last.quality.millis(), 800);
/// assert_eq!(last.order, 2);
///
/// // `*` already covers identity
/// assert_eq!(parse_accept_encoding("*;q=0").len(), 1);
/// ```
pub fn parse_accept_encoding(header: &str) -> Vec<Preference<Token>> {
	let segments: Vec<&str> = header.split(',').collect();
	let mut preferences = collect_preferences(Axis::Encoding, segments.iter().copied(), parse_clause);

	let identity = Token::new(IDENTITY);
	let covered = preferences
		.iter()
		.any(|preference| preference.pattern.specificity(&identity).is_some());

	if !covered {
		let quality = preferences
			.iter()
			.map(|preference| preference.quality)
			.filter(|quality| !quality.is_zero())
			.min()
			.unwrap_or(Quality::ONE);
		preferences.push(Preference::new(identity, quality, segments.len()));
	}

	preferences
}

/// Content-codings acceptable to the client, most preferred first
///
/// A missing header admits only `identity`.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::preferred_encodings;
///
/// assert_eq!(preferred_encodings(Some("gzip, deflate"), None::<&[&str]>), ["gzip", "deflate", "identity"]);
/// assert_eq!(
///     preferred_encodings(Some("*, gzip;q=0"), Some(&["gzip", "compress"][..])),
///     ["compress"],
/// );
/// assert_eq!(preferred_encodings(None, Some(&["gzip", "identity"][..])), ["identity"]);
/// ```
pub fn preferred_encodings<S: AsRef<str>>(accept: Option<&str>, available: Option<&[S]>) -> Vec<String> {
	let header = accept.unwrap_or(Axis::Encoding.default_preference());
	negotiate(&parse_accept_encoding(header), available)
}
