//! `Accept-Language` negotiation
//!
//! A language range is a primary tag optionally followed by `-` and further
//! subtags (`en`, `en-US`, `zh-Hant-TW`) or the `*` wildcard. Besides exact
//! matches, a range also covers candidates sharing its primary tag:
//!
//! - `en` accepts `en-US`, below an exact `en-US` preference;
//! - `en-US` accepts `en`, above a bare `en` reached through a subtag.

use crate::axis::Axis;
use crate::error::{ParseError, ParseResult};
use crate::quality::Quality;
use crate::rank::{Preference, Pattern, accepted, collect_preferences, negotiate};
use crate::token::split_clause;
use std::fmt;
use std::str::FromStr;

/// A language tag or range such as `en`, `en-US` or `*`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageRange {
	tag: String,
	primary_len: usize,
}

/// How closely a language preference matched a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LanguageSpecificity {
	/// Matched through `*`
	Wildcard,
	/// The candidate narrows the preference (`en` accepting `en-US`)
	Subtag,
	/// The candidate is the preference's primary tag (`en-US` accepting `en`)
	Primary,
	/// Same tag
	Exact,
}

impl LanguageRange {
	/// Parses a bare tag without parameters
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::LanguageRange;
	///
	/// let range = LanguageRange::parse_tag("en-US").unwrap();
	/// assert_eq!(range.primary(), "en");
	/// assert_eq!(range.subtags(), Some("US"));
	///
	/// assert!(LanguageRange::parse_tag("-US").is_err());
	/// assert!(LanguageRange::parse_tag("en-").is_err());
	/// ```
	pub fn parse_tag(tag: &str) -> ParseResult<Self> {
		let tag = tag.trim();
		if tag.is_empty() {
			return Err(ParseError::EmptyValue);
		}

		let invalid = || ParseError::InvalidLanguageRange(tag.to_string());
		if tag.contains(|c: char| c.is_whitespace() || c == ';') {
			return Err(invalid());
		}

		let primary_len = match tag.split_once('-') {
			Some(("", _)) | Some((_, "")) => return Err(invalid()),
			Some((primary, _)) => primary.len(),
			None => tag.len(),
		};

		Ok(Self {
			tag: tag.to_string(),
			primary_len,
		})
	}

	/// Full tag as written
	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// Tag before the first `-`
	pub fn primary(&self) -> &str {
		&self.tag[..self.primary_len]
	}

	/// Everything after the first `-`, if present
	pub fn subtags(&self) -> Option<&str> {
		self.tag.get(self.primary_len + 1..)
	}

	pub fn is_wildcard(&self) -> bool {
		self.tag == "*"
	}
}

impl Pattern for LanguageRange {
	type Candidate = LanguageRange;
	type Specificity = LanguageSpecificity;

	fn parse_candidate(raw: &str) -> Option<LanguageRange> {
		LanguageRange::parse_tag(raw).ok()
	}

	fn specificity(&self, candidate: &LanguageRange) -> Option<LanguageSpecificity> {
		if self.tag.eq_ignore_ascii_case(&candidate.tag) {
			Some(LanguageSpecificity::Exact)
		} else if self.primary().eq_ignore_ascii_case(&candidate.tag) {
			Some(LanguageSpecificity::Primary)
		} else if self.tag.eq_ignore_ascii_case(candidate.primary()) {
			Some(LanguageSpecificity::Subtag)
		} else if self.is_wildcard() {
			Some(LanguageSpecificity::Wildcard)
		} else {
			None
		}
	}

	fn render(&self) -> String {
		self.tag.clone()
	}
}

impl FromStr for LanguageRange {
	type Err = ParseError;

	/// Parses a clause such as `en-GB;q=0.7`, ignoring the parameters
	fn from_str(s: &str) -> ParseResult<Self> {
		parse_clause(s).map(|(range, _)| range)
	}
}

impl fmt::Display for LanguageRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.tag)
	}
}

fn parse_clause(segment: &str) -> ParseResult<(LanguageRange, Quality)> {
	let (tag, quality) = split_clause(segment)?;
	Ok((LanguageRange::parse_tag(tag)?, quality))
}

/// Parses an `Accept-Language` value into preferences in header order
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::parse_accept_language;
///
/// let preferences = parse_accept_language("en-US, en;q=0.8, *;q=0.1");
/// assert_eq!(preferences.len(), 3);
/// assert_eq!(preferences[0].pattern.primary(), "en");
/// assert!(preferences[2].pattern.is_wildcard());
/// ```
pub fn parse_accept_language(header: &str) -> Vec<Preference<LanguageRange>> {
	collect_preferences(Axis::Language, header.split(','), parse_clause)
}

/// Languages acceptable to the client, most preferred first
///
/// Without `available`, each tag is reported once, at the position of its
/// highest-ranked clause, so `en;q=0.9, es;q=0.8, en;q=0.7` yields
/// `["en", "es"]` just as ranking `["es", "en"]` would.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::preferred_languages;
///
/// let accept = Some("en;q=0.9, es;q=0.8, en;q=0.7");
///
/// assert_eq!(preferred_languages(accept, None::<&[&str]>), ["en", "es"]);
/// assert_eq!(preferred_languages(accept, Some(&["es", "en"][..])), ["en", "es"]);
/// assert_eq!(preferred_languages(Some("en"), Some(&["en-US", "fr"][..])), ["en-US"]);
/// ```
pub fn preferred_languages<S: AsRef<str>>(accept: Option<&str>, available: Option<&[S]>) -> Vec<String> {
	let header = accept.unwrap_or(Axis::Language.default_preference());
	let preferences = parse_accept_language(header);

	if available.is_some() {
		return negotiate(&preferences, available);
	}

	let mut seen: Vec<&str> = Vec::new();
	accepted(&preferences)
		.into_iter()
		.filter(|preference| {
			let tag = preference.pattern.tag();
			if seen.iter().any(|other| other.eq_ignore_ascii_case(tag)) {
				false
			} else {
				seen.push(tag);
				true
			}
		})
		.map(|preference| preference.pattern.render())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rank::NO_CANDIDATES;
	use rstest::rstest;

	fn range(tag: &str) -> LanguageRange {
		LanguageRange::parse_tag(tag).unwrap()
	}

	#[rstest]
	#[case("en", "en", None)]
	#[case("en-US", "en", Some("US"))]
	#[case("zh-Hant-TW", "zh", Some("Hant-TW"))]
	#[case("*", "*", None)]
	fn test_parse_tag(#[case] input: &str, #[case] primary: &str, #[case] subtags: Option<&str>) {
		// Act
		let parsed = range(input);

		// Assert
		assert_eq!(parsed.tag(), input);
		assert_eq!(parsed.primary(), primary);
		assert_eq!(parsed.subtags(), subtags);
	}

	#[rstest]
	#[case("-US")]
	#[case("en-")]
	#[case("en US")]
	fn test_parse_tag_rejects_malformed(#[case] input: &str) {
		assert!(matches!(
			LanguageRange::parse_tag(input),
			Err(ParseError::InvalidLanguageRange(_))
		));
	}

	#[rstest]
	#[case("en-US", "en-us", Some(LanguageSpecificity::Exact))]
	#[case("en-US", "en", Some(LanguageSpecificity::Primary))]
	#[case("en", "en-GB", Some(LanguageSpecificity::Subtag))]
	#[case("*", "fr", Some(LanguageSpecificity::Wildcard))]
	#[case("en-US", "en-GB", None)]
	#[case("en", "es", None)]
	fn test_specificity(
		#[case] preference: &str,
		#[case] candidate: &str,
		#[case] expected: Option<LanguageSpecificity>,
	) {
		assert_eq!(range(preference).specificity(&range(candidate)), expected);
	}

	#[rstest]
	fn test_specificity_ordering() {
		assert!(LanguageSpecificity::Wildcard < LanguageSpecificity::Subtag);
		assert!(LanguageSpecificity::Subtag < LanguageSpecificity::Primary);
		assert!(LanguageSpecificity::Primary < LanguageSpecificity::Exact);
	}

	#[rstest]
	fn test_from_str_drops_parameters() {
		let parsed: LanguageRange = "en-GB;q=0.7".parse().unwrap();
		assert_eq!(parsed.to_string(), "en-GB");
	}

	#[rstest]
	fn test_duplicates_collapse_case_insensitively() {
		assert_eq!(
			preferred_languages(Some("en-US;q=0.5, EN-us, fr;q=0.7"), NO_CANDIDATES),
			["EN-us", "fr"]
		);
	}

	#[rstest]
	fn test_rejected_duplicate_does_not_hide_accepted_one() {
		assert_eq!(preferred_languages(Some("en;q=0, en;q=0.5"), NO_CANDIDATES), ["en"]);
		assert_eq!(
			preferred_languages(Some("en;q=0, en;q=0.5"), Some(&["en"][..])),
			["en"]
		);
	}
}
