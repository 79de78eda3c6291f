//! `Accept` negotiation
//!
//! Media ranges follow
//! `type "/" subtype *( ";" name [ "=" ( token / quoted-string ) ] )`.
//! Quoted parameter values may contain `,` and `;`, so clauses and parameters
//! are split with a small quote-aware state machine rather than a plain
//! `split`.

use crate::axis::Axis;
use crate::error::{ParseError, ParseResult};
use crate::quality::Quality;
use crate::rank::{Pattern, Preference, collect_preferences, negotiate};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A media type or range such as `text/html;level=1`, `image/*` or `*/*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRange {
	main_type: String,
	subtype: String,
	params: BTreeMap<String, ParamValue>,
}

/// A parameter value, remembering whether it was written as a quoted-string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ParamValue {
	value: String,
	quoted: bool,
}

/// How closely a media range matched a candidate
///
/// Compared field by field: an exact type beats `*/*`, an exact subtype beats
/// `type/*`, and among ranges with the same type and subtype the one
/// constraining more parameters wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MediaSpecificity {
	pub type_exact: bool,
	pub subtype_exact: bool,
	pub params: usize,
}

impl MediaRange {
	/// Type before the `/`
	pub fn main_type(&self) -> &str {
		&self.main_type
	}

	pub fn subtype(&self) -> &str {
		&self.subtype
	}

	/// `type/subtype` without parameters
	pub fn essence(&self) -> String {
		format!("{}/{}", self.main_type, self.subtype)
	}

	/// Value of a parameter, looked up by case-insensitive name
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::MediaRange;
	///
	/// let range: MediaRange = r#"text/html;Level=1;charset="utf-8""#.parse().unwrap();
	/// assert_eq!(range.param("level"), Some("1"));
	/// assert_eq!(range.param("CHARSET"), Some("utf-8"));
	/// assert_eq!(range.param("q"), None);
	/// ```
	pub fn param(&self, name: &str) -> Option<&str> {
		self.params
			.get(&name.to_ascii_lowercase())
			.map(|param| param.value.as_str())
	}

	/// Parameters ordered by lower-cased name
	pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
		self.params
			.iter()
			.map(|(name, param)| (name.as_str(), param.value.as_str()))
	}

	pub fn is_wildcard(&self) -> bool {
		self.main_type == "*" && self.subtype == "*"
	}
}

impl ParamValue {
	/// Strips surrounding quotes and resolves quoted-pair escapes
	fn parse(raw: &str) -> Self {
		let Some(inner) = raw
			.strip_prefix('"')
			.and_then(|rest| rest.strip_suffix('"'))
		else {
			return Self {
				value: raw.to_string(),
				quoted: false,
			};
		};

		let mut value = String::with_capacity(inner.len());
		let mut chars = inner.chars();
		while let Some(c) = chars.next() {
			match c {
				'\\' => value.extend(chars.next()),
				c => value.push(c),
			}
		}
		Self {
			value,
			quoted: true,
		}
	}

	/// Unquoted tokens compare case-insensitively, anything quoted exactly
	fn accepts(&self, candidate: &ParamValue) -> bool {
		if self.value == "*" {
			return true;
		}
		if self.quoted || candidate.quoted {
			self.value == candidate.value
		} else {
			self.value.eq_ignore_ascii_case(&candidate.value)
		}
	}
}

impl fmt::Display for ParamValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if !self.quoted {
			return f.write_str(&self.value);
		}
		f.write_str("\"")?;
		for c in self.value.chars() {
			if matches!(c, '"' | '\\') {
				f.write_str("\\")?;
			}
			write!(f, "{c}")?;
		}
		f.write_str("\"")
	}
}

impl Pattern for MediaRange {
	type Candidate = MediaRange;
	type Specificity = MediaSpecificity;

	fn parse_candidate(raw: &str) -> Option<MediaRange> {
		raw.parse().ok()
	}

	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::{MediaRange, Pattern};
	///
	/// let level1: MediaRange = "text/html;level=1".parse().unwrap();
	/// let candidate = |raw: &str| raw.parse::<MediaRange>().unwrap();
	///
	/// assert!(level1.specificity(&candidate("text/html;level=1;foo=bar")).is_some());
	/// assert!(level1.specificity(&candidate("text/html;level=2")).is_none());
	/// assert!(level1.specificity(&candidate("text/html")).is_none());
	/// ```
	fn specificity(&self, candidate: &MediaRange) -> Option<MediaSpecificity> {
		let type_exact = self.main_type.eq_ignore_ascii_case(&candidate.main_type);
		if !type_exact && self.main_type != "*" {
			return None;
		}

		let subtype_exact = self.subtype.eq_ignore_ascii_case(&candidate.subtype);
		if !subtype_exact && self.subtype != "*" {
			return None;
		}

		let missing = ParamValue::default();
		let satisfied = self.params.iter().all(|(name, expected)| {
			expected.accepts(candidate.params.get(name).unwrap_or(&missing))
		});
		if !satisfied {
			return None;
		}

		Some(MediaSpecificity {
			type_exact,
			subtype_exact,
			params: self.params.len(),
		})
	}

	fn render(&self) -> String {
		self.essence()
	}
}

impl FromStr for MediaRange {
	type Err = ParseError;

	/// Parses a single clause, ignoring its quality
	fn from_str(s: &str) -> ParseResult<Self> {
		parse_clause(s).map(|(range, _)| range)
	}
}

impl fmt::Display for MediaRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.main_type, self.subtype)?;
		for (name, param) in &self.params {
			write!(f, ";{name}={param}")?;
		}
		Ok(())
	}
}

#[derive(Debug, Clone, Copy)]
enum Scan {
	Outside,
	Quoted,
	Escaped,
}

/// Splits on `delimiter` wherever it is not inside a quoted-string
///
/// An unterminated quote extends to the end of the input.
pub(crate) fn split_unquoted(input: &str, delimiter: char) -> Vec<&str> {
	let mut parts = Vec::new();
	let mut start = 0;
	let mut state = Scan::Outside;

	for (i, c) in input.char_indices() {
		state = match (state, c) {
			(Scan::Outside, '"') => Scan::Quoted,
			(Scan::Outside, c) if c == delimiter => {
				parts.push(&input[start..i]);
				start = i + c.len_utf8();
				Scan::Outside
			}
			(Scan::Outside, _) => Scan::Outside,
			(Scan::Quoted, '"') => Scan::Outside,
			(Scan::Quoted, '\\') => Scan::Escaped,
			(Scan::Quoted, _) | (Scan::Escaped, _) => Scan::Quoted,
		};
	}

	parts.push(&input[start..]);
	parts
}

fn is_type_token(part: &str) -> bool {
	!part.is_empty() && !part.contains(|c: char| c.is_whitespace() || c == '/' || c == ';')
}

/// Parses one clause into a media range and its quality
///
/// The first `q` parameter is the quality. Parameters after it are kept only
/// when they do not repeat a name seen before it; later `q` parameters are
/// ignored.
fn parse_clause(segment: &str) -> ParseResult<(MediaRange, Quality)> {
	let mut pieces = split_unquoted(segment, ';').into_iter();
	let essence = pieces.next().unwrap_or_default().trim();
	if essence.is_empty() {
		return Err(ParseError::EmptyValue);
	}

	let (main_type, subtype) = essence
		.split_once('/')
		.filter(|(main_type, subtype)| is_type_token(main_type) && is_type_token(subtype))
		.ok_or_else(|| ParseError::InvalidMediaRange(essence.to_string()))?;

	let mut params = BTreeMap::new();
	let mut quality = None;

	for piece in pieces.map(str::trim).filter(|piece| !piece.is_empty()) {
		let (name, raw_value) = piece.split_once('=').unwrap_or((piece, ""));
		let name = name.trim().to_ascii_lowercase();
		let value = ParamValue::parse(raw_value.trim());

		if name == "q" {
			if quality.is_none() {
				quality = Some(value.value.parse::<Quality>()?);
			}
		} else if quality.is_some() {
			params.entry(name).or_insert(value);
		} else {
			params.insert(name, value);
		}
	}

	let range = MediaRange {
		main_type: main_type.to_string(),
		subtype: subtype.to_string(),
		params,
	};
	Ok((range, quality.unwrap_or(Quality::ONE)))
}

/// Parses an `Accept` value into preferences in header order
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::parse_accept;
///
/// let preferences = parse_accept(r#"text/html;foo="a,b;c", application/json;q=0.5, nonsense"#);
/// assert_eq!(preferences.len(), 2);
/// assert_eq!(preferences[0].pattern.param("foo"), Some("a,b;c"));
/// assert_eq!(preferences[1].pattern.essence(), "application/json");
/// assert_eq!(preferences[1].order, 1);
/// ```
pub fn parse_accept(header: &str) -> Vec<Preference<MediaRange>> {
	collect_preferences(Axis::MediaType, split_unquoted(header, ','), parse_clause)
}

/// Media types acceptable to the client, most preferred first
///
/// Without `available`, reports the client's ranges as `type/subtype`.
/// Candidates that are not of the form `type/subtype` never match.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::preferred_media_types;
///
/// let accept = Some("text/*, text/plain;q=0.5");
///
/// assert_eq!(
///     preferred_media_types(accept, Some(&["text/html", "text/plain", "text/xml"][..])),
///     ["text/html", "text/xml", "text/plain"],
/// );
/// assert_eq!(preferred_media_types(None, None::<&[&str]>), ["*/*"]);
/// ```
pub fn preferred_media_types<S: AsRef<str>>(accept: Option<&str>, available: Option<&[S]>) -> Vec<String> {
	let header = accept.unwrap_or(Axis::MediaType.default_preference());
	negotiate(&parse_accept(header), available)
}
