//! Preference matching and ranking shared by every axis
//!
//! Each axis supplies a [`Pattern`] describing how one client preference
//! matches a server candidate and how specific that match is. The ranking
//! itself, including every tie-break, lives here once:
//!
//! 1. quality, highest first
//! 2. specificity of the matching preference, highest first
//! 3. position of the preference in the header, earliest first
//! 4. position of the candidate in the server list, earliest first

use crate::axis::Axis;
use crate::error::ParseResult;
use crate::quality::Quality;
use std::cmp::Ordering;
use tracing::trace;

/// Candidate list meaning "no list supplied"
pub(crate) const NO_CANDIDATES: Option<&[&str]> = None;

/// Axis-specific matching rules for one parsed client preference
pub trait Pattern {
	/// Parsed form of a server candidate
	type Candidate;
	/// How closely a preference matched; greater is more specific
	type Specificity: Ord + Copy;

	/// Parses a server candidate, returning `None` when it can never match
	fn parse_candidate(raw: &str) -> Option<Self::Candidate>;

	/// Returns the specificity of the match, or `None` when the candidate is
	/// not covered by this preference
	fn specificity(&self, candidate: &Self::Candidate) -> Option<Self::Specificity>;

	/// Value reported when ranking without a candidate list
	fn render(&self) -> String;
}

/// One parsed clause of a preference header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preference<P> {
	/// What the client asked for
	pub pattern: P,
	/// How much the client wants it
	pub quality: Quality,
	/// Zero-based position of the clause in the header
	pub order: usize,
}

impl<P> Preference<P> {
	pub fn new(pattern: P, quality: Quality, order: usize) -> Self {
		Self {
			pattern,
			quality,
			order,
		}
	}

	/// Whether the client accepts values matched by this clause at all
	pub fn is_acceptable(&self) -> bool {
		!self.quality.is_zero()
	}
}

/// Best preference found for a single candidate
#[derive(Debug, Clone, Copy)]
struct Match<S> {
	index: usize,
	quality: Quality,
	specificity: S,
	order: usize,
}

/// Parses comma-separated clauses, dropping the malformed ones
///
/// Every segment consumes an order slot, including the dropped ones, so the
/// order of a clause is its position in the raw header.
pub(crate) fn collect_preferences<'h, P>(
	axis: Axis,
	segments: impl IntoIterator<Item = &'h str>,
	parse: impl Fn(&'h str) -> ParseResult<(P, Quality)>,
) -> Vec<Preference<P>> {
	segments
		.into_iter()
		.enumerate()
		.filter_map(|(order, segment)| match parse(segment) {
			Ok((pattern, quality)) => Some(Preference::new(pattern, quality, order)),
			Err(error) => {
				trace!(%axis, clause = segment.trim(), %error, "dropping preference clause");
				None
			}
		})
		.collect()
}

/// Acceptable preferences in client order: quality first, then header order
///
/// Without candidates every clause is matched only by itself, so specificity
/// never separates two clauses here.
pub(crate) fn accepted<P>(preferences: &[Preference<P>]) -> Vec<&Preference<P>> {
	let mut accepted: Vec<_> = preferences.iter().filter(|p| p.is_acceptable()).collect();
	accepted.sort_by(|a, b| b.quality.cmp(&a.quality).then(a.order.cmp(&b.order)));
	accepted
}

/// Ranks `available` against `preferences`, or reports the preferences
/// themselves when no candidate list is given
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::{negotiate, parse_accept_charset};
///
/// let preferences = parse_accept_charset("utf-8;q=0.5, iso-8859-1");
///
/// assert_eq!(negotiate(&preferences, None::<&[&str]>), ["iso-8859-1", "utf-8"]);
/// assert_eq!(negotiate(&preferences, Some(&["UTF-8", "koi8-r"][..])), ["UTF-8"]);
/// ```
pub fn negotiate<P: Pattern, S: AsRef<str>>(
	preferences: &[Preference<P>],
	available: Option<&[S]>,
) -> Vec<String> {
	match available {
		None => accepted(preferences)
			.into_iter()
			.map(|preference| preference.pattern.render())
			.collect(),
		Some(available) => rank_candidates(preferences, available),
	}
}

fn rank_candidates<P: Pattern, S: AsRef<str>>(
	preferences: &[Preference<P>],
	available: &[S],
) -> Vec<String> {
	let mut matches: Vec<_> = available
		.iter()
		.enumerate()
		.filter_map(|(index, raw)| {
			let candidate = P::parse_candidate(raw.as_ref())?;
			best_match(preferences, &candidate, index)
		})
		.filter(|found| !found.quality.is_zero())
		.collect();

	matches.sort_by(compare_matches);

	matches
		.into_iter()
		.map(|found| available[found.index].as_ref().to_owned())
		.collect()
}

/// The most specific matching preference wins, then the highest quality,
/// then the earliest clause. A specific `q=0` therefore overrides a broader
/// wildcard that would have accepted the candidate.
fn best_match<P: Pattern>(
	preferences: &[Preference<P>],
	candidate: &P::Candidate,
	index: usize,
) -> Option<Match<P::Specificity>> {
	preferences
		.iter()
		.filter_map(|preference| {
			let specificity = preference.pattern.specificity(candidate)?;
			Some(Match {
				index,
				quality: preference.quality,
				specificity,
				order: preference.order,
			})
		})
		.reduce(|best, next| {
			if (next.specificity, next.quality) > (best.specificity, best.quality) {
				next
			} else {
				best
			}
		})
}

fn compare_matches<S: Ord>(a: &Match<S>, b: &Match<S>) -> Ordering {
	b.quality
		.cmp(&a.quality)
		.then_with(|| b.specificity.cmp(&a.specificity))
		.then_with(|| a.order.cmp(&b.order))
		.then_with(|| a.index.cmp(&b.index))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	/// Matches a candidate equal to the pattern (specificity 1) or any
	/// candidate for `*` (specificity 0)
	#[derive(Debug)]
	struct Literal(&'static str);

	impl Pattern for Literal {
		type Candidate = String;
		type Specificity = u8;

		fn parse_candidate(raw: &str) -> Option<String> {
			(!raw.is_empty()).then(|| raw.to_string())
		}

		fn specificity(&self, candidate: &String) -> Option<u8> {
			match self.0 {
				"*" => Some(0),
				value if value == candidate.as_str() => Some(1),
				_ => None,
			}
		}

		fn render(&self) -> String {
			self.0.to_string()
		}
	}

	fn pref(value: &'static str, millis: u16, order: usize) -> Preference<Literal> {
		Preference::new(Literal(value), Quality::from_millis(millis).unwrap(), order)
	}

	#[rstest]
	fn test_without_candidates_sorts_by_quality_then_order() {
		// Arrange
		let preferences = vec![pref("*", 1000, 0), pref("a", 500, 1), pref("b", 1000, 2)];

		// Act
		let ranked = negotiate(&preferences, NO_CANDIDATES);

		// Assert
		assert_eq!(ranked, ["*", "b", "a"]);
	}

	#[rstest]
	fn test_without_candidates_drops_rejected() {
		let preferences = vec![pref("a", 0, 0), pref("b", 1, 1)];
		assert_eq!(negotiate(&preferences, NO_CANDIDATES), ["b"]);
	}

	#[rstest]
	fn test_empty_candidate_list_yields_nothing() {
		let preferences = vec![pref("*", 1000, 0)];
		assert!(negotiate(&preferences, Some(&[] as &[&str])).is_empty());
	}

	#[rstest]
	fn test_specific_rejection_beats_wildcard() {
		// Arrange
		let preferences = vec![pref("*", 1000, 0), pref("a", 0, 1)];

		// Act
		let ranked = negotiate(&preferences, Some(&["a", "b"][..]));

		// Assert
		assert_eq!(ranked, ["b"]);
	}

	#[rstest]
	fn test_specificity_outranks_order() {
		// Arrange
		let preferences = vec![pref("*", 1000, 0), pref("b", 1000, 1)];

		// Act
		let ranked = negotiate(&preferences, Some(&["a", "b"][..]));

		// Assert
		assert_eq!(ranked, ["b", "a"]);
	}

	#[rstest]
	fn test_duplicate_preference_uses_highest_quality() {
		// Arrange
		let preferences = vec![pref("a", 900, 0), pref("b", 800, 1), pref("a", 700, 2)];

		// Act
		let ranked = negotiate(&preferences, Some(&["b", "a"][..]));

		// Assert
		assert_eq!(ranked, ["a", "b"]);
	}

	#[rstest]
	fn test_ties_keep_candidate_order() {
		// Arrange
		let preferences = vec![pref("*", 1000, 0)];

		// Act
		let ranked = negotiate(&preferences, Some(&["c", "a", "b"][..]));

		// Assert
		assert_eq!(ranked, ["c", "a", "b"]);
	}

	#[rstest]
	fn test_unparseable_and_unmatched_candidates_are_dropped() {
		let preferences = vec![pref("a", 1000, 0)];
		assert_eq!(negotiate(&preferences, Some(&["", "z", "a"][..])), ["a"]);
	}

	#[rstest]
	fn test_collect_preferences_keeps_raw_positions() {
		// Act
		let preferences = collect_preferences(Axis::Charset, "a,,b".split(','), |segment| {
			let value = segment.trim();
			if value.is_empty() {
				Err(crate::error::ParseError::EmptyValue)
			} else {
				Ok((value, Quality::ONE))
			}
		});

		// Assert
		let orders: Vec<_> = preferences.iter().map(|p| (p.pattern, p.order)).collect();
		assert_eq!(orders, [("a", 0), ("b", 2)]);
	}
}
