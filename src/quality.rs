//! Quality values (`q=` weights)
//!
//! A quality is stored in thousandths so that comparisons are exact and the
//! type can be totally ordered. `0` means the client explicitly rejects the
//! value.

use crate::error::{ParseError, ParseResult};
use std::fmt;
use std::str::FromStr;

/// Highest representable quality, in thousandths
const MAX_MILLIS: u16 = 1000;

/// Client-assigned weight of a preference, from `0.000` to `1.000`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(try_from = "u16", into = "u16")
)]
pub struct Quality(u16);

impl Quality {
	/// Explicit rejection
	pub const ZERO: Quality = Quality(0);
	/// Default weight when no `q` parameter is given
	pub const ONE: Quality = Quality(MAX_MILLIS);

	/// Creates a quality from thousandths, returning `None` above `1000`
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::Quality;
	///
	/// assert_eq!(Quality::from_millis(500), "0.5".parse().ok());
	/// assert_eq!(Quality::from_millis(1001), None);
	/// ```
	pub const fn from_millis(millis: u16) -> Option<Self> {
		if millis > MAX_MILLIS {
			None
		} else {
			Some(Self(millis))
		}
	}

	/// Returns the weight in thousandths
	pub const fn millis(self) -> u16 {
		self.0
	}

	/// Whether the client rejects values carrying this weight
	pub const fn is_zero(self) -> bool {
		self.0 == 0
	}
}

impl Default for Quality {
	fn default() -> Self {
		Self::ONE
	}
}

impl FromStr for Quality {
	type Err = ParseError;

	/// Parses `qvalue = ( "0" [ "." 0*3DIGIT ] ) / ( "1" [ "." 0*3("0") ] )`
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::Quality;
	///
	/// assert_eq!("0.8".parse::<Quality>().unwrap().millis(), 800);
	/// assert_eq!("1.000".parse::<Quality>().unwrap(), Quality::ONE);
	/// assert!("1.5".parse::<Quality>().is_err());
	/// assert!("0.1234".parse::<Quality>().is_err());
	/// ```
	fn from_str(s: &str) -> ParseResult<Self> {
		let raw = s.trim();
		let invalid = || ParseError::InvalidQuality(raw.to_string());

		let (whole, fraction) = raw.split_once('.').unwrap_or((raw, ""));
		if fraction.len() > 3 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
			return Err(invalid());
		}

		let mut millis = fraction
			.bytes()
			.fold(0u16, |acc, digit| acc * 10 + u16::from(digit - b'0'));
		for _ in fraction.len()..3 {
			millis *= 10;
		}

		match whole {
			"0" => Ok(Self(millis)),
			"1" if millis == 0 => Ok(Self::ONE),
			_ => Err(invalid()),
		}
	}
}

impl TryFrom<u16> for Quality {
	type Error = ParseError;

	fn try_from(millis: u16) -> ParseResult<Self> {
		Self::from_millis(millis).ok_or_else(|| ParseError::InvalidQuality(millis.to_string()))
	}
}

impl From<Quality> for u16 {
	fn from(quality: Quality) -> Self {
		quality.0
	}
}

impl fmt::Display for Quality {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.0 {
			MAX_MILLIS => f.write_str("1"),
			0 => f.write_str("0"),
			millis => {
				let digits = format!("{millis:03}");
				write!(f, "0.{}", digits.trim_end_matches('0'))
			}
		}
	}
}
