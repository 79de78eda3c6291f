//! Negotiation axes and their per-axis defaults

use http::HeaderName;
use http::header::{ACCEPT, ACCEPT_CHARSET, ACCEPT_ENCODING, ACCEPT_LANGUAGE};
use std::fmt;

/// One dimension of content negotiation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(rename_all = "snake_case")
)]
pub enum Axis {
	Charset,
	Encoding,
	Language,
	MediaType,
}

impl Axis {
	/// Every axis, in header-name order
	pub const ALL: [Axis; 4] = [
		Axis::MediaType,
		Axis::Charset,
		Axis::Encoding,
		Axis::Language,
	];

	/// Request header carrying the client's preferences for this axis
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::Axis;
	///
	/// assert_eq!(Axis::Encoding.header_name(), http::header::ACCEPT_ENCODING);
	/// assert_eq!(Axis::MediaType.header_name().as_str(), "accept");
	/// ```
	pub fn header_name(self) -> HeaderName {
		match self {
			Axis::Charset => ACCEPT_CHARSET,
			Axis::Encoding => ACCEPT_ENCODING,
			Axis::Language => ACCEPT_LANGUAGE,
			Axis::MediaType => ACCEPT,
		}
	}

	/// Header value assumed when the request carries no header for this axis
	///
	/// A missing `Accept-Encoding` only admits `identity`; every other axis
	/// accepts anything.
	pub const fn default_preference(self) -> &'static str {
		match self {
			Axis::Charset => "*",
			Axis::Encoding => "identity",
			Axis::Language => "*",
			Axis::MediaType => "*/*",
		}
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Axis::Charset => "charset",
			Axis::Encoding => "encoding",
			Axis::Language => "language",
			Axis::MediaType => "media_type",
		}
	}
}

impl fmt::Display for Axis {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
