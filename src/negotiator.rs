//! Request-bound negotiation facade

use crate::axis::Axis;
use crate::charset::preferred_charsets;
use crate::encoding::preferred_encodings;
use crate::header::HeaderSource;
use crate::language::preferred_languages;
use crate::media_type::preferred_media_types;
use tracing::trace;

/// Negotiates every axis against one request's headers
///
/// The plural methods return all acceptable values, most preferred first. The
/// `_for` variants rank the server's `available` values instead of reporting
/// the client's own, echoing them in the caller's spelling. The singular
/// methods return the first entry of the matching plural method.
///
/// # Examples
///
/// ```
/// use http::HeaderMap;
/// use http::header::{ACCEPT, ACCEPT_LANGUAGE};
/// use reinhardt_negotiation::Negotiator;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(ACCEPT, "application/json, text/html;q=0.9".parse().unwrap());
/// headers.insert(ACCEPT_LANGUAGE, "fr-CH, fr;q=0.9, en;q=0.8".parse().unwrap());
///
/// let negotiator = Negotiator::new(&headers);
///
/// assert_eq!(negotiator.media_type_for(&["text/html", "application/json"]).as_deref(), Some("application/json"));
/// assert_eq!(negotiator.languages_for(&["en", "fr"]), ["fr", "en"]);
/// assert_eq!(negotiator.encodings(), ["identity"]);
/// assert_eq!(negotiator.charset().as_deref(), Some("*"));
/// ```
#[derive(Debug, Clone)]
pub struct Negotiator<H> {
	headers: H,
}

impl<H: HeaderSource> Negotiator<H> {
	pub fn new(headers: H) -> Self {
		Self { headers }
	}

	/// Header collection this negotiator reads from
	pub fn headers(&self) -> &H {
		&self.headers
	}

	pub fn into_headers(self) -> H {
		self.headers
	}

	fn header_for(&self, axis: Axis) -> Option<String> {
		let name = axis.header_name();
		let value = self.headers.header(name.as_str()).map(|value| value.into_owned());
		trace!(%axis, present = value.is_some(), "reading preference header");
		value
	}

	/// Charsets the client accepts
	pub fn charsets(&self) -> Vec<String> {
		preferred_charsets(self.header_for(Axis::Charset).as_deref(), None::<&[&str]>)
	}

	/// Entries of `available` the client accepts, best first
	pub fn charsets_for<S: AsRef<str>>(&self, available: &[S]) -> Vec<String> {
		preferred_charsets(self.header_for(Axis::Charset).as_deref(), Some(available))
	}

	pub fn charset(&self) -> Option<String> {
		self.charsets().into_iter().next()
	}

	pub fn charset_for<S: AsRef<str>>(&self, available: &[S]) -> Option<String> {
		self.charsets_for(available).into_iter().next()
	}

	/// Content-codings the client accepts, `identity` included unless refused
	pub fn encodings(&self) -> Vec<String> {
		preferred_encodings(self.header_for(Axis::Encoding).as_deref(), None::<&[&str]>)
	}

	pub fn encodings_for<S: AsRef<str>>(&self, available: &[S]) -> Vec<String> {
		preferred_encodings(self.header_for(Axis::Encoding).as_deref(), Some(available))
	}

	pub fn encoding(&self) -> Option<String> {
		self.encodings().into_iter().next()
	}

	/// Best content-coding out of `available`
	///
	/// # Examples
	///
	/// ```
	/// use http::HeaderMap;
	/// use http::header::ACCEPT_ENCODING;
	/// use reinhardt_negotiation::Negotiator;
	///
	/// let mut headers = HeaderMap::new();
	/// headers.insert(ACCEPT_ENCODING, "gzip;q=0.5, br".parse().unwrap());
	///
	/// let negotiator = Negotiator::new(headers);
	/// assert_eq!(negotiator.encoding_for(&["gzip", "deflate"]).as_deref(), Some("gzip"));
	/// assert_eq!(negotiator.encoding_for(&["deflate"]), None);
	/// ```
	pub fn encoding_for<S: AsRef<str>>(&self, available: &[S]) -> Option<String> {
		self.encodings_for(available).into_iter().next()
	}

	/// Language ranges the client accepts, each tag reported once
	pub fn languages(&self) -> Vec<String> {
		preferred_languages(self.header_for(Axis::Language).as_deref(), None::<&[&str]>)
	}

	pub fn languages_for<S: AsRef<str>>(&self, available: &[S]) -> Vec<String> {
		preferred_languages(self.header_for(Axis::Language).as_deref(), Some(available))
	}

	pub fn language(&self) -> Option<String> {
		self.languages().into_iter().next()
	}

	pub fn language_for<S: AsRef<str>>(&self, available: &[S]) -> Option<String> {
		self.languages_for(available).into_iter().next()
	}

	/// Media ranges the client accepts, as `type/subtype`
	pub fn media_types(&self) -> Vec<String> {
		preferred_media_types(self.header_for(Axis::MediaType).as_deref(), None::<&[&str]>)
	}

	pub fn media_types_for<S: AsRef<str>>(&self, available: &[S]) -> Vec<String> {
		preferred_media_types(self.header_for(Axis::MediaType).as_deref(), Some(available))
	}

	pub fn media_type(&self) -> Option<String> {
		self.media_types().into_iter().next()
	}

	pub fn media_type_for<S: AsRef<str>>(&self, available: &[S]) -> Option<String> {
		self.media_types_for(available).into_iter().next()
	}
}
