//! Header lookup seam
//!
//! Negotiation only needs to read one header value per axis. [`HeaderSource`]
//! abstracts the request's header collection so the negotiator works with an
//! [`http::HeaderMap`], a plain map, or anything else that can answer a
//! case-insensitive lookup.

use http::HeaderMap;
use std::borrow::Cow;
use std::collections::HashMap;
use std::hash::BuildHasher;
use tracing::debug;

/// Case-insensitive, read-only header lookup
pub trait HeaderSource {
	/// Returns the value of `name`, or `None` when the header is not set
	///
	/// Implementations must compare names without regard to ASCII case.
	fn header(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl<H: HeaderSource + ?Sized> HeaderSource for &H {
	fn header(&self, name: &str) -> Option<Cow<'_, str>> {
		(**self).header(name)
	}
}

impl HeaderSource for HeaderMap {
	/// Joins repeated field lines with `", "`, which is equivalent for list
	/// headers such as `Accept`.
	///
	/// # Examples
	///
	/// ```
	/// use http::HeaderMap;
	/// use reinhardt_negotiation::HeaderSource;
	///
	/// let mut headers = HeaderMap::new();
	/// headers.append("accept-encoding", "gzip".parse().unwrap());
	/// headers.append("accept-encoding", "br;q=0.5".parse().unwrap());
	///
	/// assert_eq!(headers.header("Accept-Encoding").as_deref(), Some("gzip, br;q=0.5"));
	/// assert_eq!(headers.header("accept").as_deref(), None);
	/// ```
	fn header(&self, name: &str) -> Option<Cow<'_, str>> {
		let mut values = self
			.get_all(name)
			.iter()
			.filter_map(|value| match value.to_str() {
				Ok(value) => Some(value),
				Err(_) => {
					debug!(header = name, "ignoring header value with non-visible ASCII");
					None
				}
			});

		let first = values.next()?;
		let Some(second) = values.next() else {
			return Some(Cow::Borrowed(first));
		};

		let mut joined = format!("{first}, {second}");
		for value in values {
			joined.push_str(", ");
			joined.push_str(value);
		}
		Some(Cow::Owned(joined))
	}
}

impl<S: BuildHasher> HeaderSource for HashMap<String, String, S> {
	fn header(&self, name: &str) -> Option<Cow<'_, str>> {
		self.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| Cow::Borrowed(value.as_str()))
	}
}
