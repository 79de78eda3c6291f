//! # Reinhardt Negotiation
//!
//! HTTP proactive content negotiation over the four `Accept*` request
//! headers.
//!
//! ## Overview
//!
//! Every axis works the same way: the header is parsed into weighted
//! preferences, and those preferences either rank a list of values the server
//! can produce or, without such a list, are reported back in the client's
//! order of preference.
//!
//! | Axis | Header | Default when absent |
//! |------|--------|---------------------|
//! | [`Axis::MediaType`] | `Accept` | `*/*` |
//! | [`Axis::Charset`] | `Accept-Charset` | `*` |
//! | [`Axis::Encoding`] | `Accept-Encoding` | `identity` |
//! | [`Axis::Language`] | `Accept-Language` | `*` |
//!
//! Parsing is lenient: a malformed clause is dropped and the rest of the
//! header still counts. Negotiation itself cannot fail; the worst outcome is
//! an empty list.
//!
//! ## Quick Example
//!
//! ```
//! use http::HeaderMap;
//! use http::header::{ACCEPT, ACCEPT_ENCODING};
//! use reinhardt_negotiation::Negotiator;
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(ACCEPT, "text/html, application/*;q=0.2, image/jpeg;q=0.8".parse().unwrap());
//! headers.insert(ACCEPT_ENCODING, "gzip, compress;q=0.2".parse().unwrap());
//!
//! let negotiator = Negotiator::new(&headers);
//!
//! assert_eq!(
//!     negotiator.media_types(),
//!     ["text/html", "image/jpeg", "application/*"],
//! );
//! assert_eq!(
//!     negotiator.media_type_for(&["application/json", "image/jpeg"]).as_deref(),
//!     Some("image/jpeg"),
//! );
//! assert_eq!(negotiator.encodings(), ["gzip", "compress", "identity"]);
//! ```
//!
//! The free functions (`preferred_*`) take the raw header value directly when
//! no header collection is at hand.
//!
//! ## Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Quality`] and [`Axis`]

pub mod axis;
pub mod charset;
pub mod encoding;
pub mod error;
pub mod header;
pub mod language;
pub mod media_type;
pub mod negotiator;
pub mod quality;
pub mod rank;
pub mod token;

pub use axis::Axis;
pub use charset::{parse_accept_charset, preferred_charsets};
pub use encoding::{IDENTITY, parse_accept_encoding, preferred_encodings};
pub use error::{ParseError, ParseResult};
pub use header::HeaderSource;
pub use language::{LanguageRange, LanguageSpecificity, parse_accept_language, preferred_languages};
pub use media_type::{MediaRange, MediaSpecificity, parse_accept, preferred_media_types};
pub use negotiator::Negotiator;
pub use quality::Quality;
pub use rank::{Pattern, Preference, negotiate};
pub use token::{Token, TokenSpecificity};
