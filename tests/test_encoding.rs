use http::HeaderMap;
use http::header::ACCEPT_ENCODING;
use reinhardt_negotiation::Negotiator;
use rstest::rstest;

fn negotiator(accept_encoding: Option<&str>) -> Negotiator<HeaderMap> {
	let mut headers = HeaderMap::new();
	if let Some(value) = accept_encoding {
		headers.insert(ACCEPT_ENCODING, value.parse().unwrap());
	}
	Negotiator::new(headers)
}

#[rstest]
#[case(None, Some("identity"))]
#[case(Some("*"), Some("*"))]
#[case(Some("*, gzip"), Some("*"))]
#[case(Some("*, gzip;q=0"), Some("*"))]
#[case(Some("*;q=0"), None)]
#[case(Some("*;q=0, identity;q=1"), Some("identity"))]
#[case(Some("identity"), Some("identity"))]
#[case(Some("identity;q=0"), None)]
#[case(Some("gzip"), Some("gzip"))]
#[case(Some("gzip, compress;q=0"), Some("gzip"))]
#[case(Some("gzip, deflate"), Some("gzip"))]
#[case(Some("gzip;q=0.8, deflate"), Some("deflate"))]
#[case(Some("gzip;q=0.8, identity;q=0.5, *;q=0.3"), Some("gzip"))]
fn test_encoding(#[case] header: Option<&str>, #[case] expected: Option<&str>) {
	assert_eq!(negotiator(header).encoding().as_deref(), expected);
}

#[rstest]
#[case(None, &["identity"])]
#[case(Some("*"), &["*"])]
#[case(Some("*, gzip"), &["*", "gzip"])]
#[case(Some("*, gzip;q=0"), &["*"])]
#[case(Some("*;q=0"), &[])]
#[case(Some("*;q=0, identity;q=1"), &["identity"])]
#[case(Some("identity"), &["identity"])]
#[case(Some("identity;q=0"), &[])]
#[case(Some("gzip"), &["gzip", "identity"])]
#[case(Some("gzip, compress;q=0"), &["gzip", "identity"])]
#[case(Some("gzip, deflate"), &["gzip", "deflate", "identity"])]
#[case(Some("gzip;q=0.8, deflate"), &["deflate", "gzip", "identity"])]
#[case(Some("gzip;foo=bar;q=1, deflate;q=1"), &["gzip", "deflate", "identity"])]
#[case(Some("gzip;q=0.8, identity;q=0.5, *;q=0.3"), &["gzip", "identity", "*"])]
fn test_encodings(#[case] header: Option<&str>, #[case] expected: &[&str]) {
	assert_eq!(negotiator(header).encodings(), expected);
}

#[rstest]
#[case(None, &[], &[])]
#[case(None, &["identity"], &["identity"])]
#[case(None, &["gzip"], &[])]
#[case(Some("*"), &[], &[])]
#[case(Some("*"), &["gzip", "identity"], &["gzip", "identity"])]
#[case(Some("*, gzip"), &["identity"], &["identity"])]
#[case(Some("*, gzip"), &["compress", "gzip"], &["gzip", "compress"])]
#[case(Some("*, gzip;q=0"), &["gzip"], &[])]
#[case(Some("*, gzip;q=0"), &["gzip", "compress"], &["compress"])]
#[case(Some("*;q=0"), &["identity"], &[])]
#[case(Some("*;q=0"), &["gzip"], &[])]
#[case(Some("*;q=0, identity;q=1"), &["identity"], &["identity"])]
#[case(Some("*;q=0, identity;q=1"), &["gzip"], &[])]
#[case(Some("identity"), &["identity"], &["identity"])]
#[case(Some("identity"), &["gzip"], &[])]
#[case(Some("identity;q=0"), &["identity"], &[])]
#[case(Some("identity;q=0"), &["gzip"], &[])]
#[case(Some("gzip"), &["gzip", "identity"], &["gzip", "identity"])]
#[case(Some("gzip"), &["deflate", "gzip"], &["gzip"])]
#[case(Some("gzip"), &["identity"], &["identity"])]
#[case(Some("gzip, compress;q=0"), &["gzip", "compress"], &["gzip"])]
#[case(Some("gzip, deflate"), &["deflate", "gzip"], &["gzip", "deflate"])]
#[case(Some("gzip;q=0.8, deflate"), &["deflate", "gzip"], &["deflate", "gzip"])]
#[case(
	Some("gzip;q=0.8, identity;q=0.5, *;q=0.3"),
	&["identity", "gzip", "compress"],
	&["gzip", "identity", "compress"]
)]
fn test_encodings_for(#[case] header: Option<&str>, #[case] available: &[&str], #[case] expected: &[&str]) {
	assert_eq!(negotiator(header).encodings_for(available), expected);
}

#[rstest]
#[case(Some("gzip"), &["identity", "gzip"], Some("gzip"))]
#[case(Some("gzip, compress;q=0"), &["deflate", "compress"], None)]
#[case(Some("gzip, deflate"), &["deflate", "compress"], Some("deflate"))]
#[case(Some("gzip;q=0.8, identity;q=0.5, *;q=0.3"), &["compress", "identity"], Some("identity"))]
#[case(Some("*"), &[], None)]
fn test_encoding_for(#[case] header: Option<&str>, #[case] available: &[&str], #[case] expected: Option<&str>) {
	assert_eq!(negotiator(header).encoding_for(available).as_deref(), expected);
}

#[rstest]
fn test_encodings_for_returns_provided_casing() {
	// Arrange
	let negotiator = negotiator(Some("gzip"));

	// Act & Assert
	assert_eq!(negotiator.encodings_for(&["GZIP"]), ["GZIP"]);
	assert_eq!(negotiator.encodings_for(&["gzip", "GZIP"]), ["gzip", "GZIP"]);
	assert_eq!(negotiator.encodings_for(&["GZIP", "gzip"]), ["GZIP", "gzip"]);
}

#[rstest]
fn test_repeated_header_lines_are_combined() {
	// Arrange
	let mut headers = HeaderMap::new();
	headers.append(ACCEPT_ENCODING, "gzip;q=0.5".parse().unwrap());
	headers.append(ACCEPT_ENCODING, "br".parse().unwrap());

	// Act
	let encodings = Negotiator::new(&headers).encodings();

	// Assert
	assert_eq!(encodings, ["br", "gzip", "identity"]);
}
