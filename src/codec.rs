//! Byte-exact encoders used by both signing pipelines.

// crates.io
use base64::{
	Engine,
	engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// RFC 3986 unreserved characters: `A-Z a-z 0-9 - . _ ~`. Everything else is escaped.
const RFC3986_ESCAPE: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encodes `input` per RFC 3986.
///
/// Unlike form encoders, a space becomes `%20` and never `+`. Hex digits are uppercase.
pub fn percent_encode(input: &str) -> String {
	percent_encoding::utf8_percent_encode(input, RFC3986_ESCAPE).to_string()
}

/// Encodes bytes with the URL-safe base64 alphabet (`-` and `_`) and no `=` padding.
pub fn base64_url_encode(bytes: impl AsRef<[u8]>) -> String {
	URL_SAFE_NO_PAD.encode(bytes)
}

/// Encodes bytes with the standard, padded base64 alphabet.
pub fn base64_encode(bytes: impl AsRef<[u8]>) -> String {
	STANDARD.encode(bytes)
}
