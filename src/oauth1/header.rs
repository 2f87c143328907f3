//! `Authorization: OAuth …` header formatting.

// self
use crate::{
	_prelude::*,
	codec::percent_encode,
	oauth1::{OAUTH_VERSION, SignatureMethod},
};

/// Formatted value for an OAuth 1.0a `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthorizationHeader(String);
impl AuthorizationHeader {
	/// Returns the header value.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consumes the header and returns its value.
	pub fn into_string(self) -> String {
		self.0
	}
}
impl AsRef<str> for AuthorizationHeader {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Display for AuthorizationHeader {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl Debug for AuthorizationHeader {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("AuthorizationHeader").field(&self.0).finish()
	}
}

/// Formats the `OAuth …` header value.
///
/// Only `signature` is percent-encoded; the other values are expected to be header-safe
/// already. `oauth_token` is left out when `access_token` is empty.
pub fn build_auth_header(
	consumer_key: &str,
	nonce: &str,
	signature: &str,
	access_token: &str,
	method: SignatureMethod,
	timestamp: i64,
) -> AuthorizationHeader {
	let mut value = format!(
		"OAuth oauth_consumer_key=\"{consumer_key}\", oauth_nonce=\"{nonce}\", \
		 oauth_signature=\"{}\", oauth_signature_method=\"{method}\", \
		 oauth_timestamp=\"{timestamp}\"",
		percent_encode(signature),
	);

	if !access_token.is_empty() {
		value.push_str(&format!(", oauth_token=\"{access_token}\""));
	}

	value.push_str(&format!(", oauth_version=\"{OAUTH_VERSION}\""));

	AuthorizationHeader(value)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn header_lists_fields_and_encodes_signature_only() {
		let header = build_auth_header("ck", "abc", "a+b/c=", "at", SignatureMethod::HmacSha1, 1_000);

		assert_eq!(
			header.as_str(),
			"OAuth oauth_consumer_key=\"ck\", oauth_nonce=\"abc\", oauth_signature=\"a%2Bb%2Fc%3D\", \
			 oauth_signature_method=\"HMAC-SHA1\", oauth_timestamp=\"1000\", oauth_token=\"at\", \
			 oauth_version=\"1.0\""
		);
	}

	#[test]
	fn empty_access_token_omits_token_field() {
		let header = build_auth_header("ck", "n", "sig", "", SignatureMethod::RsaSha1, 5);

		assert!(!header.as_str().contains("oauth_token"));
		assert!(header.as_str().contains("oauth_signature_method=\"RSA-SHA1\""));
	}
}
