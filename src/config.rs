//! Validated configuration for the JWT-bearer token fetcher.

/// Builder API for assembling validated JWT-bearer settings.
pub mod builder;

pub use builder::*;

// self
use crate::{
	_prelude::*,
	auth::InstallationId,
	crypto::SignatureKey,
	jwt::{JwtAlgorithm, JwtAssertion, JwtClaims},
};

/// `grant_type` value of the JWT-bearer grant (RFC 7523).
pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Immutable settings consumed by [`JwtBearerClient`](crate::flows::JwtBearerClient).
///
/// Build with [`JwtBearerConfig::builder`]. The signing key is held privately and never
/// printed by `Debug`.
#[derive(Clone, Debug)]
pub struct JwtBearerConfig {
	/// Token endpoint; also used as the assertion audience.
	pub token_endpoint: Url,
	/// Client key; used as the assertion issuer.
	pub client_key: String,
	/// Cache key for the access token.
	pub installation: InstallationId,
	/// Assertion signing algorithm.
	pub algorithm: JwtAlgorithm,
	/// Validity window of each assertion.
	pub assertion_lifetime: Duration,
	/// Optional `sub` claim.
	pub subject: Option<String>,
	key: SignatureKey,
}
impl JwtBearerConfig {
	/// Assertion lifetime used when none is configured (nine minutes).
	pub const DEFAULT_ASSERTION_LIFETIME: Duration = Duration::seconds(540);
	/// Longest assertion lifetime the builder accepts.
	pub const MAX_ASSERTION_LIFETIME: Duration = Duration::days(1);
	/// Algorithm used when none is configured.
	pub const DEFAULT_ALGORITHM: JwtAlgorithm = JwtAlgorithm::Hs256;

	/// Starts a builder.
	pub fn builder() -> JwtBearerConfigBuilder {
		JwtBearerConfigBuilder::default()
	}

	/// Key used to sign assertions.
	pub fn key(&self) -> &SignatureKey {
		&self.key
	}

	/// Assertion issued at `now` for this client and endpoint.
	pub fn assertion_at(&self, now: OffsetDateTime) -> Result<JwtAssertion> {
		let mut claims = JwtClaims::new(
			self.client_key.as_str(),
			self.token_endpoint.as_str(),
			now,
			self.assertion_lifetime,
		)?;

		claims.sub = self.subject.clone();

		Ok(JwtAssertion::new(self.algorithm, claims))
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn assertion_uses_client_and_endpoint() {
		let config = JwtBearerConfig::builder()
			.token_endpoint(
				Url::parse("https://app.example.com/exzact/api/oauth/token")
					.expect("Fixture URL should parse."),
			)
			.client_key("client-key")
			.client_secret("client-secret")
			.build()
			.expect("Config fixture should be valid.");
		let now = macros::datetime!(2025-01-01 00:00 UTC);
		let assertion = config.assertion_at(now).expect("Assertion should build.");

		assert_eq!(assertion.header.alg, JwtAlgorithm::Hs256);
		assert_eq!(assertion.claims.iss, "client-key");
		assert_eq!(assertion.claims.aud, "https://app.example.com/exzact/api/oauth/token");
		assert_eq!(assertion.claims.exp - assertion.claims.iat, 540);
		assert_eq!(assertion.claims.sub, None);
	}
}
