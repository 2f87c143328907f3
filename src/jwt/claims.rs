//! JOSE header and registered claims.

// self
use crate::{_prelude::*, error::ConfigError, jwt::JwtAlgorithm};

/// JOSE header carrying the algorithm and token type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtHeader {
	/// Signing algorithm.
	pub alg: JwtAlgorithm,
	/// Token type, always `JWT` for assertions built here.
	pub typ: String,
}
impl JwtHeader {
	/// Header for `alg` with `typ: JWT`.
	pub fn new(alg: JwtAlgorithm) -> Self {
		Self { alg, typ: "JWT".into() }
	}

	/// Parses an `alg` label, failing with [`Error::UnsupportedAlgorithm`] for unknown values.
	pub fn for_algorithm(label: &str) -> Result<Self> {
		label.parse().map(Self::new)
	}
}

/// Registered claims of a JWT-bearer assertion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
	/// Issuer; the client key.
	pub iss: String,
	/// Audience; the token endpoint URL.
	pub aud: String,
	/// Issued-at, Unix seconds.
	pub iat: i64,
	/// Expiry, Unix seconds; always after `iat`.
	pub exp: i64,
	/// Optional subject for providers that impersonate a user.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sub: Option<String>,
}
impl JwtClaims {
	/// Builds claims valid for `lifetime` starting at `issued_at`.
	pub fn new(
		issuer: impl Into<String>,
		audience: impl Into<String>,
		issued_at: OffsetDateTime,
		lifetime: Duration,
	) -> Result<Self> {
		if lifetime.whole_seconds() <= 0 {
			return Err(ConfigError::NonPositiveLifetime.into());
		}

		let iat = issued_at.unix_timestamp();
		let exp = iat.checked_add(lifetime.whole_seconds()).ok_or(
			ConfigError::LifetimeOutOfRange { seconds: lifetime.whole_seconds() },
		)?;

		Ok(Self { iss: issuer.into(), aud: audience.into(), iat, exp, sub: None })
	}

	/// Sets the `sub` claim.
	pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
		self.sub = Some(subject.into());

		self
	}

	/// Validity window of the assertion.
	pub fn lifetime(&self) -> Duration {
		Duration::seconds(self.exp.saturating_sub(self.iat))
	}
}
