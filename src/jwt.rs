//! Compact JWT (RFC 7519) signing for the JWT-bearer grant.
//!
//! A token is `base64url(header).base64url(payload).base64url(signature)` where the signature
//! covers the first two segments joined by `.`. Only the `HS256/384/512` and `RS256/384/512`
//! algorithms are supported.

pub mod algorithm;
pub mod claims;

pub use algorithm::*;
pub use claims::*;

// self
use crate::{
	_prelude::*,
	codec::base64_url_encode,
	crypto::SignatureKey,
	error::ConfigError,
	obs::{self, OperationKind},
};

/// Signs `payload` under `header` and returns the compact serialization.
///
/// `header` and `payload` are serialized as compact JSON in field declaration order.
pub fn sign_jwt<P>(header: &JwtHeader, payload: &P, key: &SignatureKey) -> Result<String>
where
	P: ?Sized + Serialize,
{
	obs::observe(OperationKind::JwtSignature, "sign_jwt", || {
		let header_json = serde_json::to_vec(header).map_err(ConfigError::from)?;
		let payload_json = serde_json::to_vec(payload).map_err(ConfigError::from)?;
		let signing_input =
			format!("{}.{}", base64_url_encode(header_json), base64_url_encode(payload_json));
		let signature = header.alg.sign(signing_input.as_bytes(), key)?;

		Ok(format!("{signing_input}.{}", base64_url_encode(signature)))
	})
}

/// Header and claims of a JWT-bearer assertion, ready to be signed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JwtAssertion {
	/// JOSE header.
	pub header: JwtHeader,
	/// Registered claims.
	pub claims: JwtClaims,
}
impl JwtAssertion {
	/// Pairs `claims` with a `typ: JWT` header for `algorithm`.
	pub fn new(algorithm: JwtAlgorithm, claims: JwtClaims) -> Self {
		Self { header: JwtHeader::new(algorithm), claims }
	}

	/// Signs the assertion and returns the three-segment token.
	pub fn encode(&self, key: &SignatureKey) -> Result<String> {
		sign_jwt(&self.header, &self.claims, key)
	}
}
