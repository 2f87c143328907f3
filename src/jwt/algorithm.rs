//! Supported JWS algorithms.

// self
use crate::{
	_prelude::*,
	crypto::{self, DigestAlgorithm, SignatureKey},
};

/// JWS `alg` values accepted by [`sign_jwt`](crate::jwt::sign_jwt).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JwtAlgorithm {
	/// HMAC with SHA-256.
	#[serde(rename = "HS256")]
	Hs256,
	/// HMAC with SHA-384.
	#[serde(rename = "HS384")]
	Hs384,
	/// HMAC with SHA-512.
	#[serde(rename = "HS512")]
	Hs512,
	/// RSASSA-PKCS1-v1_5 with SHA-256.
	#[serde(rename = "RS256")]
	Rs256,
	/// RSASSA-PKCS1-v1_5 with SHA-384.
	#[serde(rename = "RS384")]
	Rs384,
	/// RSASSA-PKCS1-v1_5 with SHA-512.
	#[serde(rename = "RS512")]
	Rs512,
}
impl JwtAlgorithm {
	/// Every supported algorithm.
	pub const ALL: [Self; 6] =
		[Self::Hs256, Self::Hs384, Self::Hs512, Self::Rs256, Self::Rs384, Self::Rs512];

	/// Returns the registered `alg` label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Hs256 => "HS256",
			Self::Hs384 => "HS384",
			Self::Hs512 => "HS512",
			Self::Rs256 => "RS256",
			Self::Rs384 => "RS384",
			Self::Rs512 => "RS512",
		}
	}

	/// Returns `true` for the HMAC family.
	pub const fn is_hmac(self) -> bool {
		matches!(self, Self::Hs256 | Self::Hs384 | Self::Hs512)
	}

	/// Digest used by the algorithm.
	pub const fn digest(self) -> DigestAlgorithm {
		match self {
			Self::Hs256 | Self::Rs256 => DigestAlgorithm::Sha256,
			Self::Hs384 | Self::Rs384 => DigestAlgorithm::Sha384,
			Self::Hs512 | Self::Rs512 => DigestAlgorithm::Sha512,
		}
	}

	/// Computes the raw signature over `signing_input`.
	pub fn sign(self, signing_input: &[u8], key: &SignatureKey) -> Result<Vec<u8>> {
		let raw = if self.is_hmac() {
			crypto::hmac(signing_input, key.expect_secret(self.as_str())?, self.digest())?
		} else {
			crypto::rsa_sign(signing_input, key.expect_rsa(self.as_str())?, self.digest())?
		};

		Ok(raw)
	}
}
impl Display for JwtAlgorithm {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for JwtAlgorithm {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Self::ALL
			.into_iter()
			.find(|alg| alg.as_str() == s)
			.ok_or_else(|| Error::unsupported_algorithm(s))
	}
}
