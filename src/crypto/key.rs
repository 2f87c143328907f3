//! Signing key material and the PEM private-key loader.

// std
use std::{fs, path::Path};
// crates.io
use rsa::{RsaPrivateKey, pkcs1::DecodeRsaPrivateKey, pkcs8::DecodePrivateKey};
// self
use crate::{_prelude::*, auth::TokenSecret, codec, error::KeyMaterialError};

/// Key used to sign OAuth 1.0a base strings or JWT assertions.
#[derive(Clone)]
pub enum SignatureKey {
	/// Symmetric secret for the HMAC family.
	SharedSecret(TokenSecret),
	/// RSA private key for the asymmetric family.
	RsaPrivateKey(Box<RsaPrivateKey>),
}
impl SignatureKey {
	/// Wraps a raw shared secret, rejecting empty values.
	pub fn shared_secret(secret: impl Into<String>) -> Result<Self, KeyMaterialError> {
		let secret = TokenSecret::new(secret);

		if secret.is_empty() {
			return Err(KeyMaterialError::EmptySecret);
		}

		Ok(Self::SharedSecret(secret))
	}

	/// Builds the OAuth 1.0a HMAC key `encode(consumer_secret)&encode(token_secret)`.
	///
	/// Pass an empty `token_secret` when the request carries no access token; the trailing `&`
	/// is kept as required by RFC 5849 §3.4.2.
	pub fn hmac(consumer_secret: &str, token_secret: &str) -> Self {
		Self::SharedSecret(TokenSecret::new(format!(
			"{}&{}",
			codec::percent_encode(consumer_secret),
			codec::percent_encode(token_secret)
		)))
	}

	/// Parses a PEM-encoded RSA private key (PKCS#8 or PKCS#1).
	pub fn from_pem(pem: &str) -> Result<Self, KeyMaterialError> {
		parse_private_key_pem(pem).map(|key| Self::RsaPrivateKey(Box::new(key)))
	}

	/// Reads and parses a PEM-encoded RSA private key file.
	pub fn from_pem_file(path: impl AsRef<Path>) -> Result<Self, KeyMaterialError> {
		load_private_key(path).map(|key| Self::RsaPrivateKey(Box::new(key)))
	}

	/// Returns a stable label describing the key family.
	pub const fn kind(&self) -> &'static str {
		match self {
			Self::SharedSecret(_) => "shared-secret",
			Self::RsaPrivateKey(_) => "RSA private key",
		}
	}

	pub(crate) fn expect_secret(&self, algorithm: &str) -> Result<&[u8], KeyMaterialError> {
		match self {
			Self::SharedSecret(secret) => Ok(secret.expose().as_bytes()),
			Self::RsaPrivateKey(_) => Err(KeyMaterialError::WrongKeyKind {
				algorithm: algorithm.to_owned(),
				expected: "shared-secret",
			}),
		}
	}

	pub(crate) fn expect_rsa(&self, algorithm: &str) -> Result<&RsaPrivateKey, KeyMaterialError> {
		match self {
			Self::RsaPrivateKey(key) => Ok(&**key),
			Self::SharedSecret(_) => Err(KeyMaterialError::WrongKeyKind {
				algorithm: algorithm.to_owned(),
				expected: "RSA private key",
			}),
		}
	}
}
impl From<RsaPrivateKey> for SignatureKey {
	fn from(key: RsaPrivateKey) -> Self {
		Self::RsaPrivateKey(Box::new(key))
	}
}
impl Debug for SignatureKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("SignatureKey").field(&self.kind()).field(&"<redacted>").finish()
	}
}

/// Reads an RSA private key from a PEM file on disk.
pub fn load_private_key(path: impl AsRef<Path>) -> Result<RsaPrivateKey, KeyMaterialError> {
	let path = path.as_ref();
	let pem = fs::read_to_string(path)
		.map_err(|source| KeyMaterialError::Read { path: path.display().to_string(), source })?;

	parse_private_key_pem(&pem)
}

/// Parses a PEM string holding either a `PRIVATE KEY` (PKCS#8) or an `RSA PRIVATE KEY`
/// (PKCS#1) block.
pub fn parse_private_key_pem(pem: &str) -> Result<RsaPrivateKey, KeyMaterialError> {
	let pem = pem.trim();

	RsaPrivateKey::from_pkcs8_pem(pem)
		.or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
		.map_err(|_| KeyMaterialError::InvalidPem)
}
