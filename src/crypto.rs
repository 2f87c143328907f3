//! Digest, HMAC, and RSA signing primitives plus signing-key loading.
//!
//! RSA signatures use PKCS#1 v1.5 padding, which is deterministic: the same message and key
//! always produce the same signature bytes.

pub mod key;

pub use key::*;

// crates.io
use hmac::{Hmac, Mac};
use rsa::{
	RsaPrivateKey,
	pkcs1v15::SigningKey,
	signature::{SignatureEncoding, Signer},
};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
// self
use crate::{_prelude::*, error::KeyMaterialError};

/// Hash functions available to the signing pipelines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
	/// SHA-1 (OAuth 1.0a signatures and nonces).
	Sha1,
	/// SHA-256.
	Sha256,
	/// SHA-384.
	Sha384,
	/// SHA-512.
	Sha512,
}
impl DigestAlgorithm {
	/// Returns a stable label suitable for logs.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Sha1 => "SHA1",
			Self::Sha256 => "SHA256",
			Self::Sha384 => "SHA384",
			Self::Sha512 => "SHA512",
		}
	}
}
impl Display for DigestAlgorithm {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Hashes `data` with the requested algorithm.
pub fn digest(data: &[u8], algorithm: DigestAlgorithm) -> Vec<u8> {
	match algorithm {
		DigestAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
		DigestAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
		DigestAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
		DigestAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
	}
}

/// Computes an HMAC tag over `data` keyed with `key`.
pub fn hmac(
	data: &[u8],
	key: &[u8],
	algorithm: DigestAlgorithm,
) -> Result<Vec<u8>, KeyMaterialError> {
	macro_rules! tag {
		($digest:ty) => {{
			let mut mac = <Hmac<$digest>>::new_from_slice(key)
				.map_err(|_| KeyMaterialError::InvalidHmacKey)?;

			mac.update(data);

			mac.finalize().into_bytes().to_vec()
		}};
	}

	Ok(match algorithm {
		DigestAlgorithm::Sha1 => tag!(Sha1),
		DigestAlgorithm::Sha256 => tag!(Sha256),
		DigestAlgorithm::Sha384 => tag!(Sha384),
		DigestAlgorithm::Sha512 => tag!(Sha512),
	})
}

/// Signs `data` with an RSA private key using PKCS#1 v1.5 padding over the given digest.
pub fn rsa_sign(
	data: &[u8],
	key: &RsaPrivateKey,
	algorithm: DigestAlgorithm,
) -> Result<Vec<u8>, KeyMaterialError> {
	macro_rules! sign {
		($digest:ty) => {{
			let signer = <SigningKey<$digest>>::new(key.clone());
			let signature = signer.try_sign(data).map_err(KeyMaterialError::signing)?;

			signature.to_bytes().to_vec()
		}};
	}

	Ok(match algorithm {
		DigestAlgorithm::Sha1 => sign!(Sha1),
		DigestAlgorithm::Sha256 => sign!(Sha256),
		DigestAlgorithm::Sha384 => sign!(Sha384),
		DigestAlgorithm::Sha512 => sign!(Sha512),
	})
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn digest_matches_known_vectors() {
		assert_eq!(
			hex::encode(digest(b"abc", DigestAlgorithm::Sha1)),
			"a9993e364706816aba3e25717850c26c9cd0d89d"
		);
		assert_eq!(
			hex::encode(digest(b"abc", DigestAlgorithm::Sha256)),
			"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
		);
		assert_eq!(digest(b"abc", DigestAlgorithm::Sha384).len(), 48);
		assert_eq!(digest(b"abc", DigestAlgorithm::Sha512).len(), 64);
	}

	#[test]
	fn hmac_matches_rfc_4231_case_two() {
		let tag = hmac(b"what do ya want for nothing?", b"Jefe", DigestAlgorithm::Sha256)
			.expect("HMAC should accept any key length.");

		assert_eq!(
			hex::encode(tag),
			"5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
		);
	}

	#[test]
	fn hmac_sha1_matches_rfc_2202_case_two() {
		let tag = hmac(b"what do ya want for nothing?", b"Jefe", DigestAlgorithm::Sha1)
			.expect("HMAC should accept any key length.");

		assert_eq!(hex::encode(tag), "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79");
	}

	#[test]
	fn hmac_is_deterministic() {
		let first = hmac(b"base", b"key", DigestAlgorithm::Sha512).expect("HMAC should succeed.");
		let second = hmac(b"base", b"key", DigestAlgorithm::Sha512).expect("HMAC should succeed.");

		assert_eq!(first, second);
	}
}
