//! Nonce generation.

// crates.io
use rand::Rng;
// self
use crate::{
	_prelude::*,
	crypto::{self, DigestAlgorithm},
};

/// Derives a nonce as the lowercase hex SHA-1 of the seed's string form.
///
/// The same seed always yields the same nonce. Seeding with the request timestamp means two
/// requests signed within the same second share a nonce, so this offers no real replay
/// protection on its own.
pub fn make_nonce(seed: impl Display) -> String {
	hex::encode(crypto::digest(seed.to_string().as_bytes(), DigestAlgorithm::Sha1))
}

/// Strategy used by [`OAuth1Signer`](crate::oauth1::OAuth1Signer) to fill `oauth_nonce`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NonceSource {
	/// [`make_nonce`] over the request timestamp.
	#[default]
	TimestampDigest,
	/// 16 random bytes rendered as 32 hex characters.
	Random,
}
impl NonceSource {
	/// Produces a nonce for a request stamped with `timestamp`.
	pub fn generate(self, timestamp: i64) -> String {
		match self {
			Self::TimestampDigest => make_nonce(timestamp),
			Self::Random => {
				let bytes: [u8; 16] = rand::rng().random();

				hex::encode(bytes)
			},
		}
	}
}
