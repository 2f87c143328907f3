//! Cached access token and its validity window.

// self
use crate::{_prelude::*, auth::token::secret::TokenSecret};

/// Lifecycle status of a cached token.
///
/// A missing entry is the third state; refreshing a stale or missing token always yields a
/// [`TokenStatus::Valid`] one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenStatus {
	/// `now < expiry_epoch`; the token may be handed out.
	Valid,
	/// The expiry instant has been reached; a new exchange is required.
	Stale,
}

/// Access token stored per installation together with its absolute expiry.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedToken {
	/// Access token secret; callers must avoid logging it.
	pub access_token: TokenSecret,
	/// Expiry instant as Unix-epoch seconds.
	pub expiry_epoch: i64,
}
impl CachedToken {
	/// Creates a cache entry from a token and an absolute expiry.
	pub fn new(access_token: impl Into<String>, expiry_epoch: i64) -> Self {
		Self { access_token: TokenSecret::new(access_token), expiry_epoch }
	}

	/// Creates a cache entry expiring `expires_in` after `issued_at`.
	///
	/// Returns `None` when the expiry does not fit in Unix-epoch seconds.
	pub fn expiring_in(
		access_token: impl Into<String>,
		issued_at: OffsetDateTime,
		expires_in: Duration,
	) -> Option<Self> {
		let expiry_epoch = issued_at.unix_timestamp().checked_add(expires_in.whole_seconds())?;

		Some(Self::new(access_token, expiry_epoch))
	}

	/// Computes the lifecycle status at a given instant.
	pub fn status_at(&self, instant: OffsetDateTime) -> TokenStatus {
		if instant.unix_timestamp() < self.expiry_epoch {
			TokenStatus::Valid
		} else {
			TokenStatus::Stale
		}
	}

	/// Returns `true` if the token may still be used at the provided instant.
	pub fn is_valid_at(&self, instant: OffsetDateTime) -> bool {
		matches!(self.status_at(instant), TokenStatus::Valid)
	}

	/// Returns `true` if the token is usable relative to the current clock.
	pub fn is_valid(&self) -> bool {
		self.is_valid_at(OffsetDateTime::now_utc())
	}
}
impl Debug for CachedToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CachedToken")
			.field("access_token", &"<redacted>")
			.field("expiry_epoch", &self.expiry_epoch)
			.finish()
	}
}
