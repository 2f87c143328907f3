//! Token cache contract and built-in store implementations.
//!
//! A store holds at most one [`CachedToken`] per [`InstallationId`]. Entries are overwritten on
//! every successful exchange and never deleted; stale entries are simply superseded.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

// self
use crate::{
	_prelude::*,
	auth::{CachedToken, InstallationId},
};

/// Storage backend contract for cached access tokens.
pub trait TokenStore
where
	Self: Send + Sync,
{
	/// Returns the entry cached for `key`, if any, regardless of its expiry.
	fn fetch(&self, key: &InstallationId) -> Result<Option<CachedToken>, StoreError>;

	/// Stores or replaces the entry for `key`.
	fn save(&self, key: &InstallationId, token: CachedToken) -> Result<(), StoreError>;
}
impl<T> TokenStore for Arc<T>
where
	T: ?Sized + TokenStore,
{
	fn fetch(&self, key: &InstallationId) -> Result<Option<CachedToken>, StoreError> {
		(**self).fetch(key)
	}

	fn save(&self, key: &InstallationId, token: CachedToken) -> Result<(), StoreError> {
		(**self).save(key, token)
	}
}

/// Error type produced by [`TokenStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn store_error_converts_into_crate_error_with_source() {
		let store_error = StoreError::Backend { message: "disk full".into() };
		let error: Error = store_error.clone().into();

		assert!(matches!(error, Error::Storage(_)));
		assert!(error.to_string().contains("disk full"));

		let source = StdError::source(&error)
			.expect("Crate error should expose the original store error as its source.");

		assert_eq!(source.to_string(), store_error.to_string());
	}

	#[test]
	fn shared_stores_delegate_through_arc() {
		let store: Arc<dyn TokenStore> = Arc::new(MemoryStore::default());
		let key = InstallationId::new("proj-1").expect("Installation fixture should be valid.");

		store.save(&key, CachedToken::new("tok", 10)).expect("Memory save should succeed.");

		let shared = Arc::clone(&store);

		assert_eq!(
			TokenStore::fetch(&shared, &key).expect("Memory fetch should succeed."),
			Some(CachedToken::new("tok", 10))
		);
	}
}
