//! Thread-safe in-memory [`TokenStore`] for single-process integrations and tests.

// self
use crate::{
	_prelude::*,
	auth::{CachedToken, InstallationId},
	store::{StoreError, TokenStore},
};

/// Keeps cached tokens in-process; clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Arc<RwLock<HashMap<InstallationId, CachedToken>>>);
impl MemoryStore {
	/// Number of cached entries.
	pub fn len(&self) -> usize {
		self.0.read().len()
	}

	/// Returns `true` when nothing has been cached yet.
	pub fn is_empty(&self) -> bool {
		self.0.read().is_empty()
	}
}
impl TokenStore for MemoryStore {
	fn fetch(&self, key: &InstallationId) -> Result<Option<CachedToken>, StoreError> {
		Ok(self.0.read().get(key).cloned())
	}

	fn save(&self, key: &InstallationId, token: CachedToken) -> Result<(), StoreError> {
		self.0.write().insert(key.clone(), token);

		Ok(())
	}
}
