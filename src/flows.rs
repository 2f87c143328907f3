//! Token acquisition flows.

pub mod common;
pub mod jwt_bearer;

pub use common::*;

// crates.io
use oauth2::SyncHttpClient;
// self
use crate::{_prelude::*, auth::InstallationId, config::JwtBearerConfig, store::TokenStore};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Fetcher specialized for the crate's default reqwest transport.
pub type ReqwestJwtBearerClient = JwtBearerClient<ReqwestHttpClient>;

/// Obtains and caches bearer tokens through the JWT-bearer grant.
///
/// The client owns the HTTP transport, the token store, and the validated configuration.
/// Clones share the transport, the store, and the per-installation guards, so concurrent
/// callers for the same installation never race on check-fetch-store.
#[derive(Clone)]
pub struct JwtBearerClient<C>
where
	C: ?Sized + SyncHttpClient,
{
	/// HTTP client used for every token request.
	pub http_client: Arc<C>,
	/// Cache holding one token per installation.
	pub store: Arc<dyn TokenStore>,
	/// Endpoint, client, and assertion settings.
	pub config: JwtBearerConfig,
	guards: Arc<Mutex<HashMap<InstallationId, Arc<Mutex<()>>>>>,
}
impl<C> JwtBearerClient<C>
where
	C: ?Sized + SyncHttpClient,
{
	/// Creates a client around a caller-provided transport.
	pub fn with_http_client(
		store: Arc<dyn TokenStore>,
		config: JwtBearerConfig,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self { http_client: http_client.into(), store, config, guards: Default::default() }
	}
}
#[cfg(feature = "reqwest")]
impl JwtBearerClient<ReqwestHttpClient> {
	/// Creates a client with its own redirect-free reqwest transport.
	pub fn new(store: Arc<dyn TokenStore>, config: JwtBearerConfig) -> Result<Self> {
		let http_client = ReqwestHttpClient::new()?;

		Ok(Self::with_http_client(store, config, http_client))
	}
}
impl<C> Debug for JwtBearerClient<C>
where
	C: ?Sized + SyncHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("JwtBearerClient")
			.field("token_endpoint", &self.config.token_endpoint.as_str())
			.field("client_key", &self.config.client_key)
			.field("installation", &self.config.installation)
			.field("algorithm", &self.config.algorithm)
			.finish()
	}
}
