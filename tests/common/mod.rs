//! Helpers shared by the integration tests.

#![allow(dead_code)]

// std
use std::{path::PathBuf, sync::Arc};
// crates.io
use httpmock::MockServer;
#[cfg(feature = "reqwest")]
use oauth_signer::{
	flows::ReqwestJwtBearerClient,
	store::{MemoryStore, TokenStore},
};
use oauth_signer::{
	auth::InstallationId,
	config::{JwtBearerConfig, JwtBearerConfigBuilder},
};
use rsa::RsaPrivateKey;
use time::{OffsetDateTime, macros};
use url::Url;

pub const CLIENT_KEY: &str = "client-key";
pub const CLIENT_SECRET: &str = "client-secret";
pub const INSTALLATION: &str = "proj-42";

/// Fixed instant used as "now" by the fetcher scenarios.
pub const T0: OffsetDateTime = macros::datetime!(2025-03-01 09:00 UTC);

pub fn fixture_path() -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/rsa_private_key.pem")
}

pub fn fixture_key() -> RsaPrivateKey {
	oauth_signer::crypto::load_private_key(fixture_path()).expect("Fixture PEM should load.")
}

pub fn installation() -> InstallationId {
	InstallationId::new(INSTALLATION).expect("Installation fixture should be valid.")
}

pub fn config_builder(server: &MockServer) -> JwtBearerConfigBuilder {
	JwtBearerConfig::builder()
		.token_endpoint(Url::parse(&server.url("/token")).expect("Mock token URL should parse."))
		.client_key(CLIENT_KEY)
		.client_secret(CLIENT_SECRET)
		.installation(installation())
}

#[cfg(feature = "reqwest")]
/// Fetcher over the reqwest transport and an in-memory store the test can inspect.
pub fn build_client(config: JwtBearerConfig) -> (ReqwestJwtBearerClient, Arc<MemoryStore>) {
	let backend = Arc::new(MemoryStore::default());
	let store: Arc<dyn TokenStore> = backend.clone();
	let client = ReqwestJwtBearerClient::new(store, config).expect("Reqwest client should build.");

	(client, backend)
}
