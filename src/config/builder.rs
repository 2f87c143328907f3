// std
use std::net::IpAddr;
// crates.io
use rsa::RsaPrivateKey;
use url::Host;
// self
use crate::{
	_prelude::*,
	auth::{InstallationId, TokenSecret},
	config::JwtBearerConfig,
	crypto::SignatureKey,
	error::ConfigError,
	jwt::JwtAlgorithm,
};

/// Builder for [`JwtBearerConfig`] values.
#[derive(Clone, Debug, Default)]
pub struct JwtBearerConfigBuilder {
	/// Token endpoint (required).
	pub token_endpoint: Option<Url>,
	/// Client key (required).
	pub client_key: Option<String>,
	/// Cache key; defaults to the client key.
	pub installation: Option<InstallationId>,
	/// Signing algorithm; defaults to [`JwtBearerConfig::DEFAULT_ALGORITHM`].
	pub algorithm: Option<JwtAlgorithm>,
	/// Assertion lifetime; defaults to [`JwtBearerConfig::DEFAULT_ASSERTION_LIFETIME`].
	pub assertion_lifetime: Option<Duration>,
	/// Optional `sub` claim.
	pub subject: Option<String>,
	client_secret: Option<TokenSecret>,
	key: Option<SignatureKey>,
}
impl JwtBearerConfigBuilder {
	/// Sets the token endpoint.
	pub fn token_endpoint(mut self, url: Url) -> Self {
		self.token_endpoint = Some(url);

		self
	}

	/// Sets the client key.
	pub fn client_key(mut self, key: impl Into<String>) -> Self {
		self.client_key = Some(key.into());

		self
	}

	/// Uses a shared client secret (HMAC algorithms).
	pub fn client_secret(mut self, secret: impl Into<String>) -> Self {
		self.client_secret = Some(TokenSecret::new(secret));
		self.key = None;

		self
	}

	/// Uses an RSA private key (RS algorithms).
	pub fn private_key(self, key: RsaPrivateKey) -> Self {
		self.signature_key(key.into())
	}

	/// Uses an already-built signing key.
	pub fn signature_key(mut self, key: SignatureKey) -> Self {
		self.key = Some(key);
		self.client_secret = None;

		self
	}

	/// Overrides the signing algorithm.
	pub fn algorithm(mut self, algorithm: JwtAlgorithm) -> Self {
		self.algorithm = Some(algorithm);

		self
	}

	/// Overrides the assertion lifetime.
	pub fn assertion_lifetime(mut self, lifetime: Duration) -> Self {
		self.assertion_lifetime = Some(lifetime);

		self
	}

	/// Overrides the cache key.
	pub fn installation(mut self, installation: InstallationId) -> Self {
		self.installation = Some(installation);

		self
	}

	/// Sets the `sub` claim.
	pub fn subject(mut self, subject: impl Into<String>) -> Self {
		self.subject = Some(subject.into());

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	///
	/// Fails with [`ConfigError`] for missing or invalid settings and with a key-material error
	/// when the key is empty or does not fit the algorithm.
	pub fn build(self) -> Result<JwtBearerConfig> {
		let token_endpoint =
			self.token_endpoint.ok_or(ConfigError::MissingField { field: "token_endpoint" })?;
		let client_key = self.client_key.ok_or(ConfigError::MissingField { field: "client_key" })?;
		let key = match (self.key, self.client_secret) {
			(Some(key), _) => key,
			(None, Some(secret)) => SignatureKey::shared_secret(secret.expose())?,
			(None, None) => return Err(ConfigError::MissingField { field: "signing_key" }.into()),
		};
		let algorithm = self.algorithm.unwrap_or(JwtBearerConfig::DEFAULT_ALGORITHM);
		let assertion_lifetime =
			self.assertion_lifetime.unwrap_or(JwtBearerConfig::DEFAULT_ASSERTION_LIFETIME);
		let installation = match self.installation {
			Some(installation) => installation,
			None => InstallationId::new(&client_key).map_err(ConfigError::from)?,
		};

		validate_endpoint("token", &token_endpoint)?;

		if assertion_lifetime.whole_seconds() <= 0 {
			return Err(ConfigError::NonPositiveLifetime.into());
		}
		if assertion_lifetime > JwtBearerConfig::MAX_ASSERTION_LIFETIME {
			return Err(ConfigError::LifetimeOutOfRange {
				seconds: assertion_lifetime.whole_seconds(),
			}
			.into());
		}

		if algorithm.is_hmac() {
			key.expect_secret(algorithm.as_str())?;
		} else {
			key.expect_rsa(algorithm.as_str())?;
		}

		Ok(JwtBearerConfig {
			token_endpoint,
			client_key,
			installation,
			algorithm,
			assertion_lifetime,
			subject: self.subject,
			key,
		})
	}
}

/// HTTPS is required except for loopback hosts used in local testing.
fn validate_endpoint(name: &'static str, url: &Url) -> Result<(), ConfigError> {
	if url.scheme() == "https" || (url.scheme() == "http" && is_loopback(url)) {
		Ok(())
	} else {
		Err(ConfigError::InsecureEndpoint { endpoint: name, url: url.to_string() })
	}
}

fn is_loopback(url: &Url) -> bool {
	match url.host() {
		Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
		Some(Host::Ipv4(ip)) => IpAddr::V4(ip).is_loopback(),
		Some(Host::Ipv6(ip)) => IpAddr::V6(ip).is_loopback(),
		None => false,
	}
}
