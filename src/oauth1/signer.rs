//! Signer configuration and per-request signing.

// crates.io
use oauth2::{
	HttpRequest,
	http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue},
};
use rsa::RsaPrivateKey;
// self
use crate::{
	_prelude::*,
	codec,
	crypto::{self, DigestAlgorithm, SignatureKey},
	error::ConfigError,
	oauth1::{
		AuthorizationHeader, HttpMethod, NonceSource, OAUTH_VERSION, SignatureMethod,
		base_string_uri, build_auth_header, build_parameter_string, build_signature_base,
		query_params,
	},
	obs::{self, OperationKind},
};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Signs a signature base string and returns the standard base64 encoding of the result.
///
/// HMAC-SHA1 needs a [`SignatureKey::SharedSecret`]; RSA-SHA1 needs a
/// [`SignatureKey::RsaPrivateKey`]. A mismatched key fails before anything is signed.
pub fn sign(base: &str, key: &SignatureKey, method: SignatureMethod) -> Result<String> {
	let raw = match method {
		SignatureMethod::HmacSha1 => crypto::hmac(
			base.as_bytes(),
			key.expect_secret(method.as_str())?,
			DigestAlgorithm::Sha1,
		)?,
		SignatureMethod::RsaSha1 => crypto::rsa_sign(
			base.as_bytes(),
			key.expect_rsa(method.as_str())?,
			DigestAlgorithm::Sha1,
		)?,
	};

	Ok(codec::base64_encode(raw))
}

/// Everything needed to sign one outbound request.
///
/// Query parameters carried by `url` are folded into the signed parameter set alongside
/// `additional_params` (typically form fields).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningRequest {
	/// Request URL; its query string is signed but not part of the base string URI.
	pub url: Url,
	/// HTTP method.
	pub http_method: HttpMethod,
	/// `oauth_consumer_key`.
	pub consumer_key: String,
	/// `oauth_token`; empty when the request carries no token.
	pub access_token: String,
	/// Extra request parameters to sign, e.g. form fields.
	pub additional_params: Vec<(String, String)>,
	/// `oauth_nonce`.
	pub nonce: String,
	/// `oauth_timestamp` in Unix seconds.
	pub timestamp: i64,
}
impl SigningRequest {
	/// Protocol parameters for the given signature method, excluding `oauth_signature`.
	pub fn protocol_params(&self, method: SignatureMethod) -> Vec<(&'static str, String)> {
		let mut params = vec![
			("oauth_consumer_key", self.consumer_key.clone()),
			("oauth_nonce", self.nonce.clone()),
			("oauth_signature_method", method.as_str().to_owned()),
			("oauth_timestamp", self.timestamp.to_string()),
			("oauth_version", OAUTH_VERSION.to_owned()),
		];

		if !self.access_token.is_empty() {
			params.push(("oauth_token", self.access_token.clone()));
		}

		params
	}

	/// Normalized parameter string covering protocol, query, and additional parameters.
	pub fn parameter_string(&self, method: SignatureMethod) -> String {
		let protocol = self.protocol_params(method);
		let query = query_params(&self.url);

		build_parameter_string(
			protocol
				.iter()
				.map(|(k, v)| (*k, v.as_str()))
				.chain(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
				.chain(self.additional_params.iter().map(|(k, v)| (k.as_str(), v.as_str()))),
		)
	}

	/// Signature base string for the given signature method.
	pub fn signature_base(&self, method: SignatureMethod) -> String {
		build_signature_base(
			self.http_method.as_str(),
			&base_string_uri(&self.url),
			&self.parameter_string(method),
		)
	}
}

/// Per-integration OAuth 1.0a configuration.
///
/// One signer is built per API integration (a Twitter app with HMAC-SHA1, a Xero private app
/// with RSA-SHA1, …) and reused for every request. Each call to [`OAuth1Signer::prepare`]
/// stamps a fresh timestamp and nonce.
#[derive(Clone, Debug)]
pub struct OAuth1Signer {
	/// `oauth_consumer_key`.
	pub consumer_key: String,
	/// `oauth_token` sent with every request, if any.
	pub access_token: Option<String>,
	/// Signature method.
	pub method: SignatureMethod,
	/// Nonce strategy; defaults to [`NonceSource::TimestampDigest`].
	pub nonce_source: NonceSource,
	key: SignatureKey,
}
impl OAuth1Signer {
	/// Creates a signer, rejecting keys that cannot serve `method`.
	pub fn new(
		consumer_key: impl Into<String>,
		method: SignatureMethod,
		key: SignatureKey,
	) -> Result<Self> {
		match method {
			SignatureMethod::HmacSha1 => {
				key.expect_secret(method.as_str())?;
			},
			SignatureMethod::RsaSha1 => {
				key.expect_rsa(method.as_str())?;
			},
		}

		Ok(Self {
			consumer_key: consumer_key.into(),
			access_token: None,
			method,
			nonce_source: NonceSource::default(),
			key,
		})
	}

	/// HMAC-SHA1 signer keyed with `consumer_secret&token_secret`.
	pub fn hmac_sha1(
		consumer_key: impl Into<String>,
		consumer_secret: &str,
		access_token: impl Into<String>,
		token_secret: &str,
	) -> Self {
		Self {
			consumer_key: consumer_key.into(),
			access_token: Some(access_token.into()).filter(|token| !token.is_empty()),
			method: SignatureMethod::HmacSha1,
			nonce_source: NonceSource::default(),
			key: SignatureKey::hmac(consumer_secret, token_secret),
		}
	}

	/// RSA-SHA1 signer using the consumer's private key.
	pub fn rsa_sha1(consumer_key: impl Into<String>, private_key: RsaPrivateKey) -> Self {
		Self {
			consumer_key: consumer_key.into(),
			access_token: None,
			method: SignatureMethod::RsaSha1,
			nonce_source: NonceSource::default(),
			key: private_key.into(),
		}
	}

	/// Sets the access token sent as `oauth_token`.
	pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
		self.access_token = Some(token.into()).filter(|token| !token.is_empty());

		self
	}

	/// Overrides the nonce strategy.
	pub fn with_nonce_source(mut self, source: NonceSource) -> Self {
		self.nonce_source = source;

		self
	}

	/// Builds a [`SigningRequest`] stamped with the current clock.
	pub fn prepare<I, K, V>(&self, http_method: HttpMethod, url: Url, params: I) -> SigningRequest
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.prepare_at(http_method, url, params, OffsetDateTime::now_utc())
	}

	/// Builds a [`SigningRequest`] stamped with `now`.
	pub fn prepare_at<I, K, V>(
		&self,
		http_method: HttpMethod,
		url: Url,
		params: I,
		now: OffsetDateTime,
	) -> SigningRequest
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let timestamp = now.unix_timestamp();

		SigningRequest {
			url,
			http_method,
			consumer_key: self.consumer_key.clone(),
			access_token: self.access_token.clone().unwrap_or_default(),
			additional_params: params.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
			nonce: self.nonce_source.generate(timestamp),
			timestamp,
		}
	}

	/// Signs `request` and formats the `Authorization` header value.
	pub fn authorize(&self, request: &SigningRequest) -> Result<AuthorizationHeader> {
		obs::observe(OperationKind::OAuth1Signature, "authorize", || {
			let base = request.signature_base(self.method);
			let signature = sign(&base, &self.key, self.method)?;

			Ok(build_auth_header(
				&request.consumer_key,
				&request.nonce,
				&signature,
				&request.access_token,
				self.method,
				request.timestamp,
			))
		})
	}

	/// Signs an outbound [`HttpRequest`] in place and returns the header that was attached.
	///
	/// Query parameters and `application/x-www-form-urlencoded` body fields are signed.
	pub fn sign_http_request(&self, request: &mut HttpRequest) -> Result<AuthorizationHeader> {
		self.sign_http_request_at(request, OffsetDateTime::now_utc())
	}

	/// Same as [`OAuth1Signer::sign_http_request`] with a caller-supplied clock.
	pub fn sign_http_request_at(
		&self,
		request: &mut HttpRequest,
		now: OffsetDateTime,
	) -> Result<AuthorizationHeader> {
		let http_method = HttpMethod::try_from(request.method())?;
		let raw = request.uri().to_string();
		let url = Url::parse(&raw).map_err(|source| ConfigError::InvalidUrl { url: raw, source })?;
		let form = if is_form_encoded(request) {
			url::form_urlencoded::parse(request.body()).into_owned().collect()
		} else {
			Vec::new()
		};
		let signing = self.prepare_at(http_method, url, form, now);
		let header = self.authorize(&signing)?;
		let value = HeaderValue::from_str(header.as_str()).map_err(ConfigError::from)?;

		request.headers_mut().insert(AUTHORIZATION, value);

		Ok(header)
	}
}

fn is_form_encoded(request: &HttpRequest) -> bool {
	request
		.headers()
		.get(CONTENT_TYPE)
		.and_then(|value| value.to_str().ok())
		.is_some_and(|value| value.starts_with(FORM_CONTENT_TYPE))
}
