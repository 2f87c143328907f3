//! Request signers for OAuth 1.0a, static bearer tokens, and JWT-bearer fetchers.

// crates.io
use oauth2::{
	HttpRequest, SyncHttpClient,
	http::header::{AUTHORIZATION, HeaderValue},
};
// self
use crate::{
	_prelude::*, auth::TokenSecret, error::ConfigError, flows::JwtBearerClient,
	oauth1::OAuth1Signer,
};

/// Decorates an outbound request with authorization state.
pub trait RequestSigner
where
	Self: Send + Sync,
{
	/// Adds or replaces the request's `Authorization` header.
	fn sign_request(&self, request: &mut HttpRequest) -> Result<()>;
}
impl RequestSigner for OAuth1Signer {
	fn sign_request(&self, request: &mut HttpRequest) -> Result<()> {
		self.sign_http_request(request).map(|_| ())
	}
}
impl<C> RequestSigner for JwtBearerClient<C>
where
	C: ?Sized + Send + Sync + SyncHttpClient,
	C::Error: Send + Sync,
{
	fn sign_request(&self, request: &mut HttpRequest) -> Result<()> {
		BearerToken(self.fetch_access_token(true)?).sign_request(request)
	}
}

/// Static OAuth 2.0 bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BearerToken(pub TokenSecret);
impl BearerToken {
	/// Wraps an access token.
	pub fn new(token: impl Into<String>) -> Self {
		Self(TokenSecret::new(token))
	}

	/// Formats `Bearer <token>`, marked sensitive so HTTP stacks skip it in logs.
	pub fn header_value(&self) -> Result<HeaderValue> {
		let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0.expose()))
			.map_err(ConfigError::from)?;

		value.set_sensitive(true);

		Ok(value)
	}
}
impl From<TokenSecret> for BearerToken {
	fn from(secret: TokenSecret) -> Self {
		Self(secret)
	}
}
impl RequestSigner for BearerToken {
	fn sign_request(&self, request: &mut HttpRequest) -> Result<()> {
		request.headers_mut().insert(AUTHORIZATION, self.header_value()?);

		Ok(())
	}
}
