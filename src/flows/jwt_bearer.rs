//! JWT-bearer grant (RFC 7523) with a per-installation token cache.
//!
//! A cached token is returned while `now < expiry_epoch`; otherwise one assertion is signed and
//! posted to the token endpoint. Only a 200 response updates the cache. Nothing is retried.

// crates.io
use oauth2::{SyncHttpClient, http::StatusCode};
// self
use crate::{
	_prelude::*,
	auth::{CachedToken, TokenSecret},
	config::JWT_BEARER_GRANT_TYPE,
	flows::{
		JwtBearerClient,
		common::{self, TokenEndpointResponse},
	},
	http,
	obs::{self, OperationKind},
	store::TokenStore,
};

impl<C> JwtBearerClient<C>
where
	C: ?Sized + SyncHttpClient,
	C::Error: Send + Sync,
{
	/// Returns a usable access token, exchanging a fresh assertion when needed.
	///
	/// With `use_cache` set, a non-expired cached token is returned without any network call.
	/// Without it, the exchange always happens and its result still replaces the cache entry.
	pub fn fetch_access_token(&self, use_cache: bool) -> Result<TokenSecret> {
		self.fetch_access_token_at(OffsetDateTime::now_utc(), use_cache)
	}

	/// Same as [`JwtBearerClient::fetch_access_token`] with a caller-supplied clock.
	pub fn fetch_access_token_at(&self, now: OffsetDateTime, use_cache: bool) -> Result<TokenSecret> {
		obs::observe(OperationKind::JwtBearer, "fetch_access_token", || {
			let key = &self.config.installation;
			let guard = common::flow_guard(self, key);
			let _singleflight = guard.lock();

			if use_cache
				&& let Some(current) =
					self.store.fetch(key)?.filter(|token| token.is_valid_at(now))
			{
				return Ok(current.access_token);
			}

			let token = self.exchange_assertion(now)?;

			<dyn TokenStore>::save(self.store.as_ref(), key, token.clone())?;

			Ok(token.access_token)
		})
	}

	/// Signs one assertion and exchanges it, without touching the cache.
	pub fn exchange_assertion(&self, now: OffsetDateTime) -> Result<CachedToken> {
		let url = &self.config.token_endpoint;
		let assertion = self.config.assertion_at(now)?.encode(self.config.key())?;
		let request = http::form_post_request(
			url,
			[("grant_type", JWT_BEARER_GRANT_TYPE), ("assertion", assertion.as_str())],
		)?;
		let response = http::execute(&*self.http_client, url, request)?;
		let status = response.status();

		if status != StatusCode::OK {
			return Err(Error::TokenExchangeFailed {
				status: status.as_u16(),
				reason: common::summarize_error_body(status, response.body()),
			});
		}

		Ok(TokenEndpointResponse::parse(response.body())?.into_cached(now)?)
	}
}
