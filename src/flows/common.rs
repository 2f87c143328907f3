//! Shared helpers for flow implementations (guards, token response handling).

// crates.io
use oauth2::{
	SyncHttpClient,
	basic::BasicErrorResponse,
	http::StatusCode,
};
// self
use crate::{
	_prelude::*,
	auth::{CachedToken, InstallationId},
	error::TokenResponseError,
	flows::JwtBearerClient,
};

/// Successful token endpoint payload.
#[derive(Clone, Deserialize)]
pub struct TokenEndpointResponse {
	/// Issued access token.
	pub access_token: String,
	/// Lifetime in seconds; required.
	#[serde(default)]
	pub expires_in: Option<i64>,
	/// Token type, usually `bearer`.
	#[serde(default)]
	pub token_type: Option<String>,
}
impl TokenEndpointResponse {
	/// Parses a 200 response body, reporting the JSON path of any mismatch.
	pub fn parse(body: &[u8]) -> Result<Self, TokenResponseError> {
		let mut deserializer = serde_json::Deserializer::from_slice(body);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| TokenResponseError::Parse { source })
	}

	/// Converts the payload into a cache entry expiring `expires_in` seconds after `now`.
	pub fn into_cached(self, now: OffsetDateTime) -> Result<CachedToken, TokenResponseError> {
		let expires_in = self.expires_in.ok_or(TokenResponseError::MissingExpiresIn)?;

		if expires_in <= 0 {
			return Err(TokenResponseError::NonPositiveExpiresIn);
		}

		let expiry_epoch = now
			.unix_timestamp()
			.checked_add(expires_in)
			.ok_or(TokenResponseError::ExpiresInOutOfRange)?;

		Ok(CachedToken::new(self.access_token, expiry_epoch))
	}
}
impl Debug for TokenEndpointResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenEndpointResponse")
			.field("access_token", &"<redacted>")
			.field("expires_in", &self.expires_in)
			.field("token_type", &self.token_type)
			.finish()
	}
}

/// Summarizes a non-200 token endpoint response for [`Error::TokenExchangeFailed`].
///
/// RFC 6749 error bodies become `error: error_description`; anything else falls back to the
/// status reason phrase.
pub fn summarize_error_body(status: StatusCode, body: &[u8]) -> String {
	match serde_json::from_slice::<BasicErrorResponse>(body) {
		Ok(err) => {
			let code = AsRef::<str>::as_ref(err.error());

			match err.error_description() {
				Some(description) => format!("{code}: {description}"),
				None => code.to_owned(),
			}
		},
		Err(_) => status.canonical_reason().unwrap_or("unexpected status").to_owned(),
	}
}

/// Returns (and creates on demand) the guard serializing fetches for an installation.
pub(crate) fn flow_guard<C>(client: &JwtBearerClient<C>, key: &InstallationId) -> Arc<Mutex<()>>
where
	C: ?Sized + SyncHttpClient,
{
	let mut guards = client.guards.lock();

	guards.entry(key.clone()).or_insert_with(|| Arc::new(Mutex::new(()))).clone()
}
