//! Blocking HTTP plumbing shared by the token fetcher and request signers.
//!
//! Any [`SyncHttpClient`] can serve as the transport, including plain closures of the shape
//! `Fn(HttpRequest) -> Result<HttpResponse, E>`. With the `reqwest` feature the crate ships
//! [`ReqwestHttpClient`], which never follows redirects: token endpoints must answer directly.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
use oauth2::{
	HttpRequest, HttpResponse, SyncHttpClient,
	http::{
		HeaderName, HeaderValue, Method,
		header::{ACCEPT, CONTENT_TYPE},
	},
};
// self
use crate::{
	_prelude::*,
	error::{ConfigError, TransportError},
};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Builds a `POST` request with an `application/x-www-form-urlencoded` body.
pub fn form_post_request<I, K, V>(url: &Url, form: I) -> Result<HttpRequest>
where
	I: IntoIterator,
	I::Item: std::borrow::Borrow<(K, V)>,
	K: AsRef<str>,
	V: AsRef<str>,
{
	let body = url::form_urlencoded::Serializer::new(String::new()).extend_pairs(form).finish();
	let request = oauth2::http::Request::builder()
		.method(Method::POST)
		.uri(url.as_str())
		.header(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE))
		.header(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE))
		.body(body.into_bytes())
		.map_err(ConfigError::from)?;

	Ok(request)
}

/// Builds a `GET` request carrying the supplied headers.
pub fn get_request<I>(url: &Url, headers: I) -> Result<HttpRequest>
where
	I: IntoIterator<Item = (HeaderName, HeaderValue)>,
{
	let mut request = oauth2::http::Request::builder()
		.method(Method::GET)
		.uri(url.as_str())
		.body(Vec::new())
		.map_err(ConfigError::from)?;

	request.headers_mut().extend(headers);

	Ok(request)
}

/// Executes `request` on `client`, wrapping transport failures with the target URL.
pub fn execute<C>(client: &C, url: &Url, request: HttpRequest) -> Result<HttpResponse>
where
	C: ?Sized + SyncHttpClient,
	C::Error: Send + Sync,
{
	client.call(request).map_err(|e| TransportError::network(url, e).into())
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Builds a blocking client that does not follow redirects.
	pub fn new() -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().redirect(reqwest::redirect::Policy::none()).build()?;

		Ok(Self(client))
	}

	/// Wraps an existing client. Configure it to disable redirect following.
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl SyncHttpClient for ReqwestHttpClient {
	type Error = ReqwestError;

	fn call(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error> {
		let response = self.0.execute(request.try_into()?)?;
		let status = response.status();
		let headers = response.headers().to_owned();
		let mut response_new = HttpResponse::new(response.bytes()?.to_vec());

		*response_new.status_mut() = status;
		*response_new.headers_mut() = headers;

		Ok(response_new)
	}
}
