//! Signature methods and the HTTP methods that can be signed.

// crates.io
use oauth2::http::Method;
// self
use crate::{_prelude::*, error::ConfigError};

/// OAuth 1.0a signature methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignatureMethod {
	/// HMAC-SHA1 keyed with `consumer_secret&token_secret`.
	#[serde(rename = "HMAC-SHA1")]
	HmacSha1,
	/// RSASSA-PKCS1-v1_5 over SHA-1 with the consumer's private key.
	#[serde(rename = "RSA-SHA1")]
	RsaSha1,
}
impl SignatureMethod {
	/// Returns the `oauth_signature_method` label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::HmacSha1 => "HMAC-SHA1",
			Self::RsaSha1 => "RSA-SHA1",
		}
	}

	/// Returns `true` for the symmetric (shared secret) family.
	pub const fn is_hmac(self) -> bool {
		matches!(self, Self::HmacSha1)
	}
}
impl Display for SignatureMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for SignatureMethod {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		if s.eq_ignore_ascii_case("HMAC-SHA1") {
			Ok(Self::HmacSha1)
		} else if s.eq_ignore_ascii_case("RSA-SHA1") {
			Ok(Self::RsaSha1)
		} else {
			Err(Error::unsupported_algorithm(s))
		}
	}
}

/// HTTP methods the signer accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
	/// `GET`.
	Get,
	/// `POST`.
	Post,
}
impl HttpMethod {
	/// Returns the uppercase method label used in the base string.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for HttpMethod {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.eq_ignore_ascii_case("GET") {
			Ok(Self::Get)
		} else if s.eq_ignore_ascii_case("POST") {
			Ok(Self::Post)
		} else {
			Err(ConfigError::UnsupportedHttpMethod { method: s.to_owned() })
		}
	}
}
impl TryFrom<&Method> for HttpMethod {
	type Error = ConfigError;

	fn try_from(method: &Method) -> Result<Self, Self::Error> {
		method.as_str().parse()
	}
}
impl From<HttpMethod> for Method {
	fn from(method: HttpMethod) -> Self {
		match method {
			HttpMethod::Get => Method::GET,
			HttpMethod::Post => Method::POST,
		}
	}
}
