//! Crate-level error types shared by the signers, the token fetcher, and the stores.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Signature or JWT algorithm outside the supported set.
	#[error("Unsupported signing algorithm `{algorithm}`.")]
	UnsupportedAlgorithm {
		/// Algorithm label exactly as supplied by the caller.
		algorithm: String,
	},
	/// Token endpoint answered with a status other than 200.
	#[error("Token exchange failed with HTTP {status}: {reason}.")]
	TokenExchangeFailed {
		/// HTTP status code returned by the token endpoint.
		status: u16,
		/// Provider-supplied error summary, or the status reason phrase.
		reason: String,
	},
	/// Signing key or certificate is missing, unreadable, or unusable.
	#[error(transparent)]
	KeyMaterial(#[from] KeyMaterialError),

	/// Storage-layer failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Token endpoint returned 200 with an unusable body.
	#[error(transparent)]
	TokenResponse(#[from] TokenResponseError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
}
impl Error {
	/// Builds an [`Error::UnsupportedAlgorithm`] for the provided label.
	pub fn unsupported_algorithm(algorithm: impl Into<String>) -> Self {
		Self::UnsupportedAlgorithm { algorithm: algorithm.into() }
	}
}

/// Failures raised while loading or using signing keys.
#[derive(Debug, ThisError)]
pub enum KeyMaterialError {
	/// Key file could not be read.
	#[error("Failed to read key material from {path}.")]
	Read {
		/// Path that was read.
		path: String,
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},
	/// PEM payload could not be decoded as a PKCS#8 or PKCS#1 RSA private key.
	#[error("Key material is not a valid PEM-encoded RSA private key.")]
	InvalidPem,
	/// HMAC primitive rejected the key.
	#[error("HMAC key is invalid.")]
	InvalidHmacKey,
	/// Shared secret was empty.
	#[error("Shared secret is empty.")]
	EmptySecret,
	/// The configured key does not match the requested algorithm family.
	#[error("Algorithm {algorithm} requires {expected} key material.")]
	WrongKeyKind {
		/// Algorithm that was requested.
		algorithm: String,
		/// Key kind the algorithm needs.
		expected: &'static str,
	},
	/// Underlying signing primitive rejected the key or message.
	#[error("Signing primitive failed.")]
	Signing {
		/// Primitive-specific failure.
		#[source]
		source: BoxError,
	},
}
impl KeyMaterialError {
	/// Wraps a signing primitive failure.
	pub fn signing(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Signing { source: Box::new(src) }
	}
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// A URL could not be parsed.
	#[error("URL `{url}` is invalid.")]
	InvalidUrl {
		/// Raw URL supplied by the caller.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoints must use HTTPS unless they point at a loopback host.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// A required builder field was never set.
	#[error("Missing required setting `{field}`.")]
	MissingField {
		/// Name of the missing field.
		field: &'static str,
	},
	/// Assertion lifetime must be strictly positive.
	#[error("Assertion lifetime must be positive.")]
	NonPositiveLifetime,
	/// Assertion lifetime exceeds the supported maximum or overflows the expiry claim.
	#[error("Assertion lifetime of {seconds}s is out of range.")]
	LifetimeOutOfRange {
		/// Requested lifetime in whole seconds.
		seconds: i64,
	},
	/// Only GET and POST requests can be signed.
	#[error("HTTP method `{method}` cannot be signed.")]
	UnsupportedHttpMethod {
		/// Method label as supplied.
		method: String,
	},
	/// Header value contains bytes that are not valid in an HTTP header.
	#[error("Authorization header value is not a valid HTTP header.")]
	InvalidHeaderValue(#[from] oauth2::http::header::InvalidHeaderValue),
	/// Installation identifier failed validation.
	#[error(transparent)]
	InvalidIdentifier(#[from] crate::auth::IdentifierError),
	/// JWT header or claims could not be serialized.
	#[error("JWT segment could not be serialized.")]
	JwtSerialize(#[from] serde_json::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// The token endpoint answered 200 but the body could not be used.
#[derive(Debug, ThisError)]
pub enum TokenResponseError {
	/// Body is not the expected JSON shape.
	#[error("Token endpoint returned malformed JSON.")]
	Parse {
		/// Structured parsing failure with the offending JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Response omitted `expires_in`.
	#[error("Token endpoint response is missing expires_in.")]
	MissingExpiresIn,
	/// Response carried a zero or negative `expires_in`.
	#[error("The expires_in value must be positive.")]
	NonPositiveExpiresIn,
	/// Response carried an `expires_in` that overflows the clock.
	#[error("The expires_in value exceeds the supported range.")]
	ExpiresInOutOfRange,
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling {url}.")]
	Network {
		/// Target URL of the failed call.
		url: String,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(url: &Url, src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { url: url.to_string(), source: Box::new(src) }
	}
}
