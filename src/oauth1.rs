//! OAuth 1.0a request signing (RFC 5849 §3.4).
//!
//! The pipeline is: collect protocol + request parameters, normalize them into a parameter
//! string, wrap that into the signature base string, sign it with HMAC-SHA1 or RSA-SHA1, and
//! format the `Authorization: OAuth …` header.
//!
//! ```text
//! base = UPPER(method) & encode(base-uri) & encode(k1=v1&k2=v2…)
//! ```

pub mod header;
pub mod method;
pub mod nonce;
pub mod params;
pub mod signer;

pub use header::*;
pub use method::*;
pub use nonce::*;
pub use params::*;
pub use signer::*;

/// Value of the `oauth_version` protocol parameter.
pub const OAUTH_VERSION: &str = "1.0";
