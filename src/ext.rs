//! Attaching credentials to outbound requests.
//!
//! [`RequestSigner`] is the seam between the signing pipelines and whatever HTTP stack an
//! integration uses: build an [`oauth2::HttpRequest`], let a signer decorate it, then hand it
//! to any [`oauth2::SyncHttpClient`].

pub mod request_signer;

pub use request_signer::*;
