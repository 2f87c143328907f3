//! Access token values kept by the token cache.

pub mod cached;
pub mod secret;
