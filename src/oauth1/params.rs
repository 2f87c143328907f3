//! Parameter normalization and signature base string construction.

// self
use crate::{_prelude::*, codec::percent_encode};

/// Normalizes request parameters into the OAuth parameter string.
///
/// Keys and values are percent-encoded first, then sorted by encoded key in byte order. Equal
/// keys fall back to the encoded value so repeated query parameters still sort
/// deterministically. Pairs are joined as `key=value` with `&`.
pub fn build_parameter_string<I, K, V>(params: I) -> String
where
	I: IntoIterator<Item = (K, V)>,
	K: AsRef<str>,
	V: AsRef<str>,
{
	let mut encoded = params
		.into_iter()
		.map(|(k, v)| (percent_encode(k.as_ref()), percent_encode(v.as_ref())))
		.collect::<Vec<_>>();

	encoded.sort_unstable();

	let mut buf = String::new();

	for (idx, (key, value)) in encoded.iter().enumerate() {
		if idx > 0 {
			buf.push('&');
		}

		buf.push_str(key);
		buf.push('=');
		buf.push_str(value);
	}

	buf
}

/// Builds `UPPER(method)&encode(url)&encode(param_string)`.
pub fn build_signature_base(method: &str, url: &str, param_string: &str) -> String {
	format!(
		"{}&{}&{}",
		method.to_ascii_uppercase(),
		percent_encode(url),
		percent_encode(param_string)
	)
}

/// Returns the base string URI of `url`: scheme and host (lowercase), the port only when it
/// is not the scheme default, and the path. Query and fragment are dropped.
pub fn base_string_uri(url: &Url) -> String {
	let mut buf = format!("{}://{}", url.scheme(), url.host_str().unwrap_or_default());

	if let Some(port) = url.port() {
		buf.push(':');
		buf.push_str(&port.to_string());
	}

	buf.push_str(url.path());

	buf
}

/// Decoded query parameters of `url`, in order of appearance.
pub fn query_params(url: &Url) -> Vec<(String, String)> {
	url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect()
}
