mod common;

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
use oauth_signer::{
	crypto::{self, SignatureKey},
	oauth1::{
		self, HttpMethod, NonceSource, OAuth1Signer, SignatureMethod, SigningRequest,
		build_auth_header, build_parameter_string, build_signature_base,
	},
	oauth2::{
		HttpRequest,
		http::{
			Method, Request,
			header::{AUTHORIZATION, CONTENT_TYPE},
		},
	},
};
use rsa::{
	pkcs1::{EncodeRsaPrivateKey, LineEnding},
	pkcs1v15::{Signature, VerifyingKey},
	signature::Verifier,
};
use sha1::Sha1;
use time::macros;
use url::Url;
// self
use common::*;

const REFERENCE_BASE: &str = "GET&https%3A%2F%2Fapi.example.com%2Fx&oauth_consumer_key%3Dck%26\
	oauth_nonce%3Dabc%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1000%26\
	oauth_token%3Dat%26oauth_version%3D1.0";

fn reference_request() -> SigningRequest {
	SigningRequest {
		url: Url::parse("https://api.example.com/x").expect("Fixture URL should parse."),
		http_method: HttpMethod::Get,
		consumer_key: "ck".into(),
		access_token: "at".into(),
		additional_params: Vec::new(),
		nonce: "abc".into(),
		timestamp: 1_000,
	}
}

fn header_field<'a>(header: &'a str, name: &str) -> &'a str {
	let needle = format!("{name}=\"");
	let start = header.find(&needle).expect("Header field should be present.") + needle.len();
	let len = header[start..].find('"').expect("Header field should be quoted.");

	&header[start..start + len]
}

#[test]
fn reference_base_string_matches_free_functions_and_request() {
	let params = build_parameter_string([
		("oauth_nonce", "abc"),
		("oauth_consumer_key", "ck"),
		("oauth_signature_method", "HMAC-SHA1"),
		("oauth_timestamp", "1000"),
		("oauth_token", "at"),
		("oauth_version", "1.0"),
	]);

	assert_eq!(build_signature_base("GET", "https://api.example.com/x", &params), REFERENCE_BASE);
	assert_eq!(reference_request().signature_base(SignatureMethod::HmacSha1), REFERENCE_BASE);
}

#[test]
fn hmac_header_carries_verifiable_signature() {
	let signer = OAuth1Signer::hmac_sha1("ck", "cs", "at", "ts");
	let header = signer.authorize(&reference_request()).expect("Signing should succeed.");
	let expected = crypto::hmac(
		REFERENCE_BASE.as_bytes(),
		b"cs&ts",
		crypto::DigestAlgorithm::Sha1,
	)
	.expect("HMAC should accept the key.");

	assert_eq!(
		header_field(header.as_str(), "oauth_signature"),
		oauth_signer::codec::percent_encode(&STANDARD.encode(expected))
	);
	assert_eq!(header_field(header.as_str(), "oauth_token"), "at");
	assert_eq!(header_field(header.as_str(), "oauth_version"), oauth1::OAUTH_VERSION);
}

#[test]
fn hmac_signature_matches_published_twitter_vector() {
	let signer = OAuth1Signer::hmac_sha1(
		"xvz1evFS4wEEPTGEFPHBog",
		"kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
		"370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
		"LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
	);
	let request = SigningRequest {
		url: Url::parse("https://api.twitter.com/1.1/statuses/update.json?include_entities=true")
			.expect("Fixture URL should parse."),
		http_method: HttpMethod::Post,
		consumer_key: "xvz1evFS4wEEPTGEFPHBog".into(),
		access_token: "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb".into(),
		additional_params: vec![(
			"status".into(),
			"Hello Ladies + Gentlemen, a signed OAuth request!".into(),
		)],
		nonce: "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg".into(),
		timestamp: 1_318_622_958,
	};
	let base = request.signature_base(SignatureMethod::HmacSha1);

	assert!(base.starts_with(
		"POST&https%3A%2F%2Fapi.twitter.com%2F1.1%2Fstatuses%2Fupdate.json&include_entities%3Dtrue%26"
	));
	assert!(base.ends_with(
		"oauth_version%3D1.0%26status%3DHello%2520Ladies%2520%252B%2520Gentlemen%252C%2520a%2520\
		 signed%2520OAuth%2520request%2521"
	));

	let header = signer.authorize(&request).expect("Signing should succeed.");

	assert_eq!(header_field(header.as_str(), "oauth_signature"), "hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D");
}

#[test]
fn rsa_sha1_signature_verifies_with_public_key() {
	let private = fixture_key();
	let signer =
		OAuth1Signer::rsa_sha1("xero-consumer", private.clone()).with_access_token("xero-consumer");
	let request = signer.prepare_at(
		HttpMethod::Get,
		Url::parse("https://api.xero.com/api.xro/2.0/Invoices?page=1")
			.expect("Fixture URL should parse."),
		Vec::<(String, String)>::new(),
		macros::datetime!(2025-03-01 09:00 UTC),
	);
	let header = signer.authorize(&request).expect("RSA signing should succeed.");
	let encoded = header_field(header.as_str(), "oauth_signature");
	let decoded = percent_encoding::percent_decode_str(encoded)
		.decode_utf8()
		.expect("Signature should be UTF-8.");
	let raw = STANDARD.decode(decoded.as_bytes()).expect("Signature should be base64.");
	let signature = Signature::try_from(raw.as_slice()).expect("Signature bytes should be valid.");

	<VerifyingKey<Sha1>>::new(private.to_public_key())
		.verify(request.signature_base(SignatureMethod::RsaSha1).as_bytes(), &signature)
		.expect("Signature should verify against the public key.");
	assert_eq!(header_field(header.as_str(), "oauth_signature_method"), "RSA-SHA1");
}

#[test]
fn rsa_signatures_are_deterministic() {
	let key = SignatureKey::from_pem_file(fixture_path()).expect("Fixture PEM should load.");
	let first =
		oauth1::sign(REFERENCE_BASE, &key, SignatureMethod::RsaSha1).expect("RSA should sign.");
	let second =
		oauth1::sign(REFERENCE_BASE, &key, SignatureMethod::RsaSha1).expect("RSA should sign.");

	assert_eq!(first, second);
}

#[test]
fn pkcs1_and_pkcs8_pem_load_the_same_key() {
	let pkcs8 = fixture_key();
	let pkcs1 = pkcs8.to_pkcs1_pem(LineEnding::LF).expect("Key should re-encode as PKCS#1.");
	let reparsed = crypto::parse_private_key_pem(&pkcs1).expect("PKCS#1 PEM should parse.");

	assert_eq!(reparsed, pkcs8);
}

#[test]
fn missing_key_file_is_key_material_error() {
	let err = SignatureKey::from_pem_file("/nonexistent/oauth-signer/key.pem")
		.expect_err("Missing file must fail.");

	assert!(matches!(err, oauth_signer::error::KeyMaterialError::Read { .. }));
}

#[test]
fn form_post_is_signed_with_body_parameters() {
	let signer = OAuth1Signer::hmac_sha1("ck", "cs", "at", "ts");
	let now = macros::datetime!(2025-03-01 09:00 UTC);
	let mut request: HttpRequest = Request::builder()
		.method(Method::POST)
		.uri("https://api.twitter.com/1.1/statuses/update.json?include_entities=true")
		.header(CONTENT_TYPE, "application/x-www-form-urlencoded")
		.body(b"status=Hello%20Ladies%20%2B%20Gentlemen".to_vec())
		.expect("Fixture request should build.");
	let header = signer.sign_http_request_at(&mut request, now).expect("Signing should succeed.");
	let expected = signer.prepare_at(
		HttpMethod::Post,
		Url::parse("https://api.twitter.com/1.1/statuses/update.json?include_entities=true")
			.expect("Fixture URL should parse."),
		[("status", "Hello Ladies + Gentlemen")],
		now,
	);

	assert!(
		expected
			.signature_base(SignatureMethod::HmacSha1)
			.contains("status%3DHello%2520Ladies%2520%252B%2520Gentlemen")
	);
	assert_eq!(signer.authorize(&expected).expect("Signing should succeed."), header);
	assert_eq!(
		request.headers().get(AUTHORIZATION).map(|value| value.as_bytes()),
		Some(header.as_str().as_bytes())
	);
}

#[test]
fn empty_access_token_is_left_out_everywhere() {
	let signer = OAuth1Signer::new(
		"ck",
		SignatureMethod::HmacSha1,
		SignatureKey::hmac("cs", ""),
	)
	.expect("HMAC signer should accept a shared secret.")
	.with_nonce_source(NonceSource::Random);
	let request = signer.prepare(
		HttpMethod::Get,
		Url::parse("https://api.example.com/x").expect("Fixture URL should parse."),
		Vec::<(String, String)>::new(),
	);
	let header = signer.authorize(&request).expect("Signing should succeed.");

	assert!(!request.signature_base(SignatureMethod::HmacSha1).contains("oauth_token"));
	assert!(!header.as_str().contains("oauth_token"));
	assert_eq!(header_field(header.as_str(), "oauth_nonce").len(), 32);
}

#[test]
fn unsupported_methods_fail_before_signing() {
	assert!(matches!(
		"PLAINTEXT".parse::<SignatureMethod>(),
		Err(oauth_signer::error::Error::UnsupportedAlgorithm { .. })
	));

	let signer = OAuth1Signer::hmac_sha1("ck", "cs", "", "");
	let mut request: HttpRequest = Request::builder()
		.method(Method::DELETE)
		.uri("https://api.example.com/x")
		.body(Vec::new())
		.expect("Fixture request should build.");

	assert!(signer.sign_http_request(&mut request).is_err());
	assert!(request.headers().get(AUTHORIZATION).is_none());
}

#[test]
fn header_builder_matches_signer_output() {
	let signer = OAuth1Signer::hmac_sha1("ck", "cs", "at", "ts");
	let request = reference_request();
	let signature = oauth1::sign(
		&request.signature_base(SignatureMethod::HmacSha1),
		&SignatureKey::hmac("cs", "ts"),
		SignatureMethod::HmacSha1,
	)
	.expect("HMAC signing should succeed.");

	assert_eq!(
		build_auth_header("ck", "abc", &signature, "at", SignatureMethod::HmacSha1, 1_000),
		signer.authorize(&request).expect("Signing should succeed.")
	);
}
