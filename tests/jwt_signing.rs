mod common;

// crates.io
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use oauth_signer::{
	codec,
	crypto::SignatureKey,
	error::Error,
	jwt::{JwtAlgorithm, JwtAssertion, JwtClaims, JwtHeader, sign_jwt},
};
use rsa::{
	pkcs1v15::{Signature, VerifyingKey},
	signature::Verifier,
};
use sha2::Sha384;
use time::Duration;
// self
use common::*;

fn claims() -> JwtClaims {
	JwtClaims::new(
		CLIENT_KEY,
		"https://app.iformbuilder.com/exzact/api/oauth/token",
		T0,
		Duration::seconds(540),
	)
	.expect("Claims fixture should be valid.")
}

#[test]
fn base64url_is_unpadded_url_alphabet() {
	assert_eq!(codec::base64_url_encode([0xfb, 0xff]), "-_8");
	assert_eq!(codec::base64_encode([0xfb, 0xff]), "+/8=");
	assert_eq!(codec::base64_url_encode(b""), "");
}

#[test]
fn every_algorithm_produces_three_segments() {
	let secret =
		SignatureKey::shared_secret(CLIENT_SECRET).expect("Secret fixture should be valid.");
	let rsa = SignatureKey::from(fixture_key());

	for alg in JwtAlgorithm::ALL {
		let key = if alg.is_hmac() { &secret } else { &rsa };
		let token = JwtAssertion::new(alg, claims()).encode(key).expect("Signing should succeed.");
		let segments = token.split('.').collect::<Vec<_>>();
		let header: JwtHeader = serde_json::from_slice(
			&URL_SAFE_NO_PAD.decode(segments[0]).expect("Header should be base64url."),
		)
		.expect("Header should be JSON.");

		assert_eq!(segments.len(), 3);
		assert_eq!(header, JwtHeader::new(alg));
		assert!(segments.iter().all(|segment| !segment.is_empty()));
	}
}

#[test]
fn rs384_signature_verifies() {
	let private = fixture_key();
	let token = JwtAssertion::new(JwtAlgorithm::Rs384, claims())
		.encode(&SignatureKey::from(private.clone()))
		.expect("RS384 signing should succeed.");
	let (signing_input, signature) = token.rsplit_once('.').expect("Token should have segments.");
	let signature = URL_SAFE_NO_PAD.decode(signature).expect("Signature should be base64url.");
	let signature = Signature::try_from(signature.as_slice()).expect("Signature should be valid.");

	<VerifyingKey<Sha384>>::new(private.to_public_key())
		.verify(signing_input.as_bytes(), &signature)
		.expect("Signature should verify against the public key.");
}

#[test]
fn claims_keep_expiry_after_issue() {
	let claims = claims();

	assert!(claims.exp > claims.iat);
	assert_eq!(claims.iat, T0.unix_timestamp());
}

#[test]
fn unknown_algorithms_are_rejected() {
	for label in ["none", "ES256", "HS1024"] {
		assert!(matches!(
			JwtHeader::for_algorithm(label),
			Err(Error::UnsupportedAlgorithm { ref algorithm }) if algorithm == label
		));
	}

	let key = SignatureKey::shared_secret(CLIENT_SECRET).expect("Secret fixture should be valid.");
	let header = JwtHeader::new(JwtAlgorithm::Rs256);

	assert!(matches!(sign_jwt(&header, &claims(), &key), Err(Error::KeyMaterial(_))));
}
