use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

/// Verifier length used for a login attempt. RFC 7636 permits 43 to 128
/// characters; the longest allowed value is used.
pub const VERIFIER_LENGTH: usize = 128;

pub fn generate_code_verifier(length: usize) -> String {
    generate_code_verifier_with(rand::rng(), length)
}

/// Same as [`generate_code_verifier`] but with a caller-supplied random
/// source, so the generator can be swapped for a seeded or audited one
/// without changing the output contract.
pub fn generate_code_verifier_with<R: Rng>(rng: R, length: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}
