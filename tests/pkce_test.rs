use rand::{SeedableRng, rngs::StdRng};
use trackferry::pkce::*;

#[test]
fn test_generate_code_verifier_length_and_alphabet() {
    for length in [1usize, 43, 64, VERIFIER_LENGTH] {
        let verifier = generate_code_verifier(length);

        // Should be exactly the requested number of characters
        assert_eq!(verifier.len(), length);

        // Should contain only alphanumeric characters
        assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    // Two generated verifiers should be different
    let verifier = generate_code_verifier(VERIFIER_LENGTH);
    let verifier2 = generate_code_verifier(VERIFIER_LENGTH);
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_verifier_with_seeded_rng() {
    // Substituting the random source must not change the contract
    let a = generate_code_verifier_with(StdRng::seed_from_u64(7), 43);
    let b = generate_code_verifier_with(StdRng::seed_from_u64(7), 43);
    let c = generate_code_verifier_with(StdRng::seed_from_u64(8), 43);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.len(), 43);
    assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(!challenge.contains('+'));
    assert!(!challenge.contains('/'));
    assert!(!challenge.ends_with('='));
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_generate_code_challenge_rfc7636_vector() {
    // Appendix B of RFC 7636
    let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
    let challenge = generate_code_challenge(verifier);
    assert_eq!(challenge, "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");
}

#[test]
fn test_generate_code_challenge_known_digest() {
    // SHA-256("test"), base64url without padding
    let challenge = generate_code_challenge("test");
    assert_eq!(challenge, "n4bQgYhMfWWaL-qgxVrQFaO_TxsrC4Is0V1sFbDwCgg");

    // 32-byte digest encodes to 43 characters without padding
    assert_eq!(challenge.len(), 43);
}
