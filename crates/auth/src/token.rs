//! Opaque bearer tokens.
//!
//! A token's plaintext is `"<token-id>|<secret>"`. Only the SHA-256 digest of
//! the secret is stored at rest; the plaintext leaves the server exactly once,
//! in the register/login response that issued it.

use rand::Rng;
use sha2::{Digest, Sha256};

use stockroom_core::TokenId;

const SECRET_LEN: usize = 40;
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// A freshly issued token: the id and digest to persist, and the one-time
/// plaintext for the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub id: TokenId,
    pub digest: String,
    pub plaintext: String,
}

/// Issue a new bearer token.
pub fn issue() -> IssuedToken {
    let id = TokenId::new();
    let secret = random_secret(SECRET_LEN);
    IssuedToken {
        digest: digest(&secret),
        plaintext: format!("{id}|{secret}"),
        id,
    }
}

/// Split a presented credential into its token id and the digest of its
/// secret, for lookup against stored tokens.
///
/// Returns `None` for anything that does not look like `"<uuid>|<secret>"`.
pub fn parse(presented: &str) -> Option<(TokenId, String)> {
    let (id, secret) = presented.split_once('|')?;
    let id: TokenId = id.parse().ok()?;
    if secret.is_empty() {
        return None;
    }
    Some((id, digest(secret)))
}

/// Hex-encoded SHA-256 of a token secret.
pub fn digest(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn random_secret(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_plaintext_parses_back_to_id_and_digest() {
        let token = issue();
        let (id, digest) = parse(&token.plaintext).unwrap();
        assert_eq!(id, token.id);
        assert_eq!(digest, token.digest);
    }

    #[test]
    fn distinct_issues_do_not_collide() {
        let a = issue();
        let b = issue();
        assert_ne!(a.id, b.id);
        assert_ne!(a.digest, b.digest);
    }

    #[test]
    fn parse_rejects_malformed_credentials() {
        assert!(parse("").is_none());
        assert!(parse("no-separator").is_none());
        assert!(parse("not-a-uuid|secret").is_none());
        let id = TokenId::new();
        assert!(parse(&format!("{id}|")).is_none());
    }

    #[test]
    fn tampered_secret_changes_the_digest() {
        let token = issue();
        let tampered = format!("{}x", token.plaintext);
        let (_, digest) = parse(&tampered).unwrap();
        assert_ne!(digest, token.digest);
    }
}
