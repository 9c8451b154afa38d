//! Session-token derivation and verification.
//!
//! A session token proves a visitor already presented the correct secret
//! for one (secret, page) pair. The cookie *name* is derived from the
//! pair so tokens never leak across pages or groups and the name itself
//! reveals neither. The cookie *value* is a salted one-way digest of the
//! secret, so a captured cookie does not yield the password.
//!
//! Expiry is enforced by the cookie transport's TTL, not re-checked here.

use rand::RngCore;

use crate::error::CoreError;
use crate::types::PageId;

// Key-derivation domains. Changing NAME_DOMAIN invalidates every cookie
// already in the wild; the testkit golden vectors pin the derivation.
const NAME_DOMAIN: &str = "pagegate/cookie-name/v1";
const VALUE_DOMAIN: &str = "pagegate/session-token/v1";

const NAME_PREFIX: &str = "pg_";
const SALT_LEN: usize = 16;

/// Token lifetime: 24 hours from issuance.
pub const TOKEN_TTL_SECS: u64 = 86_400;

/// Derive the cookie name for a (secret, page) pair.
///
/// Deterministic: a later request can find the cookie an earlier one
/// issued without any server-side state.
pub fn token_key(secret: &str, page: PageId) -> String {
    let mut hasher = blake3::Hasher::new_derive_key(NAME_DOMAIN);
    hasher.update(secret.as_bytes());
    hasher.update(page.get().to_string().as_bytes());
    let digest = hasher.finalize();
    format!("{NAME_PREFIX}{}", &digest.to_hex().as_str()[..32])
}

/// A verifiable session-token value: a random salt and the salted digest
/// of the secret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionToken {
    salt: [u8; SALT_LEN],
    digest: [u8; 32],
}

impl SessionToken {
    /// Issue a fresh token proving knowledge of `secret`.
    pub fn issue(secret: &str) -> Self {
        let mut salt = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        let digest = Self::salted_digest(&salt, secret);
        Self { salt, digest }
    }

    /// Encode for the cookie transport: `hex(salt).hex(digest)`.
    pub fn encode(&self) -> String {
        format!("{}.{}", hex::encode(self.salt), hex::encode(self.digest))
    }

    /// Parse a transported value.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        let (salt_hex, digest_hex) = value.split_once('.').ok_or(CoreError::MalformedToken)?;

        let salt: [u8; SALT_LEN] = hex::decode(salt_hex)
            .map_err(|_| CoreError::MalformedToken)?
            .try_into()
            .map_err(|_| CoreError::MalformedToken)?;
        let digest: [u8; 32] = hex::decode(digest_hex)
            .map_err(|_| CoreError::MalformedToken)?
            .try_into()
            .map_err(|_| CoreError::MalformedToken)?;

        Ok(Self { salt, digest })
    }

    /// Check this token against a secret.
    ///
    /// The digest comparison is constant-time (`blake3::Hash` equality).
    pub fn verify(&self, secret: &str) -> bool {
        let expected = Self::salted_digest(&self.salt, secret);
        blake3::Hash::from_bytes(expected) == blake3::Hash::from_bytes(self.digest)
    }

    fn salted_digest(salt: &[u8; SALT_LEN], secret: &str) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new_derive_key(VALUE_DOMAIN);
        hasher.update(salt);
        hasher.update(secret.as_bytes());
        *hasher.finalize().as_bytes()
    }
}

/// Verify a transported token value against a secret.
///
/// Malformed values simply fail verification; the decision path never
/// errors.
pub fn verify_token(secret: &str, value: &str) -> bool {
    SessionToken::parse(value)
        .map(|token| token.verify(secret))
        .unwrap_or(false)
}
