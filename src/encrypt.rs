//! Gossip encryption key derivation
//!
//! Consul expects a 16-byte symmetric key, base64 encoded. Operators supply
//! an arbitrary passphrase instead, which is stretched into a key of the
//! right width with PBKDF2-HMAC-SHA1 (empty salt, 20 000 rounds).

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use sha1::Sha1;

/// Width of a Consul gossip key in bytes
pub const GOSSIP_KEY_LEN: usize = 16;

/// PBKDF2 rounds used when stretching a passphrase
pub const PBKDF2_ROUNDS: u32 = 20_000;

/// Derive the base64 gossip key for a passphrase
///
/// Deterministic: the same passphrase always yields the same key, so every
/// node in a deployment derives an identical value.
pub fn derive_gossip_key(passphrase: &str) -> String {
    let mut key = [0u8; GOSSIP_KEY_LEN];
    pbkdf2::pbkdf2_hmac::<Sha1>(passphrase.as_bytes(), b"", PBKDF2_ROUNDS, &mut key);
    BASE64_STANDARD.encode(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_passphrase() {
        assert_eq!(derive_gossip_key("banana"), "enqzXBmgKOy13WIGsmUk+g==");
    }

    #[test]
    fn test_key_width() {
        let encoded = derive_gossip_key("");
        let decoded = BASE64_STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded.len(), GOSSIP_KEY_LEN);
    }

    #[test]
    fn test_distinct_passphrases() {
        assert_ne!(derive_gossip_key("banana"), derive_gossip_key("apple"));
    }
}
