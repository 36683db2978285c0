//! Wallet loading from a base58-encoded secret

use crate::error::{MintError, MintResult};
use solana_sdk::signature::Keypair;

/// Length of an ed25519 keypair secret (32-byte seed + 32-byte public key)
const SECRET_KEY_LEN: usize = 64;

/// Decode a base58-encoded secret into a signing keypair.
///
/// The decoded key material is never logged or persisted.
pub fn load_keypair(secret: &str) -> MintResult<Keypair> {
    let bytes = bs58::decode(secret.trim())
        .into_vec()
        .map_err(|e| MintError::InvalidSecret(format!("not valid base58: {}", e)))?;

    if bytes.len() != SECRET_KEY_LEN {
        return Err(MintError::InvalidSecret(format!(
            "expected {} bytes, got {}",
            SECRET_KEY_LEN,
            bytes.len()
        )));
    }

    Keypair::from_bytes(&bytes).map_err(|e| MintError::InvalidSecret(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::Signer;

    #[test]
    fn test_load_keypair_deterministic() {
        let keypair = Keypair::new();
        let secret = bs58::encode(keypair.to_bytes()).into_string();

        let loaded = load_keypair(&secret).unwrap();
        assert_eq!(loaded.pubkey(), keypair.pubkey());

        // Same secret always yields the same public key
        let reloaded = load_keypair(&secret).unwrap();
        assert_eq!(reloaded.pubkey(), loaded.pubkey());
    }

    #[test]
    fn test_load_keypair_trims_whitespace() {
        let keypair = Keypair::new();
        let secret = format!("  {}\n", bs58::encode(keypair.to_bytes()).into_string());
        assert_eq!(load_keypair(&secret).unwrap().pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_load_keypair_rejects_bad_base58() {
        let err = load_keypair("not-valid-base58-0OIl").unwrap_err();
        assert!(matches!(err, MintError::InvalidSecret(_)));
    }

    #[test]
    fn test_load_keypair_rejects_wrong_length() {
        // 32 bytes is a seed, not a full keypair
        let short = bs58::encode([7u8; 32]).into_string();
        let err = load_keypair(&short).unwrap_err();
        assert!(matches!(err, MintError::InvalidSecret(_)));
    }
}
