//! Token metadata record and storage gateway upload

use crate::error::{MintError, MintResult};
use mpl_token_metadata::types::DataV2;
use serde::{Deserialize, Serialize};

/// Metaplex on-chain field limits
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;

/// Descriptive token record uploaded to the storage gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image: String,
}

impl TokenMetadata {
    /// Validate fields against the on-chain metadata limits
    pub fn validate(&self) -> MintResult<()> {
        if self.name.is_empty() {
            return Err(MintError::InvalidParameters(
                "token name must not be empty".to_string(),
            ));
        }
        if self.name.len() > MAX_NAME_LEN {
            return Err(MintError::InvalidParameters(format!(
                "token name exceeds {} bytes",
                MAX_NAME_LEN
            )));
        }
        if self.symbol.len() > MAX_SYMBOL_LEN {
            return Err(MintError::InvalidParameters(format!(
                "token symbol exceeds {} bytes",
                MAX_SYMBOL_LEN
            )));
        }
        Ok(())
    }

    /// Derive the on-chain metadata view with the storage URI spliced in.
    ///
    /// Fee basis points, creators, collection, and uses are zeroed; this
    /// pipeline mints plain fungible tokens.
    pub fn to_data_v2(&self, uri: String) -> DataV2 {
        DataV2 {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            uri,
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        }
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    uri: String,
}

/// Upload the metadata record to the storage gateway and return its
/// permanent URI.
///
/// Not idempotent: each call stores a fresh copy under a new URI, so the
/// caller must reuse the returned value rather than re-invoking. No retry
/// is performed here.
pub async fn upload_metadata(
    http: &reqwest::Client,
    gateway_url: &str,
    metadata: &TokenMetadata,
) -> MintResult<String> {
    let response = http
        .post(gateway_url)
        .json(metadata)
        .send()
        .await
        .map_err(|e| MintError::Upload(format!("storage gateway unreachable: {}", e)))?;

    let response = response
        .error_for_status()
        .map_err(|e| MintError::Upload(format!("storage gateway rejected upload: {}", e)))?;

    let body: UploadResponse = response
        .json()
        .await
        .map_err(|e| MintError::Upload(format!("malformed gateway response: {}", e)))?;

    Ok(body.uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TokenMetadata {
        TokenMetadata {
            name: "Test Token".to_string(),
            symbol: "TEST".to_string(),
            description: "A token minted in tests".to_string(),
            image: "https://example.com/token.png".to_string(),
        }
    }

    #[test]
    fn test_json_round_trip() {
        let metadata = record();
        let json = serde_json::to_string(&metadata).unwrap();
        let restored: TokenMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, metadata);
    }

    #[test]
    fn test_validate_limits() {
        assert!(record().validate().is_ok());

        let mut metadata = record();
        metadata.name = String::new();
        assert!(matches!(
            metadata.validate(),
            Err(MintError::InvalidParameters(_))
        ));

        let mut metadata = record();
        metadata.name = "x".repeat(MAX_NAME_LEN + 1);
        assert!(metadata.validate().is_err());

        let mut metadata = record();
        metadata.symbol = "y".repeat(MAX_SYMBOL_LEN + 1);
        assert!(metadata.validate().is_err());
    }

    #[test]
    fn test_to_data_v2() {
        let metadata = record();
        let data = metadata.to_data_v2("https://arweave.net/abc123".to_string());
        assert_eq!(data.name, metadata.name);
        assert_eq!(data.symbol, metadata.symbol);
        assert_eq!(data.uri, "https://arweave.net/abc123");
        assert_eq!(data.seller_fee_basis_points, 0);
        assert!(data.creators.is_none());
        assert!(data.collection.is_none());
        assert!(data.uses.is_none());
    }
}
