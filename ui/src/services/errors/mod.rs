use thiserror::Error;

use crate::features::migrate::MetamaskError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum WalletError {
    #[error("No browser wallet found")]
    NoProvider,

    #[error("Wallet request {method} failed: {source}")]
    Rpc {
        method: String,
        #[source]
        source: MetamaskError,
    },

    #[error("Unexpected wallet response to {method}: {reason}")]
    Decode { method: String, reason: String },

    #[error("No migration contract configured for chain {chain_id}")]
    NoMigrator { chain_id: u64 },

    #[error("Wallet is not connected")]
    NotConnected,
}

pub type WalletResult<T> = Result<T, WalletError>;

impl WalletError {
    /// True when the user dismissed the wallet prompt
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, WalletError::Rpc { source, .. } if source.is_user_rejection())
    }
}

/// Errors reach the page as a `{code, message}` pair
impl From<WalletError> for MetamaskError {
    fn from(error: WalletError) -> Self {
        match error {
            WalletError::Rpc { source, .. } => source,
            other => MetamaskError::from_message(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_errors_keep_provider_code() {
        let error = WalletError::Rpc {
            method: "eth_sendTransaction".to_string(),
            source: MetamaskError::new(4001, "User rejected the request."),
        };
        assert!(error.is_user_rejection());
        let shown: MetamaskError = error.into();
        assert_eq!(shown.code, Some(4001));
    }

    #[test]
    fn local_errors_become_uncoded_messages() {
        let shown: MetamaskError = WalletError::NoMigrator { chain_id: 56 }.into();
        assert_eq!(shown.code, None);
        assert_eq!(
            shown.display_message(),
            Some("No migration contract configured for chain 56")
        );
    }
}
