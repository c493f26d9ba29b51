#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("RPC endpoint {rpc_url} is already in the custom list")]
    DuplicateEndpoint { rpc_url: String },

    #[error("RPC endpoint {rpc_url} is reserved by a built-in network")]
    ReservedEndpoint { rpc_url: String },

    #[error("Invalid RPC URL {rpc_url}: {source}")]
    InvalidRpcUrl {
        rpc_url: String,
        source: url::ParseError,
    },
}

impl SelectionError {
    /// Reserved URLs are rejected as duplicates of the built-in entry they shadow.
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            SelectionError::DuplicateEndpoint { .. } | SelectionError::ReservedEndpoint { .. }
        )
    }

    pub fn rpc_url(&self) -> &str {
        match self {
            SelectionError::DuplicateEndpoint { rpc_url }
            | SelectionError::ReservedEndpoint { rpc_url }
            | SelectionError::InvalidRpcUrl { rpc_url, .. } => rpc_url,
        }
    }
}

pub type Result<T> = std::result::Result<T, SelectionError>;
