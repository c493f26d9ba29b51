pub mod commands;
pub mod config;
pub mod controller;
pub mod endpoints;
pub mod error;
pub mod interaction;
pub mod registry;
pub mod selection;
pub mod state;
pub mod types;

pub use error::{SelectionError, Result};
pub use controller::NetworkSelectionController;
pub use registry::{BuiltinNetwork, NetworkDescriptor, NetworkRegistry, LOCALHOST_RPC_URL};
pub use types::{
    CustomEndpoint, LogLevel, Provider, ProviderType, RpcPrefs, DEFAULT_TICKER, RPC_PROVIDER_TYPE
};

// Re-export commonly used items
pub use commands::{Command, Commands, MetricsEvent, RpcTarget};
pub use config::{NormalizedConfig, SelectionConfig, resolve_config};
pub use endpoints::CustomEndpointStore;
pub use interaction::{ClickTarget, InteractiveRegion, ToggleClassAllowList};
pub use selection::{ActiveSelection, MenuItem, NetworkMenu, resolve_active};
pub use state::{SharedWalletStore, WalletState};
