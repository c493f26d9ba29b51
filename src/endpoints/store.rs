use url::Url;

use crate::{ActiveSelection, CustomEndpoint, NetworkRegistry, Result, SelectionError};

/// User added RPC endpoints, stored oldest-first.
///
/// `rpc_url` is unique across the store. Entries hydrated from the wallet store
/// are kept as-is, even when they shadow a reserved URL; those are only hidden
/// from [`CustomEndpointStore::list_for_display`].
#[derive(Debug, Clone, Default)]
pub struct CustomEndpointStore {
    registry: NetworkRegistry,
    entries: Vec<CustomEndpoint>,
}

impl CustomEndpointStore {
    pub fn new(registry: NetworkRegistry) -> Self {
        Self {
            registry,
            entries: Vec::new(),
        }
    }

    /// Hydrate from the wallet store's `frequentRpcListDetail`, in storage order.
    pub fn from_entries(
        registry: NetworkRegistry,
        entries: impl IntoIterator<Item = CustomEndpoint>,
    ) -> Self {
        Self {
            registry,
            entries: entries.into_iter().collect(),
        }
    }

    pub fn registry(&self) -> &NetworkRegistry {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Storage order, oldest first.
    pub fn entries(&self) -> &[CustomEndpoint] {
        &self.entries
    }

    pub fn contains(&self, rpc_url: &str) -> bool {
        self.entries.iter().any(|entry| entry.rpc_url == rpc_url)
    }

    pub fn get(&self, rpc_url: &str) -> Option<&CustomEndpoint> {
        self.entries.iter().find(|entry| entry.rpc_url == rpc_url)
    }

    /// Appends `entry`. Nothing changes when it is rejected.
    pub fn add(&mut self, entry: CustomEndpoint) -> Result<()> {
        if self.registry.is_reserved_url(&entry.rpc_url) {
            tracing::debug!(rpc_url = %entry.rpc_url, "rejected reserved RPC endpoint");
            return Err(SelectionError::ReservedEndpoint {
                rpc_url: entry.rpc_url,
            });
        }

        if self.contains(&entry.rpc_url) {
            tracing::debug!(rpc_url = %entry.rpc_url, "rejected duplicate RPC endpoint");
            return Err(SelectionError::DuplicateEndpoint {
                rpc_url: entry.rpc_url,
            });
        }

        if let Err(source) = Url::parse(&entry.rpc_url) {
            return Err(SelectionError::InvalidRpcUrl {
                rpc_url: entry.rpc_url,
                source,
            });
        }

        self.entries.push(entry);
        Ok(())
    }

    /// Removes the entry for `rpc_url`. Absent URLs are a no-op; the return value
    /// only reports whether something was dropped.
    pub fn remove(&mut self, rpc_url: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.rpc_url != rpc_url);
        before != self.entries.len()
    }

    /// Newest first, without reserved URLs and without the active custom entry
    /// (the menu renders that one in its own slot).
    pub fn list_for_display(&self, active: &ActiveSelection) -> Vec<&CustomEndpoint> {
        let active_url = active.custom_rpc_url();

        self.entries
            .iter()
            .rev()
            .filter(|entry| !self.registry.is_reserved_url(&entry.rpc_url))
            .filter(|entry| Some(entry.rpc_url.as_str()) != active_url)
            .collect()
    }
}
