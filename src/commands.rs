use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{BuiltinNetwork, RpcPrefs};

/// Outbound request for the wallet store. The core never applies these itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    SetProviderType { network: BuiltinNetwork },
    SetRpcTarget(RpcTarget),
    #[serde(rename = "delRpcTarget", rename_all = "camelCase")]
    DeleteRpcTarget { rpc_url: String },
    #[serde(rename = "hideNetworkDropdown")]
    HideDropdown,
    #[serde(rename_all = "camelCase")]
    SetNetworksTabAddMode { is_in_add_mode: bool },
    Navigate { route: String },
    RecordEvent(MetricsEvent),
    ShowValidationMessage { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTarget {
    pub rpc_target: String,
    pub chain_id: Option<String>,
    pub ticker: String,
    pub nickname: String,
    #[serde(default)]
    pub rpc_prefs: RpcPrefs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsEvent {
    pub category: String,
    pub action: String,
    pub name: String,
    #[serde(default)]
    pub custom_variables: Map<String, Value>,
}

impl MetricsEvent {
    pub fn network_switch(from: &str, to: &str) -> Self {
        let mut custom_variables = Map::new();
        custom_variables.insert("fromNetwork".into(), Value::String(from.to_string()));
        custom_variables.insert("toNetwork".into(), Value::String(to.to_string()));

        Self {
            category: "Navigation".into(),
            action: "Home".into(),
            name: "Switched Networks".into(),
            custom_variables,
        }
    }
}

/// Ordered batch emitted by one controller operation. The store applies a batch
/// as a unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Commands(Vec<Command>);

impl Commands {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) -> &mut Self {
        self.0.push(command);
        self
    }

    pub fn as_slice(&self) -> &[Command] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn closes_dropdown(&self) -> bool {
        self.0.iter().any(|c| matches!(c, Command::HideDropdown))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.0.iter()
    }
}

impl From<Vec<Command>> for Commands {
    fn from(commands: Vec<Command>) -> Self {
        Self(commands)
    }
}

impl IntoIterator for Commands {
    type Item = Command;
    type IntoIter = std::vec::IntoIter<Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Commands {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
