pub mod resolve_config;

pub use resolve_config::{
    resolve_config, NormalizedConfig, SelectionConfig, NETWORKS_ROUTE, TOGGLE_CLASS_NAMES,
};
