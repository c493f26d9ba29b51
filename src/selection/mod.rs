pub mod menu;
pub mod resolve_active;

pub use menu::{MenuItem, NetworkMenu};
pub use resolve_active::{resolve_active, ActiveSelection};
