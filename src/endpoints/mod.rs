pub mod store;

pub use store::CustomEndpointStore;
