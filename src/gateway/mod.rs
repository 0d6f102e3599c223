//! Store gateway, access policy builder and cleanup routine
//!
//! The building blocks the provisioning orchestrator sequences.

mod access_policy;
mod cleanup;
mod store_gateway;

pub use access_policy::build_access_control;
pub use cleanup::purge_all;
pub use store_gateway::{Purge, StoreGateway};
