//! Use cases (orchestration)
//!
//! Use cases drive the secure store through the gateway to provision an
//! identity and to use it afterwards.

mod provision_identity;
mod retrieve_identity;

pub use provision_identity::{Provisioner, ProvisioningState};
pub use retrieve_identity::{retrieve_identity, sign_with_identity};
