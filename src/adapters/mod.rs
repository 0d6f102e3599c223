//! Adapters - concrete implementations of ports (traits)

mod memory_store;
mod presence;
mod static_certificate;

#[cfg(test)]
pub mod faulty_store;

pub use memory_store::MemoryStore;
pub use presence::{AlwaysPresent, DeclinePresence};
pub use static_certificate::{StaticCertificate, SAMPLE_CERTIFICATE_BASE64};
