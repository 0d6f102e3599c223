mod attributes;
mod certificate;
mod handles;
mod item;
mod key_spec;
mod policy;
mod query;
mod status;
mod variant;

pub use attributes::{ApplicationLabel, ApplicationTag};
pub use certificate::{CertificateBlob, CertificateError};
pub use handles::{CertificateRef, IdentityRef, ItemRef, KeyRef};
pub use item::{ItemClass, KeyClass, KeyType};
pub use key_spec::KeyPairSpec;
pub use policy::{AccessControl, AccessPolicy, Accessibility, PresenceRequirement};
pub use query::{ItemValue, NewItem, Query};
pub use status::{StoreResult, StoreStatus};
pub use variant::Variant;
