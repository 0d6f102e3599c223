use tracing::{debug, info};

use crate::error::ProvisioningResult;
use crate::gateway::{Purge, StoreGateway};
use crate::model::ItemClass;
use crate::ports::SecureStore;

/// Delete every key, certificate and identity
///
/// Idempotent: an already empty store is purged successfully.
pub fn purge_all<S: SecureStore>(gateway: &mut StoreGateway<'_, S>) -> ProvisioningResult<()> {
    for class in ItemClass::ALL {
        match gateway.delete_all(class)? {
            Purge::Deleted(count) => info!("Deleted {} {} item(s)", count, class),
            Purge::NothingToDelete => debug!("No {} in store", class),
        }
    }
    Ok(())
}
