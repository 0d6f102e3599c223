use tracing::debug;

use crate::model::{AccessControl, AccessPolicy};
use crate::ports::SecureStore;

/// Build the user-presence access control for this device
///
/// The descriptor requires user presence, never leaves the device and is
/// only valid while a passcode or biometric is enrolled.
///
/// # Panics
///
/// Panics if the platform cannot construct an access-control descriptor at
/// all. That only happens in a broken environment and is not a recoverable
/// provisioning failure.
pub fn build_access_control<S: SecureStore + ?Sized>(store: &S) -> AccessControl {
    let policy = AccessPolicy::user_presence();
    match store.create_access_control(&policy) {
        Ok(access_control) => {
            debug!("Built access control {:?}", policy);
            access_control
        }
        Err(status) => panic!("access control construction failed: {status}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use crate::model::{Accessibility, PresenceRequirement};

    #[test]
    fn test_build_access_control() {
        let control = build_access_control(&MemoryStore::new());
        assert_eq!(
            control.policy().accessibility,
            Accessibility::WhenPasscodeSetThisDeviceOnly
        );
        assert_eq!(control.policy().presence, PresenceRequirement::UserPresence);
    }

    #[test]
    fn test_build_does_not_need_passcode() {
        let control = build_access_control(&MemoryStore::new().without_passcode());
        assert_eq!(
            control.policy().accessibility,
            Accessibility::WhenPasscodeSetThisDeviceOnly
        );
    }

    #[test]
    #[should_panic(expected = "access control construction failed")]
    fn test_build_panics_without_platform_support() {
        build_access_control(&MemoryStore::new().without_access_control());
    }
}
