/// When a protected item may be read from the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accessibility {
    /// Only while the device has a passcode set; the item never migrates to
    /// another device and is destroyed when the passcode is removed
    WhenPasscodeSetThisDeviceOnly,
}

impl Accessibility {
    pub fn recommended_identity() -> Self {
        Self::WhenPasscodeSetThisDeviceOnly
    }
}

/// Local-presence factor demanded before a protected item is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresenceRequirement {
    /// Passcode or any enrolled biometric
    UserPresence,
}

impl PresenceRequirement {
    pub fn recommended_identity() -> Self {
        Self::UserPresence
    }
}

/// Access-control rule requested for a private key or certificate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccessPolicy {
    pub accessibility: Accessibility,
    pub presence: PresenceRequirement,
}

impl AccessPolicy {
    /// User presence, this device only, valid while a passcode is enrolled
    pub fn user_presence() -> Self {
        Self {
            accessibility: Accessibility::recommended_identity(),
            presence: PresenceRequirement::recommended_identity(),
        }
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::user_presence()
    }
}

/// Access-control descriptor built by the platform from an [`AccessPolicy`]
///
/// Only a store can create one (see `SecureStore::create_access_control`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessControl {
    policy: AccessPolicy,
}

impl AccessControl {
    pub fn new(policy: AccessPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommended_policy() {
        let policy = AccessPolicy::default();
        assert_eq!(
            policy.accessibility,
            Accessibility::WhenPasscodeSetThisDeviceOnly
        );
        assert_eq!(policy.presence, PresenceRequirement::UserPresence);
    }

    #[test]
    fn test_access_control_keeps_policy() {
        let control = AccessControl::new(AccessPolicy::user_presence());
        assert_eq!(control.policy(), &AccessPolicy::user_presence());
    }
}
