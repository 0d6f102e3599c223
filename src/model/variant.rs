/// When the presence access control is attached to the identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Attach the access control to the private key when the key pair is
    /// generated
    #[default]
    ProtectAtCreation,
    /// Form the identity unprotected, then replace its certificate and
    /// private key with protected copies
    RetrofitProtection,
}

impl Variant {
    pub fn protects_at_creation(self) -> bool {
        self == Variant::ProtectAtCreation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_variant() {
        assert_eq!(Variant::default(), Variant::ProtectAtCreation);
        assert!(Variant::default().protects_at_creation());
        assert!(!Variant::RetrofitProtection.protects_at_creation());
    }
}
