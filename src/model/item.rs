use std::fmt;

/// Category of items held by the secure store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemClass {
    Key,
    Certificate,
    /// Derived pairing of a certificate and a private key; never stored on
    /// its own
    Identity,
}

impl ItemClass {
    /// Purge order used by the cleanup routine
    pub const ALL: [ItemClass; 3] = [ItemClass::Key, ItemClass::Certificate, ItemClass::Identity];
}

impl fmt::Display for ItemClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemClass::Key => "key",
            ItemClass::Certificate => "certificate",
            ItemClass::Identity => "identity",
        };
        f.write_str(name)
    }
}

/// Asymmetric key algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    Rsa,
}

impl KeyType {
    pub fn default_identity() -> Self {
        Self::Rsa
    }

    /// Key sizes the store accepts for this algorithm
    pub fn supported_sizes(self) -> &'static [u32] {
        match self {
            KeyType::Rsa => &[1024, 2048, 3072, 4096],
        }
    }
}

/// Which half of a key pair a key is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyClass {
    Public,
    Private,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purge_order() {
        assert_eq!(
            ItemClass::ALL,
            [ItemClass::Key, ItemClass::Certificate, ItemClass::Identity]
        );
    }

    #[test]
    fn test_item_class_display() {
        assert_eq!(ItemClass::Certificate.to_string(), "certificate");
    }

    #[test]
    fn test_rsa_sizes() {
        assert!(KeyType::Rsa.supported_sizes().contains(&2048));
        assert!(!KeyType::Rsa.supported_sizes().contains(&2047));
    }
}
