use std::fmt;

/// Application tag attached to a key
///
/// Distinguishes the public half from the private half and identifies the
/// key for later lookup.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApplicationTag(Vec<u8>);

impl ApplicationTag {
    pub fn new(tag: impl Into<Vec<u8>>) -> Self {
        Self(tag.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for ApplicationTag {
    fn from(tag: &str) -> Self {
        Self::new(tag.as_bytes())
    }
}

impl fmt::Debug for ApplicationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApplicationTag({})", String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Display for ApplicationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// Application label shared by both halves of a key pair
///
/// A certificate imported with a public-key hash equal to this label binds
/// to the private key and forms an identity.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApplicationLabel(Vec<u8>);

impl ApplicationLabel {
    pub fn new(label: impl Into<Vec<u8>>) -> Self {
        Self(label.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for ApplicationLabel {
    fn from(label: &str) -> Self {
        Self::new(label.as_bytes())
    }
}

impl fmt::Debug for ApplicationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApplicationLabel({})", String::from_utf8_lossy(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_from_str() {
        let tag = ApplicationTag::from("com.example.tag");
        assert_eq!(tag.as_bytes(), b"com.example.tag");
        assert_eq!(tag.to_string(), "com.example.tag");
    }

    #[test]
    fn test_debug_is_readable() {
        let label = ApplicationLabel::from("label");
        assert_eq!(format!("{:?}", label), "ApplicationLabel(label)");
    }

    #[test]
    fn test_binary_tags_compare_by_bytes() {
        assert_eq!(ApplicationTag::new(vec![0, 1, 2]), ApplicationTag::new([0u8, 1, 2].to_vec()));
        assert_ne!(ApplicationTag::from("a"), ApplicationTag::from("b"));
    }
}
