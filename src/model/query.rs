//! Query predicates and item descriptions passed to the secure store

use super::{
    AccessControl, ApplicationLabel, ApplicationTag, CertificateRef, ItemClass, KeyRef, KeyType,
};

/// Predicate selecting store items
///
/// Unset attributes match anything. `Query::class(ItemClass::Key)` alone
/// selects every key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub class: ItemClass,
    pub key_type: Option<KeyType>,
    pub application_tag: Option<ApplicationTag>,
    pub application_label: Option<ApplicationLabel>,
    pub label: Option<String>,
}

impl Query {
    pub fn class(class: ItemClass) -> Self {
        Self {
            class,
            key_type: None,
            application_tag: None,
            application_label: None,
            label: None,
        }
    }

    pub fn key_type(mut self, key_type: KeyType) -> Self {
        self.key_type = Some(key_type);
        self
    }

    pub fn application_tag(mut self, tag: &ApplicationTag) -> Self {
        self.application_tag = Some(tag.clone());
        self
    }

    pub fn application_label(mut self, label: &ApplicationLabel) -> Self {
        self.application_label = Some(label.clone());
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }
}

/// Value carried by an item being added
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValue {
    Key(KeyRef),
    Certificate(CertificateRef),
}

/// Item to add to the secure store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub value: ItemValue,
    pub access_control: Option<AccessControl>,
    /// For certificates: the label of the private key this certificate
    /// binds to
    pub public_key_hash: Option<ApplicationLabel>,
    pub application_label: Option<ApplicationLabel>,
    pub application_tag: Option<ApplicationTag>,
    pub label: Option<String>,
}

impl NewItem {
    pub fn certificate(certificate: CertificateRef) -> Self {
        Self::with_value(ItemValue::Certificate(certificate))
    }

    pub fn key(key: KeyRef) -> Self {
        Self::with_value(ItemValue::Key(key))
    }

    fn with_value(value: ItemValue) -> Self {
        Self {
            value,
            access_control: None,
            public_key_hash: None,
            application_label: None,
            application_tag: None,
            label: None,
        }
    }

    pub fn access_control(mut self, access_control: &AccessControl) -> Self {
        self.access_control = Some(access_control.clone());
        self
    }

    pub fn public_key_hash(mut self, hash: &ApplicationLabel) -> Self {
        self.public_key_hash = Some(hash.clone());
        self
    }

    pub fn application_label(mut self, label: &ApplicationLabel) -> Self {
        self.application_label = Some(label.clone());
        self
    }

    pub fn application_tag(mut self, tag: &ApplicationTag) -> Self {
        self.application_tag = Some(tag.clone());
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn class(&self) -> ItemClass {
        match self.value {
            ItemValue::Key(_) => ItemClass::Key,
            ItemValue::Certificate(_) => ItemClass::Certificate,
        }
    }
}
