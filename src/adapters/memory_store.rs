//! In-memory secure store
//!
//! Models the platform credential store closely enough to exercise the
//! provisioning flow without hardware: identities are derived rather than
//! stored, access controls are bound to passcode enrollment and gate key use
//! behind a presence prompt, and every failure is reported as the status the
//! platform would return.

use rand::rng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info};
use x509_cert::der::Decode;
use x509_cert::Certificate;

use crate::adapters::AlwaysPresent;
use crate::model::{
    AccessControl, AccessPolicy, Accessibility, ApplicationLabel, ApplicationTag, CertificateRef, IdentityRef,
    ItemClass, ItemRef, ItemValue, KeyClass, KeyPairSpec, KeyRef, NewItem, Query, StoreResult,
    StoreStatus,
};
use crate::ports::{KeySigner, PresencePrompt, SecureStore};

#[derive(Debug, Clone)]
struct StoredKey {
    key: KeyRef,
    application_tag: Option<ApplicationTag>,
    application_label: Option<ApplicationLabel>,
    label: Option<String>,
    access_control: Option<AccessControl>,
}

impl StoredKey {
    fn matches(&self, query: &Query) -> bool {
        query
            .key_type
            .map_or(true, |key_type| key_type == self.key.key_type())
            && attribute_matches(&query.application_tag, &self.application_tag)
            && attribute_matches(&query.application_label, &self.application_label)
            && attribute_matches(&query.label, &self.label)
    }
}

#[derive(Debug, Clone)]
struct StoredCertificate {
    certificate: CertificateRef,
    public_key_hash: Option<ApplicationLabel>,
    label: Option<String>,
    access_control: Option<AccessControl>,
}

impl StoredCertificate {
    fn matches(&self, query: &Query) -> bool {
        query.application_tag.is_none()
            && attribute_matches(&query.application_label, &self.public_key_hash)
            && attribute_matches(&query.label, &self.label)
    }
}

fn attribute_matches<T: PartialEq>(wanted: &Option<T>, actual: &Option<T>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual.as_ref() == Some(wanted),
    }
}

fn passcode_bound(access_control: &AccessControl) -> bool {
    match access_control.policy().accessibility {
        Accessibility::WhenPasscodeSetThisDeviceOnly => true,
    }
}

fn bound_to_passcode(access_control: &Option<AccessControl>) -> bool {
    access_control.as_ref().is_some_and(passcode_bound)
}

fn remove_indices<T>(items: &mut Vec<T>, indices: &HashSet<usize>) {
    let mut index = 0;
    items.retain(|_| {
        let keep = !indices.contains(&index);
        index += 1;
        keep
    });
}

/// Secure store held entirely in memory
pub struct MemoryStore {
    keys: Vec<StoredKey>,
    certificates: Vec<StoredCertificate>,
    passcode_enrolled: bool,
    access_control_available: bool,
    presence: Box<dyn PresencePrompt + Send>,
    presence_prompts: usize,
}

impl MemoryStore {
    /// Empty store on a device with a passcode enrolled and a user who
    /// always confirms presence
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            certificates: Vec::new(),
            passcode_enrolled: true,
            access_control_available: true,
            presence: Box::new(AlwaysPresent),
            presence_prompts: 0,
        }
    }

    pub fn with_presence(mut self, presence: impl PresencePrompt + Send + 'static) -> Self {
        self.presence = Box::new(presence);
        self
    }

    /// Device without passcode or biometric enrollment
    pub fn without_passcode(mut self) -> Self {
        self.passcode_enrolled = false;
        self
    }

    /// Platform that cannot build access-control descriptors
    pub fn without_access_control(mut self) -> Self {
        self.access_control_available = false;
        self
    }

    pub fn enroll_passcode(&mut self) {
        self.passcode_enrolled = true;
    }

    /// Remove passcode enrollment, destroying every passcode-bound item
    ///
    /// # Returns
    ///
    /// The number of revoked items
    pub fn remove_passcode(&mut self) -> usize {
        self.passcode_enrolled = false;
        let before = self.keys.len() + self.certificates.len();
        self.keys.retain(|key| !bound_to_passcode(&key.access_control));
        self.certificates
            .retain(|certificate| !bound_to_passcode(&certificate.access_control));
        let revoked = before - (self.keys.len() + self.certificates.len());
        info!(revoked, "Passcode removed, revoked passcode-bound items");
        revoked
    }

    pub fn passcode_enrolled(&self) -> bool {
        self.passcode_enrolled
    }

    /// How many times a presence prompt was shown
    pub fn presence_prompts(&self) -> usize {
        self.presence_prompts
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub fn certificate_count(&self) -> usize {
        self.certificates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.certificates.is_empty()
    }

    fn check_access_control(&self, access_control: &AccessControl) -> StoreResult<()> {
        if passcode_bound(access_control) && !self.passcode_enrolled {
            debug!("Rejecting passcode-bound item: no passcode enrolled");
            return Err(StoreStatus::AuthFailed);
        }
        Ok(())
    }

    /// Pairs of (certificate index, key index) forming identities
    ///
    /// A certificate binds to the first key carrying its public-key hash as
    /// application label. When that key is a public key left over from
    /// generation, the certificate forms no identity.
    fn identities(&self) -> Vec<(usize, usize)> {
        self.certificates
            .iter()
            .enumerate()
            .filter_map(|(cert_index, certificate)| {
                let hash = certificate.public_key_hash.as_ref()?;
                let key_index = self
                    .keys
                    .iter()
                    .position(|key| key.application_label.as_ref() == Some(hash))?;
                self.keys[key_index]
                    .key
                    .is_private()
                    .then_some((cert_index, key_index))
            })
            .collect()
    }

    fn identity_matches(&self, (cert_index, key_index): (usize, usize), query: &Query) -> bool {
        let key = &self.keys[key_index];
        let certificate = &self.certificates[cert_index];
        query
            .key_type
            .map_or(true, |key_type| key_type == key.key.key_type())
            && attribute_matches(&query.application_tag, &key.application_tag)
            && attribute_matches(&query.application_label, &key.application_label)
            && attribute_matches(&query.label, &certificate.label)
    }

    fn matching_identities(&self, query: &Query) -> Vec<(usize, usize)> {
        self.identities()
            .into_iter()
            .filter(|pair| self.identity_matches(*pair, query))
            .collect()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("keys", &self.keys.len())
            .field("certificates", &self.certificates.len())
            .field("passcode_enrolled", &self.passcode_enrolled)
            .field("presence_prompts", &self.presence_prompts)
            .finish()
    }
}

impl SecureStore for MemoryStore {
    fn delete_matching(&mut self, query: &Query) -> StoreResult<usize> {
        let deleted = match query.class {
            ItemClass::Key => {
                let before = self.keys.len();
                self.keys.retain(|key| !key.matches(query));
                before - self.keys.len()
            }
            ItemClass::Certificate => {
                let before = self.certificates.len();
                self.certificates
                    .retain(|certificate| !certificate.matches(query));
                before - self.certificates.len()
            }
            ItemClass::Identity => {
                let pairs = self.matching_identities(query);
                let certificates: HashSet<usize> = pairs.iter().map(|(c, _)| *c).collect();
                let keys: HashSet<usize> = pairs.iter().map(|(_, k)| *k).collect();
                remove_indices(&mut self.certificates, &certificates);
                remove_indices(&mut self.keys, &keys);
                pairs.len()
            }
        };

        if deleted == 0 {
            return Err(StoreStatus::ItemNotFound);
        }
        debug!(class = %query.class, deleted, "Deleted matching items");
        Ok(deleted)
    }

    fn add(&mut self, item: NewItem) -> StoreResult<()> {
        if let Some(access_control) = &item.access_control {
            self.check_access_control(access_control)?;
        }

        match item.value {
            ItemValue::Key(key) => {
                let duplicate = self.keys.iter().any(|stored| {
                    stored.key.class() == key.class()
                        && stored.application_tag == item.application_tag
                        && stored.application_label == item.application_label
                });
                if duplicate {
                    return Err(StoreStatus::DuplicateItem);
                }
                debug!(class = ?key.class(), tag = ?item.application_tag, "Adding key");
                self.keys.push(StoredKey {
                    key,
                    application_tag: item.application_tag,
                    application_label: item.application_label,
                    label: item.label,
                    access_control: item.access_control,
                });
            }
            ItemValue::Certificate(certificate) => {
                if self
                    .certificates
                    .iter()
                    .any(|stored| stored.certificate == certificate)
                {
                    return Err(StoreStatus::DuplicateItem);
                }
                debug!(certificate = ?certificate, "Adding certificate");
                self.certificates.push(StoredCertificate {
                    certificate,
                    public_key_hash: item.public_key_hash,
                    label: item.label,
                    access_control: item.access_control,
                });
            }
        }
        Ok(())
    }

    fn copy_matching(&mut self, query: &Query) -> StoreResult<ItemRef> {
        let found = match query.class {
            ItemClass::Key => self
                .keys
                .iter()
                .find(|key| key.matches(query))
                .map(|key| ItemRef::Key(key.key.clone())),
            ItemClass::Certificate => self
                .certificates
                .iter()
                .find(|certificate| certificate.matches(query))
                .map(|certificate| ItemRef::Certificate(certificate.certificate.clone())),
            ItemClass::Identity => self.matching_identities(query).first().map(|(c, k)| {
                ItemRef::Identity(IdentityRef::new(
                    self.certificates[*c].certificate.clone(),
                    self.keys[*k].key.clone(),
                ))
            }),
        };
        found.ok_or(StoreStatus::ItemNotFound)
    }

    fn generate_key_pair(&mut self, spec: &KeyPairSpec) -> StoreResult<(KeyRef, KeyRef)> {
        if !spec.key_type.supported_sizes().contains(&spec.bits) {
            debug!(bits = spec.bits, "Unsupported key size");
            return Err(StoreStatus::Param);
        }
        if let Some(access_control) = &spec.access_control {
            self.check_access_control(access_control)?;
        }
        let taken = self.keys.iter().any(|key| {
            key.application_tag.as_ref() == Some(&spec.public_tag)
                || key.application_tag.as_ref() == Some(&spec.private_tag)
        });
        if taken {
            return Err(StoreStatus::DuplicateItem);
        }

        let mut private_material = vec![0u8; (spec.bits / 8) as usize];
        rng().fill_bytes(&mut private_material);
        let public_material = Sha256::digest(&private_material).to_vec();

        let public = KeyRef::new(KeyClass::Public, spec.key_type, spec.bits, public_material);
        let private = KeyRef::new(KeyClass::Private, spec.key_type, spec.bits, private_material);

        self.keys.push(StoredKey {
            key: public.clone(),
            application_tag: Some(spec.public_tag.clone()),
            application_label: Some(spec.label.clone()),
            label: None,
            access_control: None,
        });
        self.keys.push(StoredKey {
            key: private.clone(),
            application_tag: Some(spec.private_tag.clone()),
            application_label: Some(spec.label.clone()),
            label: None,
            access_control: spec.access_control.clone(),
        });

        info!(
            key_type = ?spec.key_type,
            bits = spec.bits,
            protected = spec.access_control.is_some(),
            "Generated key pair"
        );
        Ok((public, private))
    }

    fn create_certificate(&self, der: &[u8]) -> StoreResult<CertificateRef> {
        let certificate = Certificate::from_der(der).map_err(|e| {
            debug!(error = %e, "Rejecting certificate that is not X.509 DER");
            StoreStatus::Decode
        })?;
        debug!(
            subject = %certificate.tbs_certificate.subject,
            "Decoded certificate"
        );
        Ok(CertificateRef::new(der.to_vec()))
    }

    fn copy_identity_parts(&self, identity: &IdentityRef) -> StoreResult<(CertificateRef, KeyRef)> {
        let (certificate, private_key) = identity.parts();
        if !private_key.is_private() {
            return Err(StoreStatus::Param);
        }
        Ok((certificate.clone(), private_key.clone()))
    }

    fn create_access_control(&self, policy: &AccessPolicy) -> StoreResult<AccessControl> {
        if !self.access_control_available {
            return Err(StoreStatus::Unimplemented);
        }
        Ok(AccessControl::new(*policy))
    }
}

impl KeySigner for MemoryStore {
    fn sign(&mut self, key: &KeyRef, data: &[u8]) -> StoreResult<Vec<u8>> {
        if !key.is_private() {
            return Err(StoreStatus::Param);
        }
        let mut records = self.keys.iter().filter(|stored| &stored.key == key).peekable();
        if records.peek().is_none() {
            return Err(StoreStatus::ItemNotFound);
        }
        // The same key may be stored under several tags; any protected copy gates it
        let protected = records.any(|stored| stored.access_control.is_some());

        if protected {
            self.presence_prompts += 1;
            self.presence
                .confirm_presence("Use the identity's private key")?;
        }

        let mut hasher = Sha256::new();
        hasher.update(key.material());
        hasher.update(data);
        Ok(hasher.finalize().to_vec())
    }
}
