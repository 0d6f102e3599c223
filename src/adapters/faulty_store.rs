//! Fault-injecting store for testing abort paths
//!
//! Wraps a [`MemoryStore`] and fails exactly one chosen call. Call numbers
//! count from 1 per operation.

use crate::adapters::MemoryStore;
use crate::model::{
    AccessControl, AccessPolicy, CertificateRef, IdentityRef, ItemRef, KeyPairSpec, KeyRef,
    NewItem, Query, StoreResult, StoreStatus,
};
use crate::ports::{KeySigner, SecureStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    None,
    Delete { call: usize, status: StoreStatus },
    Add { call: usize, status: StoreStatus },
    Copy { call: usize, status: StoreStatus },
    Generate(StoreStatus),
    CreateCertificate(StoreStatus),
    SplitIdentity(StoreStatus),
}

#[derive(Debug)]
pub struct FaultyStore {
    pub inner: MemoryStore,
    fault: Fault,
    deletes: usize,
    adds: usize,
    copies: usize,
}

impl FaultyStore {
    pub fn new(fault: Fault) -> Self {
        Self {
            inner: MemoryStore::new(),
            fault,
            deletes: 0,
            adds: 0,
            copies: 0,
        }
    }
}

impl SecureStore for FaultyStore {
    fn delete_matching(&mut self, query: &Query) -> StoreResult<usize> {
        self.deletes += 1;
        if let Fault::Delete { call, status } = self.fault {
            if call == self.deletes {
                return Err(status);
            }
        }
        self.inner.delete_matching(query)
    }

    fn add(&mut self, item: NewItem) -> StoreResult<()> {
        self.adds += 1;
        if let Fault::Add { call, status } = self.fault {
            if call == self.adds {
                return Err(status);
            }
        }
        self.inner.add(item)
    }

    fn copy_matching(&mut self, query: &Query) -> StoreResult<ItemRef> {
        self.copies += 1;
        if let Fault::Copy { call, status } = self.fault {
            if call == self.copies {
                return Err(status);
            }
        }
        self.inner.copy_matching(query)
    }

    fn generate_key_pair(&mut self, spec: &KeyPairSpec) -> StoreResult<(KeyRef, KeyRef)> {
        if let Fault::Generate(status) = self.fault {
            return Err(status);
        }
        self.inner.generate_key_pair(spec)
    }

    fn create_certificate(&self, der: &[u8]) -> StoreResult<CertificateRef> {
        if let Fault::CreateCertificate(status) = self.fault {
            return Err(status);
        }
        self.inner.create_certificate(der)
    }

    fn copy_identity_parts(&self, identity: &IdentityRef) -> StoreResult<(CertificateRef, KeyRef)> {
        if let Fault::SplitIdentity(status) = self.fault {
            return Err(status);
        }
        self.inner.copy_identity_parts(identity)
    }

    fn create_access_control(&self, policy: &AccessPolicy) -> StoreResult<AccessControl> {
        self.inner.create_access_control(policy)
    }
}

impl KeySigner for FaultyStore {
    fn sign(&mut self, key: &KeyRef, data: &[u8]) -> StoreResult<Vec<u8>> {
        self.inner.sign(key, data)
    }
}

mod tests {
    use super::*;
    use crate::contract_tests_for;
    use crate::model::ItemClass;
    use crate::ports::contract_tests::secure_store_contract;

    #[test]
    fn test_fault_hits_only_the_chosen_call() {
        let mut store = FaultyStore::new(Fault::Delete {
            call: 2,
            status: StoreStatus::Param,
        });
        let query = Query::class(ItemClass::Key);
        assert_eq!(store.delete_matching(&query), Err(StoreStatus::ItemNotFound));
        assert_eq!(store.delete_matching(&query), Err(StoreStatus::Param));
        assert_eq!(store.delete_matching(&query), Err(StoreStatus::ItemNotFound));
    }

    contract_tests_for!(
        faulty_store_without_fault_contract,
        make = || FaultyStore::new(Fault::None),
        tests = {
            test_purge_empty_store_reports_not_found => secure_store_contract::test_purge_empty_store_reports_not_found,
            test_generate_key_pair_stores_both_halves => secure_store_contract::test_generate_key_pair_stores_both_halves,
            test_identity_forms_from_matching_certificate => secure_store_contract::test_identity_forms_from_matching_certificate,
            test_delete_identity_removes_certificate_and_key => secure_store_contract::test_delete_identity_removes_certificate_and_key,
        }
    );
}
