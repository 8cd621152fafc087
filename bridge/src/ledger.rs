//! Custody ledger: bridge token id -> asset handle.
//!
//! Entries are append-only. The holder of each asset is tracked by the asset
//! registry; the ledger moves holders only through it.

use cosmwasm_std::{Addr, Storage};
use cw_storage_plus::Map;

use crate::asset::{AssetHandle, AssetRegistry};
use crate::error::ContractError;

/// Token id -> asset handle
pub const LEDGER: Map<u32, AssetHandle> = Map::new("ledger");

/// Insert a new entry
pub fn register(
    storage: &mut dyn Storage,
    token_id: u32,
    handle: AssetHandle,
) -> Result<(), ContractError> {
    if LEDGER.has(storage, token_id) {
        return Err(ContractError::DuplicateId { token_id });
    }
    LEDGER.save(storage, token_id, &handle)?;
    Ok(())
}

pub fn lookup(storage: &dyn Storage, token_id: u32) -> Result<Option<AssetHandle>, ContractError> {
    Ok(LEDGER.may_load(storage, token_id)?)
}

/// Move the holder of `handle` from `from` to `to` through the registry
pub fn transfer_holder<R: AssetRegistry>(
    storage: &mut dyn Storage,
    registry: &mut R,
    handle: AssetHandle,
    from: &Addr,
    to: &Addr,
) -> Result<(), ContractError> {
    registry.transfer(storage, handle, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{AssetMetadata, StoredAssets};
    use cosmwasm_std::testing::MockStorage;
    use cosmwasm_std::Timestamp;

    #[test]
    fn test_register_and_lookup() {
        let mut storage = MockStorage::new();
        let handle = AssetHandle { creation_num: 3 };

        assert_eq!(lookup(&storage, 1000).unwrap(), None);
        register(&mut storage, 1000, handle).unwrap();
        assert_eq!(lookup(&storage, 1000).unwrap(), Some(handle));
    }

    #[test]
    fn test_duplicate_id_rejected_and_entry_kept() {
        let mut storage = MockStorage::new();
        register(&mut storage, 1000, AssetHandle { creation_num: 0 }).unwrap();

        let err = register(&mut storage, 1000, AssetHandle { creation_num: 1 }).unwrap_err();
        assert_eq!(err, ContractError::DuplicateId { token_id: 1000 });
        assert_eq!(
            lookup(&storage, 1000).unwrap(),
            Some(AssetHandle { creation_num: 0 })
        );
    }

    #[test]
    fn test_transfer_holder_goes_through_registry() {
        let mut storage = MockStorage::new();
        let mut registry = StoredAssets;
        let custody = Addr::unchecked("bridge");
        let owner = Addr::unchecked("owner");

        let handle = registry
            .create(
                &mut storage,
                AssetMetadata {
                    name: "Token #1".to_string(),
                    uri: "uri".to_string(),
                    token_id: 1,
                },
                &custody,
                Timestamp::from_seconds(0),
            )
            .unwrap();

        transfer_holder(&mut storage, &mut registry, handle, &custody, &owner).unwrap();
        assert_eq!(registry.holder(&storage, handle).unwrap(), owner);

        // Custody no longer holds it
        let err =
            transfer_holder(&mut storage, &mut registry, handle, &custody, &owner).unwrap_err();
        assert!(matches!(err, ContractError::OwnershipMismatch { .. }));
    }
}
