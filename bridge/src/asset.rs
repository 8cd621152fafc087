//! Asset registry.
//!
//! Owns the bridge's single collection and the individual assets minted into
//! it. Every asset has exactly one holder at a time. The custody ledger only
//! keeps handles; holder changes always go through [`AssetRegistry`].

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Storage, Timestamp};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;

// ============================================================================
// Collection
// ============================================================================

/// Royalty charged on secondary sales, as a fraction
#[cw_serde]
pub struct Royalty {
    pub numerator: u64,
    pub denominator: u64,
    pub payee: Addr,
}

/// Which collection fields may change after creation
#[cw_serde]
pub struct CollectionMutability {
    pub description: bool,
    pub uri: bool,
    pub maximum: bool,
}

/// Which token fields may change after creation
#[cw_serde]
pub struct TokenMutability {
    pub maximum: bool,
    pub uri: bool,
    pub royalty: bool,
    pub description: bool,
    pub properties: bool,
}

/// The bridge's collection, created once at instantiation
#[cw_serde]
pub struct Collection {
    pub name: String,
    pub description: String,
    pub uri: String,
    pub creator: Addr,
    pub royalty: Royalty,
    pub burnable: bool,
    pub freezable_by_creator: bool,
    pub collection_mutability: CollectionMutability,
    pub token_mutability: TokenMutability,
}

/// Royalty numerator for bridged tokens (1/10)
pub const ROYALTY_NUMERATOR: u64 = 1;

/// Royalty denominator for bridged tokens (1/10)
pub const ROYALTY_DENOMINATOR: u64 = 10;

impl Collection {
    /// Collection with the bridge's fixed configuration: royalty 1/10 to the
    /// creator, no burning, freezable by creator, immutable display data.
    pub fn fixed(name: String, description: String, uri: String, creator: Addr) -> Self {
        Self {
            name,
            description,
            uri,
            royalty: Royalty {
                numerator: ROYALTY_NUMERATOR,
                denominator: ROYALTY_DENOMINATOR,
                payee: creator.clone(),
            },
            creator,
            burnable: false,
            freezable_by_creator: true,
            collection_mutability: CollectionMutability {
                description: false,
                uri: false,
                maximum: false,
            },
            token_mutability: TokenMutability {
                maximum: false,
                uri: false,
                royalty: false,
                description: false,
                properties: false,
            },
        }
    }
}

// ============================================================================
// Assets
// ============================================================================

/// Reference to an asset in the registry (its creation sequence number)
#[cw_serde]
#[derive(Copy, Eq)]
pub struct AssetHandle {
    pub creation_num: u64,
}

/// Display metadata supplied when creating an asset
#[cw_serde]
pub struct AssetMetadata {
    pub name: String,
    pub uri: String,
    /// Bridge token id, stored as an immutable property
    pub token_id: u32,
}

/// Stored asset
#[cw_serde]
pub struct AssetRecord {
    pub name: String,
    pub uri: String,
    pub token_id: u32,
    pub holder: Addr,
    pub created_at: Timestamp,
}

/// Registry of assets and their current holders
pub trait AssetRegistry {
    /// Create an asset held by `creator`
    fn create(
        &mut self,
        storage: &mut dyn Storage,
        metadata: AssetMetadata,
        creator: &Addr,
        now: Timestamp,
    ) -> Result<AssetHandle, ContractError>;

    /// Current holder of `handle`
    fn holder(&self, storage: &dyn Storage, handle: AssetHandle) -> Result<Addr, ContractError>;

    /// Move `handle` from `from` to `to`. Fails without any change unless
    /// `from` is the current holder.
    fn transfer(
        &mut self,
        storage: &mut dyn Storage,
        handle: AssetHandle,
        from: &Addr,
        to: &Addr,
    ) -> Result<(), ContractError>;
}

// ============================================================================
// Storage-backed registry
// ============================================================================

/// Collection storage
pub const COLLECTION: Item<Collection> = Item::new("collection");

/// Sequence number for the next created asset
pub const ASSET_SEQUENCE: Item<u64> = Item::new("asset_sequence");

/// Assets by creation number
pub const ASSETS: Map<u64, AssetRecord> = Map::new("assets");

/// Registry kept in this contract's storage
#[derive(Debug, Default, Clone, Copy)]
pub struct StoredAssets;

impl StoredAssets {
    /// Creation number the next created asset will receive
    pub fn next_creation_num(storage: &dyn Storage) -> Result<u64, ContractError> {
        Ok(ASSET_SEQUENCE.may_load(storage)?.unwrap_or_default())
    }

    pub fn record(
        storage: &dyn Storage,
        handle: AssetHandle,
    ) -> Result<AssetRecord, ContractError> {
        ASSETS
            .may_load(storage, handle.creation_num)?
            .ok_or_else(|| {
                ContractError::Std(cosmwasm_std::StdError::not_found(format!(
                    "asset #{}",
                    handle.creation_num
                )))
            })
    }
}

impl AssetRegistry for StoredAssets {
    fn create(
        &mut self,
        storage: &mut dyn Storage,
        metadata: AssetMetadata,
        creator: &Addr,
        now: Timestamp,
    ) -> Result<AssetHandle, ContractError> {
        let creation_num = Self::next_creation_num(storage)?;
        ASSET_SEQUENCE.save(storage, &(creation_num + 1))?;

        let record = AssetRecord {
            name: metadata.name,
            uri: metadata.uri,
            token_id: metadata.token_id,
            holder: creator.clone(),
            created_at: now,
        };
        ASSETS.save(storage, creation_num, &record)?;

        Ok(AssetHandle { creation_num })
    }

    fn holder(&self, storage: &dyn Storage, handle: AssetHandle) -> Result<Addr, ContractError> {
        Ok(Self::record(storage, handle)?.holder)
    }

    fn transfer(
        &mut self,
        storage: &mut dyn Storage,
        handle: AssetHandle,
        from: &Addr,
        to: &Addr,
    ) -> Result<(), ContractError> {
        let mut record = Self::record(storage, handle)?;
        if record.holder != *from {
            return Err(ContractError::OwnershipMismatch {
                creation_num: handle.creation_num,
                claimed: from.to_string(),
            });
        }
        record.holder = to.clone();
        ASSETS.save(storage, handle.creation_num, &record)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    fn metadata(token_id: u32) -> AssetMetadata {
        AssetMetadata {
            name: format!("Token #{}", token_id),
            uri: format!("ipfs://collection/{}", token_id),
            token_id,
        }
    }

    #[test]
    fn test_fixed_collection_configuration() {
        let creator = Addr::unchecked("terra1admin");
        let collection = Collection::fixed(
            "Bridged".to_string(),
            "desc".to_string(),
            "ipfs://collection".to_string(),
            creator.clone(),
        );

        assert_eq!(collection.royalty.numerator, 1);
        assert_eq!(collection.royalty.denominator, 10);
        assert_eq!(collection.royalty.payee, creator);
        assert!(!collection.burnable);
        assert!(collection.freezable_by_creator);
        assert!(!collection.collection_mutability.uri);
        assert!(!collection.token_mutability.properties);
    }

    #[test]
    fn test_creation_numbers_are_sequential() {
        let mut storage = MockStorage::new();
        let mut registry = StoredAssets;
        let creator = Addr::unchecked("bridge");

        assert_eq!(StoredAssets::next_creation_num(&storage).unwrap(), 0);
        let first = registry
            .create(&mut storage, metadata(1), &creator, Timestamp::from_seconds(1))
            .unwrap();
        let second = registry
            .create(&mut storage, metadata(2), &creator, Timestamp::from_seconds(2))
            .unwrap();

        assert_eq!(first.creation_num, 0);
        assert_eq!(second.creation_num, 1);
        assert_eq!(registry.holder(&storage, second).unwrap(), creator);
    }

    #[test]
    fn test_transfer_requires_current_holder() {
        let mut storage = MockStorage::new();
        let mut registry = StoredAssets;
        let creator = Addr::unchecked("bridge");
        let alice = Addr::unchecked("alice");
        let mallory = Addr::unchecked("mallory");

        let handle = registry
            .create(&mut storage, metadata(7), &creator, Timestamp::from_seconds(1))
            .unwrap();
        registry
            .transfer(&mut storage, handle, &creator, &alice)
            .unwrap();

        let err = registry
            .transfer(&mut storage, handle, &mallory, &mallory)
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::OwnershipMismatch {
                creation_num: 0,
                claimed: "mallory".to_string()
            }
        );
        assert_eq!(registry.holder(&storage, handle).unwrap(), alice);
    }

    #[test]
    fn test_unknown_handle_is_not_found() {
        let storage = MockStorage::new();
        let registry = StoredAssets;
        let err = registry
            .holder(&storage, AssetHandle { creation_num: 99 })
            .unwrap_err();
        assert!(matches!(err, ContractError::Std(_)));
    }
}
