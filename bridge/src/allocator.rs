//! Token id allocation.
//!
//! Ids are issued strictly increasing from the window `[start_id, end_id]`
//! fixed at instantiation. The counter never rewinds.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Storage;
use cw_storage_plus::Item;

use crate::error::ContractError;

/// Allocation window state.
///
/// `next_id` is kept as u64 so that handing out `u32::MAX` leaves the
/// window drained instead of wrapping.
#[cw_serde]
pub struct IdAllocator {
    /// Next id to hand out
    pub next_id: u64,
    /// Last id of the window (inclusive)
    pub end_id: u32,
}

impl IdAllocator {
    pub fn new(start_id: u32, end_id: u32) -> Result<Self, ContractError> {
        if start_id > end_id {
            return Err(ContractError::InvalidIdRange { start_id, end_id });
        }
        Ok(Self {
            next_id: start_id as u64,
            end_id,
        })
    }

    /// Return the next id and advance the counter
    pub fn allocate(&mut self) -> Result<u32, ContractError> {
        if self.next_id > self.end_id as u64 {
            return Err(ContractError::RangeExhausted {
                next_id: self.next_id,
                end_id: self.end_id,
            });
        }
        let id = self.next_id as u32;
        self.next_id += 1;
        Ok(id)
    }

    /// Ids still available in the window
    pub fn remaining(&self) -> u64 {
        (self.end_id as u64 + 1).saturating_sub(self.next_id)
    }
}

/// Allocator storage
pub const ALLOCATOR: Item<IdAllocator> = Item::new("id_allocator");

/// Load the allocator, allocate one id, and persist the advanced counter
pub fn allocate_id(storage: &mut dyn Storage) -> Result<u32, ContractError> {
    let mut allocator = ALLOCATOR
        .may_load(storage)?
        .ok_or(ContractError::NotInitialized)?;
    let id = allocator.allocate()?;
    ALLOCATOR.save(storage, &allocator)?;
    Ok(id)
}
