//! Receiver Address Encoding
//!
//! The transfer payload carries the receiver as 32 bytes. Local (Cosmos)
//! receivers use the EVM-style left-padded form:
//! ```text
//! | Zero padding (12 bytes) | Canonical address (20 bytes) |
//! ```
//! and are rendered locally as bech32 with the bridge's configured prefix.

use cosmwasm_std::{StdError, StdResult};

use crate::error::ContractError;

/// Length of a canonical Cosmos account address
pub const CANONICAL_ADDRESS_LEN: usize = 20;

/// Leading zero bytes in a padded receiver
const PADDING_LEN: usize = 32 - CANONICAL_ADDRESS_LEN;

/// Bech32 character set
const BECH32_CHARSET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Convert a 32-byte payload receiver into a local bech32 address
pub fn receiver_to_local_address(receiver: &[u8; 32], hrp: &str) -> Result<String, ContractError> {
    if receiver[..PADDING_LEN].iter().any(|b| *b != 0) {
        return Err(ContractError::InvalidAddress {
            reason: format!(
                "receiver 0x{} is not a left-padded {}-byte address",
                hex::encode(receiver),
                CANONICAL_ADDRESS_LEN
            ),
        });
    }

    let mut raw = [0u8; CANONICAL_ADDRESS_LEN];
    raw.copy_from_slice(&receiver[PADDING_LEN..]);

    encode_bech32_address(&raw, hrp).map_err(|e| ContractError::InvalidAddress {
        reason: e.to_string(),
    })
}

/// Convert a local bech32 address into the 32-byte payload receiver form
pub fn local_address_to_receiver(addr: &str) -> StdResult<[u8; 32]> {
    let raw = decode_bech32_address(addr)?;
    let mut receiver = [0u8; 32];
    receiver[PADDING_LEN..].copy_from_slice(&raw);
    Ok(receiver)
}

/// Check a bech32 human readable prefix
pub fn validate_prefix(hrp: &str) -> Result<(), ContractError> {
    let valid = !hrp.is_empty()
        && hrp.len() <= 83
        && hrp
            .bytes()
            .all(|c| (33..=126).contains(&c) && !c.is_ascii_uppercase());
    if !valid {
        return Err(ContractError::InvalidAddress {
            reason: format!("invalid bech32 prefix: {:?}", hrp),
        });
    }
    Ok(())
}

/// Decode a bech32 address to raw 20 bytes, verifying the checksum
pub fn decode_bech32_address(addr: &str) -> StdResult<[u8; 20]> {
    let lower = addr.to_lowercase();
    if addr != lower && addr != addr.to_uppercase() {
        return Err(StdError::generic_err("Bech32 address has mixed case"));
    }
    let addr = lower;
    let (hrp, data_part) = addr
        .rsplit_once('1')
        .ok_or_else(|| StdError::generic_err("Invalid bech32 format"))?;

    if hrp.is_empty() || data_part.len() < 7 {
        return Err(StdError::generic_err("Bech32 data too short"));
    }

    let values = decode_bech32_data(data_part)?;

    let mut check = expand_hrp(hrp);
    check.extend_from_slice(&values);
    if bech32_polymod(&check) != 1 {
        return Err(StdError::generic_err("Invalid bech32 checksum"));
    }

    // Drop the 6-value checksum
    let bytes = convert_bits(&values[..values.len() - 6], 5, 8, false)?;

    if bytes.len() != CANONICAL_ADDRESS_LEN {
        return Err(StdError::generic_err(format!(
            "Invalid address length: expected 20 bytes, got {}",
            bytes.len()
        )));
    }

    let mut result = [0u8; 20];
    result.copy_from_slice(&bytes);
    Ok(result)
}

/// Encode raw 20 bytes to a bech32 address with given prefix
pub fn encode_bech32_address(bytes: &[u8; 20], hrp: &str) -> StdResult<String> {
    let data5 = convert_bits(bytes, 8, 5, true)?;
    let checksum = compute_bech32_checksum(hrp, &data5);

    Ok(format!(
        "{}1{}{}",
        hrp,
        encode_bech32_data(&data5),
        encode_bech32_data(&checksum)
    ))
}

/// Convert bits between different group sizes
fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> StdResult<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut result = Vec::new();
    let max_v = (1u32 << to_bits) - 1;

    for &value in data {
        let v = value as u32;
        if v >> from_bits != 0 {
            return Err(StdError::generic_err("Invalid data range"));
        }
        acc = (acc << from_bits) | v;
        bits += from_bits;

        while bits >= to_bits {
            bits -= to_bits;
            result.push(((acc >> bits) & max_v) as u8);
        }
    }

    if pad {
        if bits > 0 {
            result.push(((acc << (to_bits - bits)) & max_v) as u8);
        }
    } else if bits >= from_bits || ((acc << (to_bits - bits)) & max_v) != 0 {
        return Err(StdError::generic_err("Invalid padding"));
    }

    Ok(result)
}

fn decode_bech32_data(data: &str) -> StdResult<Vec<u8>> {
    data.chars()
        .map(|c| {
            BECH32_CHARSET
                .iter()
                .position(|&x| x as char == c)
                .map(|idx| idx as u8)
                .ok_or_else(|| StdError::generic_err(format!("Invalid bech32 character: {}", c)))
        })
        .collect()
}

fn encode_bech32_data(data: &[u8]) -> String {
    data.iter()
        .map(|&b| BECH32_CHARSET[b as usize] as char)
        .collect()
}

fn compute_bech32_checksum(hrp: &str, data: &[u8]) -> Vec<u8> {
    let mut values = expand_hrp(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0, 0, 0, 0, 0, 0]);

    let polymod = bech32_polymod(&values) ^ 1;

    (0..6)
        .map(|i| ((polymod >> (5 * (5 - i))) & 31) as u8)
        .collect()
}

fn expand_hrp(hrp: &str) -> Vec<u8> {
    let mut result = Vec::with_capacity(hrp.len() * 2 + 1);
    result.extend(hrp.bytes().map(|c| c >> 5));
    result.push(0);
    result.extend(hrp.bytes().map(|c| c & 31));
    result
}

fn bech32_polymod(values: &[u8]) -> u32 {
    const GENERATOR: [u32; 5] = [
        0x3b6a_57b2,
        0x2650_8e6d,
        0x1ea1_19fa,
        0x3d42_33dd,
        0x2a14_62b3,
    ];

    let mut chk: u32 = 1;
    for &v in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ (v as u32);
        for (i, gen) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= gen;
            }
        }
    }
    chk
}

#[cfg(test)]
mod tests {
    use super::*;

    const TERRA_ADDR: &str = "terra1x46rqay4d3cssq8gxxvqz8xt6nwlz4td20k38v";

    #[test]
    fn test_terra_address_round_trip() {
        let receiver = local_address_to_receiver(TERRA_ADDR).unwrap();
        assert_eq!(&receiver[..12], &[0u8; 12]);

        let local = receiver_to_local_address(&receiver, "terra").unwrap();
        assert_eq!(local, TERRA_ADDR);
    }

    #[test]
    fn test_prefix_is_applied() {
        let mut receiver = [0u8; 32];
        receiver[12..].copy_from_slice(&[0x42; 20]);

        let local = receiver_to_local_address(&receiver, "cosmos").unwrap();
        assert!(local.starts_with("cosmos1"));
        assert_eq!(decode_bech32_address(&local).unwrap(), [0x42; 20]);
    }

    #[test]
    fn test_non_padded_receiver_rejected() {
        let receiver = [0xFFu8; 32];
        assert!(matches!(
            receiver_to_local_address(&receiver, "terra"),
            Err(ContractError::InvalidAddress { .. })
        ));
    }

    #[test]
    fn test_bad_checksum_rejected() {
        let mut tampered = TERRA_ADDR.to_string();
        tampered.pop();
        tampered.push('q');
        assert!(decode_bech32_address(&tampered).is_err());
    }

    #[test]
    fn test_mixed_case_rejected() {
        let upper = TERRA_ADDR.to_uppercase();
        assert_eq!(
            decode_bech32_address(&upper).unwrap(),
            decode_bech32_address(TERRA_ADDR).unwrap()
        );

        let mixed = format!("T{}", &TERRA_ADDR[1..]);
        assert!(decode_bech32_address(&mixed).is_err());
    }

    #[test]
    fn test_validate_prefix() {
        assert!(validate_prefix("terra").is_ok());
        assert!(validate_prefix("").is_err());
        assert!(validate_prefix("Terra").is_err());
        assert!(validate_prefix("ter ra").is_err());
    }
}
