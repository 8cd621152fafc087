//! Transfer payload codec
//!
//! Both ends of the bridge exchange the same fixed 36-byte instruction. The
//! layout is a wire-compatibility contract with the remote bridge and must not
//! be changed on one side only.
//!
//! # Byte Layout (36 bytes total)
//! - Bytes 0-31:  receiver address (32 bytes)
//! - Bytes 32-33: high 16 bits of the token id (big-endian u16)
//! - Bytes 34-35: low 16 bits of the token id (big-endian u16)
//!
//! Two big-endian halves, high half first, are exactly the big-endian
//! encoding of the u32 token id.

use crate::error::ContractError;

/// Size of an encoded transfer payload in bytes
pub const PAYLOAD_SIZE: usize = 36;

/// Size of the receiver address field
pub const RECEIVER_SIZE: usize = 32;

/// Decoded transfer instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferPayload {
    /// Receiver on the destination chain
    pub receiver: [u8; RECEIVER_SIZE],
    /// Token id as known on the sending chain
    pub token_id: u32,
}

impl TransferPayload {
    pub fn new(receiver: [u8; RECEIVER_SIZE], token_id: u32) -> Self {
        Self { receiver, token_id }
    }

    pub fn encode(&self) -> [u8; PAYLOAD_SIZE] {
        encode_payload(&self.receiver, self.token_id)
    }

    pub fn decode(payload: &[u8]) -> Result<Self, ContractError> {
        let (receiver, token_id) = decode_payload(payload)?;
        Ok(Self { receiver, token_id })
    }
}

/// Encode a receiver and token id into the 36-byte wire payload
pub fn encode_payload(receiver: &[u8; RECEIVER_SIZE], token_id: u32) -> [u8; PAYLOAD_SIZE] {
    let mut payload = [0u8; PAYLOAD_SIZE];
    payload[..RECEIVER_SIZE].copy_from_slice(receiver);
    payload[RECEIVER_SIZE..].copy_from_slice(&token_id.to_be_bytes());
    payload
}

/// Decode a 36-byte wire payload into (receiver, token id)
pub fn decode_payload(payload: &[u8]) -> Result<([u8; RECEIVER_SIZE], u32), ContractError> {
    if payload.len() != PAYLOAD_SIZE {
        return Err(ContractError::InvalidPayloadLength {
            got: payload.len(),
        });
    }

    let mut receiver = [0u8; RECEIVER_SIZE];
    receiver.copy_from_slice(&payload[..RECEIVER_SIZE]);

    let mut id_bytes = [0u8; 4];
    id_bytes.copy_from_slice(&payload[RECEIVER_SIZE..]);

    Ok((receiver, u32::from_be_bytes(id_bytes)))
}

/// Copy a byte string of exactly 32 bytes into a receiver field
pub fn receiver_from_slice(bytes: &[u8]) -> Result<[u8; RECEIVER_SIZE], ContractError> {
    if bytes.len() != RECEIVER_SIZE {
        return Err(ContractError::InvalidAddress {
            reason: format!(
                "receiver must be exactly {} bytes, got {}",
                RECEIVER_SIZE,
                bytes.len()
            ),
        });
    }
    let mut receiver = [0u8; RECEIVER_SIZE];
    receiver.copy_from_slice(bytes);
    Ok(receiver)
}
