//! Messaging endpoint wire interface.
//!
//! An endpoint is a contract that:
//! - registers applications (`RegisterApp`), which grants them the right to send
//! - accepts outbound payloads with a fee attached (`Send`) and refunds any
//!   unused part of the fee to `refund_address`
//! - delivers inbound payloads by executing `EndpointReceiveMsg` on the
//!   registered application
//! - prices a payload ahead of time (`EstimateFees`)

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Binary, Coin, CosmosMsg, StdResult, Uint128, WasmMsg};

/// Execute messages every endpoint understands
#[cw_serde]
pub enum EndpointExecuteMsg {
    /// Register the calling contract as an application of this endpoint
    RegisterApp {},

    /// Dispatch a payload to the application registered as `destination`
    /// on `dst_chain_id`. The fee is attached as funds.
    Send {
        /// Destination chain id
        dst_chain_id: u64,
        /// Remote application address (opaque bytes)
        destination: Binary,
        /// Application payload
        payload: Binary,
        /// Address that receives the unused part of the fee
        refund_address: String,
        /// Transport specific options (gas, airdrop, ...)
        adapter_params: Binary,
    },
}

/// Queries every endpoint answers
#[cw_serde]
#[derive(QueryResponses)]
pub enum EndpointQueryMsg {
    /// Fee required to dispatch a payload of `payload_size` bytes
    #[returns(FeeEstimateResponse)]
    EstimateFees {
        app: String,
        dst_chain_id: u64,
        payload_size: u64,
        pay_in_alt_fee: bool,
        adapter_params: Binary,
        msg_lib_params: Binary,
    },
}

#[cw_serde]
pub struct FeeEstimateResponse {
    /// Fee payable in the chain's native fee denom
    pub native_fee: Uint128,
    /// Fee payable in the endpoint's alternative fee token
    pub alt_fee: Uint128,
}

/// Delivery of an inbound payload to an application.
///
/// Applications embed this as `ReceiveMessage(EndpointReceiveMsg)` in their
/// own `ExecuteMsg`, the same way CW20 receivers embed `Cw20ReceiveMsg`.
#[cw_serde]
pub struct EndpointReceiveMsg {
    /// Chain the payload was sent from
    pub src_chain_id: u64,
    /// Sending application on the source chain (opaque bytes)
    pub src_address: Binary,
    /// Per-path delivery nonce assigned by the endpoint
    pub nonce: u64,
    /// Application payload
    pub payload: Binary,
}

impl EndpointReceiveMsg {
    /// Serializes the message wrapped in the receiver's execute enum
    pub fn into_json_binary(self) -> StdResult<Binary> {
        let msg = ReceiverExecuteMsg::ReceiveMessage(self);
        to_json_binary(&msg)
    }

    /// Creates a message that delivers this payload to `contract_addr`
    pub fn into_cosmos_msg<T: Into<String>>(self, contract_addr: T) -> StdResult<CosmosMsg> {
        let msg = self.into_json_binary()?;
        let execute = WasmMsg::Execute {
            contract_addr: contract_addr.into(),
            msg,
            funds: vec![],
        };
        Ok(execute.into())
    }
}

// Must match the variant the application exposes in its ExecuteMsg
#[cw_serde]
enum ReceiverExecuteMsg {
    ReceiveMessage(EndpointReceiveMsg),
}

impl EndpointExecuteMsg {
    /// Wraps this message for `contract_addr`, attaching `funds`
    pub fn into_cosmos_msg<T: Into<String>>(
        self,
        contract_addr: T,
        funds: Vec<Coin>,
    ) -> StdResult<CosmosMsg> {
        let execute = WasmMsg::Execute {
            contract_addr: contract_addr.into(),
            msg: to_json_binary(&self)?,
            funds,
        };
        Ok(execute.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::from_json;

    #[test]
    fn test_receive_msg_wrapped_in_receive_message_variant() {
        let msg = EndpointReceiveMsg {
            src_chain_id: 7,
            src_address: Binary::from(b"remote".to_vec()),
            nonce: 1,
            payload: Binary::from(vec![0u8; 36]),
        };

        let json = msg.clone().into_json_binary().unwrap();
        let text = String::from_utf8(json.to_vec()).unwrap();
        assert!(text.starts_with("{\"receive_message\":"));

        let ReceiverExecuteMsg::ReceiveMessage(parsed) =
            from_json::<ReceiverExecuteMsg>(&json).unwrap();
        assert_eq!(parsed, msg);
    }

    #[test]
    fn test_send_msg_attaches_funds() {
        let msg = EndpointExecuteMsg::Send {
            dst_chain_id: 9,
            destination: Binary::from(b"bridge".to_vec()),
            payload: Binary::from(vec![1u8; 36]),
            refund_address: "terra1user".to_string(),
            adapter_params: Binary::default(),
        };

        let cosmos = msg
            .into_cosmos_msg("endpoint", cosmwasm_std::coins(500, "uluna"))
            .unwrap();
        match cosmos {
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr,
                funds,
                ..
            }) => {
                assert_eq!(contract_addr, "endpoint");
                assert_eq!(funds, cosmwasm_std::coins(500, "uluna"));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
