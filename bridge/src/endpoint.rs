//! Typed handle on the messaging endpoint contract.

use common::{EndpointExecuteMsg, EndpointQueryMsg, FeeEstimateResponse};
use cosmwasm_std::{Addr, Binary, Coin, CosmosMsg, QuerierWrapper, StdResult};

use crate::payload::PAYLOAD_SIZE;

/// Messaging endpoint contract at a fixed address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointContract(pub Addr);

impl EndpointContract {
    pub fn addr(&self) -> &Addr {
        &self.0
    }

    /// Whether `sender` is this endpoint's delivery path
    pub fn is_delivery_caller(&self, sender: &Addr) -> bool {
        self.0 == *sender
    }

    /// Register the calling contract with the endpoint
    pub fn register_msg(&self) -> StdResult<CosmosMsg> {
        EndpointExecuteMsg::RegisterApp {}.into_cosmos_msg(self.0.as_str(), vec![])
    }

    /// Dispatch `payload` to `destination` on `dst_chain_id`, paying `fee`
    pub fn send_msg(
        &self,
        dst_chain_id: u64,
        destination: Binary,
        payload: Binary,
        refund_address: &Addr,
        adapter_params: Binary,
        fee: Coin,
    ) -> StdResult<CosmosMsg> {
        let funds = if fee.amount.is_zero() {
            vec![]
        } else {
            vec![fee]
        };
        EndpointExecuteMsg::Send {
            dst_chain_id,
            destination,
            payload,
            refund_address: refund_address.to_string(),
            adapter_params,
        }
        .into_cosmos_msg(self.0.as_str(), funds)
    }

    /// Price a bridge payload to `dst_chain_id`
    pub fn estimate_fees(
        &self,
        querier: &QuerierWrapper,
        app: &Addr,
        dst_chain_id: u64,
        pay_in_alt_fee: bool,
        adapter_params: Binary,
        msg_lib_params: Binary,
    ) -> StdResult<FeeEstimateResponse> {
        querier.query_wasm_smart(
            self.0.as_str(),
            &EndpointQueryMsg::EstimateFees {
                app: app.to_string(),
                dst_chain_id,
                payload_size: PAYLOAD_SIZE as u64,
                pay_in_alt_fee,
                adapter_params,
                msg_lib_params,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::{coin, from_json, WasmMsg};

    #[test]
    fn test_send_msg_targets_endpoint_with_fee() {
        let endpoint = EndpointContract(Addr::unchecked("endpoint"));
        let msg = endpoint
            .send_msg(
                7,
                Binary::from(b"remote".to_vec()),
                Binary::from(vec![0u8; 36]),
                &Addr::unchecked("user"),
                Binary::default(),
                coin(100, "uluna"),
            )
            .unwrap();

        let CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr,
            msg,
            funds,
        }) = msg
        else {
            panic!("expected wasm execute");
        };
        assert_eq!(contract_addr, "endpoint");
        assert_eq!(funds, vec![coin(100, "uluna")]);

        match from_json::<EndpointExecuteMsg>(&msg).unwrap() {
            EndpointExecuteMsg::Send {
                dst_chain_id,
                refund_address,
                ..
            } => {
                assert_eq!(dst_chain_id, 7);
                assert_eq!(refund_address, "user");
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_zero_fee_sends_no_funds() {
        let endpoint = EndpointContract(Addr::unchecked("endpoint"));
        let msg = endpoint
            .send_msg(
                7,
                Binary::default(),
                Binary::default(),
                &Addr::unchecked("user"),
                Binary::default(),
                coin(0, "uluna"),
            )
            .unwrap();

        let CosmosMsg::Wasm(WasmMsg::Execute { funds, .. }) = msg else {
            panic!("expected wasm execute");
        };
        assert!(funds.is_empty());
    }
}
