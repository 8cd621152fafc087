//! Incoming transfer handler.
//!
//! Deliveries arrive from the messaging endpoint. A token this bridge already
//! knows comes out of custody; an unknown id is minted fresh under a local id.

use common::EndpointReceiveMsg;
use cosmwasm_std::{to_json_binary, Addr, DepsMut, Env, MessageInfo, Response};

use crate::address_codec::receiver_to_local_address;
use crate::asset::{StoredAssets, COLLECTION};
use crate::error::ContractError;
use crate::events::RecvEvent;
use crate::ledger;
use crate::msg::ReceiveResponse;
use crate::payload::TransferPayload;
use crate::state::{load_config, DEFAULT_NFT_NAME, TRUSTED_REMOTES};

use super::mint::mint_token;

/// Execute handler for a payload delivered by the messaging endpoint
pub fn execute_receive_message(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: EndpointReceiveMsg,
) -> Result<Response, ContractError> {
    let config = load_config(deps.storage)?;

    if !config.endpoint().is_delivery_caller(&info.sender) {
        return Err(ContractError::UnauthorizedEndpoint);
    }

    // Verify the source is the trusted remote for its chain
    let trusted = TRUSTED_REMOTES.may_load(deps.storage, msg.src_chain_id)?;
    if trusted.as_ref() != Some(&msg.src_address) {
        return Err(ContractError::UntrustedRemote {
            chain_id: msg.src_chain_id,
        });
    }

    let payload = TransferPayload::decode(&msg.payload)?;
    let receiver = Addr::unchecked(receiver_to_local_address(
        &payload.receiver,
        &config.address_prefix,
    )?);

    let event = RecvEvent {
        src_chain_id: msg.src_chain_id,
        src_address: msg.src_address.clone(),
        receiver: receiver.clone(),
        token_id: payload.token_id,
        timestamp: env.block.time,
    };
    event.append(deps.storage)?;

    let mut registry = StoredAssets;
    let mut response = Response::new().add_event(event.to_event());

    let (token_id, minted) = match ledger::lookup(deps.storage, payload.token_id)? {
        Some(handle) => {
            ledger::transfer_holder(
                deps.storage,
                &mut registry,
                handle,
                &config.custody,
                &receiver,
            )?;
            (payload.token_id, false)
        }
        None => {
            let collection = COLLECTION
                .may_load(deps.storage)?
                .ok_or(ContractError::NotInitialized)?;
            let outcome = mint_token(
                deps.storage,
                &mut registry,
                &config.custody,
                &receiver,
                &collection.name,
                DEFAULT_NFT_NAME,
                env.block.time,
            )?;
            response = response.add_event(outcome.event.to_event());
            (outcome.token_id, true)
        }
    };

    let data = ReceiveResponse { token_id, minted };

    Ok(response
        .set_data(to_json_binary(&data)?)
        .add_attribute("method", "receive_message")
        .add_attribute("src_chain_id", msg.src_chain_id.to_string())
        .add_attribute("nonce", msg.nonce.to_string())
        .add_attribute("receiver", receiver.as_str())
        .add_attribute("payload_token_id", payload.token_id.to_string())
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("outcome", if minted { "minted" } else { "released" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Config, CONFIG};
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::Binary;

    fn delivery(src_address: &[u8]) -> EndpointReceiveMsg {
        EndpointReceiveMsg {
            src_chain_id: 7,
            src_address: Binary::from(src_address.to_vec()),
            nonce: 1,
            payload: Binary::from(vec![0u8; 36]),
        }
    }

    fn store_config(deps: DepsMut) {
        CONFIG
            .save(
                deps.storage,
                &Config {
                    admin: Addr::unchecked("admin"),
                    endpoint: Addr::unchecked("endpoint"),
                    custody: Addr::unchecked("bridge"),
                    fee_denom: "uluna".to_string(),
                    address_prefix: "terra".to_string(),
                },
            )
            .unwrap();
        TRUSTED_REMOTES
            .save(deps.storage, 7, &Binary::from(b"remote".to_vec()))
            .unwrap();
    }

    #[test]
    fn test_receive_before_init_fails() {
        let mut deps = mock_dependencies();
        let err = execute_receive_message(
            deps.as_mut(),
            mock_env(),
            mock_info("endpoint", &[]),
            delivery(b"remote"),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::NotInitialized);
    }

    #[test]
    fn test_only_endpoint_delivers() {
        let mut deps = mock_dependencies();
        store_config(deps.as_mut());

        let err = execute_receive_message(
            deps.as_mut(),
            mock_env(),
            mock_info("mallory", &[]),
            delivery(b"remote"),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::UnauthorizedEndpoint);
    }

    #[test]
    fn test_untrusted_source_rejected() {
        let mut deps = mock_dependencies();
        store_config(deps.as_mut());

        for chain_id in [7, 8] {
            let mut msg = delivery(b"impostor");
            msg.src_chain_id = chain_id;
            let err = execute_receive_message(
                deps.as_mut(),
                mock_env(),
                mock_info("endpoint", &[]),
                msg,
            )
            .unwrap_err();
            assert_eq!(err, ContractError::UntrustedRemote { chain_id });
        }
    }
}
