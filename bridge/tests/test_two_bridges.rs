//! Two bridges on one chain, wired to each other through a shared endpoint.
//!
//! Bridge A plays chain 1 and bridge B plays chain 2. Outbound payloads are
//! read back from the endpoint and delivered to the other bridge.

use cosmwasm_std::{coins, Addr, Binary, Empty, Uint128};
use cw_multi_test::{App, ContractWrapper, Executor};

use nft_bridge::address_codec::local_address_to_receiver;
use nft_bridge::msg::{CollectionMsg, ExecuteMsg, InstantiateMsg, QueryMsg, TokenResponse};
use test_endpoint::msg::OutboundMessagesResponse;

const DENOM: &str = "uluna";
const CHAIN_A: u64 = 1;
const CHAIN_B: u64 = 2;
const RECEIVER_ADDR: &str = "terra1x46rqay4d3cssq8gxxvqz8xt6nwlz4td20k38v";

fn contract_bridge() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        nft_bridge::contract::execute,
        nft_bridge::contract::instantiate,
        nft_bridge::contract::query,
    );
    Box::new(contract)
}

fn contract_endpoint() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        test_endpoint::contract::execute,
        test_endpoint::contract::instantiate,
        test_endpoint::contract::query,
    );
    Box::new(contract)
}

fn instantiate_bridge(
    app: &mut App,
    code_id: u64,
    admin: &Addr,
    endpoint: &Addr,
    start_id: u32,
    label: &str,
) -> Addr {
    app.instantiate_contract(
        code_id,
        admin.clone(),
        &InstantiateMsg {
            admin: admin.to_string(),
            endpoint: endpoint.to_string(),
            fee_denom: DENOM.to_string(),
            address_prefix: "terra".to_string(),
            start_id,
            end_id: start_id + 999,
            collection: CollectionMsg {
                name: "Travellers".to_string(),
                description: String::new(),
                uri: format!("ipfs://{}", label),
            },
        },
        &[],
        label,
        None,
    )
    .unwrap()
}

fn trust(app: &mut App, admin: &Addr, bridge: &Addr, chain_id: u64, remote: &Addr) {
    app.execute_contract(
        admin.clone(),
        bridge.clone(),
        &ExecuteMsg::SetTrustedRemote {
            chain_id,
            remote_address: Binary::from(remote.as_bytes().to_vec()),
        },
        &[],
    )
    .unwrap();
}

/// Deliver the most recent outbound payload to `to`, as coming from `src_chain_id`
fn relay_last(app: &mut App, admin: &Addr, endpoint: &Addr, to: &Addr, src_chain_id: u64) {
    let outbound: OutboundMessagesResponse = app
        .wrap()
        .query_wasm_smart(
            endpoint,
            &test_endpoint::msg::QueryMsg::OutboundMessages {
                start_after: None,
                limit: Some(50),
            },
        )
        .unwrap();
    let last = outbound.messages.last().unwrap().message.clone();
    assert_eq!(last.destination.as_slice(), to.as_bytes());

    app.execute_contract(
        admin.clone(),
        endpoint.clone(),
        &test_endpoint::msg::ExecuteMsg::Deliver {
            app: to.to_string(),
            src_chain_id,
            src_address: Binary::from(last.app.as_bytes().to_vec()),
            payload: last.payload,
        },
        &[],
    )
    .unwrap();
}

fn token(app: &App, bridge: &Addr, token_id: u32) -> TokenResponse {
    app.wrap()
        .query_wasm_smart(bridge, &QueryMsg::Token { token_id })
        .unwrap()
}

#[test]
fn test_token_ids_diverge_across_bridges() {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");
    let user = Addr::unchecked("terra1user");
    let receiver = Addr::unchecked(RECEIVER_ADDR);
    let receiver_bytes = local_address_to_receiver(RECEIVER_ADDR).unwrap();

    app.init_modules(|router, _, storage| {
        for account in [&user, &receiver] {
            router
                .bank
                .init_balance(storage, account, coins(1_000_000, DENOM))
                .unwrap();
        }
    });

    let endpoint_code = app.store_code(contract_endpoint());
    let endpoint = app
        .instantiate_contract(
            endpoint_code,
            admin.clone(),
            &test_endpoint::msg::InstantiateMsg {
                admin: admin.to_string(),
                fee_denom: DENOM.to_string(),
                base_fee: Uint128::new(10),
                fee_per_byte: Uint128::zero(),
                alt_fee: Uint128::zero(),
            },
            &[],
            "endpoint",
            None,
        )
        .unwrap();

    let bridge_code = app.store_code(contract_bridge());
    let bridge_a = instantiate_bridge(&mut app, bridge_code, &admin, &endpoint, 1, "bridge-a");
    let bridge_b = instantiate_bridge(&mut app, bridge_code, &admin, &endpoint, 5000, "bridge-b");
    trust(&mut app, &admin, &bridge_a, CHAIN_B, &bridge_b);
    trust(&mut app, &admin, &bridge_b, CHAIN_A, &bridge_a);

    // Mint on A and send to the receiver on B
    app.execute_contract(
        user.clone(),
        bridge_a.clone(),
        &ExecuteMsg::Mint {
            collection_name: "Travellers".to_string(),
            nft_name: "Traveller".to_string(),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        user.clone(),
        bridge_a.clone(),
        &ExecuteMsg::Send {
            dst_chain_id: CHAIN_B,
            dst_receiver: Binary::from(receiver_bytes.to_vec()),
            fee: Uint128::new(10),
            token_id: 1,
            adapter_params: Binary::default(),
        },
        &coins(10, DENOM),
    )
    .unwrap();
    relay_last(&mut app, &admin, &endpoint, &bridge_b, CHAIN_A);

    // B has never seen id 1, so it mints under its own id space
    assert!(token(&app, &bridge_a, 1).in_custody);
    let on_b = token(&app, &bridge_b, 5000);
    assert_eq!(on_b.holder, receiver);
    assert_eq!(on_b.name, "Bridged NFT #5000");

    // The receiver sends it back under B's id, which A has never allocated,
    // so A mints again and the original stays in custody
    app.execute_contract(
        receiver.clone(),
        bridge_b.clone(),
        &ExecuteMsg::Send {
            dst_chain_id: CHAIN_A,
            dst_receiver: Binary::from(receiver_bytes.to_vec()),
            fee: Uint128::new(10),
            token_id: 5000,
            adapter_params: Binary::default(),
        },
        &coins(10, DENOM),
    )
    .unwrap();
    relay_last(&mut app, &admin, &endpoint, &bridge_a, CHAIN_B);

    assert!(token(&app, &bridge_b, 5000).in_custody);
    assert!(token(&app, &bridge_a, 1).in_custody);
    let back_on_a = token(&app, &bridge_a, 2);
    assert_eq!(back_on_a.holder, receiver);
    assert_eq!(back_on_a.name, "Bridged NFT #2");
}
