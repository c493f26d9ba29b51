use ez_network_select::*;
use serde_json::json;

#[test]
fn test_provider_type_parses_closed_set() {
    assert_eq!(ProviderType::from("mainnet"), ProviderType::Builtin(BuiltinNetwork::Mainnet));
    assert_eq!(ProviderType::from("rpc"), ProviderType::Rpc);
    assert_eq!(ProviderType::from("ropsten"), ProviderType::Other("ropsten".into()));
    assert_eq!(ProviderType::from("RPC"), ProviderType::Other("RPC".into()));
}

#[test]
fn test_provider_wire_shape() {
    let provider: Provider = serde_json::from_value(json!({
        "type": "rpc",
        "rpcTarget": "https://node.example",
        "ticker": "XDAI",
    }))
    .unwrap();
    assert_eq!(provider.provider_type, ProviderType::Rpc);
    assert_eq!(provider.active_rpc_target(), Some("https://node.example"));
    assert_eq!(provider.nickname, None);

    let back = serde_json::to_value(&provider).unwrap();
    assert_eq!(back["type"], "rpc");
    assert!(back.get("nickname").is_none());
}

#[test]
fn test_unknown_provider_type_round_trips_verbatim() {
    let provider: Provider = serde_json::from_value(json!({"type": "goerli"})).unwrap();
    assert_eq!(serde_json::to_value(&provider).unwrap(), json!({"type": "goerli"}));
    assert_eq!(provider.active_rpc_target(), None);
}

#[test]
fn test_custom_endpoint_defaults() {
    let entry: CustomEndpoint =
        serde_json::from_value(json!({"rpcUrl": "https://a", "ticker": ""})).unwrap();
    assert_eq!(entry.ticker_or(DEFAULT_TICKER), "ETH");
    assert_eq!(entry.label(), "https://a");
    assert_eq!(entry.rpc_prefs, RpcPrefs::default());

    let named = CustomEndpoint::new("https://b").with_nickname("Bee").with_ticker("BEE");
    assert_eq!(named.label(), "Bee");
    assert_eq!(named.ticker_or(DEFAULT_TICKER), "BEE");
}

#[test]
fn test_command_wire_shape() {
    let value = serde_json::to_value(Command::DeleteRpcTarget {
        rpc_url: "https://a".into(),
    })
    .unwrap();
    assert_eq!(value, json!({"type": "delRpcTarget", "rpcUrl": "https://a"}));

    let value = serde_json::to_value(Command::HideDropdown).unwrap();
    assert_eq!(value, json!({"type": "hideNetworkDropdown"}));

    let value = serde_json::to_value(Command::SetProviderType {
        network: BuiltinNetwork::Testnet,
    })
    .unwrap();
    assert_eq!(value, json!({"type": "setProviderType", "network": "testnet"}));

    let value = serde_json::to_value(Command::SetRpcTarget(RpcTarget {
        rpc_target: "https://a".into(),
        chain_id: Some("5".into()),
        ticker: "ETH".into(),
        nickname: String::new(),
        rpc_prefs: RpcPrefs::default(),
    }))
    .unwrap();
    assert_eq!(
        value,
        json!({
            "type": "setRpcTarget",
            "rpcTarget": "https://a",
            "chainId": "5",
            "ticker": "ETH",
            "nickname": "",
            "rpcPrefs": {}
        })
    );
}

#[test]
fn test_switch_event_shape() {
    let event = MetricsEvent::network_switch("rpc", "mainnet");
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["category"], "Navigation");
    assert_eq!(value["action"], "Home");
    assert_eq!(value["name"], "Switched Networks");
    assert_eq!(value["customVariables"], json!({"fromNetwork": "rpc", "toNetwork": "mainnet"}));
}
