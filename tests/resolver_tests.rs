use ez_network_select::*;

fn builtins() -> &'static [NetworkDescriptor] {
    NetworkRegistry::default().list_all()
}

#[test]
fn test_mainnet_with_empty_customs() {
    let active = resolve_active(&Provider::builtin(BuiltinNetwork::Mainnet), builtins(), &[]);
    assert_eq!(active, ActiveSelection::Builtin { id: BuiltinNetwork::Mainnet });
    assert!(!active.is_catch_all());
}

#[test]
fn test_builtin_wins_regardless_of_customs_and_rpc_target() {
    let customs = vec![
        CustomEndpoint::new("https://a"),
        CustomEndpoint::new("https://b"),
    ];
    let mut provider = Provider::builtin(BuiltinNetwork::Testnet);
    provider.rpc_target = Some("https://a".into());

    let active = resolve_active(&provider, builtins(), &customs);
    assert_eq!(active.builtin(), Some(BuiltinNetwork::Testnet));
    assert_eq!(active.custom_rpc_url(), None);
}

#[test]
fn test_custom_match_is_exact() {
    let customs = vec![CustomEndpoint::new("https://Node.example")];

    let active = resolve_active(&Provider::rpc("https://Node.example"), builtins(), &customs);
    assert_eq!(active, ActiveSelection::Custom { rpc_url: "https://Node.example".into() });

    let active = resolve_active(&Provider::rpc("https://node.example"), builtins(), &customs);
    assert_eq!(active, ActiveSelection::Unrecognized { rpc_target: "https://node.example".into() });
}

#[test]
fn test_custom_requires_rpc_type() {
    let customs = vec![CustomEndpoint::new("https://a")];
    let mut provider = Provider::rpc("https://a");
    provider.provider_type = ProviderType::Other("kovan".into());

    assert_eq!(resolve_active(&provider, builtins(), &customs), ActiveSelection::None);
}

#[test]
fn test_unknown_target_is_unrecognized_and_not_deletable() {
    let provider = Provider::rpc("https://unknown");
    let active = resolve_active(&provider, builtins(), &[]);
    assert_eq!(active, ActiveSelection::Unrecognized { rpc_target: "https://unknown".into() });
    assert!(active.is_catch_all());

    let store = CustomEndpointStore::default();
    let menu = NetworkMenu::build(&provider, &store, DEFAULT_TICKER);
    let current = menu.current().expect("unknown target is pinned as current");
    assert_eq!(current.rpc_url(), Some("https://unknown"));
    assert!(current.is_active());
    assert!(!current.is_deletable());
    assert_eq!(menu.custom_entries().count(), 0);
}

#[test]
fn test_reserved_rpc_target_falls_into_catch_all() {
    for target in [LOCALHOST_RPC_URL, BuiltinNetwork::Mainnet.descriptor().rpc_url] {
        let provider = Provider::rpc(target);
        assert_eq!(resolve_active(&provider, builtins(), &[]), ActiveSelection::None);

        let menu = NetworkMenu::build(&provider, &CustomEndpointStore::default(), DEFAULT_TICKER);
        assert!(menu.current().is_none());
        assert_eq!(menu.items.last(), Some(&MenuItem::CustomRpc { active: true }));
    }
}

#[test]
fn test_rpc_without_target_is_none() {
    let mut provider = Provider::rpc("");
    assert_eq!(resolve_active(&provider, builtins(), &[]), ActiveSelection::None);
    provider.rpc_target = None;
    assert_eq!(resolve_active(&provider, builtins(), &[]), ActiveSelection::None);
}

#[test]
fn test_exactly_one_active_menu_item() {
    let registry = NetworkRegistry::default();
    let store = CustomEndpointStore::from_entries(
        registry,
        vec![
            CustomEndpoint::new("https://a").with_nickname("A"),
            CustomEndpoint::new("https://b"),
            CustomEndpoint::new(LOCALHOST_RPC_URL),
        ],
    );

    let providers = [
        Provider::builtin(BuiltinNetwork::Mainnet),
        Provider::builtin(BuiltinNetwork::Testnet),
        Provider::rpc("https://a"),
        Provider::rpc("https://elsewhere"),
        Provider::rpc(LOCALHOST_RPC_URL),
        Provider {
            provider_type: ProviderType::Other("ropsten".into()),
            rpc_target: None,
            ticker: None,
            nickname: None,
        },
    ];

    for provider in &providers {
        let menu = NetworkMenu::build(provider, &store, DEFAULT_TICKER);
        let active = menu.items.iter().filter(|item| item.is_active()).count();
        assert_eq!(active, 1, "provider {provider:?} produced {active} active items");
    }
}

#[test]
fn test_menu_layout_for_active_custom_entry() {
    let store = CustomEndpointStore::from_entries(
        NetworkRegistry::default(),
        vec![
            CustomEndpoint::new("https://a").with_nickname("A"),
            CustomEndpoint::new("https://b").with_ticker("BNB"),
            CustomEndpoint::new("https://c"),
        ],
    );
    let provider = Provider::rpc("https://a");
    let menu = NetworkMenu::build(&provider, &store, DEFAULT_TICKER);

    assert_eq!(menu.active, ActiveSelection::Custom { rpc_url: "https://a".into() });
    assert_eq!(menu.title, None);

    let urls: Vec<Option<&str>> = menu.items.iter().map(MenuItem::rpc_url).collect();
    let mainnet = BuiltinNetwork::Mainnet.descriptor().rpc_url;
    let testnet = BuiltinNetwork::Testnet.descriptor().rpc_url;
    assert_eq!(
        urls,
        vec![
            Some(mainnet),
            Some(testnet),
            Some("https://a"),
            Some("https://c"),
            Some("https://b"),
            None,
        ]
    );

    match menu.current() {
        Some(MenuItem::Current { label, .. }) => assert_eq!(label, "A"),
        other => panic!("expected current item, got {other:?}"),
    }
    match &menu.items[4] {
        MenuItem::Custom { ticker, label, .. } => {
            assert_eq!(ticker, "BNB");
            assert_eq!(label, "https://b");
        }
        other => panic!("expected custom item, got {other:?}"),
    }
    match &menu.items[3] {
        MenuItem::Custom { ticker, .. } => assert_eq!(ticker, "ETH"),
        other => panic!("expected custom item, got {other:?}"),
    }
}

#[test]
fn test_menu_title() {
    let store = CustomEndpointStore::default();
    let provider = Provider::builtin(BuiltinNetwork::Testnet);
    let menu = NetworkMenu::build(&provider, &store, DEFAULT_TICKER);
    assert_eq!(menu.title.as_deref(), Some("NewChainTestNet"));

    let provider = Provider::rpc("https://x").with_nickname("Mine");
    let menu = NetworkMenu::build(&provider, &store, DEFAULT_TICKER);
    assert_eq!(menu.title.as_deref(), Some("Mine"));
}
