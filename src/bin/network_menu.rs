use anyhow::Context;
use ez_network_select::{
    BuiltinNetwork, CustomEndpoint, NetworkSelectionController, Provider,
    SelectionConfig, WalletState, resolve_config,
};
use serde_json::json;

fn sample_state() -> WalletState {
    let provider = Provider::rpc("https://rpc.example.org").with_nickname("Imported");
    let mut state = WalletState::new(provider);
    state.frequent_rpc_list_detail = vec![
        CustomEndpoint::new("http://localhost:8545"),
        CustomEndpoint::new("https://rpc.a.example").with_nickname("A").with_chain_id("1"),
        CustomEndpoint::new("https://rpc.b.example").with_ticker("BNB").with_chain_id("56"),
    ];
    state
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Optional args: path to a wallet-state JSON file, path to a config JSON file
    let mut args = std::env::args().skip(1);

    let state = match args.next() {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing wallet state {path}"))?
        }
        None => sample_state(),
    };

    let config: SelectionConfig = match args.next() {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))?
        }
        None => SelectionConfig::default(),
    };

    let controller = NetworkSelectionController::new(resolve_config(config));
    let store = state.endpoint_store();
    let menu = controller.menu(&state.provider, &store);
    let switch = controller.switch_to_builtin(&state.provider, BuiltinNetwork::Mainnet);

    let report = json!({
        "menu": menu,
        "switchToMainnet": switch,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
