// sui-discover — fetch a node's OpenRPC schema and print it.
//
// Usage: sui-discover [URL]   (defaults to the local full node)

use suirpc::{config, logging, SuiRpc};

fn main() {
    if let Err(e) = real_main() {
        eprintln!("[sui-discover] fatal error: {e:?}");
        log::error!("Fatal error: {:?}", e);
        std::process::exit(1);
    }
}

fn real_main() -> anyhow::Result<()> {
    logging::init_logging()?;

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_NODE_URL.to_string());

    log::info!("suirpc {} querying {}", config::CLIENT_VERSION, url);

    let client = SuiRpc::builder(&url)
        .debug(std::env::var_os("SUIRPC_DEBUG").is_some())
        .build();

    let schema = client.discover()?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
