mod config;
mod main_lib;

use anyhow::bail;
use config::Config;
use main_lib::{build_resolver, init_tracing, resolve_all};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(&config.log_format);

    let dates: Vec<String> = std::env::args().skip(1).collect();
    if dates.is_empty() {
        bail!("usage: keepsake-facts <YYYY-MM-DD>...");
    }

    let resolver = build_resolver(&config);
    let reports = resolve_all(&resolver, &dates).await;
    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
