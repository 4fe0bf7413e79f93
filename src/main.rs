use clap::Parser;
use options::Options;
use replay::ReplayConfig;
use runeset_client::IndexerClient;
use std::io;
use tracing::info;

mod options;
mod replay;
mod report;
mod utxo_set;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Logging goes to stderr; stdout carries nothing but the report.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(io::stderr)
        .init();

    // 2. Parse command-line options
    let options = Options::parse();
    let config = ReplayConfig::from(&options);

    let client = IndexerClient::new(&options.indexer_url).with_timeout(options.http_timeout());

    // 3. Replay the transaction log, in file order
    let txids = replay::read_txids(&options.tx_file)?;
    info!(
        "replaying {} transactions against {}",
        txids.len(),
        options.indexer_url
    );

    let utxos = replay::replay(&client, &txids, &config).await?;
    info!("{} rune utxos survive the replay", utxos.len());

    // 4. Dump the survivors
    report::write_report(&utxos, io::stdout().lock())?;

    Ok(())
}
