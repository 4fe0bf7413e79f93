use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::Context;
use runeset_client::{RetryConfig, RetryPolicy, RunesIndexerApi};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::utxo_set::UtxoSet;

/// Settings for one replay run.
#[derive(Debug, Clone, Default)]
pub struct ReplayConfig {
    pub retry: RetryConfig,
    /// Fail the run on a non-success indexer status instead of treating
    /// the transaction as having no effect.
    pub strict: bool,
}

/// Reads the newline-delimited transaction log at `path`, in file order.
pub fn read_txids(path: &Path) -> anyhow::Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("cannot open transaction log {}", path.display()))?;
    parse_txids(BufReader::new(file))
        .with_context(|| format!("cannot read transaction log {}", path.display()))
}

/// Surrounding whitespace is stripped; blank lines are skipped.
fn parse_txids(reader: impl BufRead) -> std::io::Result<Vec<String>> {
    let mut txids = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let txid = line.trim();
        if !txid.is_empty() {
            txids.push(txid.to_string());
        }
    }
    Ok(txids)
}

/// Replays `txids` against the indexer strictly sequentially, one
/// transaction fully resolved (retries included) before the next, and
/// returns the UTXO set that survives.
pub async fn replay<C>(
    client: &C,
    txids: &[String],
    config: &ReplayConfig,
) -> anyhow::Result<UtxoSet>
where
    C: RunesIndexerApi,
{
    let mut utxos = UtxoSet::new();
    for txid in txids {
        fetch_and_apply(client, txid, config, &mut utxos).await?;
    }
    Ok(utxos)
}

async fn fetch_and_apply<C>(
    client: &C,
    txid: &str,
    config: &ReplayConfig,
    utxos: &mut UtxoSet,
) -> anyhow::Result<()>
where
    C: RunesIndexerApi,
{
    let mut policy = RetryPolicy::new(config.retry.clone());

    loop {
        match client.get_transaction(txid).await {
            Ok(tx) => {
                utxos.apply(&tx);
                info!("fetched {txid}");
                return Ok(());
            }
            Err(err) if !err.is_transient() => {
                if config.strict {
                    return Err(anyhow::Error::new(err))
                        .with_context(|| format!("replay halted at transaction {txid}"));
                }
                debug!("{err}; treating it as having no effect");
                return Ok(());
            }
            Err(err) => match policy.next_delay() {
                Some(delay) => {
                    warn!("{err}; retrying {txid} in {delay:?}");
                    sleep(delay).await;
                }
                None => {
                    return Err(anyhow::Error::new(err)).with_context(|| {
                        format!("giving up on {} after {} attempts", txid, policy.attempts())
                    });
                }
            },
        }
    }
}
