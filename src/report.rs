use std::io::Write;

use crate::utxo_set::UtxoSet;

/// Writes one `txid,vout,rune_block,rune_tx_index,balance` record per
/// surviving UTXO, in set order. No header row.
pub fn write_report<W: Write>(utxos: &UtxoSet, writer: W) -> anyhow::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    for (outpoint, rune) in utxos.iter() {
        let vout = outpoint.vout.to_string();
        let block = rune.rune_id.block.to_string();
        let tx = rune.rune_id.tx.to_string();
        let amount = rune.amount.to_string();
        csv.write_record([
            outpoint.txid.as_str(),
            vout.as_str(),
            block.as_str(),
            tx.as_str(),
            amount.as_str(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utxo_set::UtxoSet;
    use serde_json::json;

    #[test]
    fn writes_one_record_per_utxo() {
        let mut utxos = UtxoSet::new();
        utxos.apply(
            &serde_json::from_value(json!({
                "txid": "tx1",
                "vin": [],
                "vout": [
                    {},
                    {"runeInject": [{"utxo": {"rune_id": "840100:5", "amount": "500"}}]}
                ]
            }))
            .unwrap(),
        );

        let mut out = Vec::new();
        write_report(&utxos, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "tx1,1,840100,5,500\n");
    }

    #[test]
    fn empty_set_writes_nothing() {
        let mut out = Vec::new();
        write_report(&UtxoSet::new(), &mut out).unwrap();

        assert!(out.is_empty());
    }
}
