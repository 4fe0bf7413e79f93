use {
    crate::rune::RuneInject,
    serde::{Deserialize, Serialize},
};

/// A transaction as served by the indexer's `/transaction/{txid}`
/// endpoint. Only the fields the UTXO replay needs are modeled; the
/// indexer is free to add more.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transaction {
    pub txid: String,
    pub vin: Vec<TxIn>,
    pub vout: Vec<TxOut>,
}

/// A transaction input, spending the referenced outpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxIn {
    pub txid: String,
    pub vout: u32,
}

/// A transaction output. Its index is its position in the `vout` array,
/// not a field of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TxOut {
    #[serde(rename = "runeInject", default, skip_serializing_if = "Vec::is_empty")]
    pub rune_inject: Vec<RuneInject>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_indexer_transaction() {
        let tx: Transaction = serde_json::from_str(
            r#"{
                "txid": "tx1",
                "vin": [{"txid": "tx0", "vout": 3, "sequence": 4294967295}],
                "vout": [
                    {"value": 546},
                    {"value": 546, "runeInject": [{"utxo": {"rune_id": "840100:5", "amount": "500"}}]}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(tx.txid, "tx1");
        assert_eq!(tx.vin[0].txid, "tx0");
        assert_eq!(tx.vin[0].vout, 3);
        assert!(tx.vout[0].rune_inject.is_empty());
        assert_eq!(tx.vout[1].rune_inject[0].utxo.amount, 500);
    }
}
