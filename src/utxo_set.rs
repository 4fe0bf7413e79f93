use indexmap::IndexMap;
use runeset_types::{OutPoint, RuneAmount, Transaction};

/// The rune-bearing outputs not yet spent, as observed by replaying the
/// transaction log in order. Iteration order is insertion order, so the
/// final report is deterministic.
#[derive(Debug, Default)]
pub struct UtxoSet {
    entries: IndexMap<OutPoint, RuneAmount>,
}

impl UtxoSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one transaction: every input spends (removes) its
    /// outpoint, and every injected rune balance mints an entry at
    /// `(txid, vout)`, overwriting any previous value at that key.
    /// Spending an outpoint the set never held is a no-op.
    pub fn apply(&mut self, tx: &Transaction) {
        for input in &tx.vin {
            // shift_remove keeps the report order of surviving entries.
            self.entries
                .shift_remove(&OutPoint::new(input.txid.clone(), input.vout));
        }

        for (vout, output) in tx.vout.iter().enumerate() {
            for inject in &output.rune_inject {
                self.entries.insert(
                    OutPoint::new(tx.txid.clone(), vout as u32),
                    inject.utxo.clone(),
                );
            }
        }
    }

    pub fn get(&self, outpoint: &OutPoint) -> Option<&RuneAmount> {
        self.entries.get(outpoint)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OutPoint, &RuneAmount)> {
        self.entries.iter()
    }
}
