use {
    ordinals::RuneId,
    serde::{Deserialize, Serialize},
};

/// One rune balance injected into a transaction output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuneInject {
    pub utxo: RuneAmount,
}

/// Rune id and balance carried by a single output. The indexer serves
/// both fields as JSON strings; amounts are integer base units, with
/// divisibility left to display layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuneAmount {
    pub rune_id: RuneId,
    #[serde(with = "amount")]
    pub amount: u128,
}

impl From<(RuneId, u128)> for RuneAmount {
    fn from((rune_id, amount): (RuneId, u128)) -> Self {
        Self { rune_id, amount }
    }
}

// Bridges the wire's string-encoded amounts to u128.
mod amount {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(amount: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&amount.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
