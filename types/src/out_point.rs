use {
    serde::{Deserialize, Serialize},
    std::{
        fmt::{self, Display, Formatter},
        str::FromStr,
    },
};

/// Reference to a single transaction output, the key a rune UTXO lives
/// under. Txids stay in the indexer's own string form; this crate never
/// re-encodes them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    pub txid: String,
    pub vout: u32,
}

impl OutPoint {
    pub fn new(txid: impl Into<String>, vout: u32) -> Self {
        Self {
            txid: txid.into(),
            vout,
        }
    }
}

impl Display for OutPoint {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.txid, self.vout)
    }
}

#[derive(Debug)]
pub enum ParseError {
    Separator,
    Vout(std::num::ParseIntError),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Separator => write!(f, "missing `:` separator"),
            Self::Vout(err) => write!(f, "invalid output index: {err}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl FromStr for OutPoint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (txid, vout) = s.rsplit_once(':').ok_or(ParseError::Separator)?;

        Ok(Self {
            txid: txid.to_string(),
            vout: vout.parse().map_err(ParseError::Vout)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips_through_from_str() {
        let outpoint = OutPoint::new("a7f3", 12);

        assert_eq!(outpoint.to_string(), "a7f3:12");
        assert_eq!(outpoint.to_string().parse::<OutPoint>().unwrap(), outpoint);
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(matches!(
            "a7f3".parse::<OutPoint>(),
            Err(ParseError::Separator)
        ));
    }

    #[test]
    fn rejects_non_numeric_vout() {
        assert!(matches!(
            "a7f3:x".parse::<OutPoint>(),
            Err(ParseError::Vout(_))
        ));
    }
}
