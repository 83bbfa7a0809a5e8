//! Static symbol -> coin-id reference dataset.
//!
//! The table is read once and never reloaded. Lookups are a case-insensitive
//! linear scan; the first match in dataset order wins, and absence is a
//! valid outcome (the token simply stays unresolved downstream).

use once_cell::sync::Lazy;
use std::{fs, path::Path};

use crate::utils::error::Result;
use crate::utils::types::CoinRecord;

static BUNDLED_JSON: &str = include_str!("../../data/coins.json");

static BUNDLED: Lazy<CoinLookupTable> = Lazy::new(|| {
    CoinLookupTable::from_json(BUNDLED_JSON).expect("bundled coin dataset is valid JSON")
});

/// Symbol -> identifier reference table.
#[derive(Debug, Clone)]
pub struct CoinLookupTable {
    coins: Vec<CoinRecord>,
}

impl CoinLookupTable {
    /// Build a table from records already in memory, keeping their order.
    pub fn from_records(coins: Vec<CoinRecord>) -> Self {
        Self { coins }
    }

    /// Parse a table from a JSON array of coin records.
    pub fn from_json(raw: &str) -> Result<Self> {
        let coins: Vec<CoinRecord> = serde_json::from_str(raw)?;
        Ok(Self { coins })
    }

    /// Load a table from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// The dataset bundled with the crate, parsed once at first use.
    pub fn bundled() -> &'static CoinLookupTable {
        &BUNDLED
    }

    /// Resolve a ticker symbol to its canonical coin id.
    ///
    /// Comparison is case-insensitive on both sides. Returns `None` when no
    /// record matches; that is not an error condition.
    pub fn resolve(&self, symbol: &str) -> Option<&str> {
        let wanted = symbol.to_lowercase();
        self.coins
            .iter()
            .find(|coin| coin.symbol.to_lowercase() == wanted)
            .map(|coin| coin.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }
}
