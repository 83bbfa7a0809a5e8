//! Common types used throughout the signal simulator.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One record of the coin reference dataset (CoinGecko shape).
///
/// Only `id` and `symbol` take part in resolution; `name` travels along for
/// display purposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinRecord {
    pub id: String,
    pub symbol: String,
    #[serde(default)]
    pub name: String,
}

/// Nested inference payload as it arrives off the wire, before validation.
///
/// Every field is optional here; `signal::normalize` turns this into a
/// [`CanonicalSignal`] or rejects the whole record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawParsedSignal {
    #[serde(default)]
    pub token_symbol: Option<String>,
    #[serde(default)]
    pub signal: Option<String>,
    #[serde(default)]
    pub tp1: Option<f64>,
    #[serde(default)]
    pub tp2: Option<f64>,
    #[serde(default)]
    pub sl: Option<f64>,
}

/// Fully validated trading-signal record with resolved token identifier.
///
/// `token_id` stays `None` when the symbol is absent from the lookup table;
/// it serializes as a `tokenId: null` the processing service accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalSignal {
    pub token_symbol: String,
    pub signal: String,
    pub tp1: f64,
    pub tp2: f64,
    pub sl: f64,
    pub token_id: Option<String>,
}

/// Server-confirmed record rendered in the results table.
///
/// Display-only, so every field is optional and the two columns the server
/// may fill with `"N/A"` stay loosely typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    #[serde(default)]
    pub signal: Option<String>,
    #[serde(default)]
    pub token_symbol: Option<String>,
    #[serde(default)]
    pub token_id: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub tp1: Option<f64>,
    #[serde(default)]
    pub tp2: Option<f64>,
    #[serde(default)]
    pub sl: Option<f64>,
    /// Either a price or the string "N/A" on the wire
    #[serde(default, rename = "exit_price")]
    pub exit_price: Option<Value>,
    /// Either a percentage string or "N/A" on the wire
    #[serde(default, rename = "p_and_l")]
    pub p_and_l: Option<Value>,
}

/// Body of the POST to the inference service.
#[derive(Debug, Serialize)]
pub struct InferRequest<'a> {
    pub message: &'a str,
}

/// Outer inference response; `result` holds a further JSON-encoded signal.
#[derive(Debug, Deserialize)]
pub struct InferenceEnvelope {
    pub result: String,
}

/// Body of the POST to the processing service.
#[derive(Debug, Serialize)]
pub struct ProcessRequest<'a> {
    pub signal_data: &'a CanonicalSignal,
}

/// Successful processing response.
#[derive(Debug, Deserialize)]
pub struct ProcessResponse {
    pub data: DisplayRow,
}
