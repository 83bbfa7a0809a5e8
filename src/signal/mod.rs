//! Signal normalization: raw inference text -> canonical signal record.
//!
//! The steps are linear and any failure is terminal for the submission:
//! envelope parse, nested payload parse, required-field validation, token-id
//! resolution. No partial record ever leaves this module.

use log::debug;

use crate::lookup::CoinLookupTable;
use crate::utils::error::{Error, Result};
use crate::utils::types::{CanonicalSignal, InferenceEnvelope, RawParsedSignal};

/// Normalize the raw inference response body into a [`CanonicalSignal`].
///
/// Failure kinds: `MalformedEnvelope` when the body is not a valid JSON
/// envelope, `MalformedPayload` when the nested `result` string is not valid
/// JSON, `IncompleteSignal` when any of the five required fields is missing
/// or empty. An unresolved token id is not a failure.
pub fn normalize(raw_result_text: &str, coins: &CoinLookupTable) -> Result<CanonicalSignal> {
    let envelope: InferenceEnvelope = serde_json::from_str(raw_result_text)
        .map_err(|e| Error::MalformedEnvelope(e.to_string()))?;

    let raw: RawParsedSignal = serde_json::from_str(&envelope.result)
        .map_err(|e| Error::MalformedPayload(e.to_string()))?;

    let token_symbol = require_text("tokenSymbol", raw.token_symbol)?;
    let signal = require_text("signal", raw.signal)?;
    let tp1 = require_level("tp1", raw.tp1)?;
    let tp2 = require_level("tp2", raw.tp2)?;
    let sl = require_level("sl", raw.sl)?;

    let token_id = coins.resolve(&token_symbol).map(str::to_string);
    debug!("resolved token id for {}: {:?}", token_symbol, token_id);

    Ok(CanonicalSignal {
        token_symbol,
        signal,
        tp1,
        tp2,
        sl,
        token_id,
    })
}

fn require_text(field: &'static str, value: Option<String>) -> Result<String> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(Error::IncompleteSignal(format!("missing field `{}`", field))),
    }
}

// Price levels mirror the upstream truthiness gate: absent and zero are both
// rejected.
fn require_level(field: &'static str, value: Option<f64>) -> Result<f64> {
    match value {
        Some(level) if level != 0.0 => Ok(level),
        _ => Err(Error::IncompleteSignal(format!("missing field `{}`", field))),
    }
}
