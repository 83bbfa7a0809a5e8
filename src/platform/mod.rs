//! Platform-connection flow: the second input mode behind the shell.
//!
//! A real connector talks to a Web3 signal platform (e.g. CTxbt) with the
//! user's API key and returns display rows through the success callback. The
//! demo connector below serves the canned rows the demo ships with, so the
//! shell and table render without live credentials.

use async_trait::async_trait;
use log::debug;
use serde_json::Value;

use crate::utils::error::Result;
use crate::utils::types::DisplayRow;

/// Trait implemented by any platform backend able to produce display rows
/// for an API key.
#[async_trait]
pub trait PlatformConnector: Send + Sync {
    async fn simulate(&self, platform: &str, api_key: &str) -> Result<Vec<DisplayRow>>;
}

/// Connector returning canned demo rows regardless of credentials.
#[derive(Debug, Clone, Default)]
pub struct DemoPlatformConnector;

#[async_trait]
impl PlatformConnector for DemoPlatformConnector {
    async fn simulate(&self, platform: &str, _api_key: &str) -> Result<Vec<DisplayRow>> {
        debug!("serving canned rows for platform {}", platform);
        Ok(demo_rows())
    }
}

/// The three historical demo signals (ZIG, AST, LNQ).
pub fn demo_rows() -> Vec<DisplayRow> {
    vec![
        DisplayRow {
            signal: Some("Buy".to_string()),
            token_symbol: Some("ZIG".to_string()),
            token_id: Some("zignaly".to_string()),
            current_price: Some(0.08332613939091653),
            tp1: Some(0.1),
            tp2: Some(0.15),
            sl: Some(0.0708),
            exit_price: Some(Value::from(0.08437719090322876)),
            p_and_l: Some(Value::from("-4.55%")),
        },
        DisplayRow {
            signal: Some("Buy".to_string()),
            token_symbol: Some("AST".to_string()),
            token_id: Some("astra-2".to_string()),
            current_price: Some(0.00042143784946687166),
            tp1: Some(0.0005),
            tp2: Some(0.00055),
            sl: Some(0.0004),
            exit_price: Some(Value::from(0.0005375392354823141)),
            p_and_l: Some(Value::from("21.44%")),
        },
        DisplayRow {
            signal: Some("Buy".to_string()),
            token_symbol: Some("LNQ".to_string()),
            token_id: Some("linqai".to_string()),
            current_price: Some(0.03137818737413583),
            tp1: Some(0.04),
            tp2: Some(0.045),
            sl: Some(0.028),
            exit_price: Some(Value::from("N/A")),
            p_and_l: Some(Value::from("N/A")),
        },
    ]
}
