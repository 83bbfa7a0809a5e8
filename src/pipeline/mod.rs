//! Ingestion pipeline: one user submission through inference and processing.
//!
//! Two strictly sequential POSTs per submission, no retry, no idempotency
//! key. The processing call is never reached unless normalization accepted
//! all five signal fields. Concurrent submissions are not fenced; whichever
//! completes last owns the caller's result slot.

use log::{debug, info};
use reqwest::Client;
use url::Url;

use crate::lookup::CoinLookupTable;
use crate::signal;
use crate::utils::error::{Error, Result};
use crate::utils::types::{DisplayRow, InferRequest, ProcessRequest, ProcessResponse};

/// Orchestrates the inference and processing calls for one submission.
#[derive(Debug)]
pub struct IngestionPipeline {
    client: Client,
    infer_url: Url,
    process_url: Url,
    coins: CoinLookupTable,
}

impl IngestionPipeline {
    /// Create a pipeline against the two service endpoints.
    ///
    /// The reqwest client keeps its default transport timeout; none is
    /// configured here.
    pub fn new(infer_url: &str, process_url: &str, coins: CoinLookupTable) -> Result<Self> {
        let infer_url = parse_endpoint("inference", infer_url)?;
        let process_url = parse_endpoint("processing", process_url)?;

        Ok(Self {
            client: Client::new(),
            infer_url,
            process_url,
            coins,
        })
    }

    /// Run one message through inference, normalization and processing.
    ///
    /// Returns the display rows that replace the caller's current result
    /// set. Normalization failure kinds propagate unchanged.
    pub async fn submit(&self, message: &str) -> Result<Vec<DisplayRow>> {
        debug!("submitting message to inference service at {}", self.infer_url);
        let response = self
            .client
            .post(self.infer_url.clone())
            .json(&InferRequest { message })
            .send()
            .await
            .map_err(|e| Error::InferenceUnreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::InferenceUnreachable(format!(
                "inference service returned {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::InferenceUnreachable(e.to_string()))?;
        debug!("raw inference response: {}", body);

        let canonical = signal::normalize(&body, &self.coins)?;
        info!(
            "normalized {} signal for {} (token id: {})",
            canonical.signal,
            canonical.token_symbol,
            canonical.token_id.as_deref().unwrap_or("unresolved")
        );

        let response = self
            .client
            .post(self.process_url.clone())
            .json(&ProcessRequest {
                signal_data: &canonical,
            })
            .send()
            .await
            .map_err(|e| Error::ProcessingFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ProcessingFailed(format!(
                "processing service returned {}",
                status
            )));
        }

        let processed: ProcessResponse = response
            .json()
            .await
            .map_err(|e| Error::ProcessingFailed(e.to_string()))?;

        Ok(vec![processed.data])
    }
}

fn parse_endpoint(role: &str, raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| Error::ConfigError(format!("invalid {} url `{}`: {}", role, raw, e)))
}
