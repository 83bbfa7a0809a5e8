//! # SignalSim Rust
//! Main library file for SignalSim.
//! Ingestion pipeline for Telegram crypto-trading signals: a pasted message
//! is sent to a local inference service, the nested JSON result is validated
//! into a canonical signal with a resolved token id, and the canonical
//! signal is forwarded to a processing service whose answer becomes the
//! current result set.

pub use crate::utils::error::{Error, Result};

pub mod config;
pub mod lookup;
pub mod pipeline;
pub mod platform;
pub mod shell;
pub mod signal;
pub mod utils;
