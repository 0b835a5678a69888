//! Core domain models for the cross-chain send monitor.
//!
//! This module contains the fundamental data structures that represent:
//! - Networks: monitored network definitions and their provider handles
//! - Outcomes: the result of checking one network for recent events

mod network;
mod outcome;

pub use network::{MonitoredNetwork, Network};
pub use outcome::{FetchFailure, FetchOutcome};
