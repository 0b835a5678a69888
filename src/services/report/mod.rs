//! Console report of recent cross-chain sends.
//!
//! Checks every network of the registry in order and writes the result of
//! each check before the next network is queried.

mod driver;

pub use driver::{ReportDriver, RunSummary};
