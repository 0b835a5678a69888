//! Recent event lookup.
//!
//! Turns a lookback duration into a block range for one network and fetches
//! the most recent cross-chain send events emitted in that range.

mod fetcher;
mod window;

pub use fetcher::{fetch_recent_events, most_recent};
pub use window::BlockWindow;
