//! Retrieval of the most recent cross-chain send events of one network.
//!
//! Every failure is contained here: it is logged once, with its trace id, and
//! turned into [`FetchOutcome::Failed`] so the caller can move on to the next
//! network.

use alloy::{primitives::Address, sol_types::SolEvent};

use crate::{
	models::{EVMReceiptLog, EventRecord, FetchFailure, FetchOutcome, OFTSent},
	services::{
		blockchain::{BlockChainClient, BlockChainError, EvmClientTrait},
		monitor::BlockWindow,
	},
	utils::{
		constants::MAX_REPORTED_EVENTS,
		logging::error::{format_error_chain, TraceableError},
	},
};

/// Keeps the last `limit` items, in their original order
pub fn most_recent<T>(items: Vec<T>, limit: usize) -> Vec<T> {
	let skip = items.len().saturating_sub(limit);
	items.into_iter().skip(skip).collect()
}

/// Fetches the most recent cross-chain send events emitted by `contract_address`
/// during the last `lookback_minutes`.
///
/// Two requests are made, one after the other: the chain head, then the logs
/// from the estimated start block up to that head. At most
/// [`MAX_REPORTED_EVENTS`] records are returned, the newest ones, in provider
/// order.
///
/// # Arguments
/// * `client` - Provider client of the network
/// * `network_name` - Name used in log lines
/// * `contract_address` - Contract emitting the events
/// * `block_time_seconds` - Average block time of the network
/// * `lookback_minutes` - Duration to look back from the chain head
pub async fn fetch_recent_events<C>(
	client: &C,
	network_name: &str,
	contract_address: Address,
	block_time_seconds: f64,
	lookback_minutes: u64,
) -> FetchOutcome
where
	C: BlockChainClient + EvmClientTrait + Sync,
{
	match query_logs(
		client,
		network_name,
		contract_address,
		block_time_seconds,
		lookback_minutes,
	)
	.await
	{
		Ok(logs) if logs.is_empty() => FetchOutcome::NoEvents,
		Ok(logs) => FetchOutcome::Events(
			most_recent(logs, MAX_REPORTED_EVENTS)
				.into_iter()
				.map(EventRecord::from)
				.collect(),
		),
		Err(e) => {
			let reason = format_error_chain(&e);
			let trace_id = e.trace_id();
			tracing::error!(
				trace_id = %trace_id,
				"Error fetching logs for {}: {}",
				network_name,
				reason
			);
			FetchOutcome::Failed(FetchFailure { reason, trace_id })
		}
	}
}

async fn query_logs<C>(
	client: &C,
	network_name: &str,
	contract_address: Address,
	block_time_seconds: f64,
	lookback_minutes: u64,
) -> Result<Vec<EVMReceiptLog>, BlockChainError>
where
	C: BlockChainClient + EvmClientTrait + Sync,
{
	let current_height = client.get_latest_block_number().await?;
	let window = BlockWindow::compute(current_height, lookback_minutes, block_time_seconds);

	tracing::debug!(
		before_genesis = window.starts_before_genesis(),
		"{}: querying blocks {} to {} ({:.2} blocks in {} minutes)",
		network_name,
		window.from_block,
		window.to_block,
		window.blocks_in_window,
		lookback_minutes
	);

	client
		.get_logs_for_event(
			contract_address,
			OFTSent::SIGNATURE_HASH,
			window.from_block,
			window.to_block,
		)
		.await
}
