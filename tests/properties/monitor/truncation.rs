use crate::properties::strategies::logs_strategy;
use alloy::primitives::{Address, B256};
use async_trait::async_trait;
use oft_send_monitor::{
	models::{EVMReceiptLog, FetchOutcome},
	services::{
		blockchain::{BlockChainClient, BlockChainError, EvmClientTrait},
		monitor::{fetch_recent_events, most_recent},
	},
	utils::constants::MAX_REPORTED_EVENTS,
};
use proptest::{prelude::*, test_runner::Config};

/// Client answering every query with the same logs
struct StaticClient {
	head: u64,
	logs: Vec<EVMReceiptLog>,
}

#[async_trait]
impl BlockChainClient for StaticClient {
	async fn get_latest_block_number(&self) -> Result<u64, BlockChainError> {
		Ok(self.head)
	}
}

#[async_trait]
impl EvmClientTrait for StaticClient {
	async fn get_logs_for_event(
		&self,
		_contract_address: Address,
		_topic0: B256,
		_from_block: i128,
		_to_block: u64,
	) -> Result<Vec<EVMReceiptLog>, BlockChainError> {
		Ok(self.logs.clone())
	}
}

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_most_recent_is_a_suffix(
		items in prop::collection::vec(any::<u32>(), 0..50),
		limit in 0usize..10,
	) {
		let kept = most_recent(items.clone(), limit);

		prop_assert_eq!(kept.len(), items.len().min(limit));
		prop_assert_eq!(&kept[..], &items[items.len() - kept.len()..]);
	}

	#[test]
	fn test_fetch_reports_newest_events(logs in logs_strategy()) {
		let runtime = tokio::runtime::Runtime::new().unwrap();
		let client = StaticClient { head: 1_000_000, logs: logs.clone() };

		let outcome = runtime.block_on(fetch_recent_events(
			&client,
			"Test Network",
			Address::repeat_byte(0x04),
			2.0,
			60,
		));

		if logs.is_empty() {
			prop_assert_eq!(outcome, FetchOutcome::NoEvents);
		} else {
			let reported: Vec<Option<B256>> = outcome
				.records()
				.iter()
				.map(|record| record.transaction_hash)
				.collect();
			let expected: Vec<Option<B256>> = logs
				.iter()
				.skip(logs.len().saturating_sub(MAX_REPORTED_EVENTS))
				.map(|log| log.transaction_hash)
				.collect();

			prop_assert!(reported.len() <= MAX_REPORTED_EVENTS);
			prop_assert_eq!(reported, expected);
		}
	}
}
