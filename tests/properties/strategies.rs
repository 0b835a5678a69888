use alloy::primitives::{Address, B256};
use oft_send_monitor::{
	models::{EVMReceiptLog, Network},
	utils::tests::{evm::log::LogBuilder, network::NetworkBuilder},
};
use proptest::prelude::*;

const MAX_LOGS: usize = 40;

/// Block times of the built-in networks, plus sub-second ones
pub fn block_time_strategy() -> impl Strategy<Value = f64> {
	prop_oneof![
		prop::sample::select(vec![1.0, 2.0, 3.0, 12.0]),
		(1u32..=120_000u32).prop_map(|millis| f64::from(millis) / 1000.0),
	]
}

/// Valid network entries with a plain https RPC URL
pub fn network_strategy() -> impl Strategy<Value = Network> {
	(
		"[A-Za-z][A-Za-z0-9 ]{0,15}",
		"[a-z][a-z0-9-]{0,20}",
		"[A-Za-z0-9]{0,32}",
		any::<[u8; 20]>(),
		block_time_strategy(),
	)
		.prop_map(|(name, host, key, address, block_time)| {
			NetworkBuilder::new()
				.name(name.trim())
				.rpc_url(&format!("https://{}.example.com/v2/{}", host, key))
				.contract_address(Address::from(address))
				.block_time_seconds(block_time)
				.build()
		})
}

/// Logs with distinct transaction hashes, in block order
pub fn logs_strategy() -> impl Strategy<Value = Vec<EVMReceiptLog>> {
	prop::collection::vec(any::<[u8; 32]>(), 0..MAX_LOGS).prop_map(|hashes| {
		hashes
			.into_iter()
			.enumerate()
			.map(|(index, hash)| {
				LogBuilder::new()
					.transaction_hash(B256::from(hash))
					.block_number(index as u64 + 1)
					.build()
			})
			.collect()
	})
}
