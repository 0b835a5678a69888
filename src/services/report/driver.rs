//! Sequential report over the network registry.

use std::io::{self, Write};

use crate::{
	models::{FetchOutcome, MonitoredNetwork},
	services::{
		blockchain::{BlockChainClient, EvmClientTrait},
		monitor::fetch_recent_events,
	},
};

/// Counts of how the networks of one run ended up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
	/// Networks checked
	pub checked: usize,
	/// Networks with at least one recent event
	pub with_events: usize,
	/// Networks without recent events, failures included
	pub without_events: usize,
	/// Networks whose provider could not be queried
	pub failed: usize,
}

/// Writes the recent-sends report of every network, one network at a time
pub struct ReportDriver<'a, C> {
	networks: &'a [MonitoredNetwork<C>],
	lookback_minutes: u64,
}

impl<'a, C> ReportDriver<'a, C>
where
	C: BlockChainClient + EvmClientTrait + Sync,
{
	/// Creates a driver for the given registry and lookback duration
	pub fn new(networks: &'a [MonitoredNetwork<C>], lookback_minutes: u64) -> Self {
		Self {
			networks,
			lookback_minutes,
		}
	}

	/// Runs the report, writing it to `out`
	///
	/// Networks are checked in registry order and the fetch for a network only
	/// starts once the previous one has been written out. A network that fails
	/// is reported like one without events.
	///
	/// A reader that goes away (a broken pipe, as with `| head`) ends the
	/// report early; the networks handled so far are summarized.
	///
	/// # Errors
	/// Only write errors on `out` are returned.
	pub async fn run<W: Write>(&self, out: &mut W) -> io::Result<RunSummary> {
		let mut summary = RunSummary::default();

		for network in self.networks {
			match self.report_network(network, out, &mut summary).await {
				Ok(()) => {}
				Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
					tracing::debug!("Report output closed at {}, stopping", network.name);
					break;
				}
				Err(e) => return Err(e),
			}
		}

		Ok(summary)
	}

	async fn report_network<W: Write>(
		&self,
		network: &MonitoredNetwork<C>,
		out: &mut W,
		summary: &mut RunSummary,
	) -> io::Result<()> {
		writeln!(out, "Checking {}...", network.name)?;
		out.flush()?;

		let outcome = fetch_recent_events(
			&network.client,
			&network.name,
			network.contract_address,
			network.block_time_seconds,
			self.lookback_minutes,
		)
		.await;

		summary.checked += 1;
		if outcome.is_failure() {
			summary.failed += 1;
		}

		match outcome {
			FetchOutcome::Events(records) => {
				summary.with_events += 1;
				for record in &records {
					if let Some(event) = &record.event {
						tracing::debug!(
							"{}: {} sent {} to endpoint {} (guid {})",
							network.name,
							event.from_address,
							event.amount_sent_ld,
							event.dst_eid,
							event.guid
						);
					}
					writeln!(out, "- Transaction Hash: {}", record)?;
				}
			}
			FetchOutcome::NoEvents | FetchOutcome::Failed(_) => {
				summary.without_events += 1;
				writeln!(
					out,
					"No cross chain sends from {} in this time frame.",
					network.name
				)?;
			}
		}
		out.flush()
	}
}
