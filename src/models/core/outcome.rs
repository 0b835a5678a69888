use crate::models::EventRecord;

/// Why checking a network produced no events
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
	/// Formatted error chain
	pub reason: String,
	/// Trace ID of the underlying error, as found in the log line
	pub trace_id: String,
}

/// Result of checking one network for recent events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
	/// The most recent matching events, oldest first, never empty and never
	/// more than five
	Events(Vec<EventRecord>),
	/// The provider returned no matching events for the window
	NoEvents,
	/// The provider could not be queried; the failure has already been logged
	Failed(FetchFailure),
}

impl FetchOutcome {
	/// Collapses the outcome into "some records or nothing".
	///
	/// `NoEvents` and `Failed` both become `None`.
	pub fn into_records(self) -> Option<Vec<EventRecord>> {
		match self {
			Self::Events(records) => Some(records),
			Self::NoEvents | Self::Failed(_) => None,
		}
	}

	/// Returns the reported records, empty unless events were found
	pub fn records(&self) -> &[EventRecord] {
		match self {
			Self::Events(records) => records,
			Self::NoEvents | Self::Failed(_) => &[],
		}
	}

	/// Whether the provider could not be queried
	pub fn is_failure(&self) -> bool {
		matches!(self, Self::Failed(_))
	}
}
