// self
use crate::obs::{CallKind, CallOutcome};

/// Bumps `uptime_kuma_client_call_total{call, outcome}`; compiled out without `metrics`.
pub fn record_call_outcome(kind: CallKind, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"uptime_kuma_client_call_total",
			"call" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}
