// self
use crate::obs::{Operation, RequestOutcome, StatusClass};

/// Records a request outcome via the global metrics recorder (when enabled).
pub fn record_request_outcome(operation: Operation, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"expense_client_request_total",
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}

/// Records the status class of a received response via the global metrics recorder (when
/// enabled).
pub fn record_response_status(operation: Operation, status: u16) {
	let class = StatusClass::from_status(status);

	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"expense_client_response_total",
			"operation" => operation.as_str(),
			"status_class" => class.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, class);
	}
}
