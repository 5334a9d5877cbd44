// self
use crate::{_prelude::*, obs::Operation};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedRequest<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRequest<F> = F;

/// A span builder used by client operations.
#[derive(Clone, Debug)]
pub struct RequestSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RequestSpan {
	/// Creates a new span tagged with the provided operation + stage.
	pub fn new(operation: Operation, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::info_span!("expense_client.request", operation = operation.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (operation, stage);

			Self {}
		}
	}

	/// Records a non-2xx status on the span, if tracing is enabled.
	pub fn record_status(&self, status: u16) {
		#[cfg(feature = "tracing")]
		{
			tracing::warn!(
				parent: &self.span,
				status,
				status_class = crate::obs::StatusClass::from_status(status).as_str(),
				"expense service rejected the request"
			);
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = status;
		}
	}

	/// Records a transport or parse failure on the span, if tracing is enabled.
	pub fn record_failure(&self, error: &dyn StdError) {
		#[cfg(feature = "tracing")]
		{
			tracing::warn!(parent: &self.span, error = %error, "expense request failed");
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = error;
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRequest<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn instrument_passes_the_output_through() {
		let span = RequestSpan::new(Operation::ListExpenses, "instrument_passes_the_output_through");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}

	#[test]
	fn recording_is_safe_without_a_subscriber() {
		let span = RequestSpan::new(Operation::CreateExpense, "recording");
		let err = std::io::Error::other("boom");

		span.record_status(500);
		span.record_failure(&err);
	}
}
