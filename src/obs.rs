//! Optional observability helpers for expense requests.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `expense_client.request` with the
//!   `operation` and `stage` (call site) fields.
//! - Enable `metrics` to increment the `expense_client_request_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`, and the
//!   `expense_client_response_total` counter for every response received, labeled by
//!   `operation` + `status_class`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Operations issued by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// `POST <base>/expenses`.
	CreateExpense,
	/// `GET <base>/list`.
	ListExpenses,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::CreateExpense => "create_expense",
			Operation::ListExpenses => "list_expenses",
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Coarse HTTP status bucket used to label responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusClass {
	/// `1xx`.
	Informational,
	/// `2xx`, the only class the client treats as success.
	Success,
	/// `3xx` left unresolved by the transport.
	Redirection,
	/// `4xx`, including validation and duplicate-submission rejections.
	ClientError,
	/// `5xx`.
	ServerError,
	/// Anything outside `100..600`.
	Unknown,
}
impl StatusClass {
	/// Buckets a raw status code.
	pub const fn from_status(status: u16) -> Self {
		match status {
			100..=199 => Self::Informational,
			200..=299 => Self::Success,
			300..=399 => Self::Redirection,
			400..=499 => Self::ClientError,
			500..=599 => Self::ServerError,
			_ => Self::Unknown,
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			StatusClass::Informational => "1xx",
			StatusClass::Success => "2xx",
			StatusClass::Redirection => "3xx",
			StatusClass::ClientError => "4xx",
			StatusClass::ServerError => "5xx",
			StatusClass::Unknown => "unknown",
		}
	}
}
impl Display for StatusClass {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
