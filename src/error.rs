//! Client-level error types shared by every request path.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem raised while building the client.
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// A create or list request did not produce a usable result.
	///
	/// Covers transport failures (DNS, connect, TLS), non-2xx statuses, and 2xx responses whose
	/// body could not be parsed. The message is safe to show to end users; transport details
	/// live only in [`source`](std::error::Error::source).
	#[error("{message}")]
	RequestFailed {
		/// Human-readable message, either server-provided or a generic fallback.
		message: String,
		/// HTTP status code, when a response was received.
		status: Option<u16>,
		/// Underlying transport or parse failure, if any.
		#[source]
		source: Option<BoxError>,
	},
}
impl Error {
	/// Builds a [`Error::RequestFailed`] for a non-2xx response.
	pub fn rejected(status: u16, message: impl Into<String>) -> Self {
		Self::RequestFailed { message: message.into(), status: Some(status), source: None }
	}

	/// Builds a [`Error::RequestFailed`] for a request that never produced a response.
	pub fn transport(
		message: impl Into<String>,
		src: impl 'static + Send + Sync + std::error::Error,
	) -> Self {
		Self::RequestFailed { message: message.into(), status: None, source: Some(Box::new(src)) }
	}

	/// Builds a [`Error::RequestFailed`] for a request body that could not be encoded.
	///
	/// Nothing was sent, so no status is attached.
	pub fn encoding(message: impl Into<String>, src: serde_json::Error) -> Self {
		Self::RequestFailed { message: message.into(), status: None, source: Some(Box::new(src)) }
	}

	/// Builds a [`Error::RequestFailed`] for a 2xx response whose body could not be parsed.
	pub fn malformed(
		message: impl Into<String>,
		status: u16,
		src: impl 'static + Send + Sync + std::error::Error,
	) -> Self {
		Self::RequestFailed {
			message: message.into(),
			status: Some(status),
			source: Some(Box::new(src)),
		}
	}

	/// Returns the HTTP status attached to a failed request, if one was received.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::RequestFailed { status, .. } => *status,
			Self::Config(_) => None,
		}
	}

	/// Returns `true` for [`Error::RequestFailed`].
	pub fn is_request_failed(&self) -> bool {
		matches!(self, Self::RequestFailed { .. })
	}
}

/// Configuration and construction failures raised before any request is issued.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base address or deployment origin cannot be parsed.
	#[error("Base address `{value}` is invalid.")]
	InvalidBaseUrl {
		/// Raw value supplied by the caller or the environment.
		value: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base address cannot carry path segments (e.g. `mailto:` or `data:` URLs).
	#[error("Base address `{value}` cannot carry endpoint paths.")]
	OpaqueBaseUrl {
		/// Offending base address.
		value: String,
	},
	/// Production mode was selected without a deployment origin to resolve `/api` against.
	#[error("Production mode requires `{var}` to name the deployment origin.")]
	MissingOrigin {
		/// Environment variable that should carry the origin.
		var: &'static str,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[derive(Debug)]
	struct Refused;
	impl Display for Refused {
		fn fmt(&self, f: &mut Formatter) -> FmtResult {
			f.write_str("connection refused (os error 111)")
		}
	}
	impl StdError for Refused {}

	#[test]
	fn transport_message_hides_source_details() {
		let err = Error::transport("Failed to create expense", Refused);

		assert_eq!(err.to_string(), "Failed to create expense");
		assert_eq!(err.status(), None);
		assert!(err.is_request_failed());

		let source = err.source().expect("Transport errors should keep their source.");

		assert_eq!(source.to_string(), "connection refused (os error 111)");
	}

	#[test]
	fn rejected_carries_status_without_source() {
		let err = Error::rejected(503, "Failed to fetch expenses");

		assert_eq!(err.status(), Some(503));
		assert!(err.source().is_none());
	}

	#[test]
	fn encoding_failure_keeps_the_serializer_error() {
		let src = serde_json::from_str::<serde_json::Value>("{")
			.expect_err("Truncated JSON must fail.");
		let err = Error::encoding("Failed to create expense", src);

		assert!(err.is_request_failed());
		assert_eq!(err.to_string(), "Failed to create expense");
		assert_eq!(err.status(), None);

		let source = err.source().expect("Encoding errors should keep their source.");

		assert!(source.is::<serde_json::Error>());
	}

	#[test]
	fn config_errors_are_not_request_failures() {
		let err = Error::from(ConfigError::MissingOrigin { var: "EXPENSE_CLIENT_ORIGIN" });

		assert!(!err.is_request_failed());
		assert_eq!(err.status(), None);
		assert_eq!(
			err.to_string(),
			"Production mode requires `EXPENSE_CLIENT_ORIGIN` to name the deployment origin."
		);
	}
}
