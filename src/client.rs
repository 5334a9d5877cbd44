//! Request client that turns create/list calls into HTTP requests.
//!
//! [`ExpenseClient`] holds an immutable [`ClientConfig`] and a shared transport. Every call
//! builds its own request, performs exactly one HTTP attempt, and folds every failure into
//! [`Error::RequestFailed`]. Nothing is cached or retried between calls, so clones of one
//! client may be used concurrently without coordination.

mod create;
mod list;

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	config::ClientConfig,
	http::{ExpenseHttpClient, HttpResponse},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestExpenseClient = ExpenseClient<ReqwestHttpClient>;

/// Client for the expense service's create and list endpoints.
pub struct ExpenseClient<C>
where
	C: ?Sized + ExpenseHttpClient,
{
	/// Transport used for every outbound request.
	pub http_client: Arc<C>,
	config: ClientConfig,
}
impl<C> ExpenseClient<C>
where
	C: ?Sized + ExpenseHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(config: ClientConfig, http_client: impl Into<Arc<C>>) -> Self {
		Self { http_client: http_client.into(), config }
	}

	/// Configuration the client was built with.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}
}
#[cfg(feature = "reqwest")]
impl ExpenseClient<ReqwestHttpClient> {
	/// Creates a client backed by a default reqwest transport.
	pub fn new(config: ClientConfig) -> Self {
		Self::with_http_client(config, ReqwestHttpClient::default())
	}

	/// Creates a client backed by a caller-configured [`ReqwestClient`] (timeouts, proxies).
	pub fn with_reqwest(config: ClientConfig, client: ReqwestClient) -> Self {
		Self::with_http_client(config, ReqwestHttpClient::with_client(client))
	}

	/// Bootstrap helper: resolves [`ClientConfig::from_env`] once and builds a default client.
	pub fn from_env() -> Result<Self> {
		let config = ClientConfig::from_env()?;
		let client = ReqwestClient::builder().build().map_err(ConfigError::from)?;

		Ok(Self::with_reqwest(config, client))
	}
}
impl<C> Clone for ExpenseClient<C>
where
	C: ?Sized + ExpenseHttpClient,
{
	fn clone(&self) -> Self {
		Self { http_client: Arc::clone(&self.http_client), config: self.config.clone() }
	}
}
impl<C> Debug for ExpenseClient<C>
where
	C: ?Sized + ExpenseHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ExpenseClient").field("base_url", &self.config.base_url().as_str()).finish()
	}
}

/// Parses a 2xx body, keeping the JSON path of the first mismatch as the error source.
fn parse_body<T>(response: &HttpResponse, message: &str) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut deserializer = serde_json::Deserializer::from_slice(&response.body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|e| Error::malformed(message, response.status, e))
}
