//! Transport primitives for expense requests.
//!
//! [`ExpenseHttpClient`] is the crate's only dependency on an HTTP stack. The client builds a
//! transport-neutral [`HttpRequest`], hands it to the transport, and interprets the returned
//! [`HttpResponse`]; status handling and body parsing never happen inside a transport.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::header::{CONTENT_TYPE, HeaderValue};
// self
use crate::_prelude::*;

/// Boxed future returned by [`ExpenseHttpClient::execute`].
pub type TransportFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + 'a + Send>>;

/// HTTP method used by the expense endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
	/// `GET`
	Get,
	/// `POST`
	Post,
}
impl HttpMethod {
	/// Returns the canonical method token.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// An outbound request described as plain data.
///
/// A present `body` is always JSON; transports must send it with
/// `content-type: application/json`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
	/// Request method.
	pub method: HttpMethod,
	/// Fully-resolved URL, query string included.
	pub url: Url,
	/// Serialized JSON body, if any.
	pub body: Option<Vec<u8>>,
}
impl HttpRequest {
	/// Creates a body-less `GET`.
	pub fn get(url: Url) -> Self {
		Self { method: HttpMethod::Get, url, body: None }
	}

	/// Creates a `POST` carrying `body` as JSON.
	pub fn post_json(url: Url, body: Vec<u8>) -> Self {
		Self { method: HttpMethod::Post, url, body: Some(body) }
	}

	/// Parses the body as JSON, mainly for assertions in custom transports.
	pub fn json_body(&self) -> Option<serde_json::Result<serde_json::Value>> {
		self.body.as_deref().map(serde_json::from_slice)
	}
}

/// A received response described as plain data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl HttpResponse {
	/// Creates a response from a status and body.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self { status, body: body.into() }
	}

	/// Returns `true` for any 2xx status.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Abstraction over HTTP transports able to execute expense requests.
///
/// Implementations must be `Send + Sync + 'static` so one transport can back many cloned
/// clients, and the returned future must be `Send` so calls can hop executors. A transport
/// performs exactly one attempt per call; it must not retry.
pub trait ExpenseHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves with whatever response the server produced, regardless of
	/// status. Only failures to obtain a response are reported as errors.
	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, HttpResponse, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`], e.g. one configured with a timeout.
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ExpenseHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> TransportFuture<'_, HttpResponse, ReqwestError> {
		Box::pin(async move {
			let method = match request.method {
				HttpMethod::Get => reqwest::Method::GET,
				HttpMethod::Post => reqwest::Method::POST,
			};
			let mut builder = self.0.request(method, request.url);

			if let Some(body) = request.body {
				builder = builder
					.header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
					.body(body);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let body = response.bytes().await?.to_vec();

			Ok(HttpResponse { status, body })
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn url(value: &str) -> Url {
		Url::parse(value).expect("Test URL should parse.")
	}

	#[test]
	fn success_covers_the_whole_2xx_range() {
		assert!(HttpResponse::new(200, "").is_success());
		assert!(HttpResponse::new(201, "").is_success());
		assert!(HttpResponse::new(299, "").is_success());
		assert!(!HttpResponse::new(199, "").is_success());
		assert!(!HttpResponse::new(304, "").is_success());
		assert!(!HttpResponse::new(500, "").is_success());
	}

	#[test]
	fn request_constructors_set_method_and_body() {
		let get = HttpRequest::get(url("http://localhost:8000/list"));

		assert_eq!(get.method, HttpMethod::Get);
		assert!(get.json_body().is_none());

		let post = HttpRequest::post_json(url("http://localhost:8000/expenses"), b"{\"a\":1}".to_vec());

		assert_eq!(post.method.to_string(), "POST");

		let body = post
			.json_body()
			.expect("POST should carry a body.")
			.expect("Body should be valid JSON.");

		assert_eq!(body["a"], 1);
	}
}
