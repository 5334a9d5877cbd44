//! `GET <base>/list` with optional category and sort parameters.

// self
use crate::{
	_prelude::*,
	client::{self, ExpenseClient},
	expense::Expense,
	filter::ListFilter,
	http::{ExpenseHttpClient, HttpRequest},
	obs::{self, Operation, RequestOutcome, RequestSpan},
};

const LIST_FAILED: &str = "Failed to fetch expenses";

impl<C> ExpenseClient<C>
where
	C: ?Sized + ExpenseHttpClient,
{
	/// Lists expenses matching `filter`, in the order the service returns them.
	///
	/// Every failure surfaces the same generic message; the service's error body is not read
	/// on this path, unlike [`ExpenseClient::create_expense`].
	pub async fn list_expenses(&self, filter: &ListFilter) -> Result<Vec<Expense>> {
		const OPERATION: Operation = Operation::ListExpenses;

		let span = RequestSpan::new(OPERATION, "list_expenses");

		obs::record_request_outcome(OPERATION, RequestOutcome::Attempt);

		let result = span
			.instrument(async {
				let request = self.build_list_request(filter);
				let response = self.http_client.execute(request).await.map_err(|e| {
					span.record_failure(&e);

					Error::transport(LIST_FAILED, e)
				})?;

				obs::record_response_status(OPERATION, response.status);

				if !response.is_success() {
					span.record_status(response.status);

					return Err(Error::rejected(response.status, LIST_FAILED));
				}

				client::parse_body::<Vec<Expense>>(&response, LIST_FAILED)
			})
			.await;

		match &result {
			Ok(_) => obs::record_request_outcome(OPERATION, RequestOutcome::Success),
			Err(_) => obs::record_request_outcome(OPERATION, RequestOutcome::Failure),
		}

		result
	}

	/// Builds the `GET` for `filter`, without sending it.
	pub fn build_list_request(&self, filter: &ListFilter) -> HttpRequest {
		let mut url = self.config().endpoint("list");

		filter.apply_to(&mut url);

		HttpRequest::get(url)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		config::ClientConfig,
		filter::SortOrder,
		http::{HttpMethod, HttpResponse, TransportFuture},
	};

	#[derive(Debug)]
	struct Never;
	impl Display for Never {
		fn fmt(&self, f: &mut Formatter) -> FmtResult {
			f.write_str("never")
		}
	}
	impl StdError for Never {}

	struct StaticHttpClient(HttpResponse);
	impl ExpenseHttpClient for StaticHttpClient {
		type TransportError = Never;

		fn execute(&self, _request: HttpRequest) -> TransportFuture<'_, HttpResponse, Never> {
			let response = self.0.clone();

			Box::pin(async move { Ok(response) })
		}
	}

	fn client(response: HttpResponse) -> ExpenseClient<StaticHttpClient> {
		let config = ClientConfig::parse("https://expenses.example.com/api")
			.expect("Test base address should parse.");

		ExpenseClient::with_http_client(config, StaticHttpClient(response))
	}

	#[test]
	fn request_encodes_only_set_fields() {
		let client = client(HttpResponse::new(200, "[]"));
		let bare = client.build_list_request(&ListFilter::new());

		assert_eq!(bare.method, HttpMethod::Get);
		assert_eq!(bare.url.as_str(), "https://expenses.example.com/api/list");
		assert!(bare.body.is_none());

		let full = client.build_list_request(&ListFilter {
			category: Some("food".into()),
			sort: Some(SortOrder::DateDesc),
		});

		assert_eq!(
			full.url.as_str(),
			"https://expenses.example.com/api/list?category=food&sort=date_desc"
		);
	}

	#[tokio::test]
	async fn rejected_list_never_reads_the_error_body() {
		let client = client(HttpResponse::new(400, r#"{"detail":"bad category"}"#));
		let err = client
			.list_expenses(&ListFilter::new().with_category("food"))
			.await
			.expect_err("A 400 must fail the listing.");

		assert_eq!(err.to_string(), LIST_FAILED);
		assert_eq!(err.status(), Some(400));
	}

	#[tokio::test]
	async fn empty_array_is_a_valid_listing() {
		let expenses = client(HttpResponse::new(200, "[]"))
			.list_expenses(&ListFilter::new())
			.await
			.expect("An empty array should parse.");

		assert!(expenses.is_empty());
	}

	#[tokio::test]
	async fn non_array_body_is_a_request_failure() {
		let err = client(HttpResponse::new(200, r#"{"items":[]}"#))
			.list_expenses(&ListFilter::new())
			.await
			.expect_err("An object body must not parse as a listing.");

		assert!(err.is_request_failed());
		assert_eq!(err.to_string(), LIST_FAILED);
	}
}
