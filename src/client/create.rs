//! `POST <base>/expenses` with a fresh idempotency key per call.
//!
//! The key travels in the JSON body next to the caller's fields. The client never reuses it:
//! a caller that retries after a failure calls [`ExpenseClient::create_expense`] again and gets
//! a new key, while the service may use the key to collapse duplicates of a single submission.

// self
use crate::{
	_prelude::*,
	client::{self, ExpenseClient},
	expense::{Expense, NewExpense},
	http::{ExpenseHttpClient, HttpRequest},
	idempotency::IdempotencyKey,
	obs::{self, Operation, RequestOutcome, RequestSpan},
};

const CREATE_FAILED: &str = "Failed to create expense";

#[derive(Serialize)]
struct CreateExpenseBody<'a> {
	#[serde(flatten)]
	expense: &'a NewExpense,
	idempotency_key: &'a IdempotencyKey,
}

impl<C> ExpenseClient<C>
where
	C: ?Sized + ExpenseHttpClient,
{
	/// Creates an expense and returns the record stored by the service.
	///
	/// Non-2xx responses surface the service's `detail` message when it sends one; transport
	/// failures and unreadable bodies surface a generic message.
	pub async fn create_expense(&self, input: &NewExpense) -> Result<Expense> {
		const OPERATION: Operation = Operation::CreateExpense;

		let span = RequestSpan::new(OPERATION, "create_expense");

		obs::record_request_outcome(OPERATION, RequestOutcome::Attempt);

		let result = span
			.instrument(async {
				let key = IdempotencyKey::generate();
				let request = self.build_create_request(input, &key)?;
				let response = self.http_client.execute(request).await.map_err(|e| {
					span.record_failure(&e);

					Error::transport(CREATE_FAILED, e)
				})?;

				obs::record_response_status(OPERATION, response.status);

				if !response.is_success() {
					span.record_status(response.status);

					let message =
						server_detail(&response.body).unwrap_or_else(|| CREATE_FAILED.to_owned());

					return Err(Error::rejected(response.status, message));
				}

				client::parse_body::<Expense>(&response, CREATE_FAILED)
			})
			.await;

		match &result {
			Ok(_) => obs::record_request_outcome(OPERATION, RequestOutcome::Success),
			Err(_) => obs::record_request_outcome(OPERATION, RequestOutcome::Failure),
		}

		result
	}

	/// Builds the `POST` for `input` carrying `key`, without sending it.
	pub fn build_create_request(
		&self,
		input: &NewExpense,
		key: &IdempotencyKey,
	) -> Result<HttpRequest> {
		let body = serde_json::to_vec(&CreateExpenseBody { expense: input, idempotency_key: key })
			.map_err(|e| Error::encoding(CREATE_FAILED, e))?;

		Ok(HttpRequest::post_json(self.config().endpoint("expenses"), body))
	}
}

/// Extracts the service's `detail` message from an error body.
///
/// A string detail is used as-is. A list of validation issues is flattened by joining each
/// issue's `msg`. Anything else, including an empty string, yields `None`.
fn server_detail(body: &[u8]) -> Option<String> {
	let payload = serde_json::from_slice::<serde_json::Value>(body).ok()?;

	match payload.get("detail")? {
		serde_json::Value::String(message) if !message.trim().is_empty() => Some(message.clone()),
		serde_json::Value::Array(issues) => {
			let messages = issues
				.iter()
				.filter_map(|issue| issue.get("msg").and_then(serde_json::Value::as_str))
				.collect::<Vec<_>>();

			if messages.is_empty() { None } else { Some(messages.join("; ")) }
		},
		_ => None,
	}
}
