//! Caller-supplied payload for a create request.

// self
use crate::_prelude::*;

/// Expense submitted by the caller; the server assigns the id and converts the amount to cents.
///
/// No validation happens here. Required-field and range checks belong to whatever collects the
/// input before calling [`ExpenseClient::create_expense`](crate::ExpenseClient::create_expense).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
	/// Amount in major units (e.g. `12.5` for twelve fifty).
	pub amount: f64,
	/// Free-form category label.
	pub category: String,
	/// Free-form description.
	pub description: String,
	/// Calendar date of the expense.
	#[serde(with = "crate::expense::iso_date")]
	pub date: Date,
}
impl NewExpense {
	/// Creates a payload from its parts.
	pub fn new(
		amount: f64,
		category: impl Into<String>,
		description: impl Into<String>,
		date: Date,
	) -> Self {
		Self { amount, category: category.into(), description: description.into(), date }
	}

	/// Minor-unit amount the service will store (`amount * 100`, truncated toward zero).
	pub fn amount_cents(&self) -> i64 {
		(self.amount * 100.0) as i64
	}
}
