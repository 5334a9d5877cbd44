//! Server-held expense records as returned by create and list calls.

// self
use crate::{_prelude::*, expense::summary};

/// Opaque, server-assigned expense identifier.
///
/// The service may emit integers or strings; the original JSON shape is preserved so a record
/// re-serializes exactly as it was received.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpenseId {
	/// Integer identifier (the common case for SQL-backed deployments).
	Number(i64),
	/// String identifier.
	Text(String),
}
impl Debug for ExpenseId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Expense({self})")
	}
}
impl Display for ExpenseId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Number(value) => write!(f, "{value}"),
			Self::Text(value) => f.write_str(value),
		}
	}
}
impl From<i64> for ExpenseId {
	fn from(value: i64) -> Self {
		Self::Number(value)
	}
}
impl From<String> for ExpenseId {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}
impl From<&str> for ExpenseId {
	fn from(value: &str) -> Self {
		Self::Text(value.to_owned())
	}
}

/// Immutable expense record held by the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
	/// Server-assigned identifier.
	pub id: ExpenseId,
	/// Amount in minor units (cents).
	pub amount_cents: i64,
	/// Free-form category label.
	pub category: String,
	/// Free-form description.
	pub description: String,
	/// Calendar date of the expense (`YYYY-MM-DD` on the wire).
	#[serde(with = "crate::expense::iso_date")]
	pub date: Date,
	/// Creation timestamp as rendered by the server, when included.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created_at: Option<String>,
}
impl Expense {
	/// Amount rendered in major units with two decimals (`1250` → `"12.50"`).
	pub fn amount_display(&self) -> String {
		summary::format_cents(self.amount_cents)
	}
}
