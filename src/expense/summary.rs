//! Pure helpers for rendering a listed page of expenses.

// std
use std::collections::HashSet;
// self
use crate::expense::Expense;

/// Sum of `amount_cents` across `expenses`, saturating at the `i64` bounds.
pub fn total_cents(expenses: &[Expense]) -> i64 {
	expenses.iter().fold(0_i64, |acc, expense| acc.saturating_add(expense.amount_cents))
}

/// Renders a minor-unit amount in major units with exactly two decimals.
pub fn format_cents(cents: i64) -> String {
	let sign = if cents < 0 { "-" } else { "" };
	let abs = cents.unsigned_abs();

	format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

/// Distinct categories in first-seen order.
pub fn unique_categories(expenses: &[Expense]) -> Vec<String> {
	let mut seen = HashSet::new();

	expenses
		.iter()
		.filter(|expense| seen.insert(expense.category.as_str()))
		.map(|expense| expense.category.clone())
		.collect()
}
