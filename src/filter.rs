//! List filters and their query-string encoding.

// self
use crate::_prelude::*;

/// Server-side ordering requested by a list call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
	/// Newest expense date first.
	#[serde(rename = "date_desc")]
	DateDesc,
}
impl SortOrder {
	/// Returns the wire value sent as the `sort` query parameter.
	pub const fn as_str(self) -> &'static str {
		match self {
			SortOrder::DateDesc => "date_desc",
		}
	}
}
impl Display for SortOrder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for SortOrder {
	type Err = UnknownSortOrder;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"date_desc" => Ok(SortOrder::DateDesc),
			other => Err(UnknownSortOrder(other.to_owned())),
		}
	}
}

/// Error returned when parsing an unsupported sort value.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Sort order `{0}` is not supported.")]
pub struct UnknownSortOrder(pub String);

/// Optional filters applied to a list call.
///
/// `None` fields are omitted from the query string entirely. `Some("")` is still sent, as
/// `category=`, because an empty label is a different request than no label at all.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ListFilter {
	/// Exact-match category.
	pub category: Option<String>,
	/// Requested ordering; `None` keeps the server default.
	pub sort: Option<SortOrder>,
}
impl ListFilter {
	/// Filter with every field unset.
	pub fn new() -> Self {
		Self::default()
	}

	/// Restricts the listing to one category.
	pub fn with_category(mut self, category: impl Into<String>) -> Self {
		self.category = Some(category.into());

		self
	}

	/// Requests a specific ordering.
	pub fn with_sort(mut self, sort: SortOrder) -> Self {
		self.sort = Some(sort);

		self
	}

	/// Shorthand for [`SortOrder::DateDesc`].
	pub fn newest_first(self) -> Self {
		self.with_sort(SortOrder::DateDesc)
	}

	/// Returns `true` when no field is set.
	pub fn is_empty(&self) -> bool {
		self.category.is_none() && self.sort.is_none()
	}

	/// Query parameters for the set fields, in `category`, `sort` order.
	pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
		let mut pairs = Vec::with_capacity(2);

		if let Some(category) = &self.category {
			pairs.push(("category", category.as_str()));
		}
		if let Some(sort) = self.sort {
			pairs.push(("sort", sort.as_str()));
		}

		pairs
	}

	/// Appends the set fields to `url`, leaving it without a query string when none are set.
	pub fn apply_to(&self, url: &mut Url) {
		let pairs = self.query_pairs();

		if pairs.is_empty() {
			return;
		}

		url.query_pairs_mut().extend_pairs(pairs);
	}
}
