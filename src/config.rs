//! Base-address configuration resolved once at startup.
//!
//! The client never reads the process environment on its own. A bootstrap step calls
//! [`ClientConfig::from_env`] (or builds a [`ClientConfig`] directly) and hands the result to
//! [`ExpenseClient`](crate::ExpenseClient); the base address then stays fixed for the lifetime
//! of that client.

// self
use crate::_prelude::*;

/// Environment variable selecting the deployment mode (`production` or anything else).
pub const MODE_VAR: &str = "EXPENSE_CLIENT_ENV";
/// Environment variable carrying the deployment origin used in production mode.
pub const ORIGIN_VAR: &str = "EXPENSE_CLIENT_ORIGIN";
/// Base address used outside production.
pub const DEVELOPMENT_BASE: &str = "http://localhost:8000";
/// Same-origin path prefix used in production.
pub const PRODUCTION_PREFIX: &str = "/api";

/// Deployment mode that decides how the base address is derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Deployment {
	/// Same-origin deployment; requests go to `<origin>/api`.
	Production,
	/// Local development server at [`DEVELOPMENT_BASE`].
	#[default]
	Development,
}
impl Deployment {
	/// Maps a raw mode indicator to a deployment; only `production` selects production.
	pub fn from_indicator(raw: &str) -> Self {
		if raw.trim().eq_ignore_ascii_case("production") {
			Self::Production
		} else {
			Self::Development
		}
	}

	/// Reads [`MODE_VAR`] from the process environment.
	pub fn from_env() -> Self {
		std::env::var(MODE_VAR).map(|raw| Self::from_indicator(&raw)).unwrap_or_default()
	}

	/// Returns a stable label suitable for logs.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Production => "production",
			Self::Development => "development",
		}
	}
}
impl Display for Deployment {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Immutable client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
	base_url: Url,
}
impl ClientConfig {
	/// Creates a configuration that targets an explicit base address.
	///
	/// The base may carry a path prefix (`https://example.com/api`); endpoints are appended
	/// below it regardless of a trailing slash.
	pub fn new(base_url: Url) -> Result<Self, ConfigError> {
		if base_url.cannot_be_a_base() {
			return Err(ConfigError::OpaqueBaseUrl { value: base_url.into() });
		}

		Ok(Self { base_url })
	}

	/// Parses `raw` and delegates to [`ClientConfig::new`].
	pub fn parse(raw: &str) -> Result<Self, ConfigError> {
		let base_url = Url::parse(raw)
			.map_err(|source| ConfigError::InvalidBaseUrl { value: raw.into(), source })?;

		Self::new(base_url)
	}

	/// Configuration for the local development server.
	pub fn development() -> Result<Self, ConfigError> {
		Self::parse(DEVELOPMENT_BASE)
	}

	/// Configuration for a same-origin production deployment served from `origin`.
	pub fn production(origin: &Url) -> Result<Self, ConfigError> {
		let base_url = origin.join(PRODUCTION_PREFIX).map_err(|source| {
			ConfigError::InvalidBaseUrl { value: origin.as_str().into(), source }
		})?;

		Self::new(base_url)
	}

	/// Resolves the base address for `deployment`.
	///
	/// `origin` is required in production and ignored otherwise.
	pub fn resolve(deployment: Deployment, origin: Option<&Url>) -> Result<Self, ConfigError> {
		match deployment {
			Deployment::Production =>
				Self::production(origin.ok_or(ConfigError::MissingOrigin { var: ORIGIN_VAR })?),
			Deployment::Development => Self::development(),
		}
	}

	/// Bootstrap helper that reads [`MODE_VAR`] and, in production, [`ORIGIN_VAR`].
	pub fn from_env() -> Result<Self, ConfigError> {
		let mode = std::env::var(MODE_VAR).ok();
		let origin = std::env::var(ORIGIN_VAR).ok();

		Self::from_vars(mode.as_deref(), origin.as_deref())
	}

	/// Resolves raw [`MODE_VAR`] and [`ORIGIN_VAR`] values.
	///
	/// An unset mode selects development. The origin is parsed only in production and must be
	/// an absolute URL.
	pub fn from_vars(mode: Option<&str>, origin: Option<&str>) -> Result<Self, ConfigError> {
		let deployment = mode.map(Deployment::from_indicator).unwrap_or_default();
		let origin = match (deployment, origin) {
			(Deployment::Production, Some(raw)) => Some(
				Url::parse(raw.trim())
					.map_err(|source| ConfigError::InvalidBaseUrl { value: raw.into(), source })?,
			),
			_ => None,
		};

		Self::resolve(deployment, origin.as_ref())
	}

	/// Base address every endpoint is resolved against.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Resolves `segment` directly below the base address.
	pub fn endpoint(&self, segment: &str) -> Url {
		let mut url = self.base_url.clone();

		url.set_query(None);
		url.set_fragment(None);

		if let Ok(mut segments) = url.path_segments_mut() {
			segments.pop_if_empty().push(segment);
		}

		url
	}
}
impl FromStr for ClientConfig {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
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
	fn indicator_only_matches_production() {
		assert_eq!(Deployment::from_indicator("production"), Deployment::Production);
		assert_eq!(Deployment::from_indicator(" Production "), Deployment::Production);
		assert_eq!(Deployment::from_indicator("development"), Deployment::Development);
		assert_eq!(Deployment::from_indicator("test"), Deployment::Development);
		assert_eq!(Deployment::from_indicator(""), Deployment::Development);
	}

	#[test]
	fn development_targets_localhost() {
		let config = ClientConfig::resolve(Deployment::Development, None)
			.expect("Development config should always resolve.");

		assert_eq!(config.endpoint("expenses").as_str(), "http://localhost:8000/expenses");
		assert_eq!(config.endpoint("list").as_str(), "http://localhost:8000/list");
	}

	#[test]
	fn production_uses_api_prefix_on_origin() {
		let origin = url("https://expenses.example.com/some/page?tab=1");
		let config = ClientConfig::resolve(Deployment::Production, Some(&origin))
			.expect("Production config should resolve with an origin.");

		assert_eq!(config.base_url().as_str(), "https://expenses.example.com/api");
		assert_eq!(config.endpoint("expenses").as_str(), "https://expenses.example.com/api/expenses");
		assert_eq!(config.endpoint("list").as_str(), "https://expenses.example.com/api/list");
	}

	#[test]
	fn production_without_origin_is_rejected() {
		let err = ClientConfig::resolve(Deployment::Production, None)
			.expect_err("Production mode must require an origin.");

		assert!(matches!(err, ConfigError::MissingOrigin { var: ORIGIN_VAR }));
	}

	#[test]
	fn raw_vars_default_to_development() {
		let unset = ClientConfig::from_vars(None, None).expect("Unset mode should resolve.");
		let other = ClientConfig::from_vars(Some("staging"), Some("not a url"))
			.expect("Non-production modes ignore the origin.");

		assert_eq!(unset.base_url().as_str(), "http://localhost:8000/");
		assert_eq!(other, unset);
	}

	#[test]
	fn raw_production_vars_resolve_the_api_prefix() {
		let config =
			ClientConfig::from_vars(Some("production"), Some(" https://x.example/app/page "))
				.expect("Production with an absolute origin should resolve.");

		assert_eq!(config.base_url().as_str(), "https://x.example/api");
	}

	#[test]
	fn raw_production_vars_require_a_valid_origin() {
		assert!(matches!(
			ClientConfig::from_vars(Some("production"), None),
			Err(ConfigError::MissingOrigin { var: ORIGIN_VAR })
		));

		match ClientConfig::from_vars(Some("PRODUCTION"), Some("not a url")) {
			Err(ConfigError::InvalidBaseUrl { value, .. }) => assert_eq!(value, "not a url"),
			other => panic!("Unexpected result: {other:?}."),
		}
	}

	#[test]
	fn trailing_slash_and_query_do_not_leak_into_endpoints() {
		let config = ClientConfig::parse("http://127.0.0.1:9000/v1/?debug=1")
			.expect("Base with trailing slash should parse.");

		assert_eq!(config.endpoint("list").as_str(), "http://127.0.0.1:9000/v1/list");
	}

	#[test]
	fn opaque_and_malformed_bases_are_rejected() {
		assert!(matches!(
			ClientConfig::parse("mailto:someone@example.com"),
			Err(ConfigError::OpaqueBaseUrl { .. })
		));
		assert!(matches!(ClientConfig::parse("not a url"), Err(ConfigError::InvalidBaseUrl { .. })));
	}
}
