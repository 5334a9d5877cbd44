//! Typed async client for a small expense-tracking REST service—idempotent creates, filtered
//! listings, and one uniform error surface for every request.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod client;
pub mod config;
pub mod error;
pub mod expense;
pub mod filter;
pub mod http;
pub mod idempotency;
pub mod obs;

pub use client::ExpenseClient;
#[cfg(feature = "reqwest")] pub use client::ReqwestExpenseClient;
pub use config::{ClientConfig, Deployment};
pub use error::{ConfigError, Error, Result};
pub use expense::{Expense, ExpenseId, NewExpense};
pub use filter::{ListFilter, SortOrder};
pub use idempotency::IdempotencyKey;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Date, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{ConfigError, Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use time;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, parking_lot as _, tokio as _};
