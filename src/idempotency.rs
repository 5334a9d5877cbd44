//! Idempotency keys attached to create requests.
//!
//! A key is `<unix-millis>-<random alphanumerics>`. Nothing is persisted and no counter is
//! shared, so two processes may in theory collide; within one process a collision needs two
//! keys in the same millisecond with identical random suffixes.

// crates.io
use rand::{Rng, distr::Alphanumeric};
// self
use crate::_prelude::*;

const RANDOM_LEN: usize = 16;

/// Opaque token that lets the service recognize a resubmitted create request.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdempotencyKey(String);
impl IdempotencyKey {
	/// Generates a fresh key from the current time and thread-local randomness.
	pub fn generate() -> Self {
		Self::generate_at(OffsetDateTime::now_utc())
	}

	/// Generates a fresh key using `now` as the time component.
	pub fn generate_at(now: OffsetDateTime) -> Self {
		let millis = now.unix_timestamp_nanos() / 1_000_000;

		Self(format!("{millis}-{}", random_string(RANDOM_LEN)))
	}

	/// Returns the key as sent on the wire.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for IdempotencyKey {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<IdempotencyKey> for String {
	fn from(value: IdempotencyKey) -> Self {
		value.0
	}
}
impl Debug for IdempotencyKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "IdempotencyKey({})", self.0)
	}
}
impl Display for IdempotencyKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

fn random_string(len: usize) -> String {
	rand::rng().sample_iter(Alphanumeric).take(len).map(char::from).collect()
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashSet;
	// crates.io
	use time::macros::datetime;
	// self
	use super::*;

	#[test]
	fn keys_are_unique_across_many_calls() {
		const N: usize = 10_000;

		let keys = (0..N).map(|_| IdempotencyKey::generate()).collect::<HashSet<_>>();

		assert_eq!(keys.len(), N, "Every generated key must be distinct.");
	}

	#[test]
	fn keys_at_the_same_instant_still_differ() {
		let now = datetime!(2024-01-15 12:00:00 UTC);
		let first = IdempotencyKey::generate_at(now);
		let second = IdempotencyKey::generate_at(now);

		assert_ne!(first, second);
	}

	#[test]
	fn key_layout_is_millis_then_random_suffix() {
		let key = IdempotencyKey::generate_at(datetime!(2024-01-15 00:00:00.123 UTC));
		let (millis, suffix) =
			key.as_str().split_once('-').expect("Key should contain a separator.");

		assert_eq!(millis, "1705276800123");
		assert_eq!(suffix.len(), RANDOM_LEN);
		assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
	}

	#[test]
	fn serializes_as_a_plain_string() {
		let key = IdempotencyKey::generate();
		let value = serde_json::to_value(&key).expect("Key should serialize.");

		assert_eq!(value, serde_json::Value::String(key.to_string()));
	}
}
