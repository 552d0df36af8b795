// Copyright © 2025 Stephan Kunz
//! Implements the [`RouteData`] bucket stored per mounted path.

use alloc::{string::String, sync::Arc};
use core::ops::Deref;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The opaque data bucket associated with one path.
///
/// It is an immutable, cheaply clonable mapping from `String` keys to arbitrary [`Value`]s.
/// Changes always create a new bucket, so a clone can be held as a snapshot.
/// Identity is observable with [`RouteData::ptr_eq`].
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct RouteData(Arc<Map<String, Value>>);

impl Deref for RouteData {
	type Target = Map<String, Value>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<Map<String, Value>> for RouteData {
	fn from(map: Map<String, Value>) -> Self {
		Self(Arc::new(map))
	}
}

impl<K: Into<String>> FromIterator<(K, Value)> for RouteData {
	fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
		Self::from(
			iter.into_iter()
				.map(|(key, value)| (key.into(), value))
				.collect::<Map<String, Value>>(),
		)
	}
}

impl TryFrom<Value> for RouteData {
	type Error = Value;

	/// Only a JSON object can become a bucket, anything else is handed back.
	fn try_from(value: Value) -> core::result::Result<Self, Self::Error> {
		match value {
			Value::Object(map) => Ok(Self::from(map)),
			other => Err(other),
		}
	}
}

impl From<RouteData> for Value {
	fn from(data: RouteData) -> Self {
		Self::Object(Arc::unwrap_or_clone(data.0))
	}
}

impl RouteData {
	/// Creates an empty bucket.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns `true` if both buckets are the very same allocation.
	#[must_use]
	pub fn ptr_eq(this: &Self, other: &Self) -> bool {
		Arc::ptr_eq(&this.0, &other.0)
	}

	/// Returns a new bucket with `key` set to `value`, all other entries are kept.
	/// `self` is left untouched.
	#[must_use]
	pub fn with(&self, key: impl Into<String>, value: Value) -> Self {
		let mut map = (*self.0).clone();
		map.insert(key.into(), value);
		Self::from(map)
	}

	/// Returns the value stored under `key`.
	#[must_use]
	pub fn field(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}
}
