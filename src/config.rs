// Copyright © 2025 Stephan Kunz
//! Configuration of a mountable slice.

use crate::ConstString;
use alloc::{format, string::String};
use serde::{Deserialize, Serialize};

/// Default namespace of the action type strings.
pub const DEFAULT_NAMESPACE: &str = "@@redux-mount";

/// The action vocabulary and defaulting rules a slice follows.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
	/// `Mount` without data installs an empty bucket,
	/// there is no `Clear` action and data is only wiped by a flagged `Unmount`.
	/// Kept for callers relying on the earlier behavior.
	Legacy,
	/// `Mount` without data keeps already existing data of the path,
	/// data is wiped with an explicit `Clear`.
	#[default]
	Evolved,
}

/// Configuration of a slice.
///
/// Can be embedded in a hosts configuration file, missing fields use the defaults.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
	/// Prefix of the action type strings, e.g. `@@redux-mount` in `@@redux-mount/MOUNT`.
	namespace: ConstString,
	/// The followed [`Convention`].
	convention: Convention,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			namespace: DEFAULT_NAMESPACE.into(),
			convention: Convention::default(),
		}
	}
}

impl Config {
	/// Creates a [`Config`] with given parameters.
	pub fn with(namespace: impl Into<ConstString>, convention: Convention) -> Self {
		Self {
			namespace: namespace.into(),
			convention,
		}
	}

	/// Returns the namespace.
	#[must_use]
	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	/// Returns the convention.
	#[must_use]
	pub const fn convention(&self) -> Convention {
		self.convention
	}

	/// Returns `true` for the legacy convention.
	#[must_use]
	pub const fn is_legacy(&self) -> bool {
		matches!(self.convention, Convention::Legacy)
	}

	/// Builds the full type string for an action `kind`.
	#[must_use]
	pub fn action_type(&self, kind: &str) -> String {
		format!("{}/{kind}", self.namespace)
	}

	/// Returns the action kind if `action_type` belongs to this namespace, otherwise `None`.
	#[must_use]
	pub fn action_kind<'a>(&self, action_type: &'a str) -> Option<&'a str> {
		action_type
			.strip_prefix(self.namespace.as_ref())?
			.strip_prefix('/')
	}
}
