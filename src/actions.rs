// Copyright © 2025 Stephan Kunz
//! The [`Action`]s understood by the [`Reducer`](crate::Reducer) and their constructors.
//!
//! ```
//! use mountboard::{Action, actions};
//! use serde_json::json;
//!
//! let action = actions::set("name", json!("Jane"));
//! assert_eq!(action.kind(), actions::SET);
//! assert_eq!(actions::unmount(), Action::Unmount { clear_data: false });
//! ```

use crate::{ConstString, route_data::RouteData};
use serde_json::Value;

/// Kind of [`Action::Mount`].
pub const MOUNT: &str = "MOUNT";
/// Kind of [`Action::Unmount`].
pub const UNMOUNT: &str = "UNMOUNT";
/// Kind of [`Action::Clear`].
pub const CLEAR: &str = "CLEAR";
/// Kind of [`Action::Set`].
pub const SET: &str = "SET";

/// An immutable action descriptor.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
	/// Makes `path` the mounted one.
	Mount {
		/// The path to mount.
		path: ConstString,
		/// Data for the path, `None` keeps existing data.
		initial_data: Option<RouteData>,
	},
	/// Deactivates the mounted path.
	Unmount {
		/// Whether to wipe the data of the formerly mounted path.
		clear_data: bool,
	},
	/// Wipes the data of the mounted path without unmounting it.
	Clear,
	/// Stores `value` under `key` in the data of the mounted path.
	Set {
		/// Key within the mounted data.
		key: ConstString,
		/// The value to store.
		value: Value,
	},
	/// An action of somebody else, identified by its type string.
	Unrecognized(ConstString),
}

impl Action {
	/// Returns the kind of the action, for an unrecognized action its full type.
	#[must_use]
	pub fn kind(&self) -> &str {
		match self {
			Self::Mount { .. } => MOUNT,
			Self::Unmount { .. } => UNMOUNT,
			Self::Clear => CLEAR,
			Self::Set { .. } => SET,
			Self::Unrecognized(action_type) => action_type,
		}
	}
}

/// Creates an action mounting `path`, keeping data already stored for it.
pub fn mount(path: impl Into<ConstString>) -> Action {
	Action::Mount {
		path: path.into(),
		initial_data: None,
	}
}

/// Creates an action mounting `path` with `data`, replacing data already stored for it.
pub fn mount_with(path: impl Into<ConstString>, data: impl Into<RouteData>) -> Action {
	Action::Mount {
		path: path.into(),
		initial_data: Some(data.into()),
	}
}

/// Creates an action unmounting the current path, its data is preserved.
#[must_use]
pub const fn unmount() -> Action {
	Action::Unmount { clear_data: false }
}

/// Creates an action wiping the data of the mounted path.
#[must_use]
pub const fn clear() -> Action {
	Action::Clear
}

/// Creates an action storing `value` under `key` in the mounted path.
pub fn set(key: impl Into<ConstString>, value: impl Into<Value>) -> Action {
	Action::Set {
		key: key.into(),
		value: value.into(),
	}
}

/// Constructors of the earlier convention.
pub mod legacy {
	use super::Action;
	use crate::{ConstString, route_data::RouteData};

	/// Creates an action mounting `path`, missing data defaults to an empty bucket.
	#[deprecated = "use actions::mount or actions::mount_with"]
	pub fn mount(path: impl Into<ConstString>, init_data: Option<RouteData>) -> Action {
		Action::Mount {
			path: path.into(),
			initial_data: Some(init_data.unwrap_or_default()),
		}
	}

	/// Creates an action unmounting the current path, wiping its data if `clear_data` is set.
	#[deprecated = "use actions::unmount and actions::clear"]
	#[must_use]
	pub const fn unmount(clear_data: bool) -> Action {
		Action::Unmount { clear_data }
	}
}
