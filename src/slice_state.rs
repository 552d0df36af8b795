// Copyright © 2025 Stephan Kunz
//! Implementation of the [`SliceState`].

use crate::{ConstString, route_data::RouteData};
use alloc::{collections::btree_map::BTreeMap, sync::Arc};
use serde::{Deserialize, Serialize};

/// Convenience type for a pointer to a [`SliceState`].
pub type SliceStatePtr = Arc<SliceState>;

/// The mapping from path to [`RouteData`].
pub type Routes = BTreeMap<ConstString, RouteData>;

/// The state of one mountable slice.
///
/// It is never changed in place, the reducer always builds a new one.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliceState {
	/// Path currently mounted, empty if nothing is mounted.
	pub(crate) mounted_on: ConstString,
	/// Every path ever mounted with its data.
	pub(crate) routes: Arc<Routes>,
}

impl SliceState {
	/// Creates a [`SliceStatePtr`] to the initial [`SliceState`].
	#[must_use]
	pub fn new() -> SliceStatePtr {
		Arc::new(Self::default())
	}

	/// Creates a [`SliceStatePtr`] to a [`SliceState`] with given content.
	/// An empty `mounted_on` means nothing is mounted.
	pub fn with(mounted_on: impl Into<ConstString>, routes: Routes) -> SliceStatePtr {
		Arc::new(Self {
			mounted_on: mounted_on.into(),
			routes: Arc::new(routes),
		})
	}

	/// Returns the currently mounted path, which is empty if nothing is mounted.
	#[must_use]
	pub fn mounted_on(&self) -> &str {
		&self.mounted_on
	}

	/// Returns `true` if a path is mounted.
	#[must_use]
	pub fn is_mounted(&self) -> bool {
		!self.mounted_on.is_empty()
	}

	/// Returns all routes.
	#[must_use]
	pub fn routes(&self) -> &Routes {
		&self.routes
	}

	/// Returns `true` if both states share the same routes container.
	#[must_use]
	pub fn routes_ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.routes, &other.routes)
	}

	/// Returns the data stored for `path`.
	#[must_use]
	pub fn route(&self, path: &str) -> Option<&RouteData> {
		self.routes.get(path)
	}

	/// Returns the data of the currently mounted path.
	#[must_use]
	pub fn current(&self) -> Option<&RouteData> {
		self.routes.get(&*self.mounted_on)
	}
}
