// Copyright © 2025 Stephan Kunz
//! Read-only accessors projecting the mounted data out of a host state tree.
//!
//! Every accessor is configured with the key under which the host stores the slice.
//! A host without a slice under that key behaves like a slice where nothing is mounted.

use crate::{
	ConstString,
	route_data::RouteData,
	slice_state::{SliceState, SliceStatePtr},
};
use alloc::collections::btree_map::BTreeMap;
use serde_json::Value;

/// A host state tree, mapping slice keys to slice states.
pub type HostTree = BTreeMap<ConstString, SliceStatePtr>;

/// Access to the slices of a host state tree.
pub trait HostState {
	/// Returns the slice stored under `key`.
	fn slice(&self, key: &str) -> Option<&SliceState>;
}

impl HostState for HostTree {
	fn slice(&self, key: &str) -> Option<&SliceState> {
		self.get(key).map(|state| &**state)
	}
}

impl<T: HostState + ?Sized> HostState for &T {
	fn slice(&self, key: &str) -> Option<&SliceState> {
		(**self).slice(key)
	}
}

/// Whether and with what a slice is mounted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MountStatus {
	/// Nothing is mounted or the mounted path has no data.
	NotMounted,
	/// A path is mounted, its data is empty.
	MountedEmpty,
	/// A path is mounted and has data.
	MountedWithData,
}

/// Creates an accessor returning the data of the mounted path.
pub fn current(slice_key: impl Into<ConstString>) -> impl Fn(&dyn HostState) -> Option<RouteData> {
	let slice_key = slice_key.into();
	move |host: &dyn HostState| host.slice(&slice_key)?.current().cloned()
}

/// Creates an accessor returning the data of the mounted path.
///
/// Same as [`current`].
pub fn create_selector(slice_key: impl Into<ConstString>) -> impl Fn(&dyn HostState) -> Option<RouteData> {
	current(slice_key)
}

/// Creates an accessor returning a single field of the data of the mounted path.
pub fn current_field(slice_key: impl Into<ConstString>) -> impl Fn(&dyn HostState, &str) -> Option<Value> {
	let slice_key = slice_key.into();
	move |host: &dyn HostState, key: &str| {
		host.slice(&slice_key)?
			.current()?
			.field(key)
			.cloned()
	}
}

/// Creates an accessor telling whether the mounted path has data.
/// Empty data counts as not set, use [`mount_status`] to distinguish.
pub fn current_is_set(slice_key: impl Into<ConstString>) -> impl Fn(&dyn HostState) -> bool {
	let slice_key = slice_key.into();
	move |host: &dyn HostState| {
		host.slice(&slice_key)
			.and_then(SliceState::current)
			.is_some_and(|data| !data.is_empty())
	}
}

/// Creates an accessor returning the [`MountStatus`] of the slice.
pub fn mount_status(slice_key: impl Into<ConstString>) -> impl Fn(&dyn HostState) -> MountStatus {
	let slice_key = slice_key.into();
	move |host: &dyn HostState| match host.slice(&slice_key) {
		Some(slice) if slice.is_mounted() => match slice.current() {
			Some(data) if data.is_empty() => MountStatus::MountedEmpty,
			Some(_) => MountStatus::MountedWithData,
			None => MountStatus::NotMounted,
		},
		_ => MountStatus::NotMounted,
	}
}

/// Returns the field `key` of `data`.
#[must_use]
pub fn get_field<'a>(data: &'a RouteData, key: &str) -> Option<&'a Value> {
	data.field(key)
}
