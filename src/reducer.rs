// Copyright © 2025 Stephan Kunz
//! Implementation of the [`Reducer`].

use crate::{
	ConstString, Error,
	actions::Action,
	config::Config,
	descriptor::ActionDescriptor,
	error::Result,
	route_data::RouteData,
	slice_state::{Routes, SliceState, SliceStatePtr},
};
use alloc::sync::Arc;
use serde_json::Value;
use tracing::{debug, trace, warn};

/// Reduces `action` on `state` with the default [`Config`].
///
/// A missing `state` is replaced by the initial state.
/// # Errors
/// - [`Error::NotMounted`] if a `Set` is reduced while nothing is mounted
pub fn reduce(state: Option<SliceStatePtr>, action: &Action) -> Result<SliceStatePtr> {
	Reducer::default().reduce(state, action)
}

/// A configured reducer for a mountable slice.
///
/// Reduction is pure: the given state is never altered, changed parts are freshly built
/// and unchanged [`RouteData`] buckets keep their identity.
#[derive(Clone, Debug, Default)]
pub struct Reducer {
	config: Config,
}

impl Reducer {
	/// Creates a [`Reducer`] with given [`Config`].
	#[must_use]
	pub const fn with(config: Config) -> Self {
		Self { config }
	}

	/// Returns the [`Config`] of this reducer.
	#[must_use]
	pub const fn config(&self) -> &Config {
		&self.config
	}

	/// Returns the successor of `state` for `action`.
	///
	/// A missing `state` is replaced by the initial state.
	/// Actions without effect, e.g. unrecognized ones, return `state` itself.
	/// # Errors
	/// - [`Error::NotMounted`] if a `Set` is reduced while nothing is mounted
	pub fn reduce(&self, state: Option<SliceStatePtr>, action: &Action) -> Result<SliceStatePtr> {
		let state = state.unwrap_or_default();
		trace!(kind = action.kind(), mounted_on = %state.mounted_on, "reduce");

		match action {
			Action::Mount { path, initial_data } => Ok(self.mount(&state, path, initial_data.as_ref())),
			Action::Unmount { clear_data } => Ok(Self::unmount(&state, *clear_data)),
			// the legacy vocabulary has no clear
			Action::Clear if self.config.is_legacy() => Ok(state),
			Action::Clear => Ok(Self::clear(state)),
			Action::Set { key, value } => Self::set(&state, key, value),
			Action::Unrecognized(_) => Ok(state),
		}
	}

	/// Decodes `descriptor` and reduces the resulting action on `state`.
	/// # Errors
	/// - [`Error::InvalidPayload`] if the descriptor can not be decoded
	/// - [`Error::NotMounted`] if a `Set` is reduced while nothing is mounted
	pub fn reduce_descriptor(&self, state: Option<SliceStatePtr>, descriptor: &ActionDescriptor) -> Result<SliceStatePtr> {
		let action = descriptor.decode(&self.config)?;
		self.reduce(state, &action)
	}

	fn mount(&self, state: &SliceState, path: &ConstString, initial_data: Option<&RouteData>) -> SliceStatePtr {
		let data = initial_data.cloned().unwrap_or_else(|| {
			if self.config.is_legacy() {
				RouteData::new()
			} else {
				state.route(path).cloned().unwrap_or_default()
			}
		});
		debug!(path = %path, entries = data.len(), "mount");

		Arc::new(SliceState {
			mounted_on: path.clone(),
			routes: with_route(&state.routes, path, data),
		})
	}

	fn unmount(state: &SliceState, clear_data: bool) -> SliceStatePtr {
		debug!(path = %state.mounted_on, clear_data, "unmount");
		let routes = if clear_data && state.is_mounted() {
			with_route(&state.routes, &state.mounted_on, RouteData::new())
		} else {
			state.routes.clone()
		};

		Arc::new(SliceState {
			mounted_on: ConstString::from(""),
			routes,
		})
	}

	fn clear(state: SliceStatePtr) -> SliceStatePtr {
		if !state.is_mounted() {
			return state;
		}
		debug!(path = %state.mounted_on, "clear");

		Arc::new(SliceState {
			mounted_on: state.mounted_on.clone(),
			routes: with_route(&state.routes, &state.mounted_on, RouteData::new()),
		})
	}

	fn set(state: &SliceState, key: &str, value: &Value) -> Result<SliceStatePtr> {
		if !state.is_mounted() {
			warn!(key, "set while not mounted");
			return Err(Error::NotMounted);
		}

		let data = state
			.current()
			.cloned()
			.unwrap_or_default()
			.with(key, value.clone());

		Ok(Arc::new(SliceState {
			mounted_on: state.mounted_on.clone(),
			routes: with_route(&state.routes, &state.mounted_on, data),
		}))
	}
}

/// Copy of `routes` with the entry for `path` replaced by `data`.
/// The other buckets are shared.
fn with_route(routes: &Routes, path: &ConstString, data: RouteData) -> Arc<Routes> {
	let mut routes = routes.clone();
	routes.insert(path.clone(), data);
	Arc::new(routes)
}
