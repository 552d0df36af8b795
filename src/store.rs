// Copyright © 2025 Stephan Kunz
//! Implementation of the [`Store`], a minimal host container for mountable slices.

use crate::{
	ConstString, Error,
	actions::Action,
	config::Config,
	descriptor::ActionDescriptor,
	error::Result,
	reducer::Reducer,
	selectors::{HostState, HostTree},
	slice_state::SliceStatePtr,
};
use alloc::{sync::Arc, vec::Vec};
use spin::RwLock;
use tracing::debug;

/// Type of the action used to create the initial slice states.
pub const INIT: &str = "@@mountboard/INIT";

/// Convenience type for a pointer to a [`Store`].
pub type StorePtr = Arc<Store>;

/// The registered slices and the current host tree.
#[derive(Debug, Default)]
struct StoreData {
	/// Slices in order of registration.
	slices: Vec<(ConstString, Reducer)>,
	tree: HostTree,
}

/// A host state container combining several slices.
///
/// Every dispatched action is reduced by each registered slice, one action at a time.
/// Readers get snapshots of the host tree which stay valid independent of later dispatches.
#[derive(Debug, Default)]
pub struct Store {
	data: RwLock<StoreData>,
}

impl Store {
	/// Creates a [`StorePtr`] to a new, empty [`Store`].
	#[must_use]
	pub fn new() -> StorePtr {
		Arc::new(Self::default())
	}

	/// Registers a slice under `key`, reduced by `reducer`, and installs its initial state.
	/// # Errors
	/// - [`Error::AlreadyRegistered`] if `key` is already in use
	pub fn register(&self, key: impl Into<ConstString>, reducer: Reducer) -> Result<()> {
		let key = key.into();
		let mut data = self.data.write();
		if data.tree.contains_key(&key) {
			return Err(Error::AlreadyRegistered { key });
		}

		let initial = reducer.reduce(None, &Action::Unrecognized(INIT.into()))?;
		debug!(key = %key, namespace = reducer.config().namespace(), "register slice");
		data.tree.insert(key.clone(), initial);
		data.slices.push((key, reducer));
		Ok(())
	}

	/// Reduces `action` in every registered slice.
	/// Either all slices are updated or, on error, none.
	/// # Errors
	/// - [`Error::NotMounted`] if a `Set` is dispatched to a slice where nothing is mounted
	pub fn dispatch(&self, action: &Action) -> Result<()> {
		self.dispatch_with(|reducer, state| reducer.reduce(Some(state), action))
	}

	/// Decodes `descriptor` with the configuration of each slice and reduces it there.
	/// Either all slices are updated or, on error, none.
	/// # Errors
	/// - [`Error::InvalidPayload`] if the descriptor can not be decoded
	/// - [`Error::NotMounted`] if a `Set` is dispatched to a slice where nothing is mounted
	pub fn dispatch_descriptor(&self, descriptor: &ActionDescriptor) -> Result<()> {
		self.dispatch_with(|reducer, state| reducer.reduce_descriptor(Some(state), descriptor))
	}

	fn dispatch_with<F>(&self, reduce: F) -> Result<()>
	where
		F: Fn(&Reducer, SliceStatePtr) -> Result<SliceStatePtr>,
	{
		let mut data = self.data.write();
		let mut next = Vec::with_capacity(data.slices.len());
		for (key, reducer) in &data.slices {
			let Some(state) = data.tree.get(key) else {
				return Err(Error::UnknownSlice { key: key.clone() });
			};
			next.push((key.clone(), reduce(reducer, state.clone())?));
		}

		for (key, state) in next {
			data.tree.insert(key, state);
		}
		Ok(())
	}

	/// Returns a snapshot of the host tree.
	#[must_use]
	pub fn state(&self) -> HostTree {
		self.data.read().tree.clone()
	}

	/// Returns the current state of the slice registered under `key`.
	/// # Errors
	/// - [`Error::UnknownSlice`] if no slice is registered under `key`
	pub fn slice(&self, key: &str) -> Result<SliceStatePtr> {
		self.data
			.read()
			.tree
			.get(key)
			.cloned()
			.ok_or_else(|| Error::UnknownSlice { key: key.into() })
	}

	/// Returns the [`Config`] of the slice registered under `key`.
	/// # Errors
	/// - [`Error::UnknownSlice`] if no slice is registered under `key`
	pub fn slice_config(&self, key: &str) -> Result<Config> {
		self.data
			.read()
			.slices
			.iter()
			.find(|(registered, _)| registered.as_ref() == key)
			.map(|(_, reducer)| reducer.config().clone())
			.ok_or_else(|| Error::UnknownSlice { key: key.into() })
	}

	/// Applies `selector` to the current host tree.
	pub fn select<T>(&self, selector: impl Fn(&dyn HostState) -> T) -> T {
		let data = self.data.read();
		selector(&data.tree)
	}
}
