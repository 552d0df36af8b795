// Copyright © 2025 Stephan Kunz
//! The [`mountboard`](crate) error handling.

use crate::ConstString;

/// Shortcut for [`mountboard`](crate)'s Result<T, E> type
pub type Result<T> = core::result::Result<T, Error>;

/// Fixed diagnostic of [`Error::NotMounted`].
pub const NOT_MOUNTED_MESSAGE: &str = "redux-mount not mounted! Please mount before setting values";

/// Things that may go wrong using a mountable slice.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// A `Set` was reduced while nothing is mounted.
	/// This is a usage error, `Mount` has to precede any `Set`.
	#[error("{}", NOT_MOUNTED_MESSAGE)]
	NotMounted,
	/// The payload of an [`ActionDescriptor`](crate::ActionDescriptor) does not fit its type.
	#[error("invalid payload for action {kind}: {reason}")]
	InvalidPayload {
		/// Type of the descriptor.
		kind: ConstString,
		/// What is wrong with the payload.
		reason: ConstString,
	},
	/// A slice with `key` is already registered in the [`Store`](crate::Store).
	#[error("a slice with the key {key} is already registered")]
	AlreadyRegistered {
		/// Key of the slice.
		key: ConstString,
	},
	/// No slice is registered under `key` in the [`Store`](crate::Store).
	#[error("a slice with the key {key} is not registered")]
	UnknownSlice {
		/// Key of the wanted slice.
		key: ConstString,
	},
}
