// Copyright © 2025 Stephan Kunz
#![no_std]
#![doc = include_str!("../README.md")]

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

#[doc(hidden)]
extern crate alloc;

pub mod actions;
mod config;
mod descriptor;
mod error;
mod reducer;
mod route_data;
pub mod selectors;
mod slice_state;
mod store;

use alloc::sync::Arc;

// flatten
pub use actions::Action;
pub use config::{Config, Convention, DEFAULT_NAMESPACE};
pub use descriptor::ActionDescriptor;
pub use error::{Error, NOT_MOUNTED_MESSAGE, Result};
pub use reducer::{Reducer, reduce};
pub use route_data::RouteData;
pub use selectors::{HostState, HostTree, MountStatus};
pub use slice_state::{Routes, SliceState, SliceStatePtr};
pub use store::{INIT, Store, StorePtr};

/// An immutable thread safe `String` type
/// see: [Logan Smith](https://www.youtube.com/watch?v=A4cKi7PTJSs).
pub type ConstString = Arc<str>;
