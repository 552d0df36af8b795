// Copyright © 2025 Stephan Kunz
//! Property-based tests for the purity of the [`Reducer`].

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use mountboard::{Action, RouteData, SliceState, SliceStatePtr, actions, reduce};
use proptest::prelude::*;
use serde_json::Value;
use std::sync::Arc;

fn path() -> impl Strategy<Value = String> {
	prop_oneof![
		Just(String::from("user/create")),
		Just(String::from("user/edit")),
		Just(String::from("test/route")),
		"[a-z]{1,6}(/[a-z]{1,6})?",
	]
}

fn value() -> impl Strategy<Value = Value> {
	prop_oneof![
		Just(Value::Null),
		any::<bool>().prop_map(Value::from),
		any::<i64>().prop_map(Value::from),
		"[a-zA-Z0-9 ]{0,12}".prop_map(Value::from),
	]
}

fn action() -> impl Strategy<Value = Action> {
	prop_oneof![
		path().prop_map(actions::mount),
		(path(), prop::collection::vec(("[a-z]{1,4}", value()), 0..4))
			.prop_map(|(path, entries)| actions::mount_with(path, entries.into_iter().collect::<RouteData>())),
		any::<bool>().prop_map(|clear_data| Action::Unmount { clear_data }),
		Just(actions::clear()),
		("[a-z]{1,4}", value()).prop_map(|(key, value)| actions::set(key, value)),
		Just(Action::Unrecognized("@@other/ACTION".into())),
	]
}

/// Applies all actions of `history`, skipping rejected ones like a dispatcher catching errors would.
fn run(history: &[Action]) -> Vec<SliceStatePtr> {
	let mut states = vec![SliceState::new()];
	for action in history {
		let previous = states.last().cloned();
		if let Ok(next) = reduce(previous, action) {
			states.push(next);
		}
	}
	states
}

proptest! {
	#[test]
	fn reduction_never_mutates(history in prop::collection::vec(action(), 1..24), last in action()) {
		let states = run(&history);
		let previous = states.last().cloned().unwrap();
		let snapshot = (*previous).clone();

		if let Ok(next) = reduce(Some(previous.clone()), &last) {
			// the old state still reads as before
			prop_assert_eq!(&*previous, &snapshot);

			// changed routes live in a new container
			if next.routes() != previous.routes() {
				prop_assert!(!next.routes_ptr_eq(&previous));
			}

			// untouched buckets keep their identity
			for (path, data) in previous.routes() {
				if let Some(new_data) = next.route(path)
					&& new_data == data
					&& path.as_ref() != next.mounted_on()
					&& path.as_ref() != previous.mounted_on()
				{
					prop_assert!(RouteData::ptr_eq(new_data, data));
				}
			}
		} else {
			prop_assert!(!previous.is_mounted());
		}
	}

	#[test]
	fn routes_are_exactly_the_mounted_paths(history in prop::collection::vec(action(), 0..32)) {
		let states = run(&history);
		let last = states.last().unwrap();

		let mut mounted: Vec<&str> = history
			.iter()
			.filter_map(|action| match action {
				Action::Mount { path, .. } => Some(path.as_ref()),
				_ => None,
			})
			.collect();
		mounted.sort_unstable();
		mounted.dedup();

		let routes: Vec<&str> = last.routes().keys().map(AsRef::as_ref).collect();
		prop_assert_eq!(routes, mounted);
	}

	#[test]
	fn clear_without_mount_is_identity(history in prop::collection::vec(action(), 0..16)) {
		let states = run(&history);
		let last = states.last().cloned().unwrap();
		let unmounted = reduce(Some(last), &actions::unmount()).unwrap();
		let next = reduce(Some(unmounted.clone()), &actions::clear()).unwrap();
		prop_assert!(Arc::ptr_eq(&unmounted, &next));
	}
}
