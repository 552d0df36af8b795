// Copyright © 2025 Stephan Kunz
//! Integration tests for [`Action`] construction and the descriptor wire format.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use mountboard::{Action, ActionDescriptor, Config, Convention, RouteData, actions};
use serde_json::json;

#[test]
fn mount() {
	let config = Config::default();
	let descriptor = ActionDescriptor::encode(&actions::mount("view/path"), &config);
	assert_eq!(descriptor.action_type, "@@redux-mount/MOUNT");

	let action = actions::mount("users/test/new");
	let Action::Mount { path, initial_data } = &action else {
		panic!("not a mount action: {action:?}");
	};
	assert_eq!(&**path, "users/test/new");
	// defaulting is left to the reducer
	assert!(initial_data.is_none());

	let data = RouteData::try_from(json!({"foo": "bar"})).unwrap();
	let action = actions::mount_with("view/path", data.clone());
	assert_eq!(
		action,
		Action::Mount {
			path: "view/path".into(),
			initial_data: Some(data),
		}
	);
	assert_eq!(
		ActionDescriptor::encode(&action, &config).payload,
		json!({"mountOn": "view/path", "initData": {"foo": "bar"}})
	);
}

#[test]
#[allow(deprecated)]
fn legacy_mount() {
	let Action::Mount { initial_data, .. } = actions::legacy::mount("view/path", None) else {
		panic!("not a mount action");
	};
	assert_eq!(initial_data, Some(RouteData::new()));

	let data = RouteData::try_from(json!({"foo": "bar"})).unwrap();
	let Action::Mount { initial_data, .. } = actions::legacy::mount("view/path", Some(data.clone())) else {
		panic!("not a mount action");
	};
	assert_eq!(initial_data, Some(data));
}

#[test]
#[allow(deprecated)]
fn unmount() {
	let config = Config::default();
	let descriptor = ActionDescriptor::encode(&actions::unmount(), &config);
	assert_eq!(descriptor.action_type, "@@redux-mount/UNMOUNT");
	assert_eq!(descriptor.payload, json!(false));

	assert_eq!(actions::legacy::unmount(false), actions::unmount());
	let descriptor = ActionDescriptor::encode(&actions::legacy::unmount(true), &config);
	assert_eq!(descriptor.payload, json!(true));
}

#[test]
fn clear_and_set() {
	let config = Config::default();
	let descriptor = ActionDescriptor::encode(&actions::clear(), &config);
	assert_eq!(descriptor.action_type, "@@redux-mount/CLEAR");

	let descriptor = ActionDescriptor::encode(&actions::set("key", json!({"nested": [1, 2]})), &config);
	assert_eq!(descriptor.action_type, "@@redux-mount/SET");
	assert_eq!(descriptor.payload, json!({"key": "key", "data": {"nested": [1, 2]}}));
}

#[test]
fn codec_follows_namespace() {
	let config = Config::with("forms", Convention::Evolved);
	let action = actions::set("name", "Jane");
	let descriptor = ActionDescriptor::encode(&action, &config);
	assert_eq!(descriptor.action_type, "forms/SET");
	assert_eq!(descriptor.decode(&config).unwrap(), action);

	// other namespaces are not ours
	assert_eq!(
		descriptor.decode(&Config::default()).unwrap(),
		Action::Unrecognized("forms/SET".into())
	);
	let unknown = ActionDescriptor::with("forms/RESET", json!(null));
	assert_eq!(
		unknown.decode(&config).unwrap(),
		Action::Unrecognized("forms/RESET".into())
	);
}

#[test]
fn decode_mount_payloads() {
	let config = Config::default();
	let descriptor = ActionDescriptor::with("@@redux-mount/MOUNT", json!({"mountOn": "a", "initData": null}));
	assert_eq!(descriptor.decode(&config).unwrap(), actions::mount("a"));

	let descriptor = ActionDescriptor::with("@@redux-mount/MOUNT", json!({"mountOn": "a", "initData": {}}));
	assert_eq!(
		descriptor.decode(&config).unwrap(),
		actions::mount_with("a", RouteData::new())
	);

	let descriptor = ActionDescriptor::with("@@redux-mount/MOUNT", json!({"mountOn": "a", "initData": 5}));
	assert!(descriptor.decode(&config).is_err());
	let descriptor = ActionDescriptor::with("@@redux-mount/MOUNT", json!(null));
	assert!(descriptor.decode(&config).is_err());
}
