// Copyright © 2025 Stephan Kunz
//! The wire format of [`Action`]s.

use crate::{
	ConstString, Error,
	actions::{self, Action},
	config::Config,
	error::Result,
	route_data::RouteData,
};
use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

/// A plain action record with a `type` discriminator and a `payload`.
///
/// ```json
/// { "type": "@@redux-mount/MOUNT", "payload": { "mountOn": "user/create", "initData": { "loading": true } } }
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ActionDescriptor {
	/// The namespaced type, e.g. `@@redux-mount/SET`.
	#[serde(rename = "type")]
	pub action_type: String,
	/// Action specific data.
	#[serde(default)]
	pub payload: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MountPayload {
	mount_on: ConstString,
	#[serde(default)]
	init_data: Option<RouteData>,
}

#[derive(Deserialize)]
struct SetPayload {
	key: ConstString,
	#[serde(default)]
	data: Value,
}

impl ActionDescriptor {
	/// Creates an [`ActionDescriptor`] with given parameters.
	pub fn with(action_type: impl Into<String>, payload: Value) -> Self {
		Self {
			action_type: action_type.into(),
			payload,
		}
	}

	/// Encodes `action` using the namespace of `config`.
	#[must_use]
	pub fn encode(action: &Action, config: &Config) -> Self {
		match action {
			Action::Mount { path, initial_data } => {
				let mut payload = Map::new();
				payload.insert("mountOn".into(), Value::String(path.to_string()));
				if let Some(data) = initial_data {
					payload.insert("initData".into(), data.clone().into());
				}
				Self::with(config.action_type(actions::MOUNT), Value::Object(payload))
			}
			Action::Unmount { clear_data } => {
				Self::with(config.action_type(actions::UNMOUNT), Value::Bool(*clear_data))
			}
			Action::Clear => Self::with(config.action_type(actions::CLEAR), Value::Null),
			Action::Set { key, value } => {
				let mut payload = Map::new();
				payload.insert("key".into(), Value::String(key.to_string()));
				payload.insert("data".into(), value.clone());
				Self::with(config.action_type(actions::SET), Value::Object(payload))
			}
			Action::Unrecognized(action_type) => Self::with(action_type.to_string(), Value::Null),
		}
	}

	/// Decodes into an [`Action`] using the namespace of `config`.
	/// Types outside the namespace or unknown kinds become [`Action::Unrecognized`].
	/// # Errors
	/// - [`Error::InvalidPayload`] if the payload does not fit a known type
	pub fn decode(&self, config: &Config) -> Result<Action> {
		let Some(kind) = config.action_kind(&self.action_type) else {
			return Ok(Action::Unrecognized(self.action_type.as_str().into()));
		};

		match kind {
			actions::MOUNT => {
				let payload: MountPayload = self.payload_as()?;
				Ok(Action::Mount {
					path: payload.mount_on,
					initial_data: payload.init_data,
				})
			}
			actions::UNMOUNT => match &self.payload {
				Value::Null => Ok(Action::Unmount { clear_data: false }),
				Value::Bool(clear_data) => Ok(Action::Unmount {
					clear_data: *clear_data,
				}),
				_ => Err(self.invalid("expected a boolean or nothing")),
			},
			actions::CLEAR => Ok(Action::Clear),
			actions::SET => {
				let payload: SetPayload = self.payload_as()?;
				Ok(Action::Set {
					key: payload.key,
					value: payload.data,
				})
			}
			_ => Ok(Action::Unrecognized(self.action_type.as_str().into())),
		}
	}

	fn payload_as<T: DeserializeOwned>(&self) -> Result<T> {
		T::deserialize(&self.payload).map_err(|err| self.invalid(&err.to_string()))
	}

	fn invalid(&self, reason: &str) -> Error {
		Error::InvalidPayload {
			kind: self.action_type.as_str().into(),
			reason: reason.into(),
		}
	}
}
