//! Facebook Graph provider adapter for Rust OAuth 2.0 clients—versioned endpoint resolution,
//! `appsecret_proof` request binding, and resource-owner normalization for engines that drive
//! the authorization flow themselves.
//!
//! The crate never performs network I/O. A generic OAuth 2.0 engine supplies the configuration
//! map, bearer tokens, and raw response bodies; this adapter hands back resolved URLs,
//! token-exchange parameters, content-type overrides, and normalized user views.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod obs;
pub mod provider;
pub mod resource;
pub mod response;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
	};

	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map as JsonMap, Value as JsonValue};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use serde_json;
pub use url;
