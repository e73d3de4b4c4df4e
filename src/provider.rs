//! Provider-facing configuration (data) and endpoint resolution (behavior).
//!
//! `version` exposes the validated Graph API version, `fields` the version-gated default
//! `/me` selection, and `config` the immutable configuration assembled from the host's
//! options map. `endpoints` resolves the three URLs the OAuth engine calls and derives the
//! `appsecret_proof` request binding; `grant` labels the token-endpoint grants, including
//! the refresh grant that Graph never offers.

pub mod config;
pub mod endpoints;
pub mod fields;
pub mod grant;
pub mod version;

pub use config::*;
pub use endpoints::*;
pub use fields::*;
pub use grant::*;
pub use version::*;
