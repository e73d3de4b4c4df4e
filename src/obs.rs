//! Optional observability hooks for endpoint resolution and response translation.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit debug events targeted `oauth2_facebook.endpoint` when URLs
//!   resolve, `oauth2_facebook.graph_error` when Graph error payloads surface, and
//!   `oauth2_facebook.grant` when the refresh guard rejects a request. Events never carry
//!   token, secret, or proof material—resolved URLs are reduced to host + path.

// self
use crate::_prelude::*;

/// Endpoint kinds resolved by the adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EndpointKind {
	/// Authorization dialog endpoint.
	Authorize,
	/// Token exchange endpoint.
	Token,
	/// Resource-owner `/me` lookup endpoint.
	ResourceOwner,
}
impl EndpointKind {
	/// Returns a stable label suitable for log fields and error messages.
	pub const fn as_str(self) -> &'static str {
		match self {
			EndpointKind::Authorize => "authorization",
			EndpointKind::Token => "token",
			EndpointKind::ResourceOwner => "resource_owner",
		}
	}
}
impl Display for EndpointKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Records a resolved endpoint without logging query material.
pub(crate) fn endpoint_resolved(kind: EndpointKind, url: &Url) {
	#[cfg(feature = "tracing")]
	tracing::debug!(
		target: "oauth2_facebook.endpoint",
		endpoint = kind.as_str(),
		host = url.host_str().unwrap_or_default(),
		path = url.path(),
	);
	#[cfg(not(feature = "tracing"))]
	let _ = (kind, url);
}

/// Records an in-band Graph error translation.
pub(crate) fn graph_error(code: i64) {
	#[cfg(feature = "tracing")]
	tracing::debug!(target: "oauth2_facebook.graph_error", code);
	#[cfg(not(feature = "tracing"))]
	let _ = code;
}

/// Records a grant rejected by the refresh guard.
pub(crate) fn unsupported_grant(grant: &'static str) {
	#[cfg(feature = "tracing")]
	tracing::debug!(target: "oauth2_facebook.grant", grant, "Grant is not offered by Graph.");
	#[cfg(not(feature = "tracing"))]
	let _ = grant;
}
