//! Adapter-level error types shared by endpoint resolution and response handling.

// self
use crate::_prelude::*;

/// Adapter-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical adapter error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Graph rejected the request or returned an unreadable body.
	#[error(transparent)]
	Response(#[from] ResponseError),

	/// Grant is not offered by the Graph token endpoint.
	#[error("Facebook does not support the {grant} grant.")]
	UnsupportedGrant {
		/// RFC 6749 label of the rejected grant.
		grant: &'static str,
	},
}

/// Configuration and validation failures raised while building the adapter.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// No Graph API version was supplied.
	#[error("No Graph API version found in configuration values.")]
	MissingGraphVersion,
	/// Graph API version string failed validation.
	#[error(transparent)]
	InvalidGraphVersion(#[from] crate::provider::GraphVersionError),
	/// Resolved endpoint could not be parsed as a URL.
	#[error("Resolved {endpoint} endpoint is not a valid URL.")]
	InvalidEndpoint {
		/// Which endpoint failed to resolve.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// Failures raised while interpreting Graph response bodies.
#[derive(Debug, ThisError)]
pub enum ResponseError {
	/// Graph reported a failure in-band via its `error` payload.
	#[error("{message}")]
	Graph {
		/// Combined `<type>: <message>` description from the error payload.
		message: String,
		/// Numeric Graph error code (e.g. 190/191 for OAuth failures).
		code: i64,
		/// Complete payload kept for diagnostics.
		raw: JsonValue,
	},
	/// Body could not be parsed in the negotiated format.
	#[error("Graph returned a malformed {format} body.")]
	MalformedBody {
		/// Format the body was expected to be in.
		format: crate::response::BodyFormat,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
