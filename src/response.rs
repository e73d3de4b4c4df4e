//! Graph response interpretation: content-type overrides, body decoding, error surfacing.
//!
//! Graph reports most failures in-band with HTTP 200 and an `error` payload, and old
//! versions mislabel their bodies (`text/javascript` for JSON, `text/plain` for form
//! data). Both corrections run before the external engine's generic response handling.

pub mod body;

pub use body::*;

// self
use crate::{_prelude::*, error::ResponseError, obs};

/// Raises a [`ResponseError::Graph`] when the payload carries a non-empty `error` object.
///
/// The error description combines the payload's `type` and `message`; the numeric `code`
/// and the complete payload ride along for diagnostics. An absent or empty `error` object
/// leaves the payload untouched.
pub fn translate_error(payload: &JsonValue) -> Result<(), ResponseError> {
	let Some(error) = payload.get("error").and_then(JsonValue::as_object) else {
		return Ok(());
	};

	if error.is_empty() {
		return Ok(());
	}

	let kind = error.get("type").and_then(JsonValue::as_str).unwrap_or_default();
	let message = error.get("message").and_then(JsonValue::as_str).unwrap_or_default();
	let code = error.get("code").and_then(JsonValue::as_i64).unwrap_or_default();

	obs::graph_error(code);

	Err(ResponseError::Graph { message: format!("{kind}: {message}"), code, raw: payload.clone() })
}
