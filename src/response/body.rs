//! Body-format negotiation for Graph responses that mislabel their content type.

// self
use crate::{_prelude::*, error::ResponseError};

/// Body formats the adapter instructs the engine to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFormat {
	/// JSON object body.
	Json,
	/// URL-encoded form body (old Graph token responses).
	Form,
}
impl BodyFormat {
	/// Returns a stable label suitable for error messages and log fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			BodyFormat::Json => "json",
			BodyFormat::Form => "form",
		}
	}

	/// Returns the canonical media type for the format.
	pub const fn content_type(self) -> &'static str {
		match self {
			BodyFormat::Json => "application/json",
			BodyFormat::Form => "application/x-www-form-urlencoded",
		}
	}
}
impl Display for BodyFormat {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Overrides mislabeled Graph content types before generic body parsing runs.
///
/// Graph declares `text/javascript` for JSON bodies and `text/plain` for URL-encoded
/// token responses on old API versions. Returns `None` when the declared type needs no
/// correction.
pub fn normalize_content_type(declared: &str) -> Option<BodyFormat> {
	let lowered = declared.to_ascii_lowercase();

	if lowered.contains("javascript") {
		Some(BodyFormat::Json)
	} else if lowered.contains("plain") {
		Some(BodyFormat::Form)
	} else {
		None
	}
}

/// Decodes a response body in the negotiated format into a JSON value.
///
/// Form bodies decode into an object of string values, mirroring how old Graph versions
/// return token responses.
pub fn decode_body(format: BodyFormat, body: &str) -> Result<JsonValue, ResponseError> {
	match format {
		BodyFormat::Json => {
			let deserializer = &mut serde_json::Deserializer::from_str(body);

			serde_path_to_error::deserialize(deserializer)
				.map_err(|source| ResponseError::MalformedBody { format, source })
		},
		BodyFormat::Form => {
			let mut object = JsonMap::new();

			for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
				object.insert(key.into_owned(), JsonValue::String(value.into_owned()));
			}

			Ok(JsonValue::Object(object))
		},
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn mislabeled_content_types_are_corrected() {
		assert_eq!(
			normalize_content_type("text/javascript; charset=UTF-8"),
			Some(BodyFormat::Json),
		);
		assert_eq!(normalize_content_type("text/plain"), Some(BodyFormat::Form));
		assert_eq!(normalize_content_type("application/json"), None);
		assert_eq!(normalize_content_type("application/x-www-form-urlencoded"), None);
	}

	#[test]
	fn form_bodies_decode_into_string_objects() {
		let decoded =
			decode_body(BodyFormat::Form, "access_token=mock_access_token&expires=3600")
				.expect("Form body should decode.");

		assert_eq!(
			decoded,
			serde_json::json!({"access_token": "mock_access_token", "expires": "3600"}),
		);
	}

	#[test]
	fn malformed_json_reports_a_parse_error() {
		let err = decode_body(BodyFormat::Json, "{not json")
			.expect_err("Malformed JSON should be rejected.");

		assert!(matches!(err, ResponseError::MalformedBody { format: BodyFormat::Json, .. }));
	}
}
