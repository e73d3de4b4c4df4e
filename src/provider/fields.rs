//! Default `/me` field selections and their version gating.

// self
use crate::provider::GraphApiVersion;

/// Fields requested from `/me` when the caller does not override the selection.
///
/// `picture` uses a Graph field expression to pull the large avatar together with its
/// silhouette flag in a single lookup.
pub const DEFAULT_FIELDS: [&str; 9] = [
	"id",
	"name",
	"first_name",
	"last_name",
	"email",
	"hometown",
	"picture.type(large){url,is_silhouette}",
	"gender",
	"age_range",
];

// Graph stopped serving `bio` with v2.8.
const BIO_REMOVED_IN: (u32, u32) = (2, 8);

/// Returns the default `/me` field selection for a Graph version.
///
/// The `bio` field is only requested on versions that still serve it.
pub fn default_fields(version: &GraphApiVersion) -> Vec<String> {
	let mut fields: Vec<_> = DEFAULT_FIELDS.iter().map(|field| (*field).to_owned()).collect();

	if version.precedes(BIO_REMOVED_IN.0, BIO_REMOVED_IN.1) {
		fields.push("bio".into());
	}

	fields
}

/// Joins a field selection into the comma-separated form used in `fields=` query params.
pub fn join_fields(fields: &[String]) -> String {
	fields.join(",")
}
