//! Graph API version identifier enforcing the `v<major>.<minor>` shape.

// std
use std::{
	cmp::Ordering,
	hash::{Hash, Hasher},
};
// self
use crate::_prelude::*;

/// Validated Graph API version of the form `v<major>.<minor>`.
///
/// The raw spelling is kept for display while comparisons use the parsed numeric pair, so
/// `v2.10` correctly sorts after `v2.9`.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GraphApiVersion {
	raw: String,
	major: u32,
	minor: u32,
}
impl GraphApiVersion {
	/// Parses and validates a version string.
	pub fn new(value: impl AsRef<str>) -> Result<Self, GraphVersionError> {
		let view = value.as_ref();
		let (major, minor) = parse_view(view)?;

		Ok(Self { raw: view.to_owned(), major, minor })
	}

	/// Returns the major component.
	pub fn major(&self) -> u32 {
		self.major
	}

	/// Returns the minor component.
	pub fn minor(&self) -> u32 {
		self.minor
	}

	/// Returns the version as originally spelled.
	pub fn as_str(&self) -> &str {
		&self.raw
	}

	/// Returns true when this version predates `v<major>.<minor>`.
	pub fn precedes(&self, major: u32, minor: u32) -> bool {
		(self.major, self.minor) < (major, minor)
	}
}
impl PartialEq for GraphApiVersion {
	fn eq(&self, other: &Self) -> bool {
		(self.major, self.minor) == (other.major, other.minor)
	}
}
impl Eq for GraphApiVersion {}
impl PartialOrd for GraphApiVersion {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}
impl Ord for GraphApiVersion {
	fn cmp(&self, other: &Self) -> Ordering {
		(self.major, self.minor).cmp(&(other.major, other.minor))
	}
}
impl Hash for GraphApiVersion {
	fn hash<H: Hasher>(&self, state: &mut H) {
		(self.major, self.minor).hash(state);
	}
}
impl AsRef<str> for GraphApiVersion {
	fn as_ref(&self) -> &str {
		&self.raw
	}
}
impl From<GraphApiVersion> for String {
	fn from(value: GraphApiVersion) -> Self {
		value.raw
	}
}
impl TryFrom<String> for GraphApiVersion {
	type Error = GraphVersionError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		let (major, minor) = parse_view(&value)?;

		Ok(Self { raw: value, major, minor })
	}
}
impl FromStr for GraphApiVersion {
	type Err = GraphVersionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}
impl Debug for GraphApiVersion {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "GraphApiVersion({})", self.raw)
	}
}
impl Display for GraphApiVersion {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.raw)
	}
}

/// Error returned when version validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum GraphVersionError {
	/// The version string was empty.
	#[error("Graph API version cannot be empty.")]
	Empty,
	/// The version string does not match `v<major>.<minor>`.
	#[error("Graph API version `{value}` must match `v<major>.<minor>`.")]
	Malformed {
		/// Rejected version string.
		value: String,
	},
}

fn parse_view(view: &str) -> Result<(u32, u32), GraphVersionError> {
	if view.is_empty() {
		return Err(GraphVersionError::Empty);
	}

	let malformed = || GraphVersionError::Malformed { value: view.to_owned() };
	let digits = view.strip_prefix('v').ok_or_else(malformed)?;
	let (major, minor) = digits.split_once('.').ok_or_else(malformed)?;

	Ok((parse_component(major).ok_or_else(malformed)?, parse_component(minor).ok_or_else(malformed)?))
}

fn parse_component(view: &str) -> Option<u32> {
	if view.is_empty() || !view.bytes().all(|byte| byte.is_ascii_digit()) {
		return None;
	}

	view.parse().ok()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn well_formed_versions_are_accepted() {
		for raw in ["v0.0", "v2.7", "v2.10", "v13.37", "v02.3"] {
			let version =
				GraphApiVersion::new(raw).expect("Well-formed version should be accepted.");

			assert_eq!(version.as_str(), raw);
		}
	}

	#[test]
	fn malformed_versions_are_rejected() {
		assert_eq!(GraphApiVersion::new(""), Err(GraphVersionError::Empty));

		for raw in ["2.4", "v2", "v2.", "v.4", "vX.Y", "v2.4.1", "v 2.4", "v-1.0"] {
			assert!(
				matches!(GraphApiVersion::new(raw), Err(GraphVersionError::Malformed { .. })),
				"`{raw}` should be rejected as malformed.",
			);
		}
	}

	#[test]
	fn versions_compare_numerically() {
		let v2_7 = GraphApiVersion::new("v2.7").expect("Version fixture should parse.");
		let v2_8 = GraphApiVersion::new("v2.8").expect("Version fixture should parse.");
		let v2_10 = GraphApiVersion::new("v2.10").expect("Version fixture should parse.");

		assert!(v2_7 < v2_8);
		assert!(v2_8 < v2_10);
		assert!(v2_7.precedes(2, 8));
		assert!(!v2_8.precedes(2, 8));
		assert!(!v2_10.precedes(2, 8));
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let version: GraphApiVersion =
			serde_json::from_str("\"v7.0\"").expect("Version should deserialize successfully.");

		assert_eq!(version.as_str(), "v7.0");
		assert_eq!(
			serde_json::to_string(&version).expect("Version should serialize successfully."),
			"\"v7.0\"",
		);
		assert!(serde_json::from_str::<GraphApiVersion>("\"7.0\"").is_err());
	}
}
