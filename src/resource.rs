//! Resource-owner normalization over raw `/me` payloads.

// self
use crate::_prelude::*;

/// Flattened, read-only view over the `/me` response.
///
/// Every key of the raw payload is kept verbatim; up to three convenience keys
/// (`picture_url`, `is_silhouette`, `cover_photo_url`) are synthesized once at
/// construction from the nested `picture` and `cover` nodes. Accessors return `None`
/// instead of failing when a key is missing, since the payload is only as complete as the
/// permissions the user granted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
	from = "serde_json::Map<String, serde_json::Value>",
	into = "serde_json::Map<String, serde_json::Value>"
)]
pub struct GraphUser {
	data: JsonMap<String, JsonValue>,
}
impl GraphUser {
	/// Builds the view, synthesizing the convenience keys when their sources are present.
	///
	/// `is_silhouette` is copied on key presence, not truthiness; an explicit `false` is
	/// preserved and observably distinct from an absent flag.
	pub fn new(response: JsonMap<String, JsonValue>) -> Self {
		let mut data = response;
		let picture_url = data
			.get("picture")
			.and_then(|picture| picture.get("data"))
			.and_then(|node| node.get("url"))
			.and_then(JsonValue::as_str)
			.filter(|url| !url.is_empty())
			.map(str::to_owned);
		let is_silhouette = data
			.get("picture")
			.and_then(|picture| picture.get("data"))
			.and_then(|node| node.get("is_silhouette"))
			.cloned();
		let cover_photo_url = data
			.get("cover")
			.and_then(|cover| cover.get("source"))
			.and_then(JsonValue::as_str)
			.filter(|url| !url.is_empty())
			.map(str::to_owned);

		if let Some(url) = picture_url {
			data.insert("picture_url".into(), JsonValue::String(url));
		}
		if let Some(flag) = is_silhouette {
			data.insert("is_silhouette".into(), flag);
		}
		if let Some(url) = cover_photo_url {
			data.insert("cover_photo_url".into(), JsonValue::String(url));
		}

		Self { data }
	}

	/// Returns the user ID, rendering numeric IDs as strings.
	pub fn id(&self) -> Option<String> {
		match self.field("id")? {
			JsonValue::String(value) => Some(value.clone()),
			JsonValue::Number(value) => Some(value.to_string()),
			_ => None,
		}
	}

	/// Returns the full name.
	pub fn name(&self) -> Option<&str> {
		self.str_field("name")
	}

	/// Returns the first name.
	pub fn first_name(&self) -> Option<&str> {
		self.str_field("first_name")
	}

	/// Returns the last name.
	pub fn last_name(&self) -> Option<&str> {
		self.str_field("last_name")
	}

	/// Returns the email address.
	pub fn email(&self) -> Option<&str> {
		self.str_field("email")
	}

	/// Returns the hometown node; only served when the `user_hometown` permission was
	/// granted.
	pub fn hometown(&self) -> Option<&JsonMap<String, JsonValue>> {
		self.field("hometown").and_then(JsonValue::as_object)
	}

	/// Returns the "about me" bio.
	///
	/// Graph stopped serving this field with v2.8.
	pub fn bio(&self) -> Option<&str> {
		self.str_field("bio")
	}

	/// Returns the gender.
	pub fn gender(&self) -> Option<&str> {
		self.str_field("gender")
	}

	/// Returns the locale. Deprecated upstream.
	pub fn locale(&self) -> Option<&str> {
		self.str_field("locale")
	}

	/// Returns the profile link URL.
	pub fn link(&self) -> Option<&str> {
		self.str_field("link")
	}

	/// Returns the timezone offset from UTC. Deprecated upstream.
	pub fn timezone(&self) -> Option<f64> {
		match self.field("timezone")? {
			JsonValue::Number(value) => value.as_f64(),
			JsonValue::String(value) => value.parse().ok(),
			_ => None,
		}
	}

	/// Returns the synthesized profile picture URL.
	pub fn picture_url(&self) -> Option<&str> {
		self.str_field("picture_url")
	}

	/// Returns the synthesized cover photo URL.
	pub fn cover_photo_url(&self) -> Option<&str> {
		self.str_field("cover_photo_url")
	}

	/// Returns the silhouette flag when the payload carried one.
	pub fn is_silhouette(&self) -> Option<bool> {
		self.field("is_silhouette").and_then(JsonValue::as_bool)
	}

	/// Returns true when the user still has the default silhouette avatar.
	pub fn is_default_picture(&self) -> bool {
		self.is_silhouette().unwrap_or(false)
	}

	/// Returns the lower bound of the user's age range.
	pub fn min_age(&self) -> Option<u64> {
		self.age_bound("min")
	}

	/// Returns the upper bound of the user's age range.
	pub fn max_age(&self) -> Option<u64> {
		self.age_bound("max")
	}

	/// Returns the complete backing store, synthesized keys included.
	pub fn as_map(&self) -> &JsonMap<String, JsonValue> {
		&self.data
	}

	/// Consumes the view, yielding the backing store.
	pub fn into_map(self) -> JsonMap<String, JsonValue> {
		self.data
	}

	fn age_bound(&self, bound: &str) -> Option<u64> {
		self.field("age_range").and_then(|range| range.get(bound)).and_then(JsonValue::as_u64)
	}

	fn field(&self, key: &str) -> Option<&JsonValue> {
		self.data.get(key)
	}

	fn str_field(&self, key: &str) -> Option<&str> {
		self.field(key).and_then(JsonValue::as_str)
	}
}
impl From<JsonMap<String, JsonValue>> for GraphUser {
	fn from(response: JsonMap<String, JsonValue>) -> Self {
		Self::new(response)
	}
}
impl From<GraphUser> for JsonMap<String, JsonValue> {
	fn from(user: GraphUser) -> Self {
		user.data
	}
}
