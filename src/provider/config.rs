//! Immutable adapter configuration assembled from the host's options map.

// self
use crate::{
	_prelude::*,
	auth::AppSecret,
	error::ConfigError,
	provider::{GraphApiVersion, fields},
};

/// Scopes requested when the host application does not ask for any.
pub const DEFAULT_SCOPES: [&str; 2] = ["public_profile", "email"];
/// Character used to join scopes in the authorization request.
pub const SCOPE_SEPARATOR: char = ',';

/// Immutable provider configuration consumed by the endpoint resolver.
///
/// Constructed through [`ProviderConfigBuilder`] or [`ProviderOptions`]; construction fails
/// when the Graph API version is missing or malformed, and no partial value is produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
	graph_api_version: GraphApiVersion,
	client_secret: AppSecret,
	beta_tier: bool,
	fields: Vec<String>,
}
impl ProviderConfig {
	/// Creates a new builder.
	pub fn builder() -> ProviderConfigBuilder {
		ProviderConfigBuilder::default()
	}

	/// Returns the validated Graph API version.
	pub fn graph_api_version(&self) -> &GraphApiVersion {
		&self.graph_api_version
	}

	/// Returns the application secret keying `appsecret_proof`.
	pub fn client_secret(&self) -> &AppSecret {
		&self.client_secret
	}

	/// Returns true when requests target the beta tier hosts.
	pub fn beta_tier_enabled(&self) -> bool {
		self.beta_tier
	}

	/// Returns the ordered `/me` field selection.
	pub fn fields(&self) -> &[String] {
		&self.fields
	}

	/// Returns the scopes requested when the host supplies none.
	pub fn default_scopes(&self) -> &'static [&'static str] {
		&DEFAULT_SCOPES
	}

	/// Returns the character joining scopes in authorization requests.
	pub fn scope_separator(&self) -> char {
		SCOPE_SEPARATOR
	}
}

/// Builder for [`ProviderConfig`] values.
#[derive(Debug, Default)]
pub struct ProviderConfigBuilder {
	graph_api_version: Option<String>,
	client_secret: Option<AppSecret>,
	beta_tier: bool,
	fields: Option<Vec<String>>,
}
impl ProviderConfigBuilder {
	/// Sets the Graph API version (required, `v<major>.<minor>`).
	pub fn graph_api_version(mut self, version: impl Into<String>) -> Self {
		self.graph_api_version = Some(version.into());

		self
	}

	/// Sets the application secret.
	pub fn client_secret(mut self, secret: impl Into<AppSecret>) -> Self {
		self.client_secret = Some(secret.into());

		self
	}

	/// Targets the beta tier hosts instead of production.
	pub fn enable_beta_tier(mut self, enabled: bool) -> Self {
		self.beta_tier = enabled;

		self
	}

	/// Overrides the default `/me` field selection.
	pub fn fields<I, T>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<String>,
	{
		self.fields = Some(fields.into_iter().map(Into::into).collect());

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ProviderConfig, ConfigError> {
		let raw_version = self.graph_api_version.ok_or(ConfigError::MissingGraphVersion)?;
		let graph_api_version = GraphApiVersion::new(raw_version)?;
		let fields =
			self.fields.unwrap_or_else(|| fields::default_fields(&graph_api_version));

		Ok(ProviderConfig {
			graph_api_version,
			client_secret: self.client_secret.unwrap_or_default(),
			beta_tier: self.beta_tier,
			fields,
		})
	}
}

/// Wire form of the configuration map handed over by the host application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderOptions {
	/// Graph API version to use for requests (required, `v<major>.<minor>`).
	pub graph_api_version: Option<String>,
	/// Application secret keying `appsecret_proof`.
	pub client_secret: Option<String>,
	/// Targets the beta tier hosts when true.
	pub enable_beta_tier: bool,
	/// Optional override for the `/me` field selection.
	pub fields: Option<Vec<String>>,
}
impl ProviderOptions {
	/// Validates the options into an immutable [`ProviderConfig`].
	pub fn into_config(self) -> Result<ProviderConfig, ConfigError> {
		let mut builder = ProviderConfig::builder().enable_beta_tier(self.enable_beta_tier);

		if let Some(version) = self.graph_api_version {
			builder = builder.graph_api_version(version);
		}
		if let Some(secret) = self.client_secret {
			builder = builder.client_secret(secret);
		}
		if let Some(fields) = self.fields {
			builder = builder.fields(fields);
		}

		builder.build()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn missing_version_fails_construction() {
		let err = ProviderConfig::builder()
			.client_secret("mock_secret")
			.build()
			.expect_err("Builder should reject a missing Graph API version.");

		assert!(matches!(err, ConfigError::MissingGraphVersion));
	}

	#[test]
	fn malformed_version_fails_construction() {
		let err = ProviderConfig::builder()
			.graph_api_version("2.4")
			.build()
			.expect_err("Builder should reject a malformed Graph API version.");

		assert!(matches!(err, ConfigError::InvalidGraphVersion(_)));
	}

	#[test]
	fn defaults_follow_the_configured_version() {
		let config = ProviderConfig::builder()
			.graph_api_version("v2.7")
			.client_secret("mock_secret")
			.build()
			.expect("Builder should accept a well-formed version.");

		assert!(!config.beta_tier_enabled());
		assert!(config.fields().iter().any(|field| field == "bio"));
		assert_eq!(config.default_scopes(), ["public_profile", "email"]);
		assert_eq!(config.scope_separator(), ',');
	}

	#[test]
	fn field_overrides_are_kept_verbatim() {
		let config = ProviderConfig::builder()
			.graph_api_version("v7.0")
			.fields(["id", "name", "email"])
			.build()
			.expect("Builder should accept a field override.");

		assert_eq!(config.fields(), ["id", "name", "email"]);
	}

	#[test]
	fn options_map_validates_like_the_builder() {
		let options: ProviderOptions = serde_json::from_value(serde_json::json!({
			"graph_api_version": "v7.0",
			"client_secret": "mock_secret",
			"enable_beta_tier": true,
		}))
		.expect("Options map should deserialize.");
		let config = options.into_config().expect("Options map should validate.");

		assert!(config.beta_tier_enabled());
		assert_eq!(config.graph_api_version().as_str(), "v7.0");
		assert_eq!(config.client_secret().expose(), "mock_secret");

		let err = ProviderOptions::default()
			.into_config()
			.expect_err("Options without a version should fail validation.");

		assert!(matches!(err, ConfigError::MissingGraphVersion));
	}
}
