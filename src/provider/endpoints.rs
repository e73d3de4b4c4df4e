//! Endpoint resolution for the Graph authorization, token, and `/me` lookups.

// crates.io
use hmac::{Hmac, Mac};
use sha2::Sha256;
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	error::ConfigError,
	obs::{self, EndpointKind},
	provider::{GrantType, ProviderConfig, fields},
};

type HmacSha256 = Hmac<Sha256>;

const PRODUCTION_WWW_BASE: &str = "https://www.facebook.com";
const BETA_WWW_BASE: &str = "https://www.beta.facebook.com";
const PRODUCTION_GRAPH_BASE: &str = "https://graph.facebook.com";
const BETA_GRAPH_BASE: &str = "https://graph.beta.facebook.com";

/// Resolves the URLs the OAuth engine calls for a configured Graph tier and version.
///
/// Stateless between calls; every method is a pure function of the configuration and its
/// arguments, so a resolver can be shared across threads freely.
#[derive(Clone, Debug)]
pub struct EndpointResolver {
	config: ProviderConfig,
}
impl EndpointResolver {
	/// Creates a resolver over a validated configuration.
	pub fn new(config: ProviderConfig) -> Self {
		Self { config }
	}

	/// Returns the configuration backing this resolver.
	pub fn config(&self) -> &ProviderConfig {
		&self.config
	}

	/// Resolves the authorization dialog URL.
	pub fn authorization_url(&self) -> Result<Url, ConfigError> {
		self.resolve(EndpointKind::Authorize, self.www_base(), "dialog/oauth", None)
	}

	/// Resolves the token endpoint URL.
	pub fn access_token_url(&self) -> Result<Url, ConfigError> {
		self.resolve(EndpointKind::Token, self.graph_base(), "oauth/access_token", None)
	}

	/// Resolves the `/me` lookup URL for an issued token.
	///
	/// The query carries the configured field selection, the bearer token, and a fresh
	/// `appsecret_proof` binding the request to possession of the client secret.
	pub fn resource_owner_url(&self, token: &AccessToken) -> Result<Url, ConfigError> {
		let query = format!(
			"fields={}&access_token={}&appsecret_proof={}",
			fields::join_fields(self.config.fields()),
			token.expose(),
			self.appsecret_proof(token),
		);

		self.resolve(EndpointKind::ResourceOwner, self.graph_base(), "me", Some(query))
	}

	/// Computes the lowercase hex HMAC-SHA256 of the token keyed by the client secret.
	///
	/// Recomputed per call since the token value varies.
	pub fn appsecret_proof(&self, token: &AccessToken) -> String {
		let mut mac = HmacSha256::new_from_slice(self.config.client_secret().expose().as_bytes())
			.expect("HMAC can take key of any size");

		mac.update(token.expose().as_bytes());

		hex::encode(mac.finalize().into_bytes())
	}

	/// Builds the parameters for exchanging a short-lived token for a long-lived one.
	pub fn long_lived_exchange_params(
		&self,
		short_lived_token: &AccessToken,
	) -> BTreeMap<String, String> {
		BTreeMap::from_iter([
			("grant_type".to_owned(), GrantType::FbExchangeToken.as_str().to_owned()),
			(
				GrantType::FbExchangeToken.as_str().to_owned(),
				short_lived_token.expose().to_owned(),
			),
		])
	}

	/// Refresh grant guard; the Graph token endpoint has no refresh-token grant.
	pub fn refresh_exchange_params(&self) -> Result<BTreeMap<String, String>> {
		Err(self.unsupported_refresh())
	}

	/// Validates a token request before it is delegated to the OAuth engine.
	///
	/// Rejects the refresh grant as well as any request smuggling a `refresh_token`
	/// parameter under another grant.
	pub fn guard_token_request(
		&self,
		grant: GrantType,
		params: &BTreeMap<String, String>,
	) -> Result<()> {
		if !grant.is_supported() || params.contains_key(GrantType::RefreshToken.as_str()) {
			return Err(self.unsupported_refresh());
		}

		Ok(())
	}

	fn unsupported_refresh(&self) -> Error {
		let grant = GrantType::RefreshToken.as_str();

		obs::unsupported_grant(grant);

		Error::UnsupportedGrant { grant }
	}

	fn www_base(&self) -> &'static str {
		if self.config.beta_tier_enabled() { BETA_WWW_BASE } else { PRODUCTION_WWW_BASE }
	}

	fn graph_base(&self) -> &'static str {
		if self.config.beta_tier_enabled() { BETA_GRAPH_BASE } else { PRODUCTION_GRAPH_BASE }
	}

	fn resolve(
		&self,
		kind: EndpointKind,
		base: &str,
		path: &str,
		query: Option<String>,
	) -> Result<Url, ConfigError> {
		let rendered = format!("{base}/{}/{path}", self.config.graph_api_version());
		let mut url = Url::parse(&rendered)
			.map_err(|source| ConfigError::InvalidEndpoint { endpoint: kind.as_str(), source })?;

		if let Some(query) = query {
			url.set_query(Some(&query));
		}

		obs::endpoint_resolved(kind, &url);

		Ok(url)
	}
}
