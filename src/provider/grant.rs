//! Grant labels the Graph token endpoint understands—and the one it never offers.

// self
use crate::_prelude::*;

/// Grant variants relevant when talking to the Graph token endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Authorization Code grant driven by the external OAuth engine.
	AuthorizationCode,
	/// Facebook's long-lived token exchange grant.
	FbExchangeToken,
	/// Refresh Token grant; Graph has no refresh-token support.
	RefreshToken,
}
impl GrantType {
	/// Returns the wire identifier for the grant type.
	pub const fn as_str(self) -> &'static str {
		match self {
			GrantType::AuthorizationCode => "authorization_code",
			GrantType::FbExchangeToken => "fb_exchange_token",
			GrantType::RefreshToken => "refresh_token",
		}
	}

	/// Returns true when the Graph token endpoint offers the grant.
	pub const fn is_supported(self) -> bool {
		!matches!(self, GrantType::RefreshToken)
	}

	/// Returns the parameters a token request for the grant must carry.
	pub const fn required_params(self) -> &'static [&'static str] {
		match self {
			GrantType::AuthorizationCode => &["code"],
			GrantType::FbExchangeToken => &["fb_exchange_token"],
			GrantType::RefreshToken => &[],
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn grant_labels_and_support_flags() {
		assert_eq!(GrantType::AuthorizationCode.as_str(), "authorization_code");
		assert_eq!(GrantType::FbExchangeToken.as_str(), "fb_exchange_token");
		assert_eq!(GrantType::RefreshToken.as_str(), "refresh_token");
		assert!(GrantType::AuthorizationCode.is_supported());
		assert!(GrantType::FbExchangeToken.is_supported());
		assert!(!GrantType::RefreshToken.is_supported());
	}

	#[test]
	fn long_lived_exchange_requires_only_its_own_token() {
		assert_eq!(GrantType::FbExchangeToken.required_params(), ["fb_exchange_token"]);
	}
}
