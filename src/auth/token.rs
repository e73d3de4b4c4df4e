//! Redacting wrappers for the bearer token and application secret.

// self
use crate::_prelude::*;

macro_rules! def_secret {
	($name:ident, $doc:literal) => {
		#[doc = $doc]
		#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
		pub struct $name(String);
		impl $name {
			/// Wraps a new secret string.
			pub fn new(value: impl Into<String>) -> Self {
				Self(value.into())
			}

			/// Returns the inner value. Callers must avoid logging this string.
			pub fn expose(&self) -> &str {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				self.expose()
			}
		}
		impl From<String> for $name {
			fn from(value: String) -> Self {
				Self(value)
			}
		}
		impl From<&str> for $name {
			fn from(value: &str) -> Self {
				Self(value.to_owned())
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.debug_tuple(stringify!($name)).field(&"<redacted>").finish()
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str("<redacted>")
			}
		}
	};
}

def_secret! { AccessToken, "Opaque bearer token issued by the Graph token endpoint." }
def_secret! { AppSecret, "Application secret used to derive `appsecret_proof`." }

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn secret_formatters_redact() {
		let token = AccessToken::new("foo_token");
		let secret = AppSecret::new("foo_secret");

		assert_eq!(format!("{token:?}"), "AccessToken(\"<redacted>\")");
		assert_eq!(format!("{token}"), "<redacted>");
		assert_eq!(format!("{secret:?}"), "AppSecret(\"<redacted>\")");
		assert_eq!(token.expose(), "foo_token");
		assert_eq!(secret.expose(), "foo_secret");
	}
}
