//! Credentials, bearer tokens, and the login exchange that keeps them fresh.

pub mod login;
pub mod secret;
pub mod token;

pub use login::*;
pub use secret::*;
pub use token::*;

// self
use crate::_prelude::*;

/// Username/password pair exchanged for bearer tokens; immutable once the client is built.
#[derive(Clone, Debug)]
pub struct Credentials {
	/// Login username.
	pub username: String,
	/// Login password.
	pub password: Secret,
}
impl Credentials {
	/// Wraps a username/password pair.
	pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
		Self { username: username.into(), password: Secret::new(password) }
	}

	/// Encodes the pair as the `application/x-www-form-urlencoded` login body.
	pub fn form_body(&self) -> String {
		url::form_urlencoded::Serializer::new(String::new())
			.append_pair("username", &self.username)
			.append_pair("password", self.password.expose())
			.finish()
	}
}
