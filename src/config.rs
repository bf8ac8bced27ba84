//! Client configuration and its validating builder.

// std
use std::time::Duration as StdDuration;
// self
use crate::{_prelude::*, auth::Secret, error::ConfigError};

/// Per-request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: StdDuration = StdDuration::from_secs(30);
/// Assumed validity of a freshly issued token, one minute short of the service's hour.
pub const DEFAULT_TOKEN_LIFETIME: Duration = Duration::minutes(59);

/// Validated connection settings for a [`Client`](crate::client::Client).
#[derive(Clone, Debug)]
pub struct Config {
	/// Service base URL; paths are appended verbatim.
	pub base_url: String,
	/// Login username.
	pub username: String,
	/// Login password.
	pub password: Secret,
	/// Per-request timeout applied to every call unless overridden.
	pub timeout: StdDuration,
	/// Skip TLS certificate verification on the default HTTP client.
	pub insecure_https: bool,
	/// Validity assumed for tokens whose login response omits `expires_in`.
	pub token_lifetime: Duration,
}
impl Config {
	/// Returns a builder seeded with the service base URL.
	pub fn builder(base_url: impl Into<String>) -> ConfigBuilder {
		ConfigBuilder::new(base_url)
	}
}

/// Builder for [`Config`] values.
#[derive(Debug)]
pub struct ConfigBuilder {
	base_url: String,
	username: String,
	password: Secret,
	timeout: Option<StdDuration>,
	insecure_https: bool,
	token_lifetime: Duration,
}
impl ConfigBuilder {
	fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			username: String::new(),
			password: Secret::new(""),
			timeout: None,
			insecure_https: false,
			token_lifetime: DEFAULT_TOKEN_LIFETIME,
		}
	}

	/// Sets the login username.
	pub fn username(mut self, username: impl Into<String>) -> Self {
		self.username = username.into();

		self
	}

	/// Sets the login password.
	pub fn password(mut self, password: impl Into<String>) -> Self {
		self.password = Secret::new(password);

		self
	}

	/// Overrides the per-request timeout. A zero duration falls back to the default.
	pub fn timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Enables or disables TLS certificate verification on the default HTTP client.
	pub fn insecure_https(mut self, insecure: bool) -> Self {
		self.insecure_https = insecure;

		self
	}

	/// Overrides the validity assumed for tokens issued without `expires_in`.
	pub fn token_lifetime(mut self, lifetime: Duration) -> Self {
		self.token_lifetime = lifetime;

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<Config, ConfigError> {
		if self.base_url.is_empty() {
			return Err(ConfigError::MissingBaseUrl);
		}
		if self.username.is_empty() {
			return Err(ConfigError::MissingUsername);
		}
		if self.password.is_empty() {
			return Err(ConfigError::MissingPassword);
		}
		if let Err(source) = Url::parse(&self.base_url) {
			return Err(ConfigError::InvalidBaseUrl { url: self.base_url, source });
		}
		if !self.token_lifetime.is_positive() {
			return Err(ConfigError::NonPositiveTokenLifetime);
		}

		let timeout = self.timeout.filter(|value| !value.is_zero()).unwrap_or(DEFAULT_TIMEOUT);

		Ok(Config {
			base_url: self.base_url,
			username: self.username,
			password: self.password,
			timeout,
			insecure_https: self.insecure_https,
			token_lifetime: self.token_lifetime,
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn complete(base_url: &str) -> ConfigBuilder {
		Config::builder(base_url).username("admin").password("hunter2")
	}

	#[test]
	fn build_applies_defaults() {
		let config = complete("https://kuma.example.com/api")
			.build()
			.expect("Complete configuration should build.");

		assert_eq!(config.base_url, "https://kuma.example.com/api");
		assert_eq!(config.timeout, DEFAULT_TIMEOUT);
		assert_eq!(config.token_lifetime, Duration::minutes(59));
		assert!(!config.insecure_https);

		let zero = complete("https://kuma.example.com")
			.timeout(StdDuration::ZERO)
			.build()
			.expect("Zero timeout should fall back to the default.");

		assert_eq!(zero.timeout, DEFAULT_TIMEOUT);
	}

	#[test]
	fn build_rejects_missing_fields() {
		assert!(matches!(
			Config::builder("").username("u").password("p").build(),
			Err(ConfigError::MissingBaseUrl)
		));
		assert!(matches!(
			Config::builder("http://localhost").password("p").build(),
			Err(ConfigError::MissingUsername)
		));
		assert!(matches!(
			Config::builder("http://localhost").username("u").build(),
			Err(ConfigError::MissingPassword)
		));
		assert!(matches!(
			complete("not a url").build(),
			Err(ConfigError::InvalidBaseUrl { .. })
		));
		assert!(matches!(
			complete("http://localhost").token_lifetime(Duration::ZERO).build(),
			Err(ConfigError::NonPositiveTokenLifetime)
		));
	}

	#[test]
	fn base_url_is_kept_verbatim() {
		let config = complete("http://localhost:8000/")
			.build()
			.expect("Trailing slash should not be rejected.");

		assert_eq!(config.base_url, "http://localhost:8000/");
	}

	#[test]
	fn debug_redacts_password() {
		let config = complete("http://localhost").build().expect("Configuration should build.");
		let rendered = format!("{config:?}");

		assert!(!rendered.contains("hunter2"));
		assert!(rendered.contains("<redacted>"));
	}
}
