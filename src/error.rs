//! Client-level error types shared by the authenticator, transports, and request engine.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
///
/// Nothing inside the client retries; every variant reaches the immediate caller with
/// the status code and/or raw body needed to diagnose it.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Login exchange failed; no resource request was sent.
	#[error(transparent)]
	Auth(#[from] AuthError),
	/// Transport failure (DNS, TCP, TLS, timeout) on a resource call.
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Request body could not be serialized; no network call was attempted.
	#[error("Failed to marshal request body.")]
	Marshal {
		/// Underlying serializer failure.
		#[source]
		source: serde_json::Error,
	},
	/// Base URL and path did not form a valid URL.
	#[error("Request URL `{url}` is invalid.")]
	InvalidUrl {
		/// Concatenated URL that failed to parse.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Service answered with a status outside `200..300`.
	#[error("Request failed with status {status}: {body}")]
	Api {
		/// HTTP status code returned by the service.
		status: u16,
		/// Raw response body, lossily decoded as UTF-8.
		body: String,
	},
	/// Successful response whose body could not be read while a decoded result was requested.
	#[error("Failed to decode response body due to read error.")]
	BodyRead {
		/// Transport failure raised while reading the body.
		#[source]
		source: TransportError,
	},
	/// Response body did not match the expected result shape.
	#[error("Failed to decode response body: {source} (body: {body})")]
	Decode {
		/// Path-aware decoding failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// Raw response body, lossily decoded as UTF-8.
		body: String,
	},
	/// Caller cancelled the call before it completed.
	#[error("Request was cancelled.")]
	Cancelled,
}
impl Error {
	/// Returns the HTTP status code carried by the error, if any.
	///
	/// Covers both resource calls ([`Error::Api`]) and rejected logins.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Api { status, .. } => Some(*status),
			Self::Auth(AuthError::Rejected { status }) => Some(*status),
			_ => None,
		}
	}

	/// Returns `true` when a resource call answered `404 Not Found`.
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::Api { status: 404, .. })
	}
}

/// Configuration and validation failures raised while constructing a client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Base URL was empty.
	#[error("Base URL is required.")]
	MissingBaseUrl,
	/// Username was empty.
	#[error("Username is required.")]
	MissingUsername,
	/// Password was empty.
	#[error("Password is required.")]
	MissingPassword,
	/// Base URL cannot be parsed.
	#[error("Base URL `{url}` is invalid.")]
	InvalidBaseUrl {
		/// Offending base URL.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Token lifetime must leave a positive validity window.
	#[error("Token lifetime must be positive.")]
	NonPositiveTokenLifetime,
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Login exchange failures. None of them are cached; the next call logs in again.
#[derive(Debug, ThisError)]
pub enum AuthError {
	/// Network failure while exchanging credentials.
	#[error("Network error occurred while calling the login endpoint.")]
	Transport(#[source] TransportError),
	/// Login endpoint answered with a non-success status.
	#[error("Authentication failed with status code: {status}.")]
	Rejected {
		/// HTTP status code returned by the login endpoint.
		status: u16,
	},
	/// Login endpoint answered successfully but with an unusable payload.
	#[error(transparent)]
	Protocol(#[from] AuthProtocolError),
}

/// Malformed login responses.
#[derive(Debug, ThisError)]
pub enum AuthProtocolError {
	/// Login response was not the expected JSON document.
	#[error("Login endpoint returned malformed JSON.")]
	Malformed {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Login response carried an empty `access_token`.
	#[error("Received empty access token.")]
	EmptyAccessToken,
	/// Announced `expires_in` puts the expiry instant outside the supported date range.
	#[error("Token lifetime {lifetime} cannot be represented as an expiry instant.")]
	ExpiryOutOfRange {
		/// Lifetime derived from the login response.
		lifetime: Duration,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while executing the request.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Request body is a stream and cannot be cloned before auth injection.
	#[error("Request cannot be cloned for authentication.")]
	UnclonableRequest,
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
