//! Login exchange and the double-checked refresh protocol.

mod metrics;

pub use metrics::*;

// std
use std::time::Duration as StdDuration;
// crates.io
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
// self
use crate::{
	_prelude::*,
	auth::{Credentials, Token, TokenResponse},
	clock::Clock,
	error::{AuthError, AuthProtocolError, TransportError},
	http::HttpTransport,
	obs::{self, CallKind, CallOutcome, CallSpan},
	store::TokenStore,
};

/// Path of the credential exchange endpoint, appended verbatim to the base URL.
pub const LOGIN_PATH: &str = "/login/access-token";

/// Obtains, caches, and refreshes bearer tokens for one client instance.
///
/// The authenticator owns the credentials and is the only writer of its
/// [`TokenStore`]. Logins go through the plain (non-authenticating) transport.
pub struct Authenticator<T>
where
	T: ?Sized + HttpTransport,
{
	base_url: String,
	credentials: Credentials,
	transport: Arc<T>,
	clock: Arc<dyn Clock>,
	timeout: StdDuration,
	token_lifetime: Duration,
	store: TokenStore,
	metrics: LoginMetrics,
}
impl<T> Authenticator<T>
where
	T: ?Sized + HttpTransport,
{
	/// Creates an authenticator with an empty token cache.
	pub fn new(
		base_url: impl Into<String>,
		credentials: Credentials,
		transport: Arc<T>,
		clock: Arc<dyn Clock>,
	) -> Self {
		Self {
			base_url: base_url.into(),
			credentials,
			transport,
			clock,
			timeout: crate::config::DEFAULT_TIMEOUT,
			token_lifetime: crate::config::DEFAULT_TOKEN_LIFETIME,
			store: TokenStore::default(),
			metrics: LoginMetrics::default(),
		}
	}

	/// Overrides the timeout applied to login requests.
	pub fn with_timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = timeout;

		self
	}

	/// Overrides the validity assumed for tokens issued without `expires_in`.
	pub fn with_token_lifetime(mut self, lifetime: Duration) -> Self {
		self.token_lifetime = lifetime;

		self
	}

	/// Returns the token cache.
	pub fn store(&self) -> &TokenStore {
		&self.store
	}

	/// Returns the login exchange counters.
	pub fn metrics(&self) -> &LoginMetrics {
		&self.metrics
	}

	/// Returns a currently valid token, logging in only when none is cached or the cached
	/// one has expired.
	pub async fn token(&self) -> Result<Token> {
		let cached = self.store.snapshot().await;

		if let Some(token) = cached.filter(|token| token.is_valid_at(self.clock.now())) {
			return Ok(token);
		}

		self.refresh().await
	}

	/// Logs in under the exclusive lock.
	///
	/// A caller that waited for the lock while another refreshed receives that token
	/// without a second exchange.
	pub async fn refresh(&self) -> Result<Token> {
		let mut slot = self.store.lock_exclusive().await;

		if let Some(token) = slot.as_ref().filter(|token| token.is_valid_at(self.clock.now())) {
			self.metrics.record_reuse();
			obs::debug_token_reused();

			return Ok(token.clone());
		}

		let token = self.login().await?;

		*slot = Some(token.clone());

		Ok(token)
	}

	/// Drops the cached token; the next [`token`](Self::token) call logs in again.
	pub async fn invalidate(&self) {
		self.store.clear().await;
	}

	async fn login(&self) -> Result<Token> {
		const KIND: CallKind = CallKind::Login;

		let span = CallSpan::new(KIND, "login");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);
		self.metrics.record_attempt();

		let result = span.instrument(self.exchange()).await;

		obs::record_call_outcome(KIND, CallOutcome::of(&result));

		match &result {
			Ok(_) => self.metrics.record_success(),
			Err(_) => self.metrics.record_failure(),
		}

		Ok(result?)
	}

	async fn exchange(&self) -> Result<Token, AuthError> {
		let url = format!("{}{LOGIN_PATH}", self.base_url);
		let url = Url::parse(&url).map_err(|e| AuthError::Transport(TransportError::network(e)))?;
		let mut request = Request::new(Method::POST, url);
		let headers = request.headers_mut();

		headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/x-www-form-urlencoded"));
		headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
		*request.body_mut() = Some(self.credentials.form_body().into());
		*request.timeout_mut() = Some(self.timeout);

		let response = self.transport.send(request).await.map_err(AuthError::Transport)?;
		let status = response.status();

		if status != StatusCode::OK {
			return Err(AuthError::Rejected { status: status.as_u16() });
		}

		let body = response
			.bytes()
			.await
			.map_err(|e| AuthError::Transport(TransportError::from(e)))?;
		let mut de = serde_json::Deserializer::from_slice(&body);
		let payload: TokenResponse = serde_path_to_error::deserialize(&mut de)
			.map_err(|source| AuthProtocolError::Malformed { source })?;

		if payload.access_token.is_empty() {
			return Err(AuthProtocolError::EmptyAccessToken.into());
		}

		Ok(payload.into_token(self.clock.now(), self.token_lifetime)?)
	}
}
impl<T> Debug for Authenticator<T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Authenticator")
			.field("base_url", &self.base_url)
			.field("credentials", &self.credentials)
			.field("clock", &self.clock)
			.field("timeout", &self.timeout)
			.field("token_lifetime", &self.token_lifetime)
			.finish()
	}
}
