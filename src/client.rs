//! Generic request engine shared by every resource operation.

pub mod response;

pub use response::*;

// std
use std::time::Duration as StdDuration;
// crates.io
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use tokio_util::sync::CancellationToken;
// self
use crate::{
	_prelude::*,
	auth::{Authenticator, Credentials},
	clock::{Clock, SystemClock},
	config::Config,
	error::TransportError,
	http::{AuthTransport, HttpTransport, ReqwestHttpClient},
	obs::{self, CallKind, CallOutcome, CallSpan},
};

/// Per-call overrides for timeout and cancellation.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
	/// Replaces the configured timeout for this call.
	pub timeout: Option<StdDuration>,
	/// Aborts the call (and any login it triggered) once cancelled.
	pub cancellation: Option<CancellationToken>,
}
impl RequestOptions {
	/// Overrides the timeout for this call.
	pub fn with_timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Ties the call to `token`; cancelling it yields [`Error::Cancelled`].
	pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
		self.cancellation = Some(token);

		self
	}
}

/// Authenticated client for the Uptime Kuma REST API.
///
/// Cloning is cheap and clones share one token cache and connection pool, so a client can
/// be handed to many concurrent tasks. Separate [`Client::new`] calls stay fully
/// independent.
pub struct Client<T = ReqwestHttpClient>
where
	T: ?Sized + HttpTransport,
{
	config: Arc<Config>,
	transport: Arc<T>,
	auth: AuthTransport<T>,
}
impl Client<ReqwestHttpClient> {
	/// Creates a client backed by a reqwest transport built from `config`.
	pub fn new(config: Config) -> Result<Self> {
		let http_client = ReqwestHttpClient::from_config(&config)?;

		Ok(Self::with_http_client(config, http_client))
	}
}
impl<T> Client<T>
where
	T: ?Sized + HttpTransport,
{
	/// Creates a client that sends every request (login included) through `transport`.
	pub fn with_http_client(config: Config, transport: impl Into<Arc<T>>) -> Self {
		Self::assemble(Arc::new(config), transport.into(), Arc::new(SystemClock))
	}

	/// Replaces the clock used for token expiry. Drops any cached token.
	pub fn with_clock(self, clock: Arc<dyn Clock>) -> Self {
		Self::assemble(self.config, self.transport, clock)
	}

	fn assemble(config: Arc<Config>, transport: Arc<T>, clock: Arc<dyn Clock>) -> Self {
		let credentials = Credentials {
			username: config.username.clone(),
			password: config.password.clone(),
		};
		let authenticator =
			Authenticator::new(config.base_url.clone(), credentials, transport.clone(), clock)
				.with_timeout(config.timeout)
				.with_token_lifetime(config.token_lifetime);
		let auth = AuthTransport::new(transport.clone(), Arc::new(authenticator));

		Self { config, transport, auth }
	}

	/// Returns the validated configuration.
	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Returns the authenticator that owns the token cache.
	pub fn authenticator(&self) -> &Arc<Authenticator<T>> {
		self.auth.authenticator()
	}

	/// Issues a request and classifies the response without decoding it.
	///
	/// Steps: serialize `body` (failing locally on error), append `path` verbatim to the
	/// base URL, set `Accept` (and `Content-Type` when a body is present), send through the
	/// auth-injecting transport, read the whole body, and reject statuses outside
	/// `200..300` with the raw body attached.
	pub async fn execute_raw<B>(
		&self,
		method: Method,
		path: &str,
		body: Option<&B>,
		options: &RequestOptions,
	) -> Result<ResponseEnvelope>
	where
		B: ?Sized + Serialize,
	{
		const KIND: CallKind = CallKind::Request;

		let span = CallSpan::request("execute", &method, path);

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let request = self.build_request(method, path, body, options)?;
		let call = span.instrument(self.round_trip(request));
		let result = match &options.cancellation {
			Some(token) => tokio::select! {
				biased;
				_ = token.cancelled() => Err(Error::Cancelled),
				result = call => result,
			},
			None => call.await,
		}
		.and_then(ResponseEnvelope::ensure_success);

		obs::record_call_outcome(KIND, CallOutcome::of(&result));

		result
	}

	/// Issues a request and decodes the successful response body into `R`.
	pub async fn execute<B, R>(
		&self,
		method: Method,
		path: &str,
		body: Option<&B>,
		options: &RequestOptions,
	) -> Result<R>
	where
		B: ?Sized + Serialize,
		R: DeserializeOwned,
	{
		self.execute_raw(method, path, body, options).await?.decode()
	}

	/// Performs a `GET` and decodes the result.
	pub async fn get<R>(&self, path: &str) -> Result<R>
	where
		R: DeserializeOwned,
	{
		self.execute(Method::GET, path, None::<&()>, &RequestOptions::default()).await
	}

	/// Performs a `POST` with a JSON body and decodes the result.
	pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
	where
		B: ?Sized + Serialize,
		R: DeserializeOwned,
	{
		self.execute(Method::POST, path, Some(body), &RequestOptions::default()).await
	}

	/// Performs a `PUT` with a JSON body and decodes the result.
	pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R>
	where
		B: ?Sized + Serialize,
		R: DeserializeOwned,
	{
		self.execute(Method::PUT, path, Some(body), &RequestOptions::default()).await
	}

	/// Performs a `PATCH` with a JSON body and decodes the result.
	pub async fn patch<B, R>(&self, path: &str, body: &B) -> Result<R>
	where
		B: ?Sized + Serialize,
		R: DeserializeOwned,
	{
		self.execute(Method::PATCH, path, Some(body), &RequestOptions::default()).await
	}

	/// Performs a `DELETE` and decodes the result.
	pub async fn delete<R>(&self, path: &str) -> Result<R>
	where
		R: DeserializeOwned,
	{
		self.execute(Method::DELETE, path, None::<&()>, &RequestOptions::default()).await
	}

	/// Issues a request whose response body is not needed; only the status is checked.
	pub async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<()>
	where
		B: ?Sized + Serialize,
	{
		self.execute_raw(method, path, body, &RequestOptions::default()).await.map(drop)
	}

	fn build_request<B>(
		&self,
		method: Method,
		path: &str,
		body: Option<&B>,
		options: &RequestOptions,
	) -> Result<Request>
	where
		B: ?Sized + Serialize,
	{
		let payload = body
			.map(serde_json::to_vec)
			.transpose()
			.map_err(|source| Error::Marshal { source })?;
		let url = format!("{}{path}", self.config.base_url);
		let url = match Url::parse(&url) {
			Ok(parsed) => parsed,
			Err(source) => return Err(Error::InvalidUrl { url, source }),
		};
		let mut request = Request::new(method, url);

		request.headers_mut().insert(ACCEPT, HeaderValue::from_static("application/json"));

		if let Some(payload) = payload {
			request.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
			*request.body_mut() = Some(payload.into());
		}

		*request.timeout_mut() = Some(options.timeout.unwrap_or(self.config.timeout));

		Ok(request)
	}

	async fn round_trip(&self, request: Request) -> Result<ResponseEnvelope> {
		let response = self.auth.execute(&request).await?;
		let status = response.status();
		let (body, read_error) = match response.bytes().await {
			Ok(bytes) => (bytes.to_vec(), None),
			Err(e) => {
				let err = TransportError::from(e);

				obs::warn_body_read_failure(status, &err);

				(Vec::new(), Some(err))
			},
		};

		Ok(ResponseEnvelope { status, body, read_error })
	}
}
impl<T> Clone for Client<T>
where
	T: ?Sized + HttpTransport,
{
	fn clone(&self) -> Self {
		Self {
			config: Arc::clone(&self.config),
			transport: Arc::clone(&self.transport),
			auth: self.auth.clone(),
		}
	}
}
impl<T> Debug for Client<T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("config", &self.config)
			.field("authenticator", self.authenticator())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn client(base_url: &str) -> Client {
		Client::new(
			Config::builder(base_url)
				.username("u")
				.password("p")
				.build()
				.expect("Configuration fixture should build."),
		)
		.expect("Client fixture should build.")
	}

	#[test]
	fn build_request_sets_headers_and_body() {
		let client = client("http://localhost:3001/api");
		let request = client
			.build_request(
				Method::POST,
				"/tags",
				Some(&serde_json::json!({ "name": "testing" })),
				&RequestOptions::default(),
			)
			.expect("Request with a JSON body should build.");

		assert_eq!(request.url().as_str(), "http://localhost:3001/api/tags");
		assert_eq!(request.headers()[ACCEPT], "application/json");
		assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
		assert_eq!(
			request.body().and_then(|body| body.as_bytes()),
			Some(&b"{\"name\":\"testing\"}"[..])
		);
		assert_eq!(request.timeout(), Some(&crate::config::DEFAULT_TIMEOUT));
	}

	#[test]
	fn build_request_without_body_omits_content_type() {
		let client = client("http://localhost:3001");
		let options = RequestOptions::default().with_timeout(StdDuration::from_secs(2));
		let request = client
			.build_request(Method::GET, "/monitors/7", None::<&()>, &options)
			.expect("Bodyless request should build.");

		assert!(request.headers().get(CONTENT_TYPE).is_none());
		assert!(request.body().is_none());
		assert_eq!(request.timeout(), Some(&StdDuration::from_secs(2)));
	}

	#[test]
	fn build_request_appends_path_verbatim() {
		let client = client("http://localhost:3001/");
		let request = client
			.build_request(Method::GET, "/tags", None::<&()>, &RequestOptions::default())
			.expect("Double slash should still form a URL.");

		assert_eq!(request.url().as_str(), "http://localhost:3001//tags");
	}

	#[test]
	fn marshal_failure_is_local() {
		struct Unserializable;
		impl Serialize for Unserializable {
			fn serialize<S>(&self, _: S) -> std::result::Result<S::Ok, S::Error>
			where
				S: serde::Serializer,
			{
				Err(serde::ser::Error::custom("refused"))
			}
		}

		let err = client("http://localhost:3001")
			.build_request(Method::POST, "/tags", Some(&Unserializable), &RequestOptions::default())
			.expect_err("Serializer failure should abort before sending.");

		assert!(matches!(err, Error::Marshal { .. }));
	}
}
