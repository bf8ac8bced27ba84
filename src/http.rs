//! Transport primitives for talking to the service.
//!
//! [`HttpTransport`] is the client's only dependency on an HTTP stack. The login
//! exchange uses it directly, while resource calls go through
//! [`AuthTransport`](bearer::AuthTransport), a decorator that attaches the bearer token
//! before delegating to the same underlying transport.

pub mod bearer;

pub use bearer::*;

// std
use std::ops::Deref;
// self
use crate::{
	_prelude::*,
	config::Config,
	error::{ConfigError, TransportError},
};

/// Boxed future returned by [`HttpTransport::send`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<Response, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing a single request.
///
/// Implementations must be `Send + Sync + 'static` so one transport (and its connection
/// pool) can be shared by every concurrent caller of a client. The returned future must
/// be `Send` so calls can hop executors. Transports never retry; failures surface as
/// [`TransportError`] unchanged.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Dispatches `request` and resolves to the raw response.
	fn send(&self, request: Request) -> TransportFuture<'_>;
}
impl<T> HttpTransport for Arc<T>
where
	T: ?Sized + HttpTransport,
{
	fn send(&self, request: Request) -> TransportFuture<'_> {
		(**self).send(request)
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds the default client for `config`: its timeout, and certificate checks
	/// disabled when `insecure_https` is set.
	pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder()
			.timeout(config.timeout)
			.danger_accept_invalid_certs(config.insecure_https)
			.build()?;

		Ok(Self(client))
	}
}
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl HttpTransport for ReqwestHttpClient {
	fn send(&self, request: Request) -> TransportFuture<'_> {
		Box::pin(async move { self.0.execute(request).await.map_err(TransportError::from) })
	}
}
