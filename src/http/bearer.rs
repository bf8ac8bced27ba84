//! Transport decorator that authenticates every outbound request.

// crates.io
use reqwest::header::{AUTHORIZATION, HeaderValue};
// self
use crate::{
	_prelude::*,
	auth::Authenticator,
	error::TransportError,
	http::{HttpTransport, TransportFuture},
};

/// Wraps an underlying [`HttpTransport`] and injects `Authorization: Bearer <token>`.
///
/// The caller's request is never mutated: the header is set on a clone. When no valid
/// token can be obtained the request is not sent at all and the authentication error
/// is returned instead.
pub struct AuthTransport<T>
where
	T: ?Sized + HttpTransport,
{
	inner: Arc<T>,
	authenticator: Arc<Authenticator<T>>,
}
impl<T> AuthTransport<T>
where
	T: ?Sized + HttpTransport,
{
	/// Layers authentication from `authenticator` over `inner`.
	pub fn new(inner: Arc<T>, authenticator: Arc<Authenticator<T>>) -> Self {
		Self { inner, authenticator }
	}

	/// Returns the authenticator backing this transport.
	pub fn authenticator(&self) -> &Arc<Authenticator<T>> {
		&self.authenticator
	}

	/// Sends an authenticated clone of `request`.
	pub async fn execute(&self, request: &Request) -> Result<Response> {
		let mut authorized = request.try_clone().ok_or(TransportError::UnclonableRequest)?;
		let token = self.authenticator.token().await?;
		let value = HeaderValue::try_from(token.bearer()).map_err(TransportError::network)?;

		authorized.headers_mut().insert(AUTHORIZATION, value);

		Ok(self.inner.send(authorized).await?)
	}
}
impl<T> Clone for AuthTransport<T>
where
	T: ?Sized + HttpTransport,
{
	fn clone(&self) -> Self {
		Self { inner: Arc::clone(&self.inner), authenticator: Arc::clone(&self.authenticator) }
	}
}
impl<T> Debug for AuthTransport<T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthTransport").field("authenticator", &self.authenticator).finish()
	}
}
impl<T> HttpTransport for AuthTransport<T>
where
	T: ?Sized + HttpTransport,
{
	fn send(&self, request: Request) -> TransportFuture<'_> {
		Box::pin(async move {
			self.execute(&request).await.map_err(|err| match err {
				Error::Transport(inner) => inner,
				other => TransportError::network(other),
			})
		})
	}
}
