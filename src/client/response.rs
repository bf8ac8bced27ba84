//! Transient response envelope used to classify and decode results.

// self
use crate::{_prelude::*, error::TransportError};

/// Status code and raw body of a completed call, discarded after decoding.
#[derive(Debug)]
pub struct ResponseEnvelope {
	/// HTTP status code returned by the service.
	pub status: StatusCode,
	/// Raw body bytes; empty when reading failed.
	pub body: Vec<u8>,
	/// Failure raised while reading the body, if any.
	pub read_error: Option<TransportError>,
}
impl ResponseEnvelope {
	/// Returns the body lossily decoded as UTF-8, for diagnostics.
	pub fn body_text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}

	/// Fails with [`Error::Api`] unless the status is within `200..300`.
	///
	/// The status check wins over a body read failure: a non-success status is reported
	/// as an API error carrying whatever body was read.
	pub fn ensure_success(self) -> Result<Self> {
		if self.status.is_success() {
			Ok(self)
		} else {
			Err(Error::Api { status: self.status.as_u16(), body: self.body_text() })
		}
	}

	/// Decodes the body into `R`.
	pub fn decode<R>(self) -> Result<R>
	where
		R: DeserializeOwned,
	{
		if let Some(source) = self.read_error {
			return Err(Error::BodyRead { source });
		}

		let mut de = serde_json::Deserializer::from_slice(&self.body);

		serde_path_to_error::deserialize(&mut de)
			.map_err(|source| Error::Decode { source, body: self.body_text() })
	}
}
