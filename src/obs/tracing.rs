// self
use crate::{_prelude::*, error::TransportError, obs::CallKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// A span builder used by client calls.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Creates a new span tagged with the provided call kind + stage.
	pub fn new(kind: CallKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("uptime_kuma_client.call", call = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Creates a request span that also records the HTTP method and path.
	pub fn request(stage: &'static str, method: &Method, path: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"uptime_kuma_client.call",
				call = CallKind::Request.as_str(),
				stage,
				method = %method,
				path,
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (stage, method, path);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Logs a response body that could not be read; status classification still proceeds.
pub fn warn_body_read_failure(status: StatusCode, err: &TransportError) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(status = status.as_u16(), error = %err, "Failed to read response body.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (status, err);
	}
}

/// Logs that a refresh found a token stored by a concurrent caller.
pub fn debug_token_reused() {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!("Reusing token refreshed by a concurrent caller.");
	}
}
