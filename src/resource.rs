//! Typed operation sets bound to the service's resource endpoints.
//!
//! Each handle borrows a [`Client`] and maps its methods onto fixed path templates; all
//! state, concurrency, and failure handling live in the request engine underneath.

pub mod monitor;
pub mod status_page;
pub mod tag;

pub use monitor::*;
pub use status_page::*;
pub use tag::*;

// self
use crate::{client::Client, http::HttpTransport};

impl<T> Client<T>
where
	T: ?Sized + HttpTransport,
{
	/// Returns the monitor operations.
	pub fn monitors(&self) -> Monitors<'_, T> {
		Monitors::new(self)
	}

	/// Returns the status page operations.
	pub fn status_pages(&self) -> StatusPages<'_, T> {
		StatusPages::new(self)
	}

	/// Returns the tag operations.
	pub fn tags(&self) -> Tags<'_, T> {
		Tags::new(self)
	}
}
