//! Authenticated REST client for Uptime Kuma.
//!
//! A cached bearer token is injected into every call, and typed monitor, status page, and
//! tag operations share one generic request engine.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod clock;
pub mod config;
pub mod error;
pub mod http;
pub mod obs;
pub mod resource;
pub mod store;
#[doc(hidden)]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests and demos.

	pub use crate::_prelude::*;

	// self
	use crate::{client::Client, clock::Clock, config::Config};

	/// Username accepted by the mock login endpoints used across tests.
	pub const TEST_USERNAME: &str = "testuser";
	/// Password accepted by the mock login endpoints used across tests.
	pub const TEST_PASSWORD: &str = "testpass";

	/// Builds a [`Config`] pointing at `base_url` with the shared test credentials.
	pub fn test_config(base_url: impl Into<String>) -> Config {
		Config::builder(base_url)
			.username(TEST_USERNAME)
			.password(TEST_PASSWORD)
			.timeout(std::time::Duration::from_secs(5))
			.build()
			.expect("Test configuration should be valid.")
	}

	/// Constructs a reqwest-backed [`Client`] for the provided mock server base URL.
	pub fn build_test_client(base_url: impl Into<String>) -> Client {
		Client::new(test_config(base_url)).expect("Failed to build reqwest client for tests.")
	}

	/// Constructs a test [`Client`] whose token expiry is driven by `clock`.
	pub fn build_test_client_with_clock(
		base_url: impl Into<String>,
		clock: Arc<dyn Clock>,
	) -> Client {
		build_test_client(base_url).with_clock(clock)
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use async_lock::RwLock as AsyncRwLock;
	pub use parking_lot::Mutex;
	pub use reqwest::{
		Client as ReqwestClient, Error as ReqwestError, Method, Request, Response, StatusCode,
	};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use tokio_util::sync::CancellationToken;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
