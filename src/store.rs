//! In-memory token store guarded by an async readers-writer lock.

// crates.io
use async_lock::RwLockWriteGuard;
// self
use crate::{_prelude::*, auth::Token};

/// Holds the single cached [`Token`] for one client instance.
///
/// Readers take the shared lock just long enough to clone a snapshot. The
/// authenticator holds the exclusive lock for an entire refresh so a token is only
/// ever replaced as a whole and concurrent refreshes queue behind it.
#[derive(Debug, Default)]
pub struct TokenStore(AsyncRwLock<Option<Token>>);
impl TokenStore {
	/// Returns a copy of the cached token, if any.
	pub async fn snapshot(&self) -> Option<Token> {
		self.0.read().await.clone()
	}

	/// Drops the cached token so the next caller logs in again.
	pub async fn clear(&self) {
		*self.0.write().await = None;
	}

	pub(crate) async fn lock_exclusive(&self) -> RwLockWriteGuard<'_, Option<Token>> {
		self.0.write().await
	}
}
