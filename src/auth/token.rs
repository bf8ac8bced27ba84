//! Bearer token snapshots and the login response they are minted from.

// self
use crate::{_prelude::*, auth::Secret, error::AuthProtocolError};

/// Margin subtracted from a server-announced `expires_in` so tokens never expire mid-flight.
pub const EXPIRY_MARGIN: Duration = Duration::minutes(1);

/// Lifecycle status of a token at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenStatus {
	/// Token can be attached to requests.
	Active,
	/// Token reached its (conservative) expiry instant and must be refreshed.
	Expired,
}

/// Immutable bearer token snapshot. Replaced wholesale on refresh, never mutated.
#[derive(Clone)]
pub struct Token {
	/// Access token presented as `Authorization: Bearer <token>`.
	pub access_token: Secret,
	/// Token type reported by the login endpoint (usually `bearer`).
	pub token_type: String,
	/// Instant the login exchange completed.
	pub obtained_at: OffsetDateTime,
	/// Instant after which the token is treated as stale.
	pub expires_at: OffsetDateTime,
}
impl Token {
	/// Computes the lifecycle status at `instant`.
	pub fn status_at(&self, instant: OffsetDateTime) -> TokenStatus {
		if instant >= self.expires_at { TokenStatus::Expired } else { TokenStatus::Active }
	}

	/// Returns `true` if the token may still be used at `instant`.
	pub fn is_valid_at(&self, instant: OffsetDateTime) -> bool {
		matches!(self.status_at(instant), TokenStatus::Active)
	}

	/// Remaining validity at `instant`, clamped at zero.
	pub fn expires_in_at(&self, instant: OffsetDateTime) -> Duration {
		(self.expires_at - instant).max(Duration::ZERO)
	}

	/// Formats the `Authorization` header value.
	pub fn bearer(&self) -> String {
		format!("Bearer {}", self.access_token.expose())
	}
}
impl Debug for Token {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Token")
			.field("access_token", &"<redacted>")
			.field("token_type", &self.token_type)
			.field("obtained_at", &self.obtained_at)
			.field("expires_at", &self.expires_at)
			.finish()
	}
}

/// JSON body returned by `POST /login/access-token`.
#[derive(Clone, Deserialize)]
pub struct TokenResponse {
	/// Issued access token.
	pub access_token: String,
	/// Token type label.
	#[serde(default)]
	pub token_type: String,
	/// Optional lifetime in seconds; the service does not send it today.
	#[serde(default)]
	pub expires_in: Option<i64>,
}
impl TokenResponse {
	/// Mints a [`Token`] obtained at `now`.
	///
	/// Without `expires_in`, `fallback_lifetime` applies. With it, the token expires
	/// [`EXPIRY_MARGIN`] early, never before `now`. Fails when the expiry instant falls
	/// outside the representable calendar range.
	pub fn into_token(
		self,
		now: OffsetDateTime,
		fallback_lifetime: Duration,
	) -> Result<Token, AuthProtocolError> {
		let lifetime = match self.expires_in {
			Some(seconds) =>
				Duration::seconds(seconds).saturating_sub(EXPIRY_MARGIN).max(Duration::ZERO),
			None => fallback_lifetime,
		};
		let expires_at =
			now.checked_add(lifetime).ok_or(AuthProtocolError::ExpiryOutOfRange { lifetime })?;

		Ok(Token {
			access_token: Secret::new(self.access_token),
			token_type: self.token_type,
			obtained_at: now,
			expires_at,
		})
	}
}
impl Debug for TokenResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenResponse")
			.field("access_token", &"<redacted>")
			.field("token_type", &self.token_type)
			.field("expires_in", &self.expires_in)
			.finish()
	}
}
