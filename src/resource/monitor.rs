//! Monitor resources and their heartbeat and tag sub-endpoints.

// self
use crate::{_prelude::*, client::Client, http::HttpTransport};

macro_rules! open_enum {
	(
		$(#[$meta:meta])*
		pub enum $name:ident {
			$($(#[$vmeta:meta])* $variant:ident => $label:literal,)+
		}
	) => {
		$(#[$meta])*
		#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
		#[serde(from = "String", into = "String")]
		pub enum $name {
			$($(#[$vmeta])* $variant,)+
			/// Value this client does not know; preserved verbatim.
			Other(String),
		}
		impl $name {
			/// Returns the wire label.
			pub fn as_str(&self) -> &str {
				match self {
					$(Self::$variant => $label,)+
					Self::Other(value) => value,
				}
			}
		}
		impl From<String> for $name {
			fn from(value: String) -> Self {
				match value.as_str() {
					$($label => Self::$variant,)+
					_ => Self::Other(value),
				}
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				match value {
					$name::Other(value) => value,
					known => known.as_str().to_owned(),
				}
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(self.as_str())
			}
		}
	};
}

open_enum! {
	/// Probe performed by a monitor.
	#[derive(Default)]
	pub enum MonitorType {
		/// HTTP(S) request.
		#[default]
		Http => "http",
		/// ICMP ping.
		Ping => "ping",
		/// TCP port check.
		Port => "port",
		/// DNS record lookup.
		Dns => "dns",
		/// HTTP(S) request plus keyword match.
		Keyword => "keyword",
		/// gRPC request plus keyword match.
		GrpcKeyword => "grpc-keyword",
		/// Docker container state.
		Docker => "docker",
		/// Passive push heartbeat.
		Push => "push",
		/// Steam game server.
		Steam => "steam",
		/// GameDig game server query.
		Gamedig => "gamedig",
		/// MQTT broker.
		Mqtt => "mqtt",
		/// Microsoft SQL Server.
		SqlServer => "sqlserver",
		/// PostgreSQL.
		Postgres => "postgres",
		/// MySQL/MariaDB.
		MySql => "mysql",
		/// MongoDB.
		MongoDb => "mongodb",
		/// RADIUS server.
		Radius => "radius",
		/// Redis.
		Redis => "redis",
	}
}

open_enum! {
	/// Authentication applied by HTTP monitors.
	#[derive(Default)]
	pub enum AuthMethod {
		/// No authentication.
		#[default]
		None => "",
		/// HTTP basic auth.
		Basic => "basic",
		/// NTLM.
		Ntlm => "ntlm",
		/// Mutual TLS.
		Mtls => "mtls",
	}
}
impl AuthMethod {
	fn is_none(&self) -> bool {
		matches!(self, Self::None)
	}
}

/// Monitor definition as exchanged with the service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
	/// Server-assigned identifier; omitted on create.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<i64>,
	/// Probe type.
	#[serde(rename = "type")]
	pub kind: MonitorType,
	/// Display name.
	pub name: String,
	/// Free-form description.
	#[serde(default)]
	pub description: String,
	/// Target URL for HTTP-based monitors.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	/// HTTP method for HTTP-based monitors.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub method: Option<String>,
	/// Target host for ping/port/DNS monitors.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub hostname: Option<String>,
	/// Target port.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub port: Option<u16>,
	/// Seconds between checks.
	#[serde(default)]
	pub interval: i64,
	/// Seconds between retries after a failure.
	#[serde(default, rename = "retryInterval")]
	pub retry_interval: i64,
	/// Seconds between repeated notifications while down.
	#[serde(default, rename = "resendInterval")]
	pub resend_interval: i64,
	/// Retries before the monitor is marked down.
	#[serde(default, rename = "maxretries")]
	pub max_retries: i64,
	/// Inverts the up/down result.
	#[serde(default, rename = "upsideDown")]
	pub upside_down: bool,
	/// Notification channels; the service accepts either ids or objects.
	#[serde(default, rename = "notificationIDList")]
	pub notification_id_list: Vec<serde_json::Value>,
	/// Notify before TLS certificates expire.
	#[serde(default, rename = "expiryNotification")]
	pub expiry_notification: bool,
	/// Skip TLS verification while probing.
	#[serde(default, rename = "ignoreTls")]
	pub ignore_tls: bool,
	/// Redirects followed by HTTP monitors.
	#[serde(default, rename = "maxredirects", skip_serializing_if = "Option::is_none")]
	pub max_redirects: Option<i64>,
	/// Status codes or ranges counted as up, e.g. `"200-299"`.
	#[serde(default, rename = "accepted_statuscodes", skip_serializing_if = "Vec::is_empty")]
	pub accepted_status_codes: Vec<serde_json::Value>,
	/// Proxy used for HTTP monitors.
	#[serde(default, rename = "proxyId", skip_serializing_if = "Option::is_none")]
	pub proxy_id: Option<i64>,
	/// Request body for HTTP monitors.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub body: Option<String>,
	/// Request headers (JSON text) for HTTP monitors.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub headers: Option<String>,
	/// Authentication applied by HTTP monitors.
	#[serde(
		default,
		rename = "authMethod",
		deserialize_with = "null_as_default",
		skip_serializing_if = "AuthMethod::is_none"
	)]
	pub auth_method: AuthMethod,
	/// Basic auth username.
	#[serde(default, rename = "basic_auth_user", skip_serializing_if = "Option::is_none")]
	pub basic_auth_user: Option<String>,
	/// Basic auth password.
	#[serde(default, rename = "basic_auth_pass", skip_serializing_if = "Option::is_none")]
	pub basic_auth_pass: Option<String>,
	/// NTLM domain.
	#[serde(default, rename = "authDomain", skip_serializing_if = "Option::is_none")]
	pub auth_domain: Option<String>,
	/// NTLM workstation.
	#[serde(default, rename = "authWorkstation", skip_serializing_if = "Option::is_none")]
	pub auth_workstation: Option<String>,
	/// Keyword searched by keyword monitors.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub keyword: Option<String>,
	/// Resolver used by DNS monitors.
	#[serde(default, rename = "dns_resolve_server", skip_serializing_if = "Option::is_none")]
	pub dns_resolve_server: Option<String>,
	/// Record type queried by DNS monitors.
	#[serde(default, rename = "dns_resolve_type", skip_serializing_if = "Option::is_none")]
	pub dns_resolve_type: Option<String>,
	/// Container watched by Docker monitors.
	#[serde(default, rename = "docker_container", skip_serializing_if = "Option::is_none")]
	pub docker_container: Option<String>,
	/// Docker host id used by Docker monitors.
	#[serde(default, rename = "docker_host", skip_serializing_if = "Option::is_none")]
	pub docker_host: Option<i64>,
}
impl Monitor {
	/// Creates an unsaved monitor of `kind` named `name`.
	pub fn new(kind: MonitorType, name: impl Into<String>) -> Self {
		Self { kind, name: name.into(), ..Default::default() }
	}
}

#[derive(Serialize)]
struct MonitorTagRequest<'a> {
	tag_id: i64,
	#[serde(skip_serializing_if = "Option::is_none")]
	value: Option<&'a str>,
}

/// Operations on `/monitors`.
pub struct Monitors<'a, T>
where
	T: ?Sized + HttpTransport,
{
	client: &'a Client<T>,
}
impl<'a, T> Monitors<'a, T>
where
	T: ?Sized + HttpTransport,
{
	pub(crate) fn new(client: &'a Client<T>) -> Self {
		Self { client }
	}

	/// Lists every monitor.
	pub async fn list(&self) -> Result<Vec<Monitor>> {
		self.client.get("/monitors").await
	}

	/// Fetches one monitor.
	pub async fn get(&self, id: i64) -> Result<Monitor> {
		self.client.get(&format!("/monitors/{id}")).await
	}

	/// Creates a monitor and returns the stored definition.
	pub async fn create(&self, monitor: &Monitor) -> Result<Monitor> {
		self.client.post("/monitors", monitor).await
	}

	/// Replaces the editable fields of a monitor.
	pub async fn update(&self, id: i64, monitor: &Monitor) -> Result<Monitor> {
		self.client.patch(&format!("/monitors/{id}"), monitor).await
	}

	/// Deletes a monitor.
	pub async fn delete(&self, id: i64) -> Result<()> {
		self.client.send(Method::DELETE, &format!("/monitors/{id}"), None::<&()>).await
	}

	/// Stops checking a monitor.
	pub async fn pause(&self, id: i64) -> Result<()> {
		self.client.send(Method::POST, &format!("/monitors/{id}/pause"), None::<&()>).await
	}

	/// Resumes a paused monitor.
	pub async fn resume(&self, id: i64) -> Result<()> {
		self.client.send(Method::POST, &format!("/monitors/{id}/resume"), None::<&()>).await
	}

	/// Returns the heartbeats recorded over the last `hours`, as untyped JSON.
	pub async fn beats(&self, id: i64, hours: f64) -> Result<serde_json::Value> {
		self.client.get(&beats_path(id, hours)).await
	}

	/// Attaches tag `tag_id` to a monitor, optionally with a value.
	pub async fn add_tag(&self, monitor_id: i64, tag_id: i64, value: Option<&str>) -> Result<()> {
		let body = MonitorTagRequest { tag_id, value: value.filter(|value| !value.is_empty()) };

		self.client.send(Method::POST, &format!("/monitors/{monitor_id}/tag"), Some(&body)).await
	}

	/// Detaches tag `tag_id` from a monitor.
	pub async fn remove_tag(&self, monitor_id: i64, tag_id: i64) -> Result<()> {
		let body = MonitorTagRequest { tag_id, value: None };

		self.client.send(Method::DELETE, &format!("/monitors/{monitor_id}/tag"), Some(&body)).await
	}
}

// The service reports unset enum-like columns as `null`.
fn null_as_default<'de, D, V>(deserializer: D) -> Result<V, D::Error>
where
	D: serde::Deserializer<'de>,
	V: Default + Deserialize<'de>,
{
	Ok(Option::<V>::deserialize(deserializer)?.unwrap_or_default())
}

fn beats_path(id: i64, hours: f64) -> String {
	// `f64` display is the shortest round-trip form and never uses an exponent.
	format!("/monitors/{id}/beats?hours={hours}")
}
