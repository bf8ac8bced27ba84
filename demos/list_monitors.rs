//! Demonstrates logging in once, reusing the cached bearer token across resource calls, and
//! tagging a monitor, all against a local mock of the Uptime Kuma REST API.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use uptime_kuma_client::{
	client::Client,
	config::Config,
	resource::{MonitorType, Tag},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let login = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/login/access-token")
				.body("username=admin&password=demo-password");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "access_token": "demo-access", "token_type": "bearer" }));
		})
		.await;
	let monitors = server
		.mock_async(|when, then| {
			when.method(GET).path("/monitors").header("authorization", "Bearer demo-access");
			then.status(200).header("content-type", "application/json").json_body(json!([
				{ "id": 1, "type": "http", "name": "homepage", "url": "https://example.com", "interval": 60 },
				{ "id": 2, "type": "real-browser", "name": "checkout", "interval": 300 },
			]));
		})
		.await;
	let tags = server
		.mock_async(|when, then| {
			when.method(POST).path("/tags").header("authorization", "Bearer demo-access");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "id": 9, "name": "production", "color": "#2563EB" }));
		})
		.await;
	let attach = server
		.mock_async(|when, then| {
			when.method(POST).path("/monitors/1/tag").json_body(json!({ "tag_id": 9 }));
			then.status(200).json_body(json!({ "msg": "Added Successfully." }));
		})
		.await;
	let config = Config::builder(server.base_url())
		.username("admin")
		.password("demo-password")
		.build()?;
	let client = Client::new(config)?;

	for monitor in client.monitors().list().await? {
		let label = match &monitor.kind {
			MonitorType::Other(label) => format!("{label} (unrecognized)"),
			known => known.to_string(),
		};

		println!("monitor #{:?}: {} [{label}]", monitor.id, monitor.name);
	}

	let tag = client.tags().create(&Tag::new("production", "#2563EB")).await?;
	let tag_id = tag.id.ok_or_else(|| color_eyre::eyre::eyre!("Tag was created without an id."))?;

	client.monitors().add_tag(1, tag_id, None).await?;

	println!("tagged monitor #1 with `{}` (#{tag_id})", tag.name);
	println!("login exchanges: {}", client.authenticator().metrics().attempts());

	login.assert_calls_async(1).await;
	monitors.assert_async().await;
	tags.assert_async().await;
	attach.assert_async().await;

	Ok(())
}
