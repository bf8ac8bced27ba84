// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use uptime_kuma_client::{_preludet::*, resource::Tag};

async fn mock_login(server: &MockServer) -> httpmock::Mock<'_> {
	server
		.mock_async(|when, then| {
			when.method(POST).path("/login/access-token");
			then.status(200).json_body(json!({ "access_token": "tag-token", "token_type": "bearer" }));
		})
		.await
}

#[tokio::test]
async fn create_returns_server_assigned_id() {
	let server = MockServer::start_async().await;
	let login = mock_login(&server).await;
	let create = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/tags")
				.header("authorization", "Bearer tag-token")
				.header("content-type", "application/json")
				.json_body(json!({ "name": "testing", "color": "#FF0000" }));
			then.status(200).json_body(json!({ "id": 1, "name": "testing", "color": "#FF0000" }));
		})
		.await;
	let client = build_test_client(server.base_url());
	let tag = client
		.tags()
		.create(&Tag::new("testing", "#FF0000"))
		.await
		.expect("Tag creation should succeed.");

	assert_eq!(tag.id, Some(1));
	assert_eq!(tag.name, "testing");
	assert_eq!(tag.color, "#FF0000");

	login.assert_calls_async(1).await;
	create.assert_async().await;
}

#[tokio::test]
async fn created_tag_reads_back_unchanged() {
	let server = MockServer::start_async().await;

	mock_login(&server).await;
	server
		.mock_async(|when, then| {
			when.method(POST).path("/tags");
			then.status(200).json_body(json!({ "id": 7, "name": "db", "color": "#00FF00" }));
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/tags/7");
			then.status(200).json_body(json!({ "id": 7, "name": "db", "color": "#00FF00" }));
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/tags");
			then.status(200).json_body(json!([
				{ "id": 1, "name": "testing", "color": "#FF0000" },
				{ "id": 7, "name": "db", "color": "#00FF00" },
			]));
		})
		.await;

	let client = build_test_client(server.base_url());
	let tags = client.tags();
	let created = tags.create(&Tag::new("db", "#00FF00")).await.expect("Create should succeed.");
	let fetched = tags.get(7).await.expect("Get should succeed.");
	let listed = tags.list().await.expect("List should succeed.");

	assert_eq!(created, fetched);
	assert_eq!(listed.len(), 2);
	assert!(listed.contains(&fetched));
}

#[tokio::test]
async fn second_delete_reports_not_found() {
	let server = MockServer::start_async().await;

	mock_login(&server).await;

	let mut first = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/tags/5").header("authorization", "Bearer tag-token");
			then.status(200).json_body(json!({ "detail": "Tag deleted" }));
		})
		.await;
	let client = build_test_client(server.base_url());

	client.tags().delete(5).await.expect("First delete should succeed.");
	first.assert_async().await;
	first.delete_async().await;
	server
		.mock_async(|when, then| {
			when.method(DELETE).path("/tags/5");
			then.status(404).json_body(json!({ "detail": "Tag not found" }));
		})
		.await;

	let err = client.tags().delete(5).await.expect_err("Second delete should fail.");

	assert!(err.is_not_found());
	assert!(matches!(err, Error::Api { status: 404, ref body } if body.contains("Tag not found")));
}
