// std
use std::time::Duration as StdDuration;
// crates.io
use httpmock::prelude::*;
use reqwest::{Method, header::AUTHORIZATION};
use serde_json::json;
// self
use uptime_kuma_client::{
	_preludet::*,
	CancellationToken,
	client::{Client, RequestOptions},
	error::TransportError,
	http::{AuthTransport, HttpTransport, ReqwestHttpClient, TransportFuture},
};

#[derive(Debug, Deserialize)]
struct Message {
	message: String,
}

async fn mock_login(server: &MockServer) -> httpmock::Mock<'_> {
	server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/login/access-token")
				.body("username=testuser&password=testpass");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "access_token": "engine-token", "token_type": "bearer" }));
		})
		.await
}

#[tokio::test]
async fn get_carries_bearer_and_decodes_result() {
	let server = MockServer::start_async().await;
	let login = mock_login(&server).await;
	let resource = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/test")
				.header("authorization", "Bearer engine-token")
				.header("accept", "application/json")
				.header_missing("content-type");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "message": "success" }));
		})
		.await;
	let client = build_test_client(server.base_url());
	let result: Message = client.get("/test").await.expect("Authenticated GET should succeed.");

	assert_eq!(result.message, "success");

	login.assert_calls_async(1).await;
	resource.assert_calls_async(1).await;
}

#[tokio::test]
async fn token_is_reused_across_verbs() {
	let server = MockServer::start_async().await;
	let login = mock_login(&server).await;
	let put = server
		.mock_async(|when, then| {
			when.method(PUT)
				.path("/items/1")
				.header("content-type", "application/json")
				.json_body(json!({ "name": "renamed" }));
			then.status(200).json_body(json!({ "message": "put" }));
		})
		.await;
	let patch = server
		.mock_async(|when, then| {
			when.method(PATCH).path("/items/1").json_body(json!({ "name": "patched" }));
			then.status(200).json_body(json!({ "message": "patch" }));
		})
		.await;
	let delete = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/items/1");
			then.status(204);
		})
		.await;
	let client = build_test_client(server.base_url());
	let put_result: Message = client
		.put("/items/1", &json!({ "name": "renamed" }))
		.await
		.expect("PUT should succeed.");
	let patch_result: Message = client
		.patch("/items/1", &json!({ "name": "patched" }))
		.await
		.expect("PATCH should succeed.");

	client
		.send(Method::DELETE, "/items/1", None::<&()>)
		.await
		.expect("Bodyless DELETE should succeed.");

	assert_eq!(put_result.message, "put");
	assert_eq!(patch_result.message, "patch");

	login.assert_calls_async(1).await;
	put.assert_async().await;
	patch.assert_async().await;
	delete.assert_async().await;
}

#[tokio::test]
async fn non_success_status_carries_raw_body() {
	let server = MockServer::start_async().await;

	mock_login(&server).await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/monitors/99");
			then.status(404).body("{\"detail\":\"Monitor not found\"}");
		})
		.await;

	let client = build_test_client(server.base_url());
	let err = client
		.get::<serde_json::Value>("/monitors/99")
		.await
		.expect_err("404 should be reported as an API error.");

	match &err {
		Error::Api { status, body } => {
			assert_eq!(*status, 404);
			assert_eq!(body, "{\"detail\":\"Monitor not found\"}");
		},
		other => panic!("Unexpected error: {other:?}."),
	}

	assert!(err.is_not_found());
	assert_eq!(
		err.to_string(),
		"Request failed with status 404: {\"detail\":\"Monitor not found\"}"
	);
}

#[tokio::test]
async fn raw_execution_skips_decoding() {
	let server = MockServer::start_async().await;

	mock_login(&server).await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/raw");
			then.status(202).body("accepted, not json");
		})
		.await;

	let client = build_test_client(server.base_url());
	let envelope = client
		.execute_raw(Method::GET, "/raw", None::<&()>, &RequestOptions::default())
		.await
		.expect("2xx should be accepted without decoding.");

	assert_eq!(envelope.status, StatusCode::ACCEPTED);
	assert_eq!(envelope.body_text(), "accepted, not json");

	let err = envelope.decode::<Message>().expect_err("Plain text should not decode.");

	assert!(matches!(err, Error::Decode { ref body, .. } if body == "accepted, not json"));
}

#[tokio::test]
async fn decode_failure_keeps_body() {
	let server = MockServer::start_async().await;

	mock_login(&server).await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/test");
			then.status(200).json_body(json!({ "msg": 42 }));
		})
		.await;

	let client = build_test_client(server.base_url());
	let err = client.get::<Message>("/test").await.expect_err("Missing field should fail.");

	match err {
		Error::Decode { source, body } => {
			assert_eq!(body, "{\"msg\":42}");
			assert!(source.to_string().contains("message"));
		},
		other => panic!("Unexpected error: {other:?}."),
	}
}

#[tokio::test]
async fn cancellation_aborts_in_flight_call() {
	let server = MockServer::start_async().await;

	mock_login(&server).await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/slow");
			then.status(200).delay(StdDuration::from_secs(3)).json_body(json!({ "message": "late" }));
		})
		.await;

	let client = build_test_client(server.base_url());
	let token = CancellationToken::new();
	let options = RequestOptions::default().with_cancellation(token.clone());
	let canceller = tokio::spawn(async move {
		tokio::time::sleep(StdDuration::from_millis(100)).await;
		token.cancel();
	});
	let err = client
		.execute::<(), Message>(Method::GET, "/slow", None, &options)
		.await
		.expect_err("Cancelled call should fail.");

	canceller.await.expect("Canceller task should not panic.");

	assert!(matches!(err, Error::Cancelled));
}

#[tokio::test]
async fn cancelled_token_prevents_login() {
	let server = MockServer::start_async().await;
	let login = mock_login(&server).await;
	let client = build_test_client(server.base_url());
	let token = CancellationToken::new();

	token.cancel();

	let err = client
		.execute_raw(
			Method::GET,
			"/test",
			None::<&()>,
			&RequestOptions::default().with_cancellation(token),
		)
		.await
		.expect_err("Pre-cancelled call should fail.");

	assert!(matches!(err, Error::Cancelled));

	login.assert_calls_async(0).await;
}

#[tokio::test]
async fn per_call_timeout_overrides_config() {
	let server = MockServer::start_async().await;

	mock_login(&server).await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/slow");
			then.status(200).delay(StdDuration::from_secs(2)).json_body(json!({ "message": "late" }));
		})
		.await;

	let client = build_test_client(server.base_url());
	let options = RequestOptions::default().with_timeout(StdDuration::from_millis(200));
	let err = client
		.execute_raw(Method::GET, "/slow", None::<&()>, &options)
		.await
		.expect_err("Short timeout should fire first.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
}

#[derive(Debug, Default)]
struct RecordingTransport {
	inner: ReqwestHttpClient,
	seen: Mutex<Vec<(String, Option<String>)>>,
}
impl HttpTransport for RecordingTransport {
	fn send(&self, request: Request) -> TransportFuture<'_> {
		let authorization = request
			.headers()
			.get(AUTHORIZATION)
			.and_then(|value| value.to_str().ok())
			.map(str::to_owned);

		self.seen.lock().push((request.url().path().to_owned(), authorization));

		self.inner.send(request)
	}
}

#[tokio::test]
async fn custom_transport_sees_login_and_authorized_calls() {
	let server = MockServer::start_async().await;

	mock_login(&server).await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/test").header("authorization", "Bearer engine-token");
			then.status(200).json_body(json!({ "message": "success" }));
		})
		.await;

	let transport = Arc::new(RecordingTransport::default());
	let client = Client::<RecordingTransport>::with_http_client(
		test_config(server.base_url()),
		transport.clone(),
	);
	let result: Message = client.get("/test").await.expect("Custom transport should work.");

	assert_eq!(result.message, "success");
	assert_eq!(
		*transport.seen.lock(),
		vec![
			("/login/access-token".to_owned(), None),
			("/test".to_owned(), Some("Bearer engine-token".to_owned())),
		]
	);
}

#[tokio::test]
async fn auth_transport_leaves_original_request_untouched() {
	let server = MockServer::start_async().await;

	mock_login(&server).await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/test").header("authorization", "Bearer engine-token");
			then.status(200).json_body(json!({ "message": "success" }));
		})
		.await;

	let client = build_test_client(server.base_url());
	let transport =
		AuthTransport::new(Arc::new(ReqwestHttpClient::default()), client.authenticator().clone());
	let url = Url::parse(&format!("{}/test", server.base_url())).expect("Mock URL should parse.");
	let request = Request::new(Method::GET, url);
	let response = transport.execute(&request).await.expect("Authorized call should succeed.");

	assert_eq!(response.status(), StatusCode::OK);
	assert!(request.headers().get(AUTHORIZATION).is_none());
}
