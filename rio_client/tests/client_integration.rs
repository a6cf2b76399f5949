use std::time::Duration;

use rio_client::types::{
    AgentConfig, BpAgentConfig, BrokerCreateRequest, DeviceRequest, EmptyResponse,
    ObjectUpdateRequest, SpectraDeviceCreateRequest, UserUpdateRequest,
};
use rio_client::{Client, ClientConfig, Error, ErrorMessage, ObjectQuery, PageQuery, Query};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client_for(mock_server: &MockServer) -> Client {
    let config = ClientConfig::new(&mock_server.uri(), "spectra", "spectra")
        .unwrap()
        .with_long_lived_token("test-token");
    Client::new(&config).unwrap()
}

fn spectra_request(name: &str) -> SpectraDeviceCreateRequest {
    SpectraDeviceCreateRequest {
        name: name.to_string(),
        mgmt_interface: "https://h".to_string(),
        username: "u".to_string(),
        password: "p".to_string(),
        data_path: None,
    }
}

#[tokio::test]
async fn create_get_delete_spectra_device() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/devices/spectra"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("content-type", "application/json; charset=utf-8"))
        .and(body_json(json!({
            "name": "bp1",
            "mgmtInterface": "https://h",
            "username": "u",
            "password": "p"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "bp1",
            "mgmtInterface": "https://h",
            "username": "u",
            "firmware": "5.6"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/devices/spectra/bp1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "bp1",
            "mgmtInterface": "https://h",
            "username": "u"
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/devices/spectra/bp1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/api/devices/spectra/bp1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let created = client
        .create_spectra_device(&spectra_request("bp1"))
        .await
        .unwrap();
    assert_eq!(created.status_code, 201);
    assert_eq!(created.name, "bp1");

    let fetched = client.get_spectra_device("bp1").await.unwrap();
    assert_eq!(fetched.status_code, 200);
    assert_eq!(fetched.name, "bp1");

    let deleted = client
        .delete_device(rio_client::types::DeviceType::Spectra, "bp1")
        .await
        .unwrap();
    assert_eq!(deleted.status_code, 204);
    assert_eq!(deleted.data, EmptyResponse {});

    assert!(!client
        .device_exists(rio_client::types::DeviceType::Spectra, "bp1")
        .await
        .unwrap());
}

#[tokio::test]
async fn validation_error_is_decoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/devices/spectra"))
        .respond_with(
            ResponseTemplate::new(422).set_body_string(load_fixture("validation_error.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .create_spectra_device(&spectra_request(""))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 422);
    assert_eq!(err.message(), "Validation Failed");
    let Some(ErrorMessage::Validation(validation)) = err.error_message() else {
        panic!("expected a validation error, got {:?}", err);
    };
    assert_eq!(validation.status_code, 422);
    assert_eq!(validation.errors.len(), 1);
    let detail = &validation.errors[0];
    assert_eq!(detail.field_name, "name");
    assert_eq!(detail.field_type, "string");
    assert_eq!(detail.error_type, "invalid_device_name");
    assert_eq!(detail.value.as_deref(), Some(""));
    assert_eq!(
        detail.reason.as_deref(),
        Some("cannot be empty or contain only whitespace")
    );
}

#[tokio::test]
async fn resource_error_on_missing_broker() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/brokers/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Unable to find broker",
            "statusCode": 404,
            "resourceName": "missing",
            "resourceType": "broker"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_broker("missing").await.unwrap_err();
    assert!(err.is_not_found());
    match err {
        Error::Http {
            method, url, error, ..
        } => {
            assert_eq!(method, reqwest::Method::GET);
            assert!(url.ends_with("/api/brokers/missing"));
            assert!(matches!(error, ErrorMessage::Resource(ref e) if e.resource_type == "broker"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn unparseable_error_body_falls_back() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/system"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.system_info().await.unwrap_err();
    assert_eq!(err.status_code(), 503);
    assert_eq!(
        err.error_message(),
        Some(&ErrorMessage::fallback(503, None))
    );
    assert!(matches!(err, Error::Http { ref body, .. } if body == "Service Unavailable"));
}

#[tokio::test]
async fn head_semantics() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/api/brokers/ok"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/api/brokers/empty"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/api/brokers/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/api/brokers/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.broker_exists("ok").await.unwrap());
    assert!(client.broker_exists("empty").await.unwrap());
    assert!(!client.broker_exists("gone").await.unwrap());
    assert!(!client.broker_exists("broken").await.unwrap());
}

#[tokio::test]
async fn head_transport_failure_is_an_error() {
    let config = ClientConfig::new("http://127.0.0.1:1", "u", "p")
        .unwrap()
        .with_long_lived_token("test-token");
    let client = Client::new(&config).unwrap();

    let err = client.broker_exists("b1").await.unwrap_err();
    match &err {
        Error::Transport { method, url, .. } => {
            assert_eq!(*method, reqwest::Method::HEAD);
            assert_eq!(url, "http://127.0.0.1:1/api/brokers/b1");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.status_code(), 400);
    assert!(err.error_message().is_some());
}

#[tokio::test]
async fn timeout_is_a_transport_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/system"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"version": "1.0"}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new(&mock_server.uri(), "u", "p")
        .unwrap()
        .with_long_lived_token("test-token")
        .with_timeout(Duration::from_millis(200));
    let client = Client::new(&config).unwrap();

    let err = client.system_info().await.unwrap_err();
    assert!(matches!(err, Error::Transport { .. }));
}

#[tokio::test]
async fn patch_semantics() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/brokers/b1/objects/clip%201.mov"))
        .and(body_json(json!({"metadata": {"reviewed": "yes"}})))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/brokers/b1/objects/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/users/bob"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Validation Failed",
            "statusCode": 422,
            "errors": [{"fieldName": "role", "fieldType": "string", "errorType": "invalid_role"}]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut update = ObjectUpdateRequest::default();
    update
        .metadata
        .insert("reviewed".to_string(), "yes".to_string());

    assert!(client
        .update_object_metadata("b1", "clip 1.mov", &update)
        .await
        .unwrap());
    assert!(!client
        .update_object_metadata("b1", "missing", &update)
        .await
        .unwrap());

    let err = client
        .update_user(
            "bob",
            &UserUpdateRequest {
                role: Some("wizard".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 422);
    assert_eq!(
        err.error_message().unwrap().validation_errors()[0].error_type,
        "invalid_role"
    );
}

#[tokio::test]
async fn success_with_mismatched_body_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/brokers/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_broker("b1").await.unwrap_err();
    assert!(matches!(err, Error::Decode { status: 200, .. }));
    assert!(err.error_message().is_none());
}

#[tokio::test]
async fn empty_success_body_is_the_empty_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/brokers/b1"))
        .and(query_param("force", "true"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let deleted = client.delete_broker("b1", true).await.unwrap();
    assert_eq!(deleted.status_code, 200);
    assert_eq!(deleted.into_inner(), EmptyResponse {});
}

#[tokio::test]
async fn list_objects_sends_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/brokers/archive-broker/objects"))
        .and(query_param("page", "0"))
        .and(query_param("per_page", "2"))
        .and(query_param("prefix", "footage/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("objects.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let query = ObjectQuery::default()
        .with_page(0)
        .with_per_page(2)
        .with_prefix("footage/");
    let objects = client.list_objects("archive-broker", &query).await.unwrap();
    assert_eq!(objects.objects.len(), 2);
    assert_eq!(objects.objects[0].metadata["project"], "apollo");
}

#[tokio::test]
async fn ensure_broker_exists_creates_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/api/brokers/b1"))
        .respond_with(ResponseTemplate::new(404))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/api/brokers/b1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/brokers"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"name": "b1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = BrokerCreateRequest {
        name: "b1".to_string(),
        agent_name: "agent".to_string(),
        agent_config: AgentConfig::BlackPearl(BpAgentConfig {
            blackpearl_name: "bp1".to_string(),
            username: "u".to_string(),
            bucket: "rio".to_string(),
            create_bucket: true,
        }),
    };

    assert!(client.ensure_broker_exists(&request).await.unwrap());
    assert!(!client.ensure_broker_exists(&request).await.unwrap());
}

#[tokio::test]
async fn ensure_device_exists_skips_present_device() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/api/devices/spectra/bp1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/devices/spectra"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = spectra_request("bp1");
    assert!(!client
        .ensure_device_exists(DeviceRequest::Spectra(&request))
        .await
        .unwrap());
}

#[tokio::test]
async fn register_client_runs_detached() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/client-data"))
        .and(body_json(json!({
            "clientName": "ingest",
            "clientVersion": "2.1.0",
            "data": {"host": "edit-01"}
        })))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let handle = client.spawn_register_client(
        rio_client::types::ClientDataRequest::new("ingest", "2.1.0").with_data("host", "edit-01"),
    );
    // the failure is logged, never returned
    handle.await.unwrap();
}

#[tokio::test]
async fn list_agents_page_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/brokers/b1/agents"))
        .and(query_param("page", "3"))
        .and(query_param("per_page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("agents.json")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let agents = client
        .list_agents("b1", &PageQuery::new(3, 1))
        .await
        .unwrap();
    assert_eq!(agents.status_code, 200);
    assert_eq!(agents.agents[0].name, "bp-agent");
}

/// Serves a 500 that promises more body than it sends, then hangs up.
async fn truncated_error_server() -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            let _ = socket
                .write_all(
                    b"HTTP/1.1 500 Internal Server Error\r\n\
                      Content-Type: application/json\r\n\
                      Content-Length: 500\r\n\r\n{\"mess",
                )
                .await;
            let _ = socket.shutdown().await;
        }
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn unreadable_error_body_keeps_cause() {
    let config = ClientConfig::new(&truncated_error_server().await, "u", "p")
        .unwrap()
        .with_long_lived_token("test-token");
    let client = Client::new(&config).unwrap();

    let err = client.system_info().await.unwrap_err();
    match &err {
        Error::Http { status, body, .. } => {
            assert_eq!(*status, 500);
            assert!(body.is_empty());
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_ne!(err.message(), "Error");
    assert!(!err.message().is_empty());

    let err = client
        .update_user("bob", &UserUpdateRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 500);
    assert_ne!(err.message(), "Error");
}
