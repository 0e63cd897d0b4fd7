//! Integration tests for the Assetra HTTP client

use assetra_client::api::assets::{AssetFilters, AssetInput};
use assetra_client::api::auth::Credentials;
use assetra_client::{
    clear_unauthorized_handler, set_unauthorized_handler, ApiClient, ClientError, FileUpload,
};
use serde_json::{json, Map};
use std::cell::Cell;
use std::rc::Rc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::builder()
        .base_url(server.uri())
        .tenant("acme")
        .build()
        .unwrap()
}

fn asset_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "category": "laptop",
        "status": "in_stock",
        "created_at": "2026-01-10T12:00:00Z",
        "updated_at": "2026-01-10T12:00:00Z"
    })
}

#[tokio::test]
async fn builder_requires_base_url_and_tenant() {
    let result = ApiClient::builder().tenant("acme").build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));

    let result = ApiClient::builder().base_url("http://localhost:4000").build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));

    let client = ApiClient::builder()
        .base_url("http://localhost:4000/")
        .tenant("acme")
        .build()
        .unwrap();
    assert_eq!(client.base_url(), "http://localhost:4000");
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn every_request_carries_the_tenant_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/assets"))
        .and(header("X-Tenant-ID", "acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [asset_json("a-1", "MacBook Pro")],
            "meta": { "total": 1, "page": 1, "per_page": 25, "total_pages": 1 }
        })))
        .mount(&server)
        .await;

    let page = client_for(&server)
        .list_assets(&AssetFilters::default())
        .await
        .unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.meta.total, 1);
    assert_eq!(page.data[0].name, "MacBook Pro");
}

#[tokio::test]
async fn bearer_token_is_attached_once_authenticated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/assets/a-1"))
        .and(header("authorization", "Bearer token-123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": asset_json("a-1", "Dock") })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).with_token("token-123");
    let asset = client.get_asset("a-1").await.unwrap();
    assert_eq!(asset.id, "a-1");
}

#[tokio::test]
async fn login_unwraps_the_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "access_token": "at-1",
                "refresh_token": "rt-1",
                "user": {
                    "id": "u-1",
                    "email": "kim@example.com",
                    "first_name": "Kim",
                    "last_name": "Reyes",
                    "role": "admin",
                    "status": "active"
                }
            }
        })))
        .mount(&server)
        .await;

    let session = client_for(&server)
        .login(&Credentials {
            email: "kim@example.com".into(),
            password: "hunter2!".into(),
        })
        .await
        .unwrap();
    assert_eq!(session.access_token, "at-1");
    assert!(session.user.role.is_admin());
}

#[tokio::test]
async fn filters_become_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/assets/search"))
        .and(query_param("status", "assigned"))
        .and(query_param("q", "mac"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "meta": { "total": 0, "page": 1, "per_page": 25, "total_pages": 0 }
        })))
        .mount(&server)
        .await;

    let filters = AssetFilters {
        status: Some("assigned".into()),
        q: Some("mac".into()),
        ..AssetFilters::default()
    };
    let page = client_for(&server).search_assets(&filters).await.unwrap();
    assert!(page.data.is_empty());
}

#[tokio::test]
async fn unauthorized_fires_handler_and_propagates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&server)
        .await;

    let fired = Rc::new(Cell::new(0u32));
    let counter = fired.clone();
    set_unauthorized_handler(move || counter.set(counter.get() + 1));

    let result = client_for(&server).with_token("stale").current_user().await;
    clear_unauthorized_handler();

    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));
    assert_eq!(fired.get(), 1);
}

#[tokio::test]
async fn not_found_is_classified() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/assets/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such asset"))
        .mount(&server)
        .await;

    let result = client_for(&server).get_asset("missing").await;
    assert!(matches!(result, Err(ClientError::NotFound(_))));
}

#[tokio::test]
async fn validation_errors_surface_to_the_caller() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/assets/a-1"))
        .respond_with(ResponseTemplate::new(422).set_body_string("asset is still assigned"))
        .mount(&server)
        .await;

    let result = client_for(&server).delete_asset("a-1").await;
    match result {
        Err(ClientError::ServerError { status, message }) => {
            assert_eq!(status, 422);
            assert!(message.contains("assigned"));
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn asset_create_sends_flattened_multipart() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/assets"))
        .and(wiremock::matchers::body_string_contains(
            "name=\"custom_fields[cpu]\"",
        ))
        .and(wiremock::matchers::body_string_contains(
            "name=\"custom_fields[ram_gb]\"",
        ))
        .and(wiremock::matchers::body_string_contains("name=\"photo\""))
        .and(wiremock::matchers::body_string_contains(
            "filename=\"laptop.png\"",
        ))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "data": asset_json("a-9", "MacBook Pro") })),
        )
        .mount(&server)
        .await;

    let mut custom_fields = Map::new();
    custom_fields.insert("cpu".into(), json!("M3"));
    custom_fields.insert("ram_gb".into(), json!(32));

    let input = AssetInput {
        name: Some("MacBook Pro".into()),
        category: Some("laptop".into()),
        status: Some("in_stock".into()),
        custom_fields: Some(custom_fields),
        photo: Some(FileUpload::new(
            "laptop.png",
            "image/png",
            b"png-bytes".to_vec(),
        )),
        ..AssetInput::default()
    };

    let asset = client_for(&server)
        .with_token("token-123")
        .create_asset(&input)
        .await
        .unwrap();
    assert_eq!(asset.id, "a-9");
}

#[tokio::test]
async fn employee_multipart_wraps_keys_with_the_employee_prefix() {
    use assetra_client::api::employees::EmployeeInput;

    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/employees"))
        .and(wiremock::matchers::body_string_contains(
            "name=\"employee[first_name]\"",
        ))
        .and(wiremock::matchers::body_string_contains(
            "name=\"employee[custom_fields][badge]\"",
        ))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {
                "id": "e-1",
                "first_name": "Ada",
                "last_name": "Okafor",
                "email": "ada@example.com",
                "employment_status": "active",
                "updated_at": "2026-02-01T09:00:00Z"
            }
        })))
        .mount(&server)
        .await;

    let mut custom_fields = Map::new();
    custom_fields.insert("badge".into(), json!("B-12"));

    let input = EmployeeInput {
        first_name: Some("Ada".into()),
        last_name: Some("Okafor".into()),
        email: Some("ada@example.com".into()),
        employment_status: Some("active".into()),
        custom_fields: Some(custom_fields),
        ..EmployeeInput::default()
    };

    let employee = client_for(&server)
        .with_token("token-123")
        .create_employee(&input)
        .await
        .unwrap();
    assert_eq!(employee.full_name(), "Ada Okafor");
}
