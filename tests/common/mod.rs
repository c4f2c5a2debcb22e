//! Shared fixtures for the contract tests: a mock platform, a client pointed
//! at it, and canned response bodies in the service's JSON shape.

#![allow(dead_code)]

use it_infrastructure_client::prelude::*;
use serde_json::{json, Value};
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USER: &str = "garygeeke";
pub const SERVER: &str = "cocoMDS1";

/// Start a mock platform and a client with the given page-size limit.
pub async fn setup(max_page_size: u32) -> (MockServer, InfrastructureClient) {
    let server = MockServer::start().await;
    let client = InfrastructureClient::builder()
        .platform_url(&server.uri())
        .server_name(SERVER)
        .max_page_size(max_page_size)
        .build()
        .expect("client should build");
    (server, client)
}

/// Path prefix every call for [`USER`] shares.
pub fn user_path() -> String {
    format!(
        "/servers/{}/open-metadata/access-services/it-infrastructure/users/{}",
        SERVER, USER
    )
}

pub fn cmdb() -> InfrastructureManager {
    InfrastructureManager::new("cmdb-guid", "CMDB")
}

pub fn provenance_body() -> Value {
    json!({
        "infrastructureManagerGUID": "cmdb-guid",
        "infrastructureManagerName": "CMDB"
    })
}

pub fn element(guid: &str, type_name: &str, qualified_name: &str) -> Value {
    json!({
        "elementHeader": {
            "class": "ElementHeader",
            "guid": guid,
            "type": {"typeName": type_name},
            "origin": {
                "sourceServer": SERVER,
                "originCategory": "EXTERNAL_SOURCE",
                "homeMetadataCollectionId": "cmdb-guid",
                "homeMetadataCollectionName": "CMDB"
            },
            "versions": {
                "createdBy": USER,
                "createTime": 1700000000000_i64,
                "version": 1
            }
        },
        "properties": {"qualifiedName": qualified_name}
    })
}

pub fn guid_response(guid: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "class": "GUIDResponse",
        "relatedHTTPCode": 200,
        "guid": guid
    }))
}

pub fn void_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "class": "VoidResponse",
        "relatedHTTPCode": 200
    }))
}

pub fn element_response(element: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "relatedHTTPCode": 200,
        "element": element
    }))
}

pub fn elements_response(elements: Vec<Value>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "relatedHTTPCode": 200,
        "elements": elements
    }))
}

/// Fail the test if any request reaches the server.
pub async fn expect_no_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

/// The offending parameter of an `InvalidParameter` error.
pub fn invalid_parameter(err: SdkError) -> String {
    match err {
        SdkError::InvalidParameter { parameter, .. } => parameter,
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}
