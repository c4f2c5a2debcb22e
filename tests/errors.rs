//! How service failures surface to callers.

mod common;

use common::*;
use it_infrastructure_client::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn host_path() -> String {
    format!("{}/hosts/host-1", user_path())
}

#[tokio::test]
async fn ffdc_invalid_parameter_is_mapped() {
    let (server, client) = setup(100).await;

    Mock::given(method("GET"))
        .and(path(host_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "class": "GUIDResponse",
            "relatedHTTPCode": 400,
            "exceptionClassName": "org.odpi.openmetadata.frameworks.connectors.ffdc.InvalidParameterException",
            "exceptionErrorMessage": "OMAG-COMMON-400-004 The unique identifier (guid) passed on the hostGUID parameter is not recognized",
            "exceptionProperties": {"parameterName": "hostGUID"}
        })))
        .mount(&server)
        .await;

    let err = client
        .hosts()
        .get(USER, &Guid::from("host-1"))
        .await
        .unwrap_err();
    match err {
        SdkError::InvalidParameter { parameter, message } => {
            assert_eq!(parameter, "hostGUID");
            assert!(message.contains("not recognized"));
        }
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}

#[tokio::test]
async fn ffdc_not_authorized_is_mapped() {
    let (server, client) = setup(100).await;

    Mock::given(method("GET"))
        .and(path(host_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "relatedHTTPCode": 403,
            "exceptionClassName": "org.odpi.openmetadata.frameworks.connectors.ffdc.UserNotAuthorizedException",
            "exceptionErrorMessage": "user is not authorized",
            "exceptionProperties": {"userId": USER}
        })))
        .mount(&server)
        .await;

    let err = client
        .hosts()
        .get(USER, &Guid::from("host-1"))
        .await
        .unwrap_err();
    assert!(err.is_not_authorized());
    match err {
        SdkError::NotAuthorized { user_id, .. } => assert_eq!(user_id, USER),
        other => panic!("expected NotAuthorized, got {other:?}"),
    }
}

#[tokio::test]
async fn unavailable_platform_is_property_server_error() {
    let (server, client) = setup(100).await;

    Mock::given(method("GET"))
        .and(path(host_path()))
        .respond_with(ResponseTemplate::new(503).set_body_string("service unavailable"))
        .mount(&server)
        .await;

    let err = client
        .hosts()
        .get(USER, &Guid::from("host-1"))
        .await
        .unwrap_err();
    assert!(err.is_property_server());
    match err {
        SdkError::PropertyServer(HttpError::Status { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn element_without_header_is_decode_error() {
    let (server, client) = setup(100).await;

    Mock::given(method("GET"))
        .and(path(host_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "relatedHTTPCode": 200,
            "element": {"properties": {"displayName": "srv01"}}
        })))
        .mount(&server)
        .await;

    let err = client
        .hosts()
        .get(USER, &Guid::from("host-1"))
        .await
        .unwrap_err();
    match err {
        SdkError::PropertyServer(HttpError::Decode(msg)) => {
            assert!(msg.contains("Missing element header"));
            assert!(msg.contains("Missing qualified name"));
        }
        other => panic!("expected Decode, got {other:?}"),
    }
}

#[tokio::test]
async fn page_with_unusable_element_is_property_server_error() {
    let (server, client) = setup(100).await;

    Mock::given(method("POST"))
        .and(path(format!("{}/hosts/by-search-string", user_path())))
        .respond_with(elements_response(vec![
            element("host-1", "Host", "Host:srv01"),
            json!({"elementHeader": {"guid": "host-2"}, "properties": {}}),
        ]))
        .mount(&server)
        .await;

    let err = client.hosts().find(USER, "srv.*", 0, 10).await.unwrap_err();
    assert!(err.is_property_server());
    assert!(!err.is_invalid_parameter());
    assert!(!err.is_not_authorized());
    assert!(err.to_string().contains("host-2"));
}

#[tokio::test]
async fn create_without_returned_guid_is_property_server_error() {
    let (server, client) = setup(100).await;

    Mock::given(method("POST"))
        .and(path(format!("{}/hosts", user_path())))
        .respond_with(void_response())
        .mount(&server)
        .await;

    let props = HostProperties {
        qualified_name: Some("Host:srv01".to_string()),
        ..Default::default()
    };
    let err = client
        .hosts()
        .create(USER, &cmdb(), true, &props)
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::PropertyServer(HttpError::Decode(_))));
}

#[tokio::test]
async fn non_json_body_is_decode_error() {
    let (server, client) = setup(100).await;

    Mock::given(method("GET"))
        .and(path(host_path()))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let err = client
        .hosts()
        .get(USER, &Guid::from("host-1"))
        .await
        .unwrap_err();
    match err {
        SdkError::PropertyServer(HttpError::Decode(msg)) => assert!(msg.contains("<html>")),
        other => panic!("expected Decode, got {other:?}"),
    }
}
