mod common;

use common::*;
use it_infrastructure_client::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn set_and_clear_reference_data() {
    let (server, client) = setup(100).await;
    let base = format!("{}/data-assets/asset-1/is-reference-data", user_path());

    Mock::given(method("POST"))
        .and(path(base.clone()))
        .and(body_json(provenance_body()))
        .respond_with(void_response())
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{}/delete", base)))
        .and(body_json(provenance_body()))
        .respond_with(void_response())
        .expect(1)
        .mount(&server)
        .await;

    let assets = client.data_assets();
    let guid = Guid::from("asset-1");
    assets.set_as_reference_data(USER, &cmdb(), &guid).await.unwrap();
    assets.clear_as_reference_data(USER, &cmdb(), &guid).await.unwrap();
}

#[tokio::test]
async fn reference_data_requires_manager() {
    let (server, client) = setup(100).await;
    expect_no_requests(&server).await;

    let err = client
        .data_assets()
        .set_as_reference_data(USER, &InfrastructureManager::new("", "CMDB"), &Guid::from("a"))
        .await
        .unwrap_err();
    assert_eq!(invalid_parameter(err), "infrastructureManagerGUID");
}

#[tokio::test]
async fn get_reports_reference_data_classification() {
    let (server, client) = setup(100).await;

    let mut asset = element("asset-1", "DataSet", "DataSet:weekly-sales");
    asset["elementHeader"]["classifications"] = json!([
        {"classificationName": "ReferenceData"}
    ]);

    Mock::given(method("GET"))
        .and(path(format!("{}/data-assets/asset-1", user_path())))
        .respond_with(element_response(asset))
        .mount(&server)
        .await;

    let asset = client
        .data_assets()
        .get(USER, &Guid::from("asset-1"))
        .await
        .unwrap();
    assert!(asset.is_reference_data());
}

#[tokio::test]
async fn find_clamps_page_size_to_client_maximum() {
    let (server, client) = setup(50).await;

    Mock::given(method("POST"))
        .and(path(format!("{}/data-assets/by-search-string", user_path())))
        .and(query_param("startFrom", "20"))
        .and(query_param("pageSize", "50"))
        .and(body_json(json!({
            "searchString": "sales.*",
            "searchStringParameterName": "searchString"
        })))
        .respond_with(elements_response(vec![
            element("asset-1", "DataSet", "DataSet:weekly-sales"),
            element("asset-2", "DataSet", "DataSet:monthly-sales"),
        ]))
        .expect(2)
        .mount(&server)
        .await;

    let assets = client.data_assets();
    let found = assets.find(USER, "sales.*", 20, 500).await.unwrap();
    let names: Vec<&str> = found.iter().map(|a| a.qualified_name()).collect();
    assert_eq!(names, vec!["DataSet:weekly-sales", "DataSet:monthly-sales"]);

    // 0 asks for the largest page allowed
    assets.find(USER, "sales.*", 20, 0).await.unwrap();
}

#[tokio::test]
async fn find_requires_search_string() {
    let (server, client) = setup(100).await;
    expect_no_requests(&server).await;

    let err = client.data_assets().find(USER, " ", 0, 10).await.unwrap_err();
    assert_eq!(invalid_parameter(err), "searchString");
}

#[tokio::test]
async fn get_by_name_with_no_matches_is_empty() {
    let (server, client) = setup(100).await;

    Mock::given(method("POST"))
        .and(path(format!("{}/data-assets/by-name", user_path())))
        .and(body_json(json!({"name": "weekly-sales", "nameParameterName": "name"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "relatedHTTPCode": 200,
            "elements": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let found = client
        .data_assets()
        .get_by_name(USER, "weekly-sales", 0, 10)
        .await
        .unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn list_for_manager_uses_manager_path() {
    let (server, client) = setup(100).await;

    Mock::given(method("GET"))
        .and(path(format!(
            "{}/infrastructure-managers/cmdb-guid/CMDB/data-assets",
            user_path()
        )))
        .and(query_param("startFrom", "0"))
        .and(query_param("pageSize", "25"))
        .respond_with(elements_response(vec![element(
            "asset-1",
            "DataSet",
            "DataSet:weekly-sales",
        )]))
        .expect(1)
        .mount(&server)
        .await;

    let owned = client
        .data_assets()
        .list_for_manager(USER, &cmdb(), 0, 25)
        .await
        .unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].guid().as_str(), "asset-1");
}

#[tokio::test]
async fn list_for_manager_clamps_page_size() {
    let (server, client) = setup(20).await;

    Mock::given(method("GET"))
        .and(path(format!(
            "{}/infrastructure-managers/cmdb-guid/CMDB/data-assets",
            user_path()
        )))
        .and(query_param("startFrom", "40"))
        .and(query_param("pageSize", "20"))
        .respond_with(elements_response(vec![]))
        .expect(1)
        .mount(&server)
        .await;

    let owned = client
        .data_assets()
        .list_for_manager(USER, &cmdb(), 40, 1000)
        .await
        .unwrap();
    assert!(owned.is_empty());
}
