//! `HttpCatalog` against a local mock server.

use cocktaildb::catalog::{to_detail, to_summaries, CatalogClient, HttpCatalog};
use cocktaildb::CatalogError;
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn search_sends_the_term_as_the_s_parameter() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/search.php")
                .query_param("s", "gin fizz");
            then.status(200).json_body(json!({
                "drinks": [{
                    "idDrink": "11417",
                    "strDrink": "Gin Fizz",
                    "strGlass": "Highball glass",
                    "strAlcoholic": "Alcoholic",
                    "strDrinkThumb": null,
                }]
            }));
        })
        .await;

    let catalog = HttpCatalog::new(server.base_url());
    let raw = catalog.search_by_name("gin fizz").await.unwrap();
    let summaries = to_summaries(&raw).unwrap();

    mock.assert_async().await;
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].name, "Gin Fizz");
    assert_eq!(summaries[0].image_url, "");
}

#[tokio::test]
async fn lookup_sends_the_id_as_the_i_parameter() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/lookup.php").query_param("i", "123");
            then.status(200).json_body(json!({
                "drinks": [{ "idDrink": "123", "strDrink": "Mojito", "strIngredient1": "Rum" }]
            }));
        })
        .await;

    let catalog = HttpCatalog::new(format!("{}/", server.base_url()));
    let raw = catalog.lookup_by_id("123").await.unwrap();

    mock.assert_async().await;
    let detail = to_detail(&raw).unwrap();
    assert_eq!(detail.name, "Mojito");
    assert_eq!(detail.ingredients, vec!["Rum"]);
}

#[tokio::test]
async fn error_status_with_json_body_is_still_parsed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path("/lookup.php");
            then.status(404).json_body(json!({ "drinks": null }));
        })
        .await;

    let raw = HttpCatalog::new(server.base_url())
        .lookup_by_id("0")
        .await
        .unwrap();
    assert!(to_detail(&raw).is_none());
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path("/search.php");
            then.status(502).body("<html>bad gateway</html>");
        })
        .await;

    let result = HttpCatalog::new(server.base_url()).search_by_name("a").await;
    assert!(matches!(result, Err(CatalogError::Decode(_))));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    // Nothing listens on port 1.
    let err = HttpCatalog::new("http://127.0.0.1:1/api")
        .search_by_name("a")
        .await
        .unwrap_err();
    assert!(err.is_transport(), "expected transport error, got {err:?}");
}
