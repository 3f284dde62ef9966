// SPDX-FileCopyrightText: 2026 Foods contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Client integration tests with wiremock.

use foods_api::{ApiError, CatalogClient, CatalogConfig, Item, ItemDraft, ItemId};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> CatalogClient {
    let config = CatalogConfig {
        base_url: server.uri(),
        ..Default::default()
    };
    CatalogClient::new(config).expect("Failed to create client")
}

#[tokio::test]
async fn client_list_items_decodes_wire_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Food"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "1",
                "title": "Smash Burger",
                "desc": "Double patty, cheddar, pickles",
                "price": 9.5,
                "oldprice": 12.0,
                "url": "https://img.example.com/burger.jpg"
            },
            {
                "id": "2",
                "title": "Lemonade",
                "desc": "Fresh squeezed",
                "price": 3.5,
                "url": "https://img.example.com/lemonade.jpg"
            }
        ])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let items = client.list_items().await.expect("Failed to list items");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id.as_str(), "1");
    assert_eq!(items[0].description, "Double patty, cheddar, pickles");
    assert_eq!(items[0].old_price, Some(12.0));
    assert!(items[0].has_discount());
    assert_eq!(items[1].old_price, None);
    assert!(!items[1].has_discount());
    assert_eq!(items[1].image_url, "https://img.example.com/lemonade.jpg");
}

#[tokio::test]
async fn client_list_items_empty_collection_is_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Food"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let items = client.list_items().await.expect("Failed to list items");

    assert!(items.is_empty());
}

#[tokio::test]
async fn client_list_items_maps_server_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Food"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.list_items().await.expect_err("Expected an error");

    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn client_list_items_maps_malformed_body_to_decode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Food"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.list_items().await.expect_err("Expected an error");

    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn client_get_item_fetches_single_item() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Food/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "7",
            "title": "Ramen",
            "desc": "Tonkotsu broth",
            "price": 11.0,
            "url": "https://img.example.com/ramen.jpg"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let item = client
        .get_item(&ItemId::from("7"))
        .await
        .expect("Failed to get item");

    assert_eq!(item.id.as_str(), "7");
    assert_eq!(item.title, "Ramen");
}

#[tokio::test]
async fn client_create_item_posts_draft_without_id() {
    let mock_server = MockServer::start().await;

    let draft = ItemDraft {
        title: "Lemonade".to_string(),
        description: "Fresh squeezed".to_string(),
        price: 3.5,
        old_price: None,
        image_url: "https://img.example.com/lemonade.jpg".to_string(),
    };

    Mock::given(method("POST"))
        .and(path("/Food"))
        .and(body_json(json!({
            "title": "Lemonade",
            "desc": "Fresh squeezed",
            "price": 3.5,
            "url": "https://img.example.com/lemonade.jpg"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "42",
            "title": "Lemonade",
            "desc": "Fresh squeezed",
            "price": 3.5,
            "url": "https://img.example.com/lemonade.jpg"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let created = client
        .create_item(&draft)
        .await
        .expect("Failed to create item");

    assert_eq!(created.id.as_str(), "42");
    assert_eq!(created.title, "Lemonade");
}

#[tokio::test]
async fn client_update_item_puts_full_body_to_item_path() {
    let mock_server = MockServer::start().await;

    let item = Item {
        id: ItemId::from("3"),
        title: "Smash Burger".to_string(),
        description: "Double patty, cheddar, pickles".to_string(),
        price: 8.0,
        old_price: Some(9.5),
        image_url: "https://img.example.com/burger.jpg".to_string(),
    };

    Mock::given(method("PUT"))
        .and(path("/Food/3"))
        .and(body_json(json!({
            "id": "3",
            "title": "Smash Burger",
            "desc": "Double patty, cheddar, pickles",
            "price": 8.0,
            "oldprice": 9.5,
            "url": "https://img.example.com/burger.jpg"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "3",
            "title": "Smash Burger",
            "desc": "Double patty, cheddar, pickles",
            "price": 8.0,
            "oldprice": 9.5,
            "url": "https://img.example.com/burger.jpg"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let updated = client
        .update_item(&item)
        .await
        .expect("Failed to update item");

    assert_eq!(updated, item);
}

#[tokio::test]
async fn client_delete_item_accepts_empty_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/Food/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client
        .delete_item(&ItemId::from("9"))
        .await
        .expect("Failed to delete item");
}

#[tokio::test]
async fn client_delete_item_surfaces_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/Food/9"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not found"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .delete_item(&ItemId::from("9"))
        .await
        .expect_err("Expected an error");

    assert!(
        matches!(err, ApiError::Status { status: 404, .. }),
        "got {err:?}"
    );
}
