// SPDX-FileCopyrightText: 2026 Foods contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Shared fixtures for storefront integration tests.

use foods_core::{CatalogConfig, Storefront};
use serde_json::{Value, json};
use wiremock::MockServer;

/// Builds a storefront pointed at the given mock server.
pub fn test_storefront(server: &MockServer) -> Storefront {
    let config = CatalogConfig {
        base_url: server.uri(),
        ..Default::default()
    };
    Storefront::new(config).expect("Failed to create storefront")
}

/// A discounted item, as the service would serve it.
#[must_use]
pub fn burger_json() -> Value {
    json!({
        "id": "1",
        "title": "Smash Burger",
        "desc": "Double patty, cheddar, pickles",
        "price": 9.5,
        "oldprice": 12.0,
        "url": "https://img.example.com/burger.jpg"
    })
}

/// An item that never had a previous price.
#[must_use]
pub fn lemonade_json() -> Value {
    json!({
        "id": "2",
        "title": "Lemonade",
        "desc": "Fresh squeezed",
        "price": 3.5,
        "url": "https://img.example.com/lemonade.jpg"
    })
}
