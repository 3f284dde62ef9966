// SPDX-FileCopyrightText: 2026 Foods contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::ops::Deref;

/// Catalog item identifier.
///
/// An `ItemId` is assigned by the remote catalog service when an item is
/// created and stays stable for the lifetime of the item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Creates a new `ItemId` from a string.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for ItemId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A catalog entry as the remote service serves it.
///
/// Field names on the wire follow the service's JSON: `desc`, `oldprice`
/// and `url`. `oldprice` is absent for items without a previous price and
/// is served back exactly as stored, including an explicit zero.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Item {
    /// Server-assigned identifier.
    pub id: ItemId,
    /// Display title.
    pub title: String,
    /// Descriptive text.
    #[serde(rename = "desc")]
    pub description: String,
    /// Current price.
    pub price: f64,
    /// Previous price, shown struck through next to the current one.
    #[serde(rename = "oldprice", default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<f64>,
    /// Image URI.
    #[serde(rename = "url")]
    pub image_url: String,
}

impl Item {
    /// Whether a previous price should be displayed against the current
    /// one. Only a missing `oldprice` counts as "no discount"; an explicit
    /// zero is kept.
    #[must_use]
    pub const fn has_discount(&self) -> bool {
        self.old_price.is_some()
    }
}

/// Payload for creating an item; the service assigns the identifier.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ItemDraft {
    /// Display title.
    pub title: String,
    /// Descriptive text.
    #[serde(rename = "desc")]
    pub description: String,
    /// Current price.
    pub price: f64,
    /// Previous price, if any.
    #[serde(rename = "oldprice", default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<f64>,
    /// Image URI.
    #[serde(rename = "url")]
    pub image_url: String,
}

impl ItemDraft {
    /// Attaches an identifier, turning the draft into a full item.
    #[must_use]
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            old_price: self.old_price,
            image_url: self.image_url,
        }
    }
}
