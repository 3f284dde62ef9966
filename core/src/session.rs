// SPDX-FileCopyrightText: 2026 Foods contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The single in-progress create-or-edit operation.

use foods_api::{Item, ItemDraft, ItemId};

use crate::error::SyncError;

/// A form field the presentation layer can write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Display title.
    Title,
    /// Descriptive text.
    Description,
    /// Current price.
    Price,
    /// Previous price; an empty value means "none".
    OldPrice,
    /// Image URI.
    ImageUrl,
}

/// Text working copy of an item, held the way a form front end feeds it in.
///
/// Numbers stay as text until submission so partial input never has to be
/// representable; validation happens once, when the user submits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    /// Display title.
    pub title: String,
    /// Descriptive text.
    pub description: String,
    /// Current price, as entered.
    pub price: String,
    /// Previous price, as entered; empty means "none".
    pub old_price: String,
    /// Image URI.
    pub image_url: String,
}

impl ItemForm {
    /// Snapshots an existing item into form fields.
    #[must_use]
    pub fn from_item(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            price: item.price.to_string(),
            old_price: item.old_price.map(|p| p.to_string()).unwrap_or_default(),
            image_url: item.image_url.clone(),
        }
    }

    /// Writes a value into the given field.
    pub fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::Price => &mut self.price,
            Field::OldPrice => &mut self.old_price,
            Field::ImageUrl => &mut self.image_url,
        };
        *slot = value.to_string();
    }

    /// Validates required fields and price formats, producing the payload
    /// to send. Field values are passed through as entered.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(&self) -> Result<ItemDraft, SyncError> {
        if self.title.trim().is_empty() {
            return Err(SyncError::Validation("title must not be empty".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(SyncError::Validation(
                "description must not be empty".to_string(),
            ));
        }
        if self.image_url.trim().is_empty() {
            return Err(SyncError::Validation(
                "image URL must not be empty".to_string(),
            ));
        }

        let price = parse_price(&self.price, "price")?;
        let old_price = match self.old_price.trim() {
            "" => None,
            raw => Some(parse_price(raw, "old price")?),
        };

        Ok(ItemDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            price,
            old_price,
            image_url: self.image_url.clone(),
        })
    }
}

fn parse_price(raw: &str, field: &str) -> Result<f64, SyncError> {
    let price: f64 = raw
        .trim()
        .parse()
        .map_err(|_| SyncError::Validation(format!("{field} must be a number")))?;

    if !price.is_finite() || price < 0.0 {
        return Err(SyncError::Validation(format!(
            "{field} must be a non-negative number"
        )));
    }

    Ok(price)
}

/// The single in-progress create-or-edit operation, if any.
///
/// A tagged variant keeps "editing" and "composing" mutually exclusive;
/// entering either state discards whatever was in progress before.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    /// No edit in progress.
    #[default]
    Idle,
    /// Editing an existing item.
    Editing {
        /// Identifier of the item being edited.
        id: ItemId,
        /// Working copy of the item's fields.
        form: ItemForm,
    },
    /// Composing a new item; the service assigns the id at submission.
    Composing {
        /// Working copy of the draft's fields.
        form: ItemForm,
    },
}

impl EditSession {
    /// Starts editing an existing item, discarding any prior session.
    pub fn begin_edit(&mut self, item: &Item) {
        tracing::debug!(id = %item.id, "starting edit session");
        *self = Self::Editing {
            id: item.id.clone(),
            form: ItemForm::from_item(item),
        };
    }

    /// Starts composing a new item, discarding any prior session.
    pub fn begin_compose(&mut self) {
        tracing::debug!("starting compose session");
        *self = Self::Composing {
            form: ItemForm::default(),
        };
    }

    /// Writes into the active working copy; no-op when idle.
    pub fn update_field(&mut self, field: Field, value: &str) {
        match self {
            Self::Idle => {
                tracing::debug!(?field, "ignoring field update with no active session");
            }
            Self::Editing { form, .. } | Self::Composing { form } => form.set(field, value),
        }
    }

    /// Discards unsaved edits and returns to idle.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// True when no edit is in progress.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The active working copy, if any.
    #[must_use]
    pub const fn form(&self) -> Option<&ItemForm> {
        match self {
            Self::Idle => None,
            Self::Editing { form, .. } | Self::Composing { form } => Some(form),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn burger() -> Item {
        Item {
            id: ItemId::from("1"),
            title: "Smash Burger".to_string(),
            description: "Double patty".to_string(),
            price: 9.5,
            old_price: Some(12.0),
            image_url: "https://img.example.com/burger.jpg".to_string(),
        }
    }

    #[test]
    fn begin_edit_snapshots_item_fields() {
        let mut session = EditSession::default();
        session.begin_edit(&burger());

        let EditSession::Editing { id, form } = &session else {
            panic!("expected editing session");
        };
        assert_eq!(id.as_str(), "1");
        assert_eq!(form.title, "Smash Burger");
        assert_eq!(form.price, "9.5");
        assert_eq!(form.old_price, "12");
    }

    #[test]
    fn entering_a_session_discards_the_previous_one() {
        let mut session = EditSession::default();
        session.begin_edit(&burger());
        session.update_field(Field::Title, "Changed");

        session.begin_compose();

        let EditSession::Composing { form } = &session else {
            panic!("expected composing session");
        };
        assert_eq!(form.title, "");
    }

    #[test]
    fn update_field_is_a_noop_when_idle() {
        let mut session = EditSession::default();
        session.update_field(Field::Title, "Ghost");
        assert!(session.is_idle());
    }

    #[test]
    fn cancel_discards_unsaved_edits() {
        let mut session = EditSession::default();
        session.begin_compose();
        session.update_field(Field::Title, "Lemonade");

        session.cancel();
        assert!(session.is_idle());
        assert!(session.form().is_none());
    }

    #[test]
    fn validate_rejects_blank_title() {
        let mut session = EditSession::default();
        session.begin_compose();
        session.update_field(Field::Description, "Fresh squeezed");
        session.update_field(Field::Price, "3.5");
        session.update_field(Field::ImageUrl, "https://img.example.com/l.jpg");

        let err = session.form().unwrap().validate().unwrap_err();
        assert!(matches!(err, SyncError::Validation(_)), "got {err:?}");
    }

    #[test]
    fn validate_rejects_unparseable_and_negative_prices() {
        let mut form = ItemForm {
            title: "Lemonade".to_string(),
            description: "Fresh squeezed".to_string(),
            price: "three".to_string(),
            old_price: String::new(),
            image_url: "https://img.example.com/l.jpg".to_string(),
        };
        assert!(form.validate().is_err());

        form.price = "-1".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn validate_treats_empty_old_price_as_absent() {
        let form = ItemForm {
            title: "Lemonade".to_string(),
            description: "Fresh squeezed".to_string(),
            price: "3.5".to_string(),
            old_price: String::new(),
            image_url: "https://img.example.com/l.jpg".to_string(),
        };

        let draft = form.validate().unwrap();
        assert_eq!(draft.old_price, None);
        assert_eq!(draft.price, 3.5);
    }

    #[test]
    fn validate_keeps_explicit_zero_old_price() {
        let form = ItemForm {
            title: "Lemonade".to_string(),
            description: "Fresh squeezed".to_string(),
            price: "3.5".to_string(),
            old_price: "0".to_string(),
            image_url: "https://img.example.com/l.jpg".to_string(),
        };

        let draft = form.validate().unwrap();
        assert_eq!(draft.old_price, Some(0.0));
    }
}
