// SPDX-FileCopyrightText: 2026 Foods contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Command handlers driving the storefront with user intents.

use std::error::Error;
use std::io;

use colored::Colorize as _;
use foods_core::{Field, ItemId, Storefront};

use crate::cli::{AddArgs, EditArgs};
use crate::formatter::{ItemFormatter, format_price};

/// Refresh the catalog and render every item.
pub async fn list(storefront: &Storefront) -> Result<(), Box<dyn Error>> {
    storefront.refresh().await?;

    let view = storefront.view();
    tracing::debug!(count = view.items.len(), "rendering catalog");

    ItemFormatter::new().write(&mut io::stdout(), &view.items)?;
    Ok(())
}

/// Render a single item with full details.
pub async fn show(storefront: &Storefront, id: &str) -> Result<(), Box<dyn Error>> {
    storefront.refresh().await?;

    let view = storefront.view();
    let item = view
        .items
        .iter()
        .find(|item| item.id.as_str() == id)
        .ok_or_else(|| format!("No item with id {id}"))?;

    println!("{}", item.title.bold());
    println!("{}", format_price(item));
    println!("{}", item.description);
    println!("{}", item.image_url.blue());
    Ok(())
}

/// Compose and submit a new item.
pub async fn add(storefront: &Storefront, args: &AddArgs) -> Result<(), Box<dyn Error>> {
    storefront.begin_compose();
    storefront.update_field(Field::Title, &args.title);
    storefront.update_field(Field::Description, &args.desc);
    storefront.update_field(Field::Price, &args.price);
    if let Some(old_price) = &args.old_price {
        storefront.update_field(Field::OldPrice, old_price);
    }
    storefront.update_field(Field::ImageUrl, &args.url);

    storefront.submit().await?;
    println!("{}", "Item created.".green());
    Ok(())
}

/// Snapshot an existing item, apply the provided fields and submit.
pub async fn edit(storefront: &Storefront, args: &EditArgs) -> Result<(), Box<dyn Error>> {
    storefront.refresh().await?;

    let view = storefront.view();
    let item = view
        .items
        .iter()
        .find(|item| item.id.as_str() == args.id)
        .ok_or_else(|| format!("No item with id {}", args.id))?;
    storefront.begin_edit(item);

    let overrides = [
        (Field::Title, &args.title),
        (Field::Description, &args.desc),
        (Field::Price, &args.price),
        (Field::OldPrice, &args.old_price),
        (Field::ImageUrl, &args.url),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            storefront.update_field(field, value);
        }
    }

    storefront.submit().await?;
    println!("{}", "Item updated.".green());
    Ok(())
}

/// Delete an item.
pub async fn remove(storefront: &Storefront, id: &str) -> Result<(), Box<dyn Error>> {
    storefront.remove(&ItemId::from(id)).await?;
    println!("{}", "Item removed.".green());
    Ok(())
}
