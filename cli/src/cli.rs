// SPDX-FileCopyrightText: 2026 Foods contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};
use foods_core::Storefront;

use crate::command;
use crate::config;

/// Browse and edit the food catalog from the terminal.
#[derive(Debug, Parser)]
#[command(name = config::APP_NAME)]
#[command(about = "Browse and edit the food catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Catalog service base URL (overrides the configuration file)
    #[arg(long)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the catalog
    List,
    /// Show a single item
    Show {
        /// Item identifier
        id: String,
    },
    /// Add a new item to the catalog
    Add(AddArgs),
    /// Edit an existing item
    Edit(EditArgs),
    /// Remove an item from the catalog
    Remove {
        /// Item identifier
        id: String,
    },
}

/// Fields for a new item.
#[derive(Debug, clap::Args)]
pub struct AddArgs {
    /// Display title
    #[arg(long)]
    pub title: String,

    /// Descriptive text
    #[arg(long)]
    pub desc: String,

    /// Current price, e.g. 9.5
    #[arg(long)]
    pub price: String,

    /// Previous price, shown struck through next to the current one
    #[arg(long)]
    pub old_price: Option<String>,

    /// Image URL
    #[arg(long)]
    pub url: String,
}

/// Field overrides for an edit; omitted fields keep their current value.
#[derive(Debug, clap::Args)]
pub struct EditArgs {
    /// Item identifier
    pub id: String,

    /// New display title
    #[arg(long)]
    pub title: Option<String>,

    /// New descriptive text
    #[arg(long)]
    pub desc: Option<String>,

    /// New price
    #[arg(long)]
    pub price: Option<String>,

    /// New previous price; pass an empty string to clear it
    #[arg(long)]
    pub old_price: Option<String>,

    /// New image URL
    #[arg(long)]
    pub url: Option<String>,
}

impl Cli {
    /// Execute the selected command.
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        let config = config::load(self.config, self.api_url).await?;
        let storefront = Storefront::new(config)?;

        match self.command {
            Commands::List => command::list(&storefront).await,
            Commands::Show { id } => command::show(&storefront, &id).await,
            Commands::Add(args) => command::add(&storefront, &args).await,
            Commands::Edit(args) => command::edit(&storefront, &args).await,
            Commands::Remove { id } => command::remove(&storefront, &id).await,
        }
    }
}
