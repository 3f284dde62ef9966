// SPDX-FileCopyrightText: 2026 Foods contributors
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod command;
mod config;
mod formatter;

pub use crate::cli::{AddArgs, Cli, Commands, EditArgs};

use std::error::Error;

use clap::Parser as _;

/// Run the foods command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    cli.run().await
}
