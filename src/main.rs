// SPDX-License-Identifier: PMPL-1.0-or-later

//! localesmith: add new locales to a website checkout and publish them.
//!
//! A one-shot batch tool: derives per-locale message files from the
//! canonical English file, splices matching records into the site
//! config, and commits/pushes the result. The three mode flags are
//! mutually exclusive; with none given the tool prints usage and exits.

use anyhow::Result;
use clap::{ArgGroup, CommandFactory, Parser};
use localesmith::paths::WorkspacePaths;
use localesmith::{batch, registry, workflow};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "localesmith")]
#[command(version)]
#[command(about = "Locale-file automation: generate message files, patch the site config, publish with git")]
#[command(group = ArgGroup::new("mode").args(["setup_github_action", "add_most_used", "locales"]))]
struct Cli {
    /// Write the GitHub Actions workflow that runs this automation
    #[arg(long)]
    setup_github_action: bool,

    /// Add the 11 most used languages on the Internet
    #[arg(long)]
    add_most_used: bool,

    /// Comma-separated locale codes to add (e.g. --locales=es,fr)
    #[arg(long, value_delimiter = ',', value_name = "CODES")]
    locales: Option<Vec<String>>,

    /// Project root holding messages/ and src/config/website.tsx
    #[arg(long, default_value = ".", value_name = "DIR")]
    root: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = WorkspacePaths::new(&cli.root);

    if cli.setup_github_action {
        let written = workflow::setup_github_action(&paths)?;
        println!("Created GitHub Actions workflow: {}", written.display());
    } else if cli.add_most_used {
        batch::add_locales(&paths, &registry::most_used())?;
    } else if let Some(codes) = cli.locales {
        let requests: Vec<_> = codes
            .iter()
            .filter(|code| !code.is_empty())
            .map(|code| registry::request_for(code))
            .collect();
        batch::add_locales(&paths, &requests)?;
    } else {
        Cli::command().print_help()?;
    }

    Ok(())
}
