// SPDX-FileCopyrightText: 2026 Glot Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Glot CLI
//!
//! Command-line tool for keeping Android string-resource catalogs
//! sorted, complete across locales, and translated.

mod catalog;
mod commands;
mod config;
mod coverage;
mod display;
mod locale;
mod project;
mod scanner;
mod translate;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};

use commands::check::CheckArgs;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "glot")]
#[command(
    version,
    about = "Keep Android string-resource catalogs sorted, complete, and translated"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Android project root (default: current directory)
    #[arg(long, global = true, default_value = ".")]
    project_root: PathBuf,
}

/// How a command picks the resource directories it operates on.
#[derive(Args)]
struct SelectionArgs {
    /// Use this resource directory instead of the interactive picker
    #[arg(long)]
    res_dir: Option<PathBuf>,

    /// Process every resource directory in the project
    #[arg(long)]
    all_modules: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check catalogs for key ordering, coverage gaps, and unused keys
    Check {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Only check key ordering
        #[arg(long)]
        sorting: bool,

        /// Only check translation coverage between locales
        #[arg(long)]
        coverage: bool,

        /// Only check for keys no longer referenced in source
        #[arg(long)]
        unused: bool,
    },

    /// Rewrite catalog files that violate the key ordering
    Normalize {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Remove a key from every catalog of a resource directory
    Remove {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Key of the string to be removed
        #[arg(long, short)]
        key: String,
    },

    /// Translate a string into every locale and insert it sorted
    Translate {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Key for the new string (lowercase letters and underscores only)
        #[arg(long, short)]
        key: String,

        /// Text to translate (source language is auto-detected)
        #[arg(long, short)]
        value: String,

        /// Translation API key
        #[arg(long, short = 'g', env = "GOOGLE_TRANSLATE_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig {
        project_root: cli.project_root,
        api_key: None,
    };

    match cli.command {
        Commands::Check {
            selection,
            sorting,
            coverage,
            unused,
        } => {
            let checks = CheckArgs {
                sorting,
                coverage,
                unused,
            };
            commands::check::run(&config, &selection, &checks)?;
        }
        Commands::Normalize { selection } => {
            commands::normalize::run(&config, &selection)?;
        }
        Commands::Remove { selection, key } => {
            commands::remove::run(&config, &selection, &key)?;
        }
        Commands::Translate {
            selection,
            key,
            value,
            api_key,
        } => {
            config.api_key = api_key;
            commands::translate::run(&config, &selection, &key, &value).await?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "glot", &mut io::stdout());
        }
    }

    Ok(())
}
