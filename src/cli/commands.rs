//! CLI command definitions

use crate::infrastructure::{DEFAULT_BOOKSHELF_FILE, RULES_ENV};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelftag")]
#[command(about = "Convert bookshelf genres into tags and repair split tags", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Rules file (TOML) replacing the built-in tables
    #[arg(long, global = true, value_name = "PATH", env = RULES_ENV)]
    pub rules: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace each book's Genre string with a Tags list
    Convert {
        /// Bookshelf JSON file
        #[arg(default_value = DEFAULT_BOOKSHELF_FILE)]
        file: PathBuf,

        /// Also run the repair pass on the new tags
        #[arg(long)]
        repair: bool,

        /// Show the result without writing the file
        #[arg(long)]
        dry_run: bool,

        /// Copy the original file to <FILE>.bak before writing
        #[arg(long)]
        backup: bool,
    },

    /// Re-merge compound terms that were split into separate tags
    Fix {
        /// Bookshelf JSON file
        #[arg(default_value = DEFAULT_BOOKSHELF_FILE)]
        file: PathBuf,

        /// Show the result without writing the file
        #[arg(long)]
        dry_run: bool,

        /// Copy the original file to <FILE>.bak before writing
        #[arg(long)]
        backup: bool,
    },

    /// Print how genre strings would be converted (sample set if none given)
    Preview {
        /// Genre strings to convert
        genres: Vec<String>,

        /// Also run the repair pass
        #[arg(long)]
        repair: bool,
    },

    /// Show the active rule tables
    Rules {
        /// Write the built-in rules to PATH as a starter file
        #[arg(long, value_name = "PATH")]
        init: Option<PathBuf>,
    },
}
