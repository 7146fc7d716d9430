//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

/// Build and validate name-keyed hierarchies from child-parent relation statements
#[derive(Parser, Debug)]
#[command(name = "reltree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging, repeat for more verbosity
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Print version info
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the hierarchy and print the indented view
    Show {
        /// Relations file, one "<child> <parent>" statement per line
        file: Option<PathBuf>,
    },

    /// Show the hierarchy as a tree diagram
    Tree {
        /// Relations file
        file: Option<PathBuf>,
    },

    /// Validate the relations without printing the hierarchy
    Check {
        /// Relations file
        file: Option<PathBuf>,
    },

    /// List leaf node names
    Leaves {
        /// Relations file
        file: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show config paths
    Path,

    /// Create config template
    Init,
}
