//! Command dispatch: maps parsed arguments to operations

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::domain::{render, to_termtree, Hierarchy, HierarchyBuilder};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Show { file }) => show(file.as_deref()),
        Some(Commands::Tree { file }) => tree(file.as_deref()),
        Some(Commands::Check { file }) => check(file.as_deref()),
        Some(Commands::Leaves { file }) => leaves(file.as_deref()),
        Some(Commands::Config { command }) => config(command),
        None => Ok(()),
    }
}

/// Resolves the relations file (argument wins over the configured
/// `default_file`) and reads it into statement lines.
#[instrument(level = "debug")]
fn load_statements(file: Option<&Path>) -> CliResult<Vec<String>> {
    let path = match file {
        Some(path) => path.to_path_buf(),
        None => {
            let settings = Settings::load(Path::new("."))?;
            settings.default_file.ok_or_else(|| {
                CliError::Usage(
                    "no relations file given and no default_file configured".to_string(),
                )
            })?
        }
    };
    debug!("relations file: {:?}", path);

    if !path.exists() {
        return Err(CliError::FileNotFound(path));
    }
    let content = fs::read_to_string(&path).map_err(|source| CliError::Io { path, source })?;
    Ok(content.lines().map(str::to_string).collect())
}

fn build(file: Option<&Path>) -> CliResult<Hierarchy> {
    let statements = load_statements(file)?;
    let hierarchy = HierarchyBuilder::new().build(&statements)?;
    Ok(hierarchy)
}

#[instrument(level = "debug")]
fn show(file: Option<&Path>) -> CliResult<()> {
    let hierarchy = build(file)?;
    print!("{}", render(&hierarchy));
    Ok(())
}

#[instrument(level = "debug")]
fn tree(file: Option<&Path>) -> CliResult<()> {
    let hierarchy = build(file)?;
    for diagram in to_termtree(&hierarchy) {
        print!("{}", diagram);
    }
    Ok(())
}

#[instrument(level = "debug")]
fn check(file: Option<&Path>) -> CliResult<()> {
    let hierarchy = build(file)?;
    output::success(&format!(
        "valid hierarchy: {} nodes, {} top-level, depth {}",
        hierarchy.node_count(),
        hierarchy.top_level_count(),
        hierarchy.depth()
    ));
    Ok(())
}

#[instrument(level = "debug")]
fn leaves(file: Option<&Path>) -> CliResult<()> {
    let hierarchy = build(file)?;
    for name in hierarchy.leaf_names() {
        output::info(&name);
    }
    Ok(())
}

#[instrument(level = "debug")]
fn config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(Path::new("."))?;
            output::info(&toml::to_string_pretty(&settings)?);
        }
        ConfigCommands::Path => {
            if let Some(global) = Settings::global_path() {
                output::info(&format!("global: {}", global.display()));
            }
            output::info(&format!("local:  {}", Path::new(".reltree.toml").display()));
        }
        ConfigCommands::Init => {
            let path = PathBuf::from(".reltree.toml");
            if path.exists() {
                return Err(CliError::Usage(format!(
                    "config already exists: {}",
                    path.display()
                )));
            }
            fs::write(&path, Settings::template()).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            output::success(&format!("created {}", path.display()));
        }
    }
    Ok(())
}
