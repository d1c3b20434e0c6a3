use crate::config::load_config;
use crate::layout::UnreachablePolicy;
use crate::model::MindMapContent;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "mindlayout", version, about = "Mind-map auto-layout and connection tool")]
pub struct Args {
    /// Config JSON file (layout spacing, edge defaults)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Arrange a saved mind map and write it back as JSON
    Layout {
        /// Input map (.json) or '-' for stdin
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,

        /// Output file. Defaults to stdout.
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,

        /// Where nodes unreachable from the root go: level-zero, trailing-level
        #[arg(short = 'u', long = "unreachable", value_parser = parse_unreachable)]
        unreachable: Option<UnreachablePolicy>,

        /// Re-place only the descendants of this node
        #[arg(long = "subtree")]
        subtree: Option<String>,
    },
    /// Build the edge between two nodes
    Connect {
        source: String,
        target: String,

        /// Append the edge to this map instead of printing it alone
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,

        /// Output file. Defaults to stdout.
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
}

fn parse_unreachable(s: &str) -> Result<UnreachablePolicy, String> {
    UnreachablePolicy::from_name(s)
        .ok_or_else(|| format!("invalid policy '{}' (expected level-zero or trailing-level)", s))
}

pub fn run() -> Result<()> {
    run_with(Args::parse(), io::stdin().lock(), io::stdout().lock())
}

/// Run one parsed command. `stdin` is read for '-' or a missing `--input`;
/// results go to `stdout` unless `--output` names a file.
pub fn run_with(args: Args, mut stdin: impl Read, mut stdout: impl Write) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Layout {
            input,
            output,
            unreachable,
            subtree,
        } => {
            let mut content = read_content(input.as_deref(), &mut stdin)?;
            for edge in content.dangling_edges() {
                eprintln!("warning: skipping edge {}: endpoint not in map", edge.id);
            }

            let mut engine = config.layout_engine();
            if let Some(policy) = unreachable {
                engine = engine.with_unreachable(policy);
            }

            content.nodes = match subtree.as_deref() {
                Some(root) => engine.layout_subtree(&content.nodes, &content.edges, root),
                None => engine.layout(&content.nodes, &content.edges),
            };
            write_output(&content.to_json_pretty()?, output.as_deref(), &mut stdout)
        }
        Command::Connect {
            source,
            target,
            input,
            output,
        } => {
            let manager = config.connection_manager();
            match input {
                Some(path) => {
                    let mut content = read_content(Some(&path), &mut stdin)?;
                    manager
                        .connect(&mut content.edges, &source, &target)
                        .with_context(|| format!("cannot connect {} -> {}", source, target))?;
                    write_output(&content.to_json_pretty()?, output.as_deref(), &mut stdout)
                }
                None => {
                    let edge = manager.create_edge(&source, &target)?;
                    write_output(
                        &serde_json::to_string_pretty(&edge)?,
                        output.as_deref(),
                        &mut stdout,
                    )
                }
            }
        }
    }
}

fn read_content(path: Option<&Path>, stdin: &mut impl Read) -> Result<MindMapContent> {
    let raw = match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(MindMapContent::from_json(&raw)?)
}

fn write_output(json: &str, path: Option<&Path>, stdout: &mut impl Write) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, format!("{}\n", json))
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            writeln!(stdout, "{}", json)?;
            Ok(())
        }
    }
}
