//! Development tasks for the copy-lint workspace.
//!
//! `cargo run -p xtask -- man` writes man pages and `-- completions` writes
//! shell completion scripts, both generated from the CLI's clap definition.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

const BIN_NAME: &str = "copy-lint";

#[derive(Parser)]
#[command(name = "xtask", about = "copy-lint development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
        /// Only this shell (default: all)
        #[arg(long, value_enum)]
        shell: Option<Shell>,
    },
}

fn main() -> anyhow::Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => man(&out),
        Task::Completions { out, shell } => completions(&out, shell),
    }
}

fn man(out: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;

    let cmd = copy_lint::command();
    clap_mangen::generate_to(cmd, out).context("failed to render man pages")?;
    println!("man pages written to {}", out.display());
    Ok(())
}

fn completions(out: &Path, shell: Option<Shell>) -> anyhow::Result<()> {
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;

    let shells = match shell {
        Some(shell) => vec![shell],
        None => vec![
            Shell::Bash,
            Shell::Zsh,
            Shell::Fish,
            Shell::PowerShell,
            Shell::Elvish,
        ],
    };

    let mut cmd = copy_lint::command();
    for shell in shells {
        let path = clap_complete::generate_to(shell, &mut cmd, BIN_NAME, out)
            .with_context(|| format!("failed to write {shell} completions"))?;
        println!("{}", path.display());
    }
    Ok(())
}
