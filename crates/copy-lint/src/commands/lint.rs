//! Lint command: check copy in files against the word list.
//!
//! Each file is one selected target. The word list comes from
//! `--word-list`, the config `word_list`, or the saved URLs, in that order.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use copy_lint_core::config::Config;
use copy_lint_core::dispatch::{self, Dispatcher, Response};
use copy_lint_core::LintResult;

use super::settings_store;
use crate::host::{CliHost, FileDocument};

/// Arguments for the `lint` subcommand.
#[derive(Args, Debug)]
pub struct LintArgs {
    /// Files to lint (`-` reads stdin).
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Word-list URL or path (overrides saved URLs and config)
    #[arg(short, long, value_name = "LOCATION")]
    pub word_list: Option<String>,
}

/// Lint files and report findings per file.
#[instrument(name = "cmd_lint", skip_all, fields(files = args.files.len()))]
pub fn cmd_lint(
    args: LintArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(word_list = ?args.word_list, "executing lint command");

    let document = FileDocument::load(&args.files, max_input_bytes)?;
    let override_location = args.word_list.or_else(|| config.word_list.clone());
    let mut host =
        CliHost::new(document, settings_store(config)?).with_word_list_override(override_location);

    let response = Dispatcher::with_builtin_commands()
        .dispatch(&mut host, serde_json::json!({ "type": dispatch::LINT }))?;

    let results = match response {
        Response::LintResults { results } => results,
        Response::Notify { message } => bail!("{message}"),
        other => bail!("unexpected response to lint: {other:?}"),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let total = print_results(&results);
    if total > 0 {
        let files = results.iter().filter(|r| !r.findings.is_empty()).count();
        bail!(
            "{total} finding{} in {files} file{}",
            if total == 1 { "" } else { "s" },
            if files == 1 { "" } else { "s" },
        );
    }

    Ok(())
}

/// Print findings grouped by target. Returns the finding count.
fn print_results(results: &[LintResult]) -> usize {
    let mut total = 0;
    for result in results {
        if result.findings.is_empty() {
            println!("{} {}", "PASS".green(), result.name.bold());
            continue;
        }
        println!("{} {}", "FAIL".red(), result.name.bold());
        for finding in &result.findings {
            println!("  {} {finding}", "-".dimmed());
        }
        total += result.findings.len();
    }
    total
}
