//! Session command: a line-delimited JSON message loop.
//!
//! Each stdin line is one request object tagged by `"type"`. Each request
//! gets exactly one response line on stdout. Failed requests are answered
//! with `{"type":"error","message":...}` and the loop keeps going.

use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use copy_lint_core::config::Config;
use copy_lint_core::{Dispatcher, Host};

use super::settings_store;
use crate::host::{CliHost, FileDocument};

/// Arguments for the `session` subcommand.
#[derive(Args, Debug, Default)]
pub struct SessionArgs {
    /// Files that make up the selection.
    pub files: Vec<Utf8PathBuf>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename = "error")]
struct ErrorReply {
    message: String,
}

fn error_reply(message: String) -> serde_json::Result<String> {
    serde_json::to_string(&ErrorReply { message })
}

/// Serve requests from stdin until EOF.
#[instrument(name = "cmd_session", skip_all, fields(files = args.files.len()))]
pub fn cmd_session(
    args: SessionArgs,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    if args.files.iter().any(|f| f.as_str() == "-") {
        bail!("session reads requests from stdin; pass files by path");
    }

    let document = FileDocument::load(&args.files, max_input_bytes)?;
    let mut host = CliHost::new(document, settings_store(config)?);
    let dispatcher = Dispatcher::with_builtin_commands();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let handled = run_session(&dispatcher, &mut host, stdin.lock(), stdout.lock())?;
    debug!(requests = handled, "session ended");
    Ok(())
}

/// Answer every non-blank line of `input` on `output`. Returns the number
/// of requests handled.
pub fn run_session<H, R, W>(
    dispatcher: &Dispatcher<H>,
    host: &mut H,
    mut input: R,
    mut output: W,
) -> anyhow::Result<usize>
where
    H: Host + 'static,
    R: BufRead,
    W: Write,
{
    let mut handled = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input
            .read_until(b'\n', &mut buf)
            .context("failed to read request")?
            == 0
        {
            break;
        }

        let reply = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => match dispatcher.dispatch_str(host, line.trim_end()) {
                Ok(response) => serde_json::to_string(&response)?,
                Err(e) => {
                    warn!(error = %e, "request failed");
                    error_reply(e.to_string())?
                }
            },
            Err(e) => {
                warn!(error = %e, "request is not UTF-8");
                error_reply(format!("request is not valid UTF-8: {e}"))?
            }
        };
        writeln!(output, "{reply}").context("failed to write response")?;
        output.flush().context("failed to write response")?;
        handled += 1;
    }
    Ok(handled)
}
