//! Urls command: save and show word-list URLs.

use anyhow::bail;
use clap::{Args, Subcommand};
use owo_colors::OwoColorize;
use tracing::instrument;

use copy_lint_core::config::Config;
use copy_lint_core::dispatch::{self, Dispatcher, Response, SaveUrls};

use super::settings_store;
use crate::host::{CliHost, FileDocument};

/// Arguments for the `urls` subcommand.
#[derive(Args, Debug)]
pub struct UrlsArgs {
    /// Action to perform.
    #[command(subcommand)]
    pub action: UrlsAction,
}

/// `urls` actions.
#[derive(Subcommand, Debug)]
pub enum UrlsAction {
    /// Save word-list URLs (an omitted URL is cleared)
    #[command(arg_required_else_help = true)]
    Save {
        /// GitHub-hosted word-list URL
        #[arg(long, value_name = "URL")]
        github: Option<String>,
        /// GitLab-hosted word-list URL
        #[arg(long, value_name = "URL")]
        gitlab: Option<String>,
    },
    /// Show saved word-list URLs
    Show,
}

/// Save or show the stored word-list URLs.
#[instrument(name = "cmd_urls", skip_all)]
pub fn cmd_urls(args: UrlsArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let mut host = CliHost::new(FileDocument::default(), settings_store(config)?);
    let dispatcher = Dispatcher::with_builtin_commands();

    let message = match args.action {
        UrlsAction::Save { github, gitlab } => {
            let payload = SaveUrls {
                github_url: github,
                gitlab_url: gitlab,
            };
            tag_message(dispatch::SAVE_URLS, serde_json::to_value(payload)?)
        }
        UrlsAction::Show => serde_json::json!({ "type": dispatch::GET_URLS }),
    };

    let response = dispatcher.dispatch(&mut host, message)?;
    if global_json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    match response {
        Response::Notify { message } => println!("{}", message.green()),
        Response::LoadUrls {
            github_url,
            gitlab_url,
        } => {
            print_url("GitHub", github_url.as_deref());
            print_url("GitLab", gitlab_url.as_deref());
        }
        other => bail!("unexpected response: {other:?}"),
    }
    Ok(())
}

fn tag_message(tag: &str, mut payload: serde_json::Value) -> serde_json::Value {
    if let Some(fields) = payload.as_object_mut() {
        fields.insert("type".to_string(), tag.into());
    }
    payload
}

fn print_url(label: &str, url: Option<&str>) {
    match url {
        Some(url) => println!("{}: {}", label.dimmed(), url.cyan()),
        None => println!("{}: {}", label.dimmed(), "(not set)".dimmed()),
    }
}
