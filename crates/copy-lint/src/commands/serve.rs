//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Serve MCP requests on stdin/stdout until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(_args: ServeArgs, max_input_bytes: Option<usize>) -> anyhow::Result<()> {
    info!("starting MCP server on stdio");

    let service = ProjectServer::new()
        .with_max_input(max_input_bytes)
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    let reason = service.waiting().await.context("MCP server task failed")?;

    info!(?reason, "MCP server stopped");
    Ok(())
}
