//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the lint engine over stdio so assistants can check copy directly.
//! Word lists travel inline with each request; the server never fetches.
//!
//! # Tools
//!
//! - `get_info` - package name, version, and description
//! - `lint_text` - every rule, in engine order
//! - `check_static` - capitalization and misspellings only
//! - `find_replacements` - word-list matches only
//! - `detect_title_case` - sentence-case findings only

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use copy_lint_core::WordList;
use copy_lint_core::rules;

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for tools that take text and a word list.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextWithWordListParams {
    /// The copy to check.
    pub text: String,
    /// Disallowed terms mapped to suggested replacements.
    #[serde(default)]
    pub word_list: WordList,
}

/// Parameters for tools that take only text.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextParams {
    /// The copy to check.
    pub text: String,
}

#[derive(Serialize)]
struct FindingsReport<'a> {
    tool: &'a str,
    count: usize,
    findings: Vec<String>,
}

/// MCP server exposing the lint engine.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a new MCP server instance with no input limit.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input: None,
        }
    }

    /// Reject text longer than `max_input` bytes.
    #[must_use]
    pub const fn with_max_input(mut self, max_input: Option<usize>) -> Self {
        self.max_input = max_input;
        self
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    fn report(tool: &str, findings: Vec<String>) -> Result<CallToolResult, McpError> {
        let report = FindingsReport {
            tool,
            count: findings.len(),
            findings,
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
        tracing::info!(tool, count = report.count, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Run every rule over the text.
    #[tool(
        description = "Lint copy: capitalization, misspellings, word-list replacements, and sentence case. Returns findings in order."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn lint_text(
        &self,
        Parameters(params): Parameters<TextWithWordListParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "lint_text",
            terms = params.word_list.len(),
            "executing MCP tool"
        );
        self.check_size(&params.text)?;
        Self::report(
            "lint_text",
            copy_lint_core::lint(&params.text, &params.word_list),
        )
    }

    /// Capitalization and misspelling checks.
    #[tool(description = "Check that copy starts with a capital letter and has no common misspellings.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_static(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        Self::report("check_static", rules::check_static(&params.text))
    }

    /// Word-list matches.
    #[tool(
        description = "Find disallowed terms from a word list (term -> suggestion) in copy. Matching is case-insensitive on whole words."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn find_replacements(
        &self,
        Parameters(params): Parameters<TextWithWordListParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        Self::report(
            "find_replacements",
            rules::find_replacements(&params.text, &params.word_list),
        )
    }

    /// Title-case words inside sentences.
    #[tool(description = "Flag words after the first in each sentence that are written in title case.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn detect_title_case(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(&params.text)?;
        Self::report("detect_title_case", rules::detect_title_case(&params.text))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Pass copy and an optional word list to lint_text; \
                 the other tools run single rules.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn server_info_has_correct_name() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn server_has_instructions() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        let instructions = info.instructions.expect("server should have instructions");
        assert!(instructions.contains(env!("CARGO_PKG_NAME")));
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn extract_json(result: &CallToolResult) -> serde_json::Value {
        let text = extract_text(result).expect("should have text content");
        serde_json::from_str(text).expect("valid JSON")
    }

    fn words() -> WordList {
        [("utilize", "use"), ("fine", "great")].into_iter().collect()
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = ProjectServer::new();
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let json = extract_json(&result);
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn get_info_tool_returns_text_by_default() {
        let server = ProjectServer::new();
        let params = Parameters(GetInfoParams {
            format: default_format(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let text = extract_text(&result).expect("should have text content");
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn lint_text_tool_runs_all_rules_in_order() {
        let server = ProjectServer::new();
        let params = Parameters(TextWithWordListParams {
            text: "this is Fine.".to_string(),
            word_list: words(),
        });

        let result = server.lint_text(params).expect("lint_text should succeed");
        let json = extract_json(&result);
        assert_eq!(json["count"], 3);
        assert_eq!(json["findings"][0], "Text should start with a capital letter.");
        assert_eq!(json["findings"][1], "Found \"fine\": great");
        assert_eq!(
            json["findings"][2],
            "Use sentence case. \"Fine.\" in sentence \"this is Fine.\" is in title case."
        );
    }

    #[test]
    fn word_list_defaults_to_empty() {
        let params: TextWithWordListParams =
            serde_json::from_str(r#"{"text": "We utilize it."}"#).unwrap();
        assert!(params.word_list.is_empty());
    }

    #[test]
    fn word_list_parameter_drops_non_string_entries() {
        let params: TextWithWordListParams = serde_json::from_str(
            r#"{"text": "This is fine.", "word_list": {"fine": "great", "count": 3}}"#,
        )
        .unwrap();
        assert_eq!(params.word_list.len(), 1);

        let result = ProjectServer::new()
            .lint_text(Parameters(params))
            .expect("lint_text should succeed");
        let json = extract_json(&result);
        assert_eq!(json["findings"][0], "Found \"fine\": great");
    }

    #[test]
    fn find_replacements_tool_reports_matches() {
        let server = ProjectServer::new();
        let params = Parameters(TextWithWordListParams {
            text: "We utilize it.".to_string(),
            word_list: words(),
        });

        let result = server
            .find_replacements(params)
            .expect("find_replacements should succeed");
        let json = extract_json(&result);
        assert_eq!(json["findings"][0], "Found \"utilize\": use");
        assert_eq!(json["count"], 1);
    }

    #[test]
    fn check_static_and_title_case_tools() {
        let server = ProjectServer::new();

        let result = server
            .check_static(Parameters(TextParams {
                text: "the end is teh end.".to_string(),
            }))
            .expect("check_static should succeed");
        assert_eq!(extract_json(&result)["count"], 2);

        let result = server
            .detect_title_case(Parameters(TextParams {
                text: "Read The Guide.".to_string(),
            }))
            .expect("detect_title_case should succeed");
        assert_eq!(extract_json(&result)["count"], 2);
    }

    #[test]
    fn oversized_input_rejected() {
        let server = ProjectServer::new().with_max_input(Some(4));
        let err = server
            .check_static(Parameters(TextParams {
                text: "Too long.".to_string(),
            }))
            .unwrap_err();
        assert!(err.message.contains("input too large"));
    }
}
