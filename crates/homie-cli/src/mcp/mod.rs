//! MCP server implementation for Homie
//!
//! Exposes the task board, checkbox toggles, the action dispatcher, the
//! service log reader and the memory journal as MCP tools over stdio.

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use homie_core::Dashboard;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use errors::to_mcp_error;
pub use handlers::{ListActivity, McpResult, ReadMemory, RunAction, ServiceLogs, ToggleTask};

const RESTART_GATEWAY: &str = "restart_openclaw_gateway";
const RESTART_DASHBOARD: &str = "restart_homie_dashboard";
const CHECK_GATEWAY_HEALTH: &str = "check_gateway_health";

/// MCP server for Homie
#[derive(Clone)]
pub struct HomieMcpServer {
    dashboard: Arc<Dashboard>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl HomieMcpServer {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(Arc::clone(&self.dashboard))
    }

    #[tool(
        name = "get_task_board",
        description = "Aggregate every task file in the workspace into a progress board. Returns a markdown summary followed by the JSON board: projects with name, path, total, done, percent and their checkbox items (text, done, zero-based line_no)."
    )]
    async fn get_task_board(&self) -> McpResult {
        self.handlers().get_task_board().await
    }

    #[tool(
        name = "toggle_task",
        description = "Set (done=true) or clear (done=false) one checkbox. Pass the task file path (absolute or relative to the workspace) and the zero-based line_no reported by get_task_board. Only TODO.md, TASKS.md and the dashboard's own task file inside the workspace can be changed."
    )]
    async fn toggle_task(&self, params: Parameters<ToggleTask>) -> McpResult {
        self.handlers().toggle_task(params).await
    }

    #[tool(
        name = "list_actions",
        description = "List the whitelisted maintenance actions with the seconds left on each one's cooldown."
    )]
    async fn list_actions(&self) -> McpResult {
        self.handlers().list_actions()
    }

    #[tool(
        name = "run_action",
        description = "Run a whitelisted maintenance action by id (see list_actions). Each action can run at most once per cooldown window; a refused run reports seconds_left."
    )]
    async fn run_action(&self, params: Parameters<RunAction>) -> McpResult {
        self.handlers().run_action(params).await
    }

    #[tool(
        name = "restart_gateway",
        description = "Restart the OpenClaw gateway user service. Subject to the action cooldown."
    )]
    async fn restart_gateway(&self) -> McpResult {
        self.handlers().run_named_action(RESTART_GATEWAY).await
    }

    #[tool(
        name = "restart_dashboard",
        description = "Restart the homie dashboard user service. Subject to the action cooldown."
    )]
    async fn restart_dashboard(&self) -> McpResult {
        self.handlers().run_named_action(RESTART_DASHBOARD).await
    }

    #[tool(
        name = "check_gateway_health",
        description = "Show systemctl status for the OpenClaw gateway user service. Subject to the action cooldown."
    )]
    async fn check_gateway_health(&self) -> McpResult {
        self.handlers().run_named_action(CHECK_GATEWAY_HEALTH).await
    }

    #[tool(
        name = "get_service_logs",
        description = "Read recent journal lines for openclaw-gateway.service or homie-dashboard.service. lines defaults to 50 and is clamped to 1-500."
    )]
    async fn get_service_logs(&self, params: Parameters<ServiceLogs>) -> McpResult {
        self.handlers().get_service_logs(params).await
    }

    #[tool(
        name = "get_memory",
        description = "Read one day of the workspace memory journal (memory/YYYY-MM-DD.md). date defaults to the newest day; the result also lists all_dates, newest first."
    )]
    async fn get_memory(&self, params: Parameters<ReadMemory>) -> McpResult {
        self.handlers().get_memory(params).await
    }

    #[tool(
        name = "get_activity",
        description = "Recent memory journal lines from the last 7 days, newest day first, each classified by keyword (complete, error, warning, create, update, delete, setup, run, section, note). limit defaults to 50."
    )]
    async fn get_activity(&self, params: Parameters<ListActivity>) -> McpResult {
        self.handlers().get_activity(params).await
    }

    #[tool(
        name = "get_issues",
        description = "Lines of the newest memory journal day that mention errors, failures, warnings, timeouts or rate limits. nominal is true when none were found."
    )]
    async fn get_issues(&self) -> McpResult {
        self.handlers().get_issues().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for HomieMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "homie".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Homie is an operator dashboard over a workspace of markdown task files.

## Tasks
- `get_task_board` lists every project with its checkboxes and progress.
- `toggle_task` sets or clears one checkbox, addressed by file path and the zero-based line_no from the board. Re-read the board before toggling if the file may have changed.

## Actions
- `list_actions` shows the whitelisted actions and their cooldowns.
- `run_action` runs one by id; `restart_gateway`, `restart_dashboard` and `check_gateway_health` are shortcuts.
- Every run, successful or not, starts that action's cooldown.

## Logs
- `get_service_logs` reads recent journal lines for the managed services.

## Memory
- `get_memory` shows one day of the workspace memory journal.
- `get_activity` lists classified journal lines from the last week.
- `get_issues` flags errors and warnings in the newest day."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: HomieMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Homie MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
