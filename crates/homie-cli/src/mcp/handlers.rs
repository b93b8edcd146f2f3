//! MCP tool handlers implementation

use std::{fmt::Display, sync::Arc};

use homie_core::{
    display::{OperationStatus, ToggleResult},
    params as core, ActionResponse, Dashboard, DashboardError, ToggleResponse,
};
use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::to_mcp_error;

// Core parameter types stay free of MCP derives; this transparent wrapper
// adds them at the protocol boundary.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type ToggleTask = McpParams<core::ToggleTask>;
pub type RunAction = McpParams<core::RunAction>;
pub type ServiceLogs = McpParams<core::ServiceLogs>;
pub type ReadMemory = McpParams<core::ReadMemory>;
pub type ListActivity = McpParams<core::ListActivity>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    dashboard: Arc<Dashboard>,
}

impl McpHandlers {
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        Self { dashboard }
    }

    pub async fn get_task_board(&self) -> McpResult {
        debug!("get_task_board");

        let board = self
            .dashboard
            .board()
            .await
            .map_err(|e| to_mcp_error("Failed to build task board", &e))?;
        view(&board)
    }

    pub async fn toggle_task(&self, Parameters(params): Parameters<ToggleTask>) -> McpResult {
        debug!("toggle_task: {:?}", params);

        let params = params.as_ref();
        match self.dashboard.toggle(params).await {
            Ok(item) => {
                let result = ToggleResult::new(params.path.clone(), item);
                Ok(CallToolResult::success(vec![
                    Content::text(result.to_string()),
                    Content::text(to_json(&ToggleResponse::success("Task updated"))?),
                ]))
            }
            Err(e) => Ok(CallToolResult::error(vec![
                Content::text(OperationStatus::from(&e).to_string()),
                Content::text(to_json(&ToggleResponse::failure(&e))?),
            ])),
        }
    }

    pub fn list_actions(&self) -> McpResult {
        debug!("list_actions");

        view(&self.dashboard.actions_catalog())
    }

    pub async fn run_action(&self, Parameters(params): Parameters<RunAction>) -> McpResult {
        debug!("run_action: {:?}", params);
        self.dispatch(params.as_ref()).await
    }

    /// Dispatches a fixed action id on behalf of a dedicated tool.
    pub async fn run_named_action(&self, id: &str) -> McpResult {
        debug!("run_named_action: {id}");
        self.dispatch(&core::RunAction {
            action: id.to_string(),
        })
        .await
    }

    pub async fn get_service_logs(&self, Parameters(params): Parameters<ServiceLogs>) -> McpResult {
        debug!("get_service_logs: {:?}", params);

        match self.dashboard.service_logs(params.as_ref()).await {
            Ok(logs) => Ok(CallToolResult::success(vec![Content::text(logs)])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(
                OperationStatus::from(&e).to_string(),
            )])),
        }
    }

    pub async fn get_memory(&self, Parameters(params): Parameters<ReadMemory>) -> McpResult {
        debug!("get_memory: {:?}", params);

        let day = self
            .dashboard
            .memory(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to read memory journal", &e))?;
        view(&day)
    }

    pub async fn get_activity(&self, Parameters(params): Parameters<ListActivity>) -> McpResult {
        debug!("get_activity: {:?}", params);

        let feed = self
            .dashboard
            .activity(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to read memory journal", &e))?;
        view(&feed)
    }

    pub async fn get_issues(&self) -> McpResult {
        debug!("get_issues");

        let report = self
            .dashboard
            .issues()
            .await
            .map_err(|e| to_mcp_error("Failed to read memory journal", &e))?;
        view(&report)
    }

    async fn dispatch(&self, params: &core::RunAction) -> McpResult {
        let result = self.dashboard.run_action(params).await;
        let response = ActionResponse::from(result.clone());
        let summary = match &result {
            Ok(run) => run.to_string(),
            Err(e) => OperationStatus::from(e).to_string(),
        };
        let content = vec![Content::text(summary), Content::text(to_json(&response)?)];

        if response.ok {
            Ok(CallToolResult::success(content))
        } else {
            Ok(CallToolResult::error(content))
        }
    }
}

/// Markdown summary followed by the JSON form.
fn view<T: Serialize + Display>(value: &T) -> McpResult {
    Ok(CallToolResult::success(vec![
        Content::text(value.to_string()),
        Content::text(to_json(value)?),
    ]))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ErrorData> {
    serde_json::to_string_pretty(value)
        .map_err(|e| to_mcp_error("Failed to serialize response", &DashboardError::from(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_are_transparent() {
        let params: ToggleTask =
            serde_json::from_str(r#"{"path": "TODO.md", "line_no": 3, "done": true}"#).unwrap();
        assert_eq!(params.as_ref().path, "TODO.md");
        assert_eq!(params.as_ref().line_no, 3);
        assert!(params.as_ref().done);

        let logs: ServiceLogs =
            serde_json::from_str(r#"{"service": "openclaw-gateway.service"}"#).unwrap();
        assert_eq!(logs.as_ref().lines, core::DEFAULT_LOG_LINES);

        let memory: ReadMemory = serde_json::from_str(r#"{"date": "2024-05-02"}"#).unwrap();
        assert_eq!(memory.as_ref().date.as_deref(), Some("2024-05-02"));
        let activity: ListActivity = serde_json::from_str("{}").unwrap();
        assert_eq!(activity.as_ref().limit, core::DEFAULT_ACTIVITY_LIMIT);
    }
}
