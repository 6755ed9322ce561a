//! Whimsy MCP Server Implementation
//!
//! Implements the MCP server with all converter tools.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::convert::MeasurementCategory;
use crate::db::Database;
use crate::models::QuirkyUnitCreate;
use crate::tools::catalog;
use crate::tools::convert;
use crate::tools::history;
use crate::tools::status::StatusTracker;

/// Whimsy MCP Service
#[derive(Clone)]
pub struct WhimsyService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    database: Database,
    tool_router: ToolRouter<WhimsyService>,
}

impl WhimsyService {
    pub fn new(database_path: PathBuf, database: Database) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(database_path))),
            database,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertMeasurementParams {
    /// Natural language measurement query, e.g. "1500 kg in cats"
    pub query: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ParseMeasurementQueryParams {
    /// Natural language measurement query to parse
    pub query: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListQuirkyUnitsByCategoryParams {
    /// Category name: weight, length, volume, time, speed, or area
    pub category: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddQuirkyUnitParams {
    pub name: String,
    pub name_plural: String,
    /// Magnitude expressed in the category's base unit (kg, m, l, s, kph)
    pub value: f64,
    /// The category's base unit; must match the category
    pub unit: String,
    /// Category name: weight, length, volume, time, speed, or area
    pub category: String,
    /// Emoji for display
    pub icon: String,
    pub description: Option<String>,
    pub fun_fact: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecentConversionsParams {
    #[serde(default = "default_history_limit")]
    pub limit: i64,
}

fn default_history_limit() -> i64 {
    10
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl WhimsyService {
    // --- Status ---

    #[tool(description = "Get the current status of the Whimsy converter service including build info, database status, and process information")]
    async fn whimsy_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for converting measurements into quirky units. Call this when starting a conversion session or when unsure how to phrase queries.")]
    fn converter_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CONVERTER_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CONVERTER_INSTRUCTIONS)]))
    }

    // --- Conversion ---

    #[tool(description = "Convert a measurement query into a quirky unit with a fun fact, e.g. \"1500 kg in cats\" -> \"333.3 House Cats\"")]
    fn convert_measurement(&self, Parameters(p): Parameters<ConvertMeasurementParams>) -> Result<CallToolResult, McpError> {
        let result = convert::convert_measurement(&self.database, &p.query).map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Parse a natural language measurement query without converting it; returns the extracted value, unit, category, and target unit")]
    fn parse_measurement_query(&self, Parameters(p): Parameters<ParseMeasurementQueryParams>) -> Result<CallToolResult, McpError> {
        let result = convert::parse_measurement_query(&p.query).map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Catalog ---

    #[tool(description = "List every quirky unit in the catalog")]
    fn list_quirky_units(&self) -> Result<CallToolResult, McpError> {
        let result = catalog::list_quirky_units(&self.database).map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List quirky units for one category (weight, length, volume, time, speed, or area)")]
    fn list_quirky_units_by_category(&self, Parameters(p): Parameters<ListQuirkyUnitsByCategoryParams>) -> Result<CallToolResult, McpError> {
        let result = catalog::list_quirky_units_by_category(&self.database, &p.category)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Add a new quirky unit to the catalog. The value must be expressed in the category's base unit (kg, m, l, s, or kph).")]
    fn add_quirky_unit(&self, Parameters(p): Parameters<AddQuirkyUnitParams>) -> Result<CallToolResult, McpError> {
        let data = QuirkyUnitCreate {
            name: p.name,
            name_plural: p.name_plural,
            value: p.value,
            unit: p.unit,
            category: MeasurementCategory::from_str(&p.category),
            icon: p.icon,
            description: p.description,
            fun_fact: p.fun_fact,
        };
        let result = catalog::add_quirky_unit(&self.database, data).map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- History ---

    #[tool(description = "List recent conversions, newest first")]
    fn recent_conversions(&self, Parameters(p): Parameters<RecentConversionsParams>) -> Result<CallToolResult, McpError> {
        let result = history::recent_conversions(&self.database, p.limit).map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for WhimsyService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "whimsy".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Whimsy Measurement Converter".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Whimsy Measurement Converter - turns measurements into quirky, relatable units. \
                 IMPORTANT: Call converter_instructions when starting a conversion session. \
                 Convert: convert_measurement (full pipeline), parse_measurement_query (parsing only). \
                 Catalog: list_quirky_units, list_quirky_units_by_category, add_quirky_unit. \
                 History: recent_conversions. \
                 Queries need a number and a short unit alias (\"1500 kg\", \"10 km\"); \
                 an optional \"in X\" phrase requests a specific quirky unit."
                    .into(),
            ),
        }
    }
}
