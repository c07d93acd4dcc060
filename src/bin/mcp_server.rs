//! Pokémon Battle Arena MCP Server
//!
//! A Model Context Protocol server over stdio, built on the rmcp SDK, that
//! exposes catalog lookups and battle simulation as tools.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use pokemon_battle_arena::mcp_interface::*;
use pokemon_battle_arena::{ArenaConfig, BattleConfig, Catalog, CreatureLookup};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tokio::io::{stdin, stdout};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "pokemon-battle-arena-mcp")]
#[command(about = "MCP stdio server for the Pokémon battle arena")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog file (.json or .ron) to use instead of the built-in one
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct BattleArenaService {
    tool_router: ToolRouter<BattleArenaService>,
    catalog: Arc<Catalog>,
    battle_config: BattleConfig,
}

// Tool request structures
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupPokemonRequest {
    #[schemars(description = "Name of the Pokemon to look up")]
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SimulateBattleRequest {
    #[schemars(description = "Name of the first Pokemon")]
    pub pokemon1: String,
    #[schemars(description = "Name of the second Pokemon")]
    pub pokemon2: String,
    #[schemars(description = "Optional seed for a reproducible battle")]
    pub seed: Option<u64>,
}

#[tool_router]
impl BattleArenaService {
    pub fn new(catalog: Arc<Catalog>, battle_config: BattleConfig) -> Self {
        Self {
            tool_router: Self::tool_router(),
            catalog,
            battle_config,
        }
    }

    #[tool(description = "List all Pokemon available for battle")]
    async fn list_pokemon(&self) -> Result<CallToolResult, McpError> {
        let text = available_pokemon_display(&self.catalog);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Look up stats, types and moves of a Pokemon")]
    async fn lookup_pokemon(
        &self,
        Parameters(request): Parameters<LookupPokemonRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = pokemon_details_display(&self.catalog, &request.name);
        if self.catalog.lookup(&request.name).is_none() {
            return Ok(CallToolResult::error(vec![Content::text(text)]));
        }
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Simulate a battle between two Pokemon and return the full log as JSON")]
    async fn simulate_battle(
        &self,
        Parameters(request): Parameters<SimulateBattleRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            pokemon1 = %request.pokemon1,
            pokemon2 = %request.pokemon2,
            seed = ?request.seed,
            "simulate_battle called"
        );

        let report = match simulate_battle(
            &self.catalog,
            &request.pokemon1,
            &request.pokemon2,
            request.seed,
            &self.battle_config,
        ) {
            Ok(report) => report,
            Err(message) => return Ok(CallToolResult::error(vec![Content::text(message)])),
        };

        let json = serde_json::to_string_pretty(&report).map_err(|e| {
            McpError::internal_error(format!("Failed to serialize report: {}", e), None)
        })?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for BattleArenaService {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ArenaConfig::load(path)?,
        None => ArenaConfig::default(),
    };
    if let Some(path) = args.catalog {
        config.catalog_path = Some(path);
    }

    // stdout carries the MCP transport, so logs go to stderr.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str())),
        )
        .init();

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };
    tracing::info!(creatures = catalog.len(), "Pokémon Battle Arena MCP server starting");

    let service = BattleArenaService::new(Arc::new(catalog), config.battle);
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    let quit_reason = server.waiting().await?;

    tracing::info!(?quit_reason, "MCP server exiting");
    Ok(())
}
