//! Tools command - list the provider's tool catalog.

use anyhow::Result;
use clap::Args;
use console::style;
use nimbus_agent::connect_with_fallback;
use nimbus_mcp::ToolInfo;
use serde_json::{Value, json};

use super::Context;

/// Arguments for the tools command.
#[derive(Args, Debug)]
pub struct ToolsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the tools command.
///
/// Only the Xweather credentials are needed; no model is contacted.
pub async fn run(args: ToolsArgs, ctx: &Context) -> Result<()> {
    let token = nimbus_config::xweather_token()?;
    let connection =
        connect_with_fallback(&ctx.config.mcp.url, &token.value, ctx.config.mcp.timeout()).await?;

    if args.json {
        let output = catalog_json(&connection.tools, &connection.auth_mode.to_string());
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} ({} auth)",
        style(&ctx.config.mcp.url).bold(),
        connection.auth_mode
    );
    println!("{}", style("─".repeat(40)).dim());

    let mut listed = 0;
    for tool in &connection.tools {
        let Some(name) = tool.usable_name() else {
            continue;
        };
        listed += 1;
        println!("  {}", style(name).cyan());
        if let Some(ref description) = tool.description {
            println!("    {}", style(first_line(description)).dim());
        }
    }

    println!();
    println!("{} tools", listed);
    Ok(())
}

fn catalog_json(tools: &[ToolInfo], auth_mode: &str) -> Value {
    let tools: Vec<Value> = tools
        .iter()
        .filter_map(|t| {
            t.usable_name().map(|name| {
                json!({
                    "name": name,
                    "description": t.description,
                })
            })
        })
        .collect();
    json!({ "auth_mode": auth_mode, "tools": tools })
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("").trim()
}
