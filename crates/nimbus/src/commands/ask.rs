//! Ask command - one-shot question.

use anyhow::Result;
use clap::Args;
use console::style;

use super::{Context, print_dim, print_tool_calls};

/// Arguments for the ask command.
#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question to ask
    #[arg(required = true)]
    pub question: Vec<String>,
}

/// Run the ask command.
pub async fn run(args: AskArgs, ctx: &Context) -> Result<()> {
    let question = args.question.join(" ");
    if question.trim().is_empty() {
        anyhow::bail!("question must not be empty");
    }

    let assistant = ctx.connect_assistant().await?;

    if ctx.verbose {
        print_dim(&format!("Question: {}", question));
    }

    let response = assistant.turn(&question).await?;

    if ctx.verbose {
        print_tool_calls(&response.tool_calls);
        print_dim(&format!("[{} model calls]", response.model_calls));
        eprintln!();
    }

    println!("{}", response.text);

    if ctx.verbose {
        eprintln!("{}", style("─".repeat(40)).dim());
    }

    Ok(())
}
