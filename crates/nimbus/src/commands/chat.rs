//! Chat command - interactive REPL mode.

use anyhow::Result;
use clap::Args;

use super::Context;
use super::repl::Repl;

/// Arguments for the chat command.
#[derive(Args, Debug, Default)]
pub struct ChatArgs {
    /// Print tool activity after each answer
    #[arg(long)]
    pub show_tools: bool,
}

/// Run the chat command.
pub async fn run(args: ChatArgs, ctx: &Context) -> Result<()> {
    let assistant = ctx.connect_assistant().await?;
    let mut repl = Repl::new(assistant, args.show_tools || ctx.verbose)?;
    repl.run().await
}
