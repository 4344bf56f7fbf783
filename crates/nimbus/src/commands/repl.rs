//! REPL (Read-Eval-Print Loop) implementation for interactive chat.

use anyhow::Result;
use console::{Term, style};
use nimbus_agent::Assistant;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

use super::{print_dim, print_error, print_tool_calls};

/// Words that end the session.
const EXIT_COMMANDS: [&str; 3] = ["exit", "quit", "q"];

/// What to do with one line of input.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Skip,
    Exit,
    Question(&'a str),
}

fn classify(line: &str) -> Input<'_> {
    let line = line.trim();
    if line.is_empty() {
        Input::Skip
    } else if EXIT_COMMANDS.iter().any(|c| line.eq_ignore_ascii_case(c)) {
        Input::Exit
    } else {
        Input::Question(line)
    }
}

/// Interactive chat session.
pub struct Repl {
    assistant: Assistant,
    editor: Editor<(), DefaultHistory>,
    show_tools: bool,
}

impl Repl {
    pub fn new(assistant: Assistant, show_tools: bool) -> Result<Self> {
        let config = Config::builder()
            .history_ignore_space(true)
            .auto_add_history(true)
            .build();
        let editor = Editor::<(), DefaultHistory>::with_config(config)?;

        Ok(Self {
            assistant,
            editor,
            show_tools,
        })
    }

    /// Run until the user exits or input ends.
    pub async fn run(&mut self) -> Result<()> {
        self.print_welcome();

        let prompt = format!("{} ", style("you>").cyan().bold());

        loop {
            match self.editor.readline(&prompt) {
                Ok(line) => match classify(&line) {
                    Input::Skip => continue,
                    Input::Exit => break,
                    Input::Question(question) => self.answer(question).await,
                },
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => {
                    print_error(&format!("Input error: {}", e));
                    break;
                }
            }
        }

        print_dim("Goodbye!");
        Ok(())
    }

    /// Answer one question; errors are reported and the session continues.
    async fn answer(&self, question: &str) {
        match self.assistant.turn(question).await {
            Ok(response) => {
                if self.show_tools {
                    print_tool_calls(&response.tool_calls);
                }
                println!("{} {}", style("nimbus>").green().bold(), response.text);
                println!();
            }
            Err(e) => {
                tracing::warn!(error = %e, "turn failed");
                print_error(&e.to_string());
                println!();
            }
        }
    }

    fn print_welcome(&self) {
        let term = Term::stdout();
        let width = term.size().1.clamp(20, 60) as usize;

        println!();
        println!("{}", style("Nimbus Weather Chat").bold().cyan());
        println!("{}", style("─".repeat(width)).dim());
        println!(
            "{}",
            style(format!(
                "{} tools available. Type 'exit', 'quit' or 'q' to leave.",
                self.assistant.tools().len()
            ))
            .dim()
        );
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_blank_lines() {
        assert_eq!(classify(""), Input::Skip);
        assert_eq!(classify("   \t"), Input::Skip);
    }

    #[test]
    fn test_classify_exit_words() {
        assert_eq!(classify("exit"), Input::Exit);
        assert_eq!(classify("QUIT"), Input::Exit);
        assert_eq!(classify("  q  "), Input::Exit);
    }

    #[test]
    fn test_classify_question_is_trimmed() {
        assert_eq!(
            classify("  weather in Paris?  "),
            Input::Question("weather in Paris?")
        );
        assert_eq!(classify("quit smoking"), Input::Question("quit smoking"));
    }
}
