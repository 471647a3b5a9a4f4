//! Local chat command against a fresh in-memory log.
//!
//! Useful for exercising the classifier and extractor without a database
//! or a running server. The log lives only as long as the process.

use std::io::Write;

use replog_core::{ConversationHandler, InteractionLog};
use tracing::info;

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Optional single message to send (non-interactive mode)
    pub message: Option<String>,
}

/// Strategy for executing the Chat command.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let handler = ConversationHandler::new();

        if let Some(message) = input.message {
            let reply = handler.handle(&message)?;
            println!("{}", reply.text);
            return Ok(());
        }

        println!("=== replog interaction assistant ===");
        println!("Type 'exit', 'quit', or Ctrl+C to end the session.\n");

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            if std::io::stdin().read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();

            if matches!(line, "exit" | "quit" | "q") {
                break;
            }

            if line.is_empty() {
                continue;
            }

            match handler.handle(line) {
                Ok(reply) => println!("\n{}\n", reply.text),
                Err(e) => eprintln!("Error: {e}"),
            }
        }

        info!(
            "Session ended with {} logged interaction(s)",
            handler.log().len().unwrap_or(0)
        );
        Ok(())
    }
}
