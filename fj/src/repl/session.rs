//! REPL session management

use clap::Parser;
use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use super::input::tokenize;
use crate::cli::{Command, ReplLine};
use crate::session::{JourneySession, banner};
use crate::store::Storage;

/// Interactive journey session
pub struct ReplSession<S: Storage> {
    journey: JourneySession<S>,
}

impl<S: Storage> ReplSession<S> {
    pub fn new(journey: JourneySession<S>) -> Self {
        Self { journey }
    }

    /// Run the REPL main loop
    pub async fn run(&mut self) -> Result<()> {
        println!();
        println!("{}", banner());
        println!();

        if let Some(reply) = self.journey.mount() {
            reply.print(false);
        }
        self.journey.execute(Command::Show).await?.print(false);

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            let prompt = format!("{} {} ", self.journey.current_step().number(), "›".bright_green());
            match rl.readline(&prompt) {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(input);

                    if input.starts_with('/') {
                        match self.handle_slash_command(input) {
                            SlashResult::Continue => continue,
                            SlashResult::Quit => break,
                        }
                    } else {
                        self.process_line(input).await?;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    async fn process_line(&mut self, input: &str) -> Result<()> {
        debug!(%input, "ReplSession::process_line: called");
        let args = match tokenize(input) {
            Ok(args) => args,
            Err(e) => {
                println!("{} {}", "✗".red(), e);
                return Ok(());
            }
        };

        let command = match ReplLine::try_parse_from(args) {
            Ok(line) => line.command,
            Err(e) => {
                // clap renders help and usage errors itself
                let _ = e.print();
                return Ok(());
            }
        };

        if command == Command::Journey {
            println!("{}", "Already in the interactive journey.".dimmed());
            return Ok(());
        }

        let reply = self.journey.execute(command).await?;
        reply.print(true);
        Ok(())
    }

    fn handle_slash_command(&mut self, input: &str) -> SlashResult {
        let cmd = input.split_whitespace().next().unwrap_or("");

        match cmd {
            "/help" | "/h" => {
                self.print_help();
                SlashResult::Continue
            }
            "/quit" | "/q" | "/exit" => SlashResult::Quit,
            "/clear" | "/c" => {
                print!("\x1B[2J\x1B[H");
                SlashResult::Continue
            }
            _ => {
                println!("{} Unknown command: {}", "?".yellow(), cmd);
                println!("Type {} for available commands", "/help".yellow());
                SlashResult::Continue
            }
        }
    }

    fn print_help(&self) {
        println!();
        println!("{}", "Slash Commands:".bright_cyan());
        println!("  {:14} Show this help", "/help".yellow());
        println!("  {:14} Exit the journey", "/quit".yellow());
        println!("  {:14} Clear the screen", "/clear".yellow());
        println!();
        println!("{}", "Journey Commands:".bright_cyan());
        println!("  {:14} Show the current step", "show".yellow());
        println!("  {:14} Move between steps", "next | prev".yellow());
        println!("  {:14} Jump to step N (1-8)", "goto N".yellow());
        println!("  {:14} Step 1: income and expenses", "cash-flow".yellow());
        println!("  {:14} Step 2: assets and liabilities", "net-worth".yellow());
        println!("  {:14} Step 3: financial goals", "goals".yellow());
        println!("  {:14} Step 4: risk questionnaire", "risk".yellow());
        println!("  {:14} Step 5: wealth protection", "protection".yellow());
        println!("  {:14} Step 6: generate or explain", "plan".yellow());
        println!("  {:14} Step 7: monthly tracking", "track".yellow());
        println!("  {:14} Step 8: dashboard", "status".yellow());
        println!("  {:14} Start over", "reset".yellow());
        println!();
        println!("Add {} to any command for its options.", "--help".yellow());
        println!();
    }
}

enum SlashResult {
    Continue,
    Quit,
}
