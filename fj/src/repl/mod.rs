//! Interactive journey
//!
//! A line-edited prompt accepting the same commands as the CLI, plus slash
//! commands. The saved journey is restored once when the REPL starts.

mod input;
mod session;

pub use input::{TokenizeError, tokenize};
pub use session::ReplSession;

use eyre::Result;

use crate::config::Config;
use crate::session::JourneySession;

/// Run the interactive journey
///
/// This is the main entry point for `fj journey` and for `fj` with no command.
pub async fn run_interactive(config: &Config) -> Result<()> {
    let journey = JourneySession::from_config(config)?;
    let mut session = ReplSession::new(journey);
    session.run().await
}
