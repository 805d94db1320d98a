// EclatChat V1 Backend Entry Point
// "The Brain" - rule-based advisor for the Éclat de Jardin chat panel

mod brain;
mod error;
mod models;
mod session;
#[cfg(test)]
mod tests;

use std::env;
use std::io::Write as _;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use brain::AssistantBrain;
use error::AppError;
use session::ChatSession;

/// Simulated typing delay before a bot reply is shown, matching the
/// website chat panel. Cosmetic only - the classification is synchronous.
const TYPING_DELAY_MS: u64 = 600;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let brain = AssistantBrain::new();
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        run_interactive(&brain).await?;
    } else {
        run_one_shot(&brain, &args.join(" "))?;
    }

    Ok(())
}

/// One-shot mode: classify a single message and print the outcome as JSON.
fn run_one_shot(brain: &AssistantBrain, message: &str) -> Result<(), AppError> {
    let reply = brain.analyze(message);
    println!("{}", serde_json::to_string_pretty(&reply)?);
    Ok(())
}

/// Interactive mode: a terminal stand-in for the website chat panel.
async fn run_interactive(brain: &AssistantBrain) -> Result<(), AppError> {
    let mut session = ChatSession::new();
    info!(session_id = %session.id(), "chat session started");

    session.push_bot(brain.welcome());
    println!("bot> {}\n", brain.welcome());
    println!("(tapez votre message, /quit pour terminer)\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("vous> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let message = line.trim();
        // The chat panel only submits non-empty input.
        if message.is_empty() {
            continue;
        }
        if message == "/quit" || message == "/exit" {
            break;
        }

        let reply = session.submit(brain, message);
        tokio::time::sleep(Duration::from_millis(TYPING_DELAY_MS)).await;
        println!("bot> {}\n", reply);
    }

    info!(messages = session.messages().len(), "chat session closed");
    Ok(())
}
