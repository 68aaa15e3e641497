use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

mod dg;
mod hooks;
mod input;
mod response;

use input::HookInput;
use response::HookResponse;

/// Session lifecycle hooks connecting Claude Code to the decision graph.
///
/// Each subcommand is registered for one hook event in .claude/settings.json
/// and speaks the hook protocol: one JSON request on stdin, one JSON
/// response on stdout. Diagnostics go to stderr only.
#[derive(Parser)]
#[command(name = "dg-hooks", version, about = "Claude Code session hooks for the decision graph")]
struct Cli {
    #[command(subcommand)]
    hook: Hook,
}

#[derive(Subcommand)]
enum Hook {
    /// Remind about decision-graph context when a session starts
    SessionStart,
    /// Prompt to capture decisions when a session stops
    SessionStop,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let request = read_request()?;

    tracing::debug!(
        session = request.session_id.as_deref().unwrap_or("unknown"),
        event = request.hook_event_name.as_deref().unwrap_or("unknown"),
        "hook invoked"
    );

    let root = hooks::project_root();
    let response = match cli.hook {
        Hook::SessionStart => hooks::session_start::run(&root).await,
        Hook::SessionStop => hooks::session_stop::run(&root),
    };

    write_response(&response)
}

/// Read the hook request from stdin. Malformed input is the one failure
/// that may exit non-zero: without a valid request there is no meaningful
/// hook behavior, and retry is the host's concern.
fn read_request() -> Result<HookInput> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read hook input from stdin")?;
    let request: HookInput =
        serde_json::from_str(&buffer).context("hook input is not valid JSON")?;
    Ok(request)
}

/// Write the single response document to stdout. Stdout is reserved for the
/// hook protocol; everything else in this binary logs to stderr.
fn write_response(response: &HookResponse) -> Result<()> {
    let encoded = serde_json::to_string(response).context("failed to encode hook response")?;
    #[allow(clippy::print_stdout)]
    {
        println!("{encoded}");
    }
    Ok(())
}
