use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Bound on a single `dg` invocation. The hook must respond promptly even
/// when the tool hangs.
const DG_TIMEOUT: Duration = Duration::from_secs(5);

/// Summary statistics for the decision graph.
pub async fn stats() -> Option<String> {
    capture("dg", &["stats", "--quiet"], DG_TIMEOUT).await
}

/// The five most recent records in the graph.
pub async fn recent_records() -> Option<String> {
    capture("dg", &["list", "--limit", "5"], DG_TIMEOUT).await
}

/// Run a program and capture its trimmed stdout.
///
/// Returns None on any failure: spawn error (binary missing), timeout,
/// I/O error, non-zero exit, or empty output. Nothing propagates past this
/// function; a lost query only costs the reminder a section.
async fn capture(program: &str, args: &[&str], timeout: Duration) -> Option<String> {
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn();

    let child = match child {
        Ok(child) => child,
        Err(e) => {
            tracing::debug!(program, error = %e, "failed to spawn");
            return None;
        }
    };

    let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            tracing::debug!(program, error = %e, "process error");
            return None;
        }
        Err(_) => {
            tracing::debug!(program, ?args, "timed out after {}s", timeout.as_secs());
            return None;
        }
    };

    if !output.status.success() {
        tracing::debug!(program, status = ?output.status.code(), "exited non-zero");
        return None;
    }

    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
