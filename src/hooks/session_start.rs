use crate::dg;
use crate::response::HookResponse;
use std::path::Path;

/// Marker directory for the start hook (note the leading dot; the stop
/// hook uses the undotted name).
const ACTIVATION_DIR: &str = ".decisions";

const REMINDER: &str = "📊 Decision Graph Active

This project uses `dg` to track decisions, strategies, ADRs, incidents, and more.
When you make decisions or discover important context, consider capturing it:
- `/decision` - business decisions
- `/adr` - technical/architecture decisions
- `/incident` - post-mortems
- `/runbook` - operational how-tos

Before making changes, check if related records exist: `dg search <topic>`
If something conflicts with existing decisions, ask the user for clarification.";

/// Session start: if the decision graph is set up, remind the assistant to
/// consult and record decisions, with current stats and recent records when
/// the `dg` tool can provide them.
pub async fn run(root: &Path) -> HookResponse {
    if !super::is_active(root, ACTIVATION_DIR) {
        tracing::debug!("decision graph not set up, staying quiet");
        return HookResponse::passthrough();
    }

    // Both queries are independent; run them together and merge their
    // results in fixed order below, whichever finishes first.
    let (stats, recent) = tokio::join!(dg::stats(), dg::recent_records());

    HookResponse::with_message(compose(stats.as_deref(), recent.as_deref()))
}

/// Fixed template plus whichever supplementary sections are available.
/// A missing section leaves no placeholder; the message just ends earlier.
fn compose(stats: Option<&str>, recent: Option<&str>) -> String {
    let mut message = REMINDER.to_string();

    if let Some(stats) = stats {
        message.push_str("\n\nCurrent stats:\n");
        message.push_str(stats);
    }

    if let Some(recent) = recent {
        message.push_str("\n\nRecent records:\n");
        message.push_str(recent);
    }

    message
}
