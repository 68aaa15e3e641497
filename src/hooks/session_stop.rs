use crate::response::HookResponse;
use std::path::Path;

/// Marker directory for the stop hook (no leading dot; the start hook uses
/// the dotted name).
const ACTIVATION_DIR: &str = "decisions";

const REMINDER: &str = "💡 Session ending - consider capturing any decisions made:
- Important technical choices → `/adr`
- Business decisions → `/decision`
- New processes defined → `dg new process`
- Incidents discussed → `/incident`";

/// Session stop: if the decision graph is set up, prompt to capture
/// decisions made during the session. No external queries on this path.
pub fn run(root: &Path) -> HookResponse {
    if !super::is_active(root, ACTIVATION_DIR) {
        tracing::debug!("decision graph not set up, staying quiet");
        return HookResponse::passthrough();
    }

    HookResponse::with_message(REMINDER.to_string())
}
