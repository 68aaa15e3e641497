use serde::Deserialize;

/// Input JSON from the Claude Code hook system.
///
/// The session hooks never branch on request content; which hook runs is
/// fixed by the subcommand. Every field is optional so that host-side
/// additions (or a bare `{}`) parse cleanly, and the fields we do know
/// about are surfaced in debug logs when present.
#[derive(Debug, Deserialize)]
pub struct HookInput {
    pub session_id: Option<String>,
    pub hook_event_name: Option<String>,
    #[allow(dead_code)]
    pub cwd: Option<String>,
    #[allow(dead_code)]
    pub transcript_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_parses() {
        let input: HookInput = serde_json::from_str("{}").unwrap();
        assert!(input.session_id.is_none());
        assert!(input.hook_event_name.is_none());
    }

    #[test]
    fn test_full_payload_parses() {
        let input: HookInput = serde_json::from_str(
            r#"{
                "session_id": "abc123",
                "hook_event_name": "SessionStart",
                "cwd": "/home/user/proj",
                "transcript_path": "/tmp/transcript.jsonl"
            }"#,
        )
        .unwrap();
        assert_eq!(input.session_id.as_deref(), Some("abc123"));
        assert_eq!(input.hook_event_name.as_deref(), Some("SessionStart"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let input: HookInput =
            serde_json::from_str(r#"{"session_id":"s","some_future_field":42}"#).unwrap();
        assert_eq!(input.session_id.as_deref(), Some("s"));
    }

    #[test]
    fn test_non_object_json_is_rejected() {
        assert!(serde_json::from_str::<HookInput>("[1,2,3]").is_err());
    }
}
