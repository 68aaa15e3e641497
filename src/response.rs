use serde::Serialize;

/// Response written to stdout for the Claude Code hook system.
///
/// `continue` is always true: these hooks only ever add a reminder, and a
/// failure anywhere in this binary must never read as "abort the session".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HookResponse {
    #[serde(rename = "continue")]
    pub continue_session: bool,
    /// Reminder text shown to the user; absent when the decision graph is
    /// not set up for this project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HookResponse {
    /// Minimal response: let the session proceed, say nothing.
    pub fn passthrough() -> Self {
        Self {
            continue_session: true,
            message: None,
        }
    }

    /// Response carrying a reminder message.
    pub fn with_message(message: String) -> Self {
        Self {
            continue_session: true,
            message: Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_serializes_minimal() {
        let json = serde_json::to_string(&HookResponse::passthrough()).unwrap();
        assert_eq!(json, r#"{"continue":true}"#);
    }

    #[test]
    fn test_message_serializes_under_continue() {
        let json =
            serde_json::to_string(&HookResponse::with_message("line one\nline two".to_string()))
                .unwrap();
        assert_eq!(json, r#"{"continue":true,"message":"line one\nline two"}"#);
    }

    #[test]
    fn test_continue_key_is_renamed() {
        let value = serde_json::to_value(HookResponse::passthrough()).unwrap();
        assert_eq!(value.get("continue"), Some(&serde_json::Value::Bool(true)));
        assert!(value.get("continue_session").is_none());
    }
}
