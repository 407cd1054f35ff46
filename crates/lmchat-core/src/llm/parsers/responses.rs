//! Candidate-path extraction for chat-completions bodies

use crate::llm::providers::error_utils::{sanitize_error_text, truncate_error_text};
use serde_json::Value;

/// One step of a path into a JSON tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    Key(&'static str),
    Index(usize),
}

/// Where generated text may live, tried in order; first non-blank wins.
pub const CONTENT_PATHS: &[&[PathSegment]] = &[
    &[
        PathSegment::Key("choices"),
        PathSegment::Index(0),
        PathSegment::Key("message"),
        PathSegment::Key("content"),
    ],
    &[
        PathSegment::Key("choices"),
        PathSegment::Index(0),
        PathSegment::Key("text"),
    ],
    &[PathSegment::Key("response")],
    &[PathSegment::Key("output")],
];

pub const FINISH_REASON_PATH: &[PathSegment] = &[
    PathSegment::Key("choices"),
    PathSegment::Index(0),
    PathSegment::Key("finish_reason"),
];

/// Parser over a raw provider body
pub struct ResponseParser;

impl ResponseParser {
    /// Parse a raw body; anything that is not JSON yields `Value::Null`.
    pub fn parse_body(raw: &str) -> Value {
        serde_json::from_str(raw).unwrap_or(Value::Null)
    }

    /// Follow `path` from `root`
    pub fn lookup<'a>(root: &'a Value, path: &[PathSegment]) -> Option<&'a Value> {
        path.iter().try_fold(root, |node, segment| match segment {
            PathSegment::Key(key) => node.get(*key),
            PathSegment::Index(index) => node.get(*index),
        })
    }

    /// Non-blank trimmed string at `path`
    pub fn non_blank_str(root: &Value, path: &[PathSegment]) -> Option<String> {
        Self::lookup(root, path)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// First non-blank content along `paths`, trimmed
    pub fn extract_content(root: &Value, paths: &[&[PathSegment]]) -> Option<String> {
        paths
            .iter()
            .find_map(|path| Self::non_blank_str(root, path))
    }

    /// `choices[0].finish_reason`, when present and non-blank
    pub fn finish_reason(root: &Value) -> Option<String> {
        Self::non_blank_str(root, FINISH_REASON_PATH)
    }
}

/// Human-readable detail for a non-2xx body.
///
/// Priority: `error.message` (with `error.type` / `error.code` appended),
/// a string-valued `error`, top-level `message`, a truncated raw snippet,
/// and finally `"(no detail)"`.
pub fn extract_error_detail(root: &Value, raw: &str) -> String {
    if let Some(error) = root.get("error") {
        if let Some(message) = error.get("message").and_then(Value::as_str) {
            let mut qualifiers = Vec::new();
            if let Some(kind) = scalar_text(error.get("type")) {
                qualifiers.push(format!("type: {}", kind));
            }
            if let Some(code) = scalar_text(error.get("code")) {
                qualifiers.push(format!("code: {}", code));
            }
            let message = truncate_error_text(message.trim());
            return if qualifiers.is_empty() {
                message
            } else {
                format!("{} ({})", message, qualifiers.join(", "))
            };
        }
        if let Some(message) = error.as_str().map(str::trim).filter(|s| !s.is_empty()) {
            return truncate_error_text(message);
        }
    }

    if let Some(message) = ResponseParser::non_blank_str(root, &[PathSegment::Key("message")]) {
        return truncate_error_text(&message);
    }

    let raw = raw.trim();
    if raw.is_empty() {
        "(no detail)".to_string()
    } else {
        sanitize_error_text(raw)
    }
}

fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
