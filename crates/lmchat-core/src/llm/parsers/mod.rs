//! Response body parsing
//!
//! Provider bodies are parsed into a `serde_json::Value` tree that never
//! fails (malformed bodies become `Value::Null`) and then probed along ordered
//! candidate paths.

pub mod responses;

pub use responses::{
    CONTENT_PATHS, FINISH_REASON_PATH, PathSegment, ResponseParser, extract_error_detail,
};
