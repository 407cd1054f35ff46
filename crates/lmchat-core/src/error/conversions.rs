//! Conversions out of LmChatError

use super::types::LmChatError;
use crate::llm::result::ChatFailure;

/// Fold an internal error into the client's failure taxonomy
impl From<LmChatError> for ChatFailure {
    fn from(error: LmChatError) -> Self {
        match &error {
            LmChatError::Config { message, .. } => {
                ChatFailure::invalid_configuration(format!("Invalid configuration: {}", message))
            }
            LmChatError::InvalidInput { message, .. } => ChatFailure::invalid_input(message),
            LmChatError::Http { .. } | LmChatError::Io { .. } => {
                let description = match error.context() {
                    Some(context) => format!("{} ({})", error, context),
                    None => error.to_string(),
                };
                ChatFailure::unhandled(description)
            }
        }
    }
}
