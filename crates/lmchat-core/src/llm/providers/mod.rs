//! Provider-specific adapters

pub mod azure;
pub mod error_utils;
pub mod openai;
pub mod provider_trait;
pub mod request_builder;

pub use azure::AzureAdapter;
pub use openai::OpenAiCompatibleAdapter;
pub use provider_trait::{ProviderAdapter, ProviderInstance};
