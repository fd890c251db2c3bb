// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Access to the completion endpoint that drafts SQL. The rest of the
//! system only sees [`CompletionProvider`]; the Azure client is one
//! implementation behind that seam.

mod azure;
mod provider;

pub use azure::{AzureOpenAiClient, AzureOpenAiConfig, DEFAULT_API_VERSION};
pub use provider::{CompletionProvider, CompletionRequest, ProviderError};
