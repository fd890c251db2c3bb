// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! The NL-to-SQL core: free text in, envelope out. Translation is total
//! (the fallback rule table absorbs every model failure); only a genuine
//! execution failure against the store reaches the caller.

mod executor;
mod fallback;
mod service;
mod translator;

pub use executor::{execute_select, open_store_readonly, ExecError};
pub use fallback::{fallback_sql, fallback_statement};
pub use service::QueryService;
pub use translator::{system_prompt, Translation, TranslationSource, Translator};
