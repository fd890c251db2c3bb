// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Wire types for the ask endpoint. The envelope is the contract the
//! original clients depend on: a `success` flag plus either `sql`+`results`
//! or `error`, with the input query echoed back in both shapes.

mod dto;
mod errors;

pub use dto::{ask_response_from_outcome, AskRequestDto, AskResponseDto};
pub use errors::{ApiError, ApiErrorCode};
