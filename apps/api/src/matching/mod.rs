//! Scholarship matching — the service's single business operation.
//!
//! Pipeline: validate profile → build prompt → one model call → permissive
//! decode → typed response.

pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
