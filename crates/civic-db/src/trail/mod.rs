//! JSONL trail of portal mutations.
//!
//! Per-session JSONL files live in the configured trail directory
//! (`.civic/trail/` by default) and record every mutation in order.

pub mod writer;
