//! Outbound formatting: webhook payloads, session-log rows, and console
//! rendering.

pub mod console;
mod format;

pub use format::{format_post_payload, format_session_tsv_header, format_session_tsv_row};
