//! Domain types
//!
//! Core entities of the watcher: review statuses with their verdict text,
//! and the typed homework record parsed from the API payload.

pub mod record;
pub mod status;
