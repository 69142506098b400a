//! Hwbot Core
//!
//! Domain types and pure validation logic for the homework status watcher.
//!
//! This crate contains:
//! - Domain types: homework statuses, the verdict table, typed records
//! - Response validation: turning a raw API payload into a typed `PollResult`
//!
//! Everything here is side-effect free; fetching and notification live in
//! the client and watcher crates.

pub mod domain;
pub mod response;

pub use domain::record::{HomeworkRecord, RecordError};
pub use domain::status::HomeworkStatus;
pub use response::{PollResult, SchemaError};
