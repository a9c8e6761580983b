//! Jobwatch Core
//!
//! Core types for the jobwatch status watcher.
//!
//! This crate contains:
//! - Domain types: job identifiers and the status report wire format
//! - Classification: the pending/terminal state distinction the poller
//!   and CLI both rely on

pub mod domain;

pub use domain::job::{InvalidJobId, JobId};
pub use domain::status::{JobState, PENDING_STATUS, StatusReport, TerminalStatus};
