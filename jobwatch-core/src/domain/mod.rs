//! Core domain types
//!
//! This module contains the domain structures shared between the client
//! library and the CLI.

pub mod job;
pub mod status;
