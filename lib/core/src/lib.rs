//! Core domain types and utilities for the studydesk platform.
//!
//! This crate provides the foundational identifiers and error handling
//! shared by the access layer and the admin dashboard server.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{ParseIdError, TaskId, UserId};
