//! studydesk admin dashboard server.
//!
//! Role management, task authoring, and question statistics for the
//! studydesk learning platform, gated by the platform access guard.

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod pages;
pub mod store;

#[cfg(test)]
mod testing;
