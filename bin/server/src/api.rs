//! JSON API routes.

pub mod questions;
