//! Database repositories for the admin dashboard.
//!
//! This module provides data access for:
//! - Users and their role labels
//! - Tasks authored from the dashboard
//! - Learner questions awaiting an answer

pub mod questions;
pub mod tasks;
pub mod users;

pub use questions::QuestionRepository;
pub use tasks::TaskRepository;
pub use users::UserRepository;
