//! Core operations.
//!
//! This module contains the business logic for modgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod create;
pub mod generate;

pub use create::create;
pub use generate::generate;
