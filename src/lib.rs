pub mod checker;
pub mod cli;
pub mod commands;
pub mod comment;
pub mod config;
pub mod error;
pub mod matcher;
pub mod model;
pub mod output;
pub mod provider;
pub mod scanner;
pub mod stubber;

pub use error::{DocGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_DIAGNOSTICS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
