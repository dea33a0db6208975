pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod rules;
pub mod scanner;

pub use error::{GuidelineGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_GUIDELINES_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
