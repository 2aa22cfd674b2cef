pub mod checks;
pub mod cli;
pub mod engine;
pub mod error;
pub mod output;
pub mod selector;
pub mod source;

pub use error::{Result, TsvGuardError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
