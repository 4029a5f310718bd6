//! # Parley Core
//!
//! Core library for Parley - a console prompting toolkit for interactive
//! CLI applications.
//!
//! This crate provides the prompt engine, console abstractions, and
//! integration data models independent of any particular binary.
//!
//! ## Architecture
//!
//! - **prompt**: The generic prompt/convert/validate/retry engine
//! - **console**: Line-oriented I/O abstraction (stdin/stdout and scripted)
//! - **diagnostics**: Optional message sink injected into the engine
//! - **integrations**: Passive data models for GitHub webhooks and the
//!   StackExchange API
//!
//! ## Example
//!
//! ```no_run
//! use parley_core::console::StdConsole;
//! use parley_core::prompt::{PromptRequest, Prompter};
//!
//! let mut prompter = Prompter::new(StdConsole::new());
//! let port: u16 = prompter
//!     .prompt(PromptRequest::optional("Port", 8080))
//!     .expect("console I/O failed");
//! ```

pub mod console;
pub mod diagnostics;
pub mod error;
pub mod integrations;
pub mod prompt;

pub use console::Console;
pub use error::{ParleyError, Result};
pub use prompt::{PromptMode, PromptOutcome, PromptRequest, Prompter};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
