//! Terminal output for the CLI.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use deployenv::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Deployment settings");
//! ui.show_field("Environment", "development");
//! assert!(ui.has_field("Environment", "development"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, DeployEnvTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a labelled value (e.g., "Environment: production").
    fn show_field(&mut self, key: &str, value: &str);

    /// Write machine-readable output verbatim.
    ///
    /// Unlike [`UserInterface::message`], this ignores the output mode so
    /// scripts piping the output always receive it.
    fn data(&mut self, text: &str);
}
