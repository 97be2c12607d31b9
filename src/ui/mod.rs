//! User interface module - console output for the CLI.
//!
//! - `formatter` - Pure formatting and printing functions

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_comparison, display_detection_warning, display_error, display_success,
    display_version_details, format_comparison, format_components,
};
