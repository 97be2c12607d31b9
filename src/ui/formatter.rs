//! Pure formatting functions for CLI output.
//!
//! This module contains all display/formatting logic. Functions here have no
//! side effects beyond printing; the `format_*` helpers are fully testable.

use console::style;

use crate::domain::{Comparison, Precision, Version};
use crate::host::DetectionWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Display a detection warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
pub fn display_detection_warning(warning: &DetectionWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

fn or_none(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Label/value rows describing every component of `version`.
///
/// Absent optional components are shown as `-`.
pub fn format_components(version: &Version) -> Vec<(&'static str, String)> {
    vec![
        ("beta", version.is_beta().to_string()),
        ("major", version.major().to_string()),
        ("minor", or_none(version.minor())),
        ("patch", or_none(version.patch())),
        ("pre-release", or_none(version.prerelease())),
        ("release candidate", or_none(version.release_candidate())),
        ("revision major", or_none(version.revision_major())),
        ("revision minor", or_none(version.revision_minor())),
    ]
}

/// Display the decomposed components and both renderings of a version.
pub fn display_version_details(version: &Version) {
    println!("\n{}", style("Components:").bold());
    for (label, value) in format_components(version) {
        println!("  {:<18} {}", label, value);
    }
    println!("\n{}", style("Renderings:").bold());
    println!("  {:<18} {}", "vanilla", style(version.render_plain()).cyan());
    println!("  {:<18} {}", "bukkit", style(version.render_full()).cyan());
}

/// One-line summary of a comparison, e.g. `1.12.2 is newer than 1.8 (precision: patch)`
pub fn format_comparison(
    left: &Version,
    right: &Version,
    precision: Precision,
    result: Comparison,
) -> String {
    let relation = match result {
        Comparison::Newer => "is newer than",
        Comparison::Same => "is the same as",
        Comparison::Older => "is older than",
    };
    format!(
        "{} {} {} (precision: {})",
        left.render_full(),
        relation,
        right.render_full(),
        precision
    )
}

/// Display the result of a comparison, coloured by outcome.
pub fn display_comparison(left: &Version, right: &Version, precision: Precision, result: Comparison) {
    let marker = match result {
        Comparison::Newer => style(result.to_string()).green(),
        Comparison::Same => style(result.to_string()).cyan(),
        Comparison::Older => style(result.to_string()).red(),
    };
    println!("{}: {}", marker, format_comparison(left, right, precision, result));
}
