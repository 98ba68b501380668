//! Output formatting utilities for consistent CLI presentation.
//!
//! Standardized message helpers used across commands: red for errors, green
//! checkmarks for success, plain white for informational text, with blank
//! lines around each message for spacing.

use colored::*;

/// Formats and prints an error message with consistent styling
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_helpers_do_not_panic() {
        print_error("Test error message");
        print_success("Operation completed");
        print_info("Information message");
        print_section_header("Branches");
    }
}
