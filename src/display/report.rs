//! Shared formatting helpers for terminal output

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Money;

/// Render rows as a table in the house style
pub fn table<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    Table::new(rows).with(Style::psql()).to_string()
}

/// Format an `f64` currency amount, rounded to minor units
pub fn format_amount(value: f64, symbol: &str) -> String {
    Money::from_f64(value).format_with_symbol(symbol)
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct.abs() < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate to at most `max_len` characters, marking the cut with "..."
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_rounds() {
        assert_eq!(format_amount(8_791.5887, "₹"), "₹8791.59");
        assert_eq!(format_amount(-12.5, "$"), "-$12.50");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(5.56), "5.6%");
        assert_eq!(format_percentage(80.01), "80%");
        assert_eq!(format_percentage(-50.0), "-50%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(format_bar(150.0, 100.0, 4), "████");
        assert_eq!(format_bar(0.0, 100.0, 3), "░░░");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("₹₹₹₹₹₹₹₹", 6), "₹₹₹...");
        assert_eq!(truncate("abcdef", 2), "..");
    }
}
