//! Plain-text formatting helpers for metrics and tables.

use colored::Colorize;
use rust_decimal::Decimal;

use crate::domain::UtilizationBand;

/// Formats a money amount as `₹1,234.56` with thousands grouping.
pub fn money(value: Decimal) -> String {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let grouped = group_thousands(int_part);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}₹{grouped}.{frac_part}")
}

pub fn percent(value: Decimal) -> String {
    format!("{}%", value.round_dp(2))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn print_header(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold().cyan());
}

pub fn print_metric(label: &str, value: &str) {
    println!("  {:<24} {}", label, value.bold());
}

pub fn print_success(message: &str) {
    println!("{} {}", "OK:".green().bold(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

pub fn print_info(message: &str) {
    println!("{message}");
}

/// Colors a utilization percentage by its band, matching the
/// green/orange/red presentation thresholds.
pub fn utilization_label(pct: Decimal, band: UtilizationBand) -> String {
    let text = percent(pct);
    match band {
        UtilizationBand::Low => text.green().to_string(),
        UtilizationBand::Medium => text.yellow().to_string(),
        UtilizationBand::High => text.red().to_string(),
    }
}

/// Signed amounts render green when non-negative, red otherwise.
pub fn signed_money(value: Decimal) -> String {
    if value >= Decimal::ZERO {
        money(value).green().to_string()
    } else {
        money(value).red().to_string()
    }
}
