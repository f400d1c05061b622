//! Miscellaneous helper utilities.

use crate::models::SpreadEstimate;
use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{Signed, Zero};
use std::str::FromStr;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize `tracing` subscriber with env-based filter.
///
/// If `RUST_LOG` is not set, defaults to `info` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// How the integer part of a rendered decimal is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntegerStyle {
    /// `#,##0`: thousands separators, at least one digit.
    Grouped,
    /// `0`: plain digits.
    Plain,
    /// `#`: a zero integer part is omitted entirely.
    Optional,
}

/// Render a number as a compact human string.
///
/// * values below `reciprocal_threshold` in magnitude are written as `1/x`
///   with `x` rounded to one decimal
/// * everything else is rounded half-to-even to `significant_digits`
///   decimals, grouped by thousands, trailing zeros trimmed unless
///   `force_decimals` is set
///
/// Rounding works on the value's 15 significant decimal digits, so `2.675`
/// rounds to `2.68` rather than following its binary expansion.
pub fn format_number(
    value: f64,
    significant_digits: u32,
    reciprocal_threshold: f64,
    force_decimals: bool,
) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.abs() <= 1e-10 {
        return "~0".to_string();
    }

    if value.abs() < reciprocal_threshold {
        return match decimal_from_f64(1.0 / value) {
            Some(inverse) => format!(
                "1/{}",
                render_decimal(
                    &inverse,
                    1,
                    RoundingMode::HalfEven,
                    IntegerStyle::Optional,
                    false
                )
            ),
            None => "1/∞".to_string(),
        };
    }

    match decimal_from_f64(value) {
        Some(decimal) => render_decimal(
            &decimal,
            significant_digits,
            RoundingMode::HalfEven,
            IntegerStyle::Grouped,
            force_decimals,
        ),
        None if value.is_sign_negative() => "-∞".to_string(),
        None => "∞".to_string(),
    }
}

/// `"Unknown"` or the percentage rounded half away from zero, e.g. `"13%"`.
pub fn format_spread(spread: SpreadEstimate) -> String {
    match spread.percent().and_then(decimal_from_f64) {
        Some(percent) => format!(
            "{}%",
            render_decimal(
                &percent,
                0,
                RoundingMode::HalfUp,
                IntegerStyle::Plain,
                false
            )
        ),
        None => "Unknown".to_string(),
    }
}

fn decimal_from_f64(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    BigDecimal::from_str(&format!("{:.14e}", value)).ok()
}

fn render_decimal(
    value: &BigDecimal,
    scale: u32,
    mode: RoundingMode,
    style: IntegerStyle,
    force_decimals: bool,
) -> String {
    let rounded = value.with_scale_round(i64::from(scale), mode);
    let negative = rounded.is_negative() && !rounded.is_zero();
    let (mantissa, _) = rounded.abs().as_bigint_and_exponent();

    let scale = scale as usize;
    let mut digits = mantissa.to_string();
    if digits.len() <= scale {
        digits = format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits);
    }
    let (int_part, frac_part) = digits.split_at(digits.len() - scale);
    let frac_part = if force_decimals {
        frac_part
    } else {
        frac_part.trim_end_matches('0')
    };

    let int_text = match style {
        IntegerStyle::Grouped => group_thousands(int_part),
        IntegerStyle::Plain => int_part.to_string(),
        IntegerStyle::Optional if int_part == "0" => String::new(),
        IntegerStyle::Optional => int_part.to_string(),
    };

    let mut out = String::with_capacity(int_text.len() + frac_part.len() + 2);
    if negative {
        out.push('-');
    }
    out.push_str(&int_text);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
