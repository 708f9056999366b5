//! Conversions between display text and numbers
//!
//! Display surfaces hold text. Totals are `f64`. These helpers keep the two
//! in step the way a browser would: a leading-literal parse when an operand
//! is read, a whole-string coercion when a textual total meets arithmetic,
//! and the shortest round-trip form when a number is shown.

use std::sync::OnceLock;

use regex::Regex;

/// Leading decimal literal, optionally signed
#[allow(clippy::expect_used)]
fn float_prefix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
            .expect("float prefix pattern compiles")
    })
}

/// Converts a matched literal into a number
fn literal_value(literal: &str) -> f64 {
    let (negative, unsigned) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };

    let magnitude = if unsigned == "Infinity" {
        f64::INFINITY
    } else {
        unsigned.parse::<f64>().unwrap_or(f64::NAN)
    };

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Parses the longest leading decimal literal of `text`
///
/// Trailing garbage is ignored (`"5."` is 5, `"12abc"` is 12). Text with no
/// leading literal (`""`, `"-"`, `"."`) yields NaN.
#[must_use]
pub fn parse_float(text: &str) -> f64 {
    let trimmed = text.trim_start();
    float_prefix()
        .find(trimmed)
        .map_or(f64::NAN, |m| literal_value(m.as_str()))
}

/// Coerces the whole of `text` to a number
///
/// Empty or blank text is 0. Anything that is not a single decimal literal
/// is NaN.
#[must_use]
pub fn text_to_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match float_prefix().find(trimmed) {
        Some(m) if m.end() == trimmed.len() => literal_value(m.as_str()),
        _ => f64::NAN,
    }
}

/// Formats a number for a display surface
///
/// Integral values have no fraction, both zeros print as `0`, and magnitudes
/// outside `[1e-6, 1e21)` switch to exponent form (`1e+21`, `1.5e-7`).
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    if (1e-6..1e21).contains(&n.abs()) {
        return format!("{n}");
    }

    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}
