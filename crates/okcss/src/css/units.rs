//! Unit-suffixed number parsing and number formatting.
//!
//! Each parser accepts an optional sign, digits and at most one decimal point,
//! followed by its unit suffix. Anything else is `None`; nothing here panics
//! and no parser returns a non-finite number.

/// Parses `12px`, `-3.5px` or a bare `12`.
pub fn parse_px(token: &str) -> Option<f64> {
    parse_with_optional_suffix(token, "px")
}

/// Parses `50%` or a bare `50`.
pub fn parse_pct(token: &str) -> Option<f64> {
    parse_with_optional_suffix(token, "%")
}

/// Parses `90deg` or a bare `90`.
pub fn parse_deg(token: &str) -> Option<f64> {
    parse_with_optional_suffix(token, "deg")
}

/// Parses a duration into milliseconds: `300ms` or `0.3s`.
///
/// Bare numbers are rejected because CSS durations always carry a unit.
pub fn parse_ms(token: &str) -> Option<f64> {
    let token = token.trim();
    if let Some(ms) = token.strip_suffix("ms") {
        return parse_plain_number(ms);
    }
    token
        .strip_suffix('s')
        .and_then(parse_plain_number)
        .map(|secs| secs * 1000.0)
}

/// Parses a unitless number such as `1.25` or `-0.55`.
pub fn parse_number(token: &str) -> Option<f64> {
    parse_plain_number(token.trim())
}

fn parse_with_optional_suffix(token: &str, suffix: &str) -> Option<f64> {
    let token = token.trim();
    parse_plain_number(token.strip_suffix(suffix).unwrap_or(token))
}

fn parse_plain_number(s: &str) -> Option<f64> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    let well_formed = !digits.is_empty()
        && digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.matches('.').count() <= 1;
    if !well_formed {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Formats a number the way CSS authors write it: `4`, `0.5`, `-12.25`.
///
/// Negative zero prints as `0`.
pub fn fmt_num(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    format!("{}", n)
}

/// Rounds to `decimals` places, half away from zero.
pub fn round_to(n: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (n * factor).round() / factor
}
