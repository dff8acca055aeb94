//! Common utility functions shared across the codebase.

/// Format a survey code the way language-key entries are stored.
///
/// Integral codes get a `.0` suffix; anything else keeps its plain form.
///
/// # Examples
///
/// ```
/// use acslang::utils::code_key;
///
/// assert_eq!(code_key(1200.0), "1200.0");
/// assert_eq!(code_key(12.5), "12.5");
/// ```
pub fn code_key(code: f64) -> String {
    if is_integral(code) {
        format!("{}.0", code as i64)
    } else {
        code.to_string()
    }
}

/// Format a number for CSV output, dropping the fraction of integral values.
pub fn display_number(value: f64) -> String {
    if is_integral(value) {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64
}

/// Pick the singular or plural form of a noun for a count.
pub fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
