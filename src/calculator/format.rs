//! Display formatting for calculator results.
//!
//! Results are rounded to six decimal places and re-rendered in the
//! shortest decimal form so floating-point artifacts never reach the
//! display (0.1 + 0.2 shows as "0.3").

/// Number of decimal places kept in a computed result.
const RESULT_PRECISION: usize = 6;

/// Round a finite value to six decimal places and render it without
/// trailing zeros.
pub fn format_result(value: f64) -> String {
    let rounded = format!("{:.*}", RESULT_PRECISION, value)
        .parse::<f64>()
        .unwrap_or(0.0);

    // Rounding can leave negative zero behind; the display never shows it.
    if rounded == 0.0 {
        return "0".to_string();
    }

    format!("{}", rounded)
}
